//! Common test support utilities and fixtures
//!
//! Provides a scripted [`Prompter`] that answers prompts from a queue and a
//! [`RepositoryApi`] double that records every call.

#![allow(dead_code)]

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use gh_sweep::RepositoryApi;
use gh_sweep::github::User;
use gh_sweep::prompt::{
    ConfirmSpec, InputSpec, MultiSelectSpec, PromptError, Prompter, SelectSpec,
};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;

pub const LOGIN: &str = "octocat";
pub const CONFIRM_TITLE: &str = "Confirm the text?";

/// Menu indices, in display order
pub const DELETE: usize = 0;
pub const ARCHIVE: usize = 1;
pub const EXIT: usize = 2;

/// A scripted reply to the next prompt
#[derive(Debug, Clone)]
pub enum Answer {
    Select(usize),
    Text(String),
    /// Type the hint shown with the current prompt
    EchoHint,
    /// Type the confirmation token shown by the confirmation prompt before this one
    EchoPreviousToken,
    Pick(Vec<usize>),
    Confirm(bool),
    Abort,
}

pub fn text(value: &str) -> Answer {
    Answer::Text(value.to_string())
}

/// What a prompt looked like when it was shown
#[derive(Debug, Clone, PartialEq)]
pub enum PromptRecord {
    Select {
        title: String,
        items: Vec<String>,
    },
    Input {
        title: String,
        hint: Option<String>,
    },
    MultiSelect {
        title: String,
        options: Vec<String>,
        height: usize,
    },
    Confirm {
        title: String,
        default: bool,
    },
}

/// Answers prompts from a queue; an empty queue aborts
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub prompts: Vec<PromptRecord>,
    tokens: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            prompts: Vec::new(),
            tokens: Vec::new(),
        }
    }

    fn next(&mut self) -> Answer {
        self.answers.pop_front().unwrap_or(Answer::Abort)
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Distinct confirmation tokens shown so far
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Hints of every confirmation prompt shown, re-prompts included
    pub fn confirmation_hints(&self) -> Vec<String> {
        self.prompts
            .iter()
            .filter_map(|p| match p {
                PromptRecord::Input { title, hint } if title == CONFIRM_TITLE => hint.clone(),
                _ => None,
            })
            .collect()
    }

    pub fn confirm_titles(&self) -> Vec<String> {
        self.prompts
            .iter()
            .filter_map(|p| match p {
                PromptRecord::Confirm { title, .. } => Some(title.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn multi_select_count(&self) -> usize {
        self.prompts
            .iter()
            .filter(|p| matches!(p, PromptRecord::MultiSelect { .. }))
            .count()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, spec: &SelectSpec<'_>) -> Result<usize, PromptError> {
        self.prompts.push(PromptRecord::Select {
            title: spec.title.to_string(),
            items: spec.items.iter().map(|s| s.to_string()).collect(),
        });
        match self.next() {
            Answer::Select(index) => Ok(index),
            Answer::Abort => Err(PromptError::Aborted),
            other => panic!("select prompt '{}' got {:?}", spec.title, other),
        }
    }

    fn input(&mut self, spec: &InputSpec<'_>) -> Result<String, PromptError> {
        let hint = spec.hint.map(str::to_string);
        if spec.validator.is_some()
            && let Some(token) = &hint
            && self.tokens.last() != Some(token)
        {
            self.tokens.push(token.clone());
        }
        self.prompts.push(PromptRecord::Input {
            title: spec.title.to_string(),
            hint: hint.clone(),
        });

        match self.next() {
            Answer::Text(value) => Ok(value),
            Answer::EchoHint => Ok(hint.unwrap_or_default()),
            Answer::EchoPreviousToken => Ok(self
                .tokens
                .iter()
                .rev()
                .nth(1)
                .cloned()
                .expect("no earlier confirmation token")),
            Answer::Abort => Err(PromptError::Aborted),
            other => panic!("input prompt '{}' got {:?}", spec.title, other),
        }
    }

    fn multi_select(&mut self, spec: &MultiSelectSpec<'_>) -> Result<Vec<usize>, PromptError> {
        self.prompts.push(PromptRecord::MultiSelect {
            title: spec.title.to_string(),
            options: spec.options.iter().map(|o| o.label.clone()).collect(),
            height: spec.height,
        });
        match self.next() {
            Answer::Pick(indices) => Ok(indices),
            Answer::Abort => Err(PromptError::Aborted),
            other => panic!("multi-select prompt '{}' got {:?}", spec.title, other),
        }
    }

    fn confirm(&mut self, spec: &ConfirmSpec<'_>) -> Result<bool, PromptError> {
        self.prompts.push(PromptRecord::Confirm {
            title: spec.title.to_string(),
            default: spec.default,
        });
        match self.next() {
            Answer::Confirm(value) => Ok(value),
            Answer::Abort => Err(PromptError::Aborted),
            other => panic!("confirm prompt '{}' got {:?}", spec.title, other),
        }
    }
}

/// A call made against [`RecordingApi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    CurrentUser,
    Search { expression: String, per_page: u32 },
    Delete { owner: String, repo: String },
    Archive { owner: String, repo: String },
}

/// In-memory API that serves a fixed search result and records calls
pub struct RecordingApi {
    search_body: Value,
    search_fails: bool,
    failing_repos: Vec<String>,
    calls: Mutex<Vec<ApiCall>>,
}

impl RecordingApi {
    /// Search returns one item per name
    pub fn with_repositories(names: &[&str]) -> Self {
        let items: Vec<Value> = names.iter().map(|name| json!({ "name": name })).collect();
        Self::with_search_body(json!({ "total_count": items.len(), "items": items }))
    }

    pub fn with_search_body(search_body: Value) -> Self {
        Self {
            search_body,
            search_fails: false,
            failing_repos: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_search() -> Self {
        Self {
            search_fails: true,
            ..Self::with_repositories(&[])
        }
    }

    /// Make delete/archive of `repo` fail
    pub fn fail_on(mut self, repo: &str) -> Self {
        self.failing_repos.push(repo.to_string());
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Delete and archive calls only
    pub fn mutations(&self) -> Vec<ApiCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, ApiCall::Delete { .. } | ApiCall::Archive { .. }))
            .collect()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn mutate(&self, repo: &str, action: &str) -> Result<()> {
        if self.failing_repos.iter().any(|r| r == repo) {
            Err(anyhow!("Failed to {} {}/{} (403 Forbidden)", action, LOGIN, repo))
        } else {
            Ok(())
        }
    }
}

pub fn delete(repo: &str) -> ApiCall {
    ApiCall::Delete {
        owner: LOGIN.to_string(),
        repo: repo.to_string(),
    }
}

pub fn archive(repo: &str) -> ApiCall {
    ApiCall::Archive {
        owner: LOGIN.to_string(),
        repo: repo.to_string(),
    }
}

#[async_trait]
impl RepositoryApi for RecordingApi {
    async fn current_user(&self) -> Result<User> {
        self.record(ApiCall::CurrentUser);
        Ok(User {
            login: LOGIN.to_string(),
        })
    }

    async fn search_repositories(&self, expression: &str, per_page: u32) -> Result<Value> {
        self.record(ApiCall::Search {
            expression: expression.to_string(),
            per_page,
        });
        if self.search_fails {
            return Err(anyhow!("Failed to search repositories (401 Unauthorized)"));
        }
        Ok(self.search_body.clone())
    }

    async fn delete_repository(&self, owner: &str, repo: &str) -> Result<()> {
        self.record(ApiCall::Delete {
            owner: owner.to_string(),
            repo: repo.to_string(),
        });
        self.mutate(repo, "delete")
    }

    async fn archive_repository(&self, owner: &str, repo: &str) -> Result<()> {
        self.record(ApiCall::Archive {
            owner: owner.to_string(),
            repo: repo.to_string(),
        });
        self.mutate(repo, "update")
    }
}
