//! Operations offered in the main menu

/// Entry in the "Choose operation" menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Delete,
    Archive,
    Exit,
}

impl Operation {
    /// Menu entries in display order
    pub const ALL: [Operation; 3] = [Operation::Delete, Operation::Archive, Operation::Exit];

    pub fn menu_label(self) -> &'static str {
        match self {
            Operation::Delete => "Bulk: Delete repositories",
            Operation::Archive => "Bulk: Archive repositories",
            Operation::Exit => "Exit",
        }
    }

    /// The repository mutation this entry stands for, `None` for `Exit`
    pub fn bulk_action(self) -> Option<BulkAction> {
        match self {
            Operation::Delete => Some(BulkAction::Delete),
            Operation::Archive => Some(BulkAction::Archive),
            Operation::Exit => None,
        }
    }
}

/// A mutation applied to every selected repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Delete,
    Archive,
}

impl BulkAction {
    /// Used in "3 repos will be deleted"
    pub fn past_tense(self) -> &'static str {
        match self {
            BulkAction::Delete => "deleted",
            BulkAction::Archive => "archived",
        }
    }

    /// Used in the per-repository report, "Deleted my-repo"
    pub fn report_label(self) -> &'static str {
        match self {
            BulkAction::Delete => "Deleted",
            BulkAction::Archive => "Archived",
        }
    }

    /// Used in the progress label, "Deleting repositories..."
    pub fn in_progress(self) -> &'static str {
        match self {
            BulkAction::Delete => "Deleting",
            BulkAction::Archive => "Archiving",
        }
    }
}
