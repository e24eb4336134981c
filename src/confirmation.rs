//! Typed-confirmation tokens
//!
//! Before a bulk operation runs the user has to retype a short random string.
//! The token only guards against autopilot typing; it is not a secret.

use crate::error::ValidationError;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;

/// Shown when the typed text differs from the token
pub const MISMATCH_MESSAGE: &str = "sorry, confirmation text didn't match";

/// Generate `length` characters from the URL-safe base64 alphabet
///
/// The random buffer holds `ceil(length * 3 / 4)` bytes, which encodes to at
/// least `length` characters whose bits all come from the buffer. The result
/// is the first `length` characters of that encoding.
pub fn generate(length: usize) -> String {
    let mut buffer = vec![0u8; buffer_len(length)];
    rand::thread_rng().fill_bytes(&mut buffer);

    let mut encoded = URL_SAFE_NO_PAD.encode(&buffer);
    encoded.truncate(length);
    encoded
}

fn buffer_len(length: usize) -> usize {
    (length * 3).div_ceil(4)
}

/// Strict equality check between the displayed token and what was typed
pub fn validate_confirmation(expected: &str, typed: &str) -> Result<(), ValidationError> {
    if typed == expected {
        Ok(())
    } else {
        Err(ValidationError::new(MISMATCH_MESSAGE))
    }
}
