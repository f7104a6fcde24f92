//! Key Validation Module
//!
//! Checks cache keys against the accepted alphabet and length limit.

use crate::error::{CacheError, Result};
use crate::pool::{MAX_KEY_LENGTH, RESERVED_CHARACTERS};

// == Validate Key ==
/// Validates a cache key and returns it verbatim.
///
/// A valid key holds 1 to `MAX_KEY_LENGTH` characters taken from ASCII
/// letters, digits, `_`, `.` and the reserved punctuation `{}()/\@:`.
/// No normalization is applied.
pub fn validate_key(key: &str) -> Result<&str> {
    if key.is_empty() {
        return Err(CacheError::InvalidKey("Key cannot be empty".to_string()));
    }

    if key.chars().count() > MAX_KEY_LENGTH {
        return Err(CacheError::InvalidKey(format!(
            "Key '{}' exceeds maximum length of {} characters",
            key, MAX_KEY_LENGTH
        )));
    }

    if let Some(invalid) = key.chars().find(|c| !is_accepted(*c)) {
        return Err(CacheError::InvalidKey(format!(
            "Key '{}' contains invalid character '{}'",
            key, invalid
        )));
    }

    Ok(key)
}

// == Validate Keys ==
/// Validates every key before any of them is used.
pub fn validate_keys<S: AsRef<str>>(keys: &[S]) -> Result<()> {
    for key in keys {
        validate_key(key.as_ref())?;
    }
    Ok(())
}

fn is_accepted(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.' || RESERVED_CHARACTERS.contains(c)
}
