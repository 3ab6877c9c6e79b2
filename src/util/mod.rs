//! Key-list parsing for the command-line harness
//!
//! The tree itself has no fallible operations; the only errors in the
//! crate come from turning user-provided text into keys.

use thiserror::Error;

/// Errors produced while parsing a key list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseKeysError {
    /// The input contained no keys at all.
    #[error("key list is empty")]
    Empty,
    /// A token could not be parsed as a signed integer key.
    #[error("invalid key '{token}' at position {position}")]
    InvalidKey {
        /// The offending token, verbatim.
        token: String,
        /// Zero-based position of the token in the list.
        position: usize,
    },
}

/// Parse a whitespace- or comma-separated list of integer keys.
///
/// Tokens are split on any mix of whitespace and commas; empty tokens
/// (e.g. from `"1,,2"` or trailing newlines) are skipped.
pub fn parse_keys(input: &str) -> Result<Vec<i64>, ParseKeysError> {
    let tokens = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty());

    let mut keys = Vec::new();
    for (position, token) in tokens.enumerate() {
        let key = token.parse().map_err(|_| ParseKeysError::InvalidKey {
            token: token.to_string(),
            position,
        })?;
        keys.push(key);
    }

    if keys.is_empty() {
        return Err(ParseKeysError::Empty);
    }
    Ok(keys)
}
