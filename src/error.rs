//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! Every fallible operation returns [`Result<T, VigenereError>`](VigenereError).

use thiserror::Error;

/// The error type for all Vigenère operations.
///
/// Messages are never invalid input, so the only failure the cipher can report
/// is a key it cannot use.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VigenereError {
    /// The key cannot drive the cipher.
    ///
    /// Returned when:
    /// - the key is empty
    /// - the key contains a character outside `a`–`z` / `A`–`Z` under [`KeyPolicy::Reject`]
    /// - no letters remain after filtering under [`KeyPolicy::Sanitize`]
    ///
    /// [`KeyPolicy::Reject`]: crate::key::KeyPolicy::Reject
    /// [`KeyPolicy::Sanitize`]: crate::key::KeyPolicy::Sanitize
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

