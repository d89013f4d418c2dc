//! src/encryptor/encrypt.rs
//! Vigenère encryption: forward shift

use crate::engine::{transform, Direction};
use crate::error::VigenereError;
use crate::key::Key;

/// Encrypt `message` with a raw key string.
///
/// The key is validated under [`KeyPolicy::Reject`](crate::key::KeyPolicy::Reject):
/// an empty key or one containing a non-letter fails with
/// [`VigenereError::InvalidKey`]. Any message is accepted.
#[inline]
pub fn encrypt(message: &str, key: &str) -> Result<String, VigenereError> {
    let key = Key::new(key)?;
    Ok(encrypt_with_key(message, &key))
}

/// Encrypt `message` with an already validated key.
#[inline]
#[must_use]
pub fn encrypt_with_key(message: &str, key: &Key) -> String {
    transform(message, key, Direction::Encrypt)
}
