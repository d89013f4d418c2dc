//! src/decryptor/decrypt.rs
//! Vigenère decryption: backward shift

use crate::engine::{transform, Direction};
use crate::error::VigenereError;
use crate::key::Key;

/// Decrypt `message` with a raw key string.
///
/// Recovers the lowercased plaintext; original letter case is not part of the
/// ciphertext and cannot come back. Key validation matches [`crate::encrypt`].
#[inline]
pub fn decrypt(message: &str, key: &str) -> Result<String, VigenereError> {
    let key = Key::new(key)?;
    Ok(decrypt_with_key(message, &key))
}

/// Decrypt `message` with an already validated key.
#[inline]
#[must_use]
pub fn decrypt_with_key(message: &str, key: &Key) -> String {
    transform(message, key, Direction::Decrypt)
}
