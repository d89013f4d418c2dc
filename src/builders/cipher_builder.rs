//! src/builders/cipher_builder.rs
//! Cipher builder: validate the key once, transform many messages

use crate::decryptor::decrypt_with_key;
use crate::encryptor::encrypt_with_key;
use crate::error::VigenereError;
use crate::key::{Key, KeyPolicy};

/// Builder for [`Cipher`].
///
/// Defaults to [`KeyPolicy::Reject`], the same policy the free functions use.
#[derive(Debug, Clone, Copy, Default)]
pub struct CipherBuilder {
    key_policy: KeyPolicy,
}

impl CipherBuilder {
    /// Create a builder with the default key policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose how non-letter key characters are handled.
    #[must_use]
    pub fn with_key_policy(mut self, policy: KeyPolicy) -> Self {
        self.key_policy = policy;
        self
    }

    /// Current key policy
    #[must_use]
    pub const fn key_policy(&self) -> KeyPolicy {
        self.key_policy
    }

    /// Parse `raw_key` and return a ready cipher.
    pub fn build(self, raw_key: &str) -> Result<Cipher, VigenereError> {
        let key = Key::parse(raw_key, self.key_policy)?;
        Ok(Cipher { key })
    }
}

/// A Vigenère cipher bound to one validated key.
///
/// # Thread Safety
///
/// This type is **thread-safe** (`Send + Sync`). Every call keeps its key
/// cursor on the stack, so one `Cipher` can be shared across threads freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cipher {
    key: Key,
}

impl Cipher {
    /// Wrap an already parsed key.
    #[must_use]
    pub fn new(key: Key) -> Self {
        Self { key }
    }

    /// The key this cipher shifts with.
    #[must_use]
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Encrypt `message`.
    #[must_use]
    pub fn encrypt(&self, message: &str) -> String {
        encrypt_with_key(message, &self.key)
    }

    /// Decrypt `message`.
    #[must_use]
    pub fn decrypt(&self, message: &str) -> String {
        decrypt_with_key(message, &self.key)
    }
}

impl From<Key> for Cipher {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}
