// src/lib.rs

//! Vigenère cipher.
//!
//! Each letter of the message is shifted by the alphabet position of the
//! matching letter of a repeating keyword. Encryption and decryption are one
//! transform with the shift sign flipped. Non-letters pass through and do not
//! consume key letters; output letters are always lowercase.
//!
//! This is a historical cipher with no security value.

#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod consts;
pub mod decryptor;
pub mod encryptor;
pub mod engine;
pub mod error;
pub mod key;
pub mod utils;

// High-level API
pub use decryptor::{decrypt, decrypt_with_key};
pub use encryptor::{encrypt, encrypt_with_key};
pub use error::VigenereError;

pub use builders::cipher_builder::{Cipher, CipherBuilder};
pub use engine::{transform, Direction};
pub use key::{Key, KeyPolicy};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};
