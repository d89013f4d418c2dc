// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(message, key)?`.
//! Reuse: `decrypt_with_key(message, &key)` when the key is already parsed.

pub(crate) mod decrypt;

pub use decrypt::{decrypt, decrypt_with_key};
