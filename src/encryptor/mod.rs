// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt(message, key)?` for one-off calls with a raw key string.
//! Reuse: `encrypt_with_key(message, &key)` when the key is already parsed.

pub(crate) mod encrypt;

pub use encrypt::{encrypt, encrypt_with_key};
