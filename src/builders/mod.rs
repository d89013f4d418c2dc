//! # Builders
//!
//! This module provides the builder for reusable cipher handles.
//!
//! ## Modules
//!
//! - [`cipher_builder`] - Builder for [`Cipher`](cipher_builder::Cipher), a key parsed once and reused
//!
//! ## Usage
//!
//! ```ignore
//! let cipher = CipherBuilder::new()
//!     .with_key_policy(KeyPolicy::Sanitize)
//!     .build("lem-on")?;
//! assert_eq!(cipher.encrypt("attackatdawn"), "lxfopvefrnhr");
//! ```

pub mod cipher_builder;
