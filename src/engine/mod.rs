// src/engine/mod.rs

//! The transform engine.
//!
//! Core API: `transform(message, &key, direction)`; encryption and decryption
//! are the same walk over the message with the shift sign flipped.

pub(crate) mod direction;
pub(crate) mod transform;

pub use direction::Direction;
pub use transform::transform;
