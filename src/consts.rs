//! # Constants
//!
//! This module defines the fixed alphabet the cipher works over and the values
//! derived from it.

/// The cipher alphabet: the 26 lowercase ASCII letters in order.
///
/// A letter's position in this table is its numeric value (`a` = 0 … `z` = 25).
/// Characters outside this table are never shifted.
pub const ALPHABET: [u8; 26] = *b"abcdefghijklmnopqrstuvwxyz";

/// Number of letters in [`ALPHABET`]; every shift is reduced modulo this value.
pub const ALPHABET_LEN: usize = ALPHABET.len();

/// First byte of the alphabet, used to turn a letter into its position.
pub const ALPHABET_START: u8 = ALPHABET[0];
