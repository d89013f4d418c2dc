//! src/engine/transform.rs
//! Single bidirectional Vigenère walk

use log::trace;

use crate::engine::Direction;
use crate::key::Key;
use crate::utils::{fold_case, letter_at, letter_index, shift_index};

/// Run the Vigenère transform over `message`.
///
/// Every character is lowercased first (see [`fold_case`]), so output letters
/// are always lowercase and casing variants of a message collapse to one
/// ciphertext. Each letter `a`–`z` is shifted by the active key letter and
/// advances the key cursor; every other character is copied through in its
/// lowercased form and leaves the cursor where it is. The output has exactly as many characters
/// as the input.
///
/// `transform(&transform(m, k, Encrypt), k, Decrypt)` equals `m` lowercased.
#[must_use]
pub fn transform(message: &str, key: &Key, direction: Direction) -> String {
    trace!(
        "vigenere {direction:?}: {} bytes, key length {}",
        message.len(),
        key.len()
    );

    let sign = direction.sign();
    let mut cursor = 0usize;
    let mut output = String::with_capacity(message.len());

    for c in message.chars().map(fold_case) {
        match letter_index(c) {
            Some(index) => {
                output.push(letter_at(shift_index(index, key.offset_at(cursor), sign)));
                cursor += 1;
            }
            None => output.push(c),
        }
    }

    output
}
