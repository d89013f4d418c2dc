// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Letter classification and shift arithmetic shared by the key parser and the engine.

use crate::consts::{ALPHABET, ALPHABET_LEN, ALPHABET_START};

/// Returns the alphabet position of `c` (`'a'` = 0 … `'z'` = 25), or `None` if
/// `c` is not a lowercase ASCII letter.
///
/// Uppercase, accented and non-Latin letters are all `None`; callers lowercase
/// first when case should be ignored.
#[inline(always)]
pub const fn letter_index(c: char) -> Option<u8> {
    if c.is_ascii_lowercase() {
        Some(c as u8 - ALPHABET_START)
    } else {
        None
    }
}

/// Lowercases `c` when its lowercase form is exactly one character; otherwise
/// returns `c` unchanged (e.g. `'İ'`, whose lowercase form is two characters).
///
/// Output always has the same character count as input, whatever the script.
#[inline]
pub fn fold_case(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Returns the letter at alphabet position `index`.
///
/// # Panics (by contract)
///
/// Panics if `index >= 26`. [`shift_index`] only ever produces positions in range.
#[inline(always)]
pub const fn letter_at(index: u8) -> char {
    ALPHABET[index as usize] as char
}

/// Shifts alphabet position `index` by `offset * sign` and wraps the result
/// into `0..26`.
///
/// Negative intermediate values wrap forward (`-1` becomes `25`).
#[inline(always)]
pub const fn shift_index(index: u8, offset: u8, sign: i32) -> u8 {
    let shifted = index as i32 + offset as i32 * sign;
    shifted.rem_euclid(ALPHABET_LEN as i32) as u8
}
