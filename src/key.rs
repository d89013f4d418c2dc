//! src/key.rs
//! Validated cipher key: parsed once, infallible afterwards

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::VigenereError;
use crate::utils::{letter_at, letter_index};

/// How [`Key::parse`] treats characters that are not ASCII letters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KeyPolicy {
    /// Fail with [`VigenereError::InvalidKey`] on the first non-letter.
    #[default]
    Reject,
    /// Drop non-letters and keep whatever letters remain.
    Sanitize,
}

/// A non-empty sequence of key letters, stored as alphabet offsets (`a` = 0 … `z` = 25).
///
/// Once a `Key` exists the transform cannot fail, so all validation happens here.
/// Uppercase letters are accepted and folded to lowercase.
///
/// # Thread Safety
///
/// `Key` is immutable and `Send + Sync`; one key can drive any number of
/// concurrent transforms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    offsets: Vec<u8>,
}

impl Key {
    /// Parse `raw` under [`KeyPolicy::Reject`].
    pub fn new(raw: &str) -> Result<Self, VigenereError> {
        Self::parse(raw, KeyPolicy::Reject)
    }

    /// Parse `raw` under the given policy.
    pub fn parse(raw: &str, policy: KeyPolicy) -> Result<Self, VigenereError> {
        if raw.is_empty() {
            debug!("rejecting empty key");
            return Err(VigenereError::InvalidKey("key is empty".into()));
        }

        let mut offsets = Vec::with_capacity(raw.len());
        for (position, c) in raw.chars().enumerate() {
            match letter_index(c.to_ascii_lowercase()) {
                Some(offset) => offsets.push(offset),
                None => match policy {
                    KeyPolicy::Reject => {
                        debug!("rejecting key: {c:?} at position {position} is not a letter");
                        return Err(VigenereError::InvalidKey(format!(
                            "character {c:?} at position {position} is not an ASCII letter"
                        )));
                    }
                    KeyPolicy::Sanitize => {
                        debug!("dropping {c:?} at position {position} from key");
                    }
                },
            }
        }

        if offsets.is_empty() {
            debug!("rejecting key: no letters left after sanitizing");
            return Err(VigenereError::InvalidKey(
                "key contains no ASCII letters".into(),
            ));
        }

        Ok(Self { offsets })
    }

    /// Alphabet offsets of the key letters, in order.
    #[must_use]
    pub fn offsets(&self) -> &[u8] {
        &self.offsets
    }

    /// Number of letters in the key. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Always `false`: an empty key cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Offset for the key cursor position `cursor`, wrapping around the key.
    #[inline(always)]
    pub(crate) fn offset_at(&self, cursor: usize) -> u8 {
        self.offsets[cursor % self.offsets.len()]
    }
}

impl FromStr for Key {
    type Err = VigenereError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Key {
    type Error = VigenereError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.offsets
            .iter()
            .try_for_each(|&offset| write!(f, "{}", letter_at(offset)))
    }
}
