//! src/engine/direction.rs

/// Which way the engine shifts letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Shift forward by the key offset.
    Encrypt,
    /// Shift backward by the key offset.
    Decrypt,
}

impl Direction {
    /// Multiplier applied to every key offset: `+1` or `-1`.
    #[inline(always)]
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Encrypt => 1,
            Self::Decrypt => -1,
        }
    }

    /// The direction that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Encrypt => Self::Decrypt,
            Self::Decrypt => Self::Encrypt,
        }
    }
}
