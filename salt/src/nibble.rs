//! A very simple u4/nibble implementation.

use std::fmt;

use thiserror::Error;

/// Represents an unsigned 4-bit value (nibble) encoded as a byte.
///
/// The wrapped byte never exceeds `0x0f`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct U4(u8);

impl U4 {
    /// The smallest representable nibble.
    pub const MIN: Self = Self(0x00);

    /// The largest representable nibble.
    pub const MAX: Self = Self(0x0f);

    /// Constructs a nibble from the 4 low/rightmost bits of a byte.
    pub const fn from_lo(raw: u8) -> Self {
        Self(raw & 0x0f)
    }

    /// Constructs a nibble from the 4 high/leftmost bits of a byte.
    pub const fn from_hi(raw: u8) -> Self {
        Self(raw >> 4)
    }

    /// Constructs a byte with the nibble set as the 4 low/rightmost bits.
    pub const fn to_lo(self) -> u8 {
        self.0
    }

    /// Constructs a byte with the nibble set as the 4 high/leftmost bits.
    pub const fn to_hi(self) -> u8 {
        self.0 << 4
    }
}

impl TryFrom<u8> for U4 {
    type Error = NibbleOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX.0 {
            return Err(NibbleOutOfRange(value));
        }

        Ok(Self(value))
    }
}

impl From<U4> for u8 {
    fn from(value: U4) -> Self {
        value.0
    }
}

impl fmt::Display for U4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Combines two nibbles to a byte, with `a` being set to the 4 leftmost and
/// `b` being set to the 4 rightmost bits.
pub const fn combine(a: U4, b: U4) -> u8 {
    a.to_hi() | b.to_lo()
}

/// Splits a byte into its 4 leftmost and its 4 rightmost bits.
///
/// This is the inverse of [`combine`].
pub const fn split(raw: u8) -> (U4, U4) {
    (U4::from_hi(raw), U4::from_lo(raw))
}

/// Indicates that a value does not fit into 4 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} does not fit into a nibble")]
pub struct NibbleOutOfRange(pub u8);
