//! `messgen/test/simple_bitset` schema type.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use crate::codec::primitives::check_remaining;
use crate::codec::{WireDecode, WireEncode, WireError, WireResult};

/// Simple bitset example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimpleBitset(u8);

impl SimpleBitset {
    /// One flag.
    pub const ONE: Self = Self(1 << 0);
    /// Two flag.
    pub const TWO: Self = Self(1 << 1);
    /// Error flag.
    pub const ERROR: Self = Self(1 << 2);

    /// Flag names in declaration order, for rendering.
    const FLAGS: &'static [(&'static str, Self)] =
        &[("one", Self::ONE), ("two", Self::TWO), ("error", Self::ERROR)];

    /// The empty bitset.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Reconstructs the bitset from its raw wire image.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw wire image of the bitset.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every bit of `flag` is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: Self) -> bool {
        self.0 & flag.0 != 0
    }

    /// Sets the bits of `flag`.
    #[inline]
    pub fn set(&mut self, flag: Self) {
        self.0 |= flag.0;
    }

    /// Clears the bits of `flag`.
    #[inline]
    pub fn clear(&mut self, flag: Self) {
        self.0 &= !flag.0;
    }
}

impl BitOr for SimpleBitset {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SimpleBitset {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<u8> for SimpleBitset {
    #[inline]
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<SimpleBitset> for u8 {
    #[inline]
    fn from(bitset: SimpleBitset) -> Self {
        bitset.0
    }
}

impl fmt::Display for SimpleBitset {
    /// Renders set bits in declaration order: `{one | error}`, `{}` if empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let mut first = true;
        for (name, flag) in Self::FLAGS {
            if self.has(*flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        f.write_str("}")
    }
}

impl WireEncode for SimpleBitset {
    fn encoded_size(&self) -> usize {
        1
    }

    fn encode(&self, buffer: &mut [u8]) -> WireResult<usize> {
        if buffer.is_empty() {
            return Err(WireError::ShortBuffer {
                needed: 1,
                available: 0,
            });
        }
        buffer[0] = self.bits();
        Ok(1)
    }
}

impl WireDecode for SimpleBitset {
    fn decode(buffer: &[u8]) -> WireResult<(Self, usize)> {
        check_remaining(buffer, 0, 1)?;
        Ok((Self::from_bits(buffer[0]), 1))
    }
}
