//! `messgen/test/simple_enum` schema type.

use serde::{Deserialize, Serialize};

use crate::codec::primitives::check_remaining;
use crate::codec::{WireDecode, WireEncode, WireError, WireResult};

/// Simple enum example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum SimpleEnum {
    /// One value.
    #[default]
    OneValue = 0,
    /// Another value.
    AnotherValue = 1,
}

impl SimpleEnum {
    /// Wire image of the discriminant.
    #[inline]
    #[must_use]
    pub const fn to_wire(self) -> u8 {
        self as u8
    }

    /// Validates a wire discriminant against the closed value set.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::InvalidEnumValue`] for any byte outside the set.
    #[inline]
    pub fn from_wire(value: u8) -> WireResult<Self> {
        match value {
            0 => Ok(Self::OneValue),
            1 => Ok(Self::AnotherValue),
            _ => Err(WireError::InvalidEnumValue {
                enum_name: "SimpleEnum",
                value,
            }),
        }
    }
}

impl WireEncode for SimpleEnum {
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
        buffer[0] = self.to_wire();
        Ok(1)
    }
}

impl WireDecode for SimpleEnum {
    fn decode(buffer: &[u8]) -> WireResult<(Self, usize)> {
        check_remaining(buffer, 0, 1)?;
        Ok((Self::from_wire(buffer[0])?, 1))
    }
}
