//! `messgen/test/empty_struct` schema type.

use serde::{Deserialize, Serialize};

use crate::codec::{WireDecode, WireEncode, WireResult};

/// Struct without data. May be used for heartbeat, command with no args, etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmptyStruct {}

impl WireEncode for EmptyStruct {
    fn encoded_size(&self) -> usize {
        0
    }

    fn encode(&self, _buffer: &mut [u8]) -> WireResult<usize> {
        Ok(0)
    }
}

impl WireDecode for EmptyStruct {
    fn decode(_buffer: &[u8]) -> WireResult<(Self, usize)> {
        Ok((Self {}, 0))
    }
}
