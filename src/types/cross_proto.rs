//! `cross_proto` schema type.

use serde::{Deserialize, Serialize};

use super::SimpleEnum;
use crate::codec::primitives::{check_remaining, read_u64, write_u64};
use crate::codec::{WireDecode, WireEncode, WireError, WireResult};

/// Struct that uses types from another protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CrossProto {
    /// Some integer field.
    pub f0: u64,
    /// Type from another protocol.
    pub cross0: SimpleEnum,
}

impl WireEncode for CrossProto {
    fn encoded_size(&self) -> usize {
        let mut size = 0;

        // group f0, cross0
        size += 9;
        size
    }

    fn encode(&self, buffer: &mut [u8]) -> WireResult<usize> {
        let size = self.encoded_size();
        if buffer.len() < size {
            return Err(WireError::ShortBuffer {
                needed: size,
                available: buffer.len(),
            });
        }
        let mut offset = 0;

        // group f0, cross0: 9 bytes
        write_u64(buffer, offset, self.f0);
        offset += 8;
        buffer[offset] = self.cross0.to_wire();
        offset += 1;

        Ok(offset)
    }
}

impl WireDecode for CrossProto {
    fn decode(buffer: &[u8]) -> WireResult<(Self, usize)> {
        let mut msg = Self::default();
        let mut offset = 0;

        // group f0, cross0: 9 bytes
        check_remaining(buffer, offset, 9)?;
        msg.f0 = read_u64(buffer, offset);
        offset += 8;
        msg.cross0 = SimpleEnum::from_wire(buffer[offset])
            .map_err(|e| WireError::decode_field("cross0", e))?;
        offset += 1;

        Ok((msg, offset))
    }
}
