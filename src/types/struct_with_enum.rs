//! `messgen/test/struct_with_enum` schema type.

use serde::{Deserialize, Serialize};

use super::SimpleEnum;
use crate::codec::primitives::{check_remaining, read_i64, read_u64, write_i64, write_u64};
use crate::codec::{WireDecode, WireEncode, WireError, WireResult};

/// Struct with enum example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StructWithEnum {
    /// Some integer field.
    pub f0: u64,
    /// Another integer field.
    pub f1: i64,
    pub e0: SimpleEnum,
}

impl WireEncode for StructWithEnum {
    fn encoded_size(&self) -> usize {
        let mut size = 0;

        // group f0, f1, e0
        size += 17;
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

        // group f0, f1, e0: 17 bytes
        write_u64(buffer, offset, self.f0);
        offset += 8;
        write_i64(buffer, offset, self.f1);
        offset += 8;
        buffer[offset] = self.e0.to_wire();
        offset += 1;

        Ok(offset)
    }
}

impl WireDecode for StructWithEnum {
    fn decode(buffer: &[u8]) -> WireResult<(Self, usize)> {
        let mut msg = Self::default();
        let mut offset = 0;

        // group f0, f1, e0: 17 bytes
        check_remaining(buffer, offset, 17)?;
        msg.f0 = read_u64(buffer, offset);
        offset += 8;
        msg.f1 = read_i64(buffer, offset);
        offset += 8;
        msg.e0 = SimpleEnum::from_wire(buffer[offset])
            .map_err(|e| WireError::decode_field("e0", e))?;
        offset += 1;

        Ok((msg, offset))
    }
}
