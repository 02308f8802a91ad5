//! `one_more_message` schema type.

use serde::{Deserialize, Serialize};

use crate::codec::primitives::{
    check_remaining, read_f32, read_f64, read_i32, read_i64, read_u16, read_u32, read_u64,
    write_f32, write_f64, write_i32, write_i64, write_u16, write_u32, write_u64,
};
use crate::codec::{WireDecode, WireEncode, WireError, WireResult};

/// Simple struct example.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OneMoreMessage {
    /// Some integer field.
    pub f0: u64,
    /// Another integer field.
    pub f1: i64,
    pub f1_pad: u8,
    pub f2: f64,
    pub f3: u32,
    pub f4: i32,
    pub f5: f32,
    pub f6: u16,
    pub f7: u8,
    pub f8: i8,
}

impl WireEncode for OneMoreMessage {
    fn encoded_size(&self) -> usize {
        let mut size = 0;

        // group f0, f1, f1_pad, f2, f3, f4, f5, f6, f7, f8
        size += 41;
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

        // group f0, f1, f1_pad, f2, f3, f4, f5, f6, f7, f8: 41 bytes
        write_u64(buffer, offset, self.f0);
        offset += 8;
        write_i64(buffer, offset, self.f1);
        offset += 8;
        buffer[offset] = self.f1_pad;
        offset += 1;
        write_f64(buffer, offset, self.f2);
        offset += 8;
        write_u32(buffer, offset, self.f3);
        offset += 4;
        write_i32(buffer, offset, self.f4);
        offset += 4;
        write_f32(buffer, offset, self.f5);
        offset += 4;
        write_u16(buffer, offset, self.f6);
        offset += 2;
        buffer[offset] = self.f7;
        offset += 1;
        buffer[offset] = self.f8 as u8;
        offset += 1;

        Ok(offset)
    }
}

impl WireDecode for OneMoreMessage {
    fn decode(buffer: &[u8]) -> WireResult<(Self, usize)> {
        let mut msg = Self::default();
        let mut offset = 0;

        // group f0, f1, f1_pad, f2, f3, f4, f5, f6, f7, f8: 41 bytes
        check_remaining(buffer, offset, 41)?;
        msg.f0 = read_u64(buffer, offset);
        offset += 8;
        msg.f1 = read_i64(buffer, offset);
        offset += 8;
        msg.f1_pad = buffer[offset];
        offset += 1;
        msg.f2 = read_f64(buffer, offset);
        offset += 8;
        msg.f3 = read_u32(buffer, offset);
        offset += 4;
        msg.f4 = read_i32(buffer, offset);
        offset += 4;
        msg.f5 = read_f32(buffer, offset);
        offset += 4;
        msg.f6 = read_u16(buffer, offset);
        offset += 2;
        msg.f7 = buffer[offset];
        offset += 1;
        msg.f8 = buffer[offset] as i8;
        offset += 1;

        Ok((msg, offset))
    }
}
