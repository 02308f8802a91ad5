//! `messgen/test/var_size_struct` schema type.

use serde::{Deserialize, Serialize};

use crate::codec::primitives::{
    check_remaining, decode_var_string, encode_var_string, read_i64, read_len, read_u64,
    write_i64, write_len, write_u64, LEN_PREFIX_SIZE,
};
use crate::codec::{WireDecode, WireEncode, WireError, WireResult};

/// Variable size struct example.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VarSizeStruct {
    /// Some integer field.
    pub f0: u64,
    /// Variable size field.
    pub f1_vec: Vec<i64>,
    pub str: String,
}

impl WireEncode for VarSizeStruct {
    fn encoded_size(&self) -> usize {
        let mut size = 0;

        // group f0
        size += 8;

        // f1_vec
        size += LEN_PREFIX_SIZE + self.f1_vec.len() * 8;

        // str
        size += LEN_PREFIX_SIZE + self.str.len();
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

        // group f0: 8 bytes
        write_u64(buffer, offset, self.f0);
        offset += 8;

        // f1_vec
        write_len(buffer, offset, self.f1_vec.len());
        offset += LEN_PREFIX_SIZE;
        for value in &self.f1_vec {
            write_i64(buffer, offset, *value);
            offset += 8;
        }

        // str
        offset += encode_var_string(&self.str, &mut buffer[offset..])
            .map_err(|e| WireError::encode_field("str", e))?;

        Ok(offset)
    }
}

impl WireDecode for VarSizeStruct {
    fn decode(buffer: &[u8]) -> WireResult<(Self, usize)> {
        let mut msg = Self::default();
        let mut offset = 0;

        // group f0: 8 bytes
        check_remaining(buffer, offset, 8)?;
        msg.f0 = read_u64(buffer, offset);
        offset += 8;

        // f1_vec
        let count = read_len(buffer, offset)?;
        offset += LEN_PREFIX_SIZE;
        check_remaining(buffer, offset, count * 8)?;
        msg.f1_vec = Vec::with_capacity(count);
        for _ in 0..count {
            msg.f1_vec.push(read_i64(buffer, offset));
            offset += 8;
        }

        // str
        let (value, read) = decode_var_string(&buffer[offset..])
            .map_err(|e| WireError::decode_field("str", e))?;
        msg.str = value;
        offset += read;

        Ok((msg, offset))
    }
}
