//! `messgen/test/complex_struct_with_empty` schema type.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::EmptyStruct;
use crate::codec::primitives::{
    check_remaining, decode_var_string, encode_var_string, read_i32, read_len, write_i32,
    write_len, LEN_PREFIX_SIZE,
};
use crate::codec::{WireDecode, WireEncode, WireError, WireResult};

/// Struct with empty_struct in its fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComplexStructWithEmpty {
    pub e: EmptyStruct,
    pub dynamic_array: Vec<EmptyStruct>,
    pub static_array: [EmptyStruct; 5],
    pub multi_array: Vec<[Vec<EmptyStruct>; 5]>,
    pub map_empty_by_int: HashMap<i32, EmptyStruct>,
    pub map_vec_by_str: HashMap<String, Vec<EmptyStruct>>,
    pub array_of_size_zero: [i32; 0],
}

impl WireEncode for ComplexStructWithEmpty {
    fn encoded_size(&self) -> usize {
        let mut size = 0;

        // group e
        size += 0;

        // dynamic_array: zero-size elements contribute no bytes
        size += LEN_PREFIX_SIZE;

        // group static_array
        size += 0;

        // multi_array
        size += LEN_PREFIX_SIZE;
        for outer in &self.multi_array {
            size += outer.len() * LEN_PREFIX_SIZE;
        }

        // map_empty_by_int
        size += LEN_PREFIX_SIZE;
        size += self.map_empty_by_int.len() * 4;

        // map_vec_by_str
        size += LEN_PREFIX_SIZE;
        for key in self.map_vec_by_str.keys() {
            size += LEN_PREFIX_SIZE + key.len();
            size += LEN_PREFIX_SIZE;
        }

        // group array_of_size_zero
        size += 0;

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

        // group e: 0 bytes

        // dynamic_array: zero-size elements contribute no bytes
        write_len(buffer, offset, self.dynamic_array.len());
        offset += LEN_PREFIX_SIZE;

        // group static_array: 0 bytes

        // multi_array
        write_len(buffer, offset, self.multi_array.len());
        offset += LEN_PREFIX_SIZE;
        for outer in &self.multi_array {
            for inner in outer {
                write_len(buffer, offset, inner.len());
                offset += LEN_PREFIX_SIZE;
            }
        }

        // map_empty_by_int
        write_len(buffer, offset, self.map_empty_by_int.len());
        offset += LEN_PREFIX_SIZE;
        for key in self.map_empty_by_int.keys() {
            write_i32(buffer, offset, *key);
            offset += 4;
        }

        // map_vec_by_str
        write_len(buffer, offset, self.map_vec_by_str.len());
        offset += LEN_PREFIX_SIZE;
        for (key, value) in &self.map_vec_by_str {
            offset += encode_var_string(key, &mut buffer[offset..])
                .map_err(|e| WireError::encode_field("map_vec_by_str", e))?;
            write_len(buffer, offset, value.len());
            offset += LEN_PREFIX_SIZE;
        }

        // group array_of_size_zero: 0 bytes

        Ok(offset)
    }
}

impl WireDecode for ComplexStructWithEmpty {
    fn decode(buffer: &[u8]) -> WireResult<(Self, usize)> {
        let mut msg = Self::default();
        let mut offset = 0;

        // group e: 0 bytes

        // dynamic_array: zero-size elements contribute no bytes
        let count = read_len(buffer, offset)?;
        offset += LEN_PREFIX_SIZE;
        msg.dynamic_array = vec![EmptyStruct {}; count];

        // group static_array: 0 bytes

        // multi_array
        let count = read_len(buffer, offset)?;
        offset += LEN_PREFIX_SIZE;
        msg.multi_array = Vec::new();
        for _ in 0..count {
            let mut outer: [Vec<EmptyStruct>; 5] = Default::default();
            for inner in &mut outer {
                let inner_count = read_len(buffer, offset)?;
                offset += LEN_PREFIX_SIZE;
                *inner = vec![EmptyStruct {}; inner_count];
            }
            msg.multi_array.push(outer);
        }

        // map_empty_by_int
        let count = read_len(buffer, offset)?;
        offset += LEN_PREFIX_SIZE;
        msg.map_empty_by_int = HashMap::new();
        for _ in 0..count {
            check_remaining(buffer, offset, 4)?;
            let key = read_i32(buffer, offset);
            offset += 4;
            msg.map_empty_by_int.insert(key, EmptyStruct {});
        }

        // map_vec_by_str
        let count = read_len(buffer, offset)?;
        offset += LEN_PREFIX_SIZE;
        msg.map_vec_by_str = HashMap::new();
        for _ in 0..count {
            let (key, read) = decode_var_string(&buffer[offset..])
                .map_err(|e| WireError::decode_field("map_vec_by_str", e))?;
            offset += read;
            let inner_count = read_len(buffer, offset)?;
            offset += LEN_PREFIX_SIZE;
            msg.map_vec_by_str.insert(key, vec![EmptyStruct {}; inner_count]);
        }

        // group array_of_size_zero: 0 bytes

        Ok((msg, offset))
    }
}
