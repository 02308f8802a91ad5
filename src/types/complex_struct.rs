//! `messgen/test/complex_struct` schema type.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{SimpleBitset, SimpleEnum, SimpleStruct, VarSizeStruct};
use crate::codec::primitives::{
    check_remaining, decode_var_bytes, decode_var_string, encode_var_bytes, encode_var_string,
    read_f64, read_i16, read_i32, read_i64, read_len, read_u32, read_u64, write_f64, write_i16,
    write_i32, write_i64, write_len, write_u32, write_u64, LEN_PREFIX_SIZE,
};
use crate::codec::{WireDecode, WireEncode, WireError, WireResult};

/// Simple struct example.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComplexStruct {
    /// Some integer field.
    pub f0: u64,
    /// Some integer field.
    pub f1: u32,
    /// Some integer field.
    pub f2: u64,
    /// Some bitset field.
    pub bits0: SimpleBitset,
    pub s_arr: [SimpleStruct; 2],
    /// Another integer field.
    pub f1_arr: [i64; 4],
    pub v_arr: [VarSizeStruct; 2],
    pub f2_vec: Vec<f64>,
    pub e_vec: Vec<SimpleEnum>,
    pub s_vec: Vec<SimpleStruct>,
    pub v_vec0: Vec<Vec<VarSizeStruct>>,
    pub v_vec1: [Vec<VarSizeStruct>; 4],
    pub v_vec2: Vec<[Vec<i16>; 4]>,
    pub str: String,
    pub bs: Vec<u8>,
    pub str_vec: Vec<String>,
    pub map_str_by_int: HashMap<i32, String>,
    pub map_vec_by_str: HashMap<String, Vec<i32>>,
}

impl WireEncode for ComplexStruct {
    fn encoded_size(&self) -> usize {
        let mut size = 0;

        // group f0, f1, f2, bits0
        size += 21;

        // s_arr
        for value in &self.s_arr {
            size += value.encoded_size();
        }

        // group f1_arr
        size += 32;

        // v_arr
        for value in &self.v_arr {
            size += value.encoded_size();
        }

        // f2_vec
        size += LEN_PREFIX_SIZE + self.f2_vec.len() * 8;

        // e_vec
        size += LEN_PREFIX_SIZE + self.e_vec.len();

        // s_vec
        size += LEN_PREFIX_SIZE;
        for value in &self.s_vec {
            size += value.encoded_size();
        }

        // v_vec0
        size += LEN_PREFIX_SIZE;
        for inner in &self.v_vec0 {
            size += LEN_PREFIX_SIZE;
            for value in inner {
                size += value.encoded_size();
            }
        }

        // v_vec1
        for inner in &self.v_vec1 {
            size += LEN_PREFIX_SIZE;
            for value in inner {
                size += value.encoded_size();
            }
        }

        // v_vec2
        size += LEN_PREFIX_SIZE;
        for outer in &self.v_vec2 {
            for inner in outer {
                size += LEN_PREFIX_SIZE + inner.len() * 2;
            }
        }

        // str
        size += LEN_PREFIX_SIZE + self.str.len();

        // bs
        size += LEN_PREFIX_SIZE + self.bs.len();

        // str_vec
        size += LEN_PREFIX_SIZE;
        for value in &self.str_vec {
            size += LEN_PREFIX_SIZE + value.len();
        }

        // map_str_by_int
        size += LEN_PREFIX_SIZE;
        for value in self.map_str_by_int.values() {
            size += 4;
            size += LEN_PREFIX_SIZE + value.len();
        }

        // map_vec_by_str
        size += LEN_PREFIX_SIZE;
        for (key, value) in &self.map_vec_by_str {
            size += LEN_PREFIX_SIZE + key.len();
            size += LEN_PREFIX_SIZE + value.len() * 4;
        }

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

        // group f0, f1, f2, bits0: 21 bytes
        write_u64(buffer, offset, self.f0);
        offset += 8;
        write_u32(buffer, offset, self.f1);
        offset += 4;
        write_u64(buffer, offset, self.f2);
        offset += 8;
        buffer[offset] = self.bits0.bits();
        offset += 1;

        // s_arr
        for value in &self.s_arr {
            offset += value
                .encode(&mut buffer[offset..])
                .map_err(|e| WireError::encode_field("s_arr[i0]", e))?;
        }

        // group f1_arr: 32 bytes
        for value in &self.f1_arr {
            write_i64(buffer, offset, *value);
            offset += 8;
        }

        // v_arr
        for value in &self.v_arr {
            offset += value
                .encode(&mut buffer[offset..])
                .map_err(|e| WireError::encode_field("v_arr[i0]", e))?;
        }

        // f2_vec
        write_len(buffer, offset, self.f2_vec.len());
        offset += LEN_PREFIX_SIZE;
        for value in &self.f2_vec {
            write_f64(buffer, offset, *value);
            offset += 8;
        }

        // e_vec
        write_len(buffer, offset, self.e_vec.len());
        offset += LEN_PREFIX_SIZE;
        for value in &self.e_vec {
            buffer[offset] = value.to_wire();
            offset += 1;
        }

        // s_vec
        write_len(buffer, offset, self.s_vec.len());
        offset += LEN_PREFIX_SIZE;
        for value in &self.s_vec {
            offset += value
                .encode(&mut buffer[offset..])
                .map_err(|e| WireError::encode_field("s_vec[i0]", e))?;
        }

        // v_vec0
        write_len(buffer, offset, self.v_vec0.len());
        offset += LEN_PREFIX_SIZE;
        for inner in &self.v_vec0 {
            write_len(buffer, offset, inner.len());
            offset += LEN_PREFIX_SIZE;
            for value in inner {
                offset += value
                    .encode(&mut buffer[offset..])
                    .map_err(|e| WireError::encode_field("v_vec0[i0][i1]", e))?;
            }
        }

        // v_vec1
        for inner in &self.v_vec1 {
            write_len(buffer, offset, inner.len());
            offset += LEN_PREFIX_SIZE;
            for value in inner {
                offset += value
                    .encode(&mut buffer[offset..])
                    .map_err(|e| WireError::encode_field("v_vec1[i0][i1]", e))?;
            }
        }

        // v_vec2
        write_len(buffer, offset, self.v_vec2.len());
        offset += LEN_PREFIX_SIZE;
        for outer in &self.v_vec2 {
            for inner in outer {
                write_len(buffer, offset, inner.len());
                offset += LEN_PREFIX_SIZE;
                for value in inner {
                    write_i16(buffer, offset, *value);
                    offset += 2;
                }
            }
        }

        // str
        offset += encode_var_string(&self.str, &mut buffer[offset..])
            .map_err(|e| WireError::encode_field("str", e))?;

        // bs
        offset += encode_var_bytes(&self.bs, &mut buffer[offset..])
            .map_err(|e| WireError::encode_field("bs", e))?;

        // str_vec
        write_len(buffer, offset, self.str_vec.len());
        offset += LEN_PREFIX_SIZE;
        for value in &self.str_vec {
            offset += encode_var_string(value, &mut buffer[offset..])
                .map_err(|e| WireError::encode_field("str_vec[i0]", e))?;
        }

        // map_str_by_int
        write_len(buffer, offset, self.map_str_by_int.len());
        offset += LEN_PREFIX_SIZE;
        for (key, value) in &self.map_str_by_int {
            write_i32(buffer, offset, *key);
            offset += 4;
            offset += encode_var_string(value, &mut buffer[offset..])
                .map_err(|e| WireError::encode_field("map_str_by_int", e))?;
        }

        // map_vec_by_str
        write_len(buffer, offset, self.map_vec_by_str.len());
        offset += LEN_PREFIX_SIZE;
        for (key, value) in &self.map_vec_by_str {
            offset += encode_var_string(key, &mut buffer[offset..])
                .map_err(|e| WireError::encode_field("map_vec_by_str", e))?;
            write_len(buffer, offset, value.len());
            offset += LEN_PREFIX_SIZE;
            for item in value {
                write_i32(buffer, offset, *item);
                offset += 4;
            }
        }

        Ok(offset)
    }
}

impl WireDecode for ComplexStruct {
    fn decode(buffer: &[u8]) -> WireResult<(Self, usize)> {
        let mut msg = Self::default();
        let mut offset = 0;

        // group f0, f1, f2, bits0: 21 bytes
        check_remaining(buffer, offset, 21)?;
        msg.f0 = read_u64(buffer, offset);
        offset += 8;
        msg.f1 = read_u32(buffer, offset);
        offset += 4;
        msg.f2 = read_u64(buffer, offset);
        offset += 8;
        msg.bits0 = SimpleBitset::from_bits(buffer[offset]);
        offset += 1;

        // s_arr
        for value in &mut msg.s_arr {
            let (item, read) = SimpleStruct::decode(&buffer[offset..])
                .map_err(|e| WireError::decode_field("s_arr[i0]", e))?;
            *value = item;
            offset += read;
        }

        // group f1_arr: 32 bytes
        check_remaining(buffer, offset, 32)?;
        for value in &mut msg.f1_arr {
            *value = read_i64(buffer, offset);
            offset += 8;
        }

        // v_arr
        for value in &mut msg.v_arr {
            let (item, read) = VarSizeStruct::decode(&buffer[offset..])
                .map_err(|e| WireError::decode_field("v_arr[i0]", e))?;
            *value = item;
            offset += read;
        }

        // f2_vec
        let count = read_len(buffer, offset)?;
        offset += LEN_PREFIX_SIZE;
        check_remaining(buffer, offset, count * 8)?;
        msg.f2_vec = Vec::with_capacity(count);
        for _ in 0..count {
            msg.f2_vec.push(read_f64(buffer, offset));
            offset += 8;
        }

        // e_vec
        let count = read_len(buffer, offset)?;
        offset += LEN_PREFIX_SIZE;
        check_remaining(buffer, offset, count)?;
        msg.e_vec = Vec::with_capacity(count);
        for _ in 0..count {
            let value = SimpleEnum::from_wire(buffer[offset])
                .map_err(|e| WireError::decode_field("e_vec[i0]", e))?;
            msg.e_vec.push(value);
            offset += 1;
        }

        // s_vec
        let count = read_len(buffer, offset)?;
        offset += LEN_PREFIX_SIZE;
        msg.s_vec = Vec::new();
        for _ in 0..count {
            let (item, read) = SimpleStruct::decode(&buffer[offset..])
                .map_err(|e| WireError::decode_field("s_vec[i0]", e))?;
            msg.s_vec.push(item);
            offset += read;
        }

        // v_vec0
        let count = read_len(buffer, offset)?;
        offset += LEN_PREFIX_SIZE;
        msg.v_vec0 = Vec::new();
        for _ in 0..count {
            let inner_count = read_len(buffer, offset)?;
            offset += LEN_PREFIX_SIZE;
            let mut inner = Vec::new();
            for _ in 0..inner_count {
                let (item, read) = VarSizeStruct::decode(&buffer[offset..])
                    .map_err(|e| WireError::decode_field("v_vec0[i0][i1]", e))?;
                inner.push(item);
                offset += read;
            }
            msg.v_vec0.push(inner);
        }

        // v_vec1
        for inner in &mut msg.v_vec1 {
            let inner_count = read_len(buffer, offset)?;
            offset += LEN_PREFIX_SIZE;
            *inner = Vec::new();
            for _ in 0..inner_count {
                let (item, read) = VarSizeStruct::decode(&buffer[offset..])
                    .map_err(|e| WireError::decode_field("v_vec1[i0][i1]", e))?;
                inner.push(item);
                offset += read;
            }
        }

        // v_vec2
        let count = read_len(buffer, offset)?;
        offset += LEN_PREFIX_SIZE;
        msg.v_vec2 = Vec::new();
        for _ in 0..count {
            let mut outer: [Vec<i16>; 4] = Default::default();
            for inner in &mut outer {
                let inner_count = read_len(buffer, offset)?;
                offset += LEN_PREFIX_SIZE;
                check_remaining(buffer, offset, inner_count * 2)?;
                *inner = Vec::with_capacity(inner_count);
                for _ in 0..inner_count {
                    inner.push(read_i16(buffer, offset));
                    offset += 2;
                }
            }
            msg.v_vec2.push(outer);
        }

        // str
        let (value, read) = decode_var_string(&buffer[offset..])
            .map_err(|e| WireError::decode_field("str", e))?;
        msg.str = value;
        offset += read;

        // bs
        let (value, read) = decode_var_bytes(&buffer[offset..])
            .map_err(|e| WireError::decode_field("bs", e))?;
        msg.bs = value;
        offset += read;

        // str_vec
        let count = read_len(buffer, offset)?;
        offset += LEN_PREFIX_SIZE;
        msg.str_vec = Vec::new();
        for _ in 0..count {
            let (value, read) = decode_var_string(&buffer[offset..])
                .map_err(|e| WireError::decode_field("str_vec[i0]", e))?;
            msg.str_vec.push(value);
            offset += read;
        }

        // map_str_by_int
        let count = read_len(buffer, offset)?;
        offset += LEN_PREFIX_SIZE;
        msg.map_str_by_int = HashMap::new();
        for _ in 0..count {
            check_remaining(buffer, offset, 4)?;
            let key = read_i32(buffer, offset);
            offset += 4;
            let (value, read) = decode_var_string(&buffer[offset..])
                .map_err(|e| WireError::decode_field("map_str_by_int", e))?;
            offset += read;
            msg.map_str_by_int.insert(key, value);
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
            check_remaining(buffer, offset, inner_count * 4)?;
            let mut value = Vec::with_capacity(inner_count);
            for _ in 0..inner_count {
                value.push(read_i32(buffer, offset));
                offset += 4;
            }
            msg.map_vec_by_str.insert(key, value);
        }

        Ok((msg, offset))
    }
}
