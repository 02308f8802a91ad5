//! # Golden Wire Scenarios
//!
//! Byte-exact encode/decode checks for the map-free schema types, plus
//! value-level round-trips for the map-containing ones (map entry order is
//! not specified, so their encodings are not byte-stable).
//!
//! Expected buffers are assembled field by field from `to_le_bytes`
//! concatenation in declaration order — an independent rendering of the wire
//! contract the codecs must match.

use std::collections::HashMap;

use wiremsg::codec::{WireDecode, WireEncode, WireError};
use wiremsg::types::{
    ComplexStruct, ComplexStructWithEmpty, CrossProto, EmptyStruct, FlatStruct, OneMoreMessage,
    SimpleBitset, SimpleEnum, SimpleStruct, StructWithEnum, VarSizeStruct,
};

// ============================================================================
// Fixtures
// ============================================================================

fn simple() -> SimpleStruct {
    SimpleStruct {
        f0: 0x1234567890abcdef,
        f1: 0x1234567890abcdef,
        f1_pad: 0x12,
        f2: 1.2345678901234567890,
        f3: 0x12345678,
        f4: 0x12345678,
        f5: 1.2345678901234567890,
        f6: 0x1234,
        f7: 0x12,
        f8: -0x12,
        f9: true,
    }
}

fn flat() -> FlatStruct {
    FlatStruct {
        f0: 0x1234567890abcdef,
        f1: 0x1234567890abcdef,
        f2: 1.2345678901234567890,
        f3: 0x12345678,
        f4: 0x12345678,
        f5: 1.2345678901234567890,
        f6: 0x1234,
        f7: 0x12,
        f8: -0x12,
    }
}

fn var_size() -> VarSizeStruct {
    VarSizeStruct {
        f0: 0x1234567890abcdef,
        f1_vec: vec![0x1234567890abcdef, 5, 1],
        str: "Hello messgen!".to_string(),
    }
}

fn complex() -> ComplexStruct {
    ComplexStruct {
        f0: 0x1234567890abcdef,
        f1: 0x12345678,
        f2: 0x1234567890abcdef,
        bits0: SimpleBitset::ONE | SimpleBitset::ERROR,
        s_arr: [simple(), simple()],
        f1_arr: [0x1234567890abcdef; 4],
        v_arr: [var_size(), var_size()],
        f2_vec: vec![1.2345678901234567890; 3],
        e_vec: vec![SimpleEnum::OneValue, SimpleEnum::AnotherValue],
        s_vec: vec![simple(), simple(), simple()],
        v_vec0: vec![vec![var_size(), var_size()]; 3],
        v_vec1: std::array::from_fn(|_| vec![var_size(); 3]),
        v_vec2: vec![std::array::from_fn(|_| vec![0x1234, 0x1234, 0x1234]); 2],
        str: "Example String".to_string(),
        bs: b"byte string".to_vec(),
        str_vec: vec![
            "string1".to_string(),
            "string2".to_string(),
            "string3".to_string(),
        ],
        map_str_by_int: HashMap::from([
            (0, "string0".to_string()),
            (1, "string1".to_string()),
            (2, "string2".to_string()),
        ]),
        map_vec_by_str: HashMap::from([
            ("key0".to_string(), vec![0x1234, 0x1234, 0x1234]),
            ("key1".to_string(), vec![0x1234, 0x1234, 0x1234]),
            ("key2".to_string(), vec![0x1234, 0x1234, 0x1234]),
        ]),
    }
}

/// SimpleStruct wire image: one fixed group of 42 bytes.
fn simple_wire() -> Vec<u8> {
    let mut wire = Vec::new();
    wire.extend_from_slice(&0x1234567890abcdef_u64.to_le_bytes());
    wire.extend_from_slice(&0x1234567890abcdef_i64.to_le_bytes());
    wire.push(0x12);
    wire.extend_from_slice(&1.2345678901234567890_f64.to_le_bytes());
    wire.extend_from_slice(&0x12345678_u32.to_le_bytes());
    wire.extend_from_slice(&0x12345678_i32.to_le_bytes());
    wire.extend_from_slice(&1.2345678901234567890_f32.to_le_bytes());
    wire.extend_from_slice(&0x1234_u16.to_le_bytes());
    wire.push(0x12);
    wire.push((-0x12_i8) as u8);
    wire.push(0x01);
    wire
}

/// FlatStruct wire image: one fixed group of 40 bytes.
fn flat_wire() -> Vec<u8> {
    let mut wire = Vec::new();
    wire.extend_from_slice(&0x1234567890abcdef_u64.to_le_bytes());
    wire.extend_from_slice(&0x1234567890abcdef_i64.to_le_bytes());
    wire.extend_from_slice(&1.2345678901234567890_f64.to_le_bytes());
    wire.extend_from_slice(&0x12345678_u32.to_le_bytes());
    wire.extend_from_slice(&0x12345678_i32.to_le_bytes());
    wire.extend_from_slice(&1.2345678901234567890_f32.to_le_bytes());
    wire.extend_from_slice(&0x1234_u16.to_le_bytes());
    wire.push(0x12);
    wire.push((-0x12_i8) as u8);
    wire
}

/// VarSizeStruct wire image: 8 + (4 + 3*8) + (4 + 14) = 54 bytes.
fn var_size_wire() -> Vec<u8> {
    let mut wire = Vec::new();
    wire.extend_from_slice(&0x1234567890abcdef_u64.to_le_bytes());
    wire.extend_from_slice(&3u32.to_le_bytes());
    wire.extend_from_slice(&0x1234567890abcdef_i64.to_le_bytes());
    wire.extend_from_slice(&5i64.to_le_bytes());
    wire.extend_from_slice(&1i64.to_le_bytes());
    wire.extend_from_slice(&14u32.to_le_bytes());
    wire.extend_from_slice(b"Hello messgen!");
    wire
}

// ============================================================================
// Encode
// ============================================================================

#[test]
fn simple_struct_encodes_to_golden_bytes() {
    let msg = simple();
    assert_eq!(msg.encoded_size(), 42);

    let bytes = msg.encode_to_vec().unwrap();
    assert_eq!(bytes, simple_wire());
}

#[test]
fn flat_struct_encodes_to_golden_bytes() {
    let msg = flat();
    assert_eq!(msg.encoded_size(), 40);

    let bytes = msg.encode_to_vec().unwrap();
    assert_eq!(bytes, flat_wire());
}

#[test]
fn var_size_struct_encodes_to_golden_bytes() {
    let msg = var_size();
    assert_eq!(msg.encoded_size(), 54);

    let bytes = msg.encode_to_vec().unwrap();
    assert_eq!(bytes, var_size_wire());
}

#[test]
fn struct_with_enum_encodes_to_golden_bytes() {
    let msg = StructWithEnum {
        f0: 0x1234567890abcdef,
        f1: 0x1234567890abcdef,
        e0: SimpleEnum::AnotherValue,
    };
    assert_eq!(msg.encoded_size(), 17);

    let bytes = msg.encode_to_vec().unwrap();
    let mut wire = Vec::new();
    wire.extend_from_slice(&0x1234567890abcdef_u64.to_le_bytes());
    wire.extend_from_slice(&0x1234567890abcdef_i64.to_le_bytes());
    wire.push(0x01);
    assert_eq!(bytes, wire);
}

#[test]
fn cross_proto_encodes_to_golden_bytes() {
    let msg = CrossProto {
        f0: 0x1234567890abcdef,
        cross0: SimpleEnum::AnotherValue,
    };
    assert_eq!(msg.encoded_size(), 9);

    let bytes = msg.encode_to_vec().unwrap();
    let mut wire = Vec::new();
    wire.extend_from_slice(&0x1234567890abcdef_u64.to_le_bytes());
    wire.push(0x01);
    assert_eq!(bytes, wire);
}

#[test]
fn one_more_message_is_41_bytes() {
    let msg = OneMoreMessage {
        f0: 0x1234567890abcdef,
        f1: 0x1234567890abcdef,
        f1_pad: 0x12,
        f2: 1.2345678901234567890,
        f3: 0x12345678,
        f4: 0x12345678,
        f5: 1.2345678901234567890,
        f6: 0x1234,
        f7: 0x12,
        f8: -0x12,
    };
    assert_eq!(msg.encoded_size(), 41);

    let bytes = msg.encode_to_vec().unwrap();
    assert_eq!(bytes.len(), 41);
}

#[test]
fn empty_struct_encodes_to_zero_bytes() {
    let msg = EmptyStruct {};
    assert_eq!(msg.encoded_size(), 0);

    let bytes = msg.encode_to_vec().unwrap();
    assert!(bytes.is_empty());
}

#[test]
fn false_bool_encodes_as_zero_byte() {
    let msg = SimpleStruct {
        f9: false,
        ..simple()
    };
    let bytes = msg.encode_to_vec().unwrap();
    assert_eq!(bytes[41], 0x00);
}

#[test]
fn encode_rejects_short_buffer_without_writing() {
    let msg = simple();
    let mut buffer = [0xaa_u8; 41];

    let err = msg.encode(&mut buffer).unwrap_err();
    assert_eq!(
        err,
        WireError::ShortBuffer {
            needed: 42,
            available: 41,
        }
    );
    assert!(buffer.iter().all(|&b| b == 0xaa));
}

#[test]
fn map_free_encoding_is_deterministic() {
    let msg = var_size();
    assert_eq!(msg.encode_to_vec().unwrap(), msg.encode_to_vec().unwrap());
}

// ============================================================================
// Decode
// ============================================================================

#[test]
fn simple_struct_decodes_from_golden_bytes() {
    let wire = simple_wire();
    let (msg, read) = SimpleStruct::decode(&wire).unwrap();

    assert_eq!(read, wire.len());
    assert_eq!(msg, simple());
    assert_eq!(msg.encoded_size(), wire.len());
}

#[test]
fn flat_struct_decodes_from_golden_bytes() {
    let wire = flat_wire();
    let (msg, read) = FlatStruct::decode(&wire).unwrap();

    assert_eq!(read, wire.len());
    assert_eq!(msg, flat());
    assert_eq!(msg.encoded_size(), wire.len());
}

#[test]
fn var_size_struct_decodes_from_golden_bytes() {
    let wire = var_size_wire();
    let (msg, read) = VarSizeStruct::decode(&wire).unwrap();

    assert_eq!(read, wire.len());
    assert_eq!(msg, var_size());
}

#[test]
fn empty_struct_decode_consumes_nothing() {
    let (msg, read) = EmptyStruct::decode(&[]).unwrap();
    assert_eq!(msg, EmptyStruct {});
    assert_eq!(read, 0);
}

#[test]
fn nonzero_bool_bytes_normalize_to_true() {
    let mut wire = simple_wire();
    wire[41] = 0x7f;

    let (msg, _) = SimpleStruct::decode(&wire).unwrap();
    assert!(msg.f9);
}

#[test]
fn negative_vec_elements_roundtrip() {
    let msg = VarSizeStruct {
        f0: 0x1234567890abcdef,
        f1_vec: vec![-0x1234567890abcdef, 5, 1],
        str: "Hello messgen!".to_string(),
    };

    let bytes = msg.encode_to_vec().unwrap();
    let (back, read) = VarSizeStruct::decode(&bytes).unwrap();
    assert_eq!(read, bytes.len());
    assert_eq!(back, msg);
}

// ============================================================================
// Value-level round-trips for map-containing types
// ============================================================================

#[test]
fn complex_struct_roundtrips_at_value_level() {
    let msg = complex();
    let bytes = msg.encode_to_vec().unwrap();
    assert_eq!(bytes.len(), msg.encoded_size());

    let (back, read) = ComplexStruct::decode(&bytes).unwrap();
    assert_eq!(read, bytes.len());
    assert_eq!(back, msg);
}

#[test]
fn complex_struct_with_empty_roundtrips_at_value_level() {
    let msg = ComplexStructWithEmpty {
        e: EmptyStruct {},
        dynamic_array: vec![EmptyStruct {}; 3],
        static_array: [EmptyStruct {}; 5],
        multi_array: vec![std::array::from_fn(|_| vec![EmptyStruct {}]); 3],
        map_empty_by_int: HashMap::from([(0, EmptyStruct {}), (1, EmptyStruct {}), (2, EmptyStruct {})]),
        map_vec_by_str: HashMap::from([
            ("key0".to_string(), vec![EmptyStruct {}]),
            ("key1".to_string(), vec![EmptyStruct {}]),
            ("key2".to_string(), vec![EmptyStruct {}]),
        ]),
        array_of_size_zero: [],
    };

    let bytes = msg.encode_to_vec().unwrap();
    assert_eq!(bytes.len(), msg.encoded_size());

    let (back, read) = ComplexStructWithEmpty::decode(&bytes).unwrap();
    assert_eq!(read, bytes.len());
    assert_eq!(back, msg);
}

// ============================================================================
// Decode errors
// ============================================================================

#[test]
fn truncated_fixed_group_is_rejected() {
    let wire = simple_wire();
    let err = SimpleStruct::decode(&wire[..41]).unwrap_err();
    assert_eq!(
        err,
        WireError::ShortBuffer {
            needed: 42,
            available: 41,
        }
    );
}

#[test]
fn truncated_length_prefix_is_rejected() {
    let wire = var_size_wire();
    // Cut inside f1_vec's count prefix.
    let err = VarSizeStruct::decode(&wire[..10]).unwrap_err();
    assert!(matches!(err, WireError::ShortBuffer { .. }));
}

#[test]
fn truncated_string_content_carries_field_path() {
    let wire = var_size_wire();
    let err = VarSizeStruct::decode(&wire[..wire.len() - 1]).unwrap_err();
    match err {
        WireError::FieldDecode { field, source } => {
            assert_eq!(field, "str");
            assert!(matches!(*source, WireError::ShortBuffer { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn invalid_enum_discriminant_is_rejected_with_field_path() {
    let mut wire = Vec::new();
    wire.extend_from_slice(&0u64.to_le_bytes());
    wire.extend_from_slice(&0i64.to_le_bytes());
    wire.push(0x07);

    let err = StructWithEnum::decode(&wire).unwrap_err();
    match err {
        WireError::FieldDecode { field, source } => {
            assert_eq!(field, "e0");
            assert_eq!(
                *source,
                WireError::InvalidEnumValue {
                    enum_name: "SimpleEnum",
                    value: 0x07,
                }
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn oversized_count_prefix_is_rejected() {
    let mut wire = Vec::new();
    wire.extend_from_slice(&0u64.to_le_bytes());
    // Advertise more elements than the payload can hold.
    wire.extend_from_slice(&u32::MAX.to_le_bytes());

    let err = VarSizeStruct::decode(&wire).unwrap_err();
    assert!(matches!(err, WireError::ShortBuffer { .. }));
}
