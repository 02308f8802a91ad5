//! # Schema Types
//!
//! Message and value types emitted by the schema compiler for the
//! `messgen/test` namespace plus the top-level schema namespace, one file per
//! type. Each type implements [`WireEncode`](crate::codec::WireEncode) and
//! [`WireDecode`](crate::codec::WireDecode) with the codec structured by
//! field groups: maximal runs of fixed-width fields are bounds-checked once
//! and accessed back to back; every dynamic field carries its own
//! length-prefixed logic.

mod complex_struct;
mod complex_struct_with_empty;
mod cross_proto;
mod empty_struct;
mod flat_struct;
mod one_more_message;
mod simple_bitset;
mod simple_enum;
mod simple_struct;
mod struct_with_enum;
mod var_size_struct;

pub use complex_struct::ComplexStruct;
pub use complex_struct_with_empty::ComplexStructWithEmpty;
pub use cross_proto::CrossProto;
pub use empty_struct::EmptyStruct;
pub use flat_struct::FlatStruct;
pub use one_more_message::OneMoreMessage;
pub use simple_bitset::SimpleBitset;
pub use simple_enum::SimpleEnum;
pub use simple_struct::SimpleStruct;
pub use struct_with_enum::StructWithEnum;
pub use var_size_struct::VarSizeStruct;
