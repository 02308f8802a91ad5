//! # Codec Errors
//!
//! Typed errors for wire encoding and decoding.
//!
//! Field-level failures carry the path of the offending field as emitted by
//! the schema compiler (e.g. `s_vec[i0]`), so a nested failure deep inside a
//! composite type surfaces with enough context to locate it.

use thiserror::Error;

/// Wire codec error.
///
/// Raised by [`WireEncode::encode`](crate::codec::WireEncode::encode) and
/// [`WireDecode::decode`](crate::codec::WireDecode::decode). There is no
/// recovery inside the codec: errors propagate to the caller as values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// Output buffer or input payload smaller than required.
    #[error("buffer too small: needed {needed} bytes, available {available}")]
    ShortBuffer {
        /// Bytes required to make progress.
        needed: usize,
        /// Bytes actually available.
        available: usize,
    },

    /// A nested codec failed while encoding a field.
    #[error("failed to encode field '{field}': {source}")]
    FieldEncode {
        /// Path of the offending field.
        field: &'static str,
        /// Inner failure.
        #[source]
        source: Box<WireError>,
    },

    /// A nested codec failed while decoding a field.
    #[error("failed to decode field '{field}': {source}")]
    FieldDecode {
        /// Path of the offending field.
        field: &'static str,
        /// Inner failure.
        #[source]
        source: Box<WireError>,
    },

    /// A decoded discriminant is outside the enum's closed value set.
    ///
    /// Enums are nominal: each emitted enum validates only its own set, so a
    /// byte-compatible value of another enum is still rejected here.
    #[error("invalid value {value:#04x} for enum {enum_name}")]
    InvalidEnumValue {
        /// Name of the enum type.
        enum_name: &'static str,
        /// The rejected discriminant.
        value: u8,
    },
}

impl WireError {
    /// Wraps a nested encode failure with the offending field path.
    #[must_use]
    pub fn encode_field(field: &'static str, source: WireError) -> Self {
        Self::FieldEncode {
            field,
            source: Box::new(source),
        }
    }

    /// Wraps a nested decode failure with the offending field path.
    #[must_use]
    pub fn decode_field(field: &'static str, source: WireError) -> Self {
        Self::FieldDecode {
            field,
            source: Box::new(source),
        }
    }
}

/// Result type for codec operations.
pub type WireResult<T> = std::result::Result<T, WireError>;
