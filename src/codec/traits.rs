//! # Codec Traits
//!
//! The capability contract every schema type fulfils: a byte-size computation,
//! an encoder into a caller-provided buffer, and a decoder producing an owned
//! value.
//!
//! The emitted per-type codecs implement these traits; the dispatchers and
//! any transport layer consume them without knowing the concrete type.

use super::error::WireResult;

/// Types that can be encoded to the wire format.
pub trait WireEncode {
    /// Number of wire bytes this value will occupy.
    ///
    /// Deterministic and dependent only on the value; `encode` writes exactly
    /// this many bytes.
    #[must_use]
    fn encoded_size(&self) -> usize;

    /// Encodes the value into `buffer` starting at offset 0.
    ///
    /// Returns the number of bytes written, which equals
    /// [`encoded_size`](Self::encoded_size).
    ///
    /// # Errors
    ///
    /// Returns [`ShortBuffer`](super::WireError::ShortBuffer) if `buffer` is
    /// smaller than `encoded_size()`, before anything is written. Nested field
    /// failures surface as [`FieldEncode`](super::WireError::FieldEncode).
    fn encode(&self, buffer: &mut [u8]) -> WireResult<usize>;

    /// Encodes the value into a freshly allocated buffer of exactly the right
    /// size.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    fn encode_to_vec(&self) -> WireResult<Vec<u8>> {
        let mut buffer = vec![0u8; self.encoded_size()];
        let written = self.encode(&mut buffer)?;
        debug_assert_eq!(written, buffer.len());
        Ok(buffer)
    }
}

/// Types that can be decoded from the wire format.
///
/// Decoding always copies: the returned value owns all of its dynamic payloads
/// (strings, arrays, maps, byte blobs) and holds no borrow on `buffer`.
pub trait WireDecode: Sized {
    /// Decodes a value from `buffer` starting at offset 0.
    ///
    /// Returns the value together with the exact number of bytes consumed.
    /// Callers framing whole payloads should verify full consumption; the
    /// dispatchers do so and reject trailing bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ShortBuffer`](super::WireError::ShortBuffer) if the input is
    /// truncated, and [`FieldDecode`](super::WireError::FieldDecode) with the
    /// offending field path when a nested codec fails.
    fn decode(buffer: &[u8]) -> WireResult<(Self, usize)>;
}
