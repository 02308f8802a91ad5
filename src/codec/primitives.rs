//! # Wire Primitives
//!
//! Little-endian scalar accessors and length-prefix helpers shared by the
//! emitted codecs.
//!
//! Two families live here:
//!
//! - **Checked** helpers ([`check_remaining`], [`read_len`], the var-string
//!   and var-bytes codecs) that verify buffer capacity and return
//!   [`WireError::ShortBuffer`] on violation. Decoders use these at every
//!   point where untrusted input steers how many bytes come next.
//! - **Unchecked** scalar accessors (`read_*`/`write_*`) that assume the
//!   caller already verified capacity. Emitted codecs verify once per fixed
//!   field group (encoders once per message, against `encoded_size`), then
//!   access members back to back; this is the safe-Rust counterpart of a bulk
//!   group copy.

use super::error::{WireError, WireResult};

/// Width of the `u32` count prefix carried by every dynamic container.
pub const LEN_PREFIX_SIZE: usize = 4;

/// Verifies that `buffer` holds at least `needed` bytes past `offset`.
///
/// # Errors
///
/// Returns [`WireError::ShortBuffer`] when it does not.
#[inline]
pub fn check_remaining(buffer: &[u8], offset: usize, needed: usize) -> WireResult<()> {
    if buffer.len() < offset + needed {
        return Err(WireError::ShortBuffer {
            needed: offset + needed,
            available: buffer.len(),
        });
    }
    Ok(())
}

/// Reads a `u32` little-endian count prefix at `offset`.
///
/// # Errors
///
/// Returns [`WireError::ShortBuffer`] if fewer than four bytes remain.
#[inline]
pub fn read_len(input: &[u8], offset: usize) -> WireResult<usize> {
    check_remaining(input, offset, LEN_PREFIX_SIZE)?;
    Ok(read_u32(input, offset) as usize)
}

/// Writes a count prefix at `offset`.
///
/// # Panics
///
/// Panics if fewer than four bytes remain; callers have already sized the
/// buffer against `encoded_size`.
#[inline]
pub fn write_len(output: &mut [u8], offset: usize, len: usize) {
    write_u32(output, offset, len as u32);
}

// ============================================================================
// Unchecked little-endian scalar accessors
// ============================================================================
//
// Each reader copies the scalar's wire image into a fixed array and converts
// with from_le_bytes; each writer is the mirror. All of them panic on
// out-of-bounds access: the emitted codecs bounds-check the enclosing field
// group before touching members.

/// Reads a `u16` at `offset`. See the module docs for the capacity contract.
#[inline]
#[must_use]
pub fn read_u16(input: &[u8], offset: usize) -> u16 {
    let mut raw = [0u8; 2];
    raw.copy_from_slice(&input[offset..offset + 2]);
    u16::from_le_bytes(raw)
}

/// Reads a `u32` at `offset`.
#[inline]
#[must_use]
pub fn read_u32(input: &[u8], offset: usize) -> u32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&input[offset..offset + 4]);
    u32::from_le_bytes(raw)
}

/// Reads a `u64` at `offset`.
#[inline]
#[must_use]
pub fn read_u64(input: &[u8], offset: usize) -> u64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&input[offset..offset + 8]);
    u64::from_le_bytes(raw)
}

/// Reads an `i16` at `offset`.
#[inline]
#[must_use]
pub fn read_i16(input: &[u8], offset: usize) -> i16 {
    let mut raw = [0u8; 2];
    raw.copy_from_slice(&input[offset..offset + 2]);
    i16::from_le_bytes(raw)
}

/// Reads an `i32` at `offset`.
#[inline]
#[must_use]
pub fn read_i32(input: &[u8], offset: usize) -> i32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&input[offset..offset + 4]);
    i32::from_le_bytes(raw)
}

/// Reads an `i64` at `offset`.
#[inline]
#[must_use]
pub fn read_i64(input: &[u8], offset: usize) -> i64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&input[offset..offset + 8]);
    i64::from_le_bytes(raw)
}

/// Reads an `f32` at `offset`.
#[inline]
#[must_use]
pub fn read_f32(input: &[u8], offset: usize) -> f32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&input[offset..offset + 4]);
    f32::from_le_bytes(raw)
}

/// Reads an `f64` at `offset`.
#[inline]
#[must_use]
pub fn read_f64(input: &[u8], offset: usize) -> f64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&input[offset..offset + 8]);
    f64::from_le_bytes(raw)
}

/// Writes a `u16` at `offset`.
#[inline]
pub fn write_u16(output: &mut [u8], offset: usize, value: u16) {
    output[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

/// Writes a `u32` at `offset`.
#[inline]
pub fn write_u32(output: &mut [u8], offset: usize, value: u32) {
    output[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Writes a `u64` at `offset`.
#[inline]
pub fn write_u64(output: &mut [u8], offset: usize, value: u64) {
    output[offset..offset + 8].copy_from_slice(&value.to_le_bytes());
}

/// Writes an `i16` at `offset`.
#[inline]
pub fn write_i16(output: &mut [u8], offset: usize, value: i16) {
    output[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

/// Writes an `i32` at `offset`.
#[inline]
pub fn write_i32(output: &mut [u8], offset: usize, value: i32) {
    output[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Writes an `i64` at `offset`.
#[inline]
pub fn write_i64(output: &mut [u8], offset: usize, value: i64) {
    output[offset..offset + 8].copy_from_slice(&value.to_le_bytes());
}

/// Writes an `f32` at `offset`.
#[inline]
pub fn write_f32(output: &mut [u8], offset: usize, value: f32) {
    output[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Writes an `f64` at `offset`.
#[inline]
pub fn write_f64(output: &mut [u8], offset: usize, value: f64) {
    output[offset..offset + 8].copy_from_slice(&value.to_le_bytes());
}

// ============================================================================
// Var-length codecs
// ============================================================================

/// Encodes a length-prefixed string into `output` starting at offset 0.
///
/// Returns the number of bytes written (`4 + value.len()`).
///
/// # Errors
///
/// Returns [`WireError::ShortBuffer`] if `output` cannot hold the prefix and
/// the content.
pub fn encode_var_string(value: &str, output: &mut [u8]) -> WireResult<usize> {
    encode_var_bytes(value.as_bytes(), output)
}

/// Decodes a length-prefixed string from `input` starting at offset 0.
///
/// Returns the string and the number of bytes consumed. The advertised byte
/// length is always consumed; content is copied as-is, and the declared UTF-8
/// character set is a convention the decoder does not enforce (invalid
/// sequences are replaced, never rejected).
///
/// # Errors
///
/// Returns [`WireError::ShortBuffer`] if the prefix or the advertised content
/// is truncated.
pub fn decode_var_string(input: &[u8]) -> WireResult<(String, usize)> {
    let len = read_len(input, 0)?;
    check_remaining(input, LEN_PREFIX_SIZE, len)?;
    let content = &input[LEN_PREFIX_SIZE..LEN_PREFIX_SIZE + len];
    Ok((
        String::from_utf8_lossy(content).into_owned(),
        LEN_PREFIX_SIZE + len,
    ))
}

/// Encodes a length-prefixed byte blob into `output` starting at offset 0.
///
/// # Errors
///
/// Returns [`WireError::ShortBuffer`] if `output` cannot hold the prefix and
/// the content.
pub fn encode_var_bytes(value: &[u8], output: &mut [u8]) -> WireResult<usize> {
    let needed = LEN_PREFIX_SIZE + value.len();
    if output.len() < needed {
        return Err(WireError::ShortBuffer {
            needed,
            available: output.len(),
        });
    }
    write_len(output, 0, value.len());
    output[LEN_PREFIX_SIZE..needed].copy_from_slice(value);
    Ok(needed)
}

/// Decodes a length-prefixed byte blob from `input` starting at offset 0.
///
/// # Errors
///
/// Returns [`WireError::ShortBuffer`] if the prefix or the advertised content
/// is truncated.
pub fn decode_var_bytes(input: &[u8]) -> WireResult<(Vec<u8>, usize)> {
    let len = read_len(input, 0)?;
    check_remaining(input, LEN_PREFIX_SIZE, len)?;
    Ok((
        input[LEN_PREFIX_SIZE..LEN_PREFIX_SIZE + len].to_vec(),
        LEN_PREFIX_SIZE + len,
    ))
}
