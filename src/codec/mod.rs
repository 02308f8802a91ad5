//! # Codec Runtime
//!
//! The hand-written core the emitted codecs are built from: the
//! [`WireEncode`]/[`WireDecode`] capability traits, the codec error taxonomy,
//! and the little-endian primitive helpers.
//!
//! ## Contracts
//!
//! For every schema type and every value `v`:
//!
//! - `decode(encode(v)) == v` (round-trip; map-containing types compare at the
//!   value level because map entry order is not specified);
//! - `encoded_size(v) == encode(v).len()` exactly;
//! - `decode` on a valid encoding consumes exactly `encoded_size(v)` bytes.
//!
//! The codec is purely synchronous byte manipulation over caller-provided
//! buffers: no I/O, no blocking, no global state.

pub mod error;
pub mod primitives;
pub mod traits;

pub use error::{WireError, WireResult};
pub use traits::{WireDecode, WireEncode};
