//! # Wiremsg
//!
//! Schema-driven binary message serialization and dispatch for inter-process
//! and inter-host links in latency-sensitive environments (telemetry, control,
//! instrumentation).
//!
//! Message schemas are defined once in an external schema compiler; per-type
//! codec code is emitted per language. This crate holds the Rust side:
//!
//! - **Codec runtime** (`codec`): the [`WireEncode`]/[`WireDecode`] contracts,
//!   the error taxonomy, and the little-endian primitive helpers the emitted
//!   codecs are built from.
//! - **Protocol identity** (`protocol`): protocol/message ids, payload
//!   routing keys, and the per-message structural hashes that detect schema
//!   drift between peers.
//! - **Schema types** (`types`): the emitted message definitions with their
//!   codecs.
//! - **Protocols** (`proto`): the emitted per-protocol constants and typed
//!   dispatchers.
//!
//! # Wire Format
//!
//! All scalars are little-endian and packed without padding or alignment.
//! Dynamic containers (arrays, strings, byte blobs, maps) carry a `u32`
//! little-endian count prefix; fixed-size arrays and structs carry nothing but
//! their payload. There is no envelope, magic number, or type tag on the wire:
//! the receiver learns what to decode from the out-of-band
//! `(protocol id, message id)` pair.
//!
//! # Example
//!
//! ```
//! use wiremsg::codec::{WireDecode, WireEncode};
//! use wiremsg::types::FlatStruct;
//!
//! let msg = FlatStruct { f0: 42, ..Default::default() };
//! let bytes = msg.encode_to_vec().unwrap();
//! assert_eq!(bytes.len(), msg.encoded_size());
//!
//! let (back, read) = FlatStruct::decode(&bytes).unwrap();
//! assert_eq!(back, msg);
//! assert_eq!(read, bytes.len());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod codec;
pub mod protocol;

// Emitted modules carry doc comments only where the schema source has them.
#[allow(missing_docs)]
pub mod proto;
#[allow(missing_docs)]
pub mod types;

pub use codec::{WireDecode, WireEncode, WireError, WireResult};
pub use protocol::{MessageId, MessageInfo, PayloadId, ProtocolId, ProtocolInfo};
