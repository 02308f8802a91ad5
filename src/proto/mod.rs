//! # Protocols
//!
//! Per-protocol surface emitted by the schema compiler: message id and hash
//! constants, the protocol info table, and a typed dispatcher per protocol.
//!
//! A dispatcher owns one handler slot per message of its protocol. Handlers
//! are installed once during bootstrap; [`dispatch`](test_proto::TestProtoDispatcher::dispatch)
//! then routes an incoming `(message id, payload)` pair by decoding the
//! payload as the registered type, verifying exact-length consumption, and
//! invoking the typed handler with the caller's context.

pub mod another_proto;
pub mod test_proto;
