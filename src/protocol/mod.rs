//! # Protocol Identity
//!
//! Identity and routing types shared by every emitted protocol: protocol and
//! message ids, the combined [`PayloadId`] routing key, and the introspection
//! tables ([`MessageInfo`], [`ProtocolInfo`]) that expose the schema
//! compiler's structural hashes.
//!
//! ## Hashes
//!
//! Every message type carries a 64-bit structural fingerprint computed by the
//! schema compiler: the MD5 digest of the type's canonical JSON signature,
//! low eight bytes interpreted little-endian, XOR-folded with the hashes of
//! every referenced type. The compiler is the single source of truth — all
//! language ports embed the same constants, so two peers can compare hashes
//! to detect schema drift before exchanging payloads. A protocol's hash is
//! the XOR of its constituent message hashes.

pub mod dispatch;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Protocol identifier.
///
/// Unique across all protocols deployed in a particular system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProtocolId(u8);

impl ProtocolId {
    /// Creates a protocol id from its raw value.
    #[inline]
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for ProtocolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for ProtocolId {
    #[inline]
    fn from(id: u8) -> Self {
        Self(id)
    }
}

/// Message identifier: the ordinal of a message within its protocol.
///
/// Ids are dense `[0..N)` and unique within a protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(u8);

impl MessageId {
    /// Creates a message id from its raw value.
    #[inline]
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for MessageId {
    #[inline]
    fn from(id: u8) -> Self {
        Self(id)
    }
}

/// The out-of-band routing key: which protocol, which message.
///
/// Payloads carry no type tag on the wire; the sender transmits this pair
/// alongside the bytes and the receiver routes on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayloadId {
    /// The protocol the payload belongs to.
    pub protocol: ProtocolId,
    /// The message within that protocol.
    pub message: MessageId,
}

impl PayloadId {
    /// Creates a payload id from its parts.
    #[inline]
    #[must_use]
    pub const fn new(protocol: ProtocolId, message: MessageId) -> Self {
        Self { protocol, message }
    }
}

impl fmt::Display for PayloadId {
    /// Canonical textual form: `"<proto>:<msg>"` in decimal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.protocol, self.message)
    }
}

/// Identity of one message type within a protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageInfo {
    /// Ordinal of the message within its protocol.
    pub id: MessageId,
    /// Fully qualified message name, e.g. `test_proto/SimpleStructMsg`.
    pub name: &'static str,
    /// Structural fingerprint of the message type.
    pub hash: u64,
}

/// Identity of a protocol: id, name, aggregate hash, and message table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolInfo {
    /// The protocol id.
    pub id: ProtocolId,
    /// The protocol name.
    pub name: &'static str,
    /// XOR of all constituent message hashes; a coarse schema-version
    /// fingerprint.
    pub hash: u64,
    /// Message table, ordered by id.
    pub messages: &'static [MessageInfo],
}

impl ProtocolInfo {
    /// Looks up a message by id.
    #[must_use]
    pub fn message(&self, id: MessageId) -> Option<&MessageInfo> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// The payload routing key for one of this protocol's messages.
    #[must_use]
    pub const fn payload_id(&self, message: MessageId) -> PayloadId {
        PayloadId::new(self.id, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_id_canonical_form() {
        let id = PayloadId::new(ProtocolId::new(1), MessageId::new(0));
        assert_eq!(id.to_string(), "1:0");
    }

    #[test]
    fn message_lookup_by_id() {
        const MESSAGES: [MessageInfo; 2] = [
            MessageInfo {
                id: MessageId::new(0),
                name: "p/A",
                hash: 1,
            },
            MessageInfo {
                id: MessageId::new(1),
                name: "p/B",
                hash: 2,
            },
        ];
        let info = ProtocolInfo {
            id: ProtocolId::new(9),
            name: "p",
            hash: 3,
            messages: &MESSAGES,
        };

        assert_eq!(info.message(MessageId::new(1)).unwrap().name, "p/B");
        assert!(info.message(MessageId::new(2)).is_none());
        assert_eq!(info.payload_id(MessageId::new(1)).to_string(), "9:1");
    }
}
