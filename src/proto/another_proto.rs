//! `another_proto` protocol.

use tracing::{trace, warn};

use crate::protocol::dispatch::{
    deliver, install, DispatchError, DispatchResult, Handler, HandlerError,
};
use crate::protocol::{MessageId, MessageInfo, ProtocolId, ProtocolInfo};
use crate::types::CrossProto;

pub const ANOTHER_PROTO_ID: ProtocolId = ProtocolId::new(2);
pub const ANOTHER_PROTO_NAME: &str = "another_proto";

pub const CROSS_PROTO_MSG_ID: MessageId = MessageId::new(0);

pub const CROSS_PROTO_MSG_HASH: u64 = 2248145386165663389;

/// XOR of all message hashes; a coarse schema-version fingerprint.
pub const ANOTHER_PROTO_HASH: u64 = CROSS_PROTO_MSG_HASH;

/// Message table, ordered by id.
pub const ANOTHER_PROTO_MESSAGES: [MessageInfo; 1] = [MessageInfo {
    id: CROSS_PROTO_MSG_ID,
    name: "another_proto/CrossProtoMsg",
    hash: CROSS_PROTO_MSG_HASH,
}];

/// Protocol info table.
pub const ANOTHER_PROTO_INFO: ProtocolInfo = ProtocolInfo {
    id: ANOTHER_PROTO_ID,
    name: ANOTHER_PROTO_NAME,
    hash: ANOTHER_PROTO_HASH,
    messages: &ANOTHER_PROTO_MESSAGES,
};

/// Routes `another_proto` payloads to typed handlers.
///
/// `C` is an opaque caller context passed through to handlers unchanged.
pub struct AnotherProtoDispatcher<C> {
    on_cross_proto: Option<Handler<C, CrossProto>>,
}

impl<C> AnotherProtoDispatcher<C> {
    /// Creates a dispatcher with no handlers installed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            on_cross_proto: None,
        }
    }

    /// Installs the handler for `CrossProtoMsg`.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::DuplicateHandler` on a second install.
    pub fn set_cross_proto_handler<F>(&mut self, handler: F) -> DispatchResult<()>
    where
        F: Fn(&mut C, CrossProto) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        install(
            &mut self.on_cross_proto,
            "another_proto/CrossProtoMsg",
            handler,
        )
    }

    /// Decodes `body` as the message registered under `id` and invokes its
    /// handler with `ctx`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownMessageId` for an id outside the protocol, `NoHandler`
    /// for an empty slot, `Decode` when the payload does not parse,
    /// `TrailingBytes` when the decoder leaves bytes unconsumed, and
    /// `Handler` when the handler itself fails.
    pub fn dispatch(&self, ctx: &mut C, id: MessageId, body: &[u8]) -> DispatchResult<()> {
        trace!(protocol = ANOTHER_PROTO_NAME, %id, len = body.len(), "dispatching payload");
        match id {
            CROSS_PROTO_MSG_ID => deliver(
                ctx,
                body,
                "another_proto/CrossProtoMsg",
                self.on_cross_proto.as_ref(),
            ),
            _ => {
                warn!(protocol = ANOTHER_PROTO_NAME, %id, "unknown message id");
                Err(DispatchError::UnknownMessageId {
                    protocol: ANOTHER_PROTO_NAME,
                    id,
                })
            }
        }
    }
}

impl<C> Default for AnotherProtoDispatcher<C> {
    fn default() -> Self {
        Self::new()
    }
}
