//! `test_proto` protocol.

use tracing::{trace, warn};

use crate::protocol::dispatch::{
    deliver, install, DispatchError, DispatchResult, Handler, HandlerError,
};
use crate::protocol::{MessageId, MessageInfo, ProtocolId, ProtocolInfo};
use crate::types::{
    ComplexStruct, ComplexStructWithEmpty, EmptyStruct, FlatStruct, SimpleStruct, StructWithEnum,
    VarSizeStruct,
};

pub const TEST_PROTO_ID: ProtocolId = ProtocolId::new(1);
pub const TEST_PROTO_NAME: &str = "test_proto";

pub const SIMPLE_STRUCT_MSG_ID: MessageId = MessageId::new(0);
pub const COMPLEX_STRUCT_MSG_ID: MessageId = MessageId::new(1);
pub const VAR_SIZE_STRUCT_MSG_ID: MessageId = MessageId::new(2);
pub const STRUCT_WITH_ENUM_MSG_ID: MessageId = MessageId::new(3);
pub const EMPTY_STRUCT_MSG_ID: MessageId = MessageId::new(4);
pub const COMPLEX_STRUCT_WITH_EMPTY_MSG_ID: MessageId = MessageId::new(5);
pub const FLAT_STRUCT_MSG_ID: MessageId = MessageId::new(6);

pub const SIMPLE_STRUCT_MSG_HASH: u64 = 8907084906551902800;
pub const COMPLEX_STRUCT_MSG_HASH: u64 = 13175519609512977733;
pub const VAR_SIZE_STRUCT_MSG_HASH: u64 = 5435490035279963712;
pub const STRUCT_WITH_ENUM_MSG_HASH: u64 = 6055563520997835207;
pub const EMPTY_STRUCT_MSG_HASH: u64 = 3100545273670706333;
pub const COMPLEX_STRUCT_WITH_EMPTY_MSG_HASH: u64 = 6361895152686449557;
pub const FLAT_STRUCT_MSG_HASH: u64 = 4307241867563644348;

/// XOR of all message hashes; a coarse schema-version fingerprint.
pub const TEST_PROTO_HASH: u64 = SIMPLE_STRUCT_MSG_HASH
    ^ COMPLEX_STRUCT_MSG_HASH
    ^ VAR_SIZE_STRUCT_MSG_HASH
    ^ STRUCT_WITH_ENUM_MSG_HASH
    ^ EMPTY_STRUCT_MSG_HASH
    ^ COMPLEX_STRUCT_WITH_EMPTY_MSG_HASH
    ^ FLAT_STRUCT_MSG_HASH;

/// Message table, ordered by id.
pub const TEST_PROTO_MESSAGES: [MessageInfo; 7] = [
    MessageInfo {
        id: SIMPLE_STRUCT_MSG_ID,
        name: "test_proto/SimpleStructMsg",
        hash: SIMPLE_STRUCT_MSG_HASH,
    },
    MessageInfo {
        id: COMPLEX_STRUCT_MSG_ID,
        name: "test_proto/ComplexStructMsg",
        hash: COMPLEX_STRUCT_MSG_HASH,
    },
    MessageInfo {
        id: VAR_SIZE_STRUCT_MSG_ID,
        name: "test_proto/VarSizeStructMsg",
        hash: VAR_SIZE_STRUCT_MSG_HASH,
    },
    MessageInfo {
        id: STRUCT_WITH_ENUM_MSG_ID,
        name: "test_proto/StructWithEnumMsg",
        hash: STRUCT_WITH_ENUM_MSG_HASH,
    },
    MessageInfo {
        id: EMPTY_STRUCT_MSG_ID,
        name: "test_proto/EmptyStructMsg",
        hash: EMPTY_STRUCT_MSG_HASH,
    },
    MessageInfo {
        id: COMPLEX_STRUCT_WITH_EMPTY_MSG_ID,
        name: "test_proto/ComplexStructWithEmptyMsg",
        hash: COMPLEX_STRUCT_WITH_EMPTY_MSG_HASH,
    },
    MessageInfo {
        id: FLAT_STRUCT_MSG_ID,
        name: "test_proto/FlatStructMsg",
        hash: FLAT_STRUCT_MSG_HASH,
    },
];

/// Protocol info table.
pub const TEST_PROTO_INFO: ProtocolInfo = ProtocolInfo {
    id: TEST_PROTO_ID,
    name: TEST_PROTO_NAME,
    hash: TEST_PROTO_HASH,
    messages: &TEST_PROTO_MESSAGES,
};

/// Routes `test_proto` payloads to typed handlers.
///
/// `C` is an opaque caller context passed through to handlers unchanged.
/// Install handlers during bootstrap, then share the dispatcher freely:
/// `dispatch` takes `&self` and the handler table is read-only after setup.
pub struct TestProtoDispatcher<C> {
    on_simple_struct: Option<Handler<C, SimpleStruct>>,
    on_complex_struct: Option<Handler<C, ComplexStruct>>,
    on_var_size_struct: Option<Handler<C, VarSizeStruct>>,
    on_struct_with_enum: Option<Handler<C, StructWithEnum>>,
    on_empty_struct: Option<Handler<C, EmptyStruct>>,
    on_complex_struct_with_empty: Option<Handler<C, ComplexStructWithEmpty>>,
    on_flat_struct: Option<Handler<C, FlatStruct>>,
}

impl<C> TestProtoDispatcher<C> {
    /// Creates a dispatcher with no handlers installed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            on_simple_struct: None,
            on_complex_struct: None,
            on_var_size_struct: None,
            on_struct_with_enum: None,
            on_empty_struct: None,
            on_complex_struct_with_empty: None,
            on_flat_struct: None,
        }
    }

    /// Installs the handler for `SimpleStructMsg`.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::DuplicateHandler` on a second install.
    pub fn set_simple_struct_handler<F>(&mut self, handler: F) -> DispatchResult<()>
    where
        F: Fn(&mut C, SimpleStruct) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        install(
            &mut self.on_simple_struct,
            "test_proto/SimpleStructMsg",
            handler,
        )
    }

    /// Installs the handler for `ComplexStructMsg`.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::DuplicateHandler` on a second install.
    pub fn set_complex_struct_handler<F>(&mut self, handler: F) -> DispatchResult<()>
    where
        F: Fn(&mut C, ComplexStruct) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        install(
            &mut self.on_complex_struct,
            "test_proto/ComplexStructMsg",
            handler,
        )
    }

    /// Installs the handler for `VarSizeStructMsg`.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::DuplicateHandler` on a second install.
    pub fn set_var_size_struct_handler<F>(&mut self, handler: F) -> DispatchResult<()>
    where
        F: Fn(&mut C, VarSizeStruct) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        install(
            &mut self.on_var_size_struct,
            "test_proto/VarSizeStructMsg",
            handler,
        )
    }

    /// Installs the handler for `StructWithEnumMsg`.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::DuplicateHandler` on a second install.
    pub fn set_struct_with_enum_handler<F>(&mut self, handler: F) -> DispatchResult<()>
    where
        F: Fn(&mut C, StructWithEnum) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        install(
            &mut self.on_struct_with_enum,
            "test_proto/StructWithEnumMsg",
            handler,
        )
    }

    /// Installs the handler for `EmptyStructMsg`.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::DuplicateHandler` on a second install.
    pub fn set_empty_struct_handler<F>(&mut self, handler: F) -> DispatchResult<()>
    where
        F: Fn(&mut C, EmptyStruct) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        install(
            &mut self.on_empty_struct,
            "test_proto/EmptyStructMsg",
            handler,
        )
    }

    /// Installs the handler for `ComplexStructWithEmptyMsg`.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::DuplicateHandler` on a second install.
    pub fn set_complex_struct_with_empty_handler<F>(&mut self, handler: F) -> DispatchResult<()>
    where
        F: Fn(&mut C, ComplexStructWithEmpty) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        install(
            &mut self.on_complex_struct_with_empty,
            "test_proto/ComplexStructWithEmptyMsg",
            handler,
        )
    }

    /// Installs the handler for `FlatStructMsg`.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::DuplicateHandler` on a second install.
    pub fn set_flat_struct_handler<F>(&mut self, handler: F) -> DispatchResult<()>
    where
        F: Fn(&mut C, FlatStruct) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        install(
            &mut self.on_flat_struct,
            "test_proto/FlatStructMsg",
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
        trace!(protocol = TEST_PROTO_NAME, %id, len = body.len(), "dispatching payload");
        match id {
            SIMPLE_STRUCT_MSG_ID => deliver(
                ctx,
                body,
                "test_proto/SimpleStructMsg",
                self.on_simple_struct.as_ref(),
            ),
            COMPLEX_STRUCT_MSG_ID => deliver(
                ctx,
                body,
                "test_proto/ComplexStructMsg",
                self.on_complex_struct.as_ref(),
            ),
            VAR_SIZE_STRUCT_MSG_ID => deliver(
                ctx,
                body,
                "test_proto/VarSizeStructMsg",
                self.on_var_size_struct.as_ref(),
            ),
            STRUCT_WITH_ENUM_MSG_ID => deliver(
                ctx,
                body,
                "test_proto/StructWithEnumMsg",
                self.on_struct_with_enum.as_ref(),
            ),
            EMPTY_STRUCT_MSG_ID => deliver(
                ctx,
                body,
                "test_proto/EmptyStructMsg",
                self.on_empty_struct.as_ref(),
            ),
            COMPLEX_STRUCT_WITH_EMPTY_MSG_ID => deliver(
                ctx,
                body,
                "test_proto/ComplexStructWithEmptyMsg",
                self.on_complex_struct_with_empty.as_ref(),
            ),
            FLAT_STRUCT_MSG_ID => deliver(
                ctx,
                body,
                "test_proto/FlatStructMsg",
                self.on_flat_struct.as_ref(),
            ),
            _ => {
                warn!(protocol = TEST_PROTO_NAME, %id, "unknown message id");
                Err(DispatchError::UnknownMessageId {
                    protocol: TEST_PROTO_NAME,
                    id,
                })
            }
        }
    }
}

impl<C> Default for TestProtoDispatcher<C> {
    fn default() -> Self {
        Self::new()
    }
}
