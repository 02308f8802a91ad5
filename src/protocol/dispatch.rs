//! # Dispatch Support
//!
//! The hand-written half of the per-protocol dispatchers: the error taxonomy,
//! the handler slot type, and the install/deliver steps every emitted
//! dispatcher routes through.
//!
//! A dispatcher is a passive registry owned by the receiving side of a
//! protocol. Handlers are installed once during bootstrap; after setup the
//! registry is read-only, so concurrent [`deliver`] calls on a shared
//! dispatcher are safe. The caller-provided context is passed through to the
//! handler unchanged and never inspected.

use crate::codec::{WireDecode, WireError};
use crate::protocol::MessageId;

/// Error type handlers may return; wrapped into
/// [`DispatchError::Handler`] and propagated to the dispatch caller.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A registered handler slot: decoded message in, handler verdict out.
pub type Handler<C, M> =
    Box<dyn Fn(&mut C, M) -> Result<(), HandlerError> + Send + Sync + 'static>;

/// Dispatcher error.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The id is not part of the protocol.
    #[error("unknown message id {id} for protocol {protocol}")]
    UnknownMessageId {
        /// Protocol name.
        protocol: &'static str,
        /// The rejected id.
        id: MessageId,
    },

    /// The id is known but no handler was installed for it.
    #[error("no handler installed for message {message}")]
    NoHandler {
        /// Qualified message name.
        message: &'static str,
    },

    /// The payload failed to decode as the registered message type.
    #[error("failed to decode message {message}: {source}")]
    Decode {
        /// Qualified message name.
        message: &'static str,
        /// The codec failure.
        #[source]
        source: WireError,
    },

    /// The payload decoded but was not fully consumed.
    ///
    /// Exact length equality is a hard requirement; accepting trailing bytes
    /// would let malformed framing pass silently.
    #[error("message {message} consumed {read} of {len} payload bytes")]
    TrailingBytes {
        /// Qualified message name.
        message: &'static str,
        /// Bytes the decoder consumed.
        read: usize,
        /// Payload length.
        len: usize,
    },

    /// The handler itself failed.
    #[error("handler for message {message} failed: {source}")]
    Handler {
        /// Qualified message name.
        message: &'static str,
        /// The handler's error.
        #[source]
        source: HandlerError,
    },

    /// A handler was installed twice for the same message.
    #[error("handler for message {message} already installed")]
    DuplicateHandler {
        /// Qualified message name.
        message: &'static str,
    },
}

/// Result type for dispatcher operations.
pub type DispatchResult<T> = std::result::Result<T, DispatchError>;

/// Installs a handler into an empty slot.
///
/// Installation is a one-time bootstrap action; there is no way to uninstall
/// or replace a handler.
///
/// # Errors
///
/// Returns [`DispatchError::DuplicateHandler`] if the slot is occupied.
pub fn install<C, M, F>(
    slot: &mut Option<Handler<C, M>>,
    message: &'static str,
    handler: F,
) -> DispatchResult<()>
where
    F: Fn(&mut C, M) -> Result<(), HandlerError> + Send + Sync + 'static,
{
    if slot.is_some() {
        return Err(DispatchError::DuplicateHandler { message });
    }
    *slot = Some(Box::new(handler));
    Ok(())
}

/// Decodes `body` as `M`, verifies full consumption, and invokes the handler.
///
/// # Errors
///
/// Returns [`DispatchError::NoHandler`] on an empty slot,
/// [`DispatchError::Decode`] when the payload does not decode,
/// [`DispatchError::TrailingBytes`] when it decodes without consuming every
/// byte, and [`DispatchError::Handler`] when the handler fails.
pub fn deliver<C, M: WireDecode>(
    ctx: &mut C,
    body: &[u8],
    message: &'static str,
    slot: Option<&Handler<C, M>>,
) -> DispatchResult<()> {
    let handler = slot.ok_or(DispatchError::NoHandler { message })?;

    let (msg, read) =
        M::decode(body).map_err(|source| DispatchError::Decode { message, source })?;
    if read != body.len() {
        return Err(DispatchError::TrailingBytes {
            message,
            read,
            len: body.len(),
        });
    }

    handler(ctx, msg).map_err(|source| DispatchError::Handler { message, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::WireResult;

    #[derive(Debug, PartialEq)]
    struct Unit;

    impl WireDecode for Unit {
        fn decode(_buffer: &[u8]) -> WireResult<(Self, usize)> {
            Ok((Unit, 0))
        }
    }

    #[test]
    fn install_rejects_second_handler() {
        let mut slot: Option<Handler<(), Unit>> = None;
        install(&mut slot, "p/Unit", |_, _| Ok(())).unwrap();

        let err = install(&mut slot, "p/Unit", |_, _| Ok(())).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::DuplicateHandler { message: "p/Unit" }
        ));
    }

    #[test]
    fn deliver_without_handler_fails() {
        let err = deliver::<(), Unit>(&mut (), &[], "p/Unit", None).unwrap_err();
        assert!(matches!(err, DispatchError::NoHandler { .. }));
    }

    #[test]
    fn deliver_rejects_trailing_bytes() {
        let mut slot: Option<Handler<(), Unit>> = None;
        install(&mut slot, "p/Unit", |_, _| Ok(())).unwrap();

        let err = deliver(&mut (), &[0xff], "p/Unit", slot.as_ref()).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::TrailingBytes {
                read: 0,
                len: 1,
                ..
            }
        ));
    }

    #[test]
    fn handler_error_is_wrapped() {
        let mut slot: Option<Handler<(), Unit>> = None;
        install(&mut slot, "p/Unit", |_, _| Err("boom".into())).unwrap();

        let err = deliver(&mut (), &[], "p/Unit", slot.as_ref()).unwrap_err();
        match err {
            DispatchError::Handler { message, source } => {
                assert_eq!(message, "p/Unit");
                assert_eq!(source.to_string(), "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
