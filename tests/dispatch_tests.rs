//! # Dispatcher Scenarios
//!
//! End-to-end checks of the per-protocol dispatchers: the happy path, every
//! rejection in the contract, and post-setup thread safety.

use wiremsg::codec::WireEncode;
use wiremsg::proto::another_proto::{AnotherProtoDispatcher, CROSS_PROTO_MSG_ID};
use wiremsg::proto::test_proto::{
    TestProtoDispatcher, EMPTY_STRUCT_MSG_ID, FLAT_STRUCT_MSG_ID, SIMPLE_STRUCT_MSG_ID,
};
use wiremsg::protocol::dispatch::DispatchError;
use wiremsg::protocol::MessageId;
use wiremsg::types::{CrossProto, SimpleEnum, SimpleStruct};

fn simple() -> SimpleStruct {
    SimpleStruct {
        f0: 0x1234567890abcdef,
        f1: 0x1234567890abcdef,
        f1_pad: 0x12,
        f2: 1.2345678901234567890,
        f3: 0x12345678,
        f4: 0x12345678,
        f5: 1.2345678901234567890,
        f6: 0x1234,
        f7: 0x12,
        f8: -0x12,
        f9: true,
    }
}

/// Caller context: records what the handlers saw.
#[derive(Default)]
struct CallLog {
    simple: Vec<SimpleStruct>,
    empty_calls: usize,
}

#[test]
fn dispatch_invokes_handler_exactly_once_with_equal_value() {
    let mut dispatcher = TestProtoDispatcher::<CallLog>::new();
    dispatcher
        .set_simple_struct_handler(|ctx, msg| {
            ctx.simple.push(msg);
            Ok(())
        })
        .unwrap();

    let expected = simple();
    let body = expected.encode_to_vec().unwrap();

    let mut log = CallLog::default();
    dispatcher
        .dispatch(&mut log, SIMPLE_STRUCT_MSG_ID, &body)
        .unwrap();

    assert_eq!(log.simple, vec![expected]);
}

#[test]
fn empty_payload_dispatches_empty_struct() {
    let mut dispatcher = TestProtoDispatcher::<CallLog>::new();
    dispatcher
        .set_empty_struct_handler(|ctx, _msg| {
            ctx.empty_calls += 1;
            Ok(())
        })
        .unwrap();

    let mut log = CallLog::default();
    dispatcher
        .dispatch(&mut log, EMPTY_STRUCT_MSG_ID, &[])
        .unwrap();

    assert_eq!(log.empty_calls, 1);
}

#[test]
fn unknown_message_id_is_rejected() {
    let dispatcher = TestProtoDispatcher::<CallLog>::new();

    let err = dispatcher
        .dispatch(&mut CallLog::default(), MessageId::new(99), &[])
        .unwrap_err();
    assert!(matches!(
        err,
        DispatchError::UnknownMessageId {
            protocol: "test_proto",
            ..
        }
    ));
}

#[test]
fn known_id_without_handler_is_rejected() {
    let dispatcher = TestProtoDispatcher::<CallLog>::new();
    let body = simple().encode_to_vec().unwrap();

    let err = dispatcher
        .dispatch(&mut CallLog::default(), SIMPLE_STRUCT_MSG_ID, &body)
        .unwrap_err();
    assert!(matches!(err, DispatchError::NoHandler { .. }));
}

#[test]
fn duplicate_handler_install_is_rejected() {
    let mut dispatcher = TestProtoDispatcher::<CallLog>::new();
    dispatcher.set_simple_struct_handler(|_, _| Ok(())).unwrap();

    let err = dispatcher
        .set_simple_struct_handler(|_, _| Ok(()))
        .unwrap_err();
    assert!(matches!(err, DispatchError::DuplicateHandler { .. }));
}

#[test]
fn truncated_payload_fails_with_decode_error() {
    let mut dispatcher = TestProtoDispatcher::<CallLog>::new();
    dispatcher.set_simple_struct_handler(|_, _| Ok(())).unwrap();

    let body = simple().encode_to_vec().unwrap();
    let err = dispatcher
        .dispatch(&mut CallLog::default(), SIMPLE_STRUCT_MSG_ID, &body[..10])
        .unwrap_err();
    assert!(matches!(
        err,
        DispatchError::Decode {
            message: "test_proto/SimpleStructMsg",
            ..
        }
    ));
}

#[test]
fn trailing_bytes_are_rejected() {
    let mut dispatcher = TestProtoDispatcher::<CallLog>::new();
    dispatcher.set_simple_struct_handler(|_, _| Ok(())).unwrap();

    let mut body = simple().encode_to_vec().unwrap();
    body.push(0x00);

    let err = dispatcher
        .dispatch(&mut CallLog::default(), SIMPLE_STRUCT_MSG_ID, &body)
        .unwrap_err();
    assert!(matches!(
        err,
        DispatchError::TrailingBytes {
            read: 42,
            len: 43,
            ..
        }
    ));
}

#[test]
fn payload_routed_to_wrong_id_is_rejected() {
    let mut dispatcher = TestProtoDispatcher::<CallLog>::new();
    dispatcher.set_flat_struct_handler(|_, _| Ok(())).unwrap();

    // A 42-byte SimpleStruct payload routed to the 40-byte FlatStruct id
    // decodes but leaves bytes behind.
    let body = simple().encode_to_vec().unwrap();
    let err = dispatcher
        .dispatch(&mut CallLog::default(), FLAT_STRUCT_MSG_ID, &body)
        .unwrap_err();
    assert!(matches!(
        err,
        DispatchError::TrailingBytes {
            read: 40,
            len: 42,
            ..
        }
    ));
}

#[test]
fn handler_failure_is_wrapped_and_propagated() {
    let mut dispatcher = TestProtoDispatcher::<CallLog>::new();
    dispatcher
        .set_simple_struct_handler(|_, _| Err("handler exploded".into()))
        .unwrap();

    let body = simple().encode_to_vec().unwrap();
    let err = dispatcher
        .dispatch(&mut CallLog::default(), SIMPLE_STRUCT_MSG_ID, &body)
        .unwrap_err();
    match err {
        DispatchError::Handler { message, source } => {
            assert_eq!(message, "test_proto/SimpleStructMsg");
            assert_eq!(source.to_string(), "handler exploded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn another_proto_dispatches_cross_proto() {
    let mut dispatcher = AnotherProtoDispatcher::<Vec<CrossProto>>::new();
    dispatcher
        .set_cross_proto_handler(|ctx, msg| {
            ctx.push(msg);
            Ok(())
        })
        .unwrap();

    let expected = CrossProto {
        f0: 7,
        cross0: SimpleEnum::AnotherValue,
    };
    let body = expected.encode_to_vec().unwrap();

    let mut seen = Vec::new();
    dispatcher
        .dispatch(&mut seen, CROSS_PROTO_MSG_ID, &body)
        .unwrap();
    assert_eq!(seen, vec![expected]);
}

#[test]
fn dispatch_is_safe_to_share_after_setup() {
    let mut dispatcher = TestProtoDispatcher::<Vec<SimpleStruct>>::new();
    dispatcher
        .set_simple_struct_handler(|ctx, msg| {
            ctx.push(msg);
            Ok(())
        })
        .unwrap();
    let dispatcher = &dispatcher;

    let body = simple().encode_to_vec().unwrap();
    let body = body.as_slice();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || {
                    let mut seen = Vec::new();
                    for _ in 0..16 {
                        dispatcher
                            .dispatch(&mut seen, SIMPLE_STRUCT_MSG_ID, body)
                            .unwrap();
                    }
                    seen.len()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 16);
        }
    });
}
