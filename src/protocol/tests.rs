use super::message::{Frame, HEADER_LEN, MessageKind, decode, encode};
use crate::utils::error::Error;

#[test]
fn test_decode_subscribe_frame() {
    let raw = encode(MessageKind::Subscribe, "news", b"hi").unwrap();
    assert_eq!(raw.len(), HEADER_LEN + 2);

    let frame = decode(&raw).unwrap();
    assert_eq!(frame.kind, MessageKind::Subscribe);
    assert_eq!(frame.topic, "news");
    assert_eq!(&frame.payload[..], b"hi");
}

#[test]
fn test_decode_header_only_frame_has_empty_payload() {
    let raw = encode(MessageKind::Publish, "news", b"").unwrap();
    assert_eq!(raw.len(), HEADER_LEN);

    let frame = decode(&raw).unwrap();
    assert_eq!(frame.kind, MessageKind::Publish);
    assert!(frame.payload.is_empty());
}

#[test]
fn test_decode_short_frame_is_malformed() {
    let raw = vec![0u8; HEADER_LEN - 1];
    match decode(&raw) {
        Err(Error::MalformedMessage { required, actual }) => {
            assert_eq!(required, HEADER_LEN);
            assert_eq!(actual, HEADER_LEN - 1);
        }
        other => panic!("Expected MalformedMessage, got {other:?}"),
    }

    assert!(matches!(
        decode(&[]),
        Err(Error::MalformedMessage { actual: 0, .. })
    ));
}

#[test]
fn test_decode_unknown_type() {
    let mut raw = encode(MessageKind::Publish, "news", b"x").unwrap();
    raw[0] = 9;
    assert!(matches!(decode(&raw), Err(Error::UnrecognizedType(9))));
}

#[test]
fn test_decode_trims_whitespace_and_nuls() {
    let raw = encode(MessageKind::Subscribe, "  sports \t", b"").unwrap();
    assert_eq!(decode(&raw).unwrap().topic, "sports");

    let mut raw = encode(MessageKind::Subscribe, "", b"").unwrap();
    raw[1..4].copy_from_slice(b"a\0b");
    assert_eq!(decode(&raw).unwrap().topic, "ab");
}

#[test]
fn test_decode_strips_bom_but_keeps_nel() {
    let raw = encode(MessageKind::Subscribe, "\u{feff}news", b"").unwrap();
    assert_eq!(decode(&raw).unwrap().topic, "news");

    let raw = encode(MessageKind::Subscribe, "\u{85}news\u{85}", b"").unwrap();
    assert_eq!(decode(&raw).unwrap().topic, "\u{85}news\u{85}");

    let raw = encode(MessageKind::Subscribe, "\u{a0}news\u{2028}", b"").unwrap();
    assert_eq!(decode(&raw).unwrap().topic, "news");
}

#[test]
fn test_decode_topic_is_case_sensitive() {
    let upper = decode(&encode(MessageKind::Publish, "News", b"").unwrap()).unwrap();
    let lower = decode(&encode(MessageKind::Publish, "news", b"").unwrap()).unwrap();
    assert_ne!(upper.topic, lower.topic);
}

#[test]
fn test_decode_replaces_invalid_utf8_in_topic() {
    let mut raw = encode(MessageKind::Subscribe, "", b"").unwrap();
    raw[1] = 0xff;
    raw[2] = b'a';
    assert_eq!(decode(&raw).unwrap().topic, "\u{fffd}a");
}

#[test]
fn test_payload_passes_through_untouched() {
    let payload: Vec<u8> = (0..=255).collect();
    let raw = encode(MessageKind::Publish, "bin", &payload).unwrap();
    let frame = decode(&raw).unwrap();
    assert_eq!(&frame.payload[..], &payload[..]);
}

#[test]
fn test_encode_full_width_topic() {
    let topic = "t".repeat(128);
    let frame = decode(&encode(MessageKind::Subscribe, &topic, b"").unwrap()).unwrap();
    assert_eq!(frame.topic, topic);
}

#[test]
fn test_encode_rejects_long_topic() {
    let topic = "t".repeat(129);
    assert!(matches!(
        encode(MessageKind::Subscribe, &topic, b""),
        Err(Error::TopicTooLong {
            max: 128,
            actual: 129
        })
    ));
}

#[test]
fn test_frame_encode_matches_free_function() {
    let frame = Frame::new(MessageKind::Unsubscribe, "news", &b"bye"[..]);
    assert_eq!(
        frame.encode().unwrap(),
        encode(MessageKind::Unsubscribe, "news", b"bye").unwrap()
    );
    assert_eq!(decode(&frame.encode().unwrap()).unwrap(), frame);
}

#[test]
fn test_message_kind_tags() {
    assert_eq!(u8::from(MessageKind::Subscribe), 0);
    assert_eq!(u8::from(MessageKind::Publish), 1);
    assert_eq!(u8::from(MessageKind::Unsubscribe), 2);
    assert_eq!(MessageKind::try_from(1).unwrap(), MessageKind::Publish);
    assert!(MessageKind::try_from(3).is_err());
}
