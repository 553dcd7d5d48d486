use bytes::Bytes;

use crate::utils::error::{Error, Result};

pub const TYPE_LEN: usize = 1;
pub const TOPIC_LEN: usize = 128;
/// Smallest valid frame: type byte plus the padded topic, with an empty payload.
pub const HEADER_LEN: usize = TYPE_LEN + TOPIC_LEN;

/// The operation a frame asks the broker to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MessageKind {
    /// Join a topic; the payload is a greeting relayed to existing subscribers.
    Subscribe = 0,
    /// Fan the payload out to every other subscriber of the topic.
    Publish = 1,
    /// Leave a topic; the payload is a farewell relayed to the remaining subscribers.
    Unsubscribe = 2,
}

impl TryFrom<u8> for MessageKind {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(MessageKind::Subscribe),
            1 => Ok(MessageKind::Publish),
            2 => Ok(MessageKind::Unsubscribe),
            other => Err(Error::UnrecognizedType(other)),
        }
    }
}

impl From<MessageKind> for u8 {
    fn from(kind: MessageKind) -> u8 {
        kind as u8
    }
}

/// A decoded client frame.
///
/// `payload` is never interpreted; it is handed to recipients byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub kind: MessageKind,
    pub topic: String,
    pub payload: Bytes,
}

impl Frame {
    pub fn new(kind: MessageKind, topic: impl Into<String>, payload: impl Into<Bytes>) -> Self {
        Self {
            kind,
            topic: topic.into(),
            payload: payload.into(),
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        encode(self.kind, &self.topic, &self.payload)
    }
}

/// Parses one raw frame.
///
/// The topic field is decoded lossily, stripped of every NUL and trimmed, so
/// `"news\0\0..."` and `" news "` both name the topic `news`.
pub fn decode(raw: &[u8]) -> Result<Frame> {
    if raw.len() < HEADER_LEN {
        return Err(Error::MalformedMessage {
            required: HEADER_LEN,
            actual: raw.len(),
        });
    }

    let kind = MessageKind::try_from(raw[0])?;
    let topic = String::from_utf8_lossy(&raw[TYPE_LEN..HEADER_LEN])
        .replace('\0', "")
        .trim_matches(is_topic_padding)
        .to_string();
    let payload = Bytes::copy_from_slice(&raw[HEADER_LEN..]);

    Ok(Frame {
        kind,
        topic,
        payload,
    })
}

/// Whitespace stripped around a topic name: Unicode whitespace plus the byte order mark,
/// except NEL (U+0085), which is kept as part of the name.
fn is_topic_padding(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Builds a raw frame: type byte, topic padded with NUL to [`TOPIC_LEN`], then the payload.
pub fn encode(kind: MessageKind, topic: &str, payload: &[u8]) -> Result<Vec<u8>> {
    let topic_bytes = topic.as_bytes();
    if topic_bytes.len() > TOPIC_LEN {
        return Err(Error::TopicTooLong {
            max: TOPIC_LEN,
            actual: topic_bytes.len(),
        });
    }

    let mut raw = Vec::with_capacity(HEADER_LEN + payload.len());
    raw.push(u8::from(kind));
    raw.extend_from_slice(topic_bytes);
    raw.resize(HEADER_LEN, 0);
    raw.extend_from_slice(payload);
    Ok(raw)
}
