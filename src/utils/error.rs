//! The `error` module defines the error type shared across `minipub`.
//!
//! Decode failures never escape a transition as a panic; they are returned next to a
//! valid snapshot so the caller can report them and keep the session going.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Frame shorter than the fixed header (type byte plus padded topic).
    #[error("malformed message: need at least {required} bytes, got {actual}")]
    MalformedMessage { required: usize, actual: usize },

    /// Type byte outside of subscribe/publish/unsubscribe.
    #[error("unrecognized message type: {0}")]
    UnrecognizedType(u8),

    #[error("topic is {actual} bytes, the wire format allows at most {max}")]
    TopicTooLong { max: usize, actual: usize },

    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// The session task has stopped and can no longer accept frames.
    #[error("session closed")]
    SessionClosed,
}

pub type Result<T> = std::result::Result<T, Error>;
