//! The `protocol` module defines the binary frame clients send to the broker.
//!
//! ```text
//! offset 0       : 1 byte    message type (0=Subscribe, 1=Publish, 2=Unsubscribe)
//! offset 1..128  : 128 bytes topic name, UTF-8, NUL-padded
//! offset 129..N  : remaining bytes, opaque payload
//! ```
//!
//! Decoding only extracts fields; creating topics is the broker's job.

pub mod message;

pub use message::{Frame, HEADER_LEN, MessageKind, TOPIC_LEN, TYPE_LEN, decode, encode};

#[cfg(test)]
mod tests;
