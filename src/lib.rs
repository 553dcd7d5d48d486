//! # MiniPub
//!
//! `minipub` is the decision core of a minimal publish/subscribe broker. It consumes one
//! client-originated binary frame at a time and produces the next broker snapshot together
//! with the deliveries the transport layer should make.
//!
//! ## Core Modules
//!
//! - `protocol`: The fixed-layout wire format (type byte, 128-byte topic, opaque payload).
//! - `broker`: The immutable broker snapshot and the `transition` reducer over it.
//! - `session`: Sequential drivers that own a snapshot chain and drain its outbox per tick.
//! - `config`: Loading settings for the session driver and logging.
//! - `utils`: Shared error type and logging setup.
//!
//! Accepting connections, framing bytes off a socket and delivering the emitted
//! `(destination, payload)` pairs are left to the embedding transport.

pub mod broker;
pub mod config;
pub mod protocol;
pub mod session;
pub mod utils;

pub use broker::{BrokerState, ClientId, ClientSet, Outbound, Step, step, transition};
pub use protocol::{Frame, MessageKind};
pub use session::{Session, SessionHandle};
pub use utils::error::{Error, Result};
