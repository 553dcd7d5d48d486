//! The `session` module drives the broker reducer for a transport layer.
//!
//! Transitions must be applied one at a time against the latest snapshot. [`Session`] does
//! that for a caller that already processes frames sequentially; [`spawn`] wraps a session
//! in a tokio task so any number of connection tasks can feed it through a queue.
//!
//! Both drain the snapshot's outbox after every frame, so each batch of deliveries belongs
//! to exactly one inbound frame.

pub mod actor;

pub use actor::{SessionHandle, spawn};

use tracing::debug;

use crate::broker::{self, BrokerState, Outbound};
use crate::utils::error::Result;

/// Owns the latest snapshot and applies frames to it one at a time.
#[derive(Debug, Default)]
pub struct Session {
    state: BrokerState,
}

impl Session {
    /// Start from the empty snapshot.
    pub fn new() -> Self {
        Self {
            state: BrokerState::new(),
        }
    }

    /// Resume from an existing snapshot. Pending outbox entries are delivered with the
    /// next handled frame.
    pub fn from_state(state: BrokerState) -> Self {
        Self { state }
    }

    /// The current snapshot.
    pub fn state(&self) -> &BrokerState {
        &self.state
    }

    /// Apply one frame from `client` and return the deliveries it produced.
    ///
    /// A rejected frame still advances the session (to an unchanged snapshot); the error
    /// is returned so the caller can decide whether to drop the client.
    pub fn handle(&mut self, client: &str, raw: &[u8]) -> Result<Vec<Outbound>> {
        let step = broker::step(&self.state, client, raw);
        self.state = step.state;
        if let Some(err) = step.rejected {
            return Err(err);
        }

        let deliveries = self.state.take_outbox();
        debug!(client, deliveries = deliveries.len(), "frame applied");
        Ok(deliveries)
    }
}
