//! Broker snapshot definitions
//!
//! `BrokerState` is one immutable point in the transition chain. The reducer never
//! mutates the snapshot it is given; it clones it and returns the clone.
//!
//! Notes on fields:
//! - `clients`: every client that ever subscribed or published, in first-seen order
//! - `topics`: topic name to subscribers in subscription order; never holds an empty list
//! - `outbox`: deliveries produced by transitions; carried forward by the clone, so a
//!   caller reusing snapshots drains it between ticks with [`BrokerState::take_outbox`]

use std::collections::HashMap;

use bytes::Bytes;

use crate::broker::topic::{ClientId, ClientSet};

/// One delivery for the transport layer to make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outbound {
    pub destination: ClientId,
    pub payload: Bytes,
}

/// One snapshot of the broker: known clients, topic subscriptions and pending deliveries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrokerState {
    pub clients: ClientSet,
    pub topics: HashMap<String, ClientSet>,
    pub outbox: Vec<Outbound>,
}

impl BrokerState {
    /// The empty snapshot a session starts from.
    pub fn new() -> Self {
        Self {
            clients: ClientSet::new(),
            topics: HashMap::new(),
            outbox: Vec::new(),
        }
    }

    /// Subscribers of `topic` in subscription order, if anyone is subscribed.
    pub fn subscribers(&self, topic: &str) -> Option<&ClientSet> {
        self.topics.get(topic)
    }

    /// Hand the accumulated deliveries to the transport, leaving the outbox empty.
    pub fn take_outbox(&mut self) -> Vec<Outbound> {
        std::mem::take(&mut self.outbox)
    }
}
