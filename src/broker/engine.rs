//! Broker engine
//!
//! The reducer at the heart of the broker: given a snapshot, the acting client and one raw
//! frame, produce the next snapshot. Deliveries land in the new snapshot's outbox.
//!
//! Usage notes:
//! - Transitions are synchronous and total. Malformed frames and unknown message types are
//!   logged and returned in [`Step::rejected`]; the snapshot is still a valid clone.
//! - Calls must be serialized by the caller. Two transitions from the same snapshot yield
//!   divergent states that cannot be merged; `crate::session` provides a single writer.
//! - Publishing or unsubscribing where nothing matches is a silent no-op, not an error.

use bytes::Bytes;
use tracing::{debug, warn};

use crate::broker::message::{BrokerState, Outbound};
use crate::broker::topic::ClientId;
use crate::protocol::{self, Frame, MessageKind};
use crate::utils::error::Error;

/// Result of one transition.
#[derive(Debug)]
pub struct Step {
    pub state: BrokerState,
    /// Why the frame was ignored, if it was. `state` is then an unmodified clone.
    pub rejected: Option<Error>,
}

/// Apply one client frame to `state`, returning the next snapshot.
pub fn transition(state: &BrokerState, client: &str, raw: &[u8]) -> BrokerState {
    step(state, client, raw).state
}

/// Like [`transition`], but also hands back the reason a frame was rejected.
pub fn step(state: &BrokerState, client: &str, raw: &[u8]) -> Step {
    let mut next = state.clone();

    let frame = match protocol::decode(raw) {
        Ok(frame) => frame,
        Err(err) => {
            warn!("Ignoring frame from {client}: {err}");
            return Step {
                state: next,
                rejected: Some(err),
            };
        }
    };

    let Frame {
        kind,
        topic,
        payload,
    } = frame;
    match kind {
        MessageKind::Subscribe => subscribe(&mut next, client, topic, &payload),
        MessageKind::Publish => publish(&mut next, client, &topic, &payload),
        MessageKind::Unsubscribe => unsubscribe(&mut next, client, &topic, &payload),
    }

    Step {
        state: next,
        rejected: None,
    }
}

fn fan_out<'a>(
    outbox: &mut Vec<Outbound>,
    recipients: impl Iterator<Item = &'a ClientId>,
    payload: &Bytes,
) -> usize {
    let before = outbox.len();
    outbox.extend(recipients.map(|destination| Outbound {
        destination: destination.clone(),
        payload: payload.clone(),
    }));
    outbox.len() - before
}

/// Join `topic`, greeting everyone already there. Re-subscribing greets again but
/// does not add a second entry.
fn subscribe(next: &mut BrokerState, client: &str, topic: String, greeting: &Bytes) {
    next.clients.insert(client);

    let subscribers = next.topics.entry(topic).or_default();
    let sent = fan_out(&mut next.outbox, subscribers.others(client), greeting);
    let added = subscribers.insert(client);

    debug!(client, sent, added, "subscribe");
}

/// Relay `body` to every subscriber of `topic` except the publisher.
fn publish(next: &mut BrokerState, client: &str, topic: &str, body: &Bytes) {
    next.clients.insert(client);

    let Some(subscribers) = next.topics.get(topic) else {
        debug!(client, topic, "publish to topic without subscribers");
        return;
    };
    let sent = fan_out(&mut next.outbox, subscribers.others(client), body);

    debug!(client, topic, sent, "publish");
}

/// Leave `topic`, saying farewell to the remaining subscribers first. Unknown clients
/// are not recorded.
fn unsubscribe(next: &mut BrokerState, client: &str, topic: &str, farewell: &Bytes) {
    let Some(subscribers) = next.topics.get_mut(topic) else {
        return;
    };
    if !subscribers.contains(client) {
        return;
    }

    let sent = fan_out(&mut next.outbox, subscribers.others(client), farewell);
    subscribers.remove(client);
    if subscribers.is_empty() {
        next.topics.remove(topic);
        debug!(topic, "topic removed after last unsubscribe");
    }

    debug!(client, topic, sent, "unsubscribe");
}
