use tokio::sync::{mpsc, oneshot};
use tracing::{info, warn};

use crate::broker::{BrokerState, ClientId, Outbound};
use crate::config::SessionSettings;
use crate::session::Session;
use crate::utils::error::{Error, Result};

enum Command {
    Apply {
        client: ClientId,
        raw: Vec<u8>,
        reply: oneshot::Sender<Result<usize>>,
    },
    Snapshot {
        reply: oneshot::Sender<BrokerState>,
    },
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Apply { client, raw, .. } => f
                .debug_struct("Apply")
                .field("client", client)
                .field("len", &raw.len())
                .finish(),
            Command::Snapshot { .. } => f.write_str("Snapshot"),
        }
    }
}

/// Cheap, cloneable front door to a running session task.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<Command>,
}

/// Start a session task. Deliveries are pushed to the returned receiver in the order the
/// frames producing them were applied. The task stops once every handle is dropped.
pub fn spawn(settings: &SessionSettings) -> (SessionHandle, mpsc::UnboundedReceiver<Outbound>) {
    let (tx, rx) = mpsc::channel(settings.inbox_capacity.max(1));
    let (out_tx, out_rx) = mpsc::unbounded_channel();

    tokio::spawn(run(Session::new(), rx, out_tx));

    (SessionHandle { tx }, out_rx)
}

async fn run(
    mut session: Session,
    mut rx: mpsc::Receiver<Command>,
    out_tx: mpsc::UnboundedSender<Outbound>,
) {
    while let Some(cmd) = rx.recv().await {
        match cmd {
            Command::Apply { client, raw, reply } => {
                let result = session.handle(&client, &raw).map(|deliveries| {
                    let count = deliveries.len();
                    for delivery in deliveries {
                        if let Err(e) = out_tx.send(delivery) {
                            warn!("Dropping delivery to {}: receiver closed", e.0.destination);
                        }
                    }
                    count
                });
                // submitter may have given up waiting
                let _ = reply.send(result);
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(session.state().clone());
            }
        }
    }

    info!("Session task stopped");
}

impl SessionHandle {
    /// Queue a frame from `client` and wait until it has been applied.
    ///
    /// Returns the number of deliveries emitted, or why the frame was rejected.
    pub async fn submit(
        &self,
        client: impl Into<ClientId>,
        raw: impl Into<Vec<u8>>,
    ) -> Result<usize> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Apply {
                client: client.into(),
                raw: raw.into(),
                reply,
            })
            .await
            .map_err(|_| Error::SessionClosed)?;
        rx.await.map_err(|_| Error::SessionClosed)?
    }

    /// Current snapshot, after every frame submitted before this call.
    pub async fn snapshot(&self) -> Result<BrokerState> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Snapshot { reply })
            .await
            .map_err(|_| Error::SessionClosed)?;
        rx.await.map_err(|_| Error::SessionClosed)
    }
}
