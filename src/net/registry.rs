use std::collections::HashMap;

use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use crate::net::messages::ServerMessage;
use crate::net::session::{SessionHandle, SessionId};

/// Live connections keyed by session id.
///
/// Not synchronized; [`RegistryHandle`] owns one inside a single task and
/// serializes every add/remove/broadcast through its command channel.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    sessions: HashMap<SessionId, SessionHandle>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, session: SessionHandle) {
        self.sessions.insert(session.id, session);
    }

    pub fn remove(&mut self, session_id: SessionId) -> bool {
        self.sessions.remove(&session_id).is_some()
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Queues `msg` on every open connection and returns how many got it.
    ///
    /// Connections whose queue is closed, or whose send fails, are skipped
    /// silently and pruned.
    pub fn broadcast(&mut self, msg: &ServerMessage) -> usize {
        let mut delivered = 0;
        let mut dead = Vec::new();

        for (id, session) in &self.sessions {
            if !session.is_open() {
                dead.push(*id);
                continue;
            }
            if session.outbound_tx.send(msg.clone()).is_err() {
                dead.push(*id);
                continue;
            }
            delivered += 1;
        }

        for id in dead {
            self.sessions.remove(&id);
            debug!(session_id = id, "pruned closed session during broadcast");
        }

        delivered
    }
}

enum RegistryCommand {
    Register(SessionHandle),
    Unregister(SessionId),
    Broadcast {
        message: ServerMessage,
        delivered_tx: oneshot::Sender<usize>,
    },
    Count(oneshot::Sender<usize>),
}

/// Cloneable front for the task that owns the [`ConnectionRegistry`].
#[derive(Clone)]
pub struct RegistryHandle {
    command_tx: mpsc::UnboundedSender<RegistryCommand>,
}

impl RegistryHandle {
    /// Spawns the owning task on the current tokio runtime.
    pub fn spawn() -> Self {
        let (command_tx, mut command_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut registry = ConnectionRegistry::new();
            while let Some(command) = command_rx.recv().await {
                match command {
                    RegistryCommand::Register(session) => {
                        registry.add(session);
                    }
                    RegistryCommand::Unregister(session_id) => {
                        registry.remove(session_id);
                    }
                    RegistryCommand::Broadcast {
                        message,
                        delivered_tx,
                    } => {
                        let delivered = registry.broadcast(&message);
                        debug!(delivered, ?message, "broadcast");
                        let _ = delivered_tx.send(delivered);
                    }
                    RegistryCommand::Count(reply_tx) => {
                        let _ = reply_tx.send(registry.len());
                    }
                }
            }
        });

        Self { command_tx }
    }

    pub fn register(&self, session: SessionHandle) {
        let _ = self.command_tx.send(RegistryCommand::Register(session));
    }

    pub fn unregister(&self, session_id: SessionId) {
        let _ = self.command_tx.send(RegistryCommand::Unregister(session_id));
    }

    /// Returns the number of connections the message was queued for, or 0 if
    /// the registry task is gone.
    pub async fn broadcast(&self, message: ServerMessage) -> usize {
        let (delivered_tx, delivered_rx) = oneshot::channel();
        if self
            .command_tx
            .send(RegistryCommand::Broadcast {
                message,
                delivered_tx,
            })
            .is_err()
        {
            return 0;
        }
        delivered_rx.await.unwrap_or(0)
    }

    pub async fn connection_count(&self) -> usize {
        let (reply_tx, reply_rx) = oneshot::channel();
        if self.command_tx.send(RegistryCommand::Count(reply_tx)).is_err() {
            return 0;
        }
        reply_rx.await.unwrap_or(0)
    }
}
