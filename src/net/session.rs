use tokio::sync::mpsc::UnboundedSender;

use crate::net::messages::ServerMessage;

pub type SessionId = u64;

/// Server-side view of one live socket: its id and the queue its writer drains.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub id: SessionId,
    pub outbound_tx: UnboundedSender<ServerMessage>,
}

impl SessionHandle {
    pub fn new(id: SessionId, outbound_tx: UnboundedSender<ServerMessage>) -> Self {
        Self { id, outbound_tx }
    }

    pub fn is_open(&self) -> bool {
        !self.outbound_tx.is_closed()
    }
}
