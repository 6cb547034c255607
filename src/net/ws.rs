use std::net::SocketAddr;

use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};

use crate::error::RelayError;
use crate::net::codec::{decode_client_json, encode_server_json};
use crate::net::registry::RegistryHandle;
use crate::net::relay::route;
use crate::net::session::{SessionHandle, SessionId};

pub struct WsServer {
    listener: TcpListener,
}

impl WsServer {
    pub async fn bind(addr: &str) -> Result<Self, RelayError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| RelayError::Bind {
                addr: addr.to_owned(),
                source,
            })?;
        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, RelayError> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections forever. Only the listener itself can fail this.
    pub async fn serve(self, registry: RegistryHandle) -> Result<(), RelayError> {
        info!("relay listening on ws://{}", self.local_addr()?);
        let mut next_id: SessionId = 1;

        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(err) => {
                    warn!("failed to accept connection: {}", err);
                    continue;
                }
            };
            let session_id = next_id;
            next_id = next_id.saturating_add(1);

            tokio::spawn(handle_connection(stream, peer, session_id, registry.clone()));
        }
    }
}

async fn handle_connection(
    stream: TcpStream,
    peer: SocketAddr,
    session_id: SessionId,
    registry: RegistryHandle,
) {
    let ws_stream = match accept_async(stream).await {
        Ok(stream) => stream,
        Err(err) => {
            warn!(%peer, "websocket handshake failed: {}", err);
            return;
        }
    };
    let (mut ws_sender, mut ws_receiver) = ws_stream.split();
    let (outbound_tx, mut outbound_rx) = mpsc::unbounded_channel();

    registry.register(SessionHandle::new(session_id, outbound_tx));
    info!(session_id, %peer, "client connected");

    loop {
        tokio::select! {
            inbound = ws_receiver.next() => {
                match inbound {
                    Some(Ok(Message::Text(text))) => {
                        relay_frame(session_id, text.as_bytes(), &registry).await;
                    }
                    Some(Ok(Message::Binary(bytes))) => {
                        relay_frame(session_id, &bytes, &registry).await;
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(err)) => {
                        debug!(session_id, "socket error: {}", err);
                        break;
                    }
                    _ => {}
                }
            }
            outbound = outbound_rx.recv() => {
                let Some(msg) = outbound else { break };
                match encode_server_json(&msg) {
                    Ok(text) => {
                        if ws_sender.send(Message::Text(text)).await.is_err() {
                            break;
                        }
                    }
                    Err(err) => warn!(session_id, "failed to encode {:?}: {}", msg, err),
                }
            }
        }
    }

    registry.unregister(session_id);
    info!(session_id, "client disconnected");
}

async fn relay_frame(session_id: SessionId, bytes: &[u8], registry: &RegistryHandle) {
    let message = match decode_client_json(bytes) {
        Ok(message) => message,
        Err(err) => {
            warn!(session_id, "discarding malformed frame: {}", err);
            return;
        }
    };

    match route(message) {
        Some(out) => {
            registry.broadcast(out).await;
        }
        None => debug!(session_id, "ignoring message of unknown type"),
    }
}
