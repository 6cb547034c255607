use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, error, info, warn};

use crate::net::codec::{decode_server_json, encode_client_json};
use crate::net::messages::{ClientMessage, ServerMessage};

/// Socket connection running on its own thread and tokio runtime.
///
/// The frame loop talks to it only through channels, so a slow or dead
/// socket never blocks rendering.
#[derive(Clone)]
pub struct ClientRuntime {
    outbound_tx: UnboundedSender<ClientMessage>,
    inbound_rx: Arc<Mutex<UnboundedReceiver<ServerMessage>>>,
    connected: Arc<AtomicBool>,
}

impl ClientRuntime {
    pub fn connect(url: String) -> Self {
        let (outbound_tx, outbound_rx) = unbounded_channel::<ClientMessage>();
        let (inbound_tx, inbound_rx) = unbounded_channel::<ServerMessage>();
        let connected = Arc::new(AtomicBool::new(false));
        let connected_flag = connected.clone();

        std::thread::spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(err) => {
                    error!("failed to start network runtime: {}", err);
                    return;
                }
            };
            rt.block_on(run_socket(url, outbound_rx, inbound_tx, connected_flag));
        });

        Self {
            outbound_tx,
            inbound_rx: Arc::new(Mutex::new(inbound_rx)),
            connected,
        }
    }

    pub fn send(&self, msg: ClientMessage) {
        let _ = self.outbound_tx.send(msg);
    }

    pub fn try_recv(&self) -> Option<ServerMessage> {
        self.inbound_rx.lock().ok()?.try_recv().ok()
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }
}

async fn run_socket(
    url: String,
    mut outbound_rx: UnboundedReceiver<ClientMessage>,
    inbound_tx: UnboundedSender<ServerMessage>,
    connected: Arc<AtomicBool>,
) {
    let ws_stream = match connect_async(url.as_str()).await {
        Ok((stream, _)) => stream,
        Err(err) => {
            error!(%url, "websocket connect failed: {}", err);
            return;
        }
    };
    info!(%url, "connected to relay");
    connected.store(true, Ordering::Relaxed);
    let (mut ws_sender, mut ws_receiver) = ws_stream.split();

    loop {
        tokio::select! {
            Some(msg) = outbound_rx.recv() => {
                match encode_client_json(&msg) {
                    Ok(text) => {
                        if let Err(err) = ws_sender.send(Message::Text(text)).await {
                            error!("websocket send failed: {}", err);
                            break;
                        }
                    }
                    Err(err) => warn!("failed to encode {:?}: {}", msg, err),
                }
            }
            inbound = ws_receiver.next() => {
                match inbound {
                    Some(Ok(Message::Text(text))) => forward(text.as_bytes(), &inbound_tx),
                    Some(Ok(Message::Binary(bytes))) => forward(&bytes, &inbound_tx),
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(err)) => {
                        error!("websocket error: {}", err);
                        break;
                    }
                    _ => {}
                }
            }
        }
    }

    connected.store(false, Ordering::Relaxed);
    info!("websocket connection closed");
}

fn forward(bytes: &[u8], inbound_tx: &UnboundedSender<ServerMessage>) {
    match decode_server_json(bytes) {
        Ok(msg) => {
            debug!(?msg, "received");
            let _ = inbound_tx.send(msg);
        }
        Err(err) => warn!("discarding malformed server frame: {}", err),
    }
}
