//! WebSocket handler for commands and real-time snapshot streaming.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::{broadcast::error::RecvError, mpsc};

use crate::protocol::{ClientMessage, ServerMessage};

use super::state::AppState;

/// Replies queued for a single client before its command reader waits
const REPLY_CAPACITY: usize = 32;

/// WebSocket upgrade handler
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Handle a WebSocket connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    log::info!("Client connected");
    let (mut sender, mut receiver) = socket.split();

    // Subscribe to snapshot broadcasts
    let mut snapshot_rx = state.subscribe_snapshots();

    // Replies addressed to this client only
    let (reply_tx, mut reply_rx) = mpsc::channel::<ServerMessage>(REPLY_CAPACITY);

    // Task to send broadcasts and replies to the client
    let mut send_task = tokio::spawn(async move {
        loop {
            let msg = tokio::select! {
                reply = reply_rx.recv() => match reply {
                    Some(reply) => reply,
                    None => break,
                },
                broadcast = snapshot_rx.recv() => match broadcast {
                    Ok(snapshot) => ServerMessage::SimulationUpdate((*snapshot).clone()),
                    Err(RecvError::Lagged(n)) => {
                        log::warn!("WebSocket client lagged, skipped {} snapshots", n);
                        continue;
                    }
                    Err(RecvError::Closed) => break,
                },
            };

            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        // Client disconnected
                        break;
                    }
                }
                Err(e) => {
                    log::error!("Failed to serialize message: {}", e);
                }
            }
        }
    });

    // Task to receive commands from the client
    let recv_state = state.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(Message::Text(text)) => {
                    let msg = match serde_json::from_str::<ClientMessage>(text.as_str()) {
                        Ok(msg) => msg,
                        Err(e) => {
                            log::debug!("Ignoring malformed client frame: {}", e);
                            continue;
                        }
                    };
                    let reply = recv_state.handle(msg).await;
                    if reply_tx.send(reply).await.is_err() {
                        break;
                    }
                }
                Ok(Message::Close(_)) => {
                    break;
                }
                Err(e) => {
                    log::error!("WebSocket error: {}", e);
                    break;
                }
                _ => {}
            }
        }
    });

    // Wait for either task to complete (client disconnect), then drop the other
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    log::info!("Client disconnected");
}
