//! WebSocket handler for push-channel connections.
//!
//! Handles the upgrade, registers the connection with the subscriber
//! registry, and forwards published messages until either side closes.

use axum::extract::ws::{Message, WebSocket};
use axum::{
    extract::{State, WebSocketUpgrade},
    response::Response,
};
use futures::{sink::SinkExt, stream::StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;

use super::connection::SubscriberRegistry;
use super::messages::WsMessage;
use crate::gateway::state::AppState;

/// WebSocket upgrade handler
///
/// Endpoint: GET /api/ws. No handshake beyond the upgrade itself; the
/// client is expected to treat the feed as best-effort supplementary data.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    let registry = state.subscribers.clone();
    ws.on_upgrade(move |socket| handle_socket(socket, registry))
}

async fn handle_socket(socket: WebSocket, registry: Arc<SubscriberRegistry>) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<WsMessage>();

    let id = registry.subscribe(tx);

    // Forward published messages to the socket
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => tracing::error!(error = %e, "failed to encode push message"),
            }
        }
    });

    // Inbound frames are logged and otherwise ignored
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => {
                    tracing::debug!(subscriber_id = id, %text, "websocket message received");
                }
                Message::Close(_) => break,
                _ => {}
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    }

    registry.unsubscribe(id);
}
