// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Generation-progress WebSocket. Connections are accepted and kept alive;
//! no progress events are emitted by any generation path.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use tracing::debug;

/// GET /ws/generation-progress
pub async fn progress_ws_handler(ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(handle_progress_socket)
}

async fn handle_progress_socket(mut socket: WebSocket) {
    debug!("Progress WebSocket connected");
    while let Some(message) = socket.recv().await {
        match message {
            Ok(Message::Text(text)) => {
                debug!("Progress WebSocket message ignored: {} bytes", text.len());
            }
            Ok(Message::Ping(data)) => {
                if socket.send(Message::Pong(data)).await.is_err() {
                    break;
                }
            }
            Ok(Message::Close(_)) | Err(_) => break,
            _ => {}
        }
    }
    debug!("Progress WebSocket disconnected");
}
