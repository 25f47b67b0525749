//! WebSocket feed of the community report board.
//!
//! Each frame is a full snapshot of the newest reports; clients replace
//! their list rather than merging.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use futures::{SinkExt, StreamExt};

use crate::adapters::http::state::AppState;

use super::dto::LiveReportsMessage;

/// GET /api/reports/live - Upgrade to a snapshot feed
pub async fn live_reports(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();

    let mut snapshots = match state.report_store.subscribe().await {
        Ok(stream) => stream,
        Err(e) => {
            tracing::warn!(error = %e, "Report subscription failed");
            let msg = LiveReportsMessage::Error {
                message: "Live reports are unavailable".to_string(),
            };
            let _ = send_message(&mut sender, &msg).await;
            return;
        }
    };

    tracing::debug!("Live report client connected");

    let mut send_task = tokio::spawn(async move {
        while let Some(items) = snapshots.next().await {
            let msg = LiveReportsMessage::Snapshot { items };
            if let Err(e) = send_message(&mut sender, &msg).await {
                tracing::debug!("Send error, closing live feed: {}", e);
                break;
            }
        }
    });

    // Inbound frames carry nothing; only watch for the close.
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(Message::Close(_)) => break,
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!("Receive error: {}", e);
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    tracing::debug!("Live report client disconnected");
}

async fn send_message(
    sender: &mut futures::stream::SplitSink<WebSocket, Message>,
    msg: &LiveReportsMessage,
) -> Result<(), axum::Error> {
    let json = serde_json::to_string(msg).map_err(axum::Error::new)?;
    sender.send(Message::Text(json)).await
}
