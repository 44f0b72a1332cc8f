use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{Sink, SinkExt, StreamExt};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{info, warn};

use crate::models::event::OrderEvent;
use crate::state::AppState;

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();
    let rx = state.order_events_tx.subscribe();

    info!("websocket client connected");

    let send_task = tokio::spawn(forward_events(rx, sender));

    let recv_task = tokio::spawn(async move {
        while let Some(Ok(_msg)) = receiver.next().await {}
    });

    tokio::select! {
        _ = send_task => {},
        _ = recv_task => {},
    }

    info!("websocket client disconnected");
}

/// Writes each order event to `sink` as a JSON text frame until the
/// channel closes or the sink rejects a frame. Events skipped by a lagging
/// subscriber are dropped.
async fn forward_events<S>(mut rx: broadcast::Receiver<OrderEvent>, mut sink: S)
where
    S: Sink<Message> + Unpin,
{
    loop {
        let event = match rx.recv().await {
            Ok(event) => event,
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "websocket subscriber lagged; dropping order events");
                continue;
            }
            Err(RecvError::Closed) => break,
        };

        let json = match serde_json::to_string(&event) {
            Ok(json) => json,
            Err(err) => {
                warn!(
                    error = %err,
                    order_id = event.order.id,
                    "failed to serialize order event for ws"
                );
                continue;
            }
        };

        if sink.send(Message::Text(json.into())).await.is_err() {
            break;
        }
    }
}
