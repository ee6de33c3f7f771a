//! WebSocket Handler
//!
//! Handles WebSocket upgrade requests and manages the connection lifecycle.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::{IntoResponse, Response},
};
use futures_util::{stream::SplitSink, SinkExt, StreamExt};
use std::sync::Arc;

use super::limiter::ConnectionGuard;
use super::messages::{ClientMessage, ServerMessage};
use crate::api::{ApiError, AppState};
use crate::chart::SvgOptions;
use crate::dashboard::Dashboard;
use crate::layout::render_fragments;

/// What to do after handling one frame
#[derive(Debug)]
enum Action {
    Reply(ServerMessage),
    Ignore,
    Close,
}

/// WebSocket upgrade handler
///
/// Refuses the upgrade with 503 once the connection cap is reached.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    let guard = match state.ws_limiter.try_acquire() {
        Some(guard) => guard,
        None => {
            tracing::warn!(
                current = state.ws_limiter.current_count(),
                max = state.ws_limiter.max(),
                "WebSocket connection limit reached"
            );
            return ApiError::ServiceUnavailable("Too many WebSocket connections".to_string())
                .into_response();
        }
    };

    ws.on_upgrade(move |socket| handle_socket(socket, state, guard))
}

/// Handle an established WebSocket connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>, _guard: ConnectionGuard) {
    let connection_id = uuid::Uuid::new_v4().to_string();
    let (mut sender, mut receiver) = socket.split();

    tracing::info!(
        connection_id = %connection_id,
        connections = state.ws_connection_count(),
        "WebSocket connected"
    );

    let connected_msg = ServerMessage::Connected {
        connection_id: connection_id.clone(),
        regions: state
            .dashboard
            .regions()
            .into_iter()
            .map(String::from)
            .collect(),
        region: state.dashboard.initial_region().to_string(),
    };
    if send_message(&mut sender, &connected_msg).await.is_err() {
        tracing::error!(connection_id = %connection_id, "Failed to send connected message");
        return;
    }

    while let Some(result) = receiver.next().await {
        let message = match result {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!(
                    connection_id = %connection_id,
                    error = %e,
                    "WebSocket receive error"
                );
                break;
            }
        };

        match handle_ws_message(&state.dashboard, &state.svg, &connection_id, message) {
            Action::Reply(reply) => {
                if send_message(&mut sender, &reply).await.is_err() {
                    tracing::debug!(
                        connection_id = %connection_id,
                        "WebSocket send failed, closing connection"
                    );
                    break;
                }
            }
            Action::Ignore => {}
            Action::Close => break,
        }
    }

    tracing::info!(connection_id = %connection_id, "WebSocket disconnected");
}

async fn send_message(
    sender: &mut SplitSink<WebSocket, Message>,
    message: &ServerMessage,
) -> Result<(), axum::Error> {
    match serde_json::to_string(message) {
        Ok(text) => sender.send(Message::Text(text)).await,
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize message");
            Ok(())
        }
    }
}

/// Handle a received WebSocket frame
fn handle_ws_message(
    dashboard: &Dashboard,
    svg: &SvgOptions,
    connection_id: &str,
    message: Message,
) -> Action {
    match message {
        Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
            Ok(client_msg) => Action::Reply(handle_client_message(dashboard, svg, client_msg)),
            Err(e) => {
                tracing::debug!(
                    connection_id = %connection_id,
                    error = %e,
                    text = %text,
                    "Invalid client message"
                );
                // Keep the connection open
                Action::Reply(ServerMessage::Error {
                    message: format!("Invalid message format: {}", e),
                })
            }
        },
        Message::Binary(_) => Action::Reply(ServerMessage::Error {
            message: "Binary messages not supported".to_string(),
        }),
        // Axum answers pings itself
        Message::Ping(_) | Message::Pong(_) => Action::Ignore,
        Message::Close(_) => {
            tracing::debug!(connection_id = %connection_id, "Client requested close");
            Action::Close
        }
    }
}

/// Handle a parsed client message
fn handle_client_message(
    dashboard: &Dashboard,
    svg: &SvgOptions,
    message: ClientMessage,
) -> ServerMessage {
    match message {
        ClientMessage::SelectRegion { region } => {
            let update = dashboard.update(&region);
            let outputs = render_fragments(&update, svg);
            ServerMessage::Update { update, outputs }
        }
        ClientMessage::Ping => ServerMessage::Pong,
    }
}
