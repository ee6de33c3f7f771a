//! WebSocket Message Types
//!
//! Defines all message types for WebSocket communication between
//! dashboard clients and the server.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::dashboard::DashboardUpdate;

/// Messages sent from client to server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// The selector changed
    SelectRegion {
        region: String,
    },
    /// Ping for keepalive
    Ping,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection established
    Connected {
        /// Unique connection identifier
        connection_id: String,
        /// Selector values
        regions: Vec<String>,
        /// Region selected on page load
        region: String,
    },
    /// Recomputed outputs for one selection
    Update {
        /// Outputs as data
        update: DashboardUpdate,
        /// Inner HTML keyed by output element id
        outputs: BTreeMap<String, String>,
    },
    /// Pong response to ping
    Pong,
    /// Error message
    Error {
        /// Error description
        message: String,
    },
}
