//! WebSocket Region Selection
//!
//! A persistent alternative to the HTTP update endpoints: each
//! `select_region` message from a client produces exactly one `update`
//! reply carrying the four recomputed outputs.
//!
//! - **Handler**: Handles WebSocket upgrade and message processing
//! - **Messages**: Defines client and server message formats
//! - **Limiter**: Caps concurrent connections
//!
//! ## Example
//!
//! ```javascript
//! // Browser
//! const ws = new WebSocket('ws://localhost:8050/ws');
//!
//! ws.onopen = () => {
//!   ws.send(JSON.stringify({type: 'select_region', region: 'West'}));
//! };
//!
//! ws.onmessage = (event) => {
//!   const msg = JSON.parse(event.data);
//!   console.log('Received:', msg);
//! };
//! ```

mod handler;
mod limiter;
mod messages;

pub use handler::websocket_handler;
pub use limiter::{ConnectionGuard, ConnectionLimiter};
pub use messages::{ClientMessage, ServerMessage};
