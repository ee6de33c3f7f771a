//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

use crate::chart::SvgOptions;
use crate::config::ServerConfig;
use crate::dashboard::Dashboard;
use crate::layout::{render_page, Layout};
use crate::websocket::ConnectionLimiter;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Dataset, display settings and the update rule
    pub dashboard: Arc<Dashboard>,
    /// Static page tree, built once at startup
    pub layout: Arc<Layout>,
    /// Rendered page for the initial region
    pub index_html: Arc<String>,
    /// Chart canvas size and margins
    pub svg: SvgOptions,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time reported by the health endpoint
    pub started_at: DateTime<Utc>,
    /// Live WebSocket connection counter
    pub ws_limiter: Arc<ConnectionLimiter>,
}

impl AppState {
    /// Build the layout and pre-render the initial page
    pub fn new(dashboard: Dashboard, config: ApiConfig) -> Self {
        let svg = SvgOptions::default();
        let layout = Layout::new(&dashboard);
        let initial = dashboard.update(dashboard.initial_region());
        let index_html = render_page(&layout.title, &layout.hydrate(&initial), &svg);

        tracing::info!(
            records = dashboard.dataset().len(),
            regions = dashboard.regions().len(),
            initial_region = %dashboard.initial_region(),
            "Dashboard layout built"
        );

        Self {
            dashboard: Arc::new(dashboard),
            layout: Arc::new(layout),
            index_html: Arc::new(index_html),
            svg,
            ws_limiter: Arc::new(ConnectionLimiter::new(config.max_connections)),
            config: Arc::new(config),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Get WebSocket connection count
    pub fn ws_connection_count(&self) -> usize {
        self.ws_limiter.current_count()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Maximum concurrent WebSocket connections
    pub max_connections: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from(&ServerConfig::default())
    }
}

impl From<&ServerConfig> for ApiConfig {
    fn from(config: &ServerConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            max_connections: config.max_connections,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
