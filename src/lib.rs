//! # Sales Dashboard
//!
//! A single-page sales & profit dashboard: a small in-memory table of
//! monthly sales records, filtered by a region selector and shown as two
//! summary cards and two charts.
//!
//! ## Modules
//!
//! - [`data`]: The sales table
//! - [`dashboard`]: The region update rule and its outputs
//! - [`chart`]: Figure specs and SVG rendering
//! - [`layout`]: Page element tree and HTML rendering
//! - [`api`]: HTTP host with Axum
//! - [`websocket`]: Region selection over WebSocket
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use sales_dashboard::dashboard::{Dashboard, DashboardSettings};
//! use sales_dashboard::data::Dataset;
//! use std::sync::Arc;
//!
//! let dashboard = Dashboard::new(Arc::new(Dataset::sample()), DashboardSettings::default());
//! let update = dashboard.update("West");
//!
//! assert_eq!(update.total_sales.display, "₹ 37,000");
//! assert_eq!(update.profit_chart.len(), 2);
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod format;
pub mod layout;
pub mod websocket;

// Re-export top-level types for convenience
pub use data::{Dataset, SalesRecord};

pub use dashboard::{update_dashboard, Dashboard, DashboardSettings, DashboardUpdate, SummaryCard};

pub use chart::{render_svg, ChartKind, ChartPoint, Figure, SvgOptions};

pub use layout::{build_layout, render_fragments, render_page, Element, Layout, Style};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use websocket::{websocket_handler, ClientMessage, ConnectionLimiter, ServerMessage};

pub use config::{
    generate_default_config, Config, ConfigError, DashboardConfig, LoadedConfig, LoggingConfig,
    ServerConfig,
};
