//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::layout::Element;

// ============================================
// DASHBOARD DTOs
// ============================================

/// Query string of the dashboard endpoints: `?region=East`
#[derive(Debug, Deserialize)]
pub struct RegionQuery {
    #[serde(default)]
    pub region: Option<String>,
}

/// Selector values
#[derive(Debug, Serialize, Deserialize)]
pub struct RegionsResponse {
    /// Distinct regions in dataset order
    pub regions: Vec<String>,
    /// Region selected on page load
    pub default: String,
}

/// Page layout tree
#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub title: String,
    pub root: Element,
}

/// Rendered outputs for one region
#[derive(Debug, Serialize, Deserialize)]
pub struct RenderResponse {
    pub region: String,
    /// Inner HTML keyed by output element id
    pub outputs: BTreeMap<String, String>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// "ok" or "empty"
    pub dataset: String,
    pub records: usize,
    pub regions: usize,
    pub ws_connections: usize,
    pub uptime_seconds: u64,
    /// RFC 3339 start time
    pub started_at: String,
    pub version: String,
}
