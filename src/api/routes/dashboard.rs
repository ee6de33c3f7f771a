//! Dashboard Routes
//!
//! - GET /api/v1/regions - Selector values and the initial region
//! - GET /api/v1/layout - Page layout tree
//! - GET /api/v1/dashboard?region=R - The four outputs as data
//! - GET /api/v1/dashboard/render?region=R - The four outputs as HTML fragments

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{LayoutResponse, RegionQuery, RegionsResponse, RenderResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dashboard::DashboardUpdate;
use crate::layout::render_fragments;

/// GET /api/v1/regions
pub async fn list_regions(State(state): State<Arc<AppState>>) -> Json<RegionsResponse> {
    Json(RegionsResponse {
        regions: state
            .dashboard
            .regions()
            .into_iter()
            .map(String::from)
            .collect(),
        default: state.dashboard.initial_region().to_string(),
    })
}

/// GET /api/v1/layout
pub async fn get_layout(State(state): State<Arc<AppState>>) -> Json<LayoutResponse> {
    Json(LayoutResponse {
        title: state.layout.title.clone(),
        root: state.layout.root.clone(),
    })
}

/// GET /api/v1/dashboard
///
/// Run the update rule for the selected region. Unknown regions produce
/// empty charts and zero totals.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RegionQuery>,
) -> ApiResult<Json<DashboardUpdate>> {
    let region = require_region(query)?;
    Ok(Json(state.dashboard.update(&region)))
}

/// GET /api/v1/dashboard/render
pub async fn render_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RegionQuery>,
) -> ApiResult<Json<RenderResponse>> {
    let region = require_region(query)?;
    let update = state.dashboard.update(&region);

    Ok(Json(RenderResponse {
        outputs: render_fragments(&update, &state.svg),
        region,
    }))
}

/// An absent parameter is rejected; any present value, even empty, is a
/// region to filter by.
fn require_region(query: RegionQuery) -> ApiResult<String> {
    query
        .region
        .ok_or_else(|| ApiError::Validation("region is required".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_region() {
        let ok = require_region(RegionQuery {
            region: Some("East".to_string()),
        });
        assert_eq!(ok.unwrap(), "East");

        assert!(require_region(RegionQuery { region: None }).is_err());

        let empty = require_region(RegionQuery {
            region: Some(String::new()),
        });
        assert_eq!(empty.unwrap(), "");
    }
}
