//! Page Routes
//!
//! - GET / - The dashboard page, pre-rendered for the initial region

use axum::{extract::State, http::Uri, response::Html};
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::api::state::AppState;

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.index_html.as_str().to_owned())
}

/// Fallback for unknown paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
