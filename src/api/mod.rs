//! Sales Dashboard HTTP Host
//!
//! HTTP layer serving the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Dashboard page rendered for the initial region
//!
//! ## Dashboard
//! - `GET /api/v1/regions` - Selector values
//! - `GET /api/v1/layout` - Layout tree
//! - `GET /api/v1/dashboard?region=R` - Update outputs as data
//! - `GET /api/v1/dashboard/render?region=R` - Update outputs as HTML fragments
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## WebSocket
//! - `GET /ws` - Region selection over a persistent connection
//!
//! # Example
//!
//! ```rust,ignore
//! use sales_dashboard::api::{serve, ApiConfig, AppState};
//! use sales_dashboard::dashboard::{Dashboard, DashboardSettings};
//! use sales_dashboard::data::Dataset;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dashboard = Dashboard::new(Arc::new(Dataset::sample()), DashboardSettings::default());
//!     let config = ApiConfig::default();
//!
//!     serve(AppState::new(dashboard, config.clone()), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::websocket::websocket_handler;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/regions", get(routes::dashboard::list_regions))
        .route("/layout", get(routes::dashboard::get_layout))
        .route("/dashboard", get(routes::dashboard::get_dashboard))
        .route("/dashboard/render", get(routes::dashboard::render_dashboard));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .route("/ws", get(websocket_handler))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback(routes::page::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the HTTP server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Sales dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Sales dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::{RegionsResponse, RenderResponse};
    use crate::dashboard::{Dashboard, DashboardSettings};
    use crate::data::Dataset;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_app_with(Dataset::sample())
    }

    fn create_app_with(dataset: Dataset) -> Router {
        let dashboard = Dashboard::new(Arc::new(dataset), DashboardSettings::default());
        build_router(AppState::new(dashboard, ApiConfig::default()))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = get(create_test_app(), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let response = get(create_test_app(), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_not_ready_without_data() {
        let response = get(create_app_with(Dataset::default()), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_health_full() {
        let response = get(create_test_app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["records"], 6);
        assert_eq!(body["regions"], 4);
    }

    #[tokio::test]
    async fn test_index_page() {
        let response = get(create_test_app(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains(r#"<select id="region-dropdown""#));
        assert!(html.contains("₹ 29,000"));
    }

    #[tokio::test]
    async fn test_list_regions() {
        let response = get(create_test_app(), "/api/v1/regions").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: RegionsResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(body.regions, vec!["East", "West", "North", "South"]);
        assert_eq!(body.default, "East");
    }

    #[tokio::test]
    async fn test_layout() {
        let response = get(create_test_app(), "/api/v1/layout").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["title"], "Sales Dashboard");
        assert_eq!(body["root"]["type"], "div");
    }

    #[tokio::test]
    async fn test_dashboard_east() {
        let response = get(create_test_app(), "/api/v1/dashboard?region=East").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["region"], "East");
        assert_eq!(body["total_sales"]["amount"], 29000);
        assert_eq!(body["total_sales"]["display"], "₹ 29,000");
        assert_eq!(body["sales_chart"]["kind"], "line");
        assert_eq!(body["sales_chart"]["points"].as_array().unwrap().len(), 2);
        assert_eq!(body["profit_chart"]["kind"], "bar");
    }

    #[tokio::test]
    async fn test_dashboard_unknown_region_is_empty() {
        let response = get(create_test_app(), "/api/v1/dashboard?region=Mars").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["total_sales"]["amount"], 0);
        assert_eq!(body["total_profit"]["amount"], 0);
        assert!(body["sales_chart"]["points"].as_array().unwrap().is_empty());
        assert!(body["profit_chart"]["points"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dashboard_missing_region() {
        let response = get(create_test_app(), "/api/v1/dashboard").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_dashboard_empty_region_is_empty() {
        let response = get(create_test_app(), "/api/v1/dashboard?region=").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["region"], "");
        assert_eq!(body["total_sales"]["amount"], 0);
        assert_eq!(body["total_profit"]["display"], "₹ 0");
        assert!(body["sales_chart"]["points"].as_array().unwrap().is_empty());
        assert!(body["profit_chart"]["points"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_render_empty_region_is_empty() {
        let response = get(create_test_app(), "/api/v1/dashboard/render?region=").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: RenderResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(body.outputs["total-sales"], "<h4>Total Sales</h4><h2>₹ 0</h2>");
        assert!(body.outputs["sales-line-chart"].contains("No data"));
    }

    #[tokio::test]
    async fn test_render_fragments_endpoint() {
        let response = get(create_test_app(), "/api/v1/dashboard/render?region=West").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: RenderResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(body.region, "West");
        assert_eq!(body.outputs.len(), 4);
        assert_eq!(
            body.outputs["total-sales"],
            "<h4>Total Sales</h4><h2>₹ 37,000</h2>"
        );
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = get(create_test_app(), "/api/v1/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
