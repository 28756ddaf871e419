//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, MethodRouter},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_http_metrics;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        // Only matched routes are measured, so path labels stay bounded
        .route_layer(middleware::from_fn(track_http_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> Result<impl IntoResponse, AppError> {
    let metrics = metrics::gather_metrics()?;
    Ok((
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    ))
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        // Clients send both the trailing-slash and bare forms
        .route("/courses", course_collection())
        .route("/courses/", course_collection())
        .route("/courses/{course_id}", course_member())
        .route("/courses/{course_id}/", course_member())
}

fn course_collection() -> MethodRouter<AppState> {
    get(handlers::course::list_courses).post(handlers::course::create_course)
}

fn course_member() -> MethodRouter<AppState> {
    get(handlers::course::get_course)
        .put(handlers::course::replace_course)
        .patch(handlers::course::update_course)
        .delete(handlers::course::delete_course)
}
