use crate::error::HealthResponse;
use crate::routes;
use axum::{Json, http::StatusCode};

/// GET /health handler - Health check endpoint
///
/// The store is in-process, so there is no dependency to probe; a response
/// at all means the service is healthy.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "system"
)]
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Health check passed");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
}
