use crate::error::HealthResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// The service has no backing dependencies, so answering at all means it is healthy.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Health check passed");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}
