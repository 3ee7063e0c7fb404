use crate::routes;
use axum::http::StatusCode;

/// Body returned by the greeting endpoint, byte for byte.
pub const GREETING: &str = "Hello Kub";

/// GET /api/hello handler - Plain-text greeting
///
/// Takes no input and has no side effects, so every call returns the same response.
#[utoipa::path(
    get,
    path = routes::HELLO,
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    ),
    tag = "hello"
)]
pub async fn hello_handler() -> (StatusCode, &'static str) {
    tracing::debug!("Serving greeting");
    (StatusCode::OK, GREETING)
}
