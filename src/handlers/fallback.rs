use crate::error::ApiError;
use axum::http::Uri;

/// Fallback for any request that matches no route
pub async fn fallback_handler(uri: Uri) -> ApiError {
    tracing::debug!("No route for {}", uri.path());
    ApiError::RouteNotFound(uri.path().to_string())
}
