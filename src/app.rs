use std::future::Future;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{fallback_handler, health_handler, hello_handler};
use crate::routes;

/// Assemble every route, the API docs and the not-found fallback into one router.
pub fn build_router() -> Router {
    Router::new()
        .route(routes::HELLO, get(hello_handler))
        .route(routes::HEALTH, get(health_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
}

/// Serve the application on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_router())
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server terminated unexpectedly")
}
