use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "hello-kub API",
        version = "1.0.0",
        description = "A minimal greeting service"
    ),
    paths(
        handlers::hello::hello_handler,
        handlers::health::health_handler
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "hello", description = "Greeting operations"),
        (name = "health", description = "Health check operations")
    )
)]
pub struct ApiDoc;
