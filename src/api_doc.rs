use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-dynamo-users API",
        version = "1.0.0",
        description = "A read-only user record lookup service backed by Amazon DynamoDB"
    ),
    paths(
        handlers::health::health_handler,
        handlers::lookup::lookup_handler
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "users", description = "User record lookup operations")
    )
)]
pub struct ApiDoc;
