use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Every variant maps to a fixed status code and message body. The
/// backend variant carries the underlying cause for logging, but the
/// cause is never exposed to the caller.
#[derive(Debug)]
pub enum ApiError {
    /// `userId` query parameter absent or empty
    MissingUserId,
    /// Lookup succeeded but no record exists for the key
    UserNotFound,
    /// The storage backend call itself failed
    Backend(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingUserId => {
                (StatusCode::BAD_REQUEST, "Missing userId parameter")
            }
            ApiError::UserNotFound => (StatusCode::NOT_FOUND, "No user data found"),
            ApiError::Backend(err) => {
                tracing::error!("Unable to retrieve data: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to retrieve user data")
            }
        };

        let body = Json(ErrorResponse {
            message: message.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Backend(err)
    }
}
