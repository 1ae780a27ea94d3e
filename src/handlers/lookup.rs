use crate::dynamo::string_attributes;
use crate::error::{ApiError, ErrorResponse};
use crate::models::LookupQuery;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Query, extract::State, http::StatusCode, Json};
use std::collections::HashMap;

/// GET /users handler - Look up a user record by `userId`
///
/// The record's string-typed attributes are flattened into the response
/// body; attributes of any other type are dropped.
#[utoipa::path(
    get,
    path = routes::USERS,
    params(
        ("userId" = Option<String>, Query, description = "Key of the user record to retrieve")
    ),
    responses(
        (status = 200, description = "User record found", body = HashMap<String, String>),
        (status = 400, description = "Missing or empty userId parameter", body = ErrorResponse),
        (status = 404, description = "No record for the given userId", body = ErrorResponse),
        (status = 500, description = "Storage backend error", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn lookup_handler(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> Result<(StatusCode, Json<HashMap<String, String>>), ApiError> {
    // Validate before touching the backend
    let user_id = match query.user_id.as_deref() {
        Some(id) if !id.is_empty() => id.to_owned(),
        _ => return Err(ApiError::MissingUserId),
    };

    match state.dynamo_client.get_user(&user_id).await? {
        Some(item) => {
            tracing::info!("Successfully retrieved record for userId: {}", user_id);
            Ok((StatusCode::OK, Json(string_attributes(item))))
        }
        None => {
            tracing::info!("No record found for userId: {}", user_id);
            Err(ApiError::UserNotFound)
        }
    }
}
