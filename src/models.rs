use serde::Deserialize;

/// Query parameters for the user lookup endpoint
///
/// Only `userId` is consumed; any other query parameter is ignored.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct LookupQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}
