use crate::config::Config;
use crate::dynamo::DynamoClient;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub dynamo_client: DynamoClient,
    pub config: Arc<Config>,
}
