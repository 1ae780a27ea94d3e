use anyhow::{Context, Result};
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use std::collections::HashMap;

use crate::config::Config;

/// Name of the partition key attribute on the users table
pub const USER_ID_ATTRIBUTE: &str = "userId";

/// A raw item as stored in DynamoDB: attribute name to typed value
pub type Item = HashMap<String, AttributeValue>;

/// Shareable DynamoDB client for use across async handlers
///
/// Built once at startup and cloned into each handler through the
/// application state. The underlying SDK client is reference-counted,
/// so clones are cheap and carry no per-request mutable state.
#[derive(Clone)]
pub struct DynamoClient {
    inner: Client,
    table_name: String,
}

impl DynamoClient {
    /// Create a new DynamoDB client from configuration
    ///
    /// Retries are disabled: each lookup is a single round trip, and
    /// failures map directly to an error response. When
    /// `DYNAMODB_ENDPOINT` is set the client targets that endpoint with
    /// static test credentials, which allows running against DynamoDB
    /// Local without touching AWS.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.aws_region.clone()))
            .retry_config(RetryConfig::disabled());

        if let Some(endpoint) = &config.dynamodb_endpoint {
            tracing::info!("Connecting to DynamoDB at local endpoint: {}", endpoint);
            loader = loader.endpoint_url(endpoint).test_credentials();
        } else {
            tracing::info!("Connecting to DynamoDB in region: {}", config.aws_region);
        }

        let sdk_config = loader.load().await;

        Self {
            inner: Client::new(&sdk_config),
            table_name: config.table_name.clone(),
        }
    }

    /// Get a reference to the underlying DynamoDB client
    pub fn client(&self) -> &Client {
        &self.inner
    }

    /// Retrieve a single user record by its `userId` key
    ///
    /// # Returns
    /// * `Ok(Some(item))` - Record found and returned as a raw attribute map
    /// * `Ok(None)` - No record stored under this key
    /// * `Err(_)` - The GetItem call itself failed
    pub async fn get_user(&self, user_id: &str) -> Result<Option<Item>> {
        let output = self
            .inner
            .get_item()
            .table_name(&self.table_name)
            .key(USER_ID_ATTRIBUTE, AttributeValue::S(user_id.to_string()))
            .send()
            .await
            .context("GetItem request to DynamoDB failed")?;

        if output.item.is_some() {
            tracing::debug!("Found record for userId: {}", user_id);
        } else {
            tracing::debug!("No record for userId: {}", user_id);
        }

        Ok(output.item)
    }

    /// Perform a health check with a single DescribeTable round trip
    ///
    /// # Errors
    /// Returns an error if DynamoDB is unreachable or the table is missing
    pub async fn health_check(&self) -> Result<()> {
        self.inner
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
            .context("DescribeTable request to DynamoDB failed")?;

        tracing::debug!("Health check query succeeded");
        Ok(())
    }
}

/// Flatten an item's string-typed attributes into a plain string map
///
/// Attributes of any other type (numeric, binary, boolean, null, list,
/// map, set) are dropped. The lookup response only carries the string
/// attributes of a record.
pub fn string_attributes(item: Item) -> HashMap<String, String> {
    let total = item.len();

    let strings: HashMap<String, String> = item
        .into_iter()
        .filter_map(|(name, value)| match value {
            AttributeValue::S(text) => Some((name, text)),
            _ => None,
        })
        .collect();

    let dropped = total - strings.len();
    if dropped > 0 {
        tracing::debug!("Dropped {} non-string attributes during projection", dropped);
    }

    strings
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::primitives::Blob;

    fn test_config(endpoint: &str) -> Config {
        Config {
            aws_region: "us-east-1".to_string(),
            table_name: "users-test".to_string(),
            dynamodb_endpoint: Some(endpoint.to_string()),
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        }
    }

    #[tokio::test]
    async fn test_client_creation_with_local_endpoint() {
        // Client construction performs no I/O, so this succeeds whether
        // or not anything is listening on the endpoint.
        let config = test_config("http://localhost:8000");
        let client = DynamoClient::from_config(&config).await;
        assert_eq!(client.table_name, "users-test");
    }

    #[test]
    fn test_client_is_clonable() {
        // Required for sharing across Axum handlers
        fn assert_clone<T: Clone>() {}
        assert_clone::<DynamoClient>();
    }

    #[test]
    fn test_client_is_send_sync() {
        // Required for use in async handlers
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DynamoClient>();
    }

    #[test]
    fn test_string_attributes_all_strings() {
        let mut item = Item::new();
        item.insert("a".to_string(), AttributeValue::S("1".to_string()));
        item.insert("b".to_string(), AttributeValue::S("2".to_string()));

        let flattened = string_attributes(item);

        assert_eq!(flattened.len(), 2);
        assert_eq!(flattened.get("a"), Some(&"1".to_string()));
        assert_eq!(flattened.get("b"), Some(&"2".to_string()));
    }

    #[test]
    fn test_string_attributes_drops_non_string_types() {
        let mut item = Item::new();
        item.insert("userId".to_string(), AttributeValue::S("u1".to_string()));
        item.insert("name".to_string(), AttributeValue::S("Alice".to_string()));
        item.insert("age".to_string(), AttributeValue::N("30".to_string()));
        item.insert("active".to_string(), AttributeValue::Bool(true));
        item.insert("nickname".to_string(), AttributeValue::Null(true));
        item.insert(
            "avatar".to_string(),
            AttributeValue::B(Blob::new(vec![1, 2, 3])),
        );
        item.insert(
            "tags".to_string(),
            AttributeValue::L(vec![AttributeValue::S("x".to_string())]),
        );
        item.insert(
            "address".to_string(),
            AttributeValue::M(HashMap::from([(
                "city".to_string(),
                AttributeValue::S("Berlin".to_string()),
            )])),
        );

        let flattened = string_attributes(item);

        assert_eq!(flattened.len(), 2);
        assert_eq!(flattened.get("userId"), Some(&"u1".to_string()));
        assert_eq!(flattened.get("name"), Some(&"Alice".to_string()));
    }

    #[test]
    fn test_string_attributes_empty_item() {
        let flattened = string_attributes(Item::new());
        assert!(flattened.is_empty());
    }
}
