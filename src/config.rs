use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub aws_region: String,
    pub table_name: String,
    pub dynamodb_endpoint: Option<String>,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let aws_region = env::var("REGION")
            .context("REGION environment variable is required")?;

        let table_name = env::var("TABLE_NAME")
            .context("TABLE_NAME environment variable is required")?;

        let dynamodb_endpoint = env::var("DYNAMODB_ENDPOINT").ok();

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            aws_region,
            table_name,
            dynamodb_endpoint,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  AWS region: {}", self.aws_region);
        tracing::info!("  DynamoDB table: {}", self.table_name);
        tracing::info!("  DynamoDB endpoint: {}",
            self.dynamodb_endpoint.as_deref().unwrap_or("default (AWS)"));
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
