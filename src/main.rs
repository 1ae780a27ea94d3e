mod api_doc;
mod config;
mod dynamo;
mod error;
mod handlers;
mod models;
mod routes;
mod state;

use anyhow::Context;
use api_doc::ApiDoc;
use axum::{routing::get, Router};
use config::Config;
use dynamo::DynamoClient;
use state::AppState;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("rust-dynamo-users starting");

    let config = Config::from_env()?;
    config.log_startup();

    let dynamo_client = DynamoClient::from_config(&config).await;

    let bind_addr = format!("{}:{}", config.service_host, config.service_port);
    let state = AppState {
        dynamo_client,
        config: Arc::new(config),
    };

    let app = Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::USERS, get(handlers::lookup_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    tracing::info!("Listening on {}", bind_addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
