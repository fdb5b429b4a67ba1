use std::sync::Arc;
use tracing::{error, info};

mod chat;
mod config;
mod entity;
mod event;
mod interface;
mod talk;
mod webhook;

use interface::{graph_api::GraphApiClient, messenger::Outbound};
use talk::{registry::TopicRegistry, router::Router};
use webhook::{
    server::{app, AppState},
    signature::SignatureVerifier,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the environment may already be set
    let dotenv = dotenvy::dotenv();

    // Initialize logging with default filter if RUST_LOG is not set
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    if let Err(e) = dotenv {
        info!("No .env file found or failed to load: {}", e);
    }

    info!("Talking Chess Engine starting...");

    let config = config::Config::load()?;
    info!("Loaded configuration: {:?}", config);

    // Outbound Send API client
    let graph_api = GraphApiClient::new(&config.graph_api_url, &config.page_access_token)?;
    let outbound = Outbound::new(Arc::new(graph_api));

    // Conversation router over the built-in topics
    let topics = TopicRegistry::standard();
    info!(
        "Registered {} openings and {} players",
        topics.openings().len(),
        topics.players().len()
    );
    let router = Arc::new(Router::new(topics, outbound.clone()));

    let state = AppState {
        router,
        outbound,
        verify_token: Arc::from(config.verify_token.as_str()),
        verifier: SignatureVerifier::new(&config.app_secret),
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    info!("Listening for Messenger callbacks on port {}", config.port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down...");
        }
        res = axum::serve(listener, app(state)) => {
            if let Err(e) = res {
                error!("Server stopped with error: {}", e);
            }
        }
    }

    Ok(())
}
