mod config;
mod errors;
mod extract;
mod routes;
mod search;
mod state;
mod tokens;
mod vocabulary;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::tokens::{AlphabeticTokenValidator, RemoteTokenValidator, TokenValidator};
use crate::vocabulary::VocabularyCache;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Soletreiro v{}", env!("CARGO_PKG_VERSION"));

    // Load the word list now; a failure here is retried on the first request.
    let vocabulary = Arc::new(VocabularyCache::new(&config.vocab_file));
    vocabulary.warm_up().await;

    let token_validator: Arc<dyn TokenValidator> = match &config.tokenizer_url {
        Some(url) => {
            info!("Token validator: remote tokenizer at {url}");
            Arc::new(RemoteTokenValidator::new(url.clone())?)
        }
        None => {
            info!("Token validator: alphabetic");
            Arc::new(AlphabeticTokenValidator)
        }
    };

    let state = AppState {
        vocabulary,
        token_validator,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
