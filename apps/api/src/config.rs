use anyhow::{Context, Result};

const DEFAULT_VOCAB_FILE: &str = "palavras.txt";

/// Application configuration loaded from environment variables.
/// Every variable has a default except the optional tokenizer endpoint.
#[derive(Debug, Clone)]
pub struct Config {
    pub vocab_file: String,
    pub port: u16,
    pub rust_log: String,
    /// Remote tokenizer used by the token validation endpoint. Falls back to
    /// the built-in alphabetic validator when unset.
    pub tokenizer_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            vocab_file: std::env::var("VOCAB_FILE")
                .unwrap_or_else(|_| DEFAULT_VOCAB_FILE.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            tokenizer_url: optional_env("TOKENIZER_URL"),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
