//! Token Validation — pluggable check that a string is a single word token.
//!
//! Default: `AlphabeticTokenValidator` (pure-Rust, deterministic, no I/O).
//! Optional: `RemoteTokenValidator` (HTTP tokenizer service, enabled by `TOKENIZER_URL`).
//!
//! `AppState` holds an `Arc<dyn TokenValidator>`. The word search never calls it.

pub mod handlers;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const TOKENIZER_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum TokenizerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("tokenizer returned status {status}: {message}")]
    Api { status: u16, message: String },
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait TokenValidator: Send + Sync {
    async fn is_valid_word_token(&self, word: &str) -> Result<bool, TokenizerError>;

    /// Short backend name, reported alongside validation results.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// AlphabeticTokenValidator — default
// ────────────────────────────────────────────────────────────────────────────

/// Accepts a string when it is exactly one token made only of letters:
/// non-empty after trimming, no inner whitespace, no digits or punctuation.
pub struct AlphabeticTokenValidator;

#[async_trait]
impl TokenValidator for AlphabeticTokenValidator {
    async fn is_valid_word_token(&self, word: &str) -> Result<bool, TokenizerError> {
        Ok(is_alphabetic_token(word))
    }

    fn backend(&self) -> &'static str {
        "alphabetic"
    }
}

fn is_alphabetic_token(word: &str) -> bool {
    let word = word.trim();
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

// ────────────────────────────────────────────────────────────────────────────
// RemoteTokenValidator — external tokenizer service
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct TokenizeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenizeResponse {
    valid: bool,
}

/// Delegates to a tokenizer service: `POST {url}` with `{"text": ...}`,
/// expecting `{"valid": bool}` back.
pub struct RemoteTokenValidator {
    client: Client,
    url: String,
}

impl RemoteTokenValidator {
    pub fn new(url: String) -> Result<Self, TokenizerError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(TOKENIZER_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl TokenValidator for RemoteTokenValidator {
    async fn is_valid_word_token(&self, word: &str) -> Result<bool, TokenizerError> {
        let response = self
            .client
            .post(&self.url)
            .json(&TokenizeRequest { text: word })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TokenizerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: TokenizeResponse = response.json().await?;
        debug!("Tokenizer verdict for {word:?}: {}", body.valid);
        Ok(body.valid)
    }

    fn backend(&self) -> &'static str {
        "remote"
    }
}
