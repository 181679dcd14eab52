//! Summarizer - an HTTP service that summarizes arbitrary text with external LLM providers.
//!
//! Every request walks a fixed, configured-once fallback chain:
//! providers are tried in priority order, multi-credential providers rotate
//! through their keys, and the first successful generation is returned. When
//! every provider fails the caller still receives a readable response instead
//! of an error.
//!
//! # Architecture
//!
//! - `ai`: provider adapters (Gemini, `OpenAI`, local Ollama), key rotation and the fallback chain
//! - `api`: axum routes (`GET /`, `POST /summarize`) and the server loop
//! - `core`: environment configuration and the request/response models
//! - `prompt`: the fixed summarization instructions
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use summarizer::ai::registry::build_chain;
//! use summarizer::api::summarize_text;
//! use summarizer::core::config::AppConfig;
//! use summarizer::core::models::SummaryRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     summarizer::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let chain = Arc::new(build_chain(&config));
//!
//!     let request = SummaryRequest::new("The quick brown fox jumps over the lazy dog.", 150, 50)?;
//!     let response = summarize_text(&chain, &request).await;
//!     println!("{} -> {}", response.model_used, response.summary_text);
//!
//!     Ok(())
//! }
//! ```

pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod prompt;

pub use errors::{ProviderFailure, SummarizerError};

/// Configure structured JSON logging, filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// summarizer::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
