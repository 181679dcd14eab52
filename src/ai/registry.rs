//! Builds the fallback chain from configuration

use std::sync::Arc;

use tracing::info;

use super::gemini::GeminiAdapter;
use super::ollama::OllamaAdapter;
use super::openai::OpenAiAdapter;
use super::{FallbackChain, KeyPool, ProviderStep};
use crate::core::config::{AppConfig, ProviderKind};

/// Creates the step for one provider; unconfigured providers get an empty pool.
#[must_use]
pub fn build_step(config: &AppConfig, kind: ProviderKind) -> ProviderStep {
    let timeout = config.provider_timeout;

    match kind {
        ProviderKind::Gemini => {
            let pool = KeyPool::new(config.gemini_api_keys.clone(), timeout);
            info!(
                configured = pool.credentials().len(),
                usable = pool.usable().count(),
                keys = ?pool.credentials(),
                "LLM: Gemini adapter loaded"
            );
            ProviderStep::new(
                Arc::new(GeminiAdapter::new(&config.gemini_base_url, timeout)),
                pool,
            )
        }
        ProviderKind::OpenAi => {
            let pool = KeyPool::new(config.openai_api_key.iter().cloned().collect(), timeout);
            info!(
                usable = pool.usable().count(),
                model = %config.openai_model,
                "LLM: OpenAI adapter loaded"
            );
            ProviderStep::new(
                Arc::new(OpenAiAdapter::new(
                    &config.openai_base_url,
                    &config.openai_model,
                    timeout,
                )),
                pool,
            )
        }
        ProviderKind::Local => {
            let pool = if config.load_local_model {
                info!(url = %config.ollama_url, model = %config.local_model, "LLM: local model enabled");
                KeyPool::keyless(timeout)
            } else {
                info!("LLM: local model loading skipped (LOAD_LOCAL_MODEL is off)");
                KeyPool::disabled()
            };
            ProviderStep::new(
                Arc::new(OllamaAdapter::new(
                    &config.ollama_url,
                    &config.local_model,
                    timeout,
                )),
                pool,
            )
        }
    }
}

/// Builds every provider in `PROVIDER_ORDER`, in that order.
#[must_use]
pub fn build_chain(config: &AppConfig) -> FallbackChain {
    let steps: Vec<ProviderStep> = config
        .provider_order
        .iter()
        .map(|kind| build_step(config, *kind))
        .collect();

    info!(
        order = ?config.provider_order,
        "LLM fallback chain: {} providers",
        steps.len()
    );

    FallbackChain::new(steps)
}
