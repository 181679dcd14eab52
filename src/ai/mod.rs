//! All AI provider functionality: adapters, key rotation and the fallback chain

pub mod chain;
pub mod credential;
pub mod gemini;
pub mod key_pool;
pub mod ollama;
pub mod openai;
pub mod probe;
pub mod registry;

use async_trait::async_trait;

use crate::errors::ProviderFailure;
use crate::prompt::Prompt;

pub use chain::{FallbackChain, ProviderStep};
pub use credential::Credential;
pub use key_pool::{KeyPool, StepOutcome};

/// Text produced by a provider, with a human-readable label of who made it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub text: String,
    pub model_label: String,
}

/// Uniform interface over one external generation API.
///
/// Adapters never retry; retry across credentials lives in [`KeyPool`].
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Provider name used in logs and diagnostics.
    fn name(&self) -> &str;

    /// Name substrings tried in order when picking a model.
    fn model_preferences(&self) -> &[String];

    /// Models `credential` may use for text generation.
    async fn available_models(
        &self,
        credential: &Credential,
    ) -> Result<Vec<String>, ProviderFailure>;

    async fn generate(
        &self,
        credential: &Credential,
        model: &str,
        prompt: &Prompt,
    ) -> Result<Generation, ProviderFailure>;
}

/// Picks the first model matching the earliest preference, else the first model.
#[must_use]
pub fn select_model(available: &[String], preferences: &[String]) -> Option<String> {
    preferences
        .iter()
        .find_map(|pref| {
            let pref = pref.to_ascii_lowercase();
            available
                .iter()
                .find(|model| model.to_ascii_lowercase().contains(&pref))
        })
        .or_else(|| available.first())
        .cloned()
}
