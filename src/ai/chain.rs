//! Ordered provider fallback chain

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, warn};

use super::{KeyPool, ProviderAdapter, StepOutcome};
use crate::core::models::SummaryResult;
use crate::prompt::{Prompt, estimate_tokens};

/// One provider in the chain together with the credentials it may use.
#[derive(Clone)]
pub struct ProviderStep {
    adapter: Arc<dyn ProviderAdapter>,
    pool: KeyPool,
}

impl ProviderStep {
    pub fn new(adapter: Arc<dyn ProviderAdapter>, pool: KeyPool) -> Self {
        Self { adapter, pool }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.adapter.name()
    }

    #[must_use]
    pub fn adapter(&self) -> &Arc<dyn ProviderAdapter> {
        &self.adapter
    }

    #[must_use]
    pub fn pool(&self) -> &KeyPool {
        &self.pool
    }

    pub async fn run(&self, prompt: &Prompt) -> StepOutcome {
        self.pool.run(self.adapter.as_ref(), prompt).await
    }
}

/// Providers in fixed priority order; the first success wins.
///
/// Steps run strictly one after another and each step runs at most once per
/// call, so a request never touches two providers at the same time.
#[derive(Clone, Default)]
pub struct FallbackChain {
    steps: Vec<ProviderStep>,
}

impl FallbackChain {
    #[must_use]
    pub fn new(steps: Vec<ProviderStep>) -> Self {
        Self { steps }
    }

    #[must_use]
    pub fn steps(&self) -> &[ProviderStep] {
        &self.steps
    }

    #[must_use]
    pub fn provider_names(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.name().to_string()).collect()
    }

    pub async fn summarize(&self, prompt: &Prompt) -> SummaryResult {
        #[cfg(feature = "debug-logs")]
        info!("Using prompt:\n{}", prompt.text);

        info!(
            providers = self.steps.len(),
            estimated_tokens = estimate_tokens(&prompt.text),
            "Starting fallback chain"
        );

        let mut failures: Vec<String> = Vec::new();
        let mut skipped: Vec<&str> = Vec::new();

        for step in &self.steps {
            let started = Instant::now();
            info!(provider = step.name(), "Trying provider");

            match step.run(prompt).await {
                StepOutcome::Generated(generation) => {
                    info!(
                        provider = step.name(),
                        model = %generation.model_label,
                        elapsed_ms = started.elapsed().as_millis(),
                        "Provider succeeded"
                    );
                    return SummaryResult::Success {
                        text: generation.text,
                        provider_label: generation.model_label,
                    };
                }
                StepOutcome::Failed(failure) => {
                    warn!(
                        provider = step.name(),
                        reason = %failure,
                        elapsed_ms = started.elapsed().as_millis(),
                        "Provider failed, falling back"
                    );
                    failures.push(format!("{}: {}", step.name(), failure));
                }
                StepOutcome::Unconfigured => {
                    info!(provider = step.name(), "Provider not configured, skipping");
                    skipped.push(step.name());
                }
            }
        }

        let mut diagnostic = String::from("All providers were exhausted");
        if failures.is_empty() {
            diagnostic.push_str("; no provider is configured");
        } else {
            diagnostic.push_str(": ");
            diagnostic.push_str(&failures.join("; "));
        }
        if !skipped.is_empty() {
            diagnostic.push_str(&format!(" (not configured: {})", skipped.join(", ")));
        }

        error!(diagnostic = %diagnostic, "Fallback chain exhausted");
        SummaryResult::Exhausted { diagnostic }
    }
}
