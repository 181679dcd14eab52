//! Ordered credential rotation for a single provider

use std::future::Future;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::{Credential, Generation, ProviderAdapter, select_model};
use crate::core::models::char_len;
use crate::errors::ProviderFailure;
use crate::prompt::Prompt;

/// Result of running one provider step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Generated(Generation),
    Failed(ProviderFailure),
    /// No usable credential; the step is skipped without counting as a failure.
    Unconfigured,
}

/// Credentials for one provider, tried in configured order until one works.
#[derive(Debug, Clone)]
pub struct KeyPool {
    credentials: Vec<Credential>,
    call_timeout: Duration,
}

impl KeyPool {
    #[must_use]
    pub fn new(credentials: Vec<Credential>, call_timeout: Duration) -> Self {
        Self {
            credentials,
            call_timeout,
        }
    }

    /// Pool for a provider that needs no secret.
    #[must_use]
    pub fn keyless(call_timeout: Duration) -> Self {
        Self::new(vec![Credential::Keyless], call_timeout)
    }

    /// Pool with nothing to try.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(Vec::new(), Duration::from_secs(1))
    }

    #[must_use]
    pub fn credentials(&self) -> &[Credential] {
        &self.credentials
    }

    pub fn usable(&self) -> impl Iterator<Item = &Credential> {
        self.credentials.iter().filter(|c| c.is_usable())
    }

    #[must_use]
    pub fn call_timeout(&self) -> Duration {
        self.call_timeout
    }

    /// Tries each usable credential once, stopping at the first success.
    pub async fn run(&self, adapter: &dyn ProviderAdapter, prompt: &Prompt) -> StepOutcome {
        let provider = adapter.name();
        let usable: Vec<&Credential> = self.usable().collect();

        let skipped = self.credentials.len() - usable.len();
        if skipped > 0 {
            debug!(provider, skipped, "Skipping placeholder credentials");
        }

        if usable.is_empty() {
            info!(provider, "No usable credentials; provider not configured");
            return StepOutcome::Unconfigured;
        }

        let total = usable.len();
        let mut last_failure = ProviderFailure::new("no credential attempted");

        for (index, credential) in usable.into_iter().enumerate() {
            info!(
                provider,
                credential = %credential,
                attempt = index + 1,
                total,
                "Trying credential"
            );

            match self.try_credential(adapter, credential, prompt).await {
                Ok(generation) => {
                    info!(
                        provider,
                        model = %generation.model_label,
                        chars = char_len(&generation.text),
                        "Credential succeeded"
                    );
                    return StepOutcome::Generated(generation);
                }
                Err(failure) => {
                    warn!(
                        provider,
                        credential = %credential,
                        reason = %failure,
                        "Credential failed"
                    );
                    last_failure = failure;
                }
            }
        }

        StepOutcome::Failed(ProviderFailure::new(format!(
            "all {total} credential(s) failed; last error: {last_failure}"
        )))
    }

    /// One credential: discover models, pick one, generate. Every call is bounded.
    ///
    /// # Errors
    ///
    /// Returns the provider failure for this credential, including timeouts.
    pub async fn try_credential(
        &self,
        adapter: &dyn ProviderAdapter,
        credential: &Credential,
        prompt: &Prompt,
    ) -> Result<Generation, ProviderFailure> {
        let models = self
            .bounded("model listing", adapter.available_models(credential))
            .await?;

        let model = select_model(&models, adapter.model_preferences())
            .ok_or_else(|| ProviderFailure::new("no model available for this credential"))?;
        debug!(provider = adapter.name(), model = %model, "Selected model");

        self.bounded("generation", adapter.generate(credential, &model, prompt))
            .await
    }

    async fn bounded<T, F>(&self, what: &str, call: F) -> Result<T, ProviderFailure>
    where
        F: Future<Output = Result<T, ProviderFailure>>,
    {
        match tokio::time::timeout(self.call_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ProviderFailure::new(format!(
                "{what} timed out after {}s",
                self.call_timeout.as_secs_f32()
            ))),
        }
    }
}
