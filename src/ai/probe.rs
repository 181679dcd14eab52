//! Credential health check: one tiny generation per configured credential

use std::fmt;

use tracing::info;

use super::FallbackChain;
use crate::prompt::Prompt;

pub const PROBE_PROMPT: &str = "Hello, are you available? Respond in 1 word.";
const PROBE_MAX_LENGTH: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStatus {
    Ok { model_label: String },
    Failed { reason: String },
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub provider: String,
    pub credential: String,
    pub status: ProbeStatus,
}

impl ProbeReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self.status, ProbeStatus::Ok { .. })
    }
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            ProbeStatus::Ok { model_label } => {
                write!(f, "[OK]      {} {} -> {}", self.provider, self.credential, model_label)
            }
            ProbeStatus::Failed { reason } => {
                write!(f, "[FAILED]  {} {} -> {}", self.provider, self.credential, reason)
            }
            ProbeStatus::Skipped => {
                write!(f, "[SKIPPED] {} {} (placeholder)", self.provider, self.credential)
            }
        }
    }
}

/// Checks every credential of every provider, in chain order.
///
/// Unlike a summarize call this does not stop at the first success.
pub async fn probe_chain(chain: &FallbackChain) -> Vec<ProbeReport> {
    let prompt = Prompt::raw(PROBE_PROMPT, PROBE_MAX_LENGTH);
    let mut reports = Vec::new();

    for step in chain.steps() {
        for credential in step.pool().credentials() {
            let status = if credential.is_usable() {
                match step
                    .pool()
                    .try_credential(step.adapter().as_ref(), credential, &prompt)
                    .await
                {
                    Ok(generation) => ProbeStatus::Ok {
                        model_label: generation.model_label,
                    },
                    Err(failure) => ProbeStatus::Failed {
                        reason: failure.reason,
                    },
                }
            } else {
                ProbeStatus::Skipped
            };

            let report = ProbeReport {
                provider: step.name().to_string(),
                credential: credential.masked(),
                status,
            };
            info!(report = %report, "Probed credential");
            reports.push(report);
        }
    }

    reports
}
