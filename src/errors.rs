use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Internal server error: {0}")]
    ServerError(String),
}

impl From<reqwest::Error> for SummarizerError {
    fn from(error: reqwest::Error) -> Self {
        SummarizerError::HttpError(error.to_string())
    }
}

impl From<anyhow::Error> for SummarizerError {
    fn from(error: anyhow::Error) -> Self {
        SummarizerError::ServerError(error.to_string())
    }
}

impl From<std::io::Error> for SummarizerError {
    fn from(error: std::io::Error) -> Self {
        SummarizerError::ServerError(error.to_string())
    }
}

/// Uniform failure of a single provider call.
///
/// Transport, authentication, quota and "no model available" conditions all
/// collapse into this one type; callers only need to know the call did not
/// produce text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ProviderFailure {
    pub reason: String,
}

impl ProviderFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for ProviderFailure {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ProviderFailure::new(format!("request timed out: {error}"))
        } else {
            ProviderFailure::new(format!("request failed: {error}"))
        }
    }
}
