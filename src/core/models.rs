use serde::{Deserialize, Serialize};

use crate::errors::SummarizerError;

pub const DEFAULT_MAX_LENGTH: i64 = 150;
pub const DEFAULT_MIN_LENGTH: i64 = 50;

/// Label reported in `model_used` when no provider produced a summary.
pub const NO_MODEL_LABEL: &str = "None";

/// Fixed text returned in place of a summary once every provider is exhausted.
pub const EXHAUSTED_SUMMARY_TEXT: &str = "AI Engine Error: all providers were exhausted. Please check your provider API keys and quota.";

/// Raw `POST /summarize` body, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryRequestBody {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub max_length: Option<i64>,
    #[serde(default)]
    pub min_length: Option<i64>,
}

/// A validated summarization request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    text: String,
    max_length: i64,
    min_length: i64,
}

impl SummaryRequest {
    /// # Errors
    ///
    /// Returns `InvalidInput` when `text` is empty.
    pub fn new(
        text: impl Into<String>,
        max_length: i64,
        min_length: i64,
    ) -> Result<Self, SummarizerError> {
        let text = text.into();
        if text.is_empty() {
            return Err(SummarizerError::InvalidInput("Text is required".to_string()));
        }

        Ok(Self {
            text,
            max_length,
            min_length,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn max_length(&self) -> i64 {
        self.max_length
    }

    #[must_use]
    pub fn min_length(&self) -> i64 {
        self.min_length
    }
}

impl TryFrom<SummaryRequestBody> for SummaryRequest {
    type Error = SummarizerError;

    fn try_from(body: SummaryRequestBody) -> Result<Self, Self::Error> {
        SummaryRequest::new(
            body.text.unwrap_or_default(),
            body.max_length.unwrap_or(DEFAULT_MAX_LENGTH),
            body.min_length.unwrap_or(DEFAULT_MIN_LENGTH),
        )
    }
}

/// Outcome of one walk of the fallback chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryResult {
    Success { text: String, provider_label: String },
    Exhausted { diagnostic: String },
}

impl SummaryResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, SummaryResult::Success { .. })
    }
}

/// Wire shape of a `POST /summarize` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary_text: String,
    pub model_used: String,
    pub original_length: usize,
    pub summary_length: usize,
}

impl SummaryResponse {
    #[must_use]
    pub fn from_result(original_text: &str, result: SummaryResult) -> Self {
        let (summary_text, model_used) = match result {
            SummaryResult::Success {
                text,
                provider_label,
            } => (text, provider_label),
            SummaryResult::Exhausted { .. } => {
                (EXHAUSTED_SUMMARY_TEXT.to_string(), NO_MODEL_LABEL.to_string())
            }
        };

        Self {
            original_length: char_len(original_text),
            summary_length: char_len(&summary_text),
            summary_text,
            model_used,
        }
    }
}

#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}
