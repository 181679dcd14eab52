//! `OpenAI` chat completions adapter

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{
    ChatCompletionMessage, ChatCompletionRequest, Content, MessageRole,
};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::{Credential, Generation, ProviderAdapter};
use crate::errors::ProviderFailure;
use crate::prompt::Prompt;

pub struct OpenAiAdapter {
    client: Client,
    base_url: String,
    model: String,
    preferences: Vec<String>,
}

impl OpenAiAdapter {
    #[must_use]
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        let model = model.into();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            preferences: vec![model.clone()],
            model,
        }
    }

    #[must_use]
    pub fn build_request(model: &str, prompt: &Prompt) -> ChatCompletionRequest {
        ChatCompletionRequest::new(
            model.to_string(),
            vec![ChatCompletionMessage {
                role: MessageRole::user,
                content: Content::Text(prompt.text.clone()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            }],
        )
        .temperature(0.3)
    }
}

#[must_use]
pub fn model_label(model: &str) -> String {
    format!("OpenAI ({model})")
}

#[async_trait]
impl ProviderAdapter for OpenAiAdapter {
    fn name(&self) -> &str {
        "openai"
    }

    fn model_preferences(&self) -> &[String] {
        &self.preferences
    }

    /// The configured model; no listing call is made.
    async fn available_models(
        &self,
        _credential: &Credential,
    ) -> Result<Vec<String>, ProviderFailure> {
        Ok(vec![self.model.clone()])
    }

    async fn generate(
        &self,
        credential: &Credential,
        model: &str,
        prompt: &Prompt,
    ) -> Result<Generation, ProviderFailure> {
        let api_key = credential
            .secret()
            .ok_or_else(|| ProviderFailure::new("OpenAI requires an API key"))?;
        let request = Self::build_request(model, prompt);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderFailure::new(format!("OpenAI: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(ProviderFailure::new(format!(
                "OpenAI {model} ({status}): {body}"
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| ProviderFailure::new(format!("OpenAI parse: {e}")))?;

        let text = response_json
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string)
            .ok_or_else(|| ProviderFailure::new(format!("OpenAI {model} returned no text")))?;

        Ok(Generation {
            text,
            model_label: model_label(model),
        })
    }
}
