//! Local model adapter backed by an Ollama server

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{Credential, Generation, ProviderAdapter};
use crate::errors::ProviderFailure;
use crate::prompt::Prompt;

const FALLBACK_FAMILIES: [&str; 2] = ["llama", "mistral"];

#[derive(Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Deserialize)]
struct OllamaResponse {
    response: String,
}

#[derive(Deserialize)]
struct TagList {
    #[serde(default)]
    models: Vec<TagInfo>,
}

#[derive(Deserialize)]
struct TagInfo {
    name: String,
}

pub struct OllamaAdapter {
    client: Client,
    base_url: String,
    preferences: Vec<String>,
}

impl OllamaAdapter {
    #[must_use]
    pub fn new(base_url: impl Into<String>, preferred_model: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        let mut preferences = vec![preferred_model.to_string()];
        preferences.extend(FALLBACK_FAMILIES.iter().map(|f| (*f).to_string()));

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            preferences,
        }
    }
}

#[must_use]
pub fn model_label(model: &str) -> String {
    format!("{model} (Local)")
}

#[async_trait]
impl ProviderAdapter for OllamaAdapter {
    fn name(&self) -> &str {
        "local"
    }

    fn model_preferences(&self) -> &[String] {
        &self.preferences
    }

    async fn available_models(
        &self,
        _credential: &Credential,
    ) -> Result<Vec<String>, ProviderFailure> {
        let response = self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .send()
            .await
            .map_err(ProviderFailure::from)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderFailure::new(format!("Ollama tags {status}: {body}")));
        }

        let tags: TagList = response
            .json()
            .await
            .map_err(|e| ProviderFailure::new(format!("Ollama tags parse: {e}")))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    async fn generate(
        &self,
        _credential: &Credential,
        model: &str,
        prompt: &Prompt,
    ) -> Result<Generation, ProviderFailure> {
        let request = OllamaRequest {
            model: model.to_string(),
            prompt: prompt.text.clone(),
            stream: false,
            options: OllamaOptions {
                temperature: 0.3,
                num_predict: prompt.max_length,
            },
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(ProviderFailure::from)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderFailure::new(format!(
                "Ollama {model} ({status}): {body}"
            )));
        }

        let ollama: OllamaResponse = response
            .json()
            .await
            .map_err(|e| ProviderFailure::new(format!("Ollama parse: {e}")))?;

        if ollama.response.trim().is_empty() {
            return Err(ProviderFailure::new(format!("Ollama {model} returned no text")));
        }

        Ok(Generation {
            text: ollama.response,
            model_label: model_label(model),
        })
    }
}
