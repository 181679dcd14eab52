//! Google Gemini adapter with per-credential model discovery

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{Credential, Generation, ProviderAdapter};
use crate::errors::ProviderFailure;
use crate::prompt::Prompt;

const GENERATE_METHOD: &str = "generateContent";
const MODEL_PREFIX: &str = "models/";
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct ModelList {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

#[derive(Deserialize)]
struct ModelInfo {
    name: String,
    #[serde(rename = "supportedGenerationMethods", default)]
    supported_generation_methods: Vec<String>,
}

pub struct GeminiAdapter {
    client: Client,
    base_url: String,
    preferences: Vec<String>,
}

impl GeminiAdapter {
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            preferences: vec!["flash".to_string(), "pro".to_string()],
        }
    }

    fn key<'a>(credential: &'a Credential) -> Result<&'a str, ProviderFailure> {
        credential
            .secret()
            .ok_or_else(|| ProviderFailure::new("Gemini requires an API key"))
    }
}

/// Human-readable label for a Gemini model id.
#[must_use]
pub fn model_label(model: &str) -> String {
    format!("Gemini ({model})")
}

#[async_trait]
impl ProviderAdapter for GeminiAdapter {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model_preferences(&self) -> &[String] {
        &self.preferences
    }

    async fn available_models(
        &self,
        credential: &Credential,
    ) -> Result<Vec<String>, ProviderFailure> {
        let url = format!("{}/v1beta/models", self.base_url);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, Self::key(credential)?)
            .send()
            .await
            .map_err(|e| ProviderFailure::new(format!("Gemini model listing: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderFailure::new(format!(
                "Gemini model listing {status}: {body}"
            )));
        }

        let list: ModelList = response
            .json()
            .await
            .map_err(|e| ProviderFailure::new(format!("Gemini model listing parse: {e}")))?;

        Ok(list
            .models
            .into_iter()
            .filter(|m| {
                m.supported_generation_methods
                    .iter()
                    .any(|method| method == GENERATE_METHOD)
            })
            .map(|m| {
                m.name
                    .strip_prefix(MODEL_PREFIX)
                    .unwrap_or(&m.name)
                    .to_string()
            })
            .collect())
    }

    async fn generate(
        &self,
        credential: &Credential,
        model: &str,
        prompt: &Prompt,
    ) -> Result<Generation, ProviderFailure> {
        let url = format!("{}/v1beta/models/{}:{}", self.base_url, model, GENERATE_METHOD);

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.text.clone(),
                }],
            }],
            generation_config: GenerationConfig { temperature: 0.3 },
        };

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, Self::key(credential)?)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderFailure::new(format!("Gemini {model}: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderFailure::new(format!(
                "Gemini {model} ({status}): {body}"
            )));
        }

        let gemini: GeminiResponse = response
            .json()
            .await
            .map_err(|e| ProviderFailure::new(format!("Gemini parse: {e}")))?;

        let text = gemini
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ProviderFailure::new(format!("Gemini {model} returned no text")))?;

        Ok(Generation {
            text,
            model_label: model_label(model),
        })
    }
}
