#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use summarizer::ProviderFailure;
use summarizer::ai::{Credential, FallbackChain, Generation, KeyPool, ProviderAdapter, ProviderStep};
use summarizer::prompt::Prompt;

/// What a scripted adapter does for a given credential.
#[derive(Clone)]
pub enum Behavior {
    Succeed(&'static str),
    Fail(&'static str),
    NoModels,
    Hang,
}

/// In-process adapter whose behaviour is fixed per credential secret.
pub struct ScriptedAdapter {
    name: String,
    models: Vec<String>,
    preferences: Vec<String>,
    behaviors: HashMap<String, Behavior>,
    default: Behavior,
    pub list_calls: AtomicUsize,
    pub generate_calls: AtomicUsize,
    pub successes: AtomicUsize,
    pub seen_credentials: std::sync::Mutex<Vec<String>>,
}

impl ScriptedAdapter {
    pub fn new(name: &str, default: Behavior) -> Self {
        Self {
            name: name.to_string(),
            models: vec![format!("{name}-pro"), format!("{name}-flash")],
            preferences: vec!["flash".to_string(), "pro".to_string()],
            behaviors: HashMap::new(),
            default,
            list_calls: AtomicUsize::new(0),
            generate_calls: AtomicUsize::new(0),
            successes: AtomicUsize::new(0),
            seen_credentials: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn with(mut self, secret: &str, behavior: Behavior) -> Self {
        self.behaviors.insert(secret.to_string(), behavior);
        self
    }

    pub fn generate_count(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }

    pub fn success_count(&self) -> usize {
        self.successes.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen_credentials.lock().unwrap().clone()
    }

    fn behavior_for(&self, credential: &Credential) -> Behavior {
        credential
            .secret()
            .and_then(|s| self.behaviors.get(s))
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }
}

#[async_trait]
impl ProviderAdapter for ScriptedAdapter {
    fn name(&self) -> &str {
        &self.name
    }

    fn model_preferences(&self) -> &[String] {
        &self.preferences
    }

    async fn available_models(
        &self,
        credential: &Credential,
    ) -> Result<Vec<String>, ProviderFailure> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_credentials
            .lock()
            .unwrap()
            .push(credential.secret().unwrap_or("<keyless>").to_string());
        match self.behavior_for(credential) {
            Behavior::NoModels => Ok(Vec::new()),
            _ => Ok(self.models.clone()),
        }
    }

    async fn generate(
        &self,
        credential: &Credential,
        model: &str,
        _prompt: &Prompt,
    ) -> Result<Generation, ProviderFailure> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior_for(credential) {
            Behavior::Succeed(text) => {
                self.successes.fetch_add(1, Ordering::SeqCst);
                Ok(Generation {
                    text: text.to_string(),
                    model_label: format!("{} ({model})", self.name),
                })
            }
            Behavior::Fail(reason) => Err(ProviderFailure::new(reason)),
            Behavior::NoModels => Err(ProviderFailure::new("unreachable: no models")),
            Behavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(ProviderFailure::new("woke up"))
            }
        }
    }
}

pub fn keys(list: &[&str]) -> Vec<Credential> {
    list.iter().map(|k| Credential::api_key(*k)).collect()
}

pub fn step(adapter: &Arc<ScriptedAdapter>, credentials: &[&str]) -> ProviderStep {
    ProviderStep::new(
        adapter.clone(),
        KeyPool::new(keys(credentials), Duration::from_secs(5)),
    )
}

pub fn chain(steps: Vec<ProviderStep>) -> Arc<FallbackChain> {
    Arc::new(FallbackChain::new(steps))
}

pub fn prompt() -> Prompt {
    Prompt::for_summary("The quick brown fox jumps over the lazy dog.", 150)
}
