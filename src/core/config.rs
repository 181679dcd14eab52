use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;
use url::Url;

use crate::ai::credential::Credential;
use crate::errors::SummarizerError;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_LOCAL_MODEL: &str = "llama3.2";
pub const DEFAULT_PROVIDER_ORDER: &str = "gemini,openai,local";
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Providers the fallback chain knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Gemini,
    OpenAi,
    Local,
}

impl ProviderKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::OpenAi => "openai",
            ProviderKind::Local => "local",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = SummarizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" => Ok(ProviderKind::Gemini),
            "openai" | "gpt" => Ok(ProviderKind::OpenAi),
            "local" | "ollama" => Ok(ProviderKind::Local),
            other => Err(SummarizerError::ConfigError(format!(
                "unknown provider '{other}' in PROVIDER_ORDER"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_keys: Vec<Credential>,
    pub gemini_base_url: String,
    pub openai_api_key: Option<Credential>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub load_local_model: bool,
    pub local_model: String,
    pub ollama_url: String,
    pub provider_order: Vec<ProviderKind>,
    pub provider_timeout: Duration,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a value is present but malformed.
    pub fn from_env() -> Result<Self, SummarizerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a value is present but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SummarizerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut gemini_api_keys: Vec<Credential> = get("GEMINI_API_KEYS")
            .map(|raw| parse_key_list(&raw))
            .unwrap_or_default();
        if let Some(single) = get("GEMINI_API_KEY") {
            let single = Credential::api_key(single);
            if !gemini_api_keys.contains(&single) {
                gemini_api_keys.push(single);
            }
        }

        let provider_order = parse_provider_order(
            get("PROVIDER_ORDER")
                .as_deref()
                .unwrap_or(DEFAULT_PROVIDER_ORDER),
        )?;

        let provider_timeout = match get("PROVIDER_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|e| {
                    SummarizerError::ConfigError(format!("PROVIDER_TIMEOUT_SECS: {e}"))
                })?;
                if secs == 0 {
                    return Err(SummarizerError::ConfigError(
                        "PROVIDER_TIMEOUT_SECS must be greater than zero".to_string(),
                    ));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS),
        };

        let port = match get("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| SummarizerError::ConfigError(format!("PORT: {e}")))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            gemini_api_keys,
            gemini_base_url: base_url(
                "GEMINI_BASE_URL",
                get("GEMINI_BASE_URL"),
                DEFAULT_GEMINI_BASE_URL,
            )?,
            openai_api_key: get("OPENAI_API_KEY").map(Credential::api_key),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            openai_base_url: base_url(
                "OPENAI_BASE_URL",
                get("OPENAI_BASE_URL"),
                DEFAULT_OPENAI_BASE_URL,
            )?,
            load_local_model: get("LOAD_LOCAL_MODEL").is_some_and(|v| parse_flag(&v)),
            local_model: get("LOCAL_MODEL").unwrap_or_else(|| DEFAULT_LOCAL_MODEL.to_string()),
            ollama_url: base_url("OLLAMA_URL", get("OLLAMA_URL"), DEFAULT_OLLAMA_URL)?,
            provider_order,
            provider_timeout,
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Splits a comma-separated credential list, keeping order and dropping blanks.
#[must_use]
pub fn parse_key_list(raw: &str) -> Vec<Credential> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(Credential::api_key)
        .collect()
}

/// Parses `PROVIDER_ORDER`; later duplicates are dropped.
///
/// # Errors
///
/// Returns `ConfigError` for unknown provider names or an empty order.
pub fn parse_provider_order(raw: &str) -> Result<Vec<ProviderKind>, SummarizerError> {
    let mut order = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        let kind: ProviderKind = name.parse()?;
        if order.contains(&kind) {
            warn!(provider = %kind, "Duplicate provider in PROVIDER_ORDER ignored");
            continue;
        }
        order.push(kind);
    }

    if order.is_empty() {
        return Err(SummarizerError::ConfigError(
            "PROVIDER_ORDER must name at least one provider".to_string(),
        ));
    }

    Ok(order)
}

#[must_use]
pub fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

fn base_url(key: &str, value: Option<String>, default: &str) -> Result<String, SummarizerError> {
    let raw = value.unwrap_or_else(|| default.to_string());
    Url::parse(&raw).map_err(|e| SummarizerError::ConfigError(format!("{key}: {e}")))?;
    Ok(raw.trim_end_matches('/').to_string())
}
