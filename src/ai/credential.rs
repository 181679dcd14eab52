//! Provider credentials and placeholder detection

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static PLACEHOLDER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)^key\d*$",
        r"(?i)^your[_\-\s].*$",
        r"(?i)^.*[_\-]here$",
        r"^<.*>$",
        r"^\$\{.*\}$",
        r"^\{\{.*\}\}$",
        r"(?i)^(changeme|change_me|placeholder|none|null|xxx+|todo)$",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

/// True for blank values and unfilled template entries such as `key1` or
/// `your_gemini_api_key_here`.
#[must_use]
pub fn is_placeholder(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || PLACEHOLDER_PATTERNS.iter().any(|re| re.is_match(trimmed))
}

/// Secret identifying an account with a provider.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// For providers reachable without a secret, such as a local model server.
    Keyless,
    ApiKey(String),
}

impl Credential {
    pub fn api_key(key: impl Into<String>) -> Self {
        Credential::ApiKey(key.into())
    }

    /// Whether this credential is worth a network call.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        match self {
            Credential::Keyless => true,
            Credential::ApiKey(key) => !is_placeholder(key),
        }
    }

    #[must_use]
    pub fn secret(&self) -> Option<&str> {
        match self {
            Credential::Keyless => None,
            Credential::ApiKey(key) => Some(key),
        }
    }

    #[must_use]
    pub fn masked(&self) -> String {
        match self {
            Credential::Keyless => "<keyless>".to_string(),
            Credential::ApiKey(key) => mask_key(key),
        }
    }
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 10 {
        return "******".to_string();
    }

    let prefix: String = chars[..5].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{prefix}********{suffix}")
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({})", self.masked())
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}
