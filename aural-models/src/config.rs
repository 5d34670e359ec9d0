//! Completion client defaults.
//!
//! Values come from built-in defaults, optionally overlaid with the
//! `OLLAMA_*` environment variables at process start.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default Ollama API base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Port Ollama listens on when `OLLAMA_HOST` omits one.
pub const DEFAULT_PORT: u16 = 11434;

/// Default model used when neither the agent nor the request names one.
pub const DEFAULT_MODEL: &str = "llama3.2";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default output token budget.
pub const DEFAULT_MAX_TOKENS: u32 = 2048;

/// Environment variable for the server base URL.
pub const ENV_BASE_URL: &str = "OLLAMA_BASE_URL";
/// Fallback environment variable for the server base URL (Ollama's own).
pub const ENV_HOST: &str = "OLLAMA_HOST";
/// Environment variable for the default model.
pub const ENV_MODEL: &str = "OLLAMA_MODEL";
/// Environment variable for the default temperature.
pub const ENV_TEMPERATURE: &str = "OLLAMA_TEMPERATURE";
/// Environment variable for the default output token budget.
pub const ENV_MAX_TOKENS: &str = "OLLAMA_MAX_TOKENS";

/// Connection settings and generation defaults for the completion server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Server base URL, e.g. `http://localhost:11434`.
    pub base_url: String,
    /// Model used when a request does not name one.
    pub model: String,
    /// Temperature used when a request does not set one.
    pub temperature: f32,
    /// Output token budget used when a request does not set one.
    pub max_tokens: u32,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl CompletionConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_lookup(|key| std::env::var(key).ok())
    }

    /// Overlay values from an environment-style lookup.
    ///
    /// Unset or empty variables keep the current value. Numeric values that
    /// fail to parse, or fall outside their valid range, are rejected.
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_BASE_URL) {
            self.base_url = normalize_base_url(&url);
        } else if let Some(host) = get(ENV_HOST) {
            self.base_url = with_default_port(normalize_base_url(&host));
        }
        if let Some(model) = get(ENV_MODEL) {
            self.model = model.trim().to_string();
        }
        if let Some(raw) = get(ENV_TEMPERATURE) {
            self.temperature = raw.trim().parse().map_err(|_| {
                Error::InvalidConfig(format!("{ENV_TEMPERATURE} is not a number: {raw}"))
            })?;
        }
        if let Some(raw) = get(ENV_MAX_TOKENS) {
            self.max_tokens = raw.trim().parse().map_err(|_| {
                Error::InvalidConfig(format!("{ENV_MAX_TOKENS} is not a positive integer: {raw}"))
            })?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(Error::InvalidConfig(format!(
                "temperature must be within [0, 1], got {}",
                self.temperature
            )));
        }
        if self.max_tokens == 0 {
            return Err(Error::InvalidConfig(
                "max_tokens must be a positive integer".to_string(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(Error::InvalidConfig("base_url must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Accept `host:port` as Ollama does and strip trailing slashes.
fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

/// `OLLAMA_HOST` without a port means Ollama's default port, except over https.
fn with_default_port(url: String) -> String {
    if url.starts_with("https://") {
        return url;
    }
    let authority = url.trim_start_matches("http://");
    let has_port = authority
        .rsplit_once(':')
        .is_some_and(|(host, port)| {
            !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) && !host.ends_with(':')
        });
    if has_port {
        url
    } else {
        format!("{url}:{DEFAULT_PORT}")
    }
}
