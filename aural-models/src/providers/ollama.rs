//! Ollama completion client.
//!
//! Ollama's `/api/generate` endpoint takes a single prompt, so the
//! conversation is flattened with [`render_prompt`](crate::render_prompt)
//! before sending.
//!
//! # Example
//!
//! ```ignore
//! use aural_models::{CompletionConfig, OllamaClient};
//!
//! let client = OllamaClient::new(CompletionConfig::default()); // localhost:11434
//! let client = OllamaClient::with_base_url("http://192.168.1.100:11434");
//! ```

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::{Completion, CompletionBackend, CompletionRequest, Message, PullStatus};
use crate::{CompletionConfig, Error, Result, render_prompt};

/// Timeout for health checks against `/api/tags`.
const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(2);

// ────────────────────────────────────────────────────────────────────────────
// Ollama API Types
// ────────────────────────────────────────────────────────────────────────────

/// Request body for Ollama's `/api/generate` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub options: GenerateOptions,
}

/// Generation options for `/api/generate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateOptions {
    pub temperature: f32,
    pub num_predict: u32,
}

/// Response from Ollama's `/api/generate` endpoint.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub model: String,
    #[serde(default)]
    pub created_at: Option<String>,
    pub response: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub total_duration: Option<u64>,
    #[serde(default)]
    pub load_duration: Option<u64>,
    #[serde(default)]
    pub prompt_eval_count: Option<u64>,
    #[serde(default)]
    pub prompt_eval_duration: Option<u64>,
    #[serde(default)]
    pub eval_count: Option<u64>,
    #[serde(default)]
    pub eval_duration: Option<u64>,
}

impl From<GenerateResponse> for Completion {
    fn from(response: GenerateResponse) -> Self {
        Self {
            model: response.model,
            created_at: response.created_at,
            message: Message::assistant(response.response),
            done: response.done,
            total_duration: response.total_duration,
            load_duration: response.load_duration,
            prompt_eval_count: response.prompt_eval_count,
            prompt_eval_duration: response.prompt_eval_duration,
            eval_count: response.eval_count,
            eval_duration: response.eval_duration,
        }
    }
}

/// Response from Ollama's `/api/tags` endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<TagsModel>,
}

/// Model entry from `/api/tags`. Only the name is used.
#[derive(Debug, Deserialize)]
pub struct TagsModel {
    pub name: String,
}

/// Request body for Ollama's `/api/pull` endpoint.
#[derive(Debug, Serialize)]
struct PullRequest<'a> {
    name: &'a str,
    stream: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// OllamaClient
// ────────────────────────────────────────────────────────────────────────────

/// HTTP client for a local Ollama server.
///
/// One instance is built per process and shared by every agent.
pub struct OllamaClient {
    config: CompletionConfig,
    client: reqwest::Client,
}

impl OllamaClient {
    /// Create a client with the given connection settings and defaults.
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client for a custom base URL with default generation settings.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(CompletionConfig {
            base_url: base_url.into(),
            ..CompletionConfig::default()
        })
    }

    /// Get the base URL for this client.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the connection settings and defaults.
    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Build the `/api/generate` body, applying configured defaults.
    pub fn generate_request(&self, request: &CompletionRequest) -> GenerateRequest {
        GenerateRequest {
            model: request
                .model
                .clone()
                .unwrap_or_else(|| self.config.model.clone()),
            prompt: render_prompt(&request.messages),
            stream: false,
            options: GenerateOptions {
                temperature: request.temperature.unwrap_or(self.config.temperature),
                num_predict: request.max_tokens.unwrap_or(self.config.max_tokens),
            },
        }
    }

    /// Perform one completion round-trip.
    #[instrument(name = "ollama::generate", skip(self, request), fields(messages = request.messages.len()))]
    pub async fn create_completion(&self, request: CompletionRequest) -> Result<Completion> {
        let body = self.generate_request(&request);
        debug!(model = %body.model, prompt_chars = body.prompt.len(), "sending completion request");

        let response = self
            .client
            .post(self.endpoint("/api/generate"))
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;
        let response = ensure_success(response).await?;

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::Decode(e.to_string()))?;

        debug!(
            model = %generated.model,
            eval_count = generated.eval_count.unwrap_or(0),
            "completion received"
        );
        Ok(generated.into())
    }

    /// Whether the server answers `/api/tags` successfully.
    ///
    /// Network failures are reported as unhealthy, never as errors.
    pub async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.endpoint("/api/tags"))
            .timeout(HEALTH_CHECK_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(error = %e, base_url = %self.config.base_url, "health check failed");
                false
            }
        }
    }

    /// Names of the models installed on the server.
    pub async fn list_models(&self) -> Result<Vec<String>> {
        let response = self
            .client
            .get(self.endpoint("/api/tags"))
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;
        let response = ensure_success(response).await?;

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| Error::Decode(e.to_string()))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    /// Ask the server to download a model. Blocks until the pull finishes.
    #[instrument(name = "ollama::pull", skip(self))]
    pub async fn pull_model(&self, name: &str) -> Result<PullStatus> {
        let response = self
            .client
            .post(self.endpoint("/api/pull"))
            .json(&PullRequest {
                name,
                stream: false,
            })
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;
        let response = ensure_success(response).await?;

        response
            .json()
            .await
            .map_err(|e| Error::Decode(e.to_string()))
    }
}

/// Turn a non-success status into `Error::Completion` carrying the body.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().path().to_string();
    let body = response.text().await.unwrap_or_default();
    warn!(status = status.as_u16(), path = %url, "ollama request failed");
    Err(Error::Completion {
        status: status.as_u16(),
        body,
    })
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new(CompletionConfig::default())
    }
}

#[async_trait]
impl CompletionBackend for OllamaClient {
    fn name(&self) -> &str {
        "ollama"
    }

    fn default_model(&self) -> &str {
        &self.config.model
    }

    async fn create_completion(&self, request: CompletionRequest) -> Result<Completion> {
        OllamaClient::create_completion(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_client_targets_localhost() {
        let client = OllamaClient::default();
        assert_eq!(client.base_url(), "http://localhost:11434");
    }

    #[test]
    fn with_base_url_keeps_default_generation_settings() {
        let client = OllamaClient::with_base_url("http://192.168.1.100:11434");
        assert_eq!(client.base_url(), "http://192.168.1.100:11434");
        assert_eq!(client.config().model, crate::DEFAULT_MODEL);
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let client = OllamaClient::with_base_url("http://localhost:11434/");
        assert_eq!(
            client.endpoint("/api/tags"),
            "http://localhost:11434/api/tags"
        );
    }

    // ────────────────────────────────────────────────────────────────────────────
    // Request Building Tests
    // ────────────────────────────────────────────────────────────────────────────

    #[test]
    fn generate_request_falls_back_to_config_defaults() {
        let client = OllamaClient::new(CompletionConfig {
            base_url: "http://localhost:11434".to_string(),
            model: "llama3.2".to_string(),
            temperature: 0.4,
            max_tokens: 900,
        });

        let body = client.generate_request(&CompletionRequest::new(vec![Message::user("hi")]));

        assert_eq!(body.model, "llama3.2");
        assert_eq!(body.options.temperature, 0.4);
        assert_eq!(body.options.num_predict, 900);
        assert!(!body.stream);
        assert_eq!(body.prompt, "User: hi");
    }

    #[test]
    fn generate_request_prefers_request_overrides() {
        let client = OllamaClient::default();
        let request = CompletionRequest::new(vec![Message::user("hi")])
            .model("codellama")
            .temperature(0.1)
            .max_tokens(64);

        let body = client.generate_request(&request);

        assert_eq!(body.model, "codellama");
        assert_eq!(body.options.temperature, 0.1);
        assert_eq!(body.options.num_predict, 64);
    }

    #[test]
    fn generate_request_serializes_wire_shape() {
        let client = OllamaClient::default();
        let body = client.generate_request(
            &CompletionRequest::new(vec![Message::system("sys"), Message::user("hi")])
                .model("llama3.2")
                .temperature(0.5)
                .max_tokens(10),
        );

        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["model"], "llama3.2");
        assert_eq!(json["prompt"], "System: sys\n\nUser: hi");
        assert_eq!(json["stream"], false);
        assert_eq!(json["options"]["temperature"], 0.5);
        assert_eq!(json["options"]["num_predict"], 10);
    }

    // ────────────────────────────────────────────────────────────────────────────
    // Response Parsing Tests
    // ────────────────────────────────────────────────────────────────────────────

    #[test]
    fn parse_generate_response_extracts_text_and_counters() {
        let json = r#"{
            "model": "llama3.2",
            "created_at": "2024-01-15T10:00:00Z",
            "response": "Use a native <button>.",
            "done": true,
            "context": [1, 2, 3],
            "total_duration": 1234567890,
            "load_duration": 123456789,
            "prompt_eval_count": 10,
            "prompt_eval_duration": 12345678,
            "eval_count": 15,
            "eval_duration": 23456789
        }"#;

        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        let completion: Completion = response.into();

        assert_eq!(completion.content(), "Use a native <button>.");
        assert_eq!(completion.message.role, crate::Role::Assistant);
        assert_eq!(completion.created_at.as_deref(), Some("2024-01-15T10:00:00Z"));
        assert!(completion.done);
        assert_eq!(completion.total_duration, Some(1234567890));
        assert_eq!(completion.usage().input_tokens, 10);
        assert_eq!(completion.usage().output_tokens, 15);
    }

    #[test]
    fn parse_generate_response_tolerates_missing_counters() {
        let json = r#"{"model": "llama3.2", "response": "ok"}"#;

        let completion: Completion = serde_json::from_str::<GenerateResponse>(json)
            .unwrap()
            .into();

        assert_eq!(completion.content(), "ok");
        assert!(!completion.done);
        assert!(completion.eval_count.is_none());
        assert!(completion.created_at.is_none());
    }

    #[test]
    fn parse_tags_response_extracts_names() {
        let json = r#"{
            "models": [
                {"name": "llama3.2:latest", "size": 4661224676, "digest": "abc123"},
                {"name": "mistral:7b", "modified_at": "2024-01-14T10:00:00Z"}
            ]
        }"#;

        let tags: TagsResponse = serde_json::from_str(json).unwrap();
        let names: Vec<_> = tags.models.into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["llama3.2:latest", "mistral:7b"]);
    }

    #[test]
    fn parse_tags_response_without_models_is_empty() {
        let tags: TagsResponse = serde_json::from_str("{}").unwrap();
        assert!(tags.models.is_empty());
    }

    // ────────────────────────────────────────────────────────────────────────────
    // Integration Tests (require Ollama running)
    // ────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    #[ignore = "requires Ollama running locally with a model installed"]
    async fn integration_completion_against_local_ollama() {
        let config = CompletionConfig::from_env().expect("valid OLLAMA_* environment");
        let client = OllamaClient::new(config);

        if !client.health_check().await {
            eprintln!("Skipping: Ollama not available at {}", client.base_url());
            return;
        }

        let completion = client
            .create_completion(CompletionRequest::new(vec![Message::user(
                "Say 'hello' and nothing else.",
            )]))
            .await
            .expect("completion should succeed");

        println!("Response: {}", completion.content());
        assert!(!completion.content().is_empty());
    }
}
