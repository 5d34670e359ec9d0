//! Agent configuration types

use serde::{Deserialize, Serialize};

use crate::error::AgentError;

/// Description of a tool an agent may be offered
///
/// Carried on the configuration only; no current flow invokes tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Tool name
    pub name: String,
    /// What the tool does
    pub description: String,
}

/// Immutable per-role agent configuration
///
/// Built once per role at process start and shared through `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    name: String,
    role: String,
    model: String,
    system_prompt: String,
    temperature: f32,
    max_tokens: u32,
    tools: Vec<ToolDescriptor>,
}

impl AgentConfig {
    /// Start building a configuration for the agent called `name`
    pub fn builder(name: impl Into<String>) -> AgentConfigBuilder {
        AgentConfigBuilder::new(name)
    }

    /// Agent name, also its registry key
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable role label
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Model identifier
    pub fn model(&self) -> &str {
        &self.model
    }

    /// System prompt sent ahead of every conversation
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Sampling temperature in `[0, 1]`
    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Output token budget
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// Tool descriptors
    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }
}

/// Builder for [`AgentConfig`]
#[derive(Debug, Clone)]
pub struct AgentConfigBuilder {
    name: String,
    role: Option<String>,
    model: Option<String>,
    system_prompt: String,
    temperature: f32,
    max_tokens: u32,
    tools: Vec<ToolDescriptor>,
}

impl AgentConfigBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: None,
            model: None,
            system_prompt: String::new(),
            temperature: aural_models::DEFAULT_TEMPERATURE,
            max_tokens: aural_models::DEFAULT_MAX_TOKENS,
            tools: Vec::new(),
        }
    }

    /// Set the role label (defaults to the name)
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set the model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the system prompt
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the output token budget
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Add a tool descriptor
    pub fn tool(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.tools.push(ToolDescriptor {
            name: name.into(),
            description: description.into(),
        });
        self
    }

    /// Validate and build
    pub fn build(self) -> Result<AgentConfig, AgentError> {
        if self.name.trim().is_empty() {
            return Err(AgentError::InvalidConfig("name must not be empty".into()));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(AgentError::InvalidConfig(format!(
                "{}: temperature must be within [0, 1], got {}",
                self.name, self.temperature
            )));
        }
        if self.max_tokens == 0 {
            return Err(AgentError::InvalidConfig(format!(
                "{}: max_tokens must be positive",
                self.name
            )));
        }
        let model = self
            .model
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| AgentError::InvalidConfig(format!("{}: model is required", self.name)))?;

        Ok(AgentConfig {
            role: self.role.unwrap_or_else(|| self.name.clone()),
            name: self.name,
            model,
            system_prompt: self.system_prompt,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            tools: self.tools,
        })
    }
}

/// Call-level overrides of an agent's generation parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionOverrides {
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}
