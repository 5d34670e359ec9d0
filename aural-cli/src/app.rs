//! Process-wide state built once in `main` and handed to commands.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use aural_core::{AgentDefaults, AgentRegistry};
use aural_models::OllamaClient;
use tracing::debug;

use crate::config::{AuralConfig, ConfigLoader};

pub struct App {
    pub config: AuralConfig,
    pub client: Arc<OllamaClient>,
}

impl App {
    /// Load configuration and build the shared client
    pub fn load() -> Result<Self> {
        let config = ConfigLoader::load().context("Failed to load configuration")?;
        Ok(Self::new(config))
    }

    pub fn new(config: AuralConfig) -> Self {
        debug!(base_url = %config.ollama.base_url, model = %config.ollama.model, "client configured");
        let client = Arc::new(OllamaClient::new(config.ollama.clone()));
        Self { config, client }
    }

    /// Build one agent per wired role against the shared client
    pub fn registry(&self) -> Result<AgentRegistry> {
        let defaults = AgentDefaults {
            model: Some(self.config.ollama.model.clone()),
            design_system_path: self.config.workflow.design_system_path.clone(),
        };
        let registry = AgentRegistry::new(self.client.clone(), defaults)?;
        Ok(registry)
    }

    pub fn model(&self) -> &str {
        &self.config.ollama.model
    }

    pub fn report_dir(&self) -> &Path {
        &self.config.workflow.report_dir
    }
}
