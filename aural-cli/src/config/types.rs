use std::path::PathBuf;

use aural_core::agent::DEFAULT_DESIGN_SYSTEM_PATH;
use aural_models::CompletionConfig;
use serde::{Deserialize, Serialize};

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct RawAuralConfig {
    #[serde(default)]
    pub ollama: RawOllamaConfig,

    #[serde(default)]
    pub workflow: RawWorkflowConfig,
}

/// Ollama section as stored in TOML
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct RawOllamaConfig {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// Workflow section as stored in TOML
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct RawWorkflowConfig {
    pub design_system_path: Option<PathBuf>,
    pub report_dir: Option<PathBuf>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AuralConfig {
    #[serde(default)]
    pub ollama: CompletionConfig,

    #[serde(default)]
    pub workflow: WorkflowConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkflowConfig {
    /// Design-system directory, relative to the project root
    pub design_system_path: PathBuf,

    /// Directory workflow reports are written to
    pub report_dir: PathBuf,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            design_system_path: PathBuf::from(DEFAULT_DESIGN_SYSTEM_PATH),
            report_dir: PathBuf::from("."),
        }
    }
}
