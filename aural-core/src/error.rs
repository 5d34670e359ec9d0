//! Error types for aural-core

use std::path::PathBuf;

use thiserror::Error;

use crate::agent::TaskStatus;

/// Top-level error type for aural-core
#[derive(Error, Debug)]
pub enum AuralError {
    #[error("Model error: {0}")]
    Model(#[from] aural_models::Error),

    #[error("Agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("Task error: {0}")]
    Task(#[from] TaskError),

    #[error("Workflow error: {0}")]
    Workflow(#[from] WorkflowError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors building or looking up agents
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Invalid agent configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown agent role: {0}")]
    UnknownRole(String),
}

/// Rejected task status changes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("Invalid task transition from {from} to {to}")]
    InvalidTransition { from: TaskStatus, to: TaskStatus },
}

/// Errors that abort a workflow before or between stages
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Agent not available: {0}")]
    AgentUnavailable(String),

    #[error("Missing workflow input: {0}")]
    MissingInput(&'static str),

    #[error("Failed to write progress output: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors writing workflow reports
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors loading layered configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Invalid(#[from] aural_models::Error),
}

/// Result type alias for aural-core operations
pub type Result<T> = std::result::Result<T, AuralError>;
