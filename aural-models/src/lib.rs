//! Completion client for aural agents.
//!
//! This crate provides:
//! - Message types shared by every agent conversation
//! - Prompt rendering for single-prompt completion servers
//! - The [`CompletionBackend`] trait agents are driven through
//! - [`OllamaClient`], the HTTP implementation against a local Ollama server
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                  CompletionBackend                    │
//! │   create_completion(CompletionRequest) -> Completion  │
//! └──────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌──────────────────────────────────────────────────────┐
//! │                    OllamaClient                       │
//! │  render_prompt ─► POST /api/generate                  │
//! │  health_check / list_models ─► GET /api/tags          │
//! │  pull_model ─► POST /api/pull                         │
//! └──────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod prompt;

pub mod providers;

pub use config::{
    CompletionConfig, DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};
pub use error::{Error, Result};
pub use prompt::render_prompt;
pub use providers::{
    Completion, CompletionBackend, CompletionRequest, Message, OllamaClient, PullStatus, Role,
    Usage,
};
