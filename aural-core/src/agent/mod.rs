//! Agent system for aural
//!
//! This module provides the pieces a workflow drives:
//! - [`Agent`] with its conversation history and task execution
//! - Role definitions and the specialized wrappers in [`roles`]
//! - [`AgentRegistry`] holding one agent per wired role
//! - [`Task`] records and the [`WorkflowContext`] passed between stages

mod base;
pub mod context;
pub mod registry;
pub mod roles;
pub mod summary;
pub mod task;
pub mod types;

pub use base::Agent;
pub use context::{ContextOverrides, WorkflowContext};
pub use registry::{AgentDefaults, AgentRegistry, DEFAULT_DESIGN_SYSTEM_PATH};
pub use roles::{
    AccessibilityAuditor, AgentRole, ComponentBuilder, DesignValidator, Orchestrator,
};
pub use summary::{ContextSummarizer, DEFAULT_SUMMARY_CHARS, TruncatingSummarizer, truncate_chars};
pub use task::{Task, TaskId, TaskStatus};
pub use types::{AgentConfig, AgentConfigBuilder, CompletionOverrides, ToolDescriptor};
