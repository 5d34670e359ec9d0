//! aural-core: Agent orchestration for the Aural design-system tooling
//!
//! This crate drives role-bound agents against a completion backend:
//!
//! - **Agents** - [`Agent`] keeps a conversation history and turns a task
//!   description plus [`WorkflowContext`] into a [`Task`] record
//! - **Registry** - [`AgentRegistry`] holds one agent per wired [`AgentRole`]
//! - **Workflows** - [`workflow`] runs fixed stage sequences such as
//!   Plan → Build → Audit → Validate
//! - **Reports** - [`report`] renders a finished workflow as Markdown
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use aural_core::{AgentDefaults, AgentRegistry, ContextOverrides, workflow};
//! use aural_models::OllamaClient;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = Arc::new(OllamaClient::default());
//!     let mut registry = AgentRegistry::new(backend, AgentDefaults::default())?;
//!
//!     let context = registry.create_context(ContextOverrides::default().component("Button"));
//!     let outcome =
//!         workflow::create_component(&mut registry, context, &mut std::io::stdout()).await?;
//!     aural_core::report::write_report(&outcome, std::path::Path::new("."))?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 AgentRegistry                 │
//! │  ┌────────────┐ ┌────────────┐ ┌──────────┐  │
//! │  │Orchestrator│ │  Builder   │ │ Auditor  │… │
//! │  └─────┬──────┘ └─────┬──────┘ └────┬─────┘  │
//! └────────┼──────────────┼─────────────┼────────┘
//!          └──────────────┼─────────────┘
//!                ┌────────▼─────────┐
//!                │CompletionBackend │ (OllamaClient)
//!                └──────────────────┘
//! ```

pub mod agent;
pub mod error;
pub mod mock;
pub mod report;
pub mod workflow;

// Re-export key types for convenience
pub use agent::{
    AccessibilityAuditor, Agent, AgentConfig, AgentDefaults, AgentRegistry, AgentRole,
    ComponentBuilder, CompletionOverrides, ContextOverrides, ContextSummarizer, DesignValidator,
    Orchestrator, Task, TaskId, TaskStatus, TruncatingSummarizer, WorkflowContext,
};
pub use error::{
    AgentError, AuralError, ConfigError, ReportError, Result, TaskError, WorkflowError,
};
pub use mock::MockBackend;
pub use workflow::{Stage, StagePolicy, StageRecord, WorkflowKind, WorkflowOutcome};
