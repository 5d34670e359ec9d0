//! Workflow context shared across stages
//!
//! The context carries project configuration and the tasks completed so far.
//! Agents render it into the user turn they send.

use std::fmt::Write as _;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::summary::ContextSummarizer;
use super::task::Task;

/// Configuration and prior results passed through a workflow
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowContext {
    pub project_root: PathBuf,
    pub design_system_path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(default)]
    pub existing_files: Vec<PathBuf>,
    /// Tasks of earlier stages, in execution order
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl WorkflowContext {
    /// Record a finished stage's task
    pub fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Completed tasks, in execution order
    pub fn completed_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.is_completed())
    }

    /// Component name, or a generic placeholder
    pub fn component_label(&self) -> &str {
        self.component_name.as_deref().unwrap_or("component")
    }

    /// Render the task description followed by this context
    pub fn render_user_turn(&self, description: &str, summarizer: &dyn ContextSummarizer) -> String {
        let mut out = String::new();
        out.push_str(description.trim_end());
        out.push_str("\n\nContext:\n");

        let _ = writeln!(out, "- Project root: {}", self.project_root.display());
        let _ = writeln!(
            out,
            "- Design system: {}",
            self.design_system_path.display()
        );
        if let Some(name) = &self.component_name {
            let _ = writeln!(out, "- Component: {name}");
        }
        if let Some(kind) = &self.component_type {
            let _ = writeln!(out, "- Component type: {kind}");
        }
        if let Some(requirements) = &self.requirements {
            let _ = writeln!(out, "- Requirements: {requirements}");
        }
        if !self.existing_files.is_empty() {
            out.push_str("- Existing files:\n");
            for file in &self.existing_files {
                let _ = writeln!(out, "  - {}", file.display());
            }
        }

        let mut prior = self
            .completed_tasks()
            .filter_map(|t| t.result.as_deref().map(|r| (t, r)))
            .peekable();
        if prior.peek().is_some() {
            out.push_str("\nPrevious results:\n");
            for (task, result) in prior {
                let _ = writeln!(out, "\n[{}]\n{}", task.agent, summarizer.summarize(task, result));
            }
        }

        out.trim_end().to_string()
    }
}

/// Caller-supplied fields layered over a default context
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextOverrides {
    pub project_root: Option<PathBuf>,
    pub design_system_path: Option<PathBuf>,
    pub component_name: Option<String>,
    pub component_type: Option<String>,
    pub requirements: Option<String>,
    pub existing_files: Option<Vec<PathBuf>>,
}

impl ContextOverrides {
    pub fn component(mut self, name: impl Into<String>) -> Self {
        self.component_name = Some(name.into());
        self
    }

    pub fn component_type(mut self, kind: impl Into<String>) -> Self {
        self.component_type = Some(kind.into());
        self
    }

    pub fn requirements(mut self, requirements: impl Into<String>) -> Self {
        self.requirements = Some(requirements.into());
        self
    }

    pub fn existing_files(mut self, files: Vec<PathBuf>) -> Self {
        self.existing_files = Some(files);
        self
    }

    pub fn project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    pub fn design_system_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.design_system_path = Some(path.into());
        self
    }
}
