//! Linear agent workflows
//!
//! A workflow is a fixed sequence of [`Stage`]s. Each stage runs one
//! specialized-agent method and appends its task to the shared
//! [`WorkflowContext`]. A failed mandatory stage ends the run; a failed
//! advisory stage is reported and skipped over.
//!
//! | Workflow                | Stages                                   |
//! |-------------------------|------------------------------------------|
//! | [`create_component`]    | Plan → Build → Audit → Validate          |
//! | [`audit_component`]     | Accessibility review → Fixes             |
//! | [`review_design_system`]| Review → Token validation                |

mod audit;
mod component;
mod review;
mod run;

use serde::{Deserialize, Serialize};

pub use audit::audit_component;
pub use component::create_component;
pub use review::review_design_system;

use crate::agent::{AgentRole, Task, WorkflowContext};

/// Number of result characters echoed to the progress writer per stage.
pub const PREVIEW_CHARS: usize = 200;

/// Which workflow produced an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowKind {
    CreateComponent,
    AccessibilityAudit,
    DesignReview,
}

impl WorkflowKind {
    pub fn title(self) -> &'static str {
        match self {
            WorkflowKind::CreateComponent => "Component Creation",
            WorkflowKind::AccessibilityAudit => "Accessibility Audit",
            WorkflowKind::DesignReview => "Design System Review",
        }
    }

    /// Stages in execution order
    pub fn stages(self) -> &'static [Stage] {
        match self {
            WorkflowKind::CreateComponent => {
                &[Stage::Plan, Stage::Build, Stage::Audit, Stage::Validate]
            }
            WorkflowKind::AccessibilityAudit => &[Stage::AccessibilityReview, Stage::Fixes],
            WorkflowKind::DesignReview => &[Stage::Review, Stage::TokenValidation],
        }
    }
}

/// Whether a stage failure ends the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StagePolicy {
    Mandatory,
    Advisory,
}

/// One step of a workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Plan,
    Build,
    Audit,
    Validate,
    AccessibilityReview,
    Fixes,
    Review,
    TokenValidation,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Plan => "Plan",
            Stage::Build => "Build",
            Stage::Audit => "Audit",
            Stage::Validate => "Validate",
            Stage::AccessibilityReview => "Accessibility review",
            Stage::Fixes => "Fixes",
            Stage::Review => "Review",
            Stage::TokenValidation => "Token validation",
        }
    }

    /// Role whose agent runs this stage
    pub fn role(self) -> AgentRole {
        match self {
            Stage::Plan | Stage::Validate | Stage::Review => AgentRole::Orchestrator,
            Stage::Build => AgentRole::ComponentBuilder,
            Stage::Audit | Stage::AccessibilityReview | Stage::Fixes => {
                AgentRole::AccessibilityAuditor
            }
            Stage::TokenValidation => AgentRole::DesignValidator,
        }
    }

    pub fn policy(self) -> StagePolicy {
        match self {
            Stage::Plan | Stage::Build | Stage::AccessibilityReview | Stage::Review => {
                StagePolicy::Mandatory
            }
            Stage::Audit | Stage::Validate | Stage::Fixes | Stage::TokenValidation => {
                StagePolicy::Advisory
            }
        }
    }

    pub fn is_mandatory(self) -> bool {
        self.policy() == StagePolicy::Mandatory
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A stage together with the task it produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageRecord {
    pub stage: Stage,
    pub task: Task,
}

impl StageRecord {
    pub fn succeeded(&self) -> bool {
        self.task.is_completed()
    }
}

/// Result of running a workflow to completion or to its first mandatory failure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowOutcome {
    pub kind: WorkflowKind,
    /// Component or design-system name the run was about
    pub subject: String,
    pub stages: Vec<StageRecord>,
    /// The mandatory stage that ended the run, if any
    pub failed_stage: Option<Stage>,
    /// Context as it stood when the run ended
    pub context: WorkflowContext,
}

impl WorkflowOutcome {
    /// No mandatory stage failed
    pub fn is_success(&self) -> bool {
        self.failed_stage.is_none()
    }

    /// Advisory stages that failed
    pub fn warnings(&self) -> impl Iterator<Item = &StageRecord> {
        self.stages
            .iter()
            .filter(|r| !r.succeeded() && !r.stage.is_mandatory())
    }

    pub fn record(&self, stage: Stage) -> Option<&StageRecord> {
        self.stages.iter().find(|r| r.stage == stage)
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.stages.iter().map(|r| &r.task)
    }

    /// Whether `stage` ran at all
    pub fn ran(&self, stage: Stage) -> bool {
        self.record(stage).is_some()
    }
}
