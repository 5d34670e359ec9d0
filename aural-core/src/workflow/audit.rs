use std::io::Write;

use tracing::instrument;

use super::run::{StageFlow, StageRunner, unavailable};
use super::{Stage, WorkflowKind, WorkflowOutcome};
use crate::agent::{AgentRegistry, WorkflowContext};
use crate::error::WorkflowError;

/// Audit an existing component and propose fixes
///
/// Needs the component name and at least one file to audit. Fix
/// suggestions are advisory.
#[instrument(skip_all, fields(component = context.component_name.as_deref().unwrap_or_default()))]
pub async fn audit_component<W: Write>(
    registry: &mut AgentRegistry,
    mut context: WorkflowContext,
    out: &mut W,
) -> Result<WorkflowOutcome, WorkflowError> {
    let name = context
        .component_name
        .clone()
        .filter(|n| !n.trim().is_empty())
        .ok_or(WorkflowError::MissingInput("component name"))?;
    if context.existing_files.is_empty() {
        return Err(WorkflowError::MissingInput("component files"));
    }
    let mut run = StageRunner::begin(WorkflowKind::AccessibilityAudit, name, out)?;

    run.start(Stage::AccessibilityReview)?;
    let task = registry
        .accessibility_auditor()
        .ok_or_else(|| unavailable(Stage::AccessibilityReview))?
        .audit_component(&context)
        .await;
    if run.finish(Stage::AccessibilityReview, task, &mut context)? == StageFlow::Stop {
        return run.conclude(context);
    }

    run.start(Stage::Fixes)?;
    let task = registry
        .accessibility_auditor()
        .ok_or_else(|| unavailable(Stage::Fixes))?
        .suggest_fixes(&context)
        .await;
    run.finish(Stage::Fixes, task, &mut context)?;

    run.conclude(context)
}
