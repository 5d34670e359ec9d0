use std::io::Write;

use tracing::instrument;

use super::run::{StageFlow, StageRunner, unavailable};
use super::{Stage, WorkflowKind, WorkflowOutcome};
use crate::agent::{AgentRegistry, WorkflowContext};
use crate::error::WorkflowError;

/// Plan, build, audit, and validate a new component
///
/// `context.component_name` is required. Plan and Build failures end the
/// run; Audit and Validate failures are reported and the run continues.
#[instrument(skip_all, fields(component = context.component_name.as_deref().unwrap_or_default()))]
pub async fn create_component<W: Write>(
    registry: &mut AgentRegistry,
    mut context: WorkflowContext,
    out: &mut W,
) -> Result<WorkflowOutcome, WorkflowError> {
    let name = context
        .component_name
        .clone()
        .filter(|n| !n.trim().is_empty())
        .ok_or(WorkflowError::MissingInput("component name"))?;
    let mut run = StageRunner::begin(WorkflowKind::CreateComponent, name, out)?;

    run.start(Stage::Plan)?;
    let task = registry
        .orchestrator()
        .ok_or_else(|| unavailable(Stage::Plan))?
        .plan_component(&context)
        .await;
    if run.finish(Stage::Plan, task, &mut context)? == StageFlow::Stop {
        return run.conclude(context);
    }

    run.start(Stage::Build)?;
    let task = registry
        .component_builder()
        .ok_or_else(|| unavailable(Stage::Build))?
        .build_component(&context)
        .await;
    if run.finish(Stage::Build, task, &mut context)? == StageFlow::Stop {
        return run.conclude(context);
    }

    run.start(Stage::Audit)?;
    let task = registry
        .accessibility_auditor()
        .ok_or_else(|| unavailable(Stage::Audit))?
        .audit_component(&context)
        .await;
    run.finish(Stage::Audit, task, &mut context)?;

    run.start(Stage::Validate)?;
    let task = registry
        .orchestrator()
        .ok_or_else(|| unavailable(Stage::Validate))?
        .validate_component(&context)
        .await;
    run.finish(Stage::Validate, task, &mut context)?;

    run.conclude(context)
}
