use std::io::Write;

use tracing::instrument;

use super::run::{StageFlow, StageRunner, unavailable};
use super::{Stage, WorkflowKind, WorkflowOutcome};
use crate::agent::{AgentRegistry, WorkflowContext};
use crate::error::WorkflowError;

/// Review the whole design system, then check token usage
#[instrument(skip_all, fields(design_system = %context.design_system_path.display()))]
pub async fn review_design_system<W: Write>(
    registry: &mut AgentRegistry,
    mut context: WorkflowContext,
    out: &mut W,
) -> Result<WorkflowOutcome, WorkflowError> {
    let subject = context.design_system_path.display().to_string();
    let mut run = StageRunner::begin(WorkflowKind::DesignReview, subject, out)?;

    run.start(Stage::Review)?;
    let task = registry
        .orchestrator()
        .ok_or_else(|| unavailable(Stage::Review))?
        .review_design_system(&context)
        .await;
    if run.finish(Stage::Review, task, &mut context)? == StageFlow::Stop {
        return run.conclude(context);
    }

    run.start(Stage::TokenValidation)?;
    let task = registry
        .design_validator()
        .ok_or_else(|| unavailable(Stage::TokenValidation))?
        .validate_tokens(&context)
        .await;
    run.finish(Stage::TokenValidation, task, &mut context)?;

    run.conclude(context)
}
