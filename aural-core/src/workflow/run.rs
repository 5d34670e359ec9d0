//! Stage bookkeeping shared by every workflow

use std::io::Write;

use tracing::{info, warn};

use super::{Stage, StageRecord, WorkflowKind, WorkflowOutcome, PREVIEW_CHARS};
use crate::agent::{Task, WorkflowContext, truncate_chars};
use crate::error::WorkflowError;

/// Whether the workflow proceeds after a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StageFlow {
    Continue,
    Stop,
}

/// Records stage tasks and writes progress lines
pub(crate) struct StageRunner<'w, W: Write> {
    kind: WorkflowKind,
    subject: String,
    out: &'w mut W,
    records: Vec<StageRecord>,
    failed_stage: Option<Stage>,
}

impl<'w, W: Write> StageRunner<'w, W> {
    pub(crate) fn begin(
        kind: WorkflowKind,
        subject: impl Into<String>,
        out: &'w mut W,
    ) -> Result<Self, WorkflowError> {
        let subject = subject.into();
        writeln!(out, "{}: {subject}", kind.title())?;
        info!(workflow = ?kind, subject = %subject, "workflow started");
        Ok(Self {
            kind,
            subject,
            out,
            records: Vec::new(),
            failed_stage: None,
        })
    }

    /// Announce `stage` before its agent runs
    pub(crate) fn start(&mut self, stage: Stage) -> Result<(), WorkflowError> {
        let stages = self.kind.stages();
        let position = stages.iter().position(|s| *s == stage).map_or(0, |i| i + 1);
        writeln!(
            self.out,
            "\n[{position}/{}] {stage} ({})...",
            stages.len(),
            stage.role().label()
        )?;
        Ok(())
    }

    /// Record the task of `stage` and decide whether to go on
    pub(crate) fn finish(
        &mut self,
        stage: Stage,
        task: Task,
        context: &mut WorkflowContext,
    ) -> Result<StageFlow, WorkflowError> {
        let flow = if let Some(result) = task.result.as_deref().filter(|_| task.is_completed()) {
            info!(stage = %stage, task_id = %task.id, "stage completed");
            writeln!(self.out, "✓ {stage} complete")?;
            for line in truncate_chars(result.trim(), PREVIEW_CHARS).lines() {
                writeln!(self.out, "  {line}")?;
            }
            StageFlow::Continue
        } else {
            let error = task.error.as_deref().unwrap_or("unknown error");
            if stage.is_mandatory() {
                warn!(stage = %stage, task_id = %task.id, error, "mandatory stage failed");
                writeln!(self.out, "✗ {stage} failed: {error}")?;
                self.failed_stage = Some(stage);
                StageFlow::Stop
            } else {
                warn!(stage = %stage, task_id = %task.id, error, "advisory stage failed");
                writeln!(self.out, "⚠ {stage} failed: {error} (continuing)")?;
                StageFlow::Continue
            }
        };

        context.push_task(task.clone());
        self.records.push(StageRecord { stage, task });
        Ok(flow)
    }

    /// Close the run and hand back its outcome
    pub(crate) fn conclude(self, context: WorkflowContext) -> Result<WorkflowOutcome, WorkflowError> {
        let title = self.kind.title();
        match self.failed_stage {
            Some(stage) => writeln!(self.out, "\n✗ {title} stopped at {stage}")?,
            None => {
                let warnings = self.records.iter().filter(|r| !r.succeeded()).count();
                if warnings == 0 {
                    writeln!(self.out, "\n✓ {title} finished")?;
                } else {
                    writeln!(self.out, "\n✓ {title} finished with {warnings} warning(s)")?;
                }
            }
        }
        info!(workflow = ?self.kind, failed_stage = ?self.failed_stage, "workflow finished");

        Ok(WorkflowOutcome {
            kind: self.kind,
            subject: self.subject,
            stages: self.records,
            failed_stage: self.failed_stage,
            context,
        })
    }
}

/// Error for a stage whose role has no agent
pub(crate) fn unavailable(stage: Stage) -> WorkflowError {
    WorkflowError::AgentUnavailable(stage.role().name().to_string())
}
