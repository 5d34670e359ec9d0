//! Markdown reports for finished workflows

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

use crate::agent::TaskStatus;
use crate::error::ReportError;
use crate::workflow::{WorkflowKind, WorkflowOutcome};

/// Lowercase, dash-separated form of `name` for file names
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        "component".to_string()
    } else {
        slug
    }
}

/// File name the report of `outcome` is written to
pub fn report_file_name(outcome: &WorkflowOutcome) -> String {
    match outcome.kind {
        WorkflowKind::CreateComponent => {
            format!("component-{}-report.md", slugify(&outcome.subject))
        }
        WorkflowKind::AccessibilityAudit => {
            format!("accessibility-audit-{}.md", slugify(&outcome.subject))
        }
        WorkflowKind::DesignReview => "design-review-report.md".to_string(),
    }
}

/// Render every stage of `outcome` as Markdown
pub fn render_report(outcome: &WorkflowOutcome) -> String {
    let ctx = &outcome.context;
    let mut out = String::new();

    let _ = writeln!(out, "# {} Report: {}\n", outcome.kind.title(), outcome.subject);
    let _ = writeln!(out, "- Generated: {}", Utc::now().to_rfc3339());
    let _ = writeln!(out, "- Project root: `{}`", ctx.project_root.display());
    let _ = writeln!(out, "- Design system: `{}`", ctx.design_system_path.display());
    if let Some(kind) = &ctx.component_type {
        let _ = writeln!(out, "- Component type: {kind}");
    }
    if let Some(requirements) = &ctx.requirements {
        let _ = writeln!(out, "- Requirements: {requirements}");
    }
    if !ctx.existing_files.is_empty() {
        let files: Vec<String> = ctx
            .existing_files
            .iter()
            .map(|f| format!("`{}`", f.display()))
            .collect();
        let _ = writeln!(out, "- Files: {}", files.join(", "));
    }
    let result = match outcome.failed_stage {
        Some(stage) => format!("Stopped at {stage}"),
        None if outcome.warnings().next().is_some() => "Completed with warnings".to_string(),
        None => "Completed".to_string(),
    };
    let _ = writeln!(out, "- Result: {result}");

    out.push_str("\n## Summary\n\n| Stage | Agent | Status |\n|-------|-------|--------|\n");
    for record in &outcome.stages {
        let _ = writeln!(
            out,
            "| {} | {} | {} |",
            record.stage, record.task.agent, record.task.status
        );
    }

    for record in &outcome.stages {
        let task = &record.task;
        let _ = writeln!(out, "\n## {}\n", record.stage);
        let _ = writeln!(out, "- Agent: {}", task.agent);
        let _ = writeln!(out, "- Status: {}", task.status);
        if let Some(done) = task.completed_at {
            let elapsed = done - task.created_at;
            let _ = writeln!(out, "- Duration: {:.1}s", elapsed.num_milliseconds() as f64 / 1000.0);
        }
        out.push('\n');
        match task.status {
            TaskStatus::Completed => {
                let _ = writeln!(out, "{}", task.result.as_deref().unwrap_or_default().trim());
            }
            _ => {
                let _ = writeln!(
                    out,
                    "> Error: {}",
                    task.error.as_deref().unwrap_or("unknown error")
                );
            }
        }
    }

    out
}

/// Write the report of `outcome` into `dir`, returning its path
pub fn write_report(outcome: &WorkflowOutcome, dir: &Path) -> Result<PathBuf, ReportError> {
    let path = dir.join(report_file_name(outcome));
    std::fs::write(&path, render_report(outcome)).map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "report written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{Task, WorkflowContext};
    use crate::workflow::{Stage, StageRecord};

    fn outcome(kind: WorkflowKind, subject: &str) -> WorkflowOutcome {
        let mut plan = Task::new("orchestrator", "Plan");
        plan.start().unwrap();
        plan.complete("1. Tokens\n2. Markup").unwrap();
        let mut build = Task::new("component-builder", "Build");
        build.start().unwrap();
        build.fail("completion server returned status 500: boom").unwrap();

        WorkflowOutcome {
            kind,
            subject: subject.into(),
            stages: vec![
                StageRecord { stage: Stage::Plan, task: plan },
                StageRecord { stage: Stage::Build, task: build },
            ],
            failed_stage: Some(Stage::Build),
            context: WorkflowContext {
                project_root: PathBuf::from("/work"),
                design_system_path: PathBuf::from("/work/design-system"),
                component_name: Some(subject.into()),
                ..WorkflowContext::default()
            },
        }
    }

    #[test]
    fn slugify_normalizes_names() {
        assert_eq!(slugify("Date Picker"), "date-picker");
        assert_eq!(slugify("  Nav/Menu -- Item "), "nav-menu-item");
        assert_eq!(slugify("Button"), "button");
        assert_eq!(slugify("!!!"), "component");
    }

    #[test]
    fn file_names_follow_workflow_kind() {
        assert_eq!(
            report_file_name(&outcome(WorkflowKind::CreateComponent, "Date Picker")),
            "component-date-picker-report.md"
        );
        assert_eq!(
            report_file_name(&outcome(WorkflowKind::AccessibilityAudit, "Modal")),
            "accessibility-audit-modal.md"
        );
        assert_eq!(
            report_file_name(&outcome(WorkflowKind::DesignReview, "anything")),
            "design-review-report.md"
        );
    }

    #[test]
    fn report_lists_every_stage_with_result_or_error() {
        let text = render_report(&outcome(WorkflowKind::CreateComponent, "Button"));

        assert!(text.starts_with("# Component Creation Report: Button"));
        assert!(text.contains("- Result: Stopped at Build"));
        assert!(text.contains("| Plan | orchestrator | completed |"));
        assert!(text.contains("| Build | component-builder | failed |"));
        assert!(text.contains("1. Tokens\n2. Markup"));
        assert!(text.contains("> Error: completion server returned status 500: boom"));
    }

    #[test]
    fn write_report_creates_file_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_report(&outcome(WorkflowKind::CreateComponent, "Button"), dir.path()).unwrap();

        assert_eq!(path, dir.path().join("component-button-report.md"));
        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("## Build"));
    }

    #[test]
    fn write_report_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = write_report(&outcome(WorkflowKind::DesignReview, "ds"), &missing).unwrap_err();
        assert!(err.to_string().contains("design-review-report.md"));
    }
}
