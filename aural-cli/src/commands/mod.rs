pub mod audit;
pub mod component;
pub mod config;
pub mod health;
pub mod menu;
pub mod models;
pub mod prompts;
pub mod review;

use anyhow::{Result, bail};
use aural_core::WorkflowOutcome;
use aural_core::report::write_report;

use crate::app::App;
use prompts::{print_error, print_success};

/// Write the workflow report; a run stopped by a mandatory stage exits non-zero.
fn conclude(app: &App, outcome: &WorkflowOutcome) -> Result<()> {
    let path = write_report(outcome, app.report_dir())?;

    match outcome.failed_stage {
        Some(stage) => {
            print_error(&format!("Report written to {}", path.display()));
            bail!("{} stopped at {stage}", outcome.kind.title())
        }
        None => {
            print_success(&format!("Report written to {}", path.display()));
            Ok(())
        }
    }
}
