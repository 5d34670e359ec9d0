//! `aural review`

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use aural_core::ContextOverrides;
use aural_core::workflow::review_design_system;
use clap::Args;

use super::prompts::{print_header, print_warning};
use super::{conclude, health};
use crate::app::App;

#[derive(Args, Debug, Default)]
pub struct ReviewArgs {
    /// Design-system directory (defaults to the configured path)
    #[arg(long)]
    pub design_system: Option<PathBuf>,
}

pub async fn run(args: ReviewArgs, app: &App) -> Result<()> {
    print_header("Design System Review");
    health::ensure_ready(&app.client, app.model()).await?;

    let mut registry = app.registry()?;
    let mut overrides = ContextOverrides::default();
    if let Some(path) = args.design_system {
        overrides = overrides.design_system_path(path);
    }
    let context = registry.create_context(overrides);
    if !context.design_system_path.is_dir() {
        print_warning(&format!(
            "{} is not a directory; reviewing without local files",
            context.design_system_path.display()
        ));
    }

    let outcome = review_design_system(&mut registry, context, &mut io::stdout()).await?;
    conclude(app, &outcome)
}
