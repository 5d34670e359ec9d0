//! `aural audit`

use std::io;
use std::path::PathBuf;

use anyhow::{Result, bail};
use aural_core::ContextOverrides;
use aural_core::workflow::audit_component;
use clap::Args;

use super::prompts::{ask_required, print_header, print_warning};
use super::{conclude, health};
use crate::app::App;

#[derive(Args, Debug, Default)]
pub struct AuditArgs {
    /// Component name
    pub name: Option<String>,

    /// Component files to audit
    #[arg(long = "file", short = 'f')]
    pub files: Vec<PathBuf>,
}

pub async fn run(args: AuditArgs, app: &App) -> Result<()> {
    print_header("Accessibility Audit");
    health::ensure_ready(&app.client, app.model()).await?;

    let name = match args.name {
        Some(name) => name,
        None => ask_required("Component name")?,
    };
    let files = if args.files.is_empty() {
        parse_file_list(&ask_required("Component files (comma-separated)")?)
    } else {
        args.files
    };
    if files.is_empty() {
        bail!("No component files given");
    }
    for file in files.iter().filter(|f| !f.exists()) {
        print_warning(&format!("{} does not exist", file.display()));
    }

    let mut registry = app.registry()?;
    let context = registry.create_context(
        ContextOverrides::default()
            .component(name)
            .existing_files(files),
    );

    let outcome = audit_component(&mut registry, context, &mut io::stdout()).await?;
    conclude(app, &outcome)
}

/// Split a comma-separated list of paths, ignoring blanks.
fn parse_file_list(input: &str) -> Vec<PathBuf> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}
