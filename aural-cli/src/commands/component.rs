//! `aural create-component`

use std::io;

use anyhow::Result;
use aural_core::ContextOverrides;
use aural_core::workflow::create_component;
use clap::Args;

use super::prompts::{ask_optional, ask_required, choose, print_header};
use super::{conclude, health};
use crate::app::App;

/// Component kinds offered when none is given.
const COMPONENT_TYPES: &[&str] = &[
    "button",
    "input",
    "card",
    "modal",
    "navigation",
    "layout",
    "feedback",
    "other",
];

#[derive(Args, Debug, Default)]
pub struct ComponentArgs {
    /// Component name (e.g. "Date Picker")
    pub name: Option<String>,

    /// Component type (button, input, card, modal, ...)
    #[arg(long = "type", short = 't')]
    pub kind: Option<String>,

    /// Extra requirements passed to every agent
    #[arg(long, short)]
    pub requirements: Option<String>,
}

pub async fn run(args: ComponentArgs, app: &App) -> Result<()> {
    print_header("Create Component");
    health::ensure_ready(&app.client, app.model()).await?;

    let name = match args.name {
        Some(name) => name,
        None => ask_required("Component name")?,
    };
    let kind = match args.kind {
        Some(kind) => kind,
        None => COMPONENT_TYPES[choose("Component type", COMPONENT_TYPES)?].to_string(),
    };
    let requirements = match args.requirements {
        Some(requirements) => Some(requirements),
        None => ask_optional("Requirements (optional)")?,
    };

    let mut registry = app.registry()?;
    let mut overrides = ContextOverrides::default().component(name).component_type(kind);
    if let Some(requirements) = requirements {
        overrides = overrides.requirements(requirements);
    }
    let context = registry.create_context(overrides);

    let outcome = create_component(&mut registry, context, &mut io::stdout()).await?;
    conclude(app, &outcome)
}
