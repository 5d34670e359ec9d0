//! Model management commands.
//!
//! Lists, pulls, and health-checks models on the configured Ollama server.

use std::io;

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};

use super::health::{self, model_installed};
use super::prompts::print_success;
use crate::app::App;

/// Models management arguments.
#[derive(Args, Debug)]
pub struct ModelsArgs {
    #[command(subcommand)]
    pub command: ModelsCommands,
}

/// Models subcommands.
#[derive(Subcommand, Debug)]
pub enum ModelsCommands {
    /// List installed models
    List,
    /// Download a model to the server
    Pull {
        /// Model name (e.g. llama3.2, mistral:7b)
        name: String,
    },
    /// Check that the server is reachable and the configured model installed
    Health,
}

/// Run models command.
pub async fn run(args: ModelsArgs, app: &App) -> Result<()> {
    match args.command {
        ModelsCommands::List => list_models(app).await,
        ModelsCommands::Pull { name } => pull_model(app, &name).await,
        ModelsCommands::Health => check_health(app).await,
    }
}

/// List installed models, marking the configured one.
pub async fn list_models(app: &App) -> Result<()> {
    let models = app
        .client
        .list_models()
        .await
        .with_context(|| format!("Failed to list models at {}", app.client.base_url()))?;

    if models.is_empty() {
        println!("No models installed.");
        println!();
        println!("Pull one with: aural models pull {}", app.model());
        return Ok(());
    }

    println!("{}", models_table(&models, app.model()));
    Ok(())
}

fn models_table(models: &[String], configured: &str) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Model").fg(Color::Cyan),
        Cell::new("Default").fg(Color::Cyan),
    ]);

    for model in models {
        let is_default = model_installed(std::slice::from_ref(model), configured);
        table.add_row(vec![
            Cell::new(model),
            Cell::new(if is_default { "✓" } else { "" }),
        ]);
    }
    table
}

async fn pull_model(app: &App, name: &str) -> Result<()> {
    println!("Pulling {name} (this can take a while)...");
    let status = app
        .client
        .pull_model(name)
        .await
        .with_context(|| format!("Failed to pull {name}"))?;

    if !status.is_success() {
        bail!("Pull of {name} finished with status '{}'", status.status);
    }
    print_success(&format!("Pulled {name}"));
    Ok(())
}

pub async fn check_health(app: &App) -> Result<()> {
    let report = health::check(&app.client, app.model()).await;
    report.print_to(&mut io::stdout())?;
    if !report.is_reachable() {
        bail!("Ollama is not reachable at {}", app.client.base_url());
    }
    Ok(())
}
