use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod app;
mod commands;
mod config;

use app::App;

#[derive(Parser)]
#[command(name = "aural", about = "Agent workflows for the Aural design system")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Menu,
    /// Plan, build, audit, and validate a new component
    CreateComponent(commands::component::ComponentArgs),
    /// Audit an existing component for accessibility
    Audit(commands::audit::AuditArgs),
    /// Review the design system and its token usage
    Review(commands::review::ReviewArgs),
    /// Manage Ollama models
    Models(commands::models::ModelsArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Config(args) => commands::config::run(args),
        Commands::Menu => commands::menu::run(&App::load()?).await,
        Commands::CreateComponent(args) => commands::component::run(args, &App::load()?).await,
        Commands::Audit(args) => commands::audit::run(args, &App::load()?).await,
        Commands::Review(args) => commands::review::run(args, &App::load()?).await,
        Commands::Models(args) => commands::models::run(args, &App::load()?).await,
    }
}
