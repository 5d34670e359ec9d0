//! Connectivity checks run before a workflow starts.

use std::io::{self, Write};

use anyhow::{Result, bail};
use aural_models::OllamaClient;
use dialoguer::console::style;
use tracing::{debug, warn};

use super::prompts::{print_error_to, print_success_to, print_warning_to};

/// Result of checking the completion server.
#[derive(Debug, Clone, PartialEq)]
pub enum HealthReport {
    /// Server reachable and the model is installed.
    Ready { base_url: String, model: String },
    /// Server reachable but the configured model is not installed.
    ModelMissing {
        model: String,
        installed: Vec<String>,
    },
    /// Server could not be reached.
    Unreachable { base_url: String },
}

impl HealthReport {
    pub fn is_reachable(&self) -> bool {
        !matches!(self, Self::Unreachable { .. })
    }

    /// Print the result with remediation hints.
    pub fn print_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        match self {
            Self::Ready { base_url, model } => {
                print_success_to(w, &format!("Ollama is running at {base_url}"))?;
                writeln!(w, "  Using model: {}", style(model).cyan())?;
            }
            Self::ModelMissing { model, installed } => {
                print_warning_to(w, &format!("Model '{model}' is not installed"))?;
                writeln!(w, "  Pull it with: ollama pull {model}")?;
                writeln!(w, "            or: aural models pull {model}")?;
                if !installed.is_empty() {
                    writeln!(w, "  Installed models: {}", installed.join(", "))?;
                }
            }
            Self::Unreachable { base_url } => {
                print_error_to(w, &format!("Cannot reach Ollama at {base_url}"))?;
                writeln!(w)?;
                writeln!(w, "Troubleshooting:")?;
                writeln!(w, "  - Start the server: ollama serve")?;
                writeln!(w, "  - Install Ollama from https://ollama.com/download")?;
                writeln!(
                    w,
                    "  - Point aural at another server: OLLAMA_BASE_URL=http://<host>:11434"
                )?;
            }
        }
        Ok(())
    }
}

/// Check the server and whether `model` is installed.
pub async fn check(client: &OllamaClient, model: &str) -> HealthReport {
    if !client.health_check().await {
        return HealthReport::Unreachable {
            base_url: client.base_url().to_string(),
        };
    }

    match client.list_models().await {
        Ok(installed) if model_installed(&installed, model) => HealthReport::Ready {
            base_url: client.base_url().to_string(),
            model: model.to_string(),
        },
        Ok(installed) => HealthReport::ModelMissing {
            model: model.to_string(),
            installed,
        },
        Err(e) => {
            // Reachable; a listing failure alone is not fatal.
            warn!(error = %e, "could not list installed models");
            HealthReport::Ready {
                base_url: client.base_url().to_string(),
                model: model.to_string(),
            }
        }
    }
}

/// Run the check before a workflow; an unreachable server is fatal.
pub async fn ensure_ready(client: &OllamaClient, model: &str) -> Result<()> {
    let report = check(client, model).await;
    debug!(?report, "health check");
    report.print_to(&mut io::stdout())?;
    if !report.is_reachable() {
        bail!("Ollama is not reachable at {}", client.base_url());
    }
    Ok(())
}

/// Ollama reports tags like `llama3.2:latest`; a bare name matches its `latest` tag.
pub fn model_installed(installed: &[String], model: &str) -> bool {
    installed.iter().any(|name| {
        name == model || (!model.contains(':') && name.strip_suffix(":latest") == Some(model))
    })
}
