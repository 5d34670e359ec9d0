//! End-to-end tests for the aural binary
//!
//! Each test runs the compiled binary with an isolated home and project
//! config directory. None of them need an Ollama server.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn aural(home: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_aural"));
    cmd.args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("AURAL_PROJECT_CONFIG_DIR", home.join("project"))
        .env_remove("OLLAMA_BASE_URL")
        .env_remove("OLLAMA_HOST")
        .env_remove("OLLAMA_MODEL")
        .env_remove("OLLAMA_TEMPERATURE")
        .env_remove("OLLAMA_MAX_TOKENS")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn aural_help_lists_commands() {
    let home = TempDir::new().unwrap();
    let output = aural(home.path(), &["--help"]).output().unwrap();

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Agent workflows for the Aural design system"));
    for command in ["menu", "create-component", "audit", "review", "models", "config"] {
        assert!(text.contains(command), "missing {command}");
    }
}

#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();
    let output = aural(home.path(), &["config", "show"]).output().unwrap();

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("[ollama]"));
    assert!(text.contains("base_url = \"http://localhost:11434\""));
    assert!(text.contains("model = \"llama3.2\""));
    assert!(text.contains("[workflow]"));
    assert!(text.contains("design_system_path = \"design-system\""));
}

#[test]
fn config_show_merges_project_file_and_env() {
    let home = TempDir::new().unwrap();
    let project = home.path().join("project");
    std::fs::create_dir_all(&project).unwrap();
    std::fs::write(
        project.join("config.toml"),
        "[ollama]\nmodel = \"mistral\"\n\n[workflow]\nreport_dir = \"reports\"\n",
    )
    .unwrap();

    let output = aural(home.path(), &["config", "show"])
        .env("OLLAMA_HOST", "gpu-box:11434")
        .output()
        .unwrap();

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("model = \"mistral\""));
    assert!(text.contains("base_url = \"http://gpu-box:11434\""));
    assert!(text.contains("report_dir = \"reports\""));
}

#[test]
fn config_path_shows_project_override() {
    let home = TempDir::new().unwrap();
    let output = aural(home.path(), &["config", "path"]).output().unwrap();

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("User config:"));
    assert!(text.contains(&home.path().join("project").join("config.toml").display().to_string()));
}

#[test]
fn invalid_env_number_fails() {
    let home = TempDir::new().unwrap();
    let output = aural(home.path(), &["config", "show"])
        .env("OLLAMA_TEMPERATURE", "warm")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("OLLAMA_TEMPERATURE"));
}

#[test]
fn health_against_unreachable_server_fails_with_remediation() {
    let home = TempDir::new().unwrap();
    let output = aural(home.path(), &["models", "health"])
        .env("OLLAMA_BASE_URL", "http://127.0.0.1:9")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Cannot reach Ollama at http://127.0.0.1:9"));
    assert!(text.contains("ollama serve"));
}

#[test]
fn create_component_checks_health_before_prompting() {
    let home = TempDir::new().unwrap();
    let output = aural(home.path(), &["create-component", "Button", "--type", "button", "-r", "none"])
        .env("OLLAMA_BASE_URL", "http://127.0.0.1:9")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stdout(&output).contains("Cannot reach Ollama"));
    assert!(!home.path().join("component-button-report.md").exists());
}
