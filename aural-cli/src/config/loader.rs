use std::path::{Path, PathBuf};

use aural_core::ConfigError;
use aural_models::CompletionConfig;
use directories::ProjectDirs;
use tracing::debug;

use super::types::{AuralConfig, RawAuralConfig, RawOllamaConfig, RawWorkflowConfig};

/// Overrides the project config directory (useful for isolated tests)
pub const PROJECT_CONFIG_DIR_ENV: &str = "AURAL_PROJECT_CONFIG_DIR";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (defaults ← user ← project ← environment)
    pub fn load() -> Result<AuralConfig, ConfigError> {
        let mut layers = Vec::new();
        if let Some(user_path) = Self::user_config_path() {
            layers.push(user_path);
        }
        layers.push(Self::project_config_path());

        Self::load_layers(&layers, |key| std::env::var(key).ok())
    }

    /// Merge the files in `paths` (later wins), then overlay `env`
    pub fn load_layers<F>(paths: &[PathBuf], env: F) -> Result<AuralConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut raw = RawAuralConfig::default();
        for path in paths {
            if let Some(layer) = Self::read_raw(path)? {
                debug!(path = %path.display(), "loaded config layer");
                raw = Self::merge_raw(raw, layer);
            }
        }

        let mut config = Self::finalize(raw);
        config.ollama = config.ollama.with_env_lookup(env)?;
        Ok(config)
    }

    /// Get user config path (platform-specific)
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "aural").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Get project config path
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var(PROJECT_CONFIG_DIR_ENV) {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".aural/config.toml")
        }
    }

    fn read_raw(path: &Path) -> Result<Option<RawAuralConfig>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let raw = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(raw))
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawAuralConfig, overlay: RawAuralConfig) -> RawAuralConfig {
        RawAuralConfig {
            ollama: RawOllamaConfig {
                base_url: overlay.ollama.base_url.or(base.ollama.base_url),
                model: overlay.ollama.model.or(base.ollama.model),
                temperature: overlay.ollama.temperature.or(base.ollama.temperature),
                max_tokens: overlay.ollama.max_tokens.or(base.ollama.max_tokens),
            },
            workflow: RawWorkflowConfig {
                design_system_path: overlay
                    .workflow
                    .design_system_path
                    .or(base.workflow.design_system_path),
                report_dir: overlay.workflow.report_dir.or(base.workflow.report_dir),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawAuralConfig) -> AuralConfig {
        let defaults = AuralConfig::default();
        AuralConfig {
            ollama: CompletionConfig {
                base_url: raw.ollama.base_url.unwrap_or(defaults.ollama.base_url),
                model: raw.ollama.model.unwrap_or(defaults.ollama.model),
                temperature: raw.ollama.temperature.unwrap_or(defaults.ollama.temperature),
                max_tokens: raw.ollama.max_tokens.unwrap_or(defaults.ollama.max_tokens),
            },
            workflow: super::types::WorkflowConfig {
                design_system_path: raw
                    .workflow
                    .design_system_path
                    .unwrap_or(defaults.workflow.design_system_path),
                report_dir: raw
                    .workflow
                    .report_dir
                    .unwrap_or(defaults.workflow.report_dir),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    // ==================== Load Tests ====================

    #[test]
    fn test_load_without_files_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nonexistent.toml");

        let config = ConfigLoader::load_layers(&[missing], no_env).unwrap();

        assert_eq!(config, AuralConfig::default());
    }

    #[test]
    fn test_project_layer_overrides_user_layer() {
        let temp_dir = TempDir::new().unwrap();
        let user = write(
            &temp_dir,
            "user.toml",
            "[ollama]\nmodel = \"mistral\"\ntemperature = 0.4\n",
        );
        let project = write(&temp_dir, "project.toml", "[ollama]\nmodel = \"codellama\"\n");

        let config = ConfigLoader::load_layers(&[user, project], no_env).unwrap();

        assert_eq!(config.ollama.model, "codellama");
        // Unset in the project layer, so the user value survives
        assert_eq!(config.ollama.temperature, 0.4);
    }

    #[test]
    fn test_env_overrides_files() {
        let temp_dir = TempDir::new().unwrap();
        let project = write(
            &temp_dir,
            "project.toml",
            "[ollama]\nbase_url = \"http://file-host:11434\"\nmodel = \"mistral\"\n",
        );

        let config = ConfigLoader::load_layers(&[project], |key| match key {
            "OLLAMA_BASE_URL" => Some("gpu-box:11434".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.ollama.base_url, "http://gpu-box:11434");
        assert_eq!(config.ollama.model, "mistral");
    }

    #[test]
    fn test_workflow_section_is_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let project = write(
            &temp_dir,
            "project.toml",
            "[workflow]\ndesign_system_path = \"packages/ds\"\nreport_dir = \"reports\"\n",
        );

        let config = ConfigLoader::load_layers(&[project], no_env).unwrap();

        assert_eq!(
            config.workflow.design_system_path,
            PathBuf::from("packages/ds")
        );
        assert_eq!(config.workflow.report_dir, PathBuf::from("reports"));
    }

    #[test]
    fn test_load_invalid_toml_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "invalid.toml", "this is not valid toml {{{{");

        let err = ConfigLoader::load_layers(&[path], no_env).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("invalid.toml"));
    }

    #[test]
    fn test_unparseable_env_number_is_rejected() {
        let err = ConfigLoader::load_layers(&[], |key| match key {
            "OLLAMA_MAX_TOKENS" => Some("lots".to_string()),
            _ => None,
        })
        .unwrap_err();

        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("OLLAMA_MAX_TOKENS"));
    }

    #[test]
    fn test_out_of_range_file_value_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "hot.toml", "[ollama]\ntemperature = 1.5\n");

        let err = ConfigLoader::load_layers(&[path], no_env).unwrap_err();
        assert!(err.to_string().contains("temperature"));
    }

    // ==================== Merge Tests ====================

    #[test]
    fn test_merge_raw_none_preserves_base() {
        let base = RawAuralConfig {
            ollama: RawOllamaConfig {
                base_url: Some("http://base:11434".to_string()),
                model: Some("base-model".to_string()),
                temperature: Some(0.1),
                max_tokens: Some(512),
            },
            workflow: RawWorkflowConfig {
                design_system_path: Some(PathBuf::from("ds")),
                report_dir: None,
            },
        };

        let merged = ConfigLoader::merge_raw(base.clone(), RawAuralConfig::default());

        assert_eq!(merged, base);
    }

    // ==================== Path Tests ====================

    #[test]
    fn test_user_config_path_returns_some() {
        let path = ConfigLoader::user_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("aural"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    #[serial]
    fn test_project_config_path() {
        // SAFETY: serialized with every other test touching the environment
        unsafe { std::env::remove_var(PROJECT_CONFIG_DIR_ENV) };
        let path = ConfigLoader::project_config_path();
        assert_eq!(path, PathBuf::from(".aural/config.toml"));
    }

    #[test]
    #[serial]
    fn test_project_config_path_env_override() {
        let temp_dir = TempDir::new().unwrap();
        // SAFETY: serialized with every other test touching the environment
        unsafe { std::env::set_var(PROJECT_CONFIG_DIR_ENV, temp_dir.path()) };
        let path = ConfigLoader::project_config_path();
        unsafe { std::env::remove_var(PROJECT_CONFIG_DIR_ENV) };

        assert_eq!(path, temp_dir.path().join("config.toml"));
    }
}
