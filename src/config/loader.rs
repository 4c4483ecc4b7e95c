//! Configuration Loader
//!
//! Environment-aware configuration loading. Discovers the base and per-environment
//! files in a configuration directory and layers `TASKBOARD__*` environment
//! variables on top.

use super::TaskboardConfig;
use crate::constants::env::{APP_ENVIRONMENT, CONFIG_PREFIX, CONFIG_SEPARATOR, ENVIRONMENT};
use crate::error::Result;
use config::{Config, Environment, File};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Base file name, resolved against any supported extension (`.toml`, `.yaml`, `.json`, ...).
pub const BASE_CONFIG_NAME: &str = "taskboard";

#[derive(Debug, Clone, Default)]
enum EnvSource {
    #[default]
    Disabled,
    Process,
    Overrides(HashMap<String, String>),
}

/// Ordered list of configuration sources; later sources override earlier ones.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    files: Vec<(PathBuf, bool)>,
    env: EnvSource,
}

impl ConfigSources {
    /// Add a file that must exist.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push((path.into(), true));
        self
    }

    /// Add a file that is skipped when missing.
    pub fn with_optional_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push((path.into(), false));
        self
    }

    /// Overlay `TASKBOARD__*` variables from the process environment.
    pub fn with_process_env(mut self) -> Self {
        self.env = EnvSource::Process;
        self
    }

    /// Overlay `TASKBOARD__*` variables from an explicit map instead of the process
    /// environment, so tests don't have to touch global state.
    pub fn with_env_overrides(mut self, vars: HashMap<String, String>) -> Self {
        self.env = EnvSource::Overrides(vars);
        self
    }

    pub fn build(self) -> Result<TaskboardConfig> {
        let mut builder = Config::builder();

        for (path, required) in &self.files {
            debug!(path = %path.display(), required = required, "Adding configuration file source");
            builder = builder.add_source(File::from(path.as_path()).required(*required));
        }

        builder = match self.env {
            EnvSource::Disabled => builder,
            EnvSource::Process => builder.add_source(environment_source()),
            EnvSource::Overrides(vars) => {
                builder.add_source(environment_source().source(Some(vars.into_iter().collect())))
            }
        };

        let config: TaskboardConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

fn environment_source() -> Environment {
    Environment::with_prefix(CONFIG_PREFIX)
        .separator(CONFIG_SEPARATOR)
        .try_parsing(true)
}

/// Current environment name from `TASKBOARD_ENV`, then `APP_ENV`, defaulting to `development`.
pub fn detect_environment() -> String {
    std::env::var(ENVIRONMENT)
        .or_else(|_| std::env::var(APP_ENVIRONMENT))
        .unwrap_or_else(|_| "development".to_string())
        .to_lowercase()
}

/// Loaded configuration together with where it came from.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: TaskboardConfig,
    environment: String,
    config_directory: PathBuf,
}

impl ConfigManager {
    /// Load configuration from `./config` with environment auto-detection
    pub fn load() -> Result<Arc<ConfigManager>> {
        Self::load_from_directory(None)
    }

    pub fn load_from_directory(config_dir: Option<PathBuf>) -> Result<Arc<ConfigManager>> {
        let environment = detect_environment();
        Self::load_from_directory_with_env(config_dir, &environment)
    }

    /// Load from a specific directory with an explicit environment name.
    /// Useful for testing without modifying global environment variables.
    pub fn load_from_directory_with_env(
        config_dir: Option<PathBuf>,
        environment: &str,
    ) -> Result<Arc<ConfigManager>> {
        let sources = Self::directory_sources(config_dir.as_deref(), environment).with_process_env();
        Self::load_from_sources(sources, config_dir, environment)
    }

    pub fn load_from_sources(
        sources: ConfigSources,
        config_dir: Option<PathBuf>,
        environment: &str,
    ) -> Result<Arc<ConfigManager>> {
        let config_directory = config_dir.unwrap_or_else(Self::default_config_directory);

        debug!(
            "Loading configuration for environment '{}' from directory: {}",
            environment,
            config_directory.display()
        );

        let config = sources.build()?;

        crate::log_config!(info, "Configuration loaded successfully",
            environment: environment,
            utc_offset_minutes: config.aggregation.utc_offset_minutes,
            histogram_labels: config.aggregation.histogram_labels
        );

        Ok(Arc::new(ConfigManager {
            config,
            environment: environment.to_string(),
            config_directory,
        }))
    }

    /// Base file then per-environment file, both optional.
    pub fn directory_sources(config_dir: Option<&Path>, environment: &str) -> ConfigSources {
        let directory = config_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_directory);

        ConfigSources::default()
            .with_optional_file(directory.join(BASE_CONFIG_NAME))
            .with_optional_file(directory.join(format!("{BASE_CONFIG_NAME}-{environment}")))
    }

    pub fn config(&self) -> &TaskboardConfig {
        &self.config
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn config_directory(&self) -> &Path {
        &self.config_directory
    }

    fn default_config_directory() -> PathBuf {
        PathBuf::from("config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::HistogramLabeling;
    use std::fs;

    #[test]
    fn test_no_sources_yields_defaults() {
        let config = ConfigSources::default().build().unwrap();
        assert_eq!(config, TaskboardConfig::default());
    }

    #[test]
    fn test_env_overrides_win_over_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taskboard.toml");
        fs::write(
            &path,
            "[aggregation]\nutc_offset_minutes = 60\nhistogram_labels = \"date\"\n",
        )
        .unwrap();

        let vars = HashMap::from([(
            "TASKBOARD__AGGREGATION__UTC_OFFSET_MINUTES".to_string(),
            "-300".to_string(),
        )]);

        let config = ConfigSources::default()
            .with_file(&path)
            .with_env_overrides(vars)
            .build()
            .unwrap();

        assert_eq!(config.aggregation.utc_offset_minutes, -300);
        assert_eq!(config.aggregation.histogram_labels, HistogramLabeling::Date);
    }

    #[test]
    fn test_missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigSources::default()
            .with_file(dir.path().join("absent.toml"))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let vars = HashMap::from([(
            "TASKBOARD__AGGREGATION__UTC_OFFSET_MINUTES".to_string(),
            "5000".to_string(),
        )]);
        let result = ConfigSources::default().with_env_overrides(vars).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_directory_sources_layer_environment_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("taskboard.toml"),
            "[aggregation]\nutc_offset_minutes = 60\n\n[logging]\njson = true\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("taskboard-test.toml"),
            "[aggregation]\nutc_offset_minutes = 120\n",
        )
        .unwrap();

        let sources = ConfigManager::directory_sources(Some(dir.path()), "test");
        let manager =
            ConfigManager::load_from_sources(sources, Some(dir.path().to_path_buf()), "test").unwrap();

        assert_eq!(manager.environment(), "test");
        assert_eq!(manager.config_directory(), dir.path());
        assert_eq!(manager.config().aggregation.utc_offset_minutes, 120);
        assert!(manager.config().logging.json);
    }

    #[test]
    fn test_directory_sources_ignore_dotted_environment_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("taskboard.test.toml"),
            "[aggregation]\nutc_offset_minutes = 120\n",
        )
        .unwrap();

        let sources = ConfigManager::directory_sources(Some(dir.path()), "test");
        let manager =
            ConfigManager::load_from_sources(sources, Some(dir.path().to_path_buf()), "test").unwrap();

        assert_eq!(manager.config().aggregation.utc_offset_minutes, 0);
    }
}
