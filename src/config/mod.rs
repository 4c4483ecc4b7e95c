//! # Taskboard Configuration
//!
//! Settings for the aggregation and logging layers.
//!
//! ## Sources
//!
//! Values are layered with the `config` crate, later sources winning:
//!
//! 1. Built-in defaults (see [`TaskboardConfig::default`])
//! 2. `taskboard.toml` in the configuration directory, if present
//! 3. `taskboard-<environment>.toml`, if present
//! 4. `TASKBOARD__*` environment variables, e.g.
//!    `TASKBOARD__AGGREGATION__UTC_OFFSET_MINUTES=120`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskboard_core::config::ConfigManager;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ConfigManager::load()?;
//! let offset = manager.config().aggregation.reference_offset()?;
//! println!("Bucketing dates at {offset} in {}", manager.environment());
//! # Ok(())
//! # }
//! ```

pub mod loader;

use crate::aggregation::HistogramLabeling;
use crate::constants::MAX_UTC_OFFSET_MINUTES;
use crate::error::{Result, TaskboardError};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

pub use loader::ConfigManager;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskboardConfig {
    pub aggregation: AggregationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Fixed offset from UTC, in minutes, used to turn instants into calendar dates.
    pub utc_offset_minutes: i32,
    pub histogram_labels: HistogramLabeling,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive overriding `LOG_LEVEL` / `RUST_LOG`, e.g. `"info"`
    pub level: Option<String>,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl TaskboardConfig {
    /// Defaults overlaid with `TASKBOARD__*` environment variables only.
    pub fn from_env() -> Result<Self> {
        loader::ConfigSources::default().with_process_env().build()
    }

    pub fn validate(&self) -> Result<()> {
        self.aggregation.validate()?;

        if let Some(level) = &self.logging.level {
            if level.trim().is_empty() {
                return Err(TaskboardError::ConfigurationError(
                    "logging.level must not be blank when set".to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl AggregationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(TaskboardError::ConfigurationError(format!(
                "Invalid aggregation.utc_offset_minutes: {} (must be within ±{})",
                self.utc_offset_minutes, MAX_UTC_OFFSET_MINUTES
            )));
        }
        Ok(())
    }

    pub fn reference_offset(&self) -> Result<FixedOffset> {
        self.validate()?;
        FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or_else(|| {
            TaskboardError::ConfigurationError(format!(
                "Invalid aggregation.utc_offset_minutes: {}",
                self.utc_offset_minutes
            ))
        })
    }
}
