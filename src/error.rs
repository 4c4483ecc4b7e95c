//! Error types for the task store and configuration layers.
//!
//! The aggregation functions never fail: malformed records are skipped and
//! reported as [`SkippedRecord`](crate::aggregation::SkippedRecord) values instead.

use crate::models::TaskId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaskboardError {
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),
    #[error("Duplicate task id: {0}")]
    DuplicateTaskId(TaskId),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<config::ConfigError> for TaskboardError {
    fn from(error: config::ConfigError) -> Self {
        TaskboardError::ConfigurationError(error.to_string())
    }
}

impl From<serde_json::Error> for TaskboardError {
    fn from(error: serde_json::Error) -> Self {
        TaskboardError::ValidationError(format!("JSON serialization error: {error}"))
    }
}

pub type Result<T> = std::result::Result<T, TaskboardError>;
