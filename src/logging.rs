//! # Structured Logging Module
//!
//! Environment-aware console logging using the tracing ecosystem.
//!
//! This module provides:
//! - One-time subscriber installation that tolerates an existing global subscriber
//! - Level resolution from configuration, `LOG_LEVEL`, `RUST_LOG`, then environment defaults
//! - Human-readable or JSON-lines output
//! - Domain-specific structured logging macros (`log_task!`, `log_stats!`, `log_config!`)

use crate::config::loader::detect_environment;
use crate::config::LoggingConfig;
use crate::constants::env::{LOG_LEVEL, RUST_LOG};
use std::io::IsTerminal;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static TRACING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Install the global tracing subscriber once per process.
///
/// Later calls are no-ops. If another subscriber was installed first (for example by a
/// host application), that subscriber is kept.
pub fn init_tracing(config: &LoggingConfig) {
    TRACING_INITIALIZED.get_or_init(|| {
        let environment = detect_environment();
        let log_level = resolve_log_level(config.level.as_deref(), &environment);
        let use_ansi = std::io::stdout().is_terminal();

        let text_layer = (!config.json).then(|| {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_ansi(use_ansi)
                .with_filter(EnvFilter::new(&log_level))
        });

        let json_layer = config.json.then(|| {
            fmt::layer()
                .json()
                .with_target(true)
                .with_level(true)
                .with_filter(EnvFilter::new(&log_level))
        });

        let subscriber = tracing_subscriber::registry().with(text_layer).with(json_layer);

        if subscriber.try_init().is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        } else {
            tracing::info!(
                environment = %environment,
                log_level = %log_level,
                json = config.json,
                ansi_colors = use_ansi,
                "Console logging initialized"
            );
        }
    });
}

/// Resolve the filter directive: explicit override, then `LOG_LEVEL`, then `RUST_LOG`,
/// then a default for the environment.
fn resolve_log_level(override_level: Option<&str>, environment: &str) -> String {
    if let Some(level) = override_level {
        return level.to_lowercase();
    }

    if let Ok(level) = std::env::var(LOG_LEVEL) {
        return level.to_lowercase();
    }

    if let Ok(level) = std::env::var(RUST_LOG) {
        return level.to_lowercase();
    }

    default_level_for(environment).to_string()
}

fn default_level_for(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        _ => "debug",
    }
}

/// Log task store operations
#[macro_export]
macro_rules! log_task {
    // Full form with task_id
    ($level:ident, $operation:expr, task_id: $task_id:expr, $($key:ident: $value:expr),* $(,)?) => {
        tracing::$level!(
            operation = %$operation,
            task_id = %$task_id,
            $($key = ?$value,)*
            timestamp = %chrono::Utc::now().to_rfc3339(),
            "{}", $operation
        );
    };
    // Simple form - just operation
    ($level:ident, $operation:expr $(,)?) => {
        tracing::$level!(
            operation = %$operation,
            timestamp = %chrono::Utc::now().to_rfc3339(),
            "{}", $operation
        );
    };
    // Generic form with additional fields
    ($level:ident, $operation:expr, $($key:ident: $value:expr),+ $(,)?) => {
        tracing::$level!(
            operation = %$operation,
            $($key = ?$value,)*
            timestamp = %chrono::Utc::now().to_rfc3339(),
            "{}", $operation
        );
    };
}

/// Log aggregation and statistics operations
#[macro_export]
macro_rules! log_stats {
    ($level:ident, $operation:expr $(,)?) => {
        tracing::$level!(
            operation = %$operation,
            component = "aggregation",
            "{}", $operation
        );
    };
    ($level:ident, $operation:expr, $($key:ident: $value:expr),+ $(,)?) => {
        tracing::$level!(
            operation = %$operation,
            component = "aggregation",
            $($key = ?$value,)*
            "{}", $operation
        );
    };
}

/// Log configuration operations
#[macro_export]
macro_rules! log_config {
    ($level:ident, $operation:expr $(,)?) => {
        tracing::$level!(
            operation = %$operation,
            component = "config",
            "{}", $operation
        );
    };
    ($level:ident, $operation:expr, $($key:ident: $value:expr),+ $(,)?) => {
        tracing::$level!(
            operation = %$operation,
            component = "config",
            $($key = ?$value,)*
            "{}", $operation
        );
    };
}
