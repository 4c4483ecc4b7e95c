//! # System Constants
//!
//! Fixed values shared by the aggregation, configuration, and logging layers.

/// Number of buckets in the trailing activity histogram (six days before
/// the reference date plus the reference date itself).
pub const HISTOGRAM_DAYS: usize = 7;

/// `chrono` format string for calendar date keys (`YYYY-MM-DD`).
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Naive date-time layouts accepted for `created_at`, interpreted as UTC.
pub const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Largest absolute reference offset accepted, in minutes.
pub const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60 - 1;

/// Labels used by the legacy positional histogram rendering.
pub const POSITIONAL_WEEKDAY_LABELS: [&str; HISTOGRAM_DAYS] =
    ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Environment variable names consulted at startup
pub mod env {
    pub const ENVIRONMENT: &str = "TASKBOARD_ENV";
    pub const APP_ENVIRONMENT: &str = "APP_ENV";
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Prefix for layered configuration overrides, e.g.
    /// `TASKBOARD__AGGREGATION__UTC_OFFSET_MINUTES`.
    pub const CONFIG_PREFIX: &str = "TASKBOARD";
    pub const CONFIG_SEPARATOR: &str = "__";
}
