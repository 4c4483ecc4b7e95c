#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Taskboard Core
//!
//! Task store and statistics core for a personal task-tracking app.
//!
//! ## Overview
//!
//! Users create tasks, complete and restore them, pin and unpin them, and look at
//! aggregate statistics. This crate holds the parts of that app with a real
//! input/output contract: the task collection and the statistics derived from it.
//! Rendering, navigation, and persistence belong to the host application.
//!
//! ## Architecture
//!
//! ```text
//! host UI ──mutations──▶ TaskStore ──get_all()──▶ [Task] ──▶ aggregation ──▶ AggregateReport
//!                                  ▲                                           │
//!                                  └──────── StatisticsService (on demand) ◀───┘
//! ```
//!
//! - The aggregation functions are pure: the task collection is an explicit argument,
//!   never ambient state, and "now" is passed in rather than read from the system clock.
//! - Records with an empty category or a bad `created_at` are skipped from the affected
//!   aggregate only, and reported as [`aggregation::SkippedRecord`]s.
//! - Nothing subscribes to the store. Callers recompute when they want fresh numbers.
//!
//! ## Module Organization
//!
//! - [`models`] - Task records and patches
//! - [`aggregation`] - Completion, category, date, and weekly aggregates
//! - [`store`] - Task store contract and in-memory implementation
//! - [`services`] - Presentation-facing statistics service and clocks
//! - [`config`] - Layered configuration
//! - [`logging`] - Tracing setup and structured logging macros
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use taskboard_core::aggregation::{count_by_category, count_by_date, weekly_histogram};
//! use taskboard_core::models::Task;
//!
//! let tasks = vec![
//!     Task::new(1, "Report", "").with_category("Work").with_created_at("2024-03-01T10:00:00Z"),
//!     Task::new(2, "Review", "").with_category("Work").with_created_at("2024-03-01T14:00:00Z"),
//! ];
//!
//! let by_category = count_by_category(&tasks);
//! assert_eq!(by_category.get("Work"), Some(&2));
//!
//! let by_date = count_by_date(&tasks);
//! let reference = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap().date_naive();
//! assert_eq!(weekly_histogram(&by_date, reference).counts(), [0, 0, 0, 0, 0, 0, 2]);
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test --lib    # Unit tests
//! cargo test          # Unit, scenario, and property tests
//! ```

pub mod aggregation;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod store;

pub use aggregation::{
    count_by_category, count_by_date, partition_by_completion, weekly_histogram, AggregateReport,
    CompletionPartition, HistogramLabeling, SkippedRecord, TaskAggregator, WeeklyHistogram,
};
pub use config::{AggregationConfig, ConfigManager, LoggingConfig, TaskboardConfig};
pub use error::{Result, TaskboardError};
pub use models::{NewTask, Task, TaskId, TaskPatch};
pub use services::{Clock, CompletedTasksView, FixedClock, StatisticsService, SystemClock};
pub use store::{InMemoryTaskStore, TaskStore};
