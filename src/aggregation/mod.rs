//! # Task Aggregation
//!
//! Pure functions that derive statistics from a task collection.
//!
//! ## Overview
//!
//! Every function here takes the collection as an explicit argument, never mutates it,
//! performs no I/O, and returns a freshly built value. Calling one twice on the same input
//! gives the same output. Cost is linear in the number of tasks.
//!
//! - [`partition_by_completion`]: stable split into completed / open tasks
//! - [`count_by_category`]: counts per non-empty category label
//! - [`count_by_date`]: counts per `YYYY-MM-DD` creation date
//! - [`weekly_histogram`]: seven trailing daily counts ending at a reference date
//! - [`TaskAggregator`]: all of the above in one [`AggregateReport`]
//!
//! ## Malformed Records
//!
//! A task with an empty category or a missing/unparsable `created_at` is excluded from the
//! aggregate it would have fed and nothing else. The `tally_*` variants report each
//! exclusion as a [`SkippedRecord`]; the aggregation itself never fails.

pub mod category;
pub mod completion;
pub mod date;
pub mod diagnostics;
pub mod histogram;
pub mod report;

pub use category::{count_by_category, tally_by_category};
pub use completion::{partition_by_completion, CompletionPartition};
pub use date::{count_by_date, date_key, parse_created_at, tally_by_date};
pub use diagnostics::{AggregateKind, SkipReason, SkippedRecord, Tally};
pub use histogram::{weekly_histogram, HistogramBucket, HistogramLabeling, WeeklyHistogram};
pub use report::{AggregateReport, TaskAggregator};
