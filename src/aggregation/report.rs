//! # Aggregate Report
//!
//! One-shot bundle of every statistic the presentation layer renders, built fresh
//! from a task snapshot on each request. Nothing here is cached or persisted.

use super::category::tally_by_category;
use super::completion::partition_by_completion;
use super::date::{local_date, tally_by_date, utc_offset};
use super::diagnostics::SkippedRecord;
use super::histogram::{weekly_histogram, HistogramLabeling, WeeklyHistogram};
use crate::config::AggregationConfig;
use crate::error::Result;
use crate::models::Task;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub completed_count: usize,
    pub uncompleted_count: usize,
    /// Completed share in `[0.0, 1.0]`
    pub completion_rate: f64,
    pub category_counts: BTreeMap<String, usize>,
    pub date_counts: BTreeMap<String, usize>,
    pub weekly_histogram: WeeklyHistogram,
    pub histogram_labels: Vec<String>,
    /// Records excluded from the category or date aggregates
    pub skipped: Vec<SkippedRecord>,
    pub generated_at: DateTime<Utc>,
}

impl AggregateReport {
    pub fn total_tasks(&self) -> usize {
        self.completed_count + self.uncompleted_count
    }

    pub fn has_skipped_records(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Stateless aggregator bound to a reference offset and a label style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskAggregator {
    offset: FixedOffset,
    labeling: HistogramLabeling,
}

impl Default for TaskAggregator {
    fn default() -> Self {
        Self {
            offset: utc_offset(),
            labeling: HistogramLabeling::default(),
        }
    }
}

impl TaskAggregator {
    pub fn new(offset: FixedOffset, labeling: HistogramLabeling) -> Self {
        Self { offset, labeling }
    }

    pub fn from_config(config: &AggregationConfig) -> Result<Self> {
        Ok(Self::new(config.reference_offset()?, config.histogram_labels))
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn labeling(&self) -> HistogramLabeling {
        self.labeling
    }

    /// Compute every aggregate over `tasks`, using `now` as the histogram reference.
    pub fn aggregate(&self, tasks: &[Task], now: DateTime<Utc>) -> AggregateReport {
        let partition = partition_by_completion(tasks);
        let categories = tally_by_category(tasks);
        let dates = tally_by_date(tasks, self.offset);

        let weekly_histogram = weekly_histogram(&dates.counts, local_date(now, self.offset));
        let histogram_labels = weekly_histogram.labels(self.labeling);

        let mut skipped = categories.skipped;
        skipped.extend(dates.skipped);

        crate::log_stats!(debug, "Aggregate report computed",
            total_tasks: tasks.len(),
            completed: partition.completed_count(),
            categories: categories.counts.len(),
            skipped_records: skipped.len()
        );

        AggregateReport {
            completed_count: partition.completed_count(),
            uncompleted_count: partition.uncompleted_count(),
            completion_rate: partition.completion_rate(),
            category_counts: categories.counts,
            date_counts: dates.counts,
            weekly_histogram,
            histogram_labels,
            skipped,
            generated_at: now,
        }
    }
}
