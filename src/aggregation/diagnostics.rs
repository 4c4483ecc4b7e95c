//! Skip diagnostics for records excluded from an aggregate.
//!
//! Malformed records never abort an aggregation. Each exclusion is recorded here so
//! callers can surface data-quality problems without losing the remaining statistics.

use crate::models::TaskId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Aggregate a record was excluded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateKind {
    Category,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Category absent or the empty string
    MissingCategory,
    /// `created_at` absent or blank
    MissingCreatedAt,
    /// `created_at` present but not a recognizable timestamp
    UnparsableCreatedAt,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCategory => write!(f, "missing_category"),
            Self::MissingCreatedAt => write!(f, "missing_created_at"),
            Self::UnparsableCreatedAt => write!(f, "unparsable_created_at"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    pub task_id: TaskId,
    pub aggregate: AggregateKind,
    pub reason: SkipReason,
}

impl SkippedRecord {
    pub(crate) fn new(task_id: TaskId, aggregate: AggregateKind, reason: SkipReason) -> Self {
        tracing::debug!(
            task_id = %task_id,
            aggregate = ?aggregate,
            reason = %reason,
            "Skipping task record for aggregate"
        );
        Self {
            task_id,
            aggregate,
            reason,
        }
    }
}

/// Counts keyed by label together with the records that were left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub counts: BTreeMap<String, usize>,
    pub skipped: Vec<SkippedRecord>,
}

impl Tally {
    pub(crate) fn record(&mut self, key: impl Into<String>) {
        *self.counts.entry(key.into()).or_insert(0) += 1;
    }

    pub(crate) fn skip(&mut self, task_id: TaskId, aggregate: AggregateKind, reason: SkipReason) {
        self.skipped.push(SkippedRecord::new(task_id, aggregate, reason));
    }

    /// Sum of all counts, i.e. the number of records that were included.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}
