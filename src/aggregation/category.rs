//! Counts grouped by category label.

use super::diagnostics::{AggregateKind, SkipReason, Tally};
use crate::models::Task;
use std::collections::BTreeMap;

/// Category label → number of tasks. Tasks without a non-empty category are not counted.
pub fn count_by_category<'a, I>(tasks: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a Task>,
{
    tally_by_category(tasks).counts
}

/// Same as [`count_by_category`], also reporting which tasks were left out.
pub fn tally_by_category<'a, I>(tasks: I) -> Tally
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut tally = Tally::default();
    for task in tasks {
        match task.category_label() {
            Some(label) => tally.record(label),
            None => tally.skip(task.id, AggregateKind::Category, SkipReason::MissingCategory),
        }
    }
    tally
}
