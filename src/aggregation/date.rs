//! Counts grouped by creation date.
//!
//! A task's `created_at` is parsed leniently (see [`parse_created_at`]) and bucketed by its
//! calendar date in a single fixed reference offset. Two tasks created on the same calendar
//! day in that offset always share a key regardless of time of day.

use super::diagnostics::{AggregateKind, SkipReason, Tally};
use crate::constants::{DATE_KEY_FORMAT, NAIVE_DATETIME_FORMATS};
use crate::models::Task;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};
use std::collections::BTreeMap;

/// Parse a raw `created_at` value.
///
/// Accepts RFC 3339 timestamps, naive ISO date-times (read as UTC), and bare
/// `YYYY-MM-DD` dates (read as UTC midnight). Returns `None` for blank or
/// unrecognized input, including impossible calendar dates such as `2024-02-30`.
pub fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(raw, DATE_KEY_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Calendar date of `instant` in `offset`.
pub fn local_date(instant: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    instant.with_timezone(&offset).date_naive()
}

/// `YYYY-MM-DD` key for a calendar date.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// `YYYY-MM-DD` → number of tasks created that day, in UTC.
pub fn count_by_date<'a, I>(tasks: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a Task>,
{
    tally_by_date(tasks, utc_offset()).counts
}

/// Date counts in the given reference offset, also reporting which tasks were left out.
pub fn tally_by_date<'a, I>(tasks: I, offset: FixedOffset) -> Tally
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut tally = Tally::default();
    for task in tasks {
        let raw = match task.created_at.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw,
            _ => {
                tally.skip(task.id, AggregateKind::Date, SkipReason::MissingCreatedAt);
                continue;
            }
        };

        match parse_created_at(raw) {
            Some(instant) => tally.record(date_key(local_date(instant, offset))),
            None => tally.skip(task.id, AggregateKind::Date, SkipReason::UnparsableCreatedAt),
        }
    }
    tally
}

pub(crate) fn utc_offset() -> FixedOffset {
    Utc.fix()
}
