//! Trailing seven-day activity histogram.
//!
//! Covers the six calendar days before a reference date plus the reference date itself,
//! oldest first. Every bucket records the date it covers and that date's real weekday,
//! so labels always agree with the data underneath them.

use super::date::date_key;
use crate::constants::{HISTOGRAM_DAYS, POSITIONAL_WEEKDAY_LABELS};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How bucket labels are rendered for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistogramLabeling {
    /// Actual weekday of each bucket's date ("Fri", "Sat", ...)
    #[default]
    Weekday,
    /// ISO date of each bucket ("2024-03-01")
    Date,
    /// Fixed "Mon".."Sun" by position, regardless of the dates covered
    Positional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHistogram {
    pub buckets: [HistogramBucket; HISTOGRAM_DAYS],
}

impl WeeklyHistogram {
    pub fn counts(&self) -> [usize; HISTOGRAM_DAYS] {
        self.buckets.map(|bucket| bucket.count)
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.count).sum()
    }

    /// Last date covered (the reference date).
    pub fn reference_date(&self) -> NaiveDate {
        self.buckets[HISTOGRAM_DAYS - 1].date
    }

    pub fn labels(&self, labeling: HistogramLabeling) -> Vec<String> {
        match labeling {
            HistogramLabeling::Weekday => self
                .buckets
                .iter()
                .map(|bucket| weekday_label(bucket.weekday).to_string())
                .collect(),
            HistogramLabeling::Date => self.buckets.iter().map(|bucket| date_key(bucket.date)).collect(),
            HistogramLabeling::Positional => POSITIONAL_WEEKDAY_LABELS
                .iter()
                .map(|label| label.to_string())
                .collect(),
        }
    }
}

/// Look up each of the seven dates ending at `reference_date` in `date_counts`,
/// defaulting to zero.
///
/// Dates earlier than the representable range clamp to [`NaiveDate::MIN`].
pub fn weekly_histogram(date_counts: &BTreeMap<String, usize>, reference_date: NaiveDate) -> WeeklyHistogram {
    let buckets = std::array::from_fn(|position| {
        let days_back = (HISTOGRAM_DAYS - 1 - position) as u64;
        let date = reference_date
            .checked_sub_days(Days::new(days_back))
            .unwrap_or(NaiveDate::MIN);
        HistogramBucket {
            date,
            weekday: date.weekday(),
            count: date_counts.get(&date_key(date)).copied().unwrap_or(0),
        }
    });

    WeeklyHistogram { buckets }
}

fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_counts_yield_seven_zeros() {
        let histogram = weekly_histogram(&BTreeMap::new(), ymd(2024, 3, 1));
        assert_eq!(histogram.counts(), [0; HISTOGRAM_DAYS]);
        assert_eq!(histogram.total(), 0);
    }

    #[test]
    fn test_dates_are_consecutive_and_end_at_reference() {
        let histogram = weekly_histogram(&BTreeMap::new(), ymd(2024, 3, 1));
        let dates: Vec<String> = histogram.buckets.iter().map(|b| date_key(b.date)).collect();
        assert_eq!(
            dates,
            vec![
                "2024-02-24", "2024-02-25", "2024-02-26", "2024-02-27", "2024-02-28", "2024-02-29",
                "2024-03-01",
            ]
        );
        assert_eq!(histogram.reference_date(), ymd(2024, 3, 1));
    }

    #[test]
    fn test_counts_outside_window_are_ignored() {
        let counts = BTreeMap::from([
            ("2024-03-01".to_string(), 5),
            ("2024-02-26".to_string(), 2),
            ("2024-02-23".to_string(), 9),
            ("2024-03-02".to_string(), 4),
        ]);

        let histogram = weekly_histogram(&counts, ymd(2024, 3, 1));
        assert_eq!(histogram.counts(), [0, 0, 2, 0, 0, 0, 5]);
    }

    #[test]
    fn test_labels_follow_actual_weekdays() {
        // 2024-03-01 was a Friday.
        let histogram = weekly_histogram(&BTreeMap::new(), ymd(2024, 3, 1));

        assert_eq!(
            histogram.labels(HistogramLabeling::Weekday),
            vec!["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"]
        );
        assert_eq!(histogram.buckets[HISTOGRAM_DAYS - 1].weekday, Weekday::Fri);
        assert_eq!(histogram.labels(HistogramLabeling::Date)[0], "2024-02-24");
        assert_eq!(
            histogram.labels(HistogramLabeling::Positional),
            vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
    }

    #[test]
    fn test_window_near_min_date_still_has_seven_buckets() {
        let histogram = weekly_histogram(&BTreeMap::new(), NaiveDate::MIN);
        assert_eq!(histogram.buckets.len(), HISTOGRAM_DAYS);
        assert!(histogram.buckets.iter().all(|b| b.date == NaiveDate::MIN));
    }
}
