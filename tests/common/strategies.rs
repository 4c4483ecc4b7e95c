use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use proptest::strategy::Just;
use taskboard_core::models::{Task, TaskId};

/// Strategy for category labels, including the absent and empty cases
pub fn category_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("Work".to_string())),
        Just(Some("Home".to_string())),
        Just(Some("Health".to_string())),
        "[A-Za-z][A-Za-z ]{0,11}".prop_map(Some),
    ]
}

/// Strategy for valid `created_at` strings within a two-month window
pub fn valid_created_at_strategy() -> impl Strategy<Value = String> {
    (0u64..60, 0u32..24, 0u32..60, any::<bool>()).prop_map(|(day, hour, minute, date_only)| {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap() + Days::new(day);
        if date_only {
            date.format("%Y-%m-%d").to_string()
        } else {
            format!("{}T{hour:02}:{minute:02}:00Z", date.format("%Y-%m-%d"))
        }
    })
}

/// Strategy for `created_at`: absent, blank, garbage, or valid
pub fn created_at_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        1 => Just(None),
        1 => Just(Some(String::new())),
        1 => prop_oneof![
            Just("not-a-date".to_string()),
            Just("2024-02-30".to_string()),
            Just("yesterday".to_string()),
        ]
        .prop_map(Some),
        4 => valid_created_at_strategy().prop_map(Some),
    ]
}

/// Strategy for task collections with unique, ascending ids
pub fn tasks_strategy() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec(
        (
            category_strategy(),
            created_at_strategy(),
            any::<bool>(),
            any::<bool>(),
        ),
        0..40,
    )
    .prop_map(|fields| {
        fields
            .into_iter()
            .enumerate()
            .map(|(index, (category, created_at, completed, pinned))| Task {
                id: TaskId(index as u64 + 1),
                topic: format!("task {index}"),
                description: String::new(),
                category,
                completed,
                pinned,
                created_at,
            })
            .collect()
    })
}

/// Strategy for histogram reference dates
pub fn reference_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..3650).prop_map(|day| NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Days::new(day))
}
