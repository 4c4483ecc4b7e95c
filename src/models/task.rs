//! # Task Model
//!
//! A single to-do record: identity, free-form text, an optional category,
//! completion and pin flags, and the creation timestamp as supplied by the caller.
//!
//! ## Overview
//!
//! `Task` is owned by the [`TaskStore`](crate::store::TaskStore). The aggregation layer only
//! reads it. `created_at` is kept as the raw string so that a record with a missing or
//! unparsable timestamp can still live in the store; such records are excluded from the
//! date-based aggregates rather than rejected on the way in.
//!
//! Deserialization is lenient for `created_at` as well: an integer or float is read as
//! epoch milliseconds and normalized to RFC 3339, and any other non-string value is kept
//! as its JSON text so the record loads and is later skipped as unparsable.
//!
//! ## JSON Shape
//!
//! ```json
//! {
//!   "id": 1,
//!   "topic": "Groceries",
//!   "description": "Milk, eggs",
//!   "category": "Home",
//!   "completed": false,
//!   "pinned": false,
//!   "created_at": "2024-03-01T10:00:00Z"
//! }
//! ```
//!
//! `completed` and `pinned` default to `false` when absent, `category` and
//! `created_at` default to `None`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable task identifier, unique within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        TaskId(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default, deserialize_with = "deserialize_created_at")]
    pub created_at: Option<String>,
}

/// Shapes accepted for `created_at` on the way in.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCreatedAt {
    Text(String),
    EpochMillis(i64),
    FractionalMillis(f64),
    Other(serde_json::Value),
}

impl RawCreatedAt {
    fn into_raw_string(self) -> String {
        match self {
            RawCreatedAt::Text(text) => text,
            RawCreatedAt::EpochMillis(millis) => millis_to_rfc3339(millis).unwrap_or_else(|| millis.to_string()),
            RawCreatedAt::FractionalMillis(millis) => (millis.is_finite()
                && millis >= i64::MIN as f64
                && millis <= i64::MAX as f64)
                .then(|| millis_to_rfc3339(millis.trunc() as i64))
                .flatten()
                .unwrap_or_else(|| millis.to_string()),
            RawCreatedAt::Other(value) => value.to_string(),
        }
    }
}

fn millis_to_rfc3339(millis: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|instant| instant.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn deserialize_created_at<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<RawCreatedAt>::deserialize(deserializer)?.map(RawCreatedAt::into_raw_string))
}

impl Task {
    /// Build an uncompleted, unpinned task with no category or timestamp.
    pub fn new(id: u64, topic: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: TaskId(id),
            topic: topic.into(),
            description: description.into(),
            category: None,
            completed: false,
            pinned: false,
            created_at: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn with_pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    /// Category label eligible for category aggregates; `None` for absent or empty labels.
    pub fn category_label(&self) -> Option<&str> {
        self.category.as_deref().filter(|label| !label.is_empty())
    }

    /// Apply a patch in place. Fields left as `None` in the patch are untouched.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(topic) = &patch.topic {
            self.topic = topic.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(pinned) = patch.pinned {
            self.pinned = pinned;
        }
    }
}

/// Fields supplied when creating a task; the store assigns the id and timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub topic: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl NewTask {
    pub fn new(topic: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            description: description.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub(crate) fn into_task(self, id: TaskId, created_at: DateTime<Utc>) -> Task {
        Task {
            id,
            topic: self.topic,
            description: self.description,
            category: self.category,
            completed: false,
            pinned: false,
            created_at: Some(created_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}

/// Partial update for [`TaskStore::update_by_id`](crate::store::TaskStore::update_by_id).
///
/// `category` is doubly optional: `Some(None)` clears the category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
}

impl TaskPatch {
    pub fn complete() -> Self {
        Self {
            completed: Some(true),
            ..Self::default()
        }
    }

    /// Move a completed task back to the open list.
    pub fn restore() -> Self {
        Self {
            completed: Some(false),
            ..Self::default()
        }
    }

    pub fn pin() -> Self {
        Self {
            pinned: Some(true),
            ..Self::default()
        }
    }

    pub fn unpin() -> Self {
        Self {
            pinned: Some(false),
            ..Self::default()
        }
    }

    pub fn edit(topic: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            topic: Some(topic.into()),
            description: Some(description.into()),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = Some(category);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_defaults() {
        let task: Task = serde_json::from_str(r#"{"id": 4, "topic": "Read"}"#).unwrap();
        assert_eq!(task.id, TaskId(4));
        assert!(!task.completed);
        assert!(!task.pinned);
        assert_eq!(task.category, None);
        assert_eq!(task.created_at, None);
    }

    #[test]
    fn test_deserialize_numeric_created_at_as_epoch_millis() {
        let task: Task =
            serde_json::from_str(r#"{"id": 2, "topic": "b", "created_at": 1709287200000}"#).unwrap();
        assert_eq!(task.created_at.as_deref(), Some("2024-03-01T10:00:00.000Z"));

        let task: Task =
            serde_json::from_str(r#"{"id": 3, "topic": "c", "created_at": 1709287200000.9}"#).unwrap();
        assert_eq!(task.created_at.as_deref(), Some("2024-03-01T10:00:00.000Z"));
    }

    #[test]
    fn test_deserialize_non_string_created_at_keeps_raw_text() {
        let task: Task = serde_json::from_str(r#"{"id": 1, "created_at": true}"#).unwrap();
        assert_eq!(task.created_at.as_deref(), Some("true"));

        let task: Task = serde_json::from_str(r#"{"id": 1, "created_at": {"seconds": 5}}"#).unwrap();
        assert_eq!(task.created_at.as_deref(), Some(r#"{"seconds":5}"#));

        let task: Task = serde_json::from_str(r#"{"id": 1, "created_at": 1e300}"#).unwrap();
        assert!(task.created_at.is_some());

        let task: Task = serde_json::from_str(r#"{"id": 1, "created_at": null}"#).unwrap();
        assert_eq!(task.created_at, None);
    }

    #[test]
    fn test_category_label_skips_empty() {
        assert_eq!(Task::new(1, "a", "").category_label(), None);
        assert_eq!(Task::new(1, "a", "").with_category("").category_label(), None);
        assert_eq!(
            Task::new(1, "a", "").with_category("Work").category_label(),
            Some("Work")
        );
    }

    #[test]
    fn test_apply_patch() {
        let mut task = Task::new(1, "Draft", "old").with_category("Work");

        task.apply(&TaskPatch::complete());
        assert!(task.completed);

        task.apply(&TaskPatch::edit("Final", "new").with_category(None));
        assert_eq!(task.topic, "Final");
        assert_eq!(task.description, "new");
        assert_eq!(task.category, None);
        assert!(task.completed, "untouched fields stay as they were");

        task.apply(&TaskPatch::restore());
        task.apply(&TaskPatch::pin());
        assert!(!task.completed);
        assert!(task.pinned);
    }

    #[test]
    fn test_patch_serialization_omits_unset_fields() {
        let json = serde_json::to_value(TaskPatch::unpin()).unwrap();
        assert_eq!(json, serde_json::json!({"pinned": false}));
        assert!(TaskPatch::default().is_empty());
        assert!(!TaskPatch::pin().is_empty());
    }

    #[test]
    fn test_new_task_into_task() {
        let created_at = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let task = NewTask::new("Call", "dentist")
            .with_category("Health")
            .into_task(TaskId(9), created_at);

        assert_eq!(task.id, TaskId(9));
        assert_eq!(task.category_label(), Some("Health"));
        assert!(!task.completed);
        assert_eq!(task.created_at.as_deref(), Some("2024-03-01T10:00:00.000Z"));
    }
}
