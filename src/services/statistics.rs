//! Statistics service: the read side used by task list, completed, pinned, and
//! statistics views.
//!
//! Each call takes a fresh snapshot from the injected store and recomputes from
//! scratch. There is no subscription to store changes.

use super::clock::{Clock, SystemClock};
use crate::aggregation::{count_by_category, partition_by_completion, AggregateReport, TaskAggregator};
use crate::models::Task;
use crate::store::TaskStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Completed tasks plus category counts over the completed tasks only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTasksView {
    pub tasks: Vec<Task>,
    pub category_counts: BTreeMap<String, usize>,
}

pub struct StatisticsService {
    store: Arc<dyn TaskStore>,
    aggregator: TaskAggregator,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for StatisticsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticsService")
            .field("store", &"TaskStore")
            .field("aggregator", &self.aggregator)
            .field("clock", &"Clock")
            .finish()
    }
}

impl StatisticsService {
    /// Service over `store` using wall-clock time.
    pub fn new(store: Arc<dyn TaskStore>, aggregator: TaskAggregator) -> Self {
        Self::with_clock(store, aggregator, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn TaskStore>, aggregator: TaskAggregator, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            aggregator,
            clock,
        }
    }

    /// Full statistics for the current store contents.
    pub fn overview(&self) -> AggregateReport {
        let tasks = self.store.get_all();
        self.aggregator.aggregate(&tasks, self.clock.now())
    }

    pub fn completed_view(&self) -> CompletedTasksView {
        let tasks = self.store.get_all();
        let completed = partition_by_completion(&tasks).completed;
        let category_counts = count_by_category(completed.iter().copied());

        CompletedTasksView {
            tasks: completed.into_iter().cloned().collect(),
            category_counts,
        }
    }

    /// Pinned tasks in store order.
    pub fn pinned_tasks(&self) -> Vec<Task> {
        self.store.get_all().into_iter().filter(|task| task.pinned).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskId, TaskPatch};
    use crate::services::FixedClock;
    use crate::store::InMemoryTaskStore;
    use chrono::{TimeZone, Utc};

    fn service() -> (Arc<InMemoryTaskStore>, Arc<FixedClock>, StatisticsService) {
        let store = Arc::new(
            InMemoryTaskStore::with_tasks(vec![
                Task::new(1, "Report", "")
                    .with_category("Work")
                    .with_completed(true)
                    .with_created_at("2024-03-01T10:00:00Z"),
                Task::new(2, "Gym", "")
                    .with_category("Health")
                    .with_completed(true)
                    .with_pinned(true)
                    .with_created_at("2024-03-03T07:00:00Z"),
                Task::new(3, "Review", "")
                    .with_category("Work")
                    .with_created_at("2024-03-03T09:00:00Z"),
            ])
            .unwrap(),
        );
        let clock = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 3, 12, 0, 0).unwrap()));
        let service = StatisticsService::with_clock(store.clone(), TaskAggregator::default(), clock.clone());
        (store, clock, service)
    }

    #[test]
    fn test_overview_reflects_mutations_on_next_call() {
        let (store, _clock, service) = service();

        let before = service.overview();
        assert_eq!(before.completed_count, 2);
        assert_eq!(before.weekly_histogram.counts(), [0, 0, 0, 0, 1, 0, 2]);

        store.update_by_id(TaskId(3), TaskPatch::complete()).unwrap();
        let after = service.overview();
        assert_eq!(after.completed_count, 3);
        assert_eq!(after.uncompleted_count, 0);
    }

    #[test]
    fn test_overview_uses_injected_clock() {
        let (_store, clock, service) = service();
        clock.set(Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap());

        let report = service.overview();
        assert_eq!(report.weekly_histogram.counts(), [0; 7]);
        assert_eq!(report.date_counts.len(), 2, "date counts are not windowed");
    }

    #[test]
    fn test_completed_view_counts_completed_only() {
        let (_store, _clock, service) = service();
        let view = service.completed_view();

        let ids: Vec<TaskId> = view.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(1), TaskId(2)]);
        assert_eq!(
            view.category_counts,
            BTreeMap::from([("Health".to_string(), 1), ("Work".to_string(), 1)])
        );
    }

    #[test]
    fn test_pinned_tasks_follow_store() {
        let (store, _clock, service) = service();
        assert_eq!(service.pinned_tasks().len(), 1);

        store.update_by_id(TaskId(2), TaskPatch::unpin()).unwrap();
        assert!(service.pinned_tasks().is_empty());
    }
}
