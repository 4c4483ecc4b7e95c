//! In-memory [`TaskStore`] backed by an ordered `Vec` behind a read/write lock.

use super::TaskStore;
use crate::error::{Result, TaskboardError};
use crate::models::{NewTask, Task, TaskId, TaskPatch};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an existing collection, rejecting duplicate ids.
    pub fn with_tasks(tasks: Vec<Task>) -> Result<Self> {
        ensure_unique_ids(&tasks)?;
        Ok(Self {
            tasks: RwLock::new(tasks),
        })
    }

    /// Append a new task created now.
    pub fn create(&self, new_task: NewTask) -> Task {
        self.create_at(new_task, Utc::now())
    }

    /// Append a new task with an explicit creation instant.
    ///
    /// The id is one past the largest id currently held, so ids stay unique even after
    /// removals and bulk replacement. When the largest id is `u64::MAX` the smallest
    /// unused id is taken instead.
    pub fn create_at(&self, new_task: NewTask, created_at: DateTime<Utc>) -> Task {
        let mut tasks = self.tasks.write();
        let task = new_task.into_task(next_task_id(&tasks), created_at);
        tasks.push(task.clone());

        crate::log_task!(debug, "Task created",
            task_id: task.id,
            category: task.category.clone(),
            total_tasks: tasks.len()
        );

        task
    }

    pub fn find_by_id(&self, id: TaskId) -> Option<Task> {
        self.tasks.read().iter().find(|task| task.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.tasks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.read().is_empty()
    }
}

impl TaskStore for InMemoryTaskStore {
    fn get_all(&self) -> Vec<Task> {
        self.tasks.read().clone()
    }

    fn replace_all(&self, tasks: Vec<Task>) -> Result<()> {
        ensure_unique_ids(&tasks)?;
        let count = tasks.len();
        *self.tasks.write() = tasks;

        crate::log_task!(debug, "Task collection replaced", total_tasks: count);
        Ok(())
    }

    fn update_by_id(&self, id: TaskId, patch: TaskPatch) -> Result<Task> {
        let mut tasks = self.tasks.write();
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TaskboardError::TaskNotFound(id))?;

        task.apply(&patch);

        crate::log_task!(debug, "Task updated",
            task_id: id,
            completed: task.completed,
            pinned: task.pinned
        );

        Ok(task.clone())
    }

    fn remove_by_id(&self, id: TaskId) -> Result<Task> {
        let mut tasks = self.tasks.write();
        let position = tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(TaskboardError::TaskNotFound(id))?;

        let removed = tasks.remove(position);
        crate::log_task!(debug, "Task removed", task_id: id, remaining: tasks.len());
        Ok(removed)
    }
}

fn next_task_id(tasks: &[Task]) -> TaskId {
    let Some(max) = tasks.iter().map(|task| task.id.0).max() else {
        return TaskId(1);
    };

    match max.checked_add(1) {
        Some(next) => TaskId(next),
        None => {
            let taken: HashSet<u64> = tasks.iter().map(|task| task.id.0).collect();
            // An in-memory store cannot hold every id, so a gap always exists.
            TaskId((1..=u64::MAX).find(|candidate| !taken.contains(candidate)).unwrap_or(0))
        }
    }
}

fn ensure_unique_ids(tasks: &[Task]) -> Result<()> {
    let mut seen = HashSet::with_capacity(tasks.len());
    match tasks.iter().find(|task| !seen.insert(task.id)) {
        Some(duplicate) => {
            tracing::warn!(task_id = %duplicate.id, "Rejecting task collection with duplicate id");
            Err(TaskboardError::DuplicateTaskId(duplicate.id))
        }
        None => Ok(()),
    }
}
