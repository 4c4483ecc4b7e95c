//! Completion partition: split a task collection into completed and open tasks.

use crate::models::Task;
use serde::Serialize;

/// Stable partition of a task slice. Both sides borrow from the input and keep
/// its relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompletionPartition<'a> {
    pub completed: Vec<&'a Task>,
    pub uncompleted: Vec<&'a Task>,
}

impl<'a> CompletionPartition<'a> {
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn uncompleted_count(&self) -> usize {
        self.uncompleted.len()
    }

    pub fn total(&self) -> usize {
        self.completed.len() + self.uncompleted.len()
    }

    /// Fraction of completed tasks in `[0.0, 1.0]`; `0.0` for an empty collection.
    pub fn completion_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.completed.len() as f64 / total as f64,
        }
    }
}

pub fn partition_by_completion(tasks: &[Task]) -> CompletionPartition<'_> {
    let (completed, uncompleted) = tasks.iter().partition(|task| task.completed);
    CompletionPartition {
        completed,
        uncompleted,
    }
}
