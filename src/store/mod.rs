//! # Task Store
//!
//! The authoritative, mutable task collection.
//!
//! ## Architecture
//!
//! The store is an explicit component injected into whatever presents tasks. Readers take a
//! snapshot with [`TaskStore::get_all`] and hand it to the aggregation functions, which never
//! see the store itself. Mutations go through the store; nothing is notified, so callers
//! recompute statistics whenever they need fresh numbers.
//!
//! State lives in memory for the lifetime of the process.
//!
//! ## Usage
//!
//! ```rust
//! use taskboard_core::models::{NewTask, TaskPatch};
//! use taskboard_core::store::{InMemoryTaskStore, TaskStore};
//!
//! # fn main() -> taskboard_core::Result<()> {
//! let store = InMemoryTaskStore::new();
//! let task = store.create(NewTask::new("Groceries", "Milk, eggs").with_category("Home"));
//! store.update_by_id(task.id, TaskPatch::complete())?;
//! assert!(store.get_all()[0].completed);
//! # Ok(())
//! # }
//! ```

pub mod memory;

use crate::error::Result;
use crate::models::{Task, TaskId, TaskPatch};

pub use memory::InMemoryTaskStore;

/// Read/replace/update contract for the task collection.
pub trait TaskStore: Send + Sync {
    /// Snapshot of every task, in store order.
    fn get_all(&self) -> Vec<Task>;

    /// Replace the whole collection. Fails without changing anything if two tasks share an id.
    fn replace_all(&self, tasks: Vec<Task>) -> Result<()>;

    /// Apply `patch` to the task with `id`, returning the updated task.
    fn update_by_id(&self, id: TaskId, patch: TaskPatch) -> Result<Task>;

    /// Remove the task with `id`, returning it.
    fn remove_by_id(&self, id: TaskId) -> Result<Task>;
}
