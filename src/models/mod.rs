//! # Data Models
//!
//! Plain records owned by the task store and read by the aggregator.

pub mod task;

// Re-export core models for easy access
pub use task::{NewTask, Task, TaskId, TaskPatch};
