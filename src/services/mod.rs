//! # Services
//!
//! Presentation-facing read services built on an injected [`TaskStore`](crate::store::TaskStore)
//! and [`Clock`].

pub mod clock;
pub mod statistics;

pub use clock::{Clock, FixedClock, SystemClock};
pub use statistics::{CompletedTasksView, StatisticsService};
