//! Core task queue and error types.

pub mod error;
pub mod task_queue;

pub use error::{AppResult, UtilError, UtilResult};
pub use task_queue::{QueueError, QueueStats, QueueStatus, TaskQueue};
