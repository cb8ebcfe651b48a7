//! Synchronized task queue backed by a fixed set of worker threads.
//!
//! A `TaskQueue` owns a FIFO of pending closures and a pool of OS threads that
//! claim and run them. The owning thread can also claim tasks itself through
//! [`TaskQueue::run_once`], which lets a single-threaded driver loop interleave
//! queue draining with other work.
//!
//! # Example
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use xrn_util::core::TaskQueue;
//!
//! let queue = TaskQueue::with_workers(0).unwrap();
//! let counter = Arc::new(AtomicUsize::new(0));
//!
//! for _ in 0..3 {
//!     let counter = Arc::clone(&counter);
//!     queue.submit(move || {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     });
//! }
//!
//! // No background workers: drive the queue from here.
//! assert_eq!(queue.run_pending(), 3);
//! assert!(!queue.run_once());
//! assert_eq!(counter.load(Ordering::SeqCst), 3);
//! ```

mod synced;

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use thiserror::Error;

pub use synced::TaskQueue;

/// A deferred unit of work with its arguments already bound.
pub(crate) type Task = Box<dyn FnOnce() + Send + 'static>;

/// Errors that can occur when constructing a `TaskQueue`.
#[derive(Debug, Error)]
pub enum QueueError {
    /// Configuration validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The operating system refused to start a worker thread.
    #[error("failed to spawn worker {worker_id}: {source}")]
    Spawn {
        /// Index of the worker that could not be started.
        worker_id: usize,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Lifecycle of a `TaskQueue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueStatus {
    /// Workers are waiting for or consuming tasks.
    Running,
    /// Termination was requested; some workers are still finishing up.
    TerminationRequested,
    /// Termination was requested and every worker has exited.
    Stopped,
}

/// Snapshot of queue utilization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueStats {
    /// Number of workers the queue was built with.
    pub worker_count: usize,

    /// Workers whose thread is still running.
    pub live_workers: usize,

    /// Tasks waiting in the queue.
    pub pending_tasks: usize,

    /// Total tasks submitted.
    pub submitted_tasks: u64,

    /// Total tasks that ran to completion, on workers or on the caller.
    pub completed_tasks: u64,

    /// Workers that ended because a task panicked.
    pub panicked_workers: u64,
}

/// Internal counters for queue statistics (thread-safe).
#[derive(Debug, Default)]
pub(crate) struct QueueCounters {
    pub live_workers: AtomicUsize,
    pub submitted_tasks: AtomicU64,
    pub completed_tasks: AtomicU64,
    pub panicked_workers: AtomicU64,
}

impl QueueCounters {
    /// Get a snapshot of current statistics.
    pub fn snapshot(&self, worker_count: usize, pending_tasks: usize) -> QueueStats {
        QueueStats {
            worker_count,
            live_workers: self.live_workers.load(Ordering::Acquire),
            pending_tasks,
            submitted_tasks: self.submitted_tasks.load(Ordering::Relaxed),
            completed_tasks: self.completed_tasks.load(Ordering::Relaxed),
            panicked_workers: self.panicked_workers.load(Ordering::Relaxed),
        }
    }
}
