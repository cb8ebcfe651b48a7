//! # xrn util
//!
//! Small building blocks shared by the xrn projects.
//!
//! ## TaskQueue
//!
//! A fixed pool of named worker threads pulling boxed closures from one shared
//! FIFO backlog. The owning thread can also pull work itself with
//! [`TaskQueue::run_once`], which lets a single-threaded driver loop interleave
//! draining the queue with its own work.
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use xrn_util::TaskQueue;
//!
//! let queue = TaskQueue::with_workers(2).unwrap();
//! let done = Arc::new(AtomicUsize::new(0));
//! for _ in 0..8 {
//!     let done = Arc::clone(&done);
//!     queue.submit(move || {
//!         done.fetch_add(1, Ordering::SeqCst);
//!     });
//! }
//! while queue.run_once() {}
//!
//! // Dropping the queue requests termination and joins every worker.
//! drop(queue);
//! assert_eq!(done.load(Ordering::SeqCst), 8);
//! ```
//!
//! Queues can also be described in JSON or in the environment, see
//! [`config::TaskQueueConfig`] and [`builders::build_queues`].
//!
//! ## Utilities
//!
//! - [`util::Time`]: millisecond amounts with unit conversions and arithmetic
//! - [`util::Clock`]: monotonic stopwatch returning [`util::Time`]
//! - [`util::Id`]: forward-only typed identifier
//! - [`util::Rng`]: uniform random numbers over an inclusive range
//! - [`util::read_content`] and [`util::read_lines`]: whole-file reads

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Task queue and error types.
pub mod core;
/// Configuration models for task queues.
pub mod config;
/// Builders to construct task queues from configuration.
pub mod builders;
/// Time, clock, identifier, random and file utilities.
pub mod util;

pub use crate::core::{AppResult, QueueError, TaskQueue, UtilError, UtilResult};
