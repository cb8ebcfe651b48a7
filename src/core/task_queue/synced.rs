//! `TaskQueue` built on one mutex-guarded FIFO, one condvar and N OS threads.
//!
//! # Design
//!
//! - **Single lock**: every push, pop and length check goes through the backlog
//!   mutex, which is never held while a task runs
//! - **No polling**: idle workers sleep on the condvar until a submission or a
//!   termination request wakes them
//! - **Cooperative stop**: termination sets a flag under the lock; workers
//!   observe it between tasks, never in the middle of one
//! - **Scoped threads**: dropping the queue terminates and joins every worker

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::{Condvar, Mutex};
use tracing::{debug, info, warn};

use crate::config::{ShutdownPolicy, TaskQueueConfig};

use super::{QueueCounters, QueueError, QueueStats, QueueStatus, Task};

/// Pending tasks plus the termination flag, guarded together.
struct Backlog {
    tasks: VecDeque<Task>,
    terminated: bool,
}

/// State shared between the owning queue and its workers.
struct Shared {
    backlog: Mutex<Backlog>,
    /// Signalled on every submission and on termination.
    available: Condvar,
    counters: QueueCounters,
    policy: ShutdownPolicy,
}

impl Shared {
    fn try_take(&self) -> Option<Task> {
        self.backlog.lock().tasks.pop_front()
    }

    /// Block until a task can be claimed. Returns `None` once the worker
    /// should exit.
    fn wait_for_task(&self) -> Option<Task> {
        let mut backlog = self.backlog.lock();
        loop {
            if backlog.terminated
                && (self.policy == ShutdownPolicy::Discard || backlog.tasks.is_empty())
            {
                return None;
            }
            if let Some(task) = backlog.tasks.pop_front() {
                return Some(task);
            }
            self.available.wait(&mut backlog);
        }
    }

    fn run(&self, task: Task) {
        task();
        self.counters.completed_tasks.fetch_add(1, Ordering::Relaxed);
    }
}

/// Queue of closures executed by a fixed pool of worker threads.
///
/// Tasks run in submission order as far as claiming goes, but nothing is
/// promised about which worker (or the owning thread, through
/// [`run_once`](Self::run_once)) runs a given task. Each queued task is run at
/// most once.
///
/// A panicking task is not caught: it ends the worker running it and the pool
/// shrinks by one. See [`QueueStats::panicked_workers`].
pub struct TaskQueue {
    config: TaskQueueConfig,
    shared: Arc<Shared>,
    workers: Mutex<Vec<JoinHandle<()>>>,
}

impl TaskQueue {
    /// Create a queue and spawn `config.worker_count` worker threads.
    ///
    /// # Errors
    ///
    /// - `QueueError::InvalidConfig` if the configuration is invalid
    /// - `QueueError::Spawn` if a worker thread could not be started; workers
    ///   that did start are terminated and joined before this returns
    pub fn new(config: TaskQueueConfig) -> Result<Self, QueueError> {
        config.validate().map_err(QueueError::InvalidConfig)?;

        let shared = Arc::new(Shared {
            backlog: Mutex::new(Backlog {
                tasks: VecDeque::new(),
                terminated: false,
            }),
            available: Condvar::new(),
            counters: QueueCounters::default(),
            policy: config.shutdown_policy,
        });

        let queue = Self {
            workers: Mutex::new(Vec::with_capacity(config.worker_count)),
            config,
            shared,
        };

        for worker_id in 0..queue.config.worker_count {
            // On error `queue` drops here, which joins the workers already running.
            let worker = spawn_worker(worker_id, &queue.config, Arc::clone(&queue.shared))?;
            queue.workers.lock().push(worker);
        }

        info!(
            worker_count = queue.config.worker_count,
            shutdown_policy = ?queue.config.shutdown_policy,
            "TaskQueue initialized"
        );

        Ok(queue)
    }

    /// Create a queue with `worker_count` workers and default settings.
    ///
    /// # Errors
    ///
    /// Returns `QueueError::Spawn` if a worker thread could not be started.
    pub fn with_workers(worker_count: usize) -> Result<Self, QueueError> {
        Self::new(TaskQueueConfig::new().with_worker_count(worker_count))
    }

    /// Enqueue a task and wake one idle worker.
    ///
    /// Never fails and never waits for the task to run. Tasks submitted after
    /// [`terminate`](Self::terminate) may never run on a worker.
    pub fn submit<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let pending = {
            let mut backlog = self.shared.backlog.lock();
            backlog.tasks.push_back(Box::new(task));
            backlog.tasks.len()
        };
        self.shared.counters.submitted_tasks.fetch_add(1, Ordering::Relaxed);
        self.shared.available.notify_one();
        debug!(pending = pending, "Task submitted to queue");
    }

    /// Enqueue `task` with `args` bound to it.
    pub fn submit_with<F, A>(&self, task: F, args: A)
    where
        F: FnOnce(A) + Send + 'static,
        A: Send + 'static,
    {
        self.submit(move || task(args));
    }

    /// Claim and run one pending task on the calling thread.
    ///
    /// Returns `true` after the task completed, or `false` right away when the
    /// queue is empty. A worker may claim a task before this call sees it.
    pub fn run_once(&self) -> bool {
        let Some(task) = self.shared.try_take() else {
            return false;
        };
        self.shared.run(task);
        true
    }

    /// Run pending tasks on the calling thread until the queue is observed
    /// empty. Returns how many tasks ran here.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        while self.run_once() {
            ran += 1;
        }
        ran
    }

    /// Ask every worker to stop. Workers finish the task in hand; what happens
    /// to queued tasks depends on the [`ShutdownPolicy`]. Does not wait.
    pub fn terminate(&self) {
        let discarded = {
            let mut backlog = self.shared.backlog.lock();
            if backlog.terminated {
                return;
            }
            backlog.terminated = true;
            match self.shared.policy {
                ShutdownPolicy::Drain => VecDeque::new(),
                ShutdownPolicy::Discard => std::mem::take(&mut backlog.tasks),
            }
        };
        self.shared.available.notify_all();

        info!(
            shutdown_policy = ?self.shared.policy,
            discarded = discarded.len(),
            "TaskQueue termination requested"
        );
        drop(discarded);
    }

    /// Terminate and join every worker.
    ///
    /// A worker that ended by panicking is logged and skipped. When called from
    /// one of this queue's own workers, that worker is not joined.
    pub fn shutdown(&self) {
        self.terminate();

        let workers = std::mem::take(&mut *self.workers.lock());
        if workers.is_empty() {
            return;
        }

        let current = thread::current().id();
        let worker_count = workers.len();
        for (worker_id, worker) in workers.into_iter().enumerate() {
            if worker.thread().id() == current {
                warn!(worker_id = worker_id, "TaskQueue shut down from its own worker - not joining it");
                continue;
            }
            match worker.join() {
                Ok(()) => debug!(worker_id = worker_id, "Worker joined successfully"),
                Err(_) => warn!(worker_id = worker_id, "Worker panicked"),
            }
        }

        info!(worker_count = worker_count, "TaskQueue shut down complete");
    }

    /// Number of workers the queue was built with.
    #[must_use]
    pub const fn worker_count(&self) -> usize {
        self.config.worker_count
    }

    /// Configuration the queue was built with.
    #[must_use]
    pub const fn config(&self) -> &TaskQueueConfig {
        &self.config
    }

    /// Number of tasks waiting to be claimed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.shared.backlog.lock().tasks.len()
    }

    /// Whether termination has been requested.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.shared.backlog.lock().terminated
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn status(&self) -> QueueStatus {
        if !self.is_terminated() {
            QueueStatus::Running
        } else if self.shared.counters.live_workers.load(Ordering::Acquire) == 0 {
            QueueStatus::Stopped
        } else {
            QueueStatus::TerminationRequested
        }
    }

    /// Get current queue statistics.
    #[must_use]
    pub fn stats(&self) -> QueueStats {
        self.shared
            .counters
            .snapshot(self.config.worker_count, self.pending())
    }
}

impl fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskQueue")
            .field("config", &self.config)
            .field("pending", &self.pending())
            .field("status", &self.status())
            .finish_non_exhaustive()
    }
}

impl Drop for TaskQueue {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Keeps `live_workers` accurate however the worker thread ends.
struct WorkerGuard {
    shared: Arc<Shared>,
}

impl Drop for WorkerGuard {
    fn drop(&mut self) {
        if thread::panicking() {
            self.shared
                .counters
                .panicked_workers
                .fetch_add(1, Ordering::Relaxed);
        }
        self.shared
            .counters
            .live_workers
            .fetch_sub(1, Ordering::AcqRel);
    }
}

/// Spawn a worker thread.
fn spawn_worker(
    worker_id: usize,
    config: &TaskQueueConfig,
    shared: Arc<Shared>,
) -> Result<JoinHandle<()>, QueueError> {
    shared.counters.live_workers.fetch_add(1, Ordering::AcqRel);
    // Dropped with the closure if the spawn fails.
    let guard = WorkerGuard { shared };

    let mut builder =
        thread::Builder::new().name(format!("{}-{worker_id}", config.thread_name_prefix));
    if let Some(stack_size) = config.thread_stack_size {
        builder = builder.stack_size(stack_size);
    }

    builder
        .spawn(move || {
            let guard = guard;
            debug!(worker_id = worker_id, "Worker thread started");

            while let Some(task) = guard.shared.wait_for_task() {
                guard.shared.run(task);
            }

            debug!(worker_id = worker_id, "Worker thread exiting");
        })
        .map_err(|source| QueueError::Spawn { worker_id, source })
}
