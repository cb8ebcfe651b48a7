//! xrn demo driver.
//!
//! Submits a batch of sleeping tasks to a [`TaskQueue`] and drives the queue
//! from the main thread with `run_once`, reporting progress on a clock.
//!
//! # Usage
//!
//! ```sh
//! RUST_LOG=debug XRN_QUEUE_WORKERS=2 xrn-demo 12
//! ```
//!
//! The optional argument is the number of tasks to submit.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context};
use tracing::info;

use xrn_util::config::TaskQueueConfig;
use xrn_util::util::{init_tracing, Clock, ClockSource, Id, IntoTime, Rng, Time};
use xrn_util::{AppResult, TaskQueue};

/// Tasks submitted when no argument is given.
const DEFAULT_TASK_COUNT: usize = 8;

/// Interval between two progress reports.
const REPORT_EVERY_MS: f32 = 250.0;

fn main() {
    if let Err(e) = run() {
        eprintln!("xrn-demo: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    init_tracing();

    let task_count = match std::env::args().nth(1) {
        Some(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("invalid task count `{raw}`"))?,
        None => DEFAULT_TASK_COUNT,
    };

    let config = TaskQueueConfig::from_env().map_err(|e| anyhow!(e))?;
    let queue = TaskQueue::new(config)?;

    let mut rng = Rng::with_range(10, 400)?;
    let mut next_id = Id::default();
    let done = Arc::new(AtomicUsize::new(0));

    for _ in 0..task_count {
        let id = next_id.increment()?;
        let sleep_ms = u64::try_from(rng.generate())?;
        let done = Arc::clone(&done);
        queue.submit(move || {
            thread::sleep(Duration::from_millis(sleep_ms));
            let worker = thread::current().name().unwrap_or("main").to_string();
            info!(task = %id, sleep_ms = sleep_ms, worker = %worker, "Task finished");
            done.fetch_add(1, Ordering::SeqCst);
        });
    }

    let mut total = Clock::new();
    let mut report = Clock::new();
    let mut ran_here = 0_usize;
    while done.load(Ordering::SeqCst) < task_count {
        if queue.run_once() {
            ran_here += 1;
        } else {
            thread::sleep(Duration::from_millis(5));
        }
        if report.has_elapsed(REPORT_EVERY_MS) {
            let since_last = lap(&mut report);
            info!(
                done = done.load(Ordering::SeqCst),
                pending = queue.pending(),
                since_last = %since_last,
                "Progress"
            );
        }
    }

    let elapsed = total.restart();
    let under_a_minute = elapsed < 60_i32.secs();
    let stats = queue.stats();
    queue.shutdown();

    info!(
        tasks = task_count,
        ran_on_main = ran_here,
        completed = stats.completed_tasks,
        elapsed = %elapsed,
        elapsed_secs = elapsed.as_secs(),
        under_a_minute = under_a_minute,
        "Demo finished"
    );

    Ok(())
}

fn lap<C: ClockSource<Scalar = f32>>(clock: &mut C) -> Time {
    clock.restart()
}
