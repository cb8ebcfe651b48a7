//! Task queue configuration structures.

use std::collections::HashMap;
use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default prefix for worker thread names.
pub const DEFAULT_THREAD_PREFIX: &str = "xrn-worker";

/// Environment variable holding the worker count.
pub const ENV_WORKERS: &str = "XRN_QUEUE_WORKERS";
/// Environment variable holding the worker thread name prefix.
pub const ENV_THREAD_PREFIX: &str = "XRN_QUEUE_THREAD_PREFIX";
/// Environment variable holding the worker stack size in bytes.
pub const ENV_STACK_SIZE: &str = "XRN_QUEUE_STACK_SIZE";
/// Environment variable holding the shutdown policy (`drain` or `discard`).
pub const ENV_SHUTDOWN: &str = "XRN_QUEUE_SHUTDOWN";

/// What happens to tasks still queued when termination is requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShutdownPolicy {
    /// Workers keep claiming queued tasks until the queue is empty, then exit.
    #[default]
    Drain,
    /// Queued tasks are dropped without running; workers exit after the task in hand.
    Discard,
}

impl FromStr for ShutdownPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drain" => Ok(Self::Drain),
            "discard" => Ok(Self::Discard),
            other => Err(format!("unknown shutdown policy `{other}`")),
        }
    }
}

/// Configuration of a single [`TaskQueue`](crate::core::TaskQueue).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskQueueConfig {
    /// Number of background worker threads. Zero is allowed: tasks then only
    /// run through `run_once` on the calling thread.
    pub worker_count: usize,
    /// Worker threads are named `{thread_name_prefix}-{index}`.
    pub thread_name_prefix: String,
    /// Stack size for worker threads; `None` keeps the platform default.
    pub thread_stack_size: Option<usize>,
    /// Fate of queued tasks at termination.
    pub shutdown_policy: ShutdownPolicy,
}

impl Default for TaskQueueConfig {
    fn default() -> Self {
        Self {
            worker_count: num_cpus::get(),
            thread_name_prefix: DEFAULT_THREAD_PREFIX.to_string(),
            thread_stack_size: None,
            shutdown_policy: ShutdownPolicy::default(),
        }
    }
}

impl TaskQueueConfig {
    /// Default configuration: one worker per logical CPU, drain on shutdown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of worker threads.
    #[must_use]
    pub const fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    /// Set the worker thread name prefix.
    #[must_use]
    pub fn with_thread_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.thread_name_prefix = prefix.into();
        self
    }

    /// Set the worker thread stack size in bytes.
    #[must_use]
    pub const fn with_thread_stack_size(mut self, bytes: usize) -> Self {
        self.thread_stack_size = Some(bytes);
        self
    }

    /// Set the shutdown policy.
    #[must_use]
    pub const fn with_shutdown_policy(mut self, policy: ShutdownPolicy) -> Self {
        self.shutdown_policy = policy;
        self
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.thread_name_prefix.trim().is_empty() {
            return Err("thread_name_prefix must not be empty".into());
        }
        if self.thread_name_prefix.contains('\0') {
            return Err("thread_name_prefix must not contain NUL bytes".into());
        }
        if self.thread_stack_size == Some(0) {
            return Err("thread_stack_size must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse a queue configuration from a JSON string and validate it.
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns a description of the parse or validation failure.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build a configuration from the process environment, loading a `.env`
    /// file first when one exists. Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns a description of the first malformed variable, or of the
    /// validation failure.
    pub fn from_env() -> Result<Self, String> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup using the
    /// `XRN_QUEUE_*` variable names.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(ENV_WORKERS) {
            cfg.worker_count = parse_var(ENV_WORKERS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_THREAD_PREFIX) {
            cfg.thread_name_prefix = raw;
        }
        if let Some(raw) = lookup(ENV_STACK_SIZE) {
            cfg.thread_stack_size = Some(parse_var(ENV_STACK_SIZE, &raw)?);
        }
        if let Some(raw) = lookup(ENV_SHUTDOWN) {
            cfg.shutdown_policy = parse_var(ENV_SHUTDOWN, &raw)?;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| format!("{key}=`{raw}` is invalid: {e}"))
}

/// Root configuration: a set of named queues.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UtilConfig {
    /// Map of queue name to configuration.
    pub queues: HashMap<String, TaskQueueConfig>,
}

impl UtilConfig {
    /// Validate all queues and ensure at least one queue exists.
    ///
    /// # Errors
    ///
    /// Returns a description naming the offending queue.
    pub fn validate(&self) -> Result<(), String> {
        if self.queues.is_empty() {
            return Err("at least one queue must be defined".into());
        }
        for (name, queue) in &self.queues {
            queue
                .validate()
                .map_err(|e| format!("queue `{name}` invalid: {e}"))?;
        }
        Ok(())
    }

    /// Parse the root configuration from a JSON string and validate it.
    ///
    /// # Errors
    ///
    /// Returns a description of the parse or validation failure.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
