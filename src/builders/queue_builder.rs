//! Builders to construct named task queues from configuration.

use std::collections::HashMap;

use tracing::debug;

use crate::config::UtilConfig;
use crate::core::{QueueError, TaskQueue};

/// Build one [`TaskQueue`] per entry of `cfg.queues`.
///
/// # Errors
///
/// Returns `QueueError::InvalidConfig` if the configuration is invalid, or the
/// first construction failure. Queues built before a failure are shut down
/// when the partial map is dropped.
pub fn build_queues(cfg: &UtilConfig) -> Result<HashMap<String, TaskQueue>, QueueError> {
    cfg.validate()
        .map_err(|e| QueueError::InvalidConfig(format!("config invalid: {e}")))?;

    let mut queues = HashMap::with_capacity(cfg.queues.len());
    for (name, queue_cfg) in &cfg.queues {
        let queue = TaskQueue::new(queue_cfg.clone())?;
        debug!(queue = %name, worker_count = queue.worker_count(), "Built task queue");
        queues.insert(name.clone(), queue);
    }

    Ok(queues)
}
