//! Tests for builder modules

use std::collections::HashMap;

use xrn_util::builders::build_queues;
use xrn_util::config::{TaskQueueConfig, UtilConfig};
use xrn_util::QueueError;

#[test]
fn test_build_queues_from_json() {
    let config = UtilConfig::from_json_str(
        r#"{
            "queues": {
                "io": { "worker_count": 1, "thread_name_prefix": "io" },
                "inline": { "worker_count": 0 }
            }
        }"#,
    )
    .unwrap();

    let queues = build_queues(&config).unwrap();
    assert_eq!(queues.len(), 2);
    assert_eq!(queues["io"].worker_count(), 1);
    assert_eq!(queues["io"].config().thread_name_prefix, "io");
    assert_eq!(queues["inline"].worker_count(), 0);
}

#[test]
fn test_built_queue_runs_tasks() {
    let mut queues = HashMap::new();
    queues.insert(
        "inline".to_string(),
        TaskQueueConfig::new().with_worker_count(0),
    );
    let queues = build_queues(&UtilConfig { queues }).unwrap();

    let (tx, rx) = crossbeam_channel::bounded(1);
    queues["inline"].submit(move || tx.send(7).unwrap());
    assert!(queues["inline"].run_once());
    assert_eq!(rx.try_recv().unwrap(), 7);
}

#[test]
fn test_build_queues_rejects_empty_config() {
    let err = build_queues(&UtilConfig::default()).unwrap_err();
    assert!(matches!(err, QueueError::InvalidConfig(_)));
}

#[test]
fn test_build_queues_rejects_invalid_queue() {
    let mut queues = HashMap::new();
    queues.insert(
        "bad".to_string(),
        TaskQueueConfig::new().with_thread_stack_size(0),
    );
    let err = build_queues(&UtilConfig { queues }).unwrap_err();
    assert!(err.to_string().contains("bad"));
}
