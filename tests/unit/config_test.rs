//! Tests for configuration validation

use std::collections::HashMap;

use xrn_util::config::{ShutdownPolicy, TaskQueueConfig, UtilConfig};

fn queue_config(workers: usize) -> TaskQueueConfig {
    TaskQueueConfig::new()
        .with_worker_count(workers)
        .with_thread_name_prefix("test")
}

#[test]
fn test_queue_config_defaults() {
    let cfg = TaskQueueConfig::default();
    assert_eq!(cfg.worker_count, num_cpus::get());
    assert_eq!(cfg.thread_name_prefix, "xrn-worker");
    assert_eq!(cfg.thread_stack_size, None);
    assert_eq!(cfg.shutdown_policy, ShutdownPolicy::Drain);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_queue_config_zero_workers_is_valid() {
    assert!(queue_config(0).validate().is_ok());
}

#[test]
fn test_queue_config_invalid_prefix() {
    assert!(queue_config(1).with_thread_name_prefix("").validate().is_err());
    assert!(queue_config(1).with_thread_name_prefix("   ").validate().is_err());
    assert!(queue_config(1).with_thread_name_prefix("a\0b").validate().is_err());
}

#[test]
fn test_queue_config_invalid_stack_size() {
    assert!(queue_config(1).with_thread_stack_size(0).validate().is_err());
    assert!(queue_config(1).with_thread_stack_size(256 * 1024).validate().is_ok());
}

#[test]
fn test_queue_config_from_json_fills_defaults() {
    let cfg = TaskQueueConfig::from_json_str(r#"{ "worker_count": 3, "shutdown_policy": "discard" }"#)
        .unwrap();
    assert_eq!(cfg.worker_count, 3);
    assert_eq!(cfg.shutdown_policy, ShutdownPolicy::Discard);
    assert_eq!(cfg.thread_name_prefix, "xrn-worker");
}

#[test]
fn test_queue_config_from_json_rejects_invalid() {
    assert!(TaskQueueConfig::from_json_str(r#"{ "thread_name_prefix": "" }"#).is_err());
    assert!(TaskQueueConfig::from_json_str(r#"{ "worker_count": -1 }"#).is_err());
    assert!(TaskQueueConfig::from_json_str("not json").is_err());
}

#[test]
fn test_shutdown_policy_from_str() {
    assert_eq!("drain".parse::<ShutdownPolicy>(), Ok(ShutdownPolicy::Drain));
    assert_eq!(" Discard ".parse::<ShutdownPolicy>(), Ok(ShutdownPolicy::Discard));
    assert!("abort".parse::<ShutdownPolicy>().is_err());
}

#[test]
fn test_util_config_validation() {
    let mut queues = HashMap::new();
    queues.insert("io".to_string(), queue_config(2));
    let config = UtilConfig { queues };
    assert!(config.validate().is_ok());
}

#[test]
fn test_util_config_empty_queues() {
    let config = UtilConfig {
        queues: HashMap::new(),
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_util_config_names_invalid_queue() {
    let mut queues = HashMap::new();
    queues.insert("broken".to_string(), queue_config(1).with_thread_name_prefix(""));
    let err = UtilConfig { queues }.validate().unwrap_err();
    assert!(err.contains("broken"));
}

#[test]
fn test_util_config_from_json() {
    let json = r#"{
        "queues": {
            "io": {
                "worker_count": 2,
                "thread_name_prefix": "io",
                "shutdown_policy": "drain"
            },
            "compute": {
                "worker_count": 4,
                "thread_stack_size": 1048576
            }
        }
    }"#;

    let config = UtilConfig::from_json_str(json).unwrap();
    assert_eq!(config.queues.len(), 2);
    assert_eq!(config.queues["compute"].thread_stack_size, Some(1_048_576));
}

#[test]
fn test_config_serde_roundtrip_keeps_policy() {
    let cfg = queue_config(2).with_shutdown_policy(ShutdownPolicy::Discard);
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains(r#""shutdown_policy":"discard""#));
    assert_eq!(TaskQueueConfig::from_json_str(&json).unwrap(), cfg);
}
