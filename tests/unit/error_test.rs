//! Tests for error types

use std::error::Error as _;
use std::io;

use xrn_util::core::{QueueError, UtilError};

#[test]
fn test_invalid_config_error() {
    let err = QueueError::InvalidConfig("thread_name_prefix must not be empty".to_string());
    assert_eq!(
        format!("{err}"),
        "invalid configuration: thread_name_prefix must not be empty"
    );
}

#[test]
fn test_spawn_error_keeps_source() {
    let err = QueueError::Spawn {
        worker_id: 3,
        source: io::Error::new(io::ErrorKind::OutOfMemory, "no threads left"),
    };
    assert_eq!(format!("{err}"), "failed to spawn worker 3: no threads left");
    assert!(err.source().is_some());
}

#[test]
fn test_invalid_range_error() {
    let err = UtilError::InvalidRange {
        min: "10".to_string(),
        max: "5".to_string(),
    };
    assert_eq!(format!("{err}"), "invalid range: [10, 5] is empty or not finite");
}

#[test]
fn test_id_exhausted_error() {
    let err = UtilError::IdExhausted("255".to_string());
    assert_eq!(format!("{err}"), "identifier exhausted at 255");
}

#[test]
fn test_file_error() {
    let err = UtilError::File {
        path: "data/input.txt".into(),
        source: io::Error::new(io::ErrorKind::NotFound, "not found"),
    };
    assert_eq!(format!("{err}"), "failed to read `data/input.txt`: not found");
    assert!(err.source().is_some());
}

#[test]
fn test_errors_convert_into_anyhow() {
    fn fails() -> xrn_util::AppResult<()> {
        Err(UtilError::IdExhausted("1".to_string()))?;
        Ok(())
    }
    let err = fails().unwrap_err();
    assert!(err.downcast_ref::<UtilError>().is_some());
}
