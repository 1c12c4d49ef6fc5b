//! Tests for Process model

use mlfq_simulator_core_rs::{Process, ProcessError};

#[test]
fn test_process_new() {
    let process = Process::new(1, 2, 7).unwrap();

    assert_eq!(process.id(), 1);
    assert_eq!(process.priority(), 2);
    assert_eq!(process.burst_time(), 7);
    assert_eq!(process.remaining_time(), 7);
    assert_eq!(process.wait_time(), 0);
    assert_eq!(process.completion_time(), None);
    assert!(!process.is_finished());
}

#[test]
fn test_negative_burst_rejected() {
    let result = Process::new(4, 0, -1);

    assert_eq!(
        result,
        Err(ProcessError::NegativeBurstTime {
            pid: 4,
            burst_time: -1
        })
    );
}

#[test]
fn test_negative_burst_message_names_process() {
    let err = Process::new(12, 0, -5).unwrap_err();
    let msg = err.to_string();

    assert!(msg.contains("12"));
    assert!(msg.contains("-5"));
}

#[test]
fn test_zero_burst_allowed() {
    let process = Process::new(1, 0, 0).unwrap();
    assert_eq!(process.remaining_time(), 0);
    assert!(process.is_finished());
}

#[test]
fn test_duplicate_ids_allowed() {
    let a = Process::new(1, 0, 3).unwrap();
    let b = Process::new(1, 1, 5).unwrap();
    assert_eq!(a.id(), b.id());
    assert_ne!(a, b);
}

#[test]
fn test_negative_ids_are_opaque() {
    let process = Process::new(-42, 0, 1).unwrap();
    assert_eq!(process.id(), -42);
}
