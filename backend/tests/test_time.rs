//! Tests for TimeManager

use mlfq_simulator_core_rs::TimeManager;

#[test]
fn test_time_manager_new() {
    let time = TimeManager::new();
    assert_eq!(time.elapsed(), 0);
}

#[test]
fn test_advance_accumulates() {
    let mut time = TimeManager::new();

    time.advance(2);
    assert_eq!(time.elapsed(), 2);

    time.advance(3);
    assert_eq!(time.elapsed(), 5);
}

#[test]
fn test_zero_length_advance() {
    let mut time = TimeManager::new();
    time.advance(4);
    time.advance(0);
    assert_eq!(time.elapsed(), 4);
}

#[test]
fn test_zero_is_multiple_of_everything() {
    let time = TimeManager::new();
    for threshold in 1..10 {
        assert!(time.is_multiple_of(threshold));
    }
}

#[test]
fn test_multiple_detection() {
    let mut time = TimeManager::new();

    time.advance(4);
    assert!(!time.is_multiple_of(5));

    time.advance(1);
    assert!(time.is_multiple_of(5));

    time.advance(5);
    assert!(time.is_multiple_of(5));
    assert!(time.is_multiple_of(2));
    assert!(!time.is_multiple_of(3));
}

#[test]
fn test_clones_are_independent() {
    let mut a = TimeManager::new();
    a.advance(3);
    let mut b = a.clone();
    b.advance(3);

    assert_eq!(a.elapsed(), 3);
    assert_eq!(b.elapsed(), 6);
}

#[test]
fn test_serde_roundtrip() {
    let mut time = TimeManager::new();
    time.advance(11);

    let json = serde_json::to_string(&time).unwrap();
    let restored: TimeManager = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, time);
}
