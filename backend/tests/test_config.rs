//! Tests for SchedulerConfig and scheduler construction

use mlfq_simulator_core_rs::{Scheduler, SchedulerConfig, SchedulerError};

#[test]
fn test_default_config() {
    let config = SchedulerConfig::default();
    assert_eq!(config.num_queues, 3);
    assert_eq!(config.time_quantum, 2);
    assert_eq!(config.age_threshold, 5);
}

#[test]
fn test_from_json_full() {
    let config = SchedulerConfig::from_json(
        r#"{"num_queues": 5, "time_quantum": 3, "age_threshold": 7}"#,
    )
    .unwrap();

    assert_eq!(
        config,
        SchedulerConfig {
            num_queues: 5,
            time_quantum: 3,
            age_threshold: 7,
        }
    );
}

#[test]
fn test_from_json_empty_object_uses_defaults() {
    let config = SchedulerConfig::from_json("{}").unwrap();
    assert_eq!(config, SchedulerConfig::default());
}

#[test]
fn test_from_json_rejects_unknown_field() {
    let result = SchedulerConfig::from_json(r#"{"quantum": 3}"#);
    assert!(matches!(result, Err(SchedulerError::InvalidConfig(_))));
}

#[test]
fn test_from_json_rejects_malformed() {
    let result = SchedulerConfig::from_json("not json");
    match result {
        Err(SchedulerError::InvalidConfig(msg)) => assert!(msg.contains("malformed")),
        other => panic!("Expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn test_from_json_validates_values() {
    let result = SchedulerConfig::from_json(r#"{"time_quantum": 0}"#);
    assert!(matches!(result, Err(SchedulerError::InvalidConfig(_))));

    let result = SchedulerConfig::from_json(r#"{"num_queues": 0}"#);
    assert!(matches!(result, Err(SchedulerError::InvalidConfig(_))));
}

#[test]
fn test_from_config_applies_values() {
    let config = SchedulerConfig {
        num_queues: 4,
        time_quantum: 6,
        age_threshold: 9,
    };
    let scheduler = Scheduler::from_config(&config).unwrap();

    assert_eq!(scheduler.num_queues(), 4);
    assert_eq!(scheduler.time_quantum(), 6);
    assert_eq!(scheduler.age_threshold(), 9);
}

#[test]
fn test_from_config_rejects_negative_quantum() {
    let config = SchedulerConfig {
        time_quantum: -2,
        ..Default::default()
    };

    assert!(matches!(
        Scheduler::from_config(&config),
        Err(SchedulerError::InvalidConfig(_))
    ));
}

#[test]
fn test_builder_rejects_non_positive_values() {
    assert!(Scheduler::new(2).with_time_quantum(0).is_err());
    assert!(Scheduler::new(2).with_age_threshold(-1).is_err());

    let scheduler = Scheduler::new(2)
        .with_time_quantum(3)
        .and_then(|s| s.with_age_threshold(4))
        .unwrap();
    assert_eq!(scheduler.time_quantum(), 3);
    assert_eq!(scheduler.age_threshold(), 4);
}
