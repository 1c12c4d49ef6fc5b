//! Scheduler configuration
//!
//! Holds the three tunables of a run. Values arrive as signed integers so
//! that non-positive input can be rejected with a clear error instead of
//! wrapping or looping forever.

use serde::{Deserialize, Serialize};

use super::engine::SchedulerError;

/// Default number of priority queues
pub const DEFAULT_NUM_QUEUES: usize = 3;

/// Default CPU units granted per slice
pub const DEFAULT_TIME_QUANTUM: i64 = 2;

/// Default aging period of the global clock
pub const DEFAULT_AGE_THRESHOLD: i64 = 5;

/// Complete scheduler configuration
///
/// Every field has a default, so a partial JSON document is accepted.
///
/// # Example
/// ```
/// use mlfq_simulator_core_rs::SchedulerConfig;
///
/// let config = SchedulerConfig::from_json(r#"{"num_queues": 4}"#).unwrap();
/// assert_eq!(config.num_queues, 4);
/// assert_eq!(config.time_quantum, 2);
/// assert_eq!(config.age_threshold, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerConfig {
    /// Number of priority levels (index 0 = highest)
    pub num_queues: usize,

    /// Maximum CPU units per slice
    pub time_quantum: i64,

    /// Aging fires when the global clock is a multiple of this value
    pub age_threshold: i64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            num_queues: DEFAULT_NUM_QUEUES,
            time_quantum: DEFAULT_TIME_QUANTUM,
            age_threshold: DEFAULT_AGE_THRESHOLD,
        }
    }
}

impl SchedulerConfig {
    /// Parse a configuration from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, SchedulerError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SchedulerError::InvalidConfig(format!("malformed config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field is in range
    pub fn validate(&self) -> Result<(), SchedulerError> {
        if self.num_queues == 0 {
            return Err(SchedulerError::InvalidConfig(
                "num_queues must be > 0".to_string(),
            ));
        }

        validate_time_quantum(self.time_quantum)?;
        validate_age_threshold(self.age_threshold)?;

        Ok(())
    }
}

pub(crate) fn validate_time_quantum(time_quantum: i64) -> Result<u64, SchedulerError> {
    positive(time_quantum).ok_or_else(|| {
        SchedulerError::InvalidConfig(format!("time_quantum must be > 0, got {}", time_quantum))
    })
}

pub(crate) fn validate_age_threshold(age_threshold: i64) -> Result<u64, SchedulerError> {
    positive(age_threshold).ok_or_else(|| {
        SchedulerError::InvalidConfig(format!("age_threshold must be > 0, got {}", age_threshold))
    })
}

fn positive(value: i64) -> Option<u64> {
    u64::try_from(value).ok().filter(|v| *v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SchedulerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_queues() {
        let config = SchedulerConfig {
            num_queues: 0,
            ..Default::default()
        };

        match config.validate() {
            Err(SchedulerError::InvalidConfig(msg)) => assert!(msg.contains("num_queues")),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_non_positive_quantum() {
        for quantum in [0, -1, i64::MIN] {
            let config = SchedulerConfig {
                time_quantum: quantum,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "quantum {} accepted", quantum);
        }
    }

    #[test]
    fn test_validate_non_positive_age_threshold() {
        let config = SchedulerConfig {
            age_threshold: 0,
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(SchedulerError::InvalidConfig(_))
        ));
    }
}
