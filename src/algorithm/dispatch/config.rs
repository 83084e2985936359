use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What the dispatcher does with elements whose operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Fail the whole call with every failing position listed.
    #[default]
    Raise,
    /// Mark failing positions as missing and keep the rest.
    Missing,
}

/// Options for a [`Dispatcher`](super::Dispatcher).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub error_policy: ErrorPolicy,
    /// Evaluate elements on the rayon thread pool. Ignored without the `rayon` feature.
    pub parallel: bool,
    /// Minimum number of elements before parallel evaluation is used.
    pub parallel_threshold: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            error_policy: ErrorPolicy::default(),
            parallel: cfg!(feature = "rayon"),
            parallel_threshold: 1024,
        }
    }
}

impl DispatchConfig {
    /// Parse a config from JSON. Absent fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_error_policy(self, error_policy: ErrorPolicy) -> Self {
        Self {
            error_policy,
            ..self
        }
    }

    pub fn with_parallel(self, parallel: bool) -> Self {
        Self { parallel, ..self }
    }

    pub fn with_parallel_threshold(self, parallel_threshold: usize) -> Self {
        Self {
            parallel_threshold,
            ..self
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_raise() {
        assert_eq!(DispatchConfig::default().error_policy, ErrorPolicy::Raise);
    }

    #[test]
    fn partial_json() {
        let config = DispatchConfig::from_json(r#"{"error_policy": "missing"}"#).unwrap();
        assert_eq!(config.error_policy, ErrorPolicy::Missing);
        assert_eq!(config.parallel_threshold, 1024);
    }

    #[test]
    fn bad_json() {
        assert!(DispatchConfig::from_json(r#"{"error_policy": "ignore"}"#).is_err());
    }
}
