//! Request limits and engine configuration.
//!
//! Algorithm input ceilings are fixed in `stepwise_ir::limits`; what is
//! configurable here is how much the server accepts per line and per
//! batch, and how many workers run a batch.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Global engine limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineLimits {
    /// Maximum size of one request line in bytes.
    pub max_request_bytes: usize,
    /// Maximum requests in one JSON-RPC batch.
    pub max_batch_size: usize,
    /// Threads in the batch worker pool.
    pub worker_threads: usize,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            max_request_bytes: 1024 * 1024, // 1 MiB
            max_batch_size: 64,
            worker_threads: 4,
        }
    }
}

/// Server configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub limits: EngineLimits,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl EngineConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Validate a raw request line before parsing it.
pub fn validate_request_size(limits: &EngineLimits, size: usize) -> Result<(), LimitViolation> {
    if size > limits.max_request_bytes {
        return Err(LimitViolation::RequestTooLarge {
            size,
            max: limits.max_request_bytes,
        });
    }
    Ok(())
}

pub fn validate_batch_size(limits: &EngineLimits, size: usize) -> Result<(), LimitViolation> {
    if size > limits.max_batch_size {
        return Err(LimitViolation::BatchTooLarge {
            size,
            max: limits.max_batch_size,
        });
    }
    Ok(())
}

/// A limit violation error.
#[derive(Debug, Clone, PartialEq)]
pub enum LimitViolation {
    RequestTooLarge { size: usize, max: usize },
    BatchTooLarge { size: usize, max: usize },
}

impl std::fmt::Display for LimitViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequestTooLarge { size, max } => {
                write!(f, "Request too large ({size} bytes, max {max})")
            }
            Self::BatchTooLarge { size, max } => {
                write!(f, "Batch too large ({size} requests, max {max})")
            }
        }
    }
}

impl std::error::Error for LimitViolation {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = EngineLimits::default();
        assert_eq!(limits.max_request_bytes, 1_048_576);
        assert_eq!(limits.max_batch_size, 64);
        assert_eq!(limits.worker_threads, 4);
    }

    #[test]
    fn test_request_size() {
        let limits = EngineLimits {
            max_request_bytes: 1024,
            ..Default::default()
        };
        assert!(validate_request_size(&limits, 1024).is_ok());
        assert_eq!(
            validate_request_size(&limits, 2048),
            Err(LimitViolation::RequestTooLarge {
                size: 2048,
                max: 1024
            })
        );
    }

    #[test]
    fn test_batch_size() {
        let limits = EngineLimits {
            max_batch_size: 2,
            ..Default::default()
        };
        assert!(validate_batch_size(&limits, 2).is_ok());
        assert!(validate_batch_size(&limits, 3).is_err());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"limits": {"max_batch_size": 8}}"#).unwrap();
        assert_eq!(config.limits.max_batch_size, 8);
        assert_eq!(config.limits.worker_threads, 4);

        let empty: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, EngineConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = EngineConfig::load(Path::new("/nonexistent/stepwise.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_limit_violation_display() {
        let v = LimitViolation::BatchTooLarge { size: 70, max: 64 };
        assert!(v.to_string().contains("70 requests"));
    }
}
