//! Usecase tuning knobs.

use serde::Deserialize;
use thiserror::Error;

/// Default page size when `query` is called without a limit
pub const DEFAULT_QUERY_LIMIT: usize = 100;

/// Largest page size `query` accepts
pub const MAX_QUERY_LIMIT: usize = 1000;

/// Invalid configuration values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be greater than zero")]
    Zero { name: &'static str },

    #[error("default_limit ({default_limit}) cannot exceed max_limit ({max_limit})")]
    DefaultAboveMax {
        default_limit: usize,
        max_limit: usize,
    },
}

/// Pagination settings for `ProductUseCase::query`.
///
/// Always satisfies `0 < default_limit <= max_limit`; every constructor,
/// deserialization included, goes through `UseCaseConfig::new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawUseCaseConfig")]
pub struct UseCaseConfig {
    default_limit: usize,
    max_limit: usize,
}

/// Unvalidated shape of `UseCaseConfig`; missing fields take the defaults
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawUseCaseConfig {
    default_limit: usize,
    max_limit: usize,
}

impl Default for RawUseCaseConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_QUERY_LIMIT,
            max_limit: MAX_QUERY_LIMIT,
        }
    }
}

impl TryFrom<RawUseCaseConfig> for UseCaseConfig {
    type Error = ConfigError;

    fn try_from(raw: RawUseCaseConfig) -> Result<Self, Self::Error> {
        Self::new(raw.default_limit, raw.max_limit)
    }
}

impl UseCaseConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a limit is zero or the default exceeds the maximum
    pub fn new(default_limit: usize, max_limit: usize) -> Result<Self, ConfigError> {
        if default_limit == 0 {
            return Err(ConfigError::Zero {
                name: "default_limit",
            });
        }
        if max_limit == 0 {
            return Err(ConfigError::Zero { name: "max_limit" });
        }
        if default_limit > max_limit {
            return Err(ConfigError::DefaultAboveMax {
                default_limit,
                max_limit,
            });
        }
        Ok(Self {
            default_limit,
            max_limit,
        })
    }

    /// Page size used when the caller gives no limit
    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Upper bound on a caller-supplied limit
    pub fn max_limit(&self) -> usize {
        self.max_limit
    }
}

impl Default for UseCaseConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_QUERY_LIMIT,
            max_limit: MAX_QUERY_LIMIT,
        }
    }
}
