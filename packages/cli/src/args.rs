//! Command-line arguments.

use clap::Parser;
use store_core::config::{ConfigError, DEFAULT_QUERY_LIMIT, MAX_QUERY_LIMIT, UseCaseConfig};

/// Product store REPL backed by an in-memory repository
#[derive(Debug, Parser)]
#[command(name = "store-cli", version, about)]
pub struct Args {
    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Page size for `query` when no limit is given
    #[arg(long, default_value_t = DEFAULT_QUERY_LIMIT)]
    pub default_limit: usize,

    /// Largest page size `query` accepts
    #[arg(long, default_value_t = MAX_QUERY_LIMIT)]
    pub max_limit: usize,
}

impl Args {
    /// Build the usecase configuration from the parsed flags
    pub fn usecase_config(&self) -> Result<UseCaseConfig, ConfigError> {
        UseCaseConfig::new(self.default_limit, self.max_limit)
    }
}
