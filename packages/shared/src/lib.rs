//! Shared utilities for the product store workspace.

pub mod logger;
pub mod time;
