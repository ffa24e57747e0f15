//! Interactive REPL over the product usecase.
//!
//! The REPL talks to `store_core::ProductUseCase` directly, backed by an
//! in-memory store that lives as long as the process.

pub mod args;
pub mod command;
pub mod error;
pub mod repl;

pub use args::Args;
pub use command::Command;
pub use error::CliError;
pub use repl::run_repl;
