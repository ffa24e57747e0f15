//! Product store REPL.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin store-cli -- --log-level debug
//! ```

use std::sync::Arc;

use clap::Parser;
use store_cli::{Args, run_repl};
use store_core::{InMemoryProductRepository, ProductUseCase};
use store_shared::logger::setup_logger;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    let config = match args.usecase_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    let repository = Arc::new(InMemoryProductRepository::new());
    let usecase = ProductUseCase::with_config(repository, config);

    if let Err(e) = run_repl(usecase).await {
        tracing::error!("REPL error: {}", e);
        std::process::exit(1);
    }
}
