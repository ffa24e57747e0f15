//! Product store usecase library.
//!
//! Layers, from the inside out:
//!
//! - [`domain`]: the `Product` entity, its value objects and the
//!   `ProductRepository` contract
//! - [`usecase`]: `ProductUseCase` with create/get/query/update/delete and
//!   the not-found error contract
//! - [`infrastructure`]: repository implementations (in-memory)

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod usecase;

// Re-export entry points
pub use config::UseCaseConfig;
pub use infrastructure::repository::InMemoryProductRepository;
pub use usecase::{ProductUseCase, UseCaseError};
