//! In-memory repository implementations.

pub mod product;

pub use product::InMemoryProductRepository;
