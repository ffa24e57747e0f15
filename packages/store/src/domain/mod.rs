//! Domain layer for the product store.
//!
//! This module contains business rules that are independent of
//! data transfer objects (DTOs) and storage concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use entity::{NewProduct, Product, ProductPatch};
pub use error::{RepositoryError, ValueObjectError};
pub use factory::ProductIdFactory;
pub use repository::{ProductFilter, ProductRepository};
pub use value_object::{Price, ProductId, ProductName, Timestamp};
