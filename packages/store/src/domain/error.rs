//! Domain layer error definitions.

use rust_decimal::Decimal;
use thiserror::Error;

use super::value_object::ProductId;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ProductId invalid format error (not a valid UUID)
    #[error("ProductId must be a valid UUID (got: {0})")]
    ProductIdInvalidFormat(String),

    /// ProductName validation error
    #[error("ProductName cannot be empty")]
    ProductNameEmpty,

    /// ProductName too long error
    #[error("ProductName cannot exceed {max} characters (got {actual})")]
    ProductNameTooLong { max: usize, actual: usize },

    /// Price validation error
    #[error("Price cannot be negative (got {0})")]
    PriceNegative(Decimal),
}

/// Store-level failures reported by a `ProductRepository` implementation.
///
/// These are passed through the usecase layer untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A record with the same identifier is already stored
    #[error("Product with id {0} already exists")]
    DuplicateId(ProductId),

    /// The backing store cannot be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A record could not be encoded or decoded by the store
    #[error("Store serialization failure: {0}")]
    Serialization(String),
}
