//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::{ProductFilter, RepositoryError, ValueObjectError};

/// Errors returned by `ProductUseCase`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UseCaseError {
    /// No record matched the lookup. `filter` is the literal searched-for value.
    #[error("{entity} not found with filter: {filter}")]
    NotFound {
        entity: &'static str,
        filter: String,
    },

    /// The input payload failed domain validation
    #[error(transparent)]
    InvalidInput(#[from] ValueObjectError),

    /// The requested page size is outside `1..=max`
    #[error("limit must be between 1 and {max} (got {limit})")]
    InvalidPagination { limit: usize, max: usize },

    /// Store-level failure, passed through untranslated
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    pub fn not_found(entity: &'static str, filter: &ProductFilter) -> Self {
        Self::NotFound {
            entity,
            filter: filter.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
