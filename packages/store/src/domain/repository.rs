//! Repository trait for product persistence.
//!
//! The usecase layer depends on this trait only; concrete stores live in
//! `infrastructure::repository` (dependency inversion).

use std::fmt;

use async_trait::async_trait;

use super::{Product, ProductId, ProductPatch, RepositoryError, Timestamp};

/// Selection criteria understood by every `ProductRepository`.
///
/// Only single-field equality on `id` is supported, plus the match-all filter
/// used for listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductFilter {
    /// Matches every stored product
    All,
    /// Matches the product with this id
    Id(ProductId),
}

impl ProductFilter {
    /// Whether `product` satisfies the filter
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Id(id) => product.id() == *id,
        }
    }
}

impl fmt::Display for ProductFilter {
    /// `Id` renders as the bare identifier so it can be embedded in messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "*"),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

/// Product persistence contract.
///
/// "Absent" is reported as `Ok(None)` (or `Ok(false)` for deletion), never as
/// an error; `RepositoryError` is reserved for store-level failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new record and return it as stored
    async fn insert(&self, product: Product) -> Result<Product, RepositoryError>;

    /// Fetch the first record matching `filter`
    async fn find_one(&self, filter: &ProductFilter) -> Result<Option<Product>, RepositoryError>;

    /// Fetch up to `limit` records matching `filter`, after skipping `skip` of them
    async fn find_many(
        &self,
        filter: &ProductFilter,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Product>, RepositoryError>;

    /// Apply `patch` to the first record matching `filter` and return the updated record
    async fn update_one(
        &self,
        filter: &ProductFilter,
        patch: ProductPatch,
        updated_at: Timestamp,
    ) -> Result<Option<Product>, RepositoryError>;

    /// Remove the first record matching `filter`; `true` if one was removed
    async fn delete_one(&self, filter: &ProductFilter) -> Result<bool, RepositoryError>;
}
