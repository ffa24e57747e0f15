//! Domain factories for creating domain entities and value objects.

use uuid::Uuid;

use super::ProductId;

/// Factory for generating ProductId instances.
///
/// Identifiers are only ever minted here, on the creation path; callers
/// never supply the id of a new product.
pub struct ProductIdFactory;

impl ProductIdFactory {
    /// Generate a new ProductId with a random UUID v4.
    pub fn generate() -> ProductId {
        ProductId::from_uuid(Uuid::new_v4())
    }
}
