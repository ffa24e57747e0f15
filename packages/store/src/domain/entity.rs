//! Core domain models for the product store.

use super::value_object::{Price, ProductId, ProductName, Timestamp};

/// Validated attributes of a product that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: ProductName,
    pub quantity: u32,
    pub price: Price,
    pub status: bool,
}

/// A persisted product.
///
/// The identifier and creation time are fixed at construction; only the
/// descriptive attributes change afterwards, through `apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: ProductName,
    quantity: u32,
    price: Price,
    status: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Product {
    /// Name used in user-facing messages about this entity
    pub const ENTITY_NAME: &'static str = "Product";

    /// Build a product from validated attributes; `updated_at` starts equal to `created_at`
    pub fn create(id: ProductId, attrs: NewProduct, created_at: Timestamp) -> Self {
        Self {
            id,
            name: attrs.name,
            quantity: attrs.quantity,
            price: attrs.price,
            status: attrs.status,
            created_at,
            updated_at: created_at,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &ProductName {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn status(&self) -> bool {
        self.status
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Overwrite the fields present in `patch` and refresh `updated_at`
    pub fn apply(&mut self, patch: ProductPatch, updated_at: Timestamp) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = updated_at;
    }
}

/// Partial replacement of a product's mutable attributes.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub name: Option<ProductName>,
    pub quantity: Option<u32>,
    pub price: Option<Price>,
    pub status: Option<bool>,
}
