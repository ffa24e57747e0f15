//! Input payloads and output projections of `ProductUseCase`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{
    NewProduct, Price, Product, ProductId, ProductName, ProductPatch, ValueObjectError,
};

/// Creation payload. The identifier is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductIn {
    pub name: String,
    pub quantity: u32,
    /// Decimal string such as `"8.500"`; JSON numbers are rejected since they lose scale
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub status: bool,
}

impl TryFrom<ProductIn> for NewProduct {
    type Error = ValueObjectError;

    fn try_from(body: ProductIn) -> Result<Self, Self::Error> {
        Ok(Self {
            name: ProductName::new(body.name)?,
            quantity: body.quantity,
            price: Price::new(body.price)?,
            status: body.status,
        })
    }
}

/// Update payload; omitted fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub quantity: Option<u32>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price: Option<Decimal>,
    pub status: Option<bool>,
}

impl TryFrom<ProductUpdate> for ProductPatch {
    type Error = ValueObjectError;

    fn try_from(body: ProductUpdate) -> Result<Self, Self::Error> {
        Ok(Self {
            name: body.name.map(ProductName::new).transpose()?,
            quantity: body.quantity,
            price: body.price.map(Price::new).transpose()?,
            status: body.status,
        })
    }
}

/// Pagination for `query`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductQuery {
    /// Number of records to skip (default: 0)
    pub skip: usize,
    /// Page size; `None` means the configured default
    pub limit: Option<usize>,
}

impl ProductQuery {
    pub fn new(skip: usize, limit: Option<usize>) -> Self {
        Self { skip, limit }
    }
}

/// Full projection of a stored product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOut {
    pub id: ProductId,
    pub name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub status: bool,
    pub created_at: String, // ISO 8601
    pub updated_at: String, // ISO 8601
}

impl From<&Product> for ProductOut {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id(),
            name: product.name().as_str().to_string(),
            quantity: product.quantity(),
            price: product.price().value(),
            status: product.status(),
            created_at: product.created_at().to_rfc3339(),
            updated_at: product.updated_at().to_rfc3339(),
        }
    }
}

/// Update-confirmation projection (no timestamps)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdateOut {
    pub id: ProductId,
    pub name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub status: bool,
}

impl From<&Product> for ProductUpdateOut {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id(),
            name: product.name().as_str().to_string(),
            quantity: product.quantity(),
            price: product.price().value(),
            status: product.status(),
        }
    }
}
