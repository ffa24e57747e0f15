//! Shared fixtures for the usecase integration tests.

#![allow(dead_code)]

use std::{str::FromStr, sync::Arc};

use rust_decimal::Decimal;
use store_core::{
    InMemoryProductRepository, ProductUseCase,
    usecase::{ProductIn, ProductOut, ProductUpdate},
};

/// Identifier that is never inserted by any fixture
pub const UNKNOWN_PRODUCT_ID: &str = "1e4f214e-85f7-461a-89d0-a751a32e3bb9";

/// Usecase wired to a fresh in-memory store; the store handle is returned for inspection
pub fn product_usecase() -> (ProductUseCase, InMemoryProductRepository) {
    let repository = InMemoryProductRepository::new();
    let usecase = ProductUseCase::new(Arc::new(repository.clone()));
    (usecase, repository)
}

pub fn product_in() -> ProductIn {
    ProductIn {
        name: "Iphone 14 Pro Max".to_string(),
        quantity: 10,
        price: Decimal::from_str("8.500").unwrap(),
        status: true,
    }
}

pub fn product_up() -> ProductUpdate {
    ProductUpdate {
        price: Some(Decimal::from_str("4.500").unwrap()),
        ..Default::default()
    }
}

pub async fn product_inserted(usecase: &ProductUseCase) -> ProductOut {
    usecase.create(product_in()).await.unwrap()
}

pub async fn products_inserted(usecase: &ProductUseCase) -> Vec<ProductOut> {
    let bodies = [
        ("Iphone 11 Pro Max", "4.500"),
        ("Iphone 12 Pro Max", "5.500"),
        ("Iphone 13 Pro Max", "6.500"),
        ("Iphone 15 Pro Max", "10.500"),
    ];

    let mut inserted = Vec::with_capacity(bodies.len());
    for (name, price) in bodies {
        let body = ProductIn {
            name: name.to_string(),
            quantity: 10,
            price: Decimal::from_str(price).unwrap(),
            status: true,
        };
        inserted.push(usecase.create(body).await.unwrap());
    }
    inserted
}
