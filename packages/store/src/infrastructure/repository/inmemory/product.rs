//! InMemory Product Repository 実装
//!
//! ドメイン層が定義する ProductRepository trait の具体的な実装。
//! Vec をインメモリ DB として使用し、挿入順を保持します。
//!
//! 各メソッドは 1 回のロック取得の中で完結するため、メソッド単位でアトミックです。
//! 同一 ID への並行更新は後勝ちになります。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Product, ProductFilter, ProductPatch, ProductRepository, RepositoryError, Timestamp,
};

/// インメモリ Product Repository 実装
///
/// ドメイン層の ProductRepository trait を実装します（依存性の逆転）。
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    /// 保存済みの商品（挿入順）
    products: Arc<Mutex<Vec<Product>>>,
}

impl InMemoryProductRepository {
    /// 空の InMemoryProductRepository を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存件数を取得
    pub async fn count(&self) -> usize {
        self.products.lock().await.len()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, product: Product) -> Result<Product, RepositoryError> {
        let mut products = self.products.lock().await;
        if products.iter().any(|p| p.id() == product.id()) {
            return Err(RepositoryError::DuplicateId(product.id()));
        }
        products.push(product.clone());
        tracing::debug!("Inserted product '{}' ({} stored)", product.id(), products.len());
        Ok(product)
    }

    async fn find_one(&self, filter: &ProductFilter) -> Result<Option<Product>, RepositoryError> {
        let products = self.products.lock().await;
        Ok(products.iter().find(|p| filter.matches(p)).cloned())
    }

    async fn find_many(
        &self,
        filter: &ProductFilter,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.lock().await;
        Ok(products
            .iter()
            .filter(|p| filter.matches(p))
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn update_one(
        &self,
        filter: &ProductFilter,
        patch: ProductPatch,
        updated_at: Timestamp,
    ) -> Result<Option<Product>, RepositoryError> {
        let mut products = self.products.lock().await;
        Ok(products.iter_mut().find(|p| filter.matches(p)).map(|product| {
            product.apply(patch, updated_at);
            product.clone()
        }))
    }

    async fn delete_one(&self, filter: &ProductFilter) -> Result<bool, RepositoryError> {
        let mut products = self.products.lock().await;
        match products.iter().position(|p| filter.matches(p)) {
            Some(index) => {
                products.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewProduct, Price, ProductIdFactory, ProductName};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryProductRepository の基本的な CRUD 操作
    // - 該当なしが None / false で表現されること（エラーにならないこと）
    // - find_many の skip / limit と挿入順の保持
    //
    // 【なぜこのテストが必要か】
    // - Repository は UseCase から呼ばれるデータアクセス層の中核
    // - UseCase 層が「該当なし」を NotFound に変換できるよう、信頼性を担保する
    // ========================================

    fn new_product(name: &str) -> Product {
        Product::create(
            ProductIdFactory::generate(),
            NewProduct {
                name: ProductName::new(name.to_string()).unwrap(),
                quantity: 10,
                price: Price::new(Decimal::from_str("8.500").unwrap()).unwrap(),
                status: true,
            },
            Timestamp::new(1_000),
        )
    }

    #[tokio::test]
    async fn test_insert_and_find_one() {
        // テスト項目: 挿入したレコードを ID で取得できる
        // given (前提条件):
        let repo = InMemoryProductRepository::new();
        let product = new_product("Iphone 14 Pro Max");

        // when (操作):
        let inserted = repo.insert(product.clone()).await.unwrap();
        let found = repo.find_one(&ProductFilter::Id(product.id())).await.unwrap();

        // then (期待する結果):
        assert_eq!(inserted, product);
        assert_eq!(found, Some(product));
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_insert_duplicate_id_fails() {
        // テスト項目: 同じ ID のレコードは二重に挿入できない
        // given (前提条件):
        let repo = InMemoryProductRepository::new();
        let product = new_product("Iphone 14 Pro Max");
        repo.insert(product.clone()).await.unwrap();

        // when (操作):
        let result = repo.insert(product.clone()).await;

        // then (期待する結果):
        assert_eq!(result, Err(RepositoryError::DuplicateId(product.id())));
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_find_one_absent() {
        // テスト項目: 存在しない ID の検索は None を返す
        let repo = InMemoryProductRepository::new();

        let found = repo
            .find_one(&ProductFilter::Id(ProductIdFactory::generate()))
            .await;

        assert_eq!(found, Ok(None));
    }

    #[tokio::test]
    async fn test_find_many_keeps_insertion_order_and_paginates() {
        // テスト項目: find_many は挿入順を保ち、skip / limit が適用される
        // given (前提条件):
        let repo = InMemoryProductRepository::new();
        let names = ["a", "b", "c", "d"];
        for name in names {
            repo.insert(new_product(name)).await.unwrap();
        }

        // when (操作):
        let all = repo.find_many(&ProductFilter::All, 0, 100).await.unwrap();
        let page = repo.find_many(&ProductFilter::All, 1, 2).await.unwrap();
        let beyond = repo.find_many(&ProductFilter::All, 10, 2).await.unwrap();

        // then (期待する結果):
        let all_names: Vec<_> = all.iter().map(|p| p.name().as_str()).collect();
        assert_eq!(all_names, names);
        let page_names: Vec<_> = page.iter().map(|p| p.name().as_str()).collect();
        assert_eq!(page_names, ["b", "c"]);
        assert!(beyond.is_empty());
    }

    #[tokio::test]
    async fn test_update_one_applies_patch() {
        // テスト項目: update_one はパッチを適用し、更新後のレコードを返す
        // given (前提条件):
        let repo = InMemoryProductRepository::new();
        let product = new_product("Iphone 14 Pro Max");
        repo.insert(product.clone()).await.unwrap();
        let patch = ProductPatch {
            quantity: Some(3),
            ..Default::default()
        };

        // when (操作):
        let updated = repo
            .update_one(&ProductFilter::Id(product.id()), patch, Timestamp::new(2_000))
            .await
            .unwrap()
            .unwrap();

        // then (期待する結果):
        assert_eq!(updated.quantity(), 3);
        assert_eq!(updated.updated_at(), Timestamp::new(2_000));
        let stored = repo
            .find_one(&ProductFilter::Id(product.id()))
            .await
            .unwrap();
        assert_eq!(stored, Some(updated));
    }

    #[tokio::test]
    async fn test_update_one_absent_creates_nothing() {
        // テスト項目: 存在しない ID の update_one は None を返し、レコードを作成しない
        let repo = InMemoryProductRepository::new();

        let result = repo
            .update_one(
                &ProductFilter::Id(ProductIdFactory::generate()),
                ProductPatch::default(),
                Timestamp::new(2_000),
            )
            .await;

        assert_eq!(result, Ok(None));
        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn test_delete_one() {
        // テスト項目: delete_one は削除できた場合のみ true を返す
        // given (前提条件):
        let repo = InMemoryProductRepository::new();
        let product = new_product("Iphone 14 Pro Max");
        repo.insert(product.clone()).await.unwrap();
        let filter = ProductFilter::Id(product.id());

        // when (操作):
        let first = repo.delete_one(&filter).await;
        let second = repo.delete_one(&filter).await;

        // then (期待する結果):
        assert_eq!(first, Ok(true));
        assert_eq!(second, Ok(false));
        assert_eq!(repo.find_one(&filter).await, Ok(None));
    }
}
