//! UseCase: 商品の作成・取得・一覧・更新・削除
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ProductUseCase の create / get / query / update / delete
//! - 存在しない ID に対する NotFound エラー（get / update / delete で共通）
//!
//! ### なぜこのテストが必要か
//! - NotFound のメッセージ形式は呼び出し側が依存する契約
//! - 検索に失敗した場合に書き込みが一切行われないことを保証
//! - ストア層のエラーが変換されずに伝播することを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：各操作が Repository を呼び出し、プロジェクションを返す
//! - 異常系：存在しない ID、入力バリデーションエラー、ページサイズ超過
//! - エッジケース：検索後、更新前にレコードが削除された場合

use std::sync::Arc;

use crate::{
    config::UseCaseConfig,
    domain::{
        NewProduct, Product, ProductFilter, ProductId, ProductIdFactory, ProductPatch,
        ProductRepository, Timestamp,
    },
};

use super::{
    dto::{ProductIn, ProductOut, ProductQuery, ProductUpdate, ProductUpdateOut},
    error::UseCaseError,
};

/// 商品のユースケース
pub struct ProductUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ProductRepository>,
    /// ページネーション設定
    config: UseCaseConfig,
}

impl ProductUseCase {
    /// デフォルト設定で新しい ProductUseCase を作成
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self::with_config(repository, UseCaseConfig::default())
    }

    /// 設定を指定して新しい ProductUseCase を作成
    pub fn with_config(repository: Arc<dyn ProductRepository>, config: UseCaseConfig) -> Self {
        Self { repository, config }
    }

    pub fn config(&self) -> &UseCaseConfig {
        &self.config
    }

    /// 商品を作成
    ///
    /// ID は常にここで採番され、呼び出し側から指定されることはない。
    ///
    /// # Returns
    ///
    /// * `Ok(ProductOut)` - 保存されたレコードのプロジェクション
    /// * `Err(UseCaseError)` - 入力不正またはストア層のエラー
    pub async fn create(&self, body: ProductIn) -> Result<ProductOut, UseCaseError> {
        let attrs = NewProduct::try_from(body)?;
        let product = Product::create(ProductIdFactory::generate(), attrs, Timestamp::now());

        let stored = self.repository.insert(product).await?;
        tracing::info!("Product '{}' created", stored.id());

        Ok(ProductOut::from(&stored))
    }

    /// ID を指定して商品を 1 件取得
    ///
    /// # Returns
    ///
    /// * `Ok(ProductOut)` - 見つかったレコードのプロジェクション
    /// * `Err(UseCaseError::NotFound)` - 該当レコードなし
    pub async fn get(&self, id: ProductId) -> Result<ProductOut, UseCaseError> {
        let product = self.find_existing(&ProductFilter::Id(id)).await?;
        Ok(ProductOut::from(&product))
    }

    /// 商品の一覧を取得
    ///
    /// 該当なしは空の Vec を返し、エラーにはならない。
    /// 並び順はストアに依存する（1 回の呼び出し内では安定）。
    pub async fn query(&self, params: ProductQuery) -> Result<Vec<ProductOut>, UseCaseError> {
        let limit = self.resolve_limit(params.limit)?;
        tracing::debug!("Querying products (skip: {}, limit: {})", params.skip, limit);

        let products = self
            .repository
            .find_many(&ProductFilter::All, params.skip, limit)
            .await?;

        Ok(products.iter().map(ProductOut::from).collect())
    }

    /// 商品を更新
    ///
    /// 1. ペイロードのバリデーション
    /// 2. ID による検索（見つからなければ書き込みを行わずに NotFound）
    /// 3. パッチの適用と保存
    pub async fn update(
        &self,
        id: ProductId,
        body: ProductUpdate,
    ) -> Result<ProductUpdateOut, UseCaseError> {
        let patch = ProductPatch::try_from(body)?;
        let filter = ProductFilter::Id(id);

        self.find_existing(&filter).await?;

        // 検索と更新の間に削除された場合も同じ NotFound を返す
        let updated = self
            .repository
            .update_one(&filter, patch, Timestamp::now())
            .await?
            .ok_or_else(|| self.not_found(&filter))?;
        tracing::info!("Product '{}' updated", id);

        Ok(ProductUpdateOut::from(&updated))
    }

    /// 商品を削除
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - 削除成功
    /// * `Err(UseCaseError::NotFound)` - 該当レコードなし（副作用なし）
    pub async fn delete(&self, id: ProductId) -> Result<bool, UseCaseError> {
        let filter = ProductFilter::Id(id);

        self.find_existing(&filter).await?;

        let deleted = self.repository.delete_one(&filter).await?;
        tracing::info!("Product '{}' deleted: {}", id, deleted);

        Ok(deleted)
    }

    /// get / update / delete 共通の検索処理
    async fn find_existing(&self, filter: &ProductFilter) -> Result<Product, UseCaseError> {
        match self.repository.find_one(filter).await? {
            Some(product) => Ok(product),
            None => {
                let err = self.not_found(filter);
                tracing::warn!("{}", err);
                Err(err)
            }
        }
    }

    fn not_found(&self, filter: &ProductFilter) -> UseCaseError {
        UseCaseError::not_found(Product::ENTITY_NAME, filter)
    }

    fn resolve_limit(&self, limit: Option<usize>) -> Result<usize, UseCaseError> {
        match limit {
            None => Ok(self.config.default_limit()),
            Some(limit) if limit == 0 || limit > self.config.max_limit() => {
                Err(UseCaseError::InvalidPagination {
                    limit,
                    max: self.config.max_limit(),
                })
            }
            Some(limit) => Ok(limit),
        }
    }
}
