//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! 呼び出し元から入力 DTO を受け取り、Domain 層と Repository を操作して
//! 出力 DTO（プロジェクション）を返します。

pub mod dto;
pub mod error;
pub mod product;

pub use dto::{ProductIn, ProductOut, ProductQuery, ProductUpdate, ProductUpdateOut};
pub use error::UseCaseError;
pub use product::ProductUseCase;
