//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use store_shared::time::{millis_to_rfc3339, now_millis};

use super::error::ValueObjectError;

/// Maximum number of characters allowed in a product name
pub const PRODUCT_NAME_MAX_CHARS: usize = 255;

/// Product identifier value object.
///
/// Wraps a UUID. Identifiers are generated by `ProductIdFactory` on creation;
/// parsing is only used to translate caller-supplied lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a ProductId from its textual (hyphenated or simple) form.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::ProductIdInvalidFormat` if `value` is not a UUID
    pub fn parse(value: &str) -> Result<Self, ValueObjectError> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| ValueObjectError::ProductIdInvalidFormat(value.to_string()))
    }

    /// Get the inner UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product name value object.
///
/// Must contain at least one non-whitespace character. The text is kept
/// exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductName(String);

impl ProductName {
    /// Create a new ProductName.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::ProductNameEmpty` for blank input and
    /// `ValueObjectError::ProductNameTooLong` above `PRODUCT_NAME_MAX_CHARS`
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        if name.trim().is_empty() {
            return Err(ValueObjectError::ProductNameEmpty);
        }
        let len = name.chars().count();
        if len > PRODUCT_NAME_MAX_CHARS {
            return Err(ValueObjectError::ProductNameTooLong {
                max: PRODUCT_NAME_MAX_CHARS,
                actual: len,
            });
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Price value object.
///
/// Fixed-point decimal; the scale supplied by the caller is preserved so
/// `7.500` round-trips as `7.500`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Create a new Price.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::PriceNegative` for values below zero
    pub fn new(value: Decimal) -> Result<Self, ValueObjectError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ValueObjectError::PriceNegative(value));
        }
        Ok(Self(value))
    }

    /// Get the inner decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp from Unix milliseconds.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Current time.
    pub fn now() -> Self {
        Self(now_millis())
    }

    /// Format as an RFC 3339 string (UTC).
    pub fn to_rfc3339(&self) -> String {
        millis_to_rfc3339(self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_product_id_parse_success() {
        // テスト項目: UUID 文字列から ProductId を作成できる
        // given (前提条件):
        let raw = "1e4f214e-85f7-461a-89d0-a751a32e3bb9";

        // when (操作):
        let result = ProductId::parse(raw);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().to_string(), raw);
    }

    #[test]
    fn test_product_id_parse_invalid_fails() {
        // テスト項目: UUID 形式でない文字列は ProductId にできない
        // when (操作):
        let result = ProductId::parse("not-a-uuid");

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::ProductIdInvalidFormat("not-a-uuid".to_string())
        );
    }

    #[test]
    fn test_product_name_new_success() {
        // テスト項目: 有効な商品名を作成でき、値がそのまま保持される
        // when (操作):
        let result = ProductName::new("Iphone 14 Pro Max".to_string());

        // then (期待する結果):
        assert_eq!(result.unwrap().as_str(), "Iphone 14 Pro Max");
    }

    #[test]
    fn test_product_name_blank_fails() {
        // テスト項目: 空白のみの商品名は作成できない
        // given (前提条件):
        let names = ["".to_string(), "   ".to_string()];

        for name in names {
            // when (操作):
            let result = ProductName::new(name);

            // then (期待する結果):
            assert_eq!(result.unwrap_err(), ValueObjectError::ProductNameEmpty);
        }
    }

    #[test]
    fn test_product_name_too_long_fails() {
        // テスト項目: 256 文字以上の商品名は作成できない
        // given (前提条件):
        let name = "a".repeat(PRODUCT_NAME_MAX_CHARS + 1);

        // when (操作):
        let result = ProductName::new(name);

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::ProductNameTooLong {
                max: 255,
                actual: 256
            }
        );
    }

    #[test]
    fn test_price_keeps_scale() {
        // テスト項目: 価格の小数点以下の桁数が保持される
        // given (前提条件):
        let value = Decimal::from_str("7.500").unwrap();

        // when (操作):
        let price = Price::new(value).unwrap();

        // then (期待する結果):
        assert_eq!(price.value().scale(), 3);
        assert_eq!(price.to_string(), "7.500");
    }

    #[test]
    fn test_price_negative_fails() {
        // テスト項目: 負の価格は作成できない
        // given (前提条件):
        let value = Decimal::from_str("-0.01").unwrap();

        // when (操作):
        let result = Price::new(value);

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ValueObjectError::PriceNegative(value));
    }

    #[test]
    fn test_price_zero_is_allowed() {
        // テスト項目: 0 円（負のゼロを含む）は有効な価格
        assert!(Price::new(Decimal::ZERO).is_ok());
        assert!(Price::new(Decimal::from_str("-0.00").unwrap()).is_ok());
    }

    #[test]
    fn test_timestamp_ordering() {
        // テスト項目: タイムスタンプは順序付けできる
        // given (前提条件):
        let ts1 = Timestamp::new(1000);
        let ts2 = Timestamp::new(2000);

        // then (期待する結果):
        assert!(ts1 < ts2);
        assert_eq!(ts1.to_rfc3339(), "1970-01-01T00:00:01.000Z");
    }
}
