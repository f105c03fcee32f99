//! Non-negative price type using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Quantity;

/// A non-negative unit price.
///
/// Prices use [`Decimal`] so that line totals never pick up binary
/// floating-point error. Construction clamps negative amounts to zero;
/// currency formatting and rounding are left to the display layer.
///
/// Like [`crate::ProductId`], a `Price` deserializes from either a JSON
/// number or a numeric string, since both forms appear in catalog data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price, clamping negative amounts to zero.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self(amount.max(Decimal::ZERO))
    }

    /// Get the underlying amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The extended amount for a line item: `price * quantity`.
    #[must_use]
    pub fn extended(&self, quantity: Quantity) -> Decimal {
        self.0 * Decimal::from(quantity.get())
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(Decimal::from(amount))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Serialize::serialize(&self.0, serializer)
    }
}

struct PriceVisitor;

impl Visitor<'_> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a price as a number or numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Price::new(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Price::new(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Decimal::from_f64(v)
            .map(Price::new)
            .ok_or_else(|| E::custom(format!("price out of range: {v}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.trim()
            .parse::<Decimal>()
            .map(Price::new)
            .map_err(|_| E::custom(format!("invalid price string: {v:?}")))
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(Price::new(Decimal::from(-5)), Price::ZERO);
    }

    #[test]
    fn test_extended() {
        let price = Price::from(2500_u64);
        assert_eq!(price.extended(Quantity::clamp(3)), Decimal::from(7500));
    }

    #[test]
    fn test_deserialize_number_and_string() {
        let from_int: Price = serde_json::from_str("1000").unwrap();
        let from_str: Price = serde_json::from_str("\"1000\"").unwrap();
        let from_float: Price = serde_json::from_str("19.99").unwrap();
        assert_eq!(from_int, from_str);
        assert_eq!(from_float.amount(), "19.99".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_deserialize_garbage_fails() {
        assert!(serde_json::from_str::<Price>("\"free\"").is_err());
    }
}
