//! Clamped line-item quantity.

use core::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A cart line-item quantity, always within `[1, 999]`.
///
/// Every way of producing a `Quantity` coerces out-of-range or
/// non-numeric input instead of failing: values are rounded, then clamped
/// to the inclusive range, and unparseable text falls back to 1. The cart
/// engine relies on this so that no quantity mutation can ever error.
///
/// ```
/// use verdant_core::Quantity;
///
/// assert_eq!(Quantity::clamp(0).get(), 1);
/// assert_eq!(Quantity::clamp(5000).get(), 999);
/// assert_eq!(Quantity::parse("12"), Quantity::clamp(12));
/// assert_eq!(Quantity::parse("not a number"), Quantity::MIN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    /// The smallest representable quantity.
    pub const MIN: Self = Self(1);
    /// The largest representable quantity.
    pub const MAX: Self = Self(999);
    /// One unit, the default for a freshly added line item.
    pub const ONE: Self = Self(1);

    /// Clamp an integer into the valid range.
    #[must_use]
    pub const fn clamp(raw: i64) -> Self {
        let low = Self::MIN.0 as i64;
        let high = Self::MAX.0 as i64;
        let bounded = if raw < low {
            low
        } else if raw > high {
            high
        } else {
            raw
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = bounded as u32;
        Self(value)
    }

    /// Parse free-form text (e.g. a form field) into a quantity.
    ///
    /// Numeric input is rounded then clamped; anything unparseable,
    /// including NaN, becomes [`Quantity::MIN`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse::<f64>()
            .ok()
            .map_or(Self::MIN, Self::from_float)
    }

    /// Round a float and clamp it, treating NaN as the minimum.
    #[must_use]
    pub fn from_float(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::MIN;
        }
        // `as` saturates at the i64 bounds for out-of-range floats.
        #[allow(clippy::cast_possible_truncation)]
        Self::clamp(raw.round() as i64)
    }

    /// Adjust by a signed delta, clamping the result.
    ///
    /// Decreasing below 1 floors at 1; it never signals removal.
    #[must_use]
    pub fn adjusted(self, delta: i64) -> Self {
        Self::clamp(i64::from(self.0).saturating_add(delta))
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

struct QuantityVisitor;

impl Visitor<'_> for QuantityVisitor {
    type Value = Quantity;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a quantity as a number or numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Quantity::clamp(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Quantity::clamp(i64::try_from(v).unwrap_or(i64::MAX)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Quantity::from_float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Quantity::parse(v))
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(QuantityVisitor)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(Quantity::clamp(-3), Quantity::MIN);
        assert_eq!(Quantity::clamp(0), Quantity::MIN);
        assert_eq!(Quantity::clamp(1), Quantity::MIN);
        assert_eq!(Quantity::clamp(500).get(), 500);
        assert_eq!(Quantity::clamp(999), Quantity::MAX);
        assert_eq!(Quantity::clamp(1000), Quantity::MAX);
    }

    #[test]
    fn test_parse_rounds_and_clamps() {
        assert_eq!(Quantity::parse("12.7").get(), 13);
        assert_eq!(Quantity::parse(" 3 ").get(), 3);
        assert_eq!(Quantity::parse("5000"), Quantity::MAX);
        assert_eq!(Quantity::parse("-2"), Quantity::MIN);
    }

    #[test]
    fn test_parse_non_numeric_falls_back_to_min() {
        assert_eq!(Quantity::parse(""), Quantity::MIN);
        assert_eq!(Quantity::parse("abc"), Quantity::MIN);
        assert_eq!(Quantity::parse("NaN"), Quantity::MIN);
    }

    #[test]
    fn test_adjusted_floors_at_one() {
        let q = Quantity::clamp(2);
        assert_eq!(q.adjusted(-1).get(), 1);
        assert_eq!(q.adjusted(-10).get(), 1);
        assert_eq!(q.adjusted(5).get(), 7);
        assert_eq!(Quantity::MAX.adjusted(1), Quantity::MAX);
    }

    #[test]
    fn test_deserialize_coerces() {
        let q: Quantity = serde_json::from_str("0").unwrap();
        assert_eq!(q, Quantity::MIN);
        let q: Quantity = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(q.get(), 42);
        let q: Quantity = serde_json::from_str("1e9").unwrap();
        assert_eq!(q, Quantity::MAX);
    }

    #[test]
    fn test_serialize_as_number() {
        assert_eq!(
            serde_json::to_string(&Quantity::clamp(7)).unwrap(),
            "7"
        );
    }
}
