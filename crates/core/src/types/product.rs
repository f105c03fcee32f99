//! Catalog product snapshot.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Price, ProductId};

/// The catalog fields the cart engine needs from a product.
///
/// This is a snapshot, not a live reference: the engine copies what it
/// needs at add time, so later catalog edits do not rewrite an existing
/// cart. Fields the engine does not interpret (vendor, tags, variant
/// metadata, ...) ride along in `extra` and are preserved verbatim when a
/// wishlist entry is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Create a product with just the interpreted fields.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: impl Into<Price>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            image: None,
            extra: Map::new(),
        }
    }

    /// Attach an image URI.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Convenience for tests and fixtures.
impl Default for Product {
    fn default() -> Self {
        Self::new("0", "", Price::ZERO)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_survive_roundtrip() {
        let json = r#"{"id": 12, "name": "Linen Throw", "price": 2500, "vendor": "Atelier Oru"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::from(12_i64));
        assert_eq!(product.extra.get("vendor").unwrap(), "Atelier Oru");

        let back = serde_json::to_string(&product).unwrap();
        let reparsed: Product = serde_json::from_str(&back).unwrap();
        assert_eq!(reparsed, product);
    }

    #[test]
    fn test_missing_image_defaults_to_none() {
        let product: Product =
            serde_json::from_str(r#"{"id": "a", "name": "Mug", "price": "9.50"}"#).unwrap();
        assert!(product.image.is_none());
    }
}
