//! Cart engine configuration.
//!
//! # Environment Variables
//!
//! All optional; defaults are suitable for local development.
//!
//! - `VERDANT_STORAGE_DIR` - Directory for the JSON file store (default: `.verdant`)
//! - `VERDANT_NOTIFICATION_MS` - Default notification lifetime in milliseconds (default: 3000)
//! - `VERDANT_FALLBACK_IMAGE` - Asset used when a product has no image (default: `/images/placeholder.png`)

use std::path::PathBuf;

use crate::error::ConfigError;

/// Storage key for the persisted cart collection.
pub const CART_STORAGE_KEY: &str = "cartItems";

/// Storage key for the persisted wishlist collection.
pub const WISHLIST_STORAGE_KEY: &str = "wishlistItems";

const DEFAULT_STORAGE_DIR: &str = ".verdant";
const DEFAULT_NOTIFICATION_MS: u32 = 3000;
const DEFAULT_FALLBACK_IMAGE: &str = "/images/placeholder.png";

/// Cart engine configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Storage key for cart line items.
    pub cart_key: String,
    /// Storage key for wishlist entries.
    pub wishlist_key: String,
    /// Directory used by the JSON file store.
    pub storage_dir: PathBuf,
    /// How long a notification stays visible unless dismissed.
    pub notification_duration_ms: u32,
    /// Image asset substituted when a product carries none.
    pub fallback_image: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            cart_key: CART_STORAGE_KEY.to_owned(),
            wishlist_key: WISHLIST_STORAGE_KEY.to_owned(),
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            notification_duration_ms: DEFAULT_NOTIFICATION_MS,
            fallback_image: DEFAULT_FALLBACK_IMAGE.to_owned(),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if a variable is set but
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("VERDANT_STORAGE_DIR") {
            config.storage_dir = PathBuf::from(dir);
        }

        if let Ok(raw) = std::env::var("VERDANT_NOTIFICATION_MS") {
            config.notification_duration_ms = parse_duration_ms(&raw)?;
        }

        if let Ok(image) = std::env::var("VERDANT_FALLBACK_IMAGE") {
            config.fallback_image = image;
        }

        Ok(config)
    }
}

fn parse_duration_ms(raw: &str) -> Result<u32, ConfigError> {
    raw.trim().parse::<u32>().map_err(|e| {
        ConfigError::InvalidEnvVar("VERDANT_NOTIFICATION_MS".to_owned(), e.to_string())
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CartConfig::default();
        assert_eq!(config.cart_key, "cartItems");
        assert_eq!(config.wishlist_key, "wishlistItems");
        assert_eq!(config.notification_duration_ms, 3000);
        assert_eq!(config.fallback_image, "/images/placeholder.png");
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration_ms("4500").unwrap(), 4500);
        assert!(parse_duration_ms("soon").is_err());
        assert!(parse_duration_ms("-1").is_err());
    }
}
