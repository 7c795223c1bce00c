//! Store configuration.
//!
//! # Environment Variables
//!
//! All optional; anything unset falls back to the built-in defaults.
//!
//! - `STORE_NAME` - Store display name used in the order message header
//! - `STORE_WHATSAPP_NUMBER` - Order routing number: country code + number,
//!   digits only (e.g. `584247511271`)
//! - `STORE_WHATSAPP_ENDPOINT` - WhatsApp send endpoint

use serde::{Deserialize, Serialize};

use crate::error::CartError;

/// Default WhatsApp send endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.whatsapp.com/send";

/// Static storefront configuration.
///
/// The routing number identifies the fulfillment destination. It is
/// deployment configuration, never user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store display name used in the order message header.
    pub store_name: String,
    /// WhatsApp routing number: country code + number, no `+` or spaces.
    pub whatsapp_number: String,
    /// Send endpoint for the WhatsApp deep link.
    pub endpoint: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: "Aceites Motor Premium".to_string(),
            whatsapp_number: "584247511271".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var("STORE_NAME") {
            config.store_name = value;
        }
        if let Ok(value) = std::env::var("STORE_WHATSAPP_NUMBER") {
            config.whatsapp_number = value;
        }
        if let Ok(value) = std::env::var("STORE_WHATSAPP_ENDPOINT") {
            config.endpoint = value;
        }
        config
    }

    /// Validate the configuration.
    ///
    /// The routing number must be non-empty and digits only (country code
    /// plus number, no `+` or spaces).
    pub fn validate(&self) -> Result<(), CartError> {
        if self.whatsapp_number.is_empty() {
            return Err(CartError::Config("whatsapp_number is empty".to_string()));
        }
        if !self.whatsapp_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(CartError::Config(format!(
                "whatsapp_number must be digits only, got {:?}",
                self.whatsapp_number
            )));
        }
        if self.endpoint.is_empty() {
            return Err(CartError::Config("endpoint is empty".to_string()));
        }
        Ok(())
    }
}
