//! Order submission channel.
//!
//! The channel is an opaque sink for the formatted order text. Delivery is
//! fire-and-forget: success means the hand-off was dispatched, never that
//! the message arrived.

use crate::config::StoreConfig;
use crate::error::CartError;

/// Sink accepting a formatted order message.
pub trait OrderChannel {
    /// Hand off an order message for delivery.
    fn dispatch(&self, message: &str) -> Result<(), CartError>;
}

/// WhatsApp deep-link channel.
///
/// Builds the `{endpoint}?phone={number}&text={message}` navigation URL
/// with the order text percent-encoded (newlines and `*` emphasis markers
/// included). The surrounding shell opens the URL as a new navigation
/// target.
#[derive(Debug, Clone, PartialEq)]
pub struct WhatsAppChannel {
    endpoint: String,
    phone: String,
}

impl WhatsAppChannel {
    /// Build a channel from store configuration.
    pub fn new(config: &StoreConfig) -> Result<Self, CartError> {
        config.validate()?;
        Ok(Self {
            endpoint: config.endpoint.clone(),
            phone: config.whatsapp_number.clone(),
        })
    }

    /// The navigation URL carrying the encoded order text.
    pub fn order_url(&self, message: &str) -> String {
        format!(
            "{}?phone={}&text={}",
            self.endpoint,
            self.phone,
            urlencoding::encode(message)
        )
    }
}

impl OrderChannel for WhatsAppChannel {
    fn dispatch(&self, message: &str) -> Result<(), CartError> {
        let url = self.order_url(message);
        tracing::info!(phone = %self.phone, url_len = url.len(), "order dispatched to WhatsApp");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_url_shape() {
        let channel = WhatsAppChannel::new(&StoreConfig::default()).unwrap();
        let url = channel.order_url("*Nuevo Pedido*\ntotal $8.50");

        assert!(url.starts_with("https://api.whatsapp.com/send?phone=584247511271&text="));
        // Newlines, asterisks, and spaces all percent-encode.
        assert!(url.contains("%0A"));
        assert!(url.contains("%2A"));
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = StoreConfig {
            whatsapp_number: "not-a-number".to_string(),
            ..StoreConfig::default()
        };
        assert!(WhatsAppChannel::new(&config).is_err());
    }

    #[test]
    fn test_dispatch_is_fire_and_forget() {
        let channel = WhatsAppChannel::new(&StoreConfig::default()).unwrap();
        assert!(channel.dispatch("*Nuevo Pedido*").is_ok());
    }
}
