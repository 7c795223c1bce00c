//! User-facing notices emitted by cart operations.
//!
//! The cart reports short-lived status messages (added, removed, rejected,
//! order sent) through a fire-and-forget sink. How a notice is displayed
//! and dismissed is the presentation layer's business.

use serde::Serialize;
use std::fmt;

/// A short-lived status notice for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// Items were added to the cart.
    ItemAdded { name: String, quantity: i64 },
    /// An item was removed from the cart.
    ItemRemoved,
    /// An add was rejected because the selected quantity was not positive.
    InvalidQuantity,
    /// Checkout was attempted on an empty cart.
    EmptyCart,
    /// The order was handed off to the fulfillment channel.
    OrderSent,
}

impl Notice {
    /// Display text shown to the shopper.
    pub fn text(&self) -> String {
        match self {
            Notice::ItemAdded { name, quantity } => {
                format!("\u{2714} {quantity} {name} a\u{f1}adido(s) al carrito")
            }
            Notice::ItemRemoved => "\u{1f5d1}\u{fe0f} Producto eliminado del carrito".to_string(),
            Notice::InvalidQuantity => "\u{26d4} Selecciona al menos 1 unidad".to_string(),
            Notice::EmptyCart => "\u{1f6d2} Tu carrito est\u{e1} vac\u{ed}o".to_string(),
            Notice::OrderSent => "\u{2705} Pedido enviado con \u{e9}xito".to_string(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Fire-and-forget sink for notices.
///
/// Implementations must not fail and must not block; the cart never waits
/// on a notice being shown.
pub trait NoticeSink {
    /// Deliver a notice for display.
    fn notify(&self, notice: &Notice);
}

/// Sink that logs notices through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NoticeSink for TracingSink {
    fn notify(&self, notice: &Notice) {
        tracing::info!(notice = %notice, "cart notice");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_added_text() {
        let notice = Notice::ItemAdded {
            name: "Aceite 5W30".to_string(),
            quantity: 2,
        };
        assert_eq!(notice.text(), "\u{2714} 2 Aceite 5W30 a\u{f1}adido(s) al carrito");
    }

    #[test]
    fn test_static_texts() {
        assert_eq!(
            Notice::InvalidQuantity.text(),
            "\u{26d4} Selecciona al menos 1 unidad"
        );
        assert_eq!(Notice::EmptyCart.text(), "\u{1f6d2} Tu carrito est\u{e1} vac\u{ed}o");
        assert_eq!(Notice::OrderSent.text(), "\u{2705} Pedido enviado con \u{e9}xito");
    }

    #[test]
    fn test_notice_serializes_tagged() {
        let notice = Notice::ItemRemoved;
        let json = serde_json::to_value(&notice).unwrap();
        assert_eq!(json["kind"], "item_removed");
    }
}
