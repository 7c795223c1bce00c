//! Checkout orchestration.

use crate::cart::{CartStore, Snapshot};
use crate::checkout::{format_order_message, CustomerInfo, OrderChannel};
use crate::config::StoreConfig;
use crate::error::CartError;
use crate::notify::Notice;

/// Submit the current cart as an order.
///
/// An empty cart is rejected with [`CartError::EmptyCart`] before anything
/// else happens: no message is formatted, the channel is never invoked,
/// and the cart is left untouched.
///
/// Otherwise the snapshot is read once, formatted together with the
/// customer record, and handed to the channel. The cart is cleared
/// unconditionally once the hand-off is dispatched; the channel is
/// fire-and-forget, so nothing waits on delivery confirmation. Returns the
/// (now-empty) snapshot.
pub fn submit_order(
    store: &mut CartStore,
    customer: &CustomerInfo,
    channel: &dyn OrderChannel,
    config: &StoreConfig,
) -> Result<Snapshot, CartError> {
    let snapshot = store.snapshot();
    if snapshot.is_empty() {
        store.notify(Notice::EmptyCart);
        return Err(CartError::EmptyCart);
    }

    let message = format_order_message(&snapshot, customer, &config.store_name);
    channel.dispatch(&message)?;

    let cleared = store.clear();
    store.notify(Notice::OrderSent);
    tracing::info!(
        lines = snapshot.lines.len(),
        total = %snapshot.total,
        "order submitted"
    );
    Ok(cleared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::Money;
    use std::cell::RefCell;

    /// Channel that records every dispatched message.
    #[derive(Default)]
    struct RecordingChannel {
        messages: RefCell<Vec<String>>,
    }

    impl OrderChannel for RecordingChannel {
        fn dispatch(&self, message: &str) -> Result<(), CartError> {
            self.messages.borrow_mut().push(message.to_string());
            Ok(())
        }
    }

    /// Channel whose dispatch always fails.
    struct FailingChannel;

    impl OrderChannel for FailingChannel {
        fn dispatch(&self, _message: &str) -> Result<(), CartError> {
            Err(CartError::Config("channel unavailable".to_string()))
        }
    }

    #[test]
    fn test_empty_cart_is_rejected_without_side_effects() {
        let mut cart = CartStore::new();
        let channel = RecordingChannel::default();

        let result = submit_order(
            &mut cart,
            &CustomerInfo::new(),
            &channel,
            &StoreConfig::default(),
        );

        assert!(matches!(result, Err(CartError::EmptyCart)));
        assert!(channel.messages.borrow().is_empty());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_submit_formats_dispatches_and_clears() {
        let mut cart = CartStore::new();
        cart.add(ProductId::new("filter-x"), "Filtro X", Money::new(850), 1)
            .unwrap();
        let channel = RecordingChannel::default();

        let snapshot = submit_order(
            &mut cart,
            &CustomerInfo::new().with_name("Juan"),
            &channel,
            &StoreConfig::default(),
        )
        .unwrap();

        assert!(snapshot.is_empty());
        assert!(cart.is_empty());

        let messages = channel.messages.borrow();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("Filtro X"));
        assert!(messages[0].contains("$8.50"));
        assert!(messages[0].contains("*Nombre:* Juan"));
    }

    #[test]
    fn test_failed_dispatch_leaves_cart_intact() {
        let mut cart = CartStore::new();
        cart.add(ProductId::new("filter-x"), "Filtro X", Money::new(850), 1)
            .unwrap();

        let result = submit_order(
            &mut cart,
            &CustomerInfo::new(),
            &FailingChannel,
            &StoreConfig::default(),
        );

        assert!(result.is_err());
        assert_eq!(cart.item_count(), 1);
    }
}
