//! Cart and order domain logic for the Aceites Motor Premium storefront.
//!
//! The storefront has no server-side order processing: a shopper builds a
//! cart in the page, and checkout hands a formatted order message to
//! WhatsApp for fulfillment. This crate owns the part with real
//! invariants:
//!
//! - **Cart**: line items with merge/removal semantics, totals, read-only
//!   snapshots for the view layer
//! - **Checkout**: customer record, order-message formatting, the WhatsApp
//!   deep-link channel, submit orchestration
//! - **Notices**: typed user-facing status events behind a sink seam
//!
//! Rendering, quantity steppers, and toast display stay outside; they
//! consume [`Snapshot`](cart::Snapshot)s and [`Notice`](notify::Notice)s.
//!
//! # Example
//!
//! ```rust
//! use aceites_commerce::prelude::*;
//!
//! let mut cart = CartStore::new();
//! cart.add(ProductId::new("oil-5w30"), "Aceite 5W30", Money::from_decimal(25.0), 2)?;
//! cart.add(ProductId::new("filter-x"), "Filtro X", Money::from_decimal(8.5), 1)?;
//!
//! let config = StoreConfig::default();
//! let channel = WhatsAppChannel::new(&config)?;
//! let customer = CustomerInfo::new().with_name("Juan");
//! let snapshot = submit_order(&mut cart, &customer, &channel, &config)?;
//! assert!(snapshot.is_empty());
//! # Ok::<(), aceites_commerce::CartError>(())
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod notify;

pub mod cart;
pub mod checkout;

pub use config::StoreConfig;
pub use error::CartError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StoreConfig;
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Cart
    pub use crate::cart::{CartStore, LineItem, Snapshot, SnapshotLine};

    // Checkout
    pub use crate::checkout::{
        format_order_message, submit_order, CustomerInfo, OrderChannel, WhatsAppChannel,
    };

    // Notices
    pub use crate::notify::{Notice, NoticeSink, TracingSink};
}
