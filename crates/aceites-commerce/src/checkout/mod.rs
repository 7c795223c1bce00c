//! Checkout module.
//!
//! Contains the customer record, order-message formatting, the order
//! submission channel, and the checkout orchestration.

mod channel;
mod customer;
mod flow;
mod message;

pub use channel::{OrderChannel, WhatsAppChannel};
pub use customer::CustomerInfo;
pub use flow::submit_order;
pub use message::format_order_message;
