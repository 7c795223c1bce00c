//! Cart error types.

use thiserror::Error;

/// Errors that can occur in cart and checkout operations.
///
/// None of these are fatal: every failure path leaves the cart unmodified
/// and is surfaced to the shopper as a short notice.
#[derive(Error, Debug)]
pub enum CartError {
    /// Add attempted with a non-positive quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Checkout attempted with no items in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Price input did not parse as a non-negative decimal.
    #[error("Malformed price: {0}")]
    MalformedPrice(String),

    /// Arithmetic overflow in a money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
