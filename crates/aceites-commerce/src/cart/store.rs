//! Cart store and line item types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cart::{Snapshot, SnapshotLine};
use crate::error::CartError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::notify::{Notice, NoticeSink};

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased.
    pub id: ProductId,
    /// Product name, captured at first add and never refreshed.
    pub name: String,
    /// Unit price, fixed for the item's lifetime in the cart.
    pub unit_price: Money,
    /// Quantity, >= 1 while the item exists.
    pub quantity: i64,
    /// Line subtotal (unit_price * quantity).
    pub line_total: Money,
}

impl LineItem {
    /// Create a new line item.
    fn new(
        id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> Result<Self, CartError> {
        let line_total = unit_price.try_multiply(quantity).ok_or(CartError::Overflow)?;
        Ok(Self {
            id,
            name: name.into(),
            unit_price,
            quantity,
            line_total,
        })
    }

    /// Recompute the line total from the current quantity.
    fn update_total(&mut self) -> Result<(), CartError> {
        self.line_total = self
            .unit_price
            .try_multiply(self.quantity)
            .ok_or(CartError::Overflow)?;
        Ok(())
    }
}

/// Sole owner of cart state.
///
/// All reads and writes to the line items go through this store; the view
/// layer consumes [`Snapshot`]s and never mutates state itself. Operations
/// run to completion synchronously, so `&mut self` exclusivity is the only
/// synchronization needed.
#[derive(Default)]
pub struct CartStore {
    items: Vec<LineItem>,
    sink: Option<Box<dyn NoticeSink>>,
}

impl CartStore {
    /// Create an empty cart with no notice sink.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            sink: None,
        }
    }

    /// Attach a notice sink for user-facing status messages.
    pub fn with_sink(sink: impl NoticeSink + 'static) -> Self {
        Self {
            items: Vec::new(),
            sink: Some(Box::new(sink)),
        }
    }

    /// Add items to the cart.
    ///
    /// If an item with `id` already exists, its quantity is incremented;
    /// the stored name and unit price are left untouched. Otherwise a new
    /// line is appended at the end of the sequence.
    ///
    /// Fails with [`CartError::InvalidQuantity`] if `quantity <= 0` (state
    /// unchanged, invalid-quantity notice emitted) and with
    /// [`CartError::Overflow`] if the merged quantity or line total would
    /// exceed the representable range (state unchanged).
    pub fn add(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> Result<Snapshot, CartError> {
        let name = name.into();

        if quantity <= 0 {
            self.notify(Notice::InvalidQuantity);
            return Err(CartError::InvalidQuantity(quantity));
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == id) {
            let merged = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CartError::Overflow)?;
            existing
                .unit_price
                .try_multiply(merged)
                .ok_or(CartError::Overflow)?;

            existing.quantity = merged;
            existing.update_total()?;
        } else {
            let item = LineItem::new(id.clone(), name.clone(), unit_price, quantity)?;
            self.items.push(item);
        }

        tracing::debug!(item = %id, quantity, "item added to cart");
        self.notify(Notice::ItemAdded { name, quantity });
        Ok(self.snapshot())
    }

    /// Remove the line with matching `id`.
    ///
    /// No-op (not an error) if absent. A removal notice is emitted either
    /// way.
    pub fn remove(&mut self, id: &ProductId) -> Snapshot {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        if self.items.len() < len_before {
            tracing::debug!(item = %id, "item removed from cart");
        }
        self.notify(Notice::ItemRemoved);
        self.snapshot()
    }

    /// Cart total: sum of line totals. Pure.
    pub fn calculate_total(&self) -> Money {
        Money::saturating_sum(self.items.iter().map(|i| &i.line_total))
    }

    /// Total item count: sum of quantities. Pure.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Get number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line by product ID.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Build a read-only view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            lines: self
                .items
                .iter()
                .map(|i| SnapshotLine {
                    id: i.id.clone(),
                    name: i.name.clone(),
                    unit_price: i.unit_price,
                    quantity: i.quantity,
                    line_total: i.line_total,
                })
                .collect(),
            total: self.calculate_total(),
            item_count: self.item_count(),
        }
    }

    /// Empty the cart. Used once per successful checkout.
    pub fn clear(&mut self) -> Snapshot {
        self.items.clear();
        tracing::debug!("cart cleared");
        self.snapshot()
    }

    /// Emit a notice through the attached sink, if any.
    pub(crate) fn notify(&self, notice: Notice) {
        if let Some(sink) = &self.sink {
            sink.notify(&notice);
        }
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}
