//! Read-only cart snapshots.

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;
use crate::money::Money;

/// An immutable view of current cart contents plus derived totals.
///
/// This is what the view layer renders and what order formatting consumes.
/// A snapshot is an owned copy; mutating cart state goes through
/// [`CartStore`](crate::cart::CartStore) operations only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    /// Lines in insertion order.
    pub lines: Vec<SnapshotLine>,
    /// Sum of line totals.
    pub total: Money,
    /// Sum of quantities.
    pub item_count: i64,
}

impl Snapshot {
    /// Check if the snapshot has no lines.
    ///
    /// The view layer hides checkout affordances when this is true.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One line of a cart snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotLine {
    /// Product identifier.
    pub id: ProductId,
    /// Display name captured at first add.
    pub name: String,
    /// Unit price captured at first add.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Line subtotal (unit_price * quantity).
    pub line_total: Money,
}
