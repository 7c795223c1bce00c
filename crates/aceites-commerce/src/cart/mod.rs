//! Shopping cart module.
//!
//! Contains the cart store, line items, and read-only snapshots.

mod snapshot;
mod store;

pub use snapshot::{Snapshot, SnapshotLine};
pub use store::{CartStore, LineItem};
