//! Inventory module.
//!
//! Inventory export rows, sales channel selection and the handle join that
//! resolves each catalog row's stock level. Pure logic, no IO.

pub mod channel;
pub mod index;
pub mod item;
pub mod stock;

pub use channel::{CHANNEL_OFFSET, SalesChannel, SalesChannels};
pub use index::InventoryIndex;
pub use item::InventoryRecord;
pub use stock::{NOT_STOCKED, StockLevel};
