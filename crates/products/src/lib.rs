//! Products module.
//!
//! Catalog rows, the fixed product column layout and the archive rule,
//! implemented purely as deterministic logic (no IO).

pub mod archive;
pub mod layout;
pub mod product;

pub use archive::{ArchiveOutcome, ArchivePolicy};
pub use layout::{PRODUCT_COLUMN_COUNT, ProductColumn};
pub use product::{ProductRecord, ProductStatus, Tags};
