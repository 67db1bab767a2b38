//! Infrastructure layer: export files on disk and the archive pipeline that
//! ties loading, joining, filtering and serialization together.

pub mod pipeline;
pub mod table;

pub use pipeline::{ArchiveRun, Exports, RunConfig, RunReport};
pub use table::{Table, TableRow};
