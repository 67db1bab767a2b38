//! `archiver-core` — shared building blocks for the catalog archiver.
//!
//! This crate contains **pure** primitives (no IO): the error taxonomy used by
//! every stage of the pipeline and the strongly-typed product handle.

pub mod error;
pub mod handle;
pub mod value_object;

pub use error::{ArchiverError, ArchiverResult};
pub use handle::Handle;
pub use value_object::ValueObject;
