//! Error taxonomy shared by every pipeline stage.

use std::path::PathBuf;

use thiserror::Error;

use crate::handle::Handle;

/// Result type used across the archiver crates.
pub type ArchiverResult<T> = Result<T, ArchiverError>;

/// Archiver error.
///
/// Every variant is fatal for the run: a single bad record invalidates the
/// whole batch and no output file is produced.
#[derive(Debug, Error)]
pub enum ArchiverError {
    /// A source file is missing or unreadable.
    #[error("failed to open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A header or row could not be read, or a row is narrower than the layout.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A product handle has no row in the inventory export.
    #[error("product {handle} handle not found in the inventory export")]
    HandleNotFound { handle: Handle },

    /// A stock cell is neither a non-negative integer nor the "not stocked" sentinel.
    #[error("cannot convert inventory stock value {value:?} found with handle {handle}")]
    InventoryParse { handle: Handle, value: String },

    /// The operator supplied a value that is not an integer (threshold, channel).
    #[error("invalid operator input: {0}")]
    InvalidOperatorInput(String),

    /// The chosen sales channel index does not exist in the inventory header.
    #[error("sales channel {index} is out of range ({available} channel(s) available)")]
    ChannelOutOfRange { index: usize, available: usize },

    /// The configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ArchiverError {
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    pub fn operator_input(msg: impl Into<String>) -> Self {
        Self::InvalidOperatorInput(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for failures caused by the contents of the input exports.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedInput(_) | Self::HandleNotFound { .. } | Self::InventoryParse { .. }
        )
    }

    /// True for failures caused by operator-supplied parameters.
    pub fn is_operator_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidOperatorInput(_) | Self::ChannelOutOfRange { .. } | Self::Config(_)
        )
    }
}
