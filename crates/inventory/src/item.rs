use archiver_core::{ArchiverError, ArchiverResult, Handle};

use crate::channel::{CHANNEL_OFFSET, SalesChannel};
use crate::stock::StockLevel;

/// Column of the handle in the inventory export.
pub const HANDLE_COLUMN: usize = 0;

/// One inventory export row: a handle and its raw per-channel stock cells.
///
/// Cells are kept as text and parsed on lookup, so an unparseable value only
/// fails the run when a catalog row actually joins against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    handle: Handle,
    channel_cells: Vec<String>,
    line: usize,
}

impl InventoryRecord {
    pub fn new(handle: Handle, channel_cells: Vec<String>, line: usize) -> Self {
        Self {
            handle,
            channel_cells,
            line,
        }
    }

    /// Build a record from one raw inventory row (`line` is 1-based).
    pub fn from_row<S: AsRef<str>>(row: &[S], line: usize) -> ArchiverResult<Self> {
        let Some(handle) = row.get(HANDLE_COLUMN) else {
            return Err(ArchiverError::malformed(format!(
                "inventory row at line {line} is empty"
            )));
        };

        let channel_cells = row
            .iter()
            .skip(CHANNEL_OFFSET)
            .map(|c| c.as_ref().to_string())
            .collect();

        Ok(Self::new(Handle::from(handle.as_ref()), channel_cells, line))
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Whether the row is wide enough to carry `channel`.
    pub fn has_channel(&self, channel: &SalesChannel) -> bool {
        channel.index() < self.channel_cells.len()
    }

    /// Raw cell for `channel`, if the row is wide enough.
    pub fn cell(&self, channel: &SalesChannel) -> Option<&str> {
        self.channel_cells.get(channel.index()).map(String::as_str)
    }

    /// Parsed stock for `channel`.
    pub fn stock(&self, channel: &SalesChannel) -> ArchiverResult<StockLevel> {
        let cell = self.cell(channel).ok_or_else(|| {
            ArchiverError::malformed(format!(
                "inventory row at line {} has no column {} ({})",
                self.line,
                channel.column(),
                channel.label()
            ))
        })?;

        StockLevel::parse(cell).ok_or_else(|| ArchiverError::InventoryParse {
            handle: self.handle.clone(),
            value: cell.to_string(),
        })
    }
}
