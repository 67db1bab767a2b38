use archiver_core::ValueObject;

/// Sentinel written by the inventory export for untracked stock.
pub const NOT_STOCKED: &str = "not stocked";

/// Stock level of one product in one sales channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StockLevel {
    Stocked(u64),
    NotStocked,
}

impl StockLevel {
    /// Parse an export cell: the sentinel or a non-negative integer.
    ///
    /// Returns `None` for anything else (empty cells, negatives, decimals).
    pub fn parse(cell: &str) -> Option<Self> {
        if cell == NOT_STOCKED {
            return Some(StockLevel::NotStocked);
        }
        cell.parse::<u64>().ok().map(StockLevel::Stocked)
    }

    /// Available quantity; "not stocked" counts as zero.
    pub fn quantity(self) -> u64 {
        match self {
            StockLevel::Stocked(n) => n,
            StockLevel::NotStocked => 0,
        }
    }
}

impl ValueObject for StockLevel {}
