//! Fixed column layout of the catalog export.
//!
//! The destination system imports by column position and treats a blank cell
//! as "no change", so every emitted row keeps the full width with only the
//! mapped fields filled in. The mapping is a constant; the export header is
//! never consulted for lookup.

use archiver_core::{ArchiverError, ArchiverResult, Handle};

use crate::product::{ProductRecord, ProductStatus, Tags};

/// Width of a catalog row in the reference layout.
pub const PRODUCT_COLUMN_COUNT: usize = 49;

/// Logical fields of a catalog row that the archiver reads and writes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ProductColumn {
    Handle,
    Title,
    Vendor,
    ProductCategory,
    Tags,
    Published,
    VariantPrice,
    Status,
}

impl ProductColumn {
    pub const ALL: [ProductColumn; 8] = [
        ProductColumn::Handle,
        ProductColumn::Title,
        ProductColumn::Vendor,
        ProductColumn::ProductCategory,
        ProductColumn::Tags,
        ProductColumn::Published,
        ProductColumn::VariantPrice,
        ProductColumn::Status,
    ];

    /// Zero-based column index in the export.
    pub const fn index(self) -> usize {
        match self {
            ProductColumn::Handle => 0,
            ProductColumn::Title => 1,
            ProductColumn::Vendor => 3,
            ProductColumn::ProductCategory => 4,
            ProductColumn::Tags => 6,
            ProductColumn::Published => 7,
            ProductColumn::VariantPrice => 19,
            ProductColumn::Status => 48,
        }
    }

    /// Column label used by the reference export.
    pub const fn label(self) -> &'static str {
        match self {
            ProductColumn::Handle => "Handle",
            ProductColumn::Title => "Title",
            ProductColumn::Vendor => "Vendor",
            ProductColumn::ProductCategory => "Product Category",
            ProductColumn::Tags => "Tags",
            ProductColumn::Published => "Published",
            ProductColumn::VariantPrice => "Variant Price",
            ProductColumn::Status => "Status",
        }
    }

    /// Highest index referenced by the layout.
    pub fn max_index() -> usize {
        Self::ALL.iter().map(|c| c.index()).max().unwrap_or(0)
    }
}

impl ProductRecord {
    /// Build a record from one raw catalog row.
    ///
    /// `line` is the 1-based line number in the export, used for diagnostics.
    pub fn from_row<S: AsRef<str>>(row: &[S], line: usize) -> ArchiverResult<Self> {
        let required = ProductColumn::max_index() + 1;
        if row.len() < required {
            return Err(ArchiverError::malformed(format!(
                "product row at line {line} has {} column(s), expected at least {required}",
                row.len()
            )));
        }

        let cell = |column: ProductColumn| row[column.index()].as_ref();

        Ok(ProductRecord::new(
            Handle::from(cell(ProductColumn::Handle)),
            cell(ProductColumn::Title),
            cell(ProductColumn::Vendor),
            cell(ProductColumn::ProductCategory),
            Tags::parse(cell(ProductColumn::Tags)),
            cell(ProductColumn::Published),
            cell(ProductColumn::VariantPrice),
            ProductStatus::from(cell(ProductColumn::Status)),
        ))
    }

    /// Value written to `column` when the record is serialized.
    pub fn field(&self, column: ProductColumn) -> String {
        match column {
            ProductColumn::Handle => self.handle().to_string(),
            ProductColumn::Title => self.title().to_string(),
            ProductColumn::Vendor => self.vendor().to_string(),
            ProductColumn::ProductCategory => self.category().to_string(),
            ProductColumn::Tags => self.tags().join(),
            ProductColumn::Published => self.published().to_string(),
            ProductColumn::VariantPrice => self.price().to_string(),
            ProductColumn::Status => self.status().to_string(),
        }
    }

    /// Project the record into a full-width row; unmapped columns stay blank.
    pub fn to_row(&self) -> Vec<String> {
        let mut row = vec![String::new(); PRODUCT_COLUMN_COUNT];
        for column in ProductColumn::ALL {
            row[column.index()] = self.field(column);
        }
        row
    }
}
