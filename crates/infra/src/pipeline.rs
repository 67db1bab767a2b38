//! Archive pipeline: Loader → Joiner → Filter → Serializer.
//!
//! The pipeline takes its parameters as a [`RunConfig`] and never prompts; how
//! the configuration was obtained is the caller's concern. Any record error
//! aborts the run before the output file is touched.

use std::path::Path;

use tracing::{debug, info, instrument};

use archiver_core::ArchiverResult;
use archiver_inventory::{InventoryIndex, InventoryRecord, SalesChannel, SalesChannels};
use archiver_products::{ArchivePolicy, ProductRecord};

use crate::table::{self, Table};

/// Parameters of one archive run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub policy: ArchivePolicy,
    /// Zero-based position in [`Exports::sales_channels`].
    pub channel: usize,
}

/// Counters describing a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub products_read: usize,
    pub inventory_rows: usize,
    pub channel: SalesChannel,
    pub archived: usize,
    pub duplicates_skipped: usize,
}

/// Output of the pipeline, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRun {
    raw_header: Vec<u8>,
    archived: Vec<ProductRecord>,
    report: RunReport,
}

impl ArchiveRun {
    pub fn report(&self) -> &RunReport {
        &self.report
    }

    pub fn archived(&self) -> &[ProductRecord] {
        &self.archived
    }

    /// Full-width output rows in filter order.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.archived.iter().map(ProductRecord::to_row).collect()
    }

    /// Create `path` with the product header and the archived rows.
    #[instrument(skip(self), fields(rows = self.archived.len()), err)]
    pub fn write(&self, path: &Path) -> ArchiverResult<()> {
        table::write_file(path, &self.raw_header, &self.rows())?;
        info!(path = %path.display(), rows = self.archived.len(), "output written");
        Ok(())
    }
}

/// The two exports, loaded.
#[derive(Debug, Clone)]
pub struct Exports {
    products: Table,
    inventory: Table,
}

impl Exports {
    pub fn new(products: Table, inventory: Table) -> Self {
        Self {
            products,
            inventory,
        }
    }

    /// Read both export files fully into memory.
    #[instrument(err)]
    pub fn load(product_path: &Path, inventory_path: &Path) -> ArchiverResult<Self> {
        let products = Table::read(product_path, "product export")?;
        let inventory = Table::read(inventory_path, "inventory export")?;
        info!(
            products = products.rows().len(),
            inventory = inventory.rows().len(),
            "exports loaded"
        );
        Ok(Self::new(products, inventory))
    }

    pub fn products(&self) -> &Table {
        &self.products
    }

    pub fn inventory(&self) -> &Table {
        &self.inventory
    }

    /// Channels offered by the inventory header.
    pub fn sales_channels(&self) -> SalesChannels {
        SalesChannels::from_header(self.inventory.header())
    }

    fn product_records(&self) -> ArchiverResult<Vec<ProductRecord>> {
        self.products
            .rows()
            .iter()
            .map(|row| ProductRecord::from_row(&row.cells, row.line))
            .collect()
    }

    fn inventory_records(&self) -> ArchiverResult<Vec<InventoryRecord>> {
        self.inventory
            .rows()
            .iter()
            .map(|row| InventoryRecord::from_row(&row.cells, row.line))
            .collect()
    }

    /// Run the pipeline in memory.
    #[instrument(skip_all, fields(channel = config.channel, min_stock = config.policy.min_stock()), err)]
    pub fn archive(&self, config: &RunConfig) -> ArchiverResult<ArchiveRun> {
        let channel = self.sales_channels().select(config.channel)?;
        debug!(label = channel.label(), column = channel.column(), "sales channel selected");

        let mut products = self.product_records()?;
        let index = InventoryIndex::build(self.inventory_records()?, channel.clone())?;
        index.resolve(&mut products)?;
        debug!(products = products.len(), "inventory resolved");

        let products_read = products.len();
        let outcome = config.policy.apply(products);
        info!(
            considered = outcome.considered,
            archived = outcome.archived.len(),
            duplicates_skipped = outcome.duplicates_skipped,
            "archive filter applied"
        );

        Ok(ArchiveRun {
            raw_header: self.products.raw_header().to_vec(),
            report: RunReport {
                products_read,
                inventory_rows: index.len(),
                channel,
                archived: outcome.archived.len(),
                duplicates_skipped: outcome.duplicates_skipped,
            },
            archived: outcome.archived,
        })
    }
}

/// Load, archive and write in one call.
pub fn run(
    product_path: &Path,
    inventory_path: &Path,
    output_path: &Path,
    config: &RunConfig,
) -> ArchiverResult<RunReport> {
    let exports = Exports::load(product_path, inventory_path)?;
    let run = exports.archive(config)?;
    run.write(output_path)?;
    Ok(run.report)
}
