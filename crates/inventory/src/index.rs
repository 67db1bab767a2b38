//! Handle join between catalog rows and inventory rows.

use std::collections::HashMap;

use archiver_core::{ArchiverError, ArchiverResult, Handle};
use archiver_products::ProductRecord;

use crate::channel::SalesChannel;
use crate::item::InventoryRecord;

/// Inventory rows keyed by handle, bound to one sales channel.
///
/// When a handle appears on several inventory rows the first one wins, the
/// same row a top-to-bottom scan would find.
#[derive(Debug, Clone)]
pub struct InventoryIndex {
    channel: SalesChannel,
    records: Vec<InventoryRecord>,
    by_handle: HashMap<Handle, usize>,
}

impl InventoryIndex {
    /// Index `records` for lookups in `channel`.
    ///
    /// Fails with `MalformedInput` if any row is too narrow to carry the channel.
    pub fn build(records: Vec<InventoryRecord>, channel: SalesChannel) -> ArchiverResult<Self> {
        let mut by_handle = HashMap::with_capacity(records.len());

        for (pos, record) in records.iter().enumerate() {
            if !record.has_channel(&channel) {
                return Err(ArchiverError::malformed(format!(
                    "inventory row at line {} has no column {} ({})",
                    record.line(),
                    channel.column(),
                    channel.label()
                )));
            }
            by_handle.entry(record.handle().clone()).or_insert(pos);
        }

        Ok(Self {
            channel,
            records,
            by_handle,
        })
    }

    pub fn channel(&self) -> &SalesChannel {
        &self.channel
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, handle: &str) -> Option<&InventoryRecord> {
        self.by_handle.get(handle).map(|&pos| &self.records[pos])
    }

    /// Stock quantity for `handle` in the bound channel ("not stocked" is 0).
    pub fn quantity(&self, handle: &Handle) -> ArchiverResult<u64> {
        let record = self
            .get(handle.as_str())
            .ok_or_else(|| ArchiverError::HandleNotFound {
                handle: handle.clone(),
            })?;
        Ok(record.stock(&self.channel)?.quantity())
    }

    /// Resolve the inventory of every product, stopping at the first failure.
    pub fn resolve(&self, products: &mut [ProductRecord]) -> ArchiverResult<()> {
        for product in products.iter_mut() {
            let stock = self.quantity(product.handle())?;
            product.resolve_inventory(stock);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::SalesChannels;
    use crate::stock::NOT_STOCKED;
    use archiver_products::{ProductStatus, Tags};

    fn channels() -> SalesChannels {
        let mut header: Vec<String> = (0..crate::CHANNEL_OFFSET).map(|i| format!("c{i}")).collect();
        header.push("Shop".into());
        header.push("Warehouse".into());
        SalesChannels::from_header(&header)
    }

    fn record(handle: &str, shop: &str, warehouse: &str, line: usize) -> InventoryRecord {
        InventoryRecord::new(
            Handle::from(handle),
            vec![shop.to_string(), warehouse.to_string()],
            line,
        )
    }

    fn product(handle: &str) -> ProductRecord {
        ProductRecord::new(
            Handle::from(handle),
            "T",
            "V",
            "C",
            Tags::parse("clearance"),
            "true",
            "1.00",
            ProductStatus::Active,
        )
    }

    #[test]
    fn resolves_stock_in_selected_channel() {
        let index = InventoryIndex::build(
            vec![record("h1", "3", "10", 2), record("h2", NOT_STOCKED, "4", 3)],
            channels().select(0).unwrap(),
        )
        .unwrap();

        let mut products = vec![product("h1"), product("h2")];
        index.resolve(&mut products).unwrap();

        assert_eq!(products[0].inventory(), Some(3));
        assert_eq!(products[1].inventory(), Some(0));
    }

    #[test]
    fn first_row_wins_for_repeated_handle() {
        let index = InventoryIndex::build(
            vec![record("h1", "1", "1", 2), record("h1", "8", "8", 3)],
            channels().select(0).unwrap(),
        )
        .unwrap();
        assert_eq!(index.quantity(&Handle::from("h1")).unwrap(), 1);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn missing_handle_aborts_resolution() {
        let index = InventoryIndex::build(
            vec![record("h1", "1", "1", 2)],
            channels().select(1).unwrap(),
        )
        .unwrap();

        let mut products = vec![product("h1"), product("ghost"), product("h1")];
        match index.resolve(&mut products).unwrap_err() {
            ArchiverError::HandleNotFound { handle } => assert_eq!(handle.as_str(), "ghost"),
            other => panic!("expected HandleNotFound, got {other:?}"),
        }
    }

    #[test]
    fn handle_match_is_exact() {
        let index = InventoryIndex::build(
            vec![record("Blue-Mug", "1", "1", 2)],
            channels().select(0).unwrap(),
        )
        .unwrap();
        assert!(index.get("blue-mug").is_none());
        assert!(index.get("Blue-Mug").is_some());
    }

    #[test]
    fn bad_stock_value_aborts_resolution() {
        let index = InventoryIndex::build(
            vec![record("h1", "3", "n/a", 2)],
            channels().select(1).unwrap(),
        )
        .unwrap();

        let mut products = vec![product("h1")];
        assert!(matches!(
            index.resolve(&mut products),
            Err(ArchiverError::InventoryParse { .. })
        ));
    }

    #[test]
    fn narrow_inventory_row_fails_build() {
        let narrow = InventoryRecord::new(Handle::from("h1"), vec!["1".into()], 7);
        let err = InventoryIndex::build(vec![narrow], channels().select(1).unwrap()).unwrap_err();
        match err {
            ArchiverError::MalformedInput(msg) => assert!(msg.contains("line 7")),
            other => panic!("expected MalformedInput, got {other:?}"),
        }
    }
}
