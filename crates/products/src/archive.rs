//! Archive rule: disqualifying tag AND stock below threshold.

use std::collections::{BTreeSet, HashSet};

use archiver_core::Handle;

use crate::product::ProductRecord;

/// Operator-chosen archive parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivePolicy {
    disqualifying_tags: BTreeSet<String>,
    /// Products with strictly less stock than this are eligible.
    min_stock: i64,
}

/// Result of applying an [`ArchivePolicy`] to a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveOutcome {
    /// Archived products in input order, one per handle.
    pub archived: Vec<ProductRecord>,
    /// Number of products inspected.
    pub considered: usize,
    /// Matching rows dropped because their handle was already archived.
    pub duplicates_skipped: usize,
}

impl ArchivePolicy {
    pub fn new<I, S>(disqualifying_tags: I, min_stock: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            disqualifying_tags: disqualifying_tags.into_iter().map(Into::into).collect(),
            min_stock,
        }
    }

    pub fn disqualifying_tags(&self) -> &BTreeSet<String> {
        &self.disqualifying_tags
    }

    pub fn min_stock(&self) -> i64 {
        self.min_stock
    }

    /// True when the product carries a disqualifying tag and its resolved
    /// stock is below the threshold. Unresolved products never match.
    pub fn should_archive(&self, product: &ProductRecord) -> bool {
        let Some(stock) = product.inventory() else {
            return false;
        };
        self.is_below_threshold(stock)
            && product
                .tags()
                .iter()
                .any(|tag| self.disqualifying_tags.contains(tag))
    }

    fn is_below_threshold(&self, stock: u64) -> bool {
        // A non-positive threshold can never be undercut by a stock count.
        u64::try_from(self.min_stock).is_ok_and(|min| stock < min)
    }

    /// Archive every matching product, keeping the first row per handle.
    pub fn apply(&self, products: Vec<ProductRecord>) -> ArchiveOutcome {
        let considered = products.len();
        let mut seen: HashSet<Handle> = HashSet::new();
        let mut archived = Vec::new();
        let mut duplicates_skipped = 0;

        for mut product in products {
            if !self.should_archive(&product) {
                continue;
            }
            if !seen.insert(product.handle().clone()) {
                duplicates_skipped += 1;
                continue;
            }
            product.archive();
            archived.push(product);
        }

        ArchiveOutcome {
            archived,
            considered,
            duplicates_skipped,
        }
    }
}
