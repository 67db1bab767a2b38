use serde::{Deserialize, Serialize};

use archiver_core::{Handle, ValueObject};

/// Separator used by the catalog export inside the tags cell.
pub const TAG_SEPARATOR: &str = ", ";

/// Product status lifecycle.
///
/// The export may carry statuses this tool does not interpret; they are kept
/// verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductStatus {
    Draft,
    Active,
    Archived,
    Other(String),
}

impl ProductStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ProductStatus::Draft => "draft",
            ProductStatus::Active => "active",
            ProductStatus::Archived => "archived",
            ProductStatus::Other(s) => s,
        }
    }
}

impl From<&str> for ProductStatus {
    fn from(value: &str) -> Self {
        match value {
            "draft" => ProductStatus::Draft,
            "active" => ProductStatus::Active,
            "archived" => ProductStatus::Archived,
            other => ProductStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for ProductStatus {
    fn from(value: String) -> Self {
        ProductStatus::from(value.as_str())
    }
}

impl From<ProductStatus> for String {
    fn from(value: ProductStatus) -> Self {
        value.as_str().to_string()
    }
}

impl core::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered tag list as exported in a single comma-space joined cell.
///
/// Duplicates are kept so that re-joining reproduces the source cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(Vec<String>);

impl Tags {
    pub fn new(tags: Vec<String>) -> Self {
        Self(tags)
    }

    /// Split an export cell. An empty cell has no tags.
    pub fn parse(cell: &str) -> Self {
        if cell.is_empty() {
            return Self::default();
        }
        Self(cell.split(TAG_SEPARATOR).map(str::to_string).collect())
    }

    /// Case-sensitive exact membership.
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn join(&self) -> String {
        self.0.join(TAG_SEPARATOR)
    }
}

impl ValueObject for Tags {}

/// One catalog row, reduced to the fields the archiver reads or writes.
///
/// `inventory` stays `None` until the row has been joined with the inventory
/// export; `status` only changes through [`ProductRecord::archive`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    handle: Handle,
    title: String,
    vendor: String,
    category: String,
    tags: Tags,
    published: String,
    price: String,
    status: ProductStatus,
    inventory: Option<u64>,
}

impl ProductRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        handle: Handle,
        title: impl Into<String>,
        vendor: impl Into<String>,
        category: impl Into<String>,
        tags: Tags,
        published: impl Into<String>,
        price: impl Into<String>,
        status: ProductStatus,
    ) -> Self {
        Self {
            handle,
            title: title.into(),
            vendor: vendor.into(),
            category: category.into(),
            tags,
            published: published.into(),
            price: price.into(),
            status,
            inventory: None,
        }
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    pub fn published(&self) -> &str {
        &self.published
    }

    /// Price exactly as exported (no numeric reformatting).
    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn status(&self) -> &ProductStatus {
        &self.status
    }

    /// Stock for the selected sales channel, once resolved.
    pub fn inventory(&self) -> Option<u64> {
        self.inventory
    }

    pub fn is_resolved(&self) -> bool {
        self.inventory.is_some()
    }

    /// Record the joined stock level.
    pub fn resolve_inventory(&mut self, stock: u64) {
        self.inventory = Some(stock);
    }

    /// Mark the product archived; every other field is left as read.
    pub fn archive(&mut self) {
        self.status = ProductStatus::Archived;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProductRecord {
        ProductRecord::new(
            Handle::from("h1"),
            "T1",
            "V",
            "Cat",
            Tags::parse("sale, clearance"),
            "true",
            "9.99",
            ProductStatus::Active,
        )
    }

    #[test]
    fn tags_split_on_comma_space() {
        let tags = Tags::parse("sale, clearance, sale");
        assert_eq!(tags.len(), 3);
        assert!(tags.contains("clearance"));
        assert_eq!(tags.join(), "sale, clearance, sale");
    }

    #[test]
    fn tag_matching_is_case_sensitive() {
        let tags = Tags::parse("Clearance");
        assert!(!tags.contains("clearance"));
        assert!(tags.contains("Clearance"));
    }

    #[test]
    fn empty_tag_cell_has_no_tags() {
        let tags = Tags::parse("");
        assert!(tags.is_empty());
        assert!(!tags.contains(""));
        assert_eq!(tags.join(), "");
    }

    #[test]
    fn status_round_trips_unknown_values() {
        assert_eq!(ProductStatus::from("active"), ProductStatus::Active);
        assert_eq!(
            ProductStatus::from("Pending review"),
            ProductStatus::Other("Pending review".to_string())
        );
        assert_eq!(ProductStatus::from("Pending review").as_str(), "Pending review");

        let json = serde_json::to_string(&ProductStatus::Archived).unwrap();
        assert_eq!(json, "\"archived\"");
    }

    #[test]
    fn new_product_is_unresolved() {
        let product = sample();
        assert!(!product.is_resolved());
        assert_eq!(product.inventory(), None);
    }

    #[test]
    fn archive_changes_only_status() {
        let mut product = sample();
        product.resolve_inventory(3);
        let before = product.clone();

        product.archive();

        assert_eq!(product.status(), &ProductStatus::Archived);
        assert_eq!(product.handle(), before.handle());
        assert_eq!(product.title(), before.title());
        assert_eq!(product.tags(), before.tags());
        assert_eq!(product.price(), before.price());
        assert_eq!(product.inventory(), Some(3));
    }
}
