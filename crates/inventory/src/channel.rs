//! Sales channel selection.
//!
//! Channels are the inventory header labels from [`CHANNEL_OFFSET`] through
//! the last column. The operator picks one by zero-based position.

use archiver_core::{ArchiverError, ArchiverResult};

/// Column of the first sales channel in the inventory export.
pub const CHANNEL_OFFSET: usize = 11;

/// A selected sales channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesChannel {
    index: usize,
    label: String,
}

impl SalesChannel {
    /// Position in the channel list, as chosen by the operator.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Absolute column in the inventory export.
    pub fn column(&self) -> usize {
        CHANNEL_OFFSET + self.index
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The channel labels offered by an inventory header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesChannels {
    labels: Vec<String>,
}

impl SalesChannels {
    pub fn from_header<S: AsRef<str>>(header: &[S]) -> Self {
        Self {
            labels: header
                .iter()
                .skip(CHANNEL_OFFSET)
                .map(|s| s.as_ref().to_string())
                .collect(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Select a channel by zero-based position.
    pub fn select(&self, index: usize) -> ArchiverResult<SalesChannel> {
        let label = self
            .labels
            .get(index)
            .ok_or(ArchiverError::ChannelOutOfRange {
                index,
                available: self.labels.len(),
            })?;

        Ok(SalesChannel {
            index,
            label: label.clone(),
        })
    }

    /// `(index, label)` pairs for display.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.labels.iter().map(String::as_str).enumerate()
    }
}
