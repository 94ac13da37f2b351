//! Identifier index: which articles and recitals the draft contains.
//!
//! The index drives the table of contents and supplies the heading text for
//! section anchors. It is built from the source positions only, in row order,
//! and the first occurrence of an identifier wins.

use std::collections::HashSet;

use crate::types::{Identifier, IdentifierKind, SegmentPair};

/// An indexed identifier with its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub key: String,
    pub label: String,
}

/// Ordered identifier → label mappings for articles and recitals.
#[derive(Debug, Clone, Default)]
pub struct IdentifierIndex {
    articles: Vec<IndexEntry>,
    recitals: Vec<IndexEntry>,
    seen: HashSet<(IdentifierKind, String)>,
}

impl IdentifierIndex {
    /// Build the index from the source side of every row.
    #[must_use]
    pub fn build(segments: &[SegmentPair]) -> Self {
        let mut index = Self::default();
        for segment in segments {
            let position = &segment.source.position;
            if let Some(id) = position.article() {
                index.insert(id);
            }
            if let Some(id) = position.recital() {
                index.insert(id);
            }
        }

        tracing::debug!(
            articles = index.articles.len(),
            recitals = index.recitals.len(),
            "Built identifier index"
        );
        index
    }

    fn insert(&mut self, id: &Identifier) {
        if !self.seen.insert((id.kind, id.key.clone())) {
            return;
        }
        let entry = IndexEntry {
            key: id.key.clone(),
            label: id.label(),
        };
        match id.kind {
            IdentifierKind::Article => self.articles.push(entry),
            IdentifierKind::Recital => self.recitals.push(entry),
        }
    }

    /// Articles in discovery order.
    #[must_use]
    pub fn articles(&self) -> &[IndexEntry] {
        &self.articles
    }

    /// Recitals in discovery order.
    #[must_use]
    pub fn recitals(&self) -> &[IndexEntry] {
        &self.recitals
    }

    /// Heading label for an identifier key, articles taking precedence.
    #[must_use]
    pub fn label(&self, key: &str) -> Option<&str> {
        self.articles
            .iter()
            .chain(self.recitals.iter())
            .find(|entry| entry.key == key)
            .map(|entry| entry.label.as_str())
    }
}
