//! The immutable item catalog.

use std::collections::HashSet;

use dove_core::{DomainError, DomainResult, EntryId};

use crate::entry::CatalogEntry;
use crate::money::Currency;

/// Ordered, validated list of catalog entries, fixed at construction.
///
/// Guarantees:
/// - entry ids are unique;
/// - ids and titles are non-empty;
/// - every parseable price is in one currency, so amounts compare directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    search_index: Vec<SearchText>,
    currency: Option<Currency>,
}

/// Lowercased copies of the searchable fields, built once per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SearchText {
    title: String,
    description: String,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        let mut currency = None;

        for entry in &entries {
            if !seen.insert(entry.id.clone()) {
                return Err(DomainError::conflict(format!("duplicate entry id {}", entry.id)));
            }
            if entry.title.trim().is_empty() {
                return Err(DomainError::validation(format!("entry {} has an empty title", entry.id)));
            }

            match entry.price.amount() {
                Some(amount) => match currency {
                    None => currency = Some(amount.currency()),
                    Some(expected) if expected != amount.currency() => {
                        return Err(DomainError::invariant(format!(
                            "entry {} is priced in {} but the catalog is priced in {}",
                            entry.id,
                            amount.currency(),
                            expected
                        )));
                    }
                    Some(_) => {}
                },
                None => {
                    tracing::warn!(
                        entry_id = %entry.id,
                        price = entry.price.display(),
                        "unparseable price; entry will sort after priced entries"
                    );
                }
            }
        }

        let search_index = entries
            .iter()
            .map(|entry| SearchText {
                title: entry.title.to_lowercase(),
                description: entry.description.to_lowercase(),
            })
            .collect();

        Ok(Self {
            entries,
            search_index,
            currency,
        })
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            search_index: Vec::new(),
            currency: None,
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Currency shared by all priced entries (`None` when nothing is priced).
    pub fn currency(&self) -> Option<Currency> {
        self.currency
    }

    pub fn get(&self, id: &EntryId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// Like [`Catalog::get`], for callers that treat absence as an error
    /// (e.g. a detail link pointing at a withdrawn entry).
    pub fn require(&self, id: &EntryId) -> DomainResult<&CatalogEntry> {
        self.get(id)
            .ok_or_else(|| DomainError::not_found(format!("catalog entry {id}")))
    }

    /// Case-insensitive substring match against title or description.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn text_contains(&self, index: usize, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.search_index
            .get(index)
            .is_some_and(|text| text.title.contains(needle) || text.description.contains(needle))
    }
}
