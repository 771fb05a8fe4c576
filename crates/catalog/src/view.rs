//! `CatalogView`: criteria, engine and cursor bound together for one page view.

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::criteria::{FilterCriteria, Selection, SortOption};
use crate::engine;
use crate::entry::{CatalogEntry, Category, PriceBucket};
use crate::pagination::PaginationCursor;

/// View-model behind the collections grid.
///
/// Every setter resets pagination and recomputes the filtered sequence before
/// returning, so the next render never sees results from older criteria.
#[derive(Debug, Clone)]
pub struct CatalogView {
    catalog: Arc<Catalog>,
    criteria: FilterCriteria,
    cursor: PaginationCursor,
    filtered: Vec<usize>,
    sentinel_visible: bool,
}

/// Serializable snapshot of what the grid currently shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    pub criteria: FilterCriteria,
    pub total: usize,
    pub visible_count: usize,
    pub has_more: bool,
    pub entries: Vec<CatalogEntry>,
}

impl CatalogView {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_cursor(catalog, PaginationCursor::default())
    }

    pub fn with_cursor(catalog: Arc<Catalog>, cursor: PaginationCursor) -> Self {
        let criteria = FilterCriteria::default();
        let filtered = engine::filter_indices(&catalog, &criteria);
        Self {
            catalog,
            criteria,
            cursor,
            filtered,
            sentinel_visible: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current criteria, e.g. for filter-control labels.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page_size(&self) -> usize {
        self.cursor.page_size()
    }

    pub fn set_category(&mut self, category: Selection<Category>) {
        self.criteria.category = category;
        self.refresh();
    }

    pub fn set_price_range(&mut self, price_range: Selection<PriceBucket>) {
        self.criteria.price_range = price_range;
        self.refresh();
    }

    pub fn set_sort_option(&mut self, sort: SortOption) {
        self.criteria.sort = sort;
        self.refresh();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.criteria.search_query = query.into();
        self.refresh();
    }

    /// Replace all criteria at once (one reset, one recompute).
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refresh();
    }

    /// Explicit "Load More".
    pub fn load_more(&mut self) {
        let before = self.visible_count();
        self.cursor.advance(self.filtered.len());
        tracing::trace!(before, after = self.visible_count(), total = self.total(), "load more");
    }

    /// Visibility notification for the load-more sentinel.
    ///
    /// Only a hidden → visible transition loads a page; repeated "visible"
    /// notifications while the sentinel stays on screen are ignored.
    pub fn on_sentinel_visibility(&mut self, visible: bool) {
        let entered = visible && !self.sentinel_visible;
        self.sentinel_visible = visible;
        if entered {
            self.load_more();
        }
    }

    /// The full filtered and ordered sequence.
    pub fn filtered(&self) -> impl ExactSizeIterator<Item = &CatalogEntry> + '_ {
        let entries = self.catalog.entries();
        self.filtered.iter().map(move |&index| &entries[index])
    }

    /// The first `visible_count()` entries of the filtered sequence.
    pub fn visible(&self) -> impl ExactSizeIterator<Item = &CatalogEntry> + '_ {
        let entries = self.catalog.entries();
        self.filtered[..self.visible_count()]
            .iter()
            .map(move |&index| &entries[index])
    }

    pub fn visible_count(&self) -> usize {
        self.cursor.visible_count(self.filtered.len())
    }

    /// Length of the filtered sequence.
    pub fn total(&self) -> usize {
        self.filtered.len()
    }

    /// Whether the load-more sentinel should be rendered.
    pub fn has_more(&self) -> bool {
        self.cursor.has_more(self.filtered.len())
    }

    /// True when the display layer should show its "no results" state.
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn snapshot(&self) -> CatalogPage {
        CatalogPage {
            criteria: self.criteria.clone(),
            total: self.total(),
            visible_count: self.visible_count(),
            has_more: self.has_more(),
            entries: self.visible().cloned().collect(),
        }
    }

    fn refresh(&mut self) {
        self.cursor.reset();
        self.filtered = engine::filter_indices(&self.catalog, &self.criteria);
        // The sentinel is re-rendered for the new results; its next
        // "visible" notification is a fresh transition.
        self.sentinel_visible = false;
        tracing::debug!(
            total = self.filtered.len(),
            visible = self.visible_count(),
            "catalog view criteria changed"
        );
    }
}
