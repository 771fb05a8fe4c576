//! Pagination cursor for the "load more" grid.

use serde::Serialize;

use dove_core::{DomainError, DomainResult};

/// Items revealed per page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// How many items of the filtered sequence are exposed to the display layer.
///
/// The cursor stores the *requested* count; the count actually shown is that
/// value clamped to the current sequence length, so a narrowing filter can
/// never expose stale overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationCursor {
    page_size: usize,
    requested: usize,
}

impl PaginationCursor {
    pub fn new(page_size: usize) -> DomainResult<Self> {
        if page_size == 0 {
            return Err(DomainError::validation("page size must be at least 1"));
        }
        Ok(Self {
            page_size,
            requested: page_size,
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Back to the first page. Call on every criteria change.
    pub fn reset(&mut self) {
        self.requested = self.page_size;
    }

    /// Reveal one more page of a sequence of length `total`.
    ///
    /// Saturates at `total`; once everything is shown this is a no-op, so
    /// repeated load-more signals are harmless.
    pub fn advance(&mut self, total: usize) {
        if self.requested < total {
            self.requested = self.requested.saturating_add(self.page_size).min(total);
        }
    }

    /// Items shown for a sequence of length `total`.
    pub fn visible_count(&self, total: usize) -> usize {
        self.requested.min(total)
    }

    /// Whether a load-more trigger should still be offered.
    pub fn has_more(&self, total: usize) -> bool {
        self.requested < total
    }
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            requested: DEFAULT_PAGE_SIZE,
        }
    }
}
