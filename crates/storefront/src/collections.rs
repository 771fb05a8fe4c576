//! Collections page: the catalog grid plus its infinite-scroll wiring.

use std::sync::Arc;

use dove_catalog::{Catalog, CatalogView, PaginationCursor};

use crate::viewport::{Section, ViewportEvent, ViewportEvents, ViewportSubscription};

/// The collections grid as one component instance.
///
/// Owns its [`CatalogView`] and a viewport subscription; load-more sentinel
/// visibility reaches the view only through [`CollectionsPage::sync`].
#[derive(Debug)]
pub struct CollectionsPage {
    view: CatalogView,
    subscription: ViewportSubscription,
}

impl CollectionsPage {
    pub fn new(catalog: Arc<Catalog>, cursor: PaginationCursor, viewport: &ViewportEvents) -> Self {
        Self {
            view: CatalogView::with_cursor(catalog, cursor),
            subscription: viewport.subscribe(),
        }
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    /// Filter controls and the "Load More" button act on the view directly.
    pub fn view_mut(&mut self) -> &mut CatalogView {
        &mut self.view
    }

    /// Apply viewport events published since the last call.
    pub fn sync(&mut self) {
        for event in self.subscription.drain() {
            if let ViewportEvent::VisibilityChanged {
                section: Section::LoadMoreSentinel,
                visible,
            } = event
            {
                self.view.on_sentinel_visibility(visible);
            }
        }
    }

    /// Whether the sentinel element should be rendered below the grid.
    pub fn renders_sentinel(&self) -> bool {
        self.view.has_more()
    }
}
