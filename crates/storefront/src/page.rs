//! The storefront page shell.

use std::sync::Arc;
use std::time::Duration;

use dove_catalog::{Catalog, PaginationCursor};
use dove_core::DomainResult;

use crate::collections::CollectionsPage;
use crate::featured::{CategoryTile, featured_tiles};
use crate::footer::FooterState;
use crate::header::HeaderState;
use crate::hero::{HeroCarousel, ROTATION_INTERVAL, default_slides};
use crate::viewport::{ViewportError, ViewportEvent, ViewportEvents};

/// One mounted storefront page: every section subscribed to a shared
/// viewport hub that the page owns.
#[derive(Debug)]
pub struct StorefrontPage {
    viewport: ViewportEvents,
    pub header: HeaderState,
    pub hero: HeroCarousel,
    pub tiles: Vec<CategoryTile>,
    pub collections: CollectionsPage,
    pub footer: FooterState,
}

impl StorefrontPage {
    pub fn new(catalog: Arc<Catalog>, cursor: PaginationCursor) -> DomainResult<Self> {
        let viewport = ViewportEvents::new();
        Ok(Self {
            header: HeaderState::new(&viewport),
            hero: HeroCarousel::new(default_slides(), ROTATION_INTERVAL, &viewport)?,
            tiles: featured_tiles()?,
            collections: CollectionsPage::new(catalog, cursor, &viewport),
            footer: FooterState::new(),
            viewport,
        })
    }

    pub fn viewport(&self) -> &ViewportEvents {
        &self.viewport
    }

    /// Publish a viewport event and bring every section up to date.
    pub fn dispatch(&mut self, event: ViewportEvent) -> Result<(), ViewportError> {
        let delivered = self.viewport.publish(event)?;
        tracing::trace!(?event, delivered, "viewport event");
        self.sync();
        Ok(())
    }

    pub fn sync(&mut self) {
        self.header.sync();
        self.hero.sync();
        self.collections.sync();
    }

    pub fn tick(&mut self, elapsed: Duration) {
        self.hero.tick(elapsed);
    }

    /// Follow a shop-by-category tile into the collections grid.
    pub fn open_tile(&mut self, index: usize) -> Option<&CategoryTile> {
        let tile = self.tiles.get(index)?;
        tile.apply_to(self.collections.view_mut());
        Some(tile)
    }
}
