//! Sticky header: scroll-driven styling state and the mobile menu toggle.

use crate::viewport::{Section, ViewportEvent, ViewportEvents, ViewportSubscription};

/// Scroll offset (px) past which the header switches to its scrolled style.
pub const SCROLLED_THRESHOLD: f64 = 20.0;

#[derive(Debug)]
pub struct HeaderState {
    subscription: ViewportSubscription,
    scrolled: bool,
    scroll_progress: f64,
    over_hero: bool,
    mobile_menu_open: bool,
}

impl HeaderState {
    pub fn new(viewport: &ViewportEvents) -> Self {
        Self {
            subscription: viewport.subscribe(),
            scrolled: false,
            scroll_progress: 0.0,
            over_hero: true,
            mobile_menu_open: false,
        }
    }

    /// Apply viewport events published since the last call.
    pub fn sync(&mut self) {
        let events: Vec<ViewportEvent> = self.subscription.drain().collect();
        for event in events {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: ViewportEvent) {
        match event {
            ViewportEvent::Scrolled {
                offset_y,
                document_height,
                viewport_height,
            } => {
                self.scrolled = offset_y > SCROLLED_THRESHOLD;
                self.scroll_progress = scroll_progress(offset_y, document_height, viewport_height);
            }
            ViewportEvent::VisibilityChanged {
                section: Section::Hero,
                visible,
            } => self.over_hero = visible,
            _ => {}
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// How far down the page the reader is, in percent.
    pub fn scroll_progress(&self) -> f64 {
        self.scroll_progress
    }

    /// Whether the header currently overlays the hero section.
    pub fn is_over_hero(&self) -> bool {
        self.over_hero
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }
}

/// Percentage of the scrollable distance covered, clamped to `[0, 100]`.
///
/// A page that fits in the viewport has nothing to scroll and reports 0.
pub fn scroll_progress(offset_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 || !offset_y.is_finite() {
        return 0.0;
    }
    (offset_y / scrollable * 100.0).clamp(0.0, 100.0)
}
