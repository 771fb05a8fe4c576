//! Hero section: auto-rotating background carousel with pointer and scroll
//! tracking for the glow and parallax layers.

use std::time::Duration;

use serde::Serialize;

use dove_core::{DomainError, DomainResult};

use crate::viewport::{ViewportEvent, ViewportEvents, ViewportSubscription};

/// Time each slide stays up before the carousel rotates.
pub const ROTATION_INTERVAL: Duration = Duration::from_secs(5);

/// Background layer moves at this fraction of the page scroll.
pub const PARALLAX_FACTOR: f64 = 0.2;

const NANOS_PER_SEC: u128 = 1_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroSlide {
    pub image: String,
    pub alt: String,
}

impl HeroSlide {
    pub fn new(image: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            alt: alt.into(),
        }
    }
}

/// The storefront's hero backgrounds.
pub fn default_slides() -> Vec<HeroSlide> {
    vec![
        HeroSlide::new("/images/Hero_Background1.jpg", "Model in an Ankara dress"),
        HeroSlide::new("/images/Hero_Background2.jpg", "Kente cloth close-up"),
        HeroSlide::new("/images/Hero_Background3.jpg", "Kaftan in the savanna"),
    ]
}

#[derive(Debug)]
pub struct HeroCarousel {
    slides: Vec<HeroSlide>,
    current: usize,
    interval: Duration,
    since_rotation: Duration,
    pointer: (f64, f64),
    scroll_offset: f64,
    subscription: ViewportSubscription,
}

impl HeroCarousel {
    pub fn new(slides: Vec<HeroSlide>, interval: Duration, viewport: &ViewportEvents) -> DomainResult<Self> {
        if slides.is_empty() {
            return Err(DomainError::validation("hero carousel needs at least one slide"));
        }
        if interval.is_zero() {
            return Err(DomainError::validation("hero rotation interval must be positive"));
        }
        Ok(Self {
            slides,
            current: 0,
            interval,
            since_rotation: Duration::ZERO,
            pointer: (0.0, 0.0),
            scroll_offset: 0.0,
            subscription: viewport.subscribe(),
        })
    }

    pub fn current(&self) -> &HeroSlide {
        &self.slides[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Advance the rotation clock; rotates once per full interval elapsed.
    ///
    /// The clock saturates at `Duration::MAX`; any stall length costs the
    /// same constant work.
    pub fn tick(&mut self, elapsed: Duration) {
        let since = self.since_rotation.saturating_add(elapsed).as_nanos();
        let interval = self.interval.as_nanos();
        let rotations = since / interval;
        let remainder = since % interval;

        let len = self.slides.len() as u128;
        self.current = ((self.current as u128 + rotations % len) % len) as usize;
        // remainder < interval, so it always fits back into a Duration.
        self.since_rotation = Duration::new(
            (remainder / NANOS_PER_SEC) as u64,
            (remainder % NANOS_PER_SEC) as u32,
        );
    }

    /// Jump to a slide (dot navigation). Restarts the rotation clock.
    pub fn select(&mut self, index: usize) -> DomainResult<()> {
        if index >= self.slides.len() {
            return Err(DomainError::validation(format!(
                "slide {index} out of range (0..{})",
                self.slides.len()
            )));
        }
        self.current = index;
        self.since_rotation = Duration::ZERO;
        Ok(())
    }

    /// Apply viewport events published since the last call.
    pub fn sync(&mut self) {
        for event in self.subscription.drain() {
            match event {
                ViewportEvent::PointerMoved { x, y } => self.pointer = (x, y),
                ViewportEvent::Scrolled { offset_y, .. } => self.scroll_offset = offset_y,
                ViewportEvent::VisibilityChanged { .. } => {}
            }
        }
    }

    /// Centre of the radial glow, in container coordinates.
    pub fn glow_center(&self) -> (f64, f64) {
        self.pointer
    }

    /// Vertical translation of the background layer.
    pub fn parallax_offset(&self) -> f64 {
        self.scroll_offset * PARALLAX_FACTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(hub: &ViewportEvents) -> HeroCarousel {
        HeroCarousel::new(default_slides(), ROTATION_INTERVAL, hub).unwrap()
    }

    #[test]
    fn rotates_every_interval_and_wraps() {
        let hub = ViewportEvents::new();
        let mut hero = carousel(&hub);
        assert_eq!(hero.current_index(), 0);

        hero.tick(Duration::from_millis(4_999));
        assert_eq!(hero.current_index(), 0);
        hero.tick(Duration::from_millis(1));
        assert_eq!(hero.current_index(), 1);

        // A long stall catches up slide by slide.
        hero.tick(Duration::from_secs(10));
        assert_eq!(hero.current_index(), 0);
        assert_eq!(hero.current().image, "/images/Hero_Background1.jpg");
    }

    #[test]
    fn huge_stalls_neither_overflow_nor_lose_the_remainder() {
        let hub = ViewportEvents::new();
        let mut hero = carousel(&hub);
        hero.tick(Duration::from_secs(4));
        hero.tick(Duration::MAX);
        assert!(hero.current_index() < hero.len());

        let max = Duration::MAX.as_nanos();
        let interval = ROTATION_INTERVAL.as_nanos();
        assert_eq!(hero.current_index() as u128, (max / interval) % 3);
        assert_eq!(hero.since_rotation.as_nanos(), max % interval);
    }

    #[test]
    fn nanosecond_interval_catches_up_in_one_step() {
        let hub = ViewportEvents::new();
        let mut hero = HeroCarousel::new(default_slides(), Duration::from_nanos(1), &hub).unwrap();
        hero.tick(Duration::from_secs(3_600));
        assert_eq!(hero.current_index(), (3_600_000_000_000u128 % 3) as usize);
        assert_eq!(hero.since_rotation, Duration::ZERO);
    }

    #[test]
    fn select_restarts_the_clock() {
        let hub = ViewportEvents::new();
        let mut hero = carousel(&hub);
        hero.tick(Duration::from_secs(4));
        hero.select(2).unwrap();
        hero.tick(Duration::from_secs(4));
        assert_eq!(hero.current_index(), 2);
        hero.tick(Duration::from_secs(1));
        assert_eq!(hero.current_index(), 0);
    }

    #[test]
    fn select_out_of_range_is_rejected() {
        let hub = ViewportEvents::new();
        let mut hero = carousel(&hub);
        assert!(matches!(hero.select(3), Err(DomainError::Validation(_))));
        assert_eq!(hero.current_index(), 0);
    }

    #[test]
    fn construction_is_validated() {
        let hub = ViewportEvents::new();
        assert!(HeroCarousel::new(Vec::new(), ROTATION_INTERVAL, &hub).is_err());
        assert!(HeroCarousel::new(default_slides(), Duration::ZERO, &hub).is_err());
        // Failed constructions leave no subscription behind.
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn tracks_pointer_and_parallax() {
        let hub = ViewportEvents::new();
        let mut hero = carousel(&hub);
        hub.publish(ViewportEvent::PointerMoved { x: 120.0, y: 48.0 }).unwrap();
        hub.publish(ViewportEvent::Scrolled {
            offset_y: 300.0,
            document_height: 4000.0,
            viewport_height: 900.0,
        })
        .unwrap();
        hero.sync();

        assert_eq!(hero.glow_center(), (120.0, 48.0));
        assert!((hero.parallax_offset() - 60.0).abs() < 1e-9);
    }
}
