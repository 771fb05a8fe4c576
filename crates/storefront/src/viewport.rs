//! Viewport observation with scoped subscriptions.
//!
//! Scroll position, pointer position and section visibility are published to
//! a [`ViewportEvents`] hub. Each component holds its own
//! [`ViewportSubscription`] and drains it when it updates; dropping the
//! subscription unregisters it immediately, so a torn-down component never
//! keeps receiving events.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, Weak};

use thiserror::Error;

/// Page regions whose on-screen visibility is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    /// Invisible marker below the collections grid.
    LoadMoreSentinel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    Scrolled {
        offset_y: f64,
        document_height: f64,
        viewport_height: f64,
    },
    /// Pointer position relative to the hero container.
    PointerMoved { x: f64, y: f64 },
    /// A section entered or left the viewport.
    VisibilityChanged { section: Section, visible: bool },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewportError {
    #[error("viewport subscriber registry lock poisoned")]
    Poisoned,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    subscribers: Vec<(u64, Sender<ViewportEvent>)>,
}

/// In-process fan-out of viewport events to subscribed components.
#[derive(Debug, Clone, Default)]
pub struct ViewportEvents {
    registry: Arc<Mutex<Registry>>,
}

impl ViewportEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every live subscription; returns how many got it.
    pub fn publish(&self, event: ViewportEvent) -> Result<usize, ViewportError> {
        let mut registry = self.registry.lock().map_err(|_| ViewportError::Poisoned)?;

        // A subscription whose receiver is gone is pruned here as well.
        registry.subscribers.retain(|(_, tx)| tx.send(event).is_ok());

        Ok(registry.subscribers.len())
    }

    pub fn subscribe(&self) -> ViewportSubscription {
        let (tx, rx) = mpsc::channel();
        let mut id = 0;

        // With a poisoned registry the subscription simply never receives.
        if let Ok(mut registry) = self.registry.lock() {
            id = registry.next_id;
            registry.next_id += 1;
            registry.subscribers.push((id, tx));
        }

        ViewportSubscription {
            id,
            receiver: rx,
            registry: Arc::downgrade(&self.registry),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry
            .lock()
            .map(|registry| registry.subscribers.len())
            .unwrap_or(0)
    }
}

/// A component's registration with a [`ViewportEvents`] hub.
///
/// Unsubscribes on drop.
#[derive(Debug)]
pub struct ViewportSubscription {
    id: u64,
    receiver: Receiver<ViewportEvent>,
    registry: Weak<Mutex<Registry>>,
}

impl ViewportSubscription {
    /// Events published since the last drain, oldest first. Never blocks.
    pub fn drain(&self) -> impl Iterator<Item = ViewportEvent> + '_ {
        self.receiver.try_iter()
    }
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        if let Ok(mut registry) = registry.lock() {
            registry.subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTINEL_SHOWN: ViewportEvent = ViewportEvent::VisibilityChanged {
        section: Section::LoadMoreSentinel,
        visible: true,
    };

    #[test]
    fn every_subscriber_sees_every_event_in_order() {
        let hub = ViewportEvents::new();
        let a = hub.subscribe();
        let b = hub.subscribe();

        let scrolled = ViewportEvent::Scrolled {
            offset_y: 40.0,
            document_height: 2000.0,
            viewport_height: 800.0,
        };
        assert_eq!(hub.publish(scrolled), Ok(2));
        assert_eq!(hub.publish(SENTINEL_SHOWN), Ok(2));

        assert_eq!(a.drain().collect::<Vec<_>>(), vec![scrolled, SENTINEL_SHOWN]);
        assert_eq!(b.drain().collect::<Vec<_>>(), vec![scrolled, SENTINEL_SHOWN]);
        assert_eq!(a.drain().count(), 0);
    }

    #[test]
    fn dropping_a_subscription_unsubscribes_immediately() {
        let hub = ViewportEvents::new();
        let kept = hub.subscribe();
        {
            let _scoped = hub.subscribe();
            assert_eq!(hub.subscriber_count(), 2);
        }
        assert_eq!(hub.subscriber_count(), 1);
        assert_eq!(hub.publish(SENTINEL_SHOWN), Ok(1));
        assert_eq!(kept.drain().count(), 1);
    }

    #[test]
    fn subscription_may_outlive_its_hub() {
        let hub = ViewportEvents::new();
        let subscription = hub.subscribe();
        hub.publish(SENTINEL_SHOWN).unwrap();
        drop(hub);

        assert_eq!(subscription.drain().count(), 1);
        drop(subscription);
    }

    #[test]
    fn cloned_hubs_share_subscribers() {
        let hub = ViewportEvents::new();
        let handle = hub.clone();
        let subscription = handle.subscribe();
        assert_eq!(hub.publish(SENTINEL_SHOWN), Ok(1));
        assert_eq!(subscription.drain().count(), 1);
    }
}
