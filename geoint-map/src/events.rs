//! View notifications and callback registration.

use std::fmt;

use geoint_core::Geometry;

use crate::basemap::BasemapStyle;

/// Something observable happened to a [`crate::MapView`].
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// Overlays were attached or detached.
    OverlaysChanged {
        /// Number of overlays now attached.
        count: usize,
    },
    /// The basemap style changed.
    BasemapChanged(BasemapStyle),
    /// The user clicked the map.
    Clicked {
        /// Clicked location as a point geometry.
        location: Geometry,
    },
    /// The visible extent changed.
    ExtentChanged {
        /// The new extent.
        extent: Geometry,
    },
    /// The view centre changed.
    CenterChanged {
        /// The new centre point.
        center: Geometry,
    },
}

/// Handle returned by [`crate::MapView::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Callback invoked for every event.
pub type Callback = Box<dyn FnMut(&MapEvent)>;

/// Registered callbacks, notified in subscription order.
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    pub(crate) fn subscribe(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.callbacks.push((id, callback));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(candidate, _)| *candidate != id);
        self.callbacks.len() != before
    }

    pub(crate) fn emit(&mut self, event: &MapEvent) {
        for (_, callback) in &mut self.callbacks {
            callback(event);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.callbacks.len()
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("next_id", &self.next_id)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[rstest]
    fn notifies_in_subscription_order_until_unsubscribed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::default();
        let first_seen = Rc::clone(&seen);
        let first = subscribers.subscribe(Box::new(move |_| first_seen.borrow_mut().push(1)));
        let second_seen = Rc::clone(&seen);
        subscribers.subscribe(Box::new(move |_| second_seen.borrow_mut().push(2)));

        subscribers.emit(&MapEvent::OverlaysChanged { count: 0 });
        assert!(subscribers.unsubscribe(first));
        assert!(!subscribers.unsubscribe(first));
        subscribers.emit(&MapEvent::OverlaysChanged { count: 0 });

        assert_eq!(*seen.borrow(), vec![1, 2, 2]);
        assert_eq!(subscribers.len(), 1);
    }
}
