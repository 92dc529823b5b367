// Copyright 2026 the Driftview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use driftview_transform::Transform;

type Listener = Box<dyn FnMut(Transform)>;

/// Dual-layer transform state: a hot value for the render path and a cold
/// published snapshot for everything that reacts to changes.
///
/// The hot value is written on every gesture step and animation frame and is
/// readable synchronously via [`peek`](Self::peek). The published snapshot
/// only advances at gesture and animation boundaries via
/// [`publish`](Self::publish), which notifies subscribers; per-frame writes
/// never reach them, so a host's change-reaction machinery (re-renders,
/// derived flags, disabled buttons) is not saturated at display rate.
pub struct TransformStore {
    hot: Transform,
    published: Transform,
    listeners: Vec<Listener>,
}

impl TransformStore {
    /// Creates a store with both layers set to `initial`.
    #[must_use]
    pub fn new(initial: Transform) -> Self {
        Self {
            hot: initial,
            published: initial,
            listeners: Vec::new(),
        }
    }

    /// The authoritative per-frame value.
    #[must_use]
    pub fn peek(&self) -> Transform {
        self.hot
    }

    /// Writes the hot value without notifying subscribers.
    pub fn set(&mut self, transform: Transform) {
        self.hot = transform;
    }

    /// The snapshot as of the last gesture or animation boundary.
    #[must_use]
    pub fn published(&self) -> Transform {
        self.published
    }

    /// Copies the hot value into the published snapshot and notifies
    /// subscribers.
    pub fn publish(&mut self) {
        self.published = self.hot;
        for listener in &mut self.listeners {
            listener(self.published);
        }
    }

    /// Registers a subscriber for published snapshots.
    pub fn subscribe(&mut self, listener: impl FnMut(Transform) + 'static) {
        self.listeners.push(Box::new(listener));
    }
}

impl fmt::Debug for TransformStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformStore")
            .field("hot", &self.hot)
            .field("published", &self.published)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use kurbo::Vec2;

    #[test]
    fn set_updates_hot_but_not_published() {
        let mut store = TransformStore::new(Transform::IDENTITY);
        store.set(Transform::new(2.0, Vec2::new(10.0, 0.0)));
        assert_eq!(store.peek().scale, 2.0);
        assert_eq!(store.published(), Transform::IDENTITY);
    }

    #[test]
    fn publish_copies_hot_and_notifies() {
        let seen = Rc::new(Cell::new(0));
        let mut store = TransformStore::new(Transform::IDENTITY);
        let observer = seen.clone();
        store.subscribe(move |t| {
            assert_eq!(t.scale, 3.0);
            observer.set(observer.get() + 1);
        });

        store.set(Transform::new(3.0, Vec2::ZERO));
        assert_eq!(seen.get(), 0);
        store.publish();
        assert_eq!(seen.get(), 1);
        assert_eq!(store.published().scale, 3.0);
    }

    #[test]
    fn intermediate_writes_are_invisible_to_subscribers() {
        let seen = Rc::new(Cell::new(0));
        let mut store = TransformStore::new(Transform::IDENTITY);
        let observer = seen.clone();
        store.subscribe(move |_| observer.set(observer.get() + 1));

        for i in 0..10 {
            store.set(Transform::new(1.0 + f64::from(i) * 0.1, Vec2::ZERO));
        }
        assert_eq!(seen.get(), 0);
        store.publish();
        assert_eq!(seen.get(), 1);
    }
}
