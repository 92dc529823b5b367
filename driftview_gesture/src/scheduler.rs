// Copyright 2026 the Driftview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use driftview_transform::Transform;

use crate::host::{FrameHandle, GestureHost};

/// Coalesces transform writes into one application per display frame.
///
/// Any number of writes may arrive between frames; the scheduler keeps only
/// the latest pending transform and at most one outstanding frame request.
/// When the host's frame callback fires, the controller flushes the pending
/// value to [`GestureHost::apply_transform`] exactly once.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: Option<Transform>,
    frame: Option<FrameHandle>,
}

impl FrameScheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: None,
            frame: None,
        }
    }

    /// Stores `transform` as the value to apply on the next frame, replacing
    /// any not-yet-flushed value, and requests a frame if none is in flight.
    pub fn schedule(&mut self, host: &mut dyn GestureHost, transform: Transform) {
        self.pending = Some(transform);
        self.ensure_frame(host);
    }

    /// Requests a frame callback if none is in flight.
    ///
    /// Used by animation drivers that need a tick even when no write is
    /// pending yet.
    pub fn ensure_frame(&mut self, host: &mut dyn GestureHost) {
        if self.frame.is_none() {
            self.frame = Some(host.request_frame());
        }
    }

    /// Marks the in-flight frame request as fired.
    ///
    /// Must be called at the top of the host's frame callback, before
    /// [`flush`](Self::flush), so that work done during the callback can
    /// request the next frame.
    pub fn frame_fired(&mut self) {
        self.frame = None;
    }

    /// Applies the pending transform to the host, if any.
    pub fn flush(&mut self, host: &mut dyn GestureHost) {
        if let Some(transform) = self.pending.take() {
            host.apply_transform(transform);
        }
    }

    /// Cancels the in-flight frame request and drops any pending write.
    ///
    /// Called when a new gesture or imperative control takes over; the
    /// superseded callback must not fire with a stale payload.
    pub fn cancel(&mut self, host: &mut dyn GestureHost) {
        if let Some(handle) = self.frame.take() {
            host.cancel_frame(handle);
        }
        self.pending = None;
    }

    /// Returns `true` while a frame request is in flight.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.frame.is_some()
    }

    /// The not-yet-flushed transform, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Transform> {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use kurbo::{Size, Vec2};

    #[derive(Default)]
    struct RecordingHost {
        applied: Vec<Transform>,
        requested: u64,
        cancelled: Vec<FrameHandle>,
    }

    impl GestureHost for RecordingHost {
        fn viewport_size(&self) -> Option<Size> {
            Some(Size::new(800.0, 600.0))
        }

        fn apply_transform(&mut self, transform: Transform) {
            self.applied.push(transform);
        }

        fn request_frame(&mut self) -> FrameHandle {
            self.requested += 1;
            self.requested
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            self.cancelled.push(handle);
        }
    }

    #[test]
    fn repeated_writes_coalesce_into_one_request_and_one_apply() {
        let mut host = RecordingHost::default();
        let mut scheduler = FrameScheduler::new();

        scheduler.schedule(&mut host, Transform::new(1.5, Vec2::ZERO));
        scheduler.schedule(&mut host, Transform::new(2.0, Vec2::ZERO));
        scheduler.schedule(&mut host, Transform::new(2.5, Vec2::ZERO));
        assert_eq!(host.requested, 1, "one frame request for many writes");

        scheduler.frame_fired();
        scheduler.flush(&mut host);
        assert_eq!(host.applied.len(), 1);
        assert_eq!(host.applied[0].scale, 2.5, "latest write wins");
        assert!(!scheduler.is_scheduled());
    }

    #[test]
    fn cancel_clears_request_and_pending_value() {
        let mut host = RecordingHost::default();
        let mut scheduler = FrameScheduler::new();

        scheduler.schedule(&mut host, Transform::IDENTITY);
        scheduler.cancel(&mut host);
        assert_eq!(host.cancelled, alloc::vec![1]);
        assert!(scheduler.pending().is_none());

        scheduler.frame_fired();
        scheduler.flush(&mut host);
        assert!(host.applied.is_empty(), "cancelled write must not apply");
    }

    #[test]
    fn ensure_frame_without_pending_write() {
        let mut host = RecordingHost::default();
        let mut scheduler = FrameScheduler::new();

        scheduler.ensure_frame(&mut host);
        scheduler.ensure_frame(&mut host);
        assert_eq!(host.requested, 1);
        assert!(scheduler.is_scheduled());
        assert!(scheduler.pending().is_none());
    }

    #[test]
    fn flush_without_pending_is_a_no_op() {
        let mut host = RecordingHost::default();
        let mut scheduler = FrameScheduler::new();
        scheduler.flush(&mut host);
        assert!(host.applied.is_empty());
    }
}
