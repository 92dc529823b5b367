// Copyright 2026 the Driftview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use driftview_transform::Transform;

/// Identifies one outstanding frame-callback request.
pub type FrameHandle = u64;

/// The hosting surface a [`GestureController`](crate::GestureController)
/// drives.
///
/// The host owns rendering and all interpretation of what lives under a
/// pointer; the engine only reads the viewport size and writes a transform,
/// at most once per display frame. After a requested frame fires, the host
/// calls [`GestureController::on_frame`](crate::GestureController::on_frame).
///
/// Hosts on platforms with native pinch/scroll gestures must additionally be
/// able to veto the platform default synchronously when a handler reports its
/// input as consumed (on the web this means non-passive listeners). That is
/// an environment capability, not something this crate can do on the host's
/// behalf.
pub trait GestureHost {
    /// Current pixel dimensions of the container, or `None` while it cannot
    /// be measured (for example, still mounting). The engine then falls back
    /// to generous pan bounds instead of snapping to center.
    fn viewport_size(&self) -> Option<Size>;

    /// Writes the transform to the content target, anchored at the
    /// container's center.
    fn apply_transform(&mut self, transform: Transform);

    /// Schedules a callback for the next display frame and returns a handle
    /// identifying the request.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancels a previously requested frame callback.
    ///
    /// Cancelling a handle that has already fired is a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}
