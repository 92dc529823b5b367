// Copyright 2026 the Driftview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driftview Gesture: an interactive zoom/pan engine for a 2D content surface.
//!
//! This crate ties the pure math of `driftview_transform` and the animation
//! drivers of `driftview_motion` into a stateful [`GestureController`]:
//!
//! - Two-finger pinch zooms toward the pinch center; moving the pinch center
//!   pans. Single-pointer input (finger, mouse, stylus) always passes through
//!   to the underlying surface.
//! - Dragging past the pan bounds shows rubber-band resistance; release
//!   springs the view back, or lets it coast under momentum when it ends
//!   in-bounds with velocity.
//! - Ctrl/Cmd + wheel zooms toward the cursor; plain scrolling passes
//!   through.
//! - Imperative controls (`zoom_in`, `zoom_out`, `reset_zoom`, `set_scale`)
//!   share the same state and cancel any running animation.
//!
//! The engine is headless: it talks to its surface only through the
//! [`GestureHost`] trait (viewport size, transform writes, a frame clock) and
//! batches writes to one per display frame via an internal scheduler. The
//! transform itself is two-layered: a hot per-frame value for the render path
//! and a published snapshot that advances only at gesture and animation
//! boundaries, so subscribers are not notified at display rate.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use driftview_gesture::{
//!     FrameHandle, GestureConfig, GestureController, GestureHost, Transform,
//! };
//!
//! struct Surface {
//!     transform: Transform,
//!     frame_requested: bool,
//! }
//!
//! impl GestureHost for Surface {
//!     fn viewport_size(&self) -> Option<Size> {
//!         Some(Size::new(800.0, 600.0))
//!     }
//!     fn apply_transform(&mut self, transform: Transform) {
//!         self.transform = transform;
//!     }
//!     fn request_frame(&mut self) -> FrameHandle {
//!         self.frame_requested = true;
//!         1
//!     }
//!     fn cancel_frame(&mut self, _handle: FrameHandle) {
//!         self.frame_requested = false;
//!     }
//! }
//!
//! let mut surface = Surface { transform: Transform::IDENTITY, frame_requested: false };
//! let mut controller = GestureController::new(GestureConfig::default());
//!
//! // A pinch that doubles the finger spread doubles the scale.
//! controller.on_touch_start(&mut surface, &[Point::new(350.0, 300.0), Point::new(450.0, 300.0)], 0.0);
//! controller.on_touch_move(&mut surface, &[Point::new(300.0, 300.0), Point::new(500.0, 300.0)], 16.0);
//! controller.on_touch_end(&mut surface, &[], 32.0);
//!
//! assert!(controller.is_zoomed());
//! assert_eq!(controller.snapshot().scale, 2.0);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod host;
mod input;
mod scheduler;
mod session;
mod store;

pub use config::{GestureConfig, WHEEL_ZOOM_INTENSITY, ZOOM_STEP};
pub use controller::GestureController;
pub use host::{FrameHandle, GestureHost};
pub use input::{Handled, InputModality, ModalityPolicy, WheelInput};
pub use scheduler::FrameScheduler;
pub use session::{touch_center, touch_distance, PinchDelta, PinchSession};
pub use store::TransformStore;

pub use driftview_transform::{BoundsParams, PanBounds, Transform};
