// Copyright 2026 the Driftview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driftview Transform: pan/zoom transform math for a 2D content surface.
//!
//! This crate provides the pure, headless math that backs a zoom/pan gesture
//! engine: a `{scale, translation}` transform value, legal pan bounds for a
//! given zoom level, rubber-band overshoot damping for active drags, and the
//! focal-point solver that keeps the content under a pinch center or cursor
//! visually stationary across a zoom change.
//!
//! It does **not** process input events or run animations. Callers are
//! expected to:
//! - Feed gesture deltas through [`zoom_to_point`] and [`rubber_band`] /
//!   [`clamp_translation`] at a higher layer.
//! - Apply the resulting [`Transform`] to their content with the transform
//!   origin fixed at the viewport center.
//!
//! ## Coordinate model
//!
//! All positions are in viewport pixels, relative to the viewport's top-left
//! corner for focal points and relative to the viewport's center for
//! translations. A translation of zero leaves content centered; positive `x`
//! moves content right, positive `y` moves content down.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use driftview_transform::{pan_bounds, zoom_to_point, BoundsParams};
//!
//! let viewport = Size::new(800.0, 600.0);
//!
//! // Zoom from 1x to 2x around a point in the upper-left quadrant.
//! let translate = zoom_to_point(Point::new(200.0, 150.0), viewport, 1.0, 2.0, Vec2::ZERO);
//!
//! // The legal pan range at 2x.
//! let bounds = pan_bounds(2.0, Some(viewport), &BoundsParams::default());
//! assert!(bounds.max_x > 0.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod rubber;
mod transform;
mod zoom;

pub use bounds::{clamp_translation, pan_bounds, BoundsParams, Clamped, PanBounds};
pub use rubber::{rubber_band, MAX_OVERSHOOT, RUBBER_BAND_RESISTANCE};
pub use transform::{is_base_scale, Transform, BASE_SCALE_THRESHOLD};
pub use zoom::zoom_to_point;
