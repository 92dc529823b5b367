// Copyright 2026 the Driftview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::bounds::PanBounds;

/// Fraction of the raw overshoot distance that is displayed while dragging
/// past the pan bounds. Lower values resist harder.
pub const RUBBER_BAND_RESISTANCE: f64 = 0.3;

/// Maximum displayed distance past a pan bound, in pixels.
pub const MAX_OVERSHOOT: f64 = 50.0;

fn rubber_axis(v: f64, min: f64, max: f64) -> f64 {
    if v < min {
        min - ((min - v) * RUBBER_BAND_RESISTANCE).min(MAX_OVERSHOOT)
    } else if v > max {
        max + ((v - max) * RUBBER_BAND_RESISTANCE).min(MAX_OVERSHOOT)
    } else {
        v
    }
}

/// Damps a candidate translation that may exceed the pan bounds.
///
/// Within bounds the translation passes through unchanged. Past a bound the
/// overshoot distance is scaled by [`RUBBER_BAND_RESISTANCE`] and capped at
/// [`MAX_OVERSHOOT`], per axis, giving the drag increasing resistance instead
/// of a hard stop.
///
/// This applies only to the transient per-frame value while a gesture is in
/// progress; the at-rest transform is always hard-clamped.
#[must_use]
pub fn rubber_band(p: Vec2, bounds: &PanBounds) -> Vec2 {
    Vec2::new(
        rubber_axis(p.x, bounds.min_x, bounds.max_x),
        rubber_axis(p.y, bounds.min_y, bounds.max_y),
    )
}
