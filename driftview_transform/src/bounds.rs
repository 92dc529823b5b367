// Copyright 2026 the Driftview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::transform::is_base_scale;

/// Tuning parameters for [`pan_bounds`] and [`clamp_translation`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundsParams {
    /// Extra pan range past the content edge on the left, right, and top,
    /// as a fraction of the viewport dimension.
    pub standard_padding: f64,
    /// Extra pan range past the bottom edge, as a fraction of the viewport
    /// height. Deliberately larger than `standard_padding` so content with an
    /// important region below the visible frame stays reachable.
    pub bottom_padding: f64,
    /// Maximum widening of the horizontal range while panned into the padded
    /// bottom region, as a fraction of the horizontal range. Lets diagonal
    /// travel reach the bottom corners of the content at high zoom.
    pub corner_expansion: f64,
    /// Half-extent of the fallback bounds returned while the viewport is not
    /// yet measurable, in pixels.
    pub fallback_half_extent: f64,
}

impl Default for BoundsParams {
    fn default() -> Self {
        Self {
            standard_padding: 0.25,
            bottom_padding: 0.8,
            corner_expansion: 0.25,
            fallback_half_extent: 250.0,
        }
    }
}

/// The legal pan range at a given zoom level, in viewport pixels.
///
/// Bounds are center-relative: a translation of zero is always legal. The
/// range is symmetric horizontally and asymmetric vertically (`min_y` reaches
/// further than `max_y` when the bottom padding is larger).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanBounds {
    /// Smallest legal horizontal translation.
    pub min_x: f64,
    /// Largest legal horizontal translation.
    pub max_x: f64,
    /// Smallest legal vertical translation (content shifted up, showing the
    /// bottom region).
    pub min_y: f64,
    /// Largest legal vertical translation.
    pub max_y: f64,
}

impl PanBounds {
    /// The degenerate all-zero bounds: no panning permitted.
    pub const ZERO: Self = Self {
        min_x: 0.0,
        max_x: 0.0,
        min_y: 0.0,
        max_y: 0.0,
    };

    /// Returns `true` if every bound is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.min_x == 0.0 && self.max_x == 0.0 && self.min_y == 0.0 && self.max_y == 0.0
    }

    /// Clamps `p` into the rectangular bounds.
    #[must_use]
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(self.min_x, self.max_x), p.y.clamp(self.min_y, self.max_y))
    }

    /// Returns these bounds with the horizontal range widened for `p`'s
    /// position in the padded bottom region.
    ///
    /// A purely rectangular range stops diagonal travel at the X limit before
    /// the bottom corners of the content become reachable at high zoom. The
    /// horizontal range is therefore expanded in proportion to how far into
    /// the bottom region the translation has moved: no expansion at the
    /// vertical center, the full `corner_expansion` factor at the bottom
    /// extent. The vertical range is unchanged.
    #[must_use]
    pub fn expanded_for(&self, p: Vec2, corner_expansion: f64) -> Self {
        let mut bounds = *self;
        // Negative y means the content is shifted up, showing the bottom region.
        if p.y < 0.0 && self.min_y != 0.0 {
            let bottom_progress = (p.y.abs() / self.min_y.abs()).min(1.0);
            let expansion = 1.0 + bottom_progress * corner_expansion;
            bounds.min_x *= expansion;
            bounds.max_x *= expansion;
        }
        bounds
    }

    /// Clamps `p` into the bounds widened by [`expanded_for`](Self::expanded_for).
    #[must_use]
    pub fn clamp_with_corner_expansion(&self, p: Vec2, corner_expansion: f64) -> Vec2 {
        self.expanded_for(p, corner_expansion).clamp_point(p)
    }
}

/// Computes the legal pan range for `scale` over a viewport.
///
/// At any zoom level the visible area is `1/scale` of the content; reaching
/// the content edges requires panning by half the hidden fraction, plus the
/// configured edge padding. At base scale the bounds collapse to zero so that
/// effectively un-zoomed content cannot be dragged off-center.
///
/// `viewport` is `None` while the hosting surface has not been measured yet;
/// in that case a generous fixed fallback is returned instead of zero bounds,
/// so that a transform restored during mount is not snapped to center.
#[must_use]
pub fn pan_bounds(scale: f64, viewport: Option<Size>, params: &BoundsParams) -> PanBounds {
    let Some(viewport) = viewport else {
        let b = params.fallback_half_extent;
        return PanBounds {
            min_x: -b,
            max_x: b,
            min_y: -b,
            max_y: b,
        };
    };

    if is_base_scale(scale) {
        return PanBounds::ZERO;
    }

    let visible_fraction = 1.0 / scale;
    let hidden_fraction = 1.0 - visible_fraction;

    let max_pan_x = viewport.width * hidden_fraction / 2.0 + viewport.width * params.standard_padding;
    let max_pan_y_top =
        viewport.height * hidden_fraction / 2.0 + viewport.height * params.standard_padding;
    let max_pan_y_bottom =
        viewport.height * hidden_fraction / 2.0 + viewport.height * params.bottom_padding;

    PanBounds {
        min_x: -max_pan_x,
        max_x: max_pan_x,
        min_y: -max_pan_y_bottom,
        max_y: max_pan_y_top,
    }
}

/// A translation clamped to its legal pan range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clamped {
    /// The clamped translation.
    pub point: Vec2,
    /// Set when the bounds degenerated to all-zero while zoomed.
    ///
    /// This indicates a logic error upstream (for example a zero-sized
    /// viewport); the candidate translation is passed through unchanged
    /// rather than silently snapping content to center. Callers should log
    /// this condition.
    pub degenerate: bool,
}

/// Clamps a candidate translation to the legal pan range at `scale`.
///
/// At base scale the translation is forced to zero. If the computed bounds
/// are all-zero while zoomed, the candidate is passed through unchanged and
/// flagged as degenerate instead.
#[must_use]
pub fn clamp_translation(
    p: Vec2,
    scale: f64,
    viewport: Option<Size>,
    params: &BoundsParams,
) -> Clamped {
    if is_base_scale(scale) {
        return Clamped {
            point: Vec2::ZERO,
            degenerate: false,
        };
    }

    let bounds = pan_bounds(scale, viewport, params);
    if bounds.is_zero() {
        return Clamped {
            point: p,
            degenerate: true,
        };
    }

    Clamped {
        point: bounds.clamp_with_corner_expansion(p, params.corner_expansion),
        degenerate: false,
    }
}
