// Copyright 2026 the Driftview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Scales below this threshold are treated as "base scale".
///
/// At base scale panning is disallowed and the translation is forced to zero,
/// which prevents content from drifting away from center while effectively
/// un-zoomed. The threshold sits slightly above `1.0` so that a pinch gesture
/// fluctuating around `1.0` does not toggle panning on and off. Zoomed-out
/// scales (below `1.0`) also count as base scale for the same reason.
///
/// This is currently a fixed constant; if different content needs a different
/// sensitivity it is a reasonable candidate for configuration.
pub const BASE_SCALE_THRESHOLD: f64 = 1.005;

/// Returns `true` if `scale` is close enough to `1.0` (or below) that panning
/// should be disabled.
#[must_use]
pub fn is_base_scale(scale: f64) -> bool {
    scale < BASE_SCALE_THRESHOLD
}

/// A uniform zoom plus 2D translation applied to a content surface.
///
/// The transform is anchored at the viewport center: content is scaled about
/// the center and then offset by `translate`, in viewport pixels.
///
/// Invariants maintained by callers:
/// - `scale` stays within the configured `[min_scale, max_scale]` range.
/// - At base scale (see [`BASE_SCALE_THRESHOLD`]) the translation is zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Offset applied after scaling, in viewport pixels.
    pub translate: Vec2,
}

impl Transform {
    /// The identity transform: scale `1.0`, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: Vec2::ZERO,
    };

    /// Creates a transform from a scale and translation.
    #[must_use]
    pub const fn new(scale: f64, translate: Vec2) -> Self {
        Self { scale, translate }
    }

    /// Returns `true` if this transform's scale counts as base scale.
    #[must_use]
    pub fn is_base_scale(&self) -> bool {
        is_base_scale(self.scale)
    }

    /// Returns this transform with a different translation.
    #[must_use]
    pub const fn with_translation(self, translate: Vec2) -> Self {
        Self {
            scale: self.scale,
            translate,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
