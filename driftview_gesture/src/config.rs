// Copyright 2026 the Driftview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Scale multiplier applied by the imperative zoom-in/zoom-out controls.
pub const ZOOM_STEP: f64 = 1.5;

/// Scale change per wheel-delta unit. Small on purpose so that trackpad
/// pinches (which arrive as fine-grained wheel deltas) feel smooth.
pub const WHEEL_ZOOM_INTENSITY: f64 = 0.002;

/// Configuration for a [`GestureController`](crate::GestureController).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Smallest permitted scale.
    pub min_scale: f64,
    /// Largest permitted scale.
    pub max_scale: f64,
    /// Scale at construction; clamped into `[min_scale, max_scale]`.
    pub initial_scale: f64,
    /// Whether a pan release with residual velocity coasts under friction.
    pub enable_momentum: bool,
    /// Per-frame momentum decay factor in `(0, 1)`; lower stops sooner.
    pub momentum_friction: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 5.0,
            initial_scale: 1.0,
            enable_momentum: true,
            momentum_friction: 0.92,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = GestureConfig::default();
        assert_eq!(config.min_scale, 0.5);
        assert_eq!(config.max_scale, 5.0);
        assert_eq!(config.initial_scale, 1.0);
        assert!(config.enable_momentum);
        assert_eq!(config.momentum_friction, 0.92);
    }
}
