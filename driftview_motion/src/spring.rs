// Copyright 2026 the Driftview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Restoring force per pixel of displacement, per frame. Higher snaps faster.
pub const SPRING_STIFFNESS: f64 = 0.15;

/// Per-frame velocity damping. Lower bounces more, higher settles smoother.
pub const SPRING_DAMPING: f64 = 0.75;

/// Distance to the target below which the spring may come to rest, in pixels.
pub const REST_DISTANCE: f64 = 0.5;

/// Velocity magnitude below which the spring may come to rest, in pixels per
/// frame.
pub const REST_VELOCITY: f64 = 0.5;

/// A critically-damped spring that pulls an overshot translation back to the
/// nearest legal position.
///
/// Each step integrates `velocity += -displacement * stiffness`, damps the
/// velocity, and moves by it. When both the remaining distance and the
/// velocity drop below the rest thresholds, the position snaps exactly to the
/// target and the spring reports itself settled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringBack {
    target: Vec2,
    velocity: Vec2,
}

/// One frame of spring integration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringStep {
    /// The position after this step. Exactly the target once settled.
    pub position: Vec2,
    /// Set on the final step.
    pub settled: bool,
}

impl SpringBack {
    /// Creates a spring pulling toward `target`, starting at rest.
    ///
    /// The spring starts with zero velocity on purpose: spring-back is
    /// authoritative at release and any residual gesture velocity is
    /// discarded.
    #[must_use]
    pub const fn toward(target: Vec2) -> Self {
        Self {
            target,
            velocity: Vec2::ZERO,
        }
    }

    /// The position the spring is pulling toward.
    #[must_use]
    pub const fn target(&self) -> Vec2 {
        self.target
    }

    /// Returns `true` if `current` is far enough from `target` that a spring
    /// animation is warranted at all.
    ///
    /// Uses a per-axis tolerance so sub-pixel float noise does not start an
    /// animation.
    #[must_use]
    pub fn needs_spring(current: Vec2, target: Vec2) -> bool {
        (current.x - target.x).abs() > REST_DISTANCE || (current.y - target.y).abs() > REST_DISTANCE
    }

    /// Advances the spring by one frame from `current`.
    pub fn step(&mut self, current: Vec2) -> SpringStep {
        let displacement = current - self.target;
        self.velocity += displacement * -SPRING_STIFFNESS;
        self.velocity *= SPRING_DAMPING;

        let position = current + self.velocity;

        let settled =
            (position - self.target).hypot() < REST_DISTANCE && self.velocity.hypot() < REST_VELOCITY;
        if settled {
            SpringStep {
                position: self.target,
                settled: true,
            }
        } else {
            SpringStep {
                position,
                settled: false,
            }
        }
    }
}
