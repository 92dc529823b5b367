// Copyright 2026 the Driftview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Velocity magnitude, in pixels per frame per axis, below which momentum is
/// not worth starting and an active glide comes to rest.
pub const MIN_GLIDE_VELOCITY: f64 = 0.5;

/// Momentum decay after a pan release.
///
/// Each step multiplies the velocity by the friction factor and reports the
/// resulting per-frame delta. The glide itself never clamps; the caller feeds
/// each proposed position through the pan bounds so momentum can never leave
/// the legal range (unlike rubber-banding, which only applies to live drags).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glide {
    velocity: Vec2,
    friction: f64,
}

/// One frame of momentum decay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlideStep {
    /// Movement for this frame, in pixels.
    pub delta: Vec2,
    /// Set once the velocity has decayed below [`MIN_GLIDE_VELOCITY`] on both
    /// axes.
    pub finished: bool,
}

impl Glide {
    /// Creates a glide from a release velocity, in pixels per frame.
    ///
    /// `friction` is the per-frame decay factor in `(0, 1)`; lower stops
    /// sooner.
    #[must_use]
    pub const fn new(velocity: Vec2, friction: f64) -> Self {
        Self { velocity, friction }
    }

    /// Returns `true` if `velocity` is fast enough to bother animating.
    #[must_use]
    pub fn is_worth_starting(velocity: Vec2) -> bool {
        velocity.x.abs() >= MIN_GLIDE_VELOCITY || velocity.y.abs() >= MIN_GLIDE_VELOCITY
    }

    /// The current velocity, in pixels per frame.
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Advances the glide by one frame.
    pub fn step(&mut self) -> GlideStep {
        self.velocity *= self.friction;
        let finished = self.velocity.x.abs() <= MIN_GLIDE_VELOCITY
            && self.velocity.y.abs() <= MIN_GLIDE_VELOCITY;
        GlideStep {
            delta: self.velocity,
            finished,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_strictly_decreases_each_step() {
        let mut glide = Glide::new(Vec2::new(12.0, -8.0), 0.92);
        let mut last = glide.velocity().hypot();
        loop {
            let step = glide.step();
            let magnitude = glide.velocity().hypot();
            assert!(magnitude < last, "friction must shrink velocity");
            last = magnitude;
            if step.finished {
                break;
            }
        }
    }

    #[test]
    fn finishes_once_both_axes_are_slow() {
        let mut glide = Glide::new(Vec2::new(0.6, 0.0), 0.92);
        let mut steps = 0;
        while !glide.step().finished {
            steps += 1;
            assert!(steps < 100, "glide failed to finish");
        }
        assert!(glide.velocity().x.abs() <= MIN_GLIDE_VELOCITY);
    }

    #[test]
    fn slow_release_is_not_worth_starting() {
        assert!(!Glide::is_worth_starting(Vec2::new(0.4, 0.3)));
        assert!(Glide::is_worth_starting(Vec2::new(0.5, 0.0)));
        assert!(Glide::is_worth_starting(Vec2::new(0.0, -3.0)));
    }

    #[test]
    fn stronger_friction_stops_sooner() {
        let mut loose = Glide::new(Vec2::new(20.0, 0.0), 0.95);
        let mut tight = Glide::new(Vec2::new(20.0, 0.0), 0.8);

        let mut loose_steps = 0;
        while !loose.step().finished {
            loose_steps += 1;
        }
        let mut tight_steps = 0;
        while !tight.step().finished {
            tight_steps += 1;
        }
        assert!(tight_steps < loose_steps);
    }
}
