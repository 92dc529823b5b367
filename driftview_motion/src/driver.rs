// Copyright 2026 the Driftview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use driftview_transform::PanBounds;

use crate::glide::Glide;
use crate::spring::SpringBack;

/// The single active release animation, if any.
///
/// At most one driver runs at a time. Entering any state replaces the
/// previous driver outright; a cancelled spring carries no residual velocity
/// into whatever starts next, because the new operation is authoritative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// No animation is running.
    Idle,
    /// Springing back to the nearest legal position after an overshoot.
    Spring(SpringBack),
    /// Coasting under friction from the release velocity.
    Glide(Glide),
}

/// One frame of the active release animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionStep {
    /// The translation after this step.
    pub position: Vec2,
    /// Set on the final step; the driver is [`Motion::Idle`] afterwards.
    pub finished: bool,
}

impl Motion {
    /// The idle driver.
    #[must_use]
    pub const fn idle() -> Self {
        Self::Idle
    }

    /// Returns `true` while an animation is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Halts any running animation immediately.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Chooses the release animation for a gesture ending at `current` with
    /// the given release velocity.
    ///
    /// Spring-back has priority: if `current` is past the rectangular bounds
    /// by more than the rest tolerance, the spring runs and the release
    /// velocity is discarded. Otherwise, if momentum is enabled
    /// (`momentum_friction` is `Some`) and the velocity is significant, a
    /// glide runs. Otherwise the driver stays idle and the caller publishes
    /// the resting position directly.
    #[must_use]
    pub fn on_release(
        current: Vec2,
        velocity: Vec2,
        bounds: &PanBounds,
        momentum_friction: Option<f64>,
    ) -> Self {
        let target = bounds.clamp_point(current);
        if SpringBack::needs_spring(current, target) {
            return Self::Spring(SpringBack::toward(target));
        }
        if let Some(friction) = momentum_friction {
            if Glide::is_worth_starting(velocity) {
                return Self::Glide(Glide::new(velocity, friction));
            }
        }
        Self::Idle
    }

    /// Advances the active animation by one frame from `current`.
    ///
    /// Glide positions are fed through the bounds every step (with the corner
    /// expansion applied), so momentum can never move past the legal range.
    /// Returns `None` when idle; after a step with `finished` set the driver
    /// is idle again.
    pub fn step(
        &mut self,
        current: Vec2,
        bounds: &PanBounds,
        corner_expansion: f64,
    ) -> Option<MotionStep> {
        match self {
            Self::Idle => None,
            Self::Spring(spring) => {
                let step = spring.step(current);
                if step.settled {
                    *self = Self::Idle;
                }
                Some(MotionStep {
                    position: step.position,
                    finished: step.settled,
                })
            }
            Self::Glide(glide) => {
                let step = glide.step();
                let position =
                    bounds.clamp_with_corner_expansion(current + step.delta, corner_expansion);
                if step.finished {
                    *self = Self::Idle;
                }
                Some(MotionStep {
                    position,
                    finished: step.finished,
                })
            }
        }
    }
}
