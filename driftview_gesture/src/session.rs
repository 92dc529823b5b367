// Copyright 2026 the Driftview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Reference frame duration used to normalize velocities to pixels per frame.
const FRAME_MS: f64 = 16.0;

/// Distance between the first two touch points, or `0.0` with fewer than two.
#[must_use]
pub fn touch_distance(touches: &[Point]) -> f64 {
    match touches {
        [a, b, ..] => (*b - *a).hypot(),
        _ => 0.0,
    }
}

/// Center of the first two touch points; the single point with one touch,
/// the origin with none.
#[must_use]
pub fn touch_center(touches: &[Point]) -> Point {
    match touches {
        [a, b, ..] => a.midpoint(*b),
        [a] => *a,
        [] => Point::ORIGIN,
    }
}

/// State for one two-finger interaction, from capture to final release.
///
/// At most one session exists at a time; starting a new one cancels whatever
/// release animation was running. The session tracks the last pinch distance
/// and center so each move event can be turned into a scale ratio and a pan
/// delta, and keeps an instantaneous velocity estimate for the momentum
/// decision at release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSession {
    last_distance: Option<f64>,
    last_center: Point,
    last_move_ms: f64,
    velocity: Vec2,
    start_scale: f64,
}

/// What one move event contributes to the transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchDelta {
    /// Ratio of the new pinch distance to the previous one; `1.0` when the
    /// distance tracking was interrupted by a lifted finger.
    pub scale_ratio: f64,
    /// Current pinch center in viewport coordinates; the zoom focal point.
    pub center: Point,
    /// Movement of the pinch center since the last event, in pixels.
    pub pan: Vec2,
}

impl PinchSession {
    /// Starts a session from a touch-start event, or `None` with fewer than
    /// two touch points.
    #[must_use]
    pub fn begin(touches: &[Point], time_ms: f64, scale: f64) -> Option<Self> {
        if touches.len() < 2 {
            return None;
        }
        Some(Self {
            last_distance: Some(touch_distance(touches)),
            last_center: touch_center(touches),
            last_move_ms: time_ms,
            velocity: Vec2::ZERO,
            start_scale: scale,
        })
    }

    /// The scale when the gesture was captured.
    #[must_use]
    pub const fn start_scale(&self) -> f64 {
        self.start_scale
    }

    /// The latest velocity estimate, in pixels per frame.
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Stops distance tracking when the touch count drops below two.
    ///
    /// The session itself survives until the touch count reaches zero; if a
    /// second finger lands again, the next move re-seeds the distance and the
    /// scale ratio stays at `1.0` for that event.
    pub fn end_pinch(&mut self) {
        self.last_distance = None;
    }

    /// Re-seeds tracking from a new pair of touch points.
    ///
    /// Used when the set of active fingers changes without the gesture
    /// ending (a third finger lifting back to two). Without the re-seed, the
    /// next move would compare against the previous pair's distance and
    /// center and produce a spurious scale and pan jump.
    pub fn reseed(&mut self, touches: &[Point], time_ms: f64) {
        self.last_distance = Some(touch_distance(touches));
        self.last_center = touch_center(touches);
        self.last_move_ms = time_ms;
    }

    /// Folds a move event into the session and returns its contribution.
    ///
    /// The velocity estimate is the center movement scaled to a 16 ms frame,
    /// with the elapsed time floored at 1 ms so a burst of events cannot
    /// produce an unbounded velocity. Returns `None` with fewer than two
    /// touch points.
    pub fn advance(&mut self, touches: &[Point], time_ms: f64) -> Option<PinchDelta> {
        if touches.len() < 2 {
            return None;
        }

        let dt = (time_ms - self.last_move_ms).max(1.0);
        let distance = touch_distance(touches);
        let center = touch_center(touches);

        let scale_ratio = match self.last_distance {
            Some(last) if last > 0.0 => distance / last,
            _ => 1.0,
        };
        let pan = center - self.last_center;
        self.velocity = pan * (FRAME_MS / dt);

        self.last_distance = Some(distance);
        self.last_center = center;
        self.last_move_ms = time_ms;

        Some(PinchDelta {
            scale_ratio,
            center,
            pan,
        })
    }
}
