// Copyright 2026 the Driftview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

/// Computes the translation that keeps the content under `focal` stationary
/// across a scale change.
///
/// `focal` is in viewport coordinates (relative to the viewport's top-left
/// corner); the content transform is anchored at the viewport center, so the
/// solver works center-relative internally.
///
/// Derivation: with a center-anchored transform, the screen position of a
/// content point is `content * scale + translate`. The content point under
/// the focal point before the change is therefore
/// `(focal_from_center - old_translate) / old_scale`, and the translation
/// that pins it back under the focal point after the change is
/// `focal_from_center - content * new_scale`.
///
/// This must be applied on every discrete zoom step (each wheel tick or pinch
/// delta), not only at gesture end, so the focal point tracks continuously.
#[must_use]
pub fn zoom_to_point(
    focal: Point,
    viewport: Size,
    old_scale: f64,
    new_scale: f64,
    old_translate: Vec2,
) -> Vec2 {
    let center = Point::new(viewport.width / 2.0, viewport.height / 2.0);
    let origin_from_center = focal - center;

    let content = (origin_from_center - old_translate) / old_scale;
    origin_from_center - content * new_scale
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(800.0, 600.0);

    /// The content point under `focal` for a given transform.
    fn content_under(focal: Point, scale: f64, translate: Vec2) -> Vec2 {
        let center = Point::new(VIEWPORT.width / 2.0, VIEWPORT.height / 2.0);
        ((focal - center) - translate) / scale
    }

    #[test]
    fn zooming_at_center_leaves_translation_unchanged() {
        let center = Point::new(400.0, 300.0);
        let translate = zoom_to_point(center, VIEWPORT, 1.0, 2.0, Vec2::ZERO);
        assert!(translate.hypot() < 1e-9);
    }

    #[test]
    fn focal_content_point_is_invariant() {
        let cases = [
            (Point::new(100.0, 50.0), 1.0, 2.0, Vec2::ZERO),
            (Point::new(650.0, 480.0), 2.0, 3.5, Vec2::new(40.0, -120.0)),
            (Point::new(400.0, 300.0), 3.0, 1.5, Vec2::new(-200.0, 90.0)),
            (Point::new(0.0, 600.0), 1.2, 4.8, Vec2::new(15.0, 15.0)),
        ];
        for (focal, old_scale, new_scale, old_translate) in cases {
            let before = content_under(focal, old_scale, old_translate);
            let new_translate = zoom_to_point(focal, VIEWPORT, old_scale, new_scale, old_translate);
            let after = content_under(focal, new_scale, new_translate);
            assert!(
                (before - after).hypot() < 1e-9,
                "content point drifted for focal {focal:?}"
            );
        }
    }

    #[test]
    fn zooming_toward_a_corner_pulls_content_outward() {
        // Zooming in toward the upper-left quadrant pushes content down-right
        // so the focused region stays put.
        let translate = zoom_to_point(Point::new(100.0, 100.0), VIEWPORT, 1.0, 2.0, Vec2::ZERO);
        assert!(translate.x > 0.0);
        assert!(translate.y > 0.0);
    }

    #[test]
    fn identity_scale_change_is_a_no_op() {
        let old = Vec2::new(33.0, -7.0);
        let translate = zoom_to_point(Point::new(210.0, 470.0), VIEWPORT, 2.0, 2.0, old);
        assert!((translate - old).hypot() < 1e-9);
    }
}
