// Copyright 2026 the Driftview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// What a gesture handler did with an input event.
///
/// When a handler reports [`Consumed`](Handled::Consumed), the host must veto
/// the platform's default handling for that event (native pinch-zoom,
/// scrolling); see [`GestureHost`](crate::GestureHost) for the capability
/// this requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handled {
    /// The engine captured the event; the host should suppress defaults.
    Consumed,
    /// The engine ignored the event; it passes to the underlying surface.
    PassThrough,
}

impl Handled {
    /// Returns `true` if the engine captured the event.
    #[must_use]
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}

/// The kind of pointer interaction an event originates from.
///
/// Which modality may pan or zoom is an explicit routing decision:
/// single-pointer input (finger, mouse, or stylus) must always reach the
/// underlying surface so precise point placement keeps working while the
/// engine is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputModality {
    /// One touch point. Also used for three or more, which the engine treats
    /// like a single pointer and leaves to the surface.
    SingleTouch,
    /// Exactly two touch points.
    TwoFingerTouch,
    /// Mouse drag.
    Mouse,
    /// Stylus contact.
    Stylus,
    /// Wheel or trackpad scroll.
    Wheel,
}

/// The capabilities granted to one input modality.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModalityPolicy {
    /// May move the content.
    pub pans: bool,
    /// May change the scale.
    pub zooms: bool,
}

impl InputModality {
    /// Classifies a touch event by its active touch count.
    #[must_use]
    pub fn from_touch_count(count: usize) -> Self {
        if count == 2 {
            Self::TwoFingerTouch
        } else {
            Self::SingleTouch
        }
    }

    /// The capability table: only two-finger touch pans, only two-finger
    /// touch and modified wheel input zoom, and everything single-pointer
    /// passes through untouched.
    #[must_use]
    pub fn policy(self) -> ModalityPolicy {
        match self {
            Self::TwoFingerTouch => ModalityPolicy {
                pans: true,
                zooms: true,
            },
            Self::Wheel => ModalityPolicy {
                pans: false,
                zooms: true,
            },
            Self::SingleTouch | Self::Mouse | Self::Stylus => ModalityPolicy {
                pans: false,
                zooms: false,
            },
        }
    }
}

/// A wheel or trackpad-scroll event, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Cursor position relative to the container's top-left corner; the zoom
    /// focal point.
    pub position: Point,
    /// Vertical scroll delta; negative zooms in.
    pub delta_y: f64,
    /// Whether the precision-zoom modifier (Ctrl/Cmd) was held. Without it
    /// the event is ordinary scrolling and is never captured.
    pub precision_modifier: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_two_finger_touch_pans() {
        for modality in [
            InputModality::SingleTouch,
            InputModality::Mouse,
            InputModality::Stylus,
            InputModality::Wheel,
        ] {
            assert!(!modality.policy().pans, "{modality:?} must not pan");
        }
        assert!(InputModality::TwoFingerTouch.policy().pans);
    }

    #[test]
    fn stylus_never_zooms() {
        // A stylus stays available for point placement on the surface.
        assert!(!InputModality::Stylus.policy().zooms);
    }

    #[test]
    fn three_fingers_route_like_a_single_pointer() {
        assert_eq!(InputModality::from_touch_count(3), InputModality::SingleTouch);
        assert_eq!(InputModality::from_touch_count(2), InputModality::TwoFingerTouch);
        assert_eq!(InputModality::from_touch_count(1), InputModality::SingleTouch);
    }
}
