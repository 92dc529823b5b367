// Copyright 2026 the Driftview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Size, Vec2};
use log::warn;

use driftview_motion::Motion;
use driftview_transform::{
    clamp_translation, is_base_scale, pan_bounds, rubber_band, zoom_to_point, BoundsParams,
    Transform,
};

use crate::config::{GestureConfig, WHEEL_ZOOM_INTENSITY, ZOOM_STEP};
use crate::host::GestureHost;
use crate::input::{Handled, InputModality, WheelInput};
use crate::scheduler::FrameScheduler;
use crate::session::PinchSession;
use crate::store::TransformStore;

type InteractionCallback = Box<dyn FnMut()>;

/// The gesture facade: turns touch and wheel input into a bounded transform,
/// runs the release animations, and batches writes to the host.
///
/// Event handlers and imperative controls all funnel through the same state:
/// starting a gesture or calling a control cancels whatever release animation
/// is running, so at most one thing ever writes the transform per frame. A
/// [`GestureHost`] supplies the viewport size, receives transform writes, and
/// drives [`on_frame`](Self::on_frame) from its display-frame callback.
pub struct GestureController {
    config: GestureConfig,
    bounds_params: BoundsParams,
    store: TransformStore,
    scheduler: FrameScheduler,
    motion: Motion,
    session: Option<PinchSession>,
    // Raw accumulated translation for the active gesture, before rubber-band
    // damping. The displayed value is derived from it on every move; without
    // the separate accumulator, re-damping the displayed value would creep
    // the view back toward the bound while the fingers hold still.
    gesture_translate: Vec2,
    panning: bool,
    animating: bool,
    on_interaction_start: Option<InteractionCallback>,
    on_interaction_end: Option<InteractionCallback>,
}

impl GestureController {
    /// Creates a controller with the given configuration.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        let scale = config.initial_scale.clamp(config.min_scale, config.max_scale);
        Self {
            config,
            bounds_params: BoundsParams::default(),
            store: TransformStore::new(Transform::new(scale, Vec2::ZERO)),
            scheduler: FrameScheduler::new(),
            motion: Motion::idle(),
            session: None,
            gesture_translate: Vec2::ZERO,
            panning: false,
            animating: true,
            on_interaction_start: None,
            on_interaction_end: None,
        }
    }

    /// The configuration this controller was created with.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// The published transform snapshot, updated at gesture and animation
    /// boundaries.
    #[must_use]
    pub fn snapshot(&self) -> Transform {
        self.store.published()
    }

    /// The authoritative per-frame transform, for the render path.
    #[must_use]
    pub fn peek(&self) -> Transform {
        self.store.peek()
    }

    /// Returns `true` once the published scale is past the base-scale
    /// threshold.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        !is_base_scale(self.store.published().scale)
    }

    /// Returns `true` while a two-finger gesture is being tracked.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.panning
    }

    /// Returns `true` when consumer-side smoothing transitions should be
    /// enabled.
    ///
    /// False during raw gesture tracking, where host-side smoothing would
    /// fight the direct per-frame writes; true during imperative jumps and
    /// after release.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Registers a subscriber for published transform snapshots.
    pub fn subscribe(&mut self, listener: impl FnMut(Transform) + 'static) {
        self.store.subscribe(listener);
    }

    /// Sets the callback fired once when a gesture captures its input.
    pub fn on_interaction_start(&mut self, callback: impl FnMut() + 'static) {
        self.on_interaction_start = Some(Box::new(callback));
    }

    /// Sets the callback fired once when a gesture fully releases.
    pub fn on_interaction_end(&mut self, callback: impl FnMut() + 'static) {
        self.on_interaction_end = Some(Box::new(callback));
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.config.min_scale, self.config.max_scale)
    }

    /// Hard-clamps a candidate translation, logging the degenerate-bounds
    /// condition instead of snapping to center.
    fn bounded_translation(&self, p: Vec2, scale: f64, viewport: Option<Size>) -> Vec2 {
        let clamped = clamp_translation(p, scale, viewport, &self.bounds_params);
        if clamped.degenerate {
            warn!("pan bounds degenerated to zero at scale {scale}; keeping candidate translation");
        }
        clamped.point
    }

    fn halt_animation(&mut self, host: &mut dyn GestureHost) {
        self.motion.cancel();
        self.scheduler.cancel(host);
    }

    /// Writes and publishes a transform synchronously, bypassing frame
    /// batching. Used by the imperative controls.
    fn apply_direct(&mut self, host: &mut dyn GestureHost, transform: Transform) {
        self.store.set(transform);
        self.gesture_translate = transform.translate;
        host.apply_transform(transform);
        self.store.publish();
    }

    /// Handles a touch-start event.
    ///
    /// Only an exact two-finger touch captures; anything else passes through
    /// so single-pointer input stays available to the surface underneath.
    pub fn on_touch_start(
        &mut self,
        host: &mut dyn GestureHost,
        touches: &[Point],
        time_ms: f64,
    ) -> Handled {
        if !InputModality::from_touch_count(touches.len()).policy().pans {
            return Handled::PassThrough;
        }

        // A new gesture is authoritative over any running animation.
        self.halt_animation(host);
        self.animating = false;
        self.panning = true;
        if let Some(callback) = &mut self.on_interaction_start {
            callback();
        }
        self.session = PinchSession::begin(touches, time_ms, self.store.peek().scale);
        self.gesture_translate = self.store.peek().translate;
        Handled::Consumed
    }

    /// Handles a touch-move event while a two-finger gesture is active.
    ///
    /// Combines the pinch scale change (zoomed to the pinch center) with the
    /// center's pan movement, then rubber-bands the result over the
    /// corner-widened pan bounds for display.
    pub fn on_touch_move(
        &mut self,
        host: &mut dyn GestureHost,
        touches: &[Point],
        time_ms: f64,
    ) -> Handled {
        if !InputModality::from_touch_count(touches.len()).policy().pans {
            return Handled::PassThrough;
        }
        let Some(session) = &mut self.session else {
            // Two fingers can become active without a fresh touch-start (a
            // third finger lifting after a three-finger contact); capture
            // the gesture from this move instead.
            return self.on_touch_start(host, touches, time_ms);
        };
        let Some(delta) = session.advance(touches, time_ms) else {
            return Handled::PassThrough;
        };

        let current = self.store.peek();
        let viewport = host.viewport_size();

        let mut scale = current.scale;
        let mut translate = self.gesture_translate;

        if delta.scale_ratio > 0.0 {
            scale = self.clamp_scale(current.scale * delta.scale_ratio);
            if let Some(size) = viewport {
                if scale != current.scale {
                    translate = zoom_to_point(delta.center, size, current.scale, scale, translate);
                }
            }
        }
        translate += delta.pan;

        let displayed = if is_base_scale(scale) {
            translate = Vec2::ZERO;
            Vec2::ZERO
        } else {
            let bounds = pan_bounds(scale, viewport, &self.bounds_params);
            if bounds.is_zero() {
                // Logic error upstream; keep the candidate rather than snap.
                translate
            } else {
                // Widen the X range for bottom-region travel first, so a
                // diagonal drag can reach the expanded corner bound and the
                // rubber resistance starts from there.
                let bounds = bounds.expanded_for(translate, self.bounds_params.corner_expansion);
                rubber_band(translate, &bounds)
            }
        };
        self.gesture_translate = translate;

        let next = Transform::new(scale, displayed);
        self.store.set(next);
        self.scheduler.schedule(host, next);
        Handled::Consumed
    }

    /// Handles a touch-end event.
    ///
    /// Dropping below two touches stops pinch-distance tracking; two or more
    /// remaining touches re-seed tracking from the surviving pair; reaching
    /// zero touches releases the gesture and chooses between spring-back,
    /// momentum, and an immediate publish.
    pub fn on_touch_end(
        &mut self,
        host: &mut dyn GestureHost,
        touches: &[Point],
        time_ms: f64,
    ) -> Handled {
        let had_session = self.session.is_some();

        if let Some(session) = &mut self.session {
            if touches.len() < 2 {
                session.end_pinch();
            } else {
                session.reseed(touches, time_ms);
            }
        }

        if !touches.is_empty() {
            return if had_session {
                Handled::Consumed
            } else {
                Handled::PassThrough
            };
        }

        let velocity = self
            .session
            .take()
            .map(|session| session.velocity())
            .unwrap_or(Vec2::ZERO);
        if !had_session {
            return Handled::PassThrough;
        }

        self.panning = false;
        self.animating = true;
        if let Some(callback) = &mut self.on_interaction_end {
            callback();
        }
        self.release(host, velocity);
        Handled::Consumed
    }

    /// Chooses the release animation, or publishes the resting state.
    fn release(&mut self, host: &mut dyn GestureHost, velocity: Vec2) {
        let current = self.store.peek();
        if current.is_base_scale() {
            self.store.publish();
            return;
        }

        let bounds = pan_bounds(current.scale, host.viewport_size(), &self.bounds_params);
        if bounds.is_zero() {
            warn!(
                "pan bounds degenerated to zero at scale {}; skipping release animation",
                current.scale
            );
            self.store.publish();
            return;
        }

        let friction = self
            .config
            .enable_momentum
            .then_some(self.config.momentum_friction);
        self.motion = Motion::on_release(current.translate, velocity, &bounds, friction);
        if self.motion.is_active() {
            self.scheduler.ensure_frame(host);
        } else {
            self.store.publish();
        }
    }

    /// Handles a wheel event.
    ///
    /// Zooms toward the cursor only while the precision-zoom modifier is
    /// held; ordinary scrolling passes through. Wheel input is discrete, not
    /// gestural: the result is published synchronously and never starts
    /// momentum or spring-back.
    pub fn on_wheel(&mut self, host: &mut dyn GestureHost, wheel: WheelInput) -> Handled {
        if !wheel.precision_modifier {
            return Handled::PassThrough;
        }

        self.halt_animation(host);

        let Some(viewport) = host.viewport_size() else {
            return Handled::Consumed;
        };

        let current = self.store.peek();
        let scale = self.clamp_scale(current.scale * (1.0 - wheel.delta_y * WHEEL_ZOOM_INTENSITY));
        let translate = zoom_to_point(wheel.position, viewport, current.scale, scale, current.translate);
        let translate = if is_base_scale(scale) {
            Vec2::ZERO
        } else {
            self.bounded_translation(translate, scale, Some(viewport))
        };

        let next = Transform::new(scale, translate);
        self.store.set(next);
        self.scheduler.schedule(host, next);
        self.store.publish();
        Handled::Consumed
    }

    /// Multiplies the scale by the zoom step.
    ///
    /// The current translation is kept as-is while still zoomed; the next
    /// clamping operation re-bounds it.
    pub fn zoom_in(&mut self, host: &mut dyn GestureHost) {
        self.halt_animation(host);
        self.animating = true;

        let current = self.store.peek();
        let scale = self.clamp_scale(current.scale * ZOOM_STEP);
        let translate = if is_base_scale(scale) {
            Vec2::ZERO
        } else {
            current.translate
        };
        self.apply_direct(host, Transform::new(scale, translate));
    }

    /// Divides the scale by the zoom step and re-clamps the translation to
    /// the tighter bounds.
    pub fn zoom_out(&mut self, host: &mut dyn GestureHost) {
        self.halt_animation(host);
        self.animating = true;

        let current = self.store.peek();
        let scale = self.clamp_scale(current.scale / ZOOM_STEP);
        let translate = if is_base_scale(scale) {
            Vec2::ZERO
        } else {
            self.bounded_translation(current.translate, scale, host.viewport_size())
        };
        self.apply_direct(host, Transform::new(scale, translate));
    }

    /// Returns to the identity transform immediately, cancelling any
    /// gesture follow-up or animation in flight.
    pub fn reset_zoom(&mut self, host: &mut dyn GestureHost) {
        self.halt_animation(host);
        self.animating = true;
        self.apply_direct(host, Transform::IDENTITY);
    }

    /// Jumps to a specific scale.
    ///
    /// Out-of-range and infinite scales are clamped, never rejected; a NaN
    /// leaves the scale unchanged. The translation is re-clamped to the new
    /// scale's bounds.
    pub fn set_scale(&mut self, host: &mut dyn GestureHost, scale: f64) {
        self.halt_animation(host);
        self.animating = true;

        let current = self.store.peek();
        let scale = if scale.is_nan() {
            current.scale
        } else {
            self.clamp_scale(scale)
        };
        let translate = if is_base_scale(scale) {
            Vec2::ZERO
        } else {
            self.bounded_translation(current.translate, scale, host.viewport_size())
        };
        self.apply_direct(host, Transform::new(scale, translate));
    }

    /// The host's display-frame callback.
    ///
    /// Flushes the batched transform write, then advances the release
    /// animation if one is running and schedules the next frame for it.
    pub fn on_frame(&mut self, host: &mut dyn GestureHost) {
        self.scheduler.frame_fired();
        self.scheduler.flush(host);

        if !self.motion.is_active() {
            return;
        }

        let current = self.store.peek();
        let bounds = pan_bounds(current.scale, host.viewport_size(), &self.bounds_params);
        if bounds.is_zero() && !current.is_base_scale() {
            warn!(
                "pan bounds degenerated to zero at scale {}; halting release animation",
                current.scale
            );
            self.motion.cancel();
            self.store.publish();
            return;
        }

        if let Some(step) =
            self.motion
                .step(current.translate, &bounds, self.bounds_params.corner_expansion)
        {
            let next = current.with_translation(step.position);
            self.store.set(next);
            self.scheduler.schedule(host, next);
            if step.finished {
                self.store.publish();
            }
        }
    }

    /// Releases host resources when the hosting surface unmounts.
    pub fn teardown(&mut self, host: &mut dyn GestureHost) {
        self.halt_animation(host);
    }
}

impl fmt::Debug for GestureController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureController")
            .field("config", &self.config)
            .field("store", &self.store)
            .field("motion", &self.motion)
            .field("session", &self.session)
            .field("panning", &self.panning)
            .field("animating", &self.animating)
            .finish_non_exhaustive()
    }
}
