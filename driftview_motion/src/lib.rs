// Copyright 2026 the Driftview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driftview Motion: post-release animations as stepwise state machines.
//!
//! After a gesture ends, a zoom/pan surface either springs back inside its
//! legal pan bounds ([`SpringBack`]) or coasts under friction from the
//! release velocity ([`Glide`]). [`Motion`] holds at most one of the two and
//! decides between them at release time: spring-back wins when the position
//! is in overshoot, and the release velocity is discarded in that case.
//!
//! The crate is headless and frame-rate agnostic: nothing here schedules
//! callbacks. A higher layer advances the active driver by calling
//! [`Motion::step`] once per display frame and applies the returned position.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use driftview_motion::Motion;
//! use driftview_transform::PanBounds;
//!
//! let bounds = PanBounds { min_x: -500.0, max_x: 500.0, min_y: -700.0, max_y: 400.0 };
//!
//! // Released 30px past the right edge: spring-back is selected.
//! let mut motion = Motion::on_release(Vec2::new(530.0, 0.0), Vec2::ZERO, &bounds, Some(0.92));
//! assert!(motion.is_active());
//!
//! let mut position = Vec2::new(530.0, 0.0);
//! while let Some(step) = motion.step(position, &bounds, 0.25) {
//!     position = step.position;
//! }
//! assert_eq!(position, Vec2::new(500.0, 0.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod driver;
mod glide;
mod spring;

pub use driver::{Motion, MotionStep};
pub use glide::{Glide, GlideStep, MIN_GLIDE_VELOCITY};
pub use spring::{
    SpringBack, SpringStep, REST_DISTANCE, REST_VELOCITY, SPRING_DAMPING, SPRING_STIFFNESS,
};
