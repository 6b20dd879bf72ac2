// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom --heading-base-level=0

//! Understory Zoom: pinch-to-zoom for a single image in a viewport.
//!
//! This crate provides a small, headless controller that turns host callbacks
//! into an image → viewport affine transform. It focuses on:
//! - Fit-to-view: the image starts fully visible, centered, preserving aspect ratio.
//! - Clamped pinch zoom about the pinch focal point, between the fit scale and
//!   a configurable multiple of it.
//! - Border/center correction after every change: an axis on which the image
//!   covers the viewport never shows a gap at its edges, and an axis on which
//!   it is smaller stays centered.
//! - Drag detection past a touch slop, with optional panning ([`PanMode`]).
//!
//! It does **not** decode images, recognize pinches from raw samples, or draw
//! anything. Callers are expected to:
//! - Deliver viewport and image sizes once layout has produced them
//!   ([`GeometryListener`]).
//! - Forward pinch ticks from their recognizer ([`ScaleGestureListener`]), or
//!   adapt the recognizer to [`understory_touch::ScaleGestureDetector`] and
//!   forward raw touch events ([`TouchListener`]).
//! - Draw the image with [`ZoomController::transform`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_touch::PinchUpdate;
//! use understory_zoom::{GeometryListener, ScaleGestureListener, ZoomConfig, ZoomController};
//!
//! let mut zoom = ZoomController::new(ZoomConfig::default());
//!
//! // 2000x1000 image in a 1000x2000 viewport: fit by width.
//! zoom.on_geometry_ready(Size::new(1000.0, 2000.0), Size::new(2000.0, 1000.0));
//! assert_eq!(zoom.scale(), 0.5);
//!
//! let bounds = zoom.scale_bounds().unwrap();
//! assert_eq!(bounds.max, 4.0 * bounds.min);
//!
//! // Pinch out far past the maximum: the scale is clamped.
//! zoom.on_scale(PinchUpdate::new(100.0, (500.0, 1000.0)));
//! assert_eq!(zoom.scale(), bounds.max);
//! ```
//!
//! ## Design notes
//!
//! - The transform only ever holds a uniform scale and a translation; the
//!   effective scale is its x-axis scale coefficient.
//! - Each update replaces the transform with a new [`ImageTransform`] value.
//! - Until geometry is delivered the controller is
//!   [`ZoomState::Uninitialized`]; pinch and pan are handled as no-ops.
//! - A pinch tick that would push the scale further past a bound is dropped
//!   entirely; one that overshoots is shortened to land on the bound.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod config;
mod controller;
mod fit;
mod listeners;
mod transform;

pub use config::{PanMode, ZoomConfig};
pub use controller::{ReadyState, ZoomController, ZoomDebugInfo, ZoomState};
pub use fit::{FitCase, InvalidGeometry, ScaleBounds};
pub use listeners::{GeometryListener, ScaleGestureListener, TouchListener};
pub use transform::ImageTransform;
