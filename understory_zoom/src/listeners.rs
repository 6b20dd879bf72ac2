// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing callback contracts.
//!
//! A host wires its layout pass, its pinch recognizer, and its raw touch
//! stream into these three independent traits. [`crate::ZoomController`]
//! implements all of them, but each can be driven on its own.

use kurbo::{Point, Size};
use understory_touch::{PinchUpdate, TouchEvent};

/// Receives viewport and image geometry once layout has produced them.
pub trait GeometryListener {
    /// Called once per attach, after the viewport has a non-zero size and an
    /// image is set.
    fn on_geometry_ready(&mut self, viewport: Size, image: Size);
}

/// Receives pinch gesture callbacks from the host's recognizer.
pub trait ScaleGestureListener {
    /// A pinch started. Returns `true` to accept the gesture.
    fn on_scale_begin(&mut self, _focus: Point) -> bool {
        true
    }

    /// One pinch tick. Returns `true` if the event was handled.
    fn on_scale(&mut self, update: PinchUpdate) -> bool;

    /// The pinch ended.
    fn on_scale_end(&mut self) {}
}

/// Receives raw touch events.
pub trait TouchListener {
    /// Processes one touch event. Returns `true` if the event was consumed.
    fn on_touch(&mut self, event: &TouchEvent<'_>) -> bool;
}
