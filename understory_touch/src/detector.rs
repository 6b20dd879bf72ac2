// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seam for the host's pinch recognizer.
//!
//! Recognizing a pinch from raw multi-touch samples is left to the host
//! platform. A recognizer is adapted to [`ScaleGestureDetector`] and fed every
//! touch event; it reports [`PinchEvent`]s, each tick carrying a multiplicative
//! scale delta and a focal point.

use kurbo::Point;

use crate::event::TouchEvent;

/// One tick of a pinch gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchUpdate {
    /// Multiplicative scale delta for this tick. `1.0` means no change.
    pub scale_factor: f64,
    /// Pinch focal point in viewport coordinates.
    pub focus: Point,
}

impl PinchUpdate {
    /// Creates a pinch update.
    #[must_use]
    pub fn new(scale_factor: f64, focus: impl Into<Point>) -> Self {
        Self {
            scale_factor,
            focus: focus.into(),
        }
    }
}

/// Events reported by a [`ScaleGestureDetector`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PinchEvent {
    /// A pinch started around the given focal point.
    Begin(Point),
    /// A pinch tick.
    Update(PinchUpdate),
    /// The pinch ended.
    End,
}

/// Adapter for a pinch recognizer.
pub trait ScaleGestureDetector {
    /// Feeds one raw touch event to the recognizer.
    ///
    /// Returns the pinch event this touch event produced, if any.
    fn on_touch_event(&mut self, event: &TouchEvent<'_>) -> Option<PinchEvent>;
}

/// No recognizer: never reports a pinch.
impl ScaleGestureDetector for () {
    fn on_touch_event(&mut self, _event: &TouchEvent<'_>) -> Option<PinchEvent> {
        None
    }
}

impl<D: ScaleGestureDetector + ?Sized> ScaleGestureDetector for &mut D {
    fn on_touch_event(&mut self, event: &TouchEvent<'_>) -> Option<PinchEvent> {
        (**self).on_touch_event(event)
    }
}
