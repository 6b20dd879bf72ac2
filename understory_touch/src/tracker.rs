// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-sequence gesture bookkeeping: averaged pointer anchor, pointer count, and drag engagement.
//!
//! ## Usage
//!
//! 1) Feed every touch event to [`GestureTracker::on_event`].
//! 2) When it returns a delta, the sequence has moved past the touch slop and
//!    is considered a drag. The delta is measured from the current anchor.
//! 3) Either call [`GestureTracker::rebase`] after consuming the delta (the next
//!    delta is then relative to the new position), or
//!    [`GestureTracker::release_drag`] to drop engagement and keep the anchor.
//!
//! Whenever the number of active pointers changes, the anchor moves to the new
//! averaged position and engagement is cleared, so adding or lifting a finger
//! never produces a jump.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_touch::{GestureTracker, TouchEvent, TouchPhase};
//!
//! let mut tracker = GestureTracker::new(8.0);
//!
//! tracker.on_event(&TouchEvent::new(TouchPhase::Down, &[Point::new(10.0, 10.0)]));
//!
//! // Within slop: not a drag yet.
//! let d = tracker.on_event(&TouchEvent::new(TouchPhase::Move, &[Point::new(13.0, 14.0)]));
//! assert_eq!(d, None);
//!
//! // Past slop: the delta from the anchor is reported.
//! let d = tracker.on_event(&TouchEvent::new(TouchPhase::Move, &[Point::new(20.0, 10.0)]));
//! assert_eq!(d, Some(Vec2::new(10.0, 0.0)));
//! assert!(tracker.is_drag_engaged());
//! ```

use kurbo::{Point, Vec2};

use crate::event::{TouchEvent, TouchPhase};

/// Bookkeeping state of a [`GestureTracker`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum TrackerState {
    /// No touch sequence is in progress.
    #[default]
    NoPointers,
    /// A touch sequence is in progress.
    Active {
        /// Number of pointers seen on the last event.
        count: usize,
        /// Averaged position that deltas are measured from.
        anchor: Point,
        /// Whether the sequence has moved past the touch slop.
        drag_engaged: bool,
    },
}

/// Tracks one touch sequence at a time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureTracker {
    state: TrackerState,
    touch_slop: f64,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl GestureTracker {
    /// Creates a tracker that engages a drag once displacement exceeds `touch_slop`.
    ///
    /// Negative or non-finite slop values are treated as `0.0`.
    #[must_use]
    pub fn new(touch_slop: f64) -> Self {
        Self {
            state: TrackerState::NoPointers,
            touch_slop: sanitize_slop(touch_slop),
        }
    }

    /// Returns the configured touch slop.
    #[must_use]
    pub fn touch_slop(&self) -> f64 {
        self.touch_slop
    }

    /// Updates the touch slop. Takes effect on the next move event.
    pub fn set_touch_slop(&mut self, touch_slop: f64) {
        self.touch_slop = sanitize_slop(touch_slop);
    }

    /// Returns the current bookkeeping state.
    #[must_use]
    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// Returns `true` while a drag is engaged.
    #[must_use]
    pub fn is_drag_engaged(&self) -> bool {
        matches!(
            self.state,
            TrackerState::Active {
                drag_engaged: true,
                ..
            }
        )
    }

    /// Processes one touch event.
    ///
    /// Returns the displacement from the anchor when this event is a move and
    /// the drag is engaged (either already, or newly by exceeding the slop).
    pub fn on_event(&mut self, event: &TouchEvent<'_>) -> Option<Vec2> {
        let Some(centroid) = event.centroid() else {
            self.reset();
            return None;
        };
        let count = event.pointer_count();

        let (anchor, mut engaged) = match self.state {
            TrackerState::Active {
                count: last_count,
                anchor,
                drag_engaged,
            } if last_count == count => (anchor, drag_engaged),
            _ => (centroid, false),
        };

        let mut delta = None;
        if event.phase == TouchPhase::Move {
            let d = centroid - anchor;
            if !engaged {
                engaged = d.hypot() > self.touch_slop;
                if engaged {
                    log::trace!("drag engaged after {:.2}px", d.hypot());
                }
            }
            if engaged {
                delta = Some(d);
            }
        }

        self.state = if event.phase.is_terminal() {
            TrackerState::NoPointers
        } else {
            TrackerState::Active {
                count,
                anchor,
                drag_engaged: engaged,
            }
        };
        delta
    }

    /// Moves the anchor to `pos`, keeping the current engagement.
    ///
    /// Has no effect when no sequence is active.
    pub fn rebase(&mut self, pos: Point) {
        if let TrackerState::Active { anchor, .. } = &mut self.state {
            *anchor = pos;
        }
    }

    /// Clears drag engagement while keeping the anchor in place.
    pub fn release_drag(&mut self) {
        if let TrackerState::Active { drag_engaged, .. } = &mut self.state {
            *drag_engaged = false;
        }
    }

    /// Forgets any sequence in progress.
    pub fn reset(&mut self) {
        self.state = TrackerState::NoPointers;
    }
}

fn sanitize_slop(touch_slop: f64) -> f64 {
    if touch_slop.is_finite() && touch_slop > 0.0 {
        touch_slop
    } else {
        0.0
    }
}
