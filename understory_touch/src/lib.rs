// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_touch --heading-base-level=0

//! Understory Touch: multi-touch input model and gesture bookkeeping.
//!
//! This crate provides the small pieces a touch-driven widget needs between the
//! host's raw pointer events and its own state machine:
//!
//! - [`TouchEvent`] / [`TouchPhase`]: a phase plus the positions of every active
//!   pointer, with the averaged position ([`TouchEvent::centroid`]).
//! - [`GestureTracker`]: per-sequence bookkeeping of the averaged anchor, the
//!   pointer count, and whether the sequence moved past the touch slop.
//! - [`ScaleGestureDetector`]: the seam through which a host pinch recognizer
//!   reports [`PinchEvent`]s.
//!
//! The crate does not recognize pinches itself and does not assume any
//! particular windowing system. Hosts translate their native events into
//! [`TouchEvent`]s and adapt their recognizer to [`ScaleGestureDetector`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_touch::{GestureTracker, TouchEvent, TouchPhase, TrackerState};
//!
//! let mut tracker = GestureTracker::new(8.0);
//! let two = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
//! tracker.on_event(&TouchEvent::new(TouchPhase::Down, &two));
//!
//! // The anchor is the average of both pointers.
//! assert!(matches!(
//!     tracker.state(),
//!     TrackerState::Active { count: 2, anchor, .. } if anchor == Point::new(50.0, 0.0)
//! ));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod detector;
mod event;
mod tracker;

pub use detector::{PinchEvent, PinchUpdate, ScaleGestureDetector};
pub use event::{TouchEvent, TouchPhase};
pub use tracker::{GestureTracker, TrackerState};
