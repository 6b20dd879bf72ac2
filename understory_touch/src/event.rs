// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch event model: phases and the set of active pointer positions.

use kurbo::{Point, Vec2};

/// Phase of a touch event, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    /// A pointer went down. Also used when an additional pointer joins.
    Down,
    /// One or more active pointers moved.
    Move,
    /// A pointer was lifted. When the last pointer lifts the sequence ends.
    Up,
    /// The host aborted the touch sequence.
    Cancel,
}

impl TouchPhase {
    /// Returns `true` for phases that end the touch sequence.
    ///
    /// The host reports the final `Up` with the lifting pointer still included,
    /// so both `Up` and `Cancel` are treated as terminal.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Up | Self::Cancel)
    }
}

/// A single touch event: its phase plus the positions of every active pointer.
///
/// Positions are in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent<'a> {
    /// Phase of this event.
    pub phase: TouchPhase,
    /// Positions of all pointers active during this event.
    pub pointers: &'a [Point],
}

impl<'a> TouchEvent<'a> {
    /// Creates a new touch event.
    #[must_use]
    pub fn new(phase: TouchPhase, pointers: &'a [Point]) -> Self {
        Self { phase, pointers }
    }

    /// Number of pointers active during this event.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Average position of all active pointers.
    ///
    /// Returns `None` when the event carries no pointers.
    #[must_use]
    pub fn centroid(&self) -> Option<Point> {
        if self.pointers.is_empty() {
            return None;
        }
        let sum = self
            .pointers
            .iter()
            .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
        let count = self.pointers.len() as f64;
        Some((sum / count).to_point())
    }
}
