// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// What the controller does with a single-sequence drag once it passes the touch slop.
///
/// This is consulted by [`crate::ZoomController`] on every move event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PanMode {
    /// Track drag engagement only; the image is never translated by a drag.
    ///
    /// Engagement is released on the same event it is detected, so the drag
    /// anchor stays where the pointers first went down.
    #[default]
    TrackOnly,
    /// Translate the image by the drag delta while engaged.
    ///
    /// Axes on which the image is smaller than the viewport are not panned,
    /// and the border/center correction runs after every translation.
    Translate,
}

/// Tunables for [`crate::ZoomController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    max_scale_factor: f64,
    touch_slop: f64,
    pan_mode: PanMode,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            max_scale_factor: Self::DEFAULT_MAX_SCALE_FACTOR,
            touch_slop: Self::DEFAULT_TOUCH_SLOP,
            pan_mode: PanMode::default(),
        }
    }
}

impl ZoomConfig {
    /// Default ratio between maximum and fit scale.
    pub const DEFAULT_MAX_SCALE_FACTOR: f64 = 4.0;
    /// Default touch slop in viewport pixels.
    pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;

    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ratio between maximum and fit scale.
    ///
    /// Values below `1.0` (or non-finite) are normalized to `1.0`, which pins
    /// the image at its fit scale.
    #[must_use]
    pub fn with_max_scale_factor(mut self, factor: f64) -> Self {
        self.max_scale_factor = if factor.is_finite() && factor >= 1.0 {
            factor
        } else {
            1.0
        };
        self
    }

    /// Sets the displacement a sequence must exceed before it counts as a drag.
    ///
    /// Negative or non-finite values are normalized to `0.0`.
    #[must_use]
    pub fn with_touch_slop(mut self, slop: f64) -> Self {
        self.touch_slop = if slop.is_finite() && slop > 0.0 {
            slop
        } else {
            0.0
        };
        self
    }

    /// Sets the pan mode.
    #[must_use]
    pub fn with_pan_mode(mut self, mode: PanMode) -> Self {
        self.pan_mode = mode;
        self
    }

    /// Returns the ratio between maximum and fit scale.
    #[must_use]
    pub fn max_scale_factor(&self) -> f64 {
        self.max_scale_factor
    }

    /// Returns the touch slop in viewport pixels.
    #[must_use]
    pub fn touch_slop(&self) -> f64 {
        self.touch_slop
    }

    /// Returns the pan mode.
    #[must_use]
    pub fn pan_mode(&self) -> PanMode {
        self.pan_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ZoomConfig::new();
        assert_eq!(c.max_scale_factor(), 4.0);
        assert_eq!(c.touch_slop(), 8.0);
        assert_eq!(c.pan_mode(), PanMode::TrackOnly);
    }

    #[test]
    fn builders_normalize_out_of_range_values() {
        let c = ZoomConfig::new()
            .with_max_scale_factor(0.5)
            .with_touch_slop(-1.0);
        assert_eq!(c.max_scale_factor(), 1.0);
        assert_eq!(c.touch_slop(), 0.0);

        let c = c
            .with_max_scale_factor(f64::INFINITY)
            .with_touch_slop(f64::NAN);
        assert_eq!(c.max_scale_factor(), 1.0);
        assert_eq!(c.touch_slop(), 0.0);

        let c = c
            .with_max_scale_factor(8.0)
            .with_touch_slop(16.0)
            .with_pan_mode(PanMode::Translate);
        assert_eq!(c.max_scale_factor(), 8.0);
        assert_eq!(c.touch_slop(), 16.0);
        assert_eq!(c.pan_mode(), PanMode::Translate);
    }
}
