// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Size;

/// How the image's intrinsic size relates to the viewport.
///
/// Comparisons are inclusive on the "fits" side, so every pair of sizes falls
/// into exactly one case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitCase {
    /// Wider than the viewport, but no taller. Fit by width.
    Wider,
    /// Taller than the viewport, but no wider. Fit by height.
    Taller,
    /// Larger than the viewport on both axes. Fit by the tighter axis.
    Overflows,
    /// No larger than the viewport on either axis. Fit by the tighter axis.
    Fits,
}

impl FitCase {
    /// Classifies `image` against `viewport`.
    #[must_use]
    pub fn classify(viewport: Size, image: Size) -> Self {
        let wider = image.width > viewport.width;
        let taller = image.height > viewport.height;
        match (wider, taller) {
            (true, false) => Self::Wider,
            (false, true) => Self::Taller,
            (true, true) => Self::Overflows,
            (false, false) => Self::Fits,
        }
    }

    /// Scale at which `image` is fully visible in `viewport`, preserving aspect ratio.
    #[must_use]
    pub fn scale(self, viewport: Size, image: Size) -> f64 {
        let sx = viewport.width / image.width;
        let sy = viewport.height / image.height;
        match self {
            Self::Wider => sx,
            Self::Taller => sy,
            Self::Overflows | Self::Fits => sx.min(sy),
        }
    }
}

/// Geometry rejected by [`ScaleBounds::fit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidGeometry {
    /// The viewport has a zero, negative, or non-finite dimension.
    Viewport,
    /// The image has a zero, negative, or non-finite dimension.
    Image,
}

impl fmt::Display for InvalidGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport => f.write_str("viewport size must be finite and non-zero"),
            Self::Image => f.write_str("image size must be finite and non-zero"),
        }
    }
}

impl core::error::Error for InvalidGeometry {}

/// Allowed range of the effective image scale.
///
/// `min` is the fit scale; `max` is a fixed multiple of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBounds {
    /// Fit scale: the whole image is visible and centered.
    pub min: f64,
    /// Maximum magnification.
    pub max: f64,
    /// The case that produced `min`.
    pub case: FitCase,
}

impl ScaleBounds {
    /// Computes bounds for `image` shown in `viewport`.
    ///
    /// `max_scale_factor` is the ratio `max / min`; values below `1.0` are
    /// treated as `1.0`.
    pub fn fit(
        viewport: Size,
        image: Size,
        max_scale_factor: f64,
    ) -> Result<Self, InvalidGeometry> {
        if !is_usable(viewport) {
            return Err(InvalidGeometry::Viewport);
        }
        if !is_usable(image) {
            return Err(InvalidGeometry::Image);
        }
        let case = FitCase::classify(viewport, image);
        let min = case.scale(viewport, image);
        Ok(Self {
            min,
            max: min * max_scale_factor.max(1.0),
            case,
        })
    }

    /// Returns `true` if `scale` lies within `[min, max]`.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        (self.min..=self.max).contains(&scale)
    }

    /// Scale that a pinch `factor` applied at `current` scale should land on.
    ///
    /// Returns `None` when the factor would not move the scale toward the
    /// allowed range: growing at or above `max`, shrinking at or below `min`,
    /// a factor of exactly `1.0`, or a non-positive or non-finite factor.
    /// Otherwise returns `current * factor` clamped into `[min, max]`. A
    /// clamped result is the bound itself, not a product that rounds near it.
    #[must_use]
    pub fn pinch_scale(&self, current: f64, factor: f64) -> Option<f64> {
        if !factor.is_finite() || factor <= 0.0 || !current.is_finite() || current <= 0.0 {
            return None;
        }
        let grows = current < self.max && factor > 1.0;
        let shrinks = current > self.min && factor < 1.0;
        if !grows && !shrinks {
            return None;
        }
        Some((current * factor).clamp(self.min, self.max))
    }
}

fn is_usable(size: Size) -> bool {
    size.is_finite() && size.width > 0.0 && size.height > 0.0
}
