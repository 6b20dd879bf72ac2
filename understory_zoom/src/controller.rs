// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect, Size, Vec2};
use understory_touch::{GestureTracker, PinchEvent, PinchUpdate, ScaleGestureDetector, TouchEvent};

use crate::config::{PanMode, ZoomConfig};
use crate::fit::ScaleBounds;
use crate::listeners::{GeometryListener, ScaleGestureListener, TouchListener};
use crate::transform::ImageTransform;

/// Geometry consumed by a [`ZoomController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReadyState {
    /// Viewport size in pixels.
    pub viewport: Size,
    /// Intrinsic image size in pixels.
    pub image: Size,
    /// Scale bounds derived from `viewport` and `image`.
    pub bounds: ScaleBounds,
}

/// Whether a [`ZoomController`] has consumed its geometry for the current attach.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ZoomState {
    /// No geometry yet: pinch and pan are no-ops and the transform is identity.
    #[default]
    Uninitialized,
    /// Geometry consumed; bounds are known.
    Ready(ReadyState),
}

/// Pinch-to-zoom controller for a single image shown in a viewport.
///
/// `ZoomController` owns the image → viewport transform and updates it from
/// three host callbacks:
/// - [`GeometryListener::on_geometry_ready`]: computes the fit scale, centers
///   the image, and derives the scale bounds.
/// - [`ScaleGestureListener::on_scale`]: applies a pinch tick about its focal
///   point, clamped into the bounds, then re-bounds the image.
/// - [`TouchListener::on_touch`]: feeds the pinch detector `D`, then tracks the
///   averaged pointer position for drag detection.
///
/// The rendering path reads [`ZoomController::transform`] and
/// [`ZoomController::scale`].
#[derive(Clone, Debug)]
pub struct ZoomController<D = ()> {
    config: ZoomConfig,
    state: ZoomState,
    transform: ImageTransform,
    tracker: GestureTracker,
    detector: D,
    attached: bool,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}

impl ZoomController {
    /// Creates an attached controller with no pinch detector.
    #[must_use]
    pub fn new(config: ZoomConfig) -> Self {
        Self::with_detector(config, ())
    }
}

impl<D> ZoomController<D> {
    /// Creates an attached controller that feeds touch events to `detector`.
    #[must_use]
    pub fn with_detector(config: ZoomConfig, detector: D) -> Self {
        Self {
            config,
            state: ZoomState::Uninitialized,
            transform: ImageTransform::IDENTITY,
            tracker: GestureTracker::new(config.touch_slop()),
            detector,
            attached: true,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> ZoomConfig {
        self.config
    }

    /// Replaces the configuration.
    ///
    /// Touch slop and pan mode apply from the next touch event. The maximum
    /// scale factor applies the next time geometry is consumed.
    pub fn set_config(&mut self, config: ZoomConfig) {
        self.config = config;
        self.tracker.set_touch_slop(config.touch_slop());
    }

    /// Returns the pinch detector.
    #[must_use]
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Returns the pinch detector mutably.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> ZoomState {
        self.state
    }

    /// Returns `true` once geometry has been consumed for the current attach.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.state, ZoomState::Ready(_))
    }

    /// Returns `true` while attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Returns the scale bounds, once known.
    #[must_use]
    pub fn scale_bounds(&self) -> Option<ScaleBounds> {
        match self.state {
            ZoomState::Ready(ready) => Some(ready.bounds),
            ZoomState::Uninitialized => None,
        }
    }

    /// Returns the image → viewport transform for rendering.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform.affine()
    }

    /// Returns the image → viewport transform as an [`ImageTransform`].
    #[must_use]
    pub fn image_transform(&self) -> ImageTransform {
        self.transform
    }

    /// Returns the effective uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale()
    }

    /// Returns the on-screen image rectangle, once geometry is known.
    #[must_use]
    pub fn image_rect(&self) -> Option<Rect> {
        match self.state {
            ZoomState::Ready(ready) => Some(self.transform.image_rect(ready.image)),
            ZoomState::Uninitialized => None,
        }
    }

    /// Arms the geometry listener for a new attach.
    pub fn on_attached(&mut self) {
        if !self.attached {
            log::debug!("zoom controller attached");
        }
        self.attached = true;
    }

    /// Disarms the geometry listener and forgets everything derived from geometry.
    ///
    /// The next attach starts again from the identity transform.
    pub fn on_detached(&mut self) {
        if self.attached {
            log::debug!("zoom controller detached");
        }
        self.attached = false;
        self.state = ZoomState::Uninitialized;
        self.transform = ImageTransform::IDENTITY;
        self.tracker.reset();
    }

    /// Applies a pinch tick, then re-bounds the image.
    fn apply_pinch(&mut self, update: PinchUpdate) {
        let ZoomState::Ready(ready) = self.state else {
            log::trace!("pinch ignored: no geometry");
            return;
        };
        let current = self.transform.scale();
        let Some(scale) = ready.bounds.pinch_scale(current, update.scale_factor) else {
            return;
        };
        self.transform = self
            .transform
            .then_scale_to_about(scale, update.focus)
            .corrected(ready.image, ready.viewport);
        log::trace!(
            "pinch x{:.4} about ({:.1}, {:.1}): scale {current:.4} -> {scale:.4}",
            update.scale_factor,
            update.focus.x,
            update.focus.y,
        );
    }

    /// Pans by a drag delta in viewport space, then re-bounds the image.
    fn apply_pan(&mut self, delta: Vec2) {
        let ZoomState::Ready(ready) = self.state else {
            return;
        };
        let rect = self.transform.image_rect(ready.image);
        let delta = Vec2::new(
            if rect.width() < ready.viewport.width {
                0.0
            } else {
                delta.x
            },
            if rect.height() < ready.viewport.height {
                0.0
            } else {
                delta.y
            },
        );
        if delta == Vec2::ZERO {
            return;
        }
        self.transform = self
            .transform
            .then_translate(delta)
            .corrected(ready.image, ready.viewport);
        log::trace!("pan by ({:.1}, {:.1})", delta.x, delta.y);
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomDebugInfo {
        ZoomDebugInfo {
            state: self.state,
            attached: self.attached,
            transform: self.transform.affine(),
            scale: self.transform.scale(),
            image_rect: self.image_rect(),
            drag_engaged: self.tracker.is_drag_engaged(),
            config: self.config,
        }
    }
}

impl<D> GeometryListener for ZoomController<D> {
    fn on_geometry_ready(&mut self, viewport: Size, image: Size) {
        if !self.attached {
            log::debug!("geometry ignored: detached");
            return;
        }
        if self.is_ready() {
            log::debug!("geometry ignored: already consumed for this attach");
            return;
        }
        let bounds = match ScaleBounds::fit(viewport, image, self.config.max_scale_factor()) {
            Ok(bounds) => bounds,
            Err(err) => {
                log::warn!("geometry rejected ({viewport:?}, {image:?}): {err}");
                return;
            }
        };
        self.transform = ImageTransform::fit(viewport, image, bounds.min);
        self.state = ZoomState::Ready(ReadyState {
            viewport,
            image,
            bounds,
        });
        log::debug!(
            "geometry consumed: viewport {viewport:?}, image {image:?}, {:?} fit, scale {:.4}..{:.4}",
            bounds.case,
            bounds.min,
            bounds.max
        );
    }
}

impl<D> ScaleGestureListener for ZoomController<D> {
    fn on_scale(&mut self, update: PinchUpdate) -> bool {
        self.apply_pinch(update);
        true
    }
}

impl<D: ScaleGestureDetector> TouchListener for ZoomController<D> {
    fn on_touch(&mut self, event: &TouchEvent<'_>) -> bool {
        match self.detector.on_touch_event(event) {
            Some(PinchEvent::Begin(focus)) => {
                self.on_scale_begin(focus);
            }
            Some(PinchEvent::Update(update)) => {
                self.on_scale(update);
            }
            Some(PinchEvent::End) => self.on_scale_end(),
            None => {}
        }

        if let Some(delta) = self.tracker.on_event(event) {
            match self.config.pan_mode() {
                PanMode::TrackOnly => self.tracker.release_drag(),
                PanMode::Translate => {
                    self.apply_pan(delta);
                    if let Some(centroid) = event.centroid() {
                        self.tracker.rebase(centroid);
                    }
                }
            }
        }
        true
    }
}

/// Debug snapshot of a [`ZoomController`] state.
#[derive(Clone, Copy, Debug)]
pub struct ZoomDebugInfo {
    /// Current state, including bounds once geometry is known.
    pub state: ZoomState,
    /// Whether the controller is attached.
    pub attached: bool,
    /// Current image → viewport transform.
    pub transform: Affine,
    /// Current effective scale.
    pub scale: f64,
    /// On-screen image rectangle, once geometry is known.
    pub image_rect: Option<Rect>,
    /// Whether the current touch sequence has an engaged drag.
    pub drag_engaged: bool,
    /// Active configuration.
    pub config: ZoomConfig,
}
