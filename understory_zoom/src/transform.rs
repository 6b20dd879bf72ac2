// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Image → viewport transform: uniform scale plus translation.
///
/// This is a value type. Every operation returns a new transform, composed
/// *after* the current one (the new operation applies in viewport space).
/// Rotation and skew are never introduced, so the x-axis scale coefficient
/// is the effective uniform scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageTransform(Affine);

impl Default for ImageTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ImageTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self(Affine::IDENTITY);

    /// Fit transform: centers `image` in `viewport`, then scales by `scale`
    /// about the viewport center.
    #[must_use]
    pub fn fit(viewport: Size, image: Size, scale: f64) -> Self {
        let offset = Vec2::new(
            viewport.width / 2.0 - image.width / 2.0,
            viewport.height / 2.0 - image.height / 2.0,
        );
        let center = viewport.to_rect().center();
        Self::IDENTITY
            .then_translate(offset)
            .then_scale_about(scale, center)
    }

    /// Returns the underlying affine matrix.
    #[must_use]
    pub fn affine(self) -> Affine {
        self.0
    }

    /// Effective uniform scale (the x-axis scale coefficient).
    #[must_use]
    pub fn scale(self) -> f64 {
        self.0.as_coeffs()[0]
    }

    /// Translation component in viewport coordinates.
    #[must_use]
    pub fn translation(self) -> Vec2 {
        let c = self.0.as_coeffs();
        Vec2::new(c[4], c[5])
    }

    /// Composes a translation after this transform.
    #[must_use]
    pub fn then_translate(self, delta: Vec2) -> Self {
        Self(Affine::translate(delta) * self.0)
    }

    /// Composes a uniform scale about `focus` (viewport coordinates) after this transform.
    ///
    /// `focus` is the fixed point: it maps to itself.
    #[must_use]
    pub fn then_scale_about(self, factor: f64, focus: Point) -> Self {
        let f = focus.to_vec2();
        Self(Affine::translate(f) * Affine::scale(factor) * Affine::translate(-f) * self.0)
    }

    /// Rescales about `focus` (viewport coordinates) to an effective scale of exactly `scale`.
    ///
    /// Equivalent to [`ImageTransform::then_scale_about`] with factor
    /// `scale / self.scale()`, except that the scale coefficients are set
    /// directly instead of being multiplied back in.
    #[must_use]
    pub fn then_scale_to_about(self, scale: f64, focus: Point) -> Self {
        let factor = scale / self.scale();
        let f = focus.to_vec2();
        let t = f + (self.translation() - f) * factor;
        Self(Affine::new([scale, 0.0, 0.0, scale, t.x, t.y]))
    }

    /// Maps an image-space rectangle into viewport coordinates.
    #[must_use]
    pub fn map_rect(self, rect: Rect) -> Rect {
        // Take the bounding box of the mapped corners. For a uniform scale with
        // translation this is exact.
        let q0 = self.0 * Point::new(rect.x0, rect.y0);
        let q1 = self.0 * Point::new(rect.x1, rect.y0);
        let q2 = self.0 * Point::new(rect.x0, rect.y1);
        let q3 = self.0 * Point::new(rect.x1, rect.y1);
        let min_x = q0.x.min(q1.x).min(q2.x).min(q3.x);
        let min_y = q0.y.min(q1.y).min(q2.y).min(q3.y);
        let max_x = q0.x.max(q1.x).max(q2.x).max(q3.x);
        let max_y = q0.y.max(q1.y).max(q2.y).max(q3.y);
        Rect::new(min_x, min_y, max_x, max_y)
    }

    /// On-screen rectangle of an image with intrinsic size `image`.
    #[must_use]
    pub fn image_rect(self, image: Size) -> Rect {
        self.map_rect(image.to_rect())
    }

    /// Translation that removes gaps at the viewport edges and centers small axes.
    ///
    /// Per axis: when the image covers the viewport, any gap between an image
    /// edge and the matching viewport edge is closed; when it is smaller, the
    /// image is centered.
    #[must_use]
    pub fn border_correction(self, image: Size, viewport: Size) -> Vec2 {
        let r = self.image_rect(image);
        Vec2::new(
            axis_correction(r.x0, r.x1, viewport.width),
            axis_correction(r.y0, r.y1, viewport.height),
        )
    }

    /// Applies [`ImageTransform::border_correction`].
    #[must_use]
    pub fn corrected(self, image: Size, viewport: Size) -> Self {
        let delta = self.border_correction(image, viewport);
        if delta == Vec2::ZERO {
            return self;
        }
        log::trace!("border correction by ({:.3}, {:.3})", delta.x, delta.y);
        self.then_translate(delta)
    }
}

impl From<ImageTransform> for Affine {
    fn from(t: ImageTransform) -> Self {
        t.0
    }
}

/// Correction along one axis for an image spanning `lo..hi` in a viewport `0..extent`.
fn axis_correction(lo: f64, hi: f64, extent: f64) -> f64 {
    let len = hi - lo;
    if len >= extent {
        let mut delta = 0.0;
        if lo > 0.0 {
            delta = -lo;
        }
        if hi < extent {
            delta = extent - hi;
        }
        delta
    } else {
        extent / 2.0 - hi + len / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn rect_close(a: Rect, b: Rect) -> bool {
        close(a.x0, b.x0) && close(a.y0, b.y0) && close(a.x1, b.x1) && close(a.y1, b.y1)
    }

    #[test]
    fn fit_centers_wide_image() {
        let viewport = Size::new(1000.0, 2000.0);
        let image = Size::new(2000.0, 1000.0);
        let t = ImageTransform::fit(viewport, image, 0.5);
        assert_eq!(t.scale(), 0.5);
        let r = t.image_rect(image);
        assert!(rect_close(r, Rect::new(0.0, 750.0, 1000.0, 1250.0)), "{r:?}");
    }

    #[test]
    fn fit_with_unit_scale_on_exact_size_is_identity() {
        let size = Size::new(1080.0, 1920.0);
        let t = ImageTransform::fit(size, size, 1.0);
        assert_eq!(t, ImageTransform::IDENTITY);
    }

    #[test]
    fn scale_about_keeps_focus_fixed() {
        let focus = Point::new(100.0, 50.0);
        let base = ImageTransform::IDENTITY.then_translate(Vec2::new(10.0, 20.0));
        let under_focus = base.affine().inverse() * focus;
        assert_eq!(under_focus, Point::new(90.0, 30.0));

        let t = base.then_scale_about(3.0, focus);
        assert_eq!(t.affine() * under_focus, focus);
        assert_eq!(t.scale(), 3.0);
    }

    #[test]
    fn scale_to_about_sets_exact_scale_and_keeps_focus() {
        let focus = Point::new(100.0, 50.0);
        let base = ImageTransform::IDENTITY
            .then_translate(Vec2::new(10.0, 20.0))
            .then_scale_about(700.0 / 777.0, Point::new(3.0, 7.0));
        let under_focus = base.affine().inverse() * focus;

        let target = 4.0 * (700.0 / 777.0);
        let t = base.then_scale_to_about(target, focus);
        assert_eq!(t.scale(), target);
        assert_eq!(t.affine().as_coeffs()[3], target);
        let back = t.affine() * under_focus;
        assert!(close(back.x, focus.x), "{back:?}");
        assert!(close(back.y, focus.y), "{back:?}");
    }

    #[test]
    fn translation_accumulates() {
        let t = ImageTransform::IDENTITY
            .then_translate(Vec2::new(1.0, 2.0))
            .then_translate(Vec2::new(3.0, 4.0));
        assert_eq!(t.translation(), Vec2::new(4.0, 6.0));
        assert_eq!(t.scale(), 1.0);
    }

    #[test]
    fn map_rect_scales_and_translates() {
        let t = ImageTransform::IDENTITY
            .then_scale_about(2.0, Point::ORIGIN)
            .then_translate(Vec2::new(5.0, -5.0));
        let r = t.map_rect(Rect::new(0.0, 0.0, 10.0, 20.0));
        assert_eq!(r, Rect::new(5.0, -5.0, 25.0, 35.0));
    }

    #[test]
    fn correction_closes_left_gap_when_covering() {
        let viewport = Size::new(100.0, 100.0);
        let image = Size::new(200.0, 100.0);
        let t = ImageTransform::IDENTITY.then_translate(Vec2::new(30.0, 0.0));
        assert_eq!(t.border_correction(image, viewport), Vec2::new(-30.0, 0.0));
    }

    #[test]
    fn correction_closes_right_gap_when_covering() {
        let viewport = Size::new(100.0, 100.0);
        let image = Size::new(200.0, 100.0);
        let t = ImageTransform::IDENTITY.then_translate(Vec2::new(-150.0, 0.0));
        // Right edge at 50: move right by 50.
        assert_eq!(t.border_correction(image, viewport), Vec2::new(50.0, 0.0));
    }

    #[test]
    fn correction_centers_small_axes() {
        let viewport = Size::new(100.0, 100.0);
        let image = Size::new(40.0, 20.0);
        let t = ImageTransform::IDENTITY.then_translate(Vec2::new(5.0, 70.0));
        let c = t.corrected(image, viewport);
        let r = c.image_rect(image);
        assert!(rect_close(r, Rect::new(30.0, 40.0, 70.0, 60.0)), "{r:?}");
    }

    #[test]
    fn correction_uses_covering_rule_when_exactly_viewport_sized() {
        let viewport = Size::new(100.0, 100.0);
        let image = Size::new(100.0, 100.0);
        let t = ImageTransform::IDENTITY.then_translate(Vec2::new(0.0, 10.0));
        assert_eq!(t.border_correction(image, viewport), Vec2::new(0.0, -10.0));
    }

    #[test]
    fn correction_is_idempotent() {
        let viewport = Size::new(300.0, 200.0);
        let image = Size::new(1000.0, 50.0);
        let t = ImageTransform::IDENTITY
            .then_translate(Vec2::new(40.0, -30.0))
            .then_scale_about(0.7, Point::new(12.0, 90.0));
        let once = t.corrected(image, viewport);
        let twice = once.corrected(image, viewport);
        assert!(rect_close(once.image_rect(image), twice.image_rect(image)));
    }

    #[test]
    fn already_satisfied_correction_is_zero() {
        let viewport = Size::new(100.0, 100.0);
        let image = Size::new(200.0, 200.0);
        let t = ImageTransform::IDENTITY.then_translate(Vec2::new(-50.0, -50.0));
        assert_eq!(t.border_correction(image, viewport), Vec2::ZERO);
        assert_eq!(t.corrected(image, viewport), t);
    }

    #[test]
    fn converts_into_affine() {
        let t = ImageTransform::IDENTITY.then_translate(Vec2::new(1.0, 1.0));
        let a: Affine = t.into();
        assert_eq!(a, Affine::translate((1.0, 1.0)));
    }
}
