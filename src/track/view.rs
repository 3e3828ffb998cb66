//! Pan/zoom view over track space

use glam::Vec2;

pub const DEFAULT_ZOOM: f32 = 5.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 50.0;
/// Fraction of the current zoom added per wheel notch
pub const WHEEL_ZOOM_RATE: f32 = 0.1;

/// Pixels-per-foot zoom plus a pixel pan offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackView {
    zoom: f32,
    pan: Vec2,
}

impl Default for TrackView {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            pan: Vec2::ZERO,
        }
    }
}

impl TrackView {
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Set zoom, clamped to `[MIN_ZOOM, MAX_ZOOM]`. NaN is ignored.
    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom.is_nan() {
            return;
        }
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Zoom proportionally to the current scale
    pub fn apply_wheel(&mut self, notches: f32) {
        if notches != 0.0 {
            self.set_zoom(self.zoom + notches * self.zoom * WHEEL_ZOOM_RATE);
        }
    }

    /// Pan by a screen-space delta
    pub fn apply_drag(&mut self, delta: Vec2) {
        if delta.is_finite() {
            self.pan += delta;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Map a track-space point (feet, Y up) to screen pixels (Y down)
    pub fn track_to_screen(&self, p: Vec2, canvas_center: Vec2) -> Vec2 {
        Vec2::new(
            canvas_center.x + p.x * self.zoom + self.pan.x,
            canvas_center.y - p.y * self.zoom + self.pan.y,
        )
    }

    /// Scale a track-space length to pixels
    pub fn scale(&self, length: f32) -> f32 {
        length * self.zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view() {
        let view = TrackView::default();
        assert_eq!(view.zoom(), 5.0);
        assert_eq!(view.pan(), Vec2::ZERO);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut view = TrackView::default();
        view.set_zoom(0.2);
        assert_eq!(view.zoom(), MIN_ZOOM);
        view.set_zoom(500.0);
        assert_eq!(view.zoom(), MAX_ZOOM);
        view.set_zoom(f32::NAN);
        assert_eq!(view.zoom(), MAX_ZOOM);
    }

    #[test]
    fn test_wheel_zoom_is_multiplicative() {
        let mut view = TrackView::default();
        view.apply_wheel(1.0);
        assert!((view.zoom() - 5.5).abs() < 1e-6);
        view.apply_wheel(-2.0);
        assert!((view.zoom() - 4.4).abs() < 1e-5);

        for _ in 0..100 {
            view.apply_wheel(3.0);
        }
        assert_eq!(view.zoom(), MAX_ZOOM);
        for _ in 0..100 {
            view.apply_wheel(-5.0);
        }
        assert_eq!(view.zoom(), MIN_ZOOM);
    }

    #[test]
    fn test_drag_and_reset() {
        let mut view = TrackView::default();
        view.apply_drag(Vec2::new(10.0, -4.0));
        view.apply_drag(Vec2::new(1.0, 1.0));
        view.apply_drag(Vec2::new(f32::NAN, 1.0));
        assert_eq!(view.pan(), Vec2::new(11.0, -3.0));

        view.set_zoom(20.0);
        view.reset();
        assert_eq!(view, TrackView::default());
    }

    #[test]
    fn test_track_to_screen_inverts_y() {
        let mut view = TrackView::default();
        let center = Vec2::new(640.0, 360.0);
        assert_eq!(view.track_to_screen(Vec2::ZERO, center), center);
        assert_eq!(
            view.track_to_screen(Vec2::new(2.0, 3.0), center),
            Vec2::new(650.0, 345.0)
        );

        view.apply_drag(Vec2::new(5.0, 5.0));
        assert_eq!(
            view.track_to_screen(Vec2::new(2.0, 3.0), center),
            Vec2::new(655.0, 350.0)
        );
    }
}
