//! WFTDA regulation track dimensions and closed-form measurements
//!
//! All lengths are in feet. The track is an obround: two half-annuli joined by
//! straightaways, centered on the origin with the long axis along X.

use std::f64::consts::PI;
use std::fmt;

/// Track constants (feet)
pub mod dims {
    /// Inside arc radius
    pub const R_IN: f32 = 12.5;
    /// Track width
    pub const TRACK_WIDTH: f32 = 10.0;
    /// Outside arc radius
    pub const R_OUT: f32 = R_IN + TRACK_WIDTH;
    /// Distance between the two arc centers
    pub const CENTER_SEPARATION: f32 = 35.0;
    /// Overall length
    pub const MAX_LENGTH: f32 = 2.0 * R_OUT + CENTER_SEPARATION;
    /// Overall width
    pub const MAX_WIDTH: f32 = 2.0 * R_OUT;

    /// Pivot (pack) line X position
    pub const PIVOT_LINE_X: f32 = -12.5;
    /// Jammer line X position (start/finish, tangent point)
    pub const JAMMER_LINE_X: f32 = 17.5;

    /// Segments per half-circle when tessellating arcs
    pub const ARC_SEGMENTS: u32 = 60;
}

use dims::*;

/// Perimeter of the track line at radius `r` from the arc centers
pub fn track_circumference(r: f64) -> f64 {
    2.0 * CENTER_SEPARATION as f64 + 2.0 * PI * r
}

/// Playing surface area between the inside and outside boundaries
pub fn track_area() -> f64 {
    let r_in = R_IN as f64;
    let r_out = R_OUT as f64;
    let straights = CENTER_SEPARATION as f64 * (2.0 * r_out - 2.0 * r_in);
    let ends = PI * (r_out.powi(2) - r_in.powi(2));
    straights + ends
}

/// Left and right arc centers in track space
pub fn arc_centers() -> (glam::Vec2, glam::Vec2) {
    let half = CENTER_SEPARATION / 2.0;
    (glam::Vec2::new(-half, 0.0), glam::Vec2::new(half, 0.0))
}

/// The three headline measurements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMetrics {
    pub area: f64,
    pub inside_circumference: f64,
    pub outside_circumference: f64,
}

impl TrackMetrics {
    pub fn compute() -> Self {
        Self {
            area: track_area(),
            inside_circumference: track_circumference(R_IN as f64),
            outside_circumference: track_circumference(R_OUT as f64),
        }
    }
}

impl fmt::Display for TrackMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "area {:.2} sq ft | inside (R={:.1}) {:.2} ft | outside (R={:.1}) {:.2} ft",
            self.area, R_IN, self.inside_circumference, R_OUT, self.outside_circumference
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_derived_dimensions() {
        assert_eq!(R_OUT, 22.5);
        assert_eq!(MAX_LENGTH, 80.0);
        assert_eq!(MAX_WIDTH, 45.0);
    }

    #[test]
    fn test_circumference() {
        assert!(close(track_circumference(0.0), 70.0));
        assert!(close(track_circumference(12.5), 70.0 + 25.0 * PI));
        assert!(close(track_circumference(22.5), 70.0 + 45.0 * PI));
    }

    #[test]
    fn test_area() {
        // 35 * 20 + pi * (22.5^2 - 12.5^2) = 700 + 350 pi
        assert!(close(track_area(), 700.0 + 350.0 * PI));
    }

    #[test]
    fn test_metrics_display() {
        let text = TrackMetrics::compute().to_string();
        assert!(text.contains("1799.56 sq ft"), "{text}");
        assert!(text.contains("148.54 ft"), "{text}");
        assert!(text.contains("211.37 ft"), "{text}");
    }

    #[test]
    fn test_arc_centers_are_symmetric() {
        let (left, right) = arc_centers();
        assert_eq!(left.x, -17.5);
        assert_eq!(right.x, 17.5);
        assert_eq!(left.y, 0.0);
    }
}
