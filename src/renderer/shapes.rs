//! CPU tessellation of draw commands into triangle lists

use std::f32::consts::{PI, TAU};

use glam::Vec2;

use super::vertex::Vertex;
use crate::frame::{DrawCommand, Rgba};
use crate::track::geometry::dims::ARC_SEGMENTS;

/// Segments per radian for arcs (matches the half-circle smoothness)
const SEGMENTS_PER_RADIAN: f32 = ARC_SEGMENTS as f32 / PI;
const MIN_CIRCLE_SEGMENTS: u32 = 12;
const MAX_CIRCLE_SEGMENTS: u32 = 96;

/// Segment count for a full circle of the given radius
pub fn circle_segments(radius: f32) -> u32 {
    ((radius * 0.75) as u32).clamp(MIN_CIRCLE_SEGMENTS, MAX_CIRCLE_SEGMENTS)
}

/// Append the triangles for one command
pub fn tessellate(command: &DrawCommand, out: &mut Vec<Vertex>) {
    match *command {
        DrawCommand::FilledCircle {
            center,
            radius,
            color,
        } => circle(center, radius, color, circle_segments(radius), out),
        DrawCommand::FilledRect { min, max, color } => rect(min, max, color, out),
        DrawCommand::Line {
            from,
            to,
            thickness,
            color,
        } => line(from, to, thickness, color, out),
        DrawCommand::ArcBand {
            center,
            inner_radius,
            outer_radius,
            theta_start,
            theta_end,
            color,
        } => arc_band(center, inner_radius, outer_radius, theta_start, theta_end, color, out),
        DrawCommand::ArcStroke {
            center,
            radius,
            theta_start,
            theta_end,
            thickness,
            color,
        } => {
            let half = thickness / 2.0;
            arc_band(
                center,
                (radius - half).max(0.0),
                radius + half,
                theta_start,
                theta_end,
                color,
                out,
            )
        }
    }
}

/// Filled circle as a triangle fan
pub fn circle(center: Vec2, radius: f32, color: Rgba, segments: u32, out: &mut Vec<Vertex>) {
    out.reserve((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        out.push(Vertex::at(center, color));
        out.push(Vertex::at(center + Vec2::from_angle(theta1) * radius, color));
        out.push(Vertex::at(center + Vec2::from_angle(theta2) * radius, color));
    }
}

/// Axis-aligned filled rectangle
pub fn rect(min: Vec2, max: Vec2, color: Rgba, out: &mut Vec<Vertex>) {
    let a = Vertex::new(min.x, min.y, color);
    let b = Vertex::new(max.x, min.y, color);
    let c = Vertex::new(max.x, max.y, color);
    let d = Vertex::new(min.x, max.y, color);
    out.extend_from_slice(&[a, b, c, a, c, d]);
}

/// Thick line segment as a quad
pub fn line(from: Vec2, to: Vec2, thickness: f32, color: Rgba, out: &mut Vec<Vertex>) {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }
    let perp = dir.perp() * (thickness / 2.0);

    let v1a = Vertex::at(from + perp, color);
    let v1b = Vertex::at(from - perp, color);
    let v2a = Vertex::at(to + perp, color);
    let v2b = Vertex::at(to - perp, color);
    out.extend_from_slice(&[v1a, v1b, v2a, v2a, v1b, v2b]);
}

/// Band between two radii over `[theta_start, theta_end]`
pub fn arc_band(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    theta_start: f32,
    theta_end: f32,
    color: Rgba,
    out: &mut Vec<Vertex>,
) {
    let span = theta_end - theta_start;
    if span <= 0.0 || outer_radius <= inner_radius {
        return;
    }
    let segments = ((span * SEGMENTS_PER_RADIAN).round() as u32).max(4);
    out.reserve((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = theta_start + span * (i as f32 / segments as f32);
        let theta2 = theta_start + span * ((i + 1) as f32 / segments as f32);
        let d1 = Vec2::from_angle(theta1);
        let d2 = Vec2::from_angle(theta2);

        let inner1 = Vertex::at(center + d1 * inner_radius, color);
        let outer1 = Vertex::at(center + d1 * outer_radius, color);
        let inner2 = Vertex::at(center + d2 * inner_radius, color);
        let outer2 = Vertex::at(center + d2 * outer_radius, color);

        out.extend_from_slice(&[inner1, outer1, inner2, inner2, outer1, outer2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba = [1.0; 4];

    #[test]
    fn test_circle_vertices_lie_on_radius() {
        let mut out = Vec::new();
        circle(Vec2::new(10.0, 20.0), 5.0, WHITE, 16, &mut out);
        assert_eq!(out.len(), 48);
        for tri in out.chunks(3) {
            assert_eq!(tri[0].pos(), Vec2::new(10.0, 20.0));
            for v in &tri[1..] {
                let r = (v.pos() - Vec2::new(10.0, 20.0)).length();
                assert!((r - 5.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_circle_segments_are_bounded() {
        assert_eq!(circle_segments(1.0), MIN_CIRCLE_SEGMENTS);
        assert_eq!(circle_segments(10_000.0), MAX_CIRCLE_SEGMENTS);
    }

    #[test]
    fn test_rect_and_line() {
        let mut out = Vec::new();
        rect(Vec2::ZERO, Vec2::ONE, WHITE, &mut out);
        assert_eq!(out.len(), 6);

        line(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, WHITE, &mut out);
        assert_eq!(out.len(), 12);
        for v in &out[6..] {
            assert!((v.position[1].abs() - 1.0).abs() < 1e-6);
        }

        // Degenerate line draws nothing
        line(Vec2::ONE, Vec2::ONE, 2.0, WHITE, &mut out);
        assert_eq!(out.len(), 12);
    }

    #[test]
    fn test_arc_band_stays_within_radii() {
        let mut out = Vec::new();
        arc_band(Vec2::ZERO, 10.0, 20.0, -PI / 2.0, PI / 2.0, WHITE, &mut out);
        assert_eq!(out.len(), 60 * 6);
        for v in &out {
            let r = v.pos().length();
            assert!((9.999..=20.001).contains(&r));
            assert!(v.position[0] >= -1e-4, "right half only");
        }
    }

    #[test]
    fn test_empty_arc_band_draws_nothing() {
        let mut out = Vec::new();
        arc_band(Vec2::ZERO, 10.0, 20.0, 1.0, 1.0, WHITE, &mut out);
        arc_band(Vec2::ZERO, 20.0, 10.0, 0.0, 1.0, WHITE, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_tessellate_stroke_straddles_radius() {
        let mut out = Vec::new();
        tessellate(
            &DrawCommand::ArcStroke {
                center: Vec2::ZERO,
                radius: 50.0,
                theta_start: 0.0,
                theta_end: PI,
                thickness: 4.0,
                color: WHITE,
            },
            &mut out,
        );
        assert!(!out.is_empty());
        for v in &out {
            let r = v.pos().length();
            assert!((47.99..=52.01).contains(&r));
        }
    }
}
