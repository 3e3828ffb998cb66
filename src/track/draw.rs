//! Draw list for the track figure in screen space

use std::f32::consts::PI;

use glam::Vec2;

use super::geometry::{arc_centers, dims::*};
use super::view::TrackView;
use crate::frame::{DrawCommand, Rgba};

/// Colors for track elements
pub mod colors {
    use crate::frame::Rgba;

    pub const SURFACE: Rgba = [0.0, 0.0, 100.0 / 255.0, 150.0 / 255.0];
    pub const INFIELD: Rgba = [15.0 / 255.0, 15.0 / 255.0, 15.0 / 255.0, 1.0];
    pub const BOUNDARY: Rgba = [1.0, 1.0, 1.0, 1.0];
    pub const CENTER_LINE: Rgba = [1.0, 50.0 / 255.0, 50.0 / 255.0, 1.0];
    pub const PIVOT_LINE: Rgba = [200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0, 1.0];
    pub const PIVOT_BOX: Rgba = [1.0, 1.0, 0.0, 1.0];
    pub const JAMMER_BOX: Rgba = [1.0, 1.0, 1.0, 1.0];
    pub const BACKGROUND: Rgba = [0.15, 0.15, 0.15, 1.0];
}

const BOUNDARY_THICKNESS: f32 = 2.0;
const JAMMER_LINE_THICKNESS: f32 = 4.0;
const THIN_LINE: f32 = 1.0;
const ARC_CENTER_DOT: f32 = 3.0;
/// Pivot box radius in feet; the jammer box is 1.5x larger
const PIVOT_BOX_RADIUS: f32 = 2.0;

/// Left arc sweeps through pi (screen-left), right arc through 0
const LEFT_ARC: (f32, f32) = (PI * 0.5, PI * 1.5);
const RIGHT_ARC: (f32, f32) = (-PI * 0.5, PI * 0.5);

fn rect(a: Vec2, b: Vec2, color: Rgba) -> DrawCommand {
    DrawCommand::FilledRect {
        min: a.min(b),
        max: a.max(b),
        color,
    }
}

fn line(from: Vec2, to: Vec2, thickness: f32, color: Rgba) -> DrawCommand {
    DrawCommand::Line {
        from,
        to,
        thickness,
        color,
    }
}

fn band(center: Vec2, inner: f32, outer: f32, (start, end): (f32, f32), color: Rgba) -> DrawCommand {
    DrawCommand::ArcBand {
        center,
        inner_radius: inner,
        outer_radius: outer,
        theta_start: start,
        theta_end: end,
        color,
    }
}

fn stroke(center: Vec2, radius: f32, (start, end): (f32, f32)) -> DrawCommand {
    DrawCommand::ArcStroke {
        center,
        radius,
        theta_start: start,
        theta_end: end,
        thickness: BOUNDARY_THICKNESS,
        color: colors::BOUNDARY,
    }
}

fn circle(center: Vec2, radius: f32, color: Rgba) -> DrawCommand {
    DrawCommand::FilledCircle {
        center,
        radius,
        color,
    }
}

/// Build the full track figure for a canvas centered at `canvas_center`
pub fn track_draw_list(view: &TrackView, canvas_center: Vec2) -> Vec<DrawCommand> {
    let to_screen = |x: f32, y: f32| view.track_to_screen(Vec2::new(x, y), canvas_center);

    let (c1, c2) = arc_centers();
    let c1_screen = to_screen(c1.x, c1.y);
    let c2_screen = to_screen(c2.x, c2.y);
    let r_in = view.scale(R_IN);
    let r_out = view.scale(R_OUT);

    let mut commands = Vec::with_capacity(24);

    // 1. Surface: straightaway bands, then the two curved ends
    commands.push(rect(to_screen(c1.x, R_OUT), to_screen(c2.x, R_IN), colors::SURFACE));
    commands.push(rect(to_screen(c1.x, -R_IN), to_screen(c2.x, -R_OUT), colors::SURFACE));
    commands.push(band(c1_screen, r_in, r_out, LEFT_ARC, colors::SURFACE));
    commands.push(band(c2_screen, r_in, r_out, RIGHT_ARC, colors::SURFACE));

    // Infield
    commands.push(rect(to_screen(c1.x, R_IN), to_screen(c2.x, -R_IN), colors::INFIELD));
    commands.push(band(c1_screen, 0.0, r_in, LEFT_ARC, colors::INFIELD));
    commands.push(band(c2_screen, 0.0, r_in, RIGHT_ARC, colors::INFIELD));

    // 2. Boundaries
    for r in [R_IN, R_OUT] {
        commands.push(line(to_screen(c1.x, r), to_screen(c2.x, r), BOUNDARY_THICKNESS, colors::BOUNDARY));
        commands.push(line(to_screen(c1.x, -r), to_screen(c2.x, -r), BOUNDARY_THICKNESS, colors::BOUNDARY));
        commands.push(stroke(c1_screen, view.scale(r), LEFT_ARC));
        commands.push(stroke(c2_screen, view.scale(r), RIGHT_ARC));
    }

    // Center line and arc centers
    commands.push(line(c1_screen, c2_screen, THIN_LINE, colors::CENTER_LINE));
    commands.push(circle(c1_screen, ARC_CENTER_DOT, colors::CENTER_LINE));
    commands.push(circle(c2_screen, ARC_CENTER_DOT, colors::CENTER_LINE));

    // 3. Jammer and pivot lines across the full width
    commands.push(line(
        to_screen(JAMMER_LINE_X, R_OUT),
        to_screen(JAMMER_LINE_X, -R_OUT),
        JAMMER_LINE_THICKNESS,
        colors::BOUNDARY,
    ));
    commands.push(line(
        to_screen(PIVOT_LINE_X, R_OUT),
        to_screen(PIVOT_LINE_X, -R_OUT),
        THIN_LINE,
        colors::PIVOT_LINE,
    ));

    // 4. Infield boxes
    let pivot_box = view.scale(PIVOT_BOX_RADIUS);
    commands.push(circle(to_screen(PIVOT_LINE_X, 0.0), pivot_box, colors::PIVOT_BOX));
    commands.push(circle(to_screen(JAMMER_LINE_X, 0.0), pivot_box * 1.5, colors::JAMMER_BOX));

    commands
}
