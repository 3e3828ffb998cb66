//! Apex Sim - random-walk arena and track analyzer demos
//!
//! Core modules:
//! - `sim`: Arena simulation (entities, bounded random walk)
//! - `frame`: Per-tick orchestration over a UI backend
//! - `renderer`: wgpu vertex pipeline implementing the UI backend
//! - `platform`: winit window and input plumbing
//! - `track`: WFTDA track geometry, pan/zoom view and draw list
//! - `settings`: JSON settings loaded at startup

pub mod error;
pub mod frame;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod track;

pub use error::{InitError, SettingsError};
pub use settings::Settings;

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Lower bound of both arena axes
    pub const ARENA_MIN: f32 = 0.0;
    /// Upper bound of both arena axes
    pub const ARENA_MAX: f32 = 1000.0;
    /// Where every entity starts (arena midpoint)
    pub const START_POSITION: f32 = 500.0;

    /// Largest per-axis displacement in one step (inclusive)
    pub const MAX_STEP: i32 = 5;

    /// Fixed population size
    pub const POPULATION: usize = 10;

    /// Ticks between periodic debug log lines
    pub const DIAGNOSTIC_INTERVAL: u64 = 600;
}

/// Clamp a single arena coordinate to `[ARENA_MIN, ARENA_MAX]`.
///
/// NaN has no nearest boundary, so it lands on the lower bound.
#[inline]
pub fn clamp_coord(v: f32) -> f32 {
    if v.is_nan() {
        return consts::ARENA_MIN;
    }
    v.clamp(consts::ARENA_MIN, consts::ARENA_MAX)
}

/// Clamp a point into the arena square
#[inline]
pub fn clamp_to_arena(p: Vec2) -> Vec2 {
    Vec2::new(clamp_coord(p.x), clamp_coord(p.y))
}

/// Arena midpoint
#[inline]
pub fn arena_center() -> Vec2 {
    Vec2::splat((consts::ARENA_MIN + consts::ARENA_MAX) / 2.0)
}
