//! WFTDA regulation track analyzer
//!
//! Stateless geometry plus a pan/zoom view. Rendering goes through the same
//! `UiBackend` as the arena.

pub mod draw;
pub mod geometry;
pub mod view;

pub use draw::track_draw_list;
pub use geometry::{TrackMetrics, track_area, track_circumference};
pub use view::TrackView;
