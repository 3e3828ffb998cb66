//! Per-frame orchestration
//!
//! The orchestrator owns the arena and talks to the outside world only
//! through the `UiBackend` and `InputSource` traits.

pub mod backend;
pub mod orchestrator;

pub use backend::{DrawCommand, InputSnapshot, InputSource, Rgba, UiBackend};
pub use orchestrator::{FrameOrchestrator, FramePhase, MarkerStyle};
