//! Contracts between the frame loop and its collaborators

use glam::Vec2;

use crate::error::InitError;

/// Linear RGBA color
pub type Rgba = [f32; 4];

/// One immediate-mode draw command
///
/// Coordinates are in whatever space the backend's projection expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    FilledCircle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    FilledRect {
        min: Vec2,
        max: Vec2,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        thickness: f32,
        color: Rgba,
    },
    /// Filled band between two radii over an angular range (radians, CCW)
    ArcBand {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        theta_start: f32,
        theta_end: f32,
        color: Rgba,
    },
    /// Stroked arc of the given thickness
    ArcStroke {
        center: Vec2,
        radius: f32,
        theta_start: f32,
        theta_end: f32,
        thickness: f32,
        color: Rgba,
    },
}

/// The UI lifecycle adapter
///
/// The frame loop calls these in a fixed order: `begin_context` once, then per
/// tick `begin_frame`, any number of `submit_draw`, `present`; finally
/// `end_context` once.
pub trait UiBackend {
    /// Establish the drawing context. Failure is fatal.
    fn begin_context(&mut self) -> Result<(), InitError>;

    /// Start collecting draw commands for a new frame
    fn begin_frame(&mut self);

    fn submit_draw(&mut self, command: DrawCommand);

    /// Finalize the frame and hand it to the display
    fn present(&mut self);

    /// Release the context
    fn end_context(&mut self);
}

/// Input sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub close_requested: bool,
}

/// Event intake collaborator
pub trait InputSource {
    /// Drain pending events since the last poll
    fn poll_events(&mut self) -> InputSnapshot;
}

impl<B: UiBackend + ?Sized> UiBackend for Box<B> {
    fn begin_context(&mut self) -> Result<(), InitError> {
        (**self).begin_context()
    }

    fn begin_frame(&mut self) {
        (**self).begin_frame()
    }

    fn submit_draw(&mut self, command: DrawCommand) {
        (**self).submit_draw(command)
    }

    fn present(&mut self) {
        (**self).present()
    }

    fn end_context(&mut self) {
        (**self).end_context()
    }
}
