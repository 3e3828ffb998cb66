//! Apex Sim entry point
//!
//! Opens a window and runs the random-walk arena until the window closes.

use std::process::ExitCode;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use apex_sim::consts::{ARENA_MAX, ARENA_MIN};
use apex_sim::frame::{FrameOrchestrator, FramePhase, MarkerStyle};
use apex_sim::platform::{WindowInput, create_window};
use apex_sim::renderer::{Projection, WgpuBackend};
use apex_sim::sim::Arena;
use apex_sim::{InitError, Settings, arena_center};

const WINDOW_TITLE: &str = "Apex Sim";

/// Application instance holding all state
struct ArenaApp {
    settings: Settings,
    input: WindowInput,
    frame: Option<FrameOrchestrator<WgpuBackend>>,
    /// Fatal startup error, reported after the event loop returns
    error: Option<InitError>,
}

impl ArenaApp {
    fn new(settings: Settings) -> Self {
        Self {
            settings,
            input: WindowInput::new(),
            frame: None,
            error: None,
        }
    }

    fn start(&self, event_loop: &ActiveEventLoop) -> Result<FrameOrchestrator<WgpuBackend>, InitError> {
        let window = create_window(event_loop, WINDOW_TITLE, &self.settings)?;

        let half_extent = (ARENA_MAX - ARENA_MIN) / 2.0 * (1.0 + self.settings.arena_margin);
        let backend = WgpuBackend::new(
            window,
            Projection::World {
                center: arena_center(),
                half_extent,
            },
            self.settings.background,
            self.settings.vsync,
        );

        let seed = self.settings.effective_seed();
        log::info!("Arena seed: {}", seed);

        let mut frame = FrameOrchestrator::new(
            backend,
            Arena::seeded(seed),
            MarkerStyle::from(&self.settings),
        );
        frame.init()?;
        Ok(frame)
    }
}

impl ApplicationHandler for ArenaApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.frame.is_some() || self.error.is_some() {
            return;
        }

        match self.start(event_loop) {
            Ok(frame) => self.frame = Some(frame),
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::Resized(size) => {
                if let Some(frame) = self.frame.as_mut() {
                    frame.backend_mut().resize(size.width, size.height);
                }
            }
            other => {
                self.input.handle_event(&other);
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(frame) = self.frame.as_mut() else {
            return;
        };

        if frame.tick(&mut self.input) == FramePhase::Terminated {
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(frame) = self.frame.as_mut() {
            frame.shutdown();
        }
    }
}

fn run() -> Result<(), InitError> {
    let settings = Settings::load();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = ArenaApp::new(settings);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Apex Sim starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Startup failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
