//! WFTDA regulation track analyzer
//!
//! Draws the track to scale. Mouse wheel zooms, middle-drag pans, `R` resets
//! the view. Measurements are logged at startup and shown in the title bar.

use std::process::ExitCode;

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use apex_sim::frame::{InputSource, UiBackend};
use apex_sim::platform::{WindowInput, create_window};
use apex_sim::renderer::{Projection, WgpuBackend};
use apex_sim::track::draw::colors;
use apex_sim::track::{TrackMetrics, TrackView, track_draw_list};
use apex_sim::{InitError, Settings};

struct TrackApp {
    settings: Settings,
    metrics: TrackMetrics,
    view: TrackView,
    input: WindowInput,
    backend: Option<WgpuBackend>,
    error: Option<InitError>,
}

impl TrackApp {
    fn new(settings: Settings) -> Self {
        Self {
            settings,
            metrics: TrackMetrics::compute(),
            view: TrackView::default(),
            input: WindowInput::new(),
            backend: None,
            error: None,
        }
    }

    fn start(&self, event_loop: &ActiveEventLoop) -> Result<WgpuBackend, InitError> {
        let title = format!("WFTDA Track Analyzer | {}", self.metrics);
        let window = create_window(event_loop, &title, &self.settings)?;
        let mut backend = WgpuBackend::new(
            window,
            Projection::Screen,
            colors::BACKGROUND,
            self.settings.vsync,
        );
        backend.begin_context()?;
        Ok(backend)
    }

    fn apply_input(&mut self) {
        if self.input.take_reset() {
            self.view.reset();
            log::debug!("View reset");
        }

        // Wheel zoom only while hovering the window
        let wheel = self.input.take_wheel();
        if self.input.cursor().is_some() {
            self.view.apply_wheel(wheel);
        }
        self.view.apply_drag(self.input.take_drag());
    }
}

impl ApplicationHandler for TrackApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.backend.is_some() || self.error.is_some() {
            return;
        }

        match self.start(event_loop) {
            Ok(backend) => self.backend = Some(backend),
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::Resized(size) => {
                if let Some(backend) = self.backend.as_mut() {
                    backend.resize(size.width, size.height);
                }
            }
            other => {
                self.input.handle_event(&other);
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.backend.is_none() {
            return;
        }

        if self.input.poll_events().close_requested {
            if let Some(mut backend) = self.backend.take() {
                backend.end_context();
            }
            event_loop.exit();
            return;
        }

        self.apply_input();

        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        let (w, h) = backend.size();
        let canvas_center = Vec2::new(w as f32 / 2.0, h as f32 / 2.0);

        backend.begin_frame();
        for command in track_draw_list(&self.view, canvas_center) {
            backend.submit_draw(command);
        }
        backend.present();
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(mut backend) = self.backend.take() {
            backend.end_context();
        }
    }
}

fn run() -> Result<(), InitError> {
    let settings = Settings::load();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = TrackApp::new(settings);
    log::info!("Playing surface area: {:.2} sq ft", app.metrics.area);
    log::info!("Inside circumference: {:.2} ft", app.metrics.inside_circumference);
    log::info!("Outside circumference: {:.2} ft", app.metrics.outside_circumference);

    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Track analyzer starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Startup failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
