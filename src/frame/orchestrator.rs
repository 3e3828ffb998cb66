//! Frame orchestrator
//!
//! Drives one tick at a time: close check, poll, step, draw, present. The host
//! decides cadence; nothing inside a tick yields.

use super::backend::{DrawCommand, InputSource, Rgba, UiBackend};
use crate::consts::DIAGNOSTIC_INTERVAL;
use crate::error::InitError;
use crate::settings::Settings;
use crate::sim::{Arena, Steppable, Team};

/// Lifecycle phase of the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePhase {
    /// Context not yet established
    Uninitialized,
    /// Ticking
    Running,
    /// Close observed, context being released
    ShuttingDown,
    /// Context released; no further ticks
    Terminated,
}

/// How entities are drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub radius: f32,
    pub home: Rgba,
    pub away: Rgba,
}

impl MarkerStyle {
    pub fn color_for(&self, team: Team) -> Rgba {
        match team {
            Team::Home => self.home,
            Team::Away => self.away,
        }
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for MarkerStyle {
    fn from(settings: &Settings) -> Self {
        Self {
            radius: settings.marker_radius,
            home: settings.home_color,
            away: settings.away_color,
        }
    }
}

/// Owns the simulation and sequences it against the UI backend
pub struct FrameOrchestrator<B: UiBackend, S: Steppable = Arena> {
    backend: B,
    sim: S,
    style: MarkerStyle,
    phase: FramePhase,
    /// Latched by a poll, acted on at the next tick boundary
    close_requested: bool,
    ticks: u64,
}

impl<B: UiBackend, S: Steppable> FrameOrchestrator<B, S> {
    pub fn new(backend: B, sim: S, style: MarkerStyle) -> Self {
        Self {
            backend,
            sim,
            style,
            phase: FramePhase::Uninitialized,
            close_requested: false,
            ticks: 0,
        }
    }

    pub fn phase(&self) -> FramePhase {
        self.phase
    }

    /// Completed ticks
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn sim(&self) -> &S {
        &self.sim
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Establish the backend context and start running.
    ///
    /// On failure the orchestrator stays `Uninitialized`; nothing is retried.
    pub fn init(&mut self) -> Result<(), InitError> {
        if self.phase != FramePhase::Uninitialized {
            return Ok(());
        }

        self.backend.begin_context()?;
        self.phase = FramePhase::Running;
        log::info!("Frame loop running");
        Ok(())
    }

    /// Run one tick and return the phase afterwards
    pub fn tick<I: InputSource + ?Sized>(&mut self, input: &mut I) -> FramePhase {
        if self.phase != FramePhase::Running {
            return self.phase;
        }

        if self.close_requested {
            self.terminate();
            return self.phase;
        }

        // 1. Events
        if input.poll_events().close_requested {
            log::info!("Close requested at tick {}", self.ticks);
            self.close_requested = true;
        }

        // 2. Simulation
        self.sim.step();

        // 3. Draw submission
        self.backend.begin_frame();
        for entity in self.sim.entities() {
            self.backend.submit_draw(DrawCommand::FilledCircle {
                center: entity.position(),
                radius: self.style.radius,
                color: self.style.color_for(entity.team()),
            });
        }

        // 4. Render + present
        self.backend.present();

        self.ticks += 1;
        if self.ticks % DIAGNOSTIC_INTERVAL == 0 {
            log::debug!("tick {}", self.ticks);
        }

        self.phase
    }

    /// Tear down without waiting for a close signal. Idempotent.
    pub fn shutdown(&mut self) {
        match self.phase {
            FramePhase::Uninitialized => self.phase = FramePhase::Terminated,
            FramePhase::Running => self.terminate(),
            FramePhase::ShuttingDown | FramePhase::Terminated => {}
        }
    }

    /// Blocking loop: init, then tick until terminated
    pub fn run<I: InputSource + ?Sized>(&mut self, input: &mut I) -> Result<(), InitError> {
        self.init()?;
        while self.tick(input) != FramePhase::Terminated {}
        Ok(())
    }

    fn terminate(&mut self) {
        self.phase = FramePhase::ShuttingDown;
        log::info!("Shutting down after {} ticks", self.ticks);
        self.backend.end_context();
        self.phase = FramePhase::Terminated;
        log::info!("Frame loop terminated");
    }
}

impl<B: UiBackend, S: Steppable> Drop for FrameOrchestrator<B, S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
