//! Application settings
//!
//! Read once at startup from a JSON file. A missing file means defaults; a
//! broken one is reported and also falls back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::frame::Rgba;

/// Environment variable naming an explicit settings file
pub const SETTINGS_ENV: &str = "APEX_SIM_SETTINGS";

/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "apex_sim_settings.json";

/// Window, rendering and simulation preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_width: u32,
    pub window_height: u32,
    /// Sync presentation to the display refresh
    pub vsync: bool,

    // === Simulation ===
    /// Fixed random-walk seed; derived from the clock when unset
    pub seed: Option<u64>,

    // === Appearance ===
    /// Entity marker radius in arena units
    pub marker_radius: f32,
    pub home_color: Rgba,
    pub away_color: Rgba,
    pub background: Rgba,
    /// Extra space around the arena, as a fraction of its half-width
    pub arena_margin: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            vsync: true,

            seed: None,

            marker_radius: 10.0,
            home_color: [0.95, 0.35, 0.25, 1.0],
            away_color: [0.25, 0.45, 0.95, 1.0],
            background: [0.45, 0.55, 0.60, 1.0],
            arena_margin: 0.05,
        }
    }
}

impl Settings {
    /// Path to read settings from: `$APEX_SIM_SETTINGS` or the default file
    pub fn path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load() -> Self {
        let path = Self::path();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str::<Self>(&json)?.sanitized())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Seed to use for this run
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default()
        })
    }

    /// Replace values the renderer cannot use
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.window_width == 0 || self.window_height == 0 {
            self.window_width = defaults.window_width;
            self.window_height = defaults.window_height;
        }
        if !(self.marker_radius.is_finite() && self.marker_radius > 0.0) {
            self.marker_radius = defaults.marker_radius;
        }
        if !self.arena_margin.is_finite() {
            self.arena_margin = defaults.arena_margin;
        }
        self.arena_margin = self.arena_margin.clamp(0.0, 1.0);
        self
    }
}
