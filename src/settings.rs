//! Runtime settings
//!
//! Loaded from a JSON file; anything missing falls back to defaults, and a
//! missing or broken file never stops the game from starting.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{HIGHSCORE_FILE, MAX_FRAME_DT, TARGET_FPS};
use crate::tuning::Tuning;

/// Environment variable naming the settings file
pub const CONFIG_ENV_VAR: &str = "ENDLESS_DODGE_CONFIG";
/// Settings file used when the environment does not name one
pub const DEFAULT_CONFIG_FILE: &str = "endless_dodge.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the best score is kept
    pub highscore_path: PathBuf,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,

    // === Frame pacing ===
    pub target_fps: u32,
    /// Largest delta-time fed into one tick (seconds)
    pub max_frame_dt: f32,
    /// Sleep between frames to hold the target rate
    pub frame_pacing: bool,

    // === Headless demo ===
    /// How long the self-playing demo runs (seconds)
    pub demo_seconds: f32,

    /// Gameplay balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            highscore_path: PathBuf::from(HIGHSCORE_FILE),
            seed: None,

            target_fps: TARGET_FPS,
            max_frame_dt: MAX_FRAME_DT,
            frame_pacing: true,

            demo_seconds: 30.0,

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Settings file path from the environment, or the default name
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Parse settings from a file, reporting every failure
    pub fn read(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        let mut settings: Settings = serde_json::from_str(&json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Clamp values the loop and simulation cannot work with
    pub fn sanitize(&mut self) {
        let defaults = Settings::default();
        if self.target_fps == 0 {
            log::warn!("target_fps must be positive, using {}", defaults.target_fps);
            self.target_fps = defaults.target_fps;
        }
        if !(self.max_frame_dt > 0.0) {
            log::warn!("max_frame_dt must be positive, using {}", defaults.max_frame_dt);
            self.max_frame_dt = defaults.max_frame_dt;
        }
        if !(self.demo_seconds >= 0.0) {
            self.demo_seconds = defaults.demo_seconds;
        }
        for field in self.tuning.sanitize() {
            log::warn!("Tuning value `{}` out of range, adjusted", field);
        }
    }

    /// Time budget of one frame at the target rate (seconds)
    pub fn frame_time(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }
}
