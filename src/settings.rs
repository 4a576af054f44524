//! Player settings and preferences
//!
//! Persisted as JSON next to the game. Gameplay tuning is not here: speed,
//! arena size and round length are build-time constants in `consts`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Background loop volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Silence everything
    pub muted: bool,
    /// Directory holding the sound files
    pub sound_dir: PathBuf,

    // === Camera ===
    /// Distance per pan/dolly key press
    pub camera_pan_step: f32,
    /// Degrees per arrow key press
    pub camera_rotate_step_deg: f32,

    // === HUD ===
    /// Draw timer and goal counter
    pub show_hud: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Audio
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.3,
            muted: false,
            sound_dir: PathBuf::from("assets/sounds"),

            // Camera
            camera_pan_step: 0.2,
            camera_rotate_step_deg: 2.0,

            // HUD
            show_hud: true,
        }
    }
}

impl Settings {
    /// Default file name
    pub const FILE_NAME: &'static str = "station_run_settings.json";

    /// Clamp volumes into range
    pub fn sanitize(&mut self) {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        if !self.camera_pan_step.is_finite() || self.camera_pan_step <= 0.0 {
            self.camera_pan_step = Self::default().camera_pan_step;
        }
        if !self.camera_rotate_step_deg.is_finite() || self.camera_rotate_step_deg <= 0.0 {
            self.camera_rotate_step_deg = Self::default().camera_rotate_step_deg;
        }
    }

    /// Effective one-shot volume (respects mute)
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Effective background volume (respects mute)
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    /// Parse settings JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Load settings from disk, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Failed to read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
