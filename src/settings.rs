//! Runtime settings
//!
//! Loaded from a JSON file next to the executable. Any field left out of the
//! file keeps its default.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;
use crate::tuning::Tuning;

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    /// Viewport width in pixels (camera window)
    pub viewport_width: f32,
    /// Viewport height in pixels
    pub viewport_height: f32,

    // === Timing ===
    /// Frames per second the native loop paces itself to
    pub target_fps: u32,
    /// Cap on the measured frame delta (seconds)
    pub max_frame_delta: f32,

    // === Content ===
    /// Level description file
    pub levels_path: PathBuf,
    /// Seed for end-screen flavor text
    pub seed: u64,

    /// Game balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,

            target_fps: TARGET_FPS,
            max_frame_delta: MAX_FRAME_DELTA,

            levels_path: PathBuf::from("assets/levels.json"),
            seed: 0,

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from disk. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::warn!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Frame delta clamped to the configured cap
    pub fn clamp_delta(&self, dt: f32) -> f32 {
        dt.clamp(0.0, self.max_frame_delta)
    }
}
