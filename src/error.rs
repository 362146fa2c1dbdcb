//! Error types
//!
//! Only level data and configuration can fail. Degenerate geometry and
//! zero-distance chase vectors are handled in place by the simulation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A level description that cannot be turned into a playable level
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed level data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("level {index} requested but only {available} levels are defined")]
    MissingLevel { index: u32, available: usize },
    #[error("level file defines no levels")]
    Empty,
    #[error("invalid {what}: {value}")]
    InvalidDimension { what: &'static str, value: i32 },
    #[error("{what} at tile ({x}, {y}) lies outside the level")]
    OutOfBounds { what: &'static str, x: i32, y: i32 },
}

/// Settings file problems
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fatal game errors surfaced to the runner
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Level(#[from] LevelError),
}
