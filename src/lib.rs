//! Eclipse Protocol - a tile-based oxygen survival game
//!
//! Core modules:
//! - `sim`: Simulation (motion, collisions, voidwalker AI, game state)
//! - `platform`: Native frame clock
//! - `settings`: Runtime configuration
//! - `tuning`: Data-driven game balance
//! - `hud`: HUD and end-state text

pub mod error;
pub mod hud;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{GameError, LevelError, SettingsError};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Size of one level tile in pixels
    pub const TILE_SIZE: f32 = 32.0;

    /// Viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;
    /// Target frame rate of the native loop
    pub const TARGET_FPS: u32 = 60;
    /// Largest frame delta handed to the simulation (seconds)
    pub const MAX_FRAME_DELTA: f32 = 0.25;

    /// Player and voidwalker sprites are 32px frames drawn at 1.5x
    pub const ENTITY_SIZE: f32 = 48.0;
    /// Oxygen station trigger zone size
    pub const STATION_SIZE: f32 = 32.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 300.0;
    pub const OXYGEN_MAX: f32 = 100.0;
    /// Oxygen lost per second
    pub const OXYGEN_DRAIN_RATE: f32 = 5.0;
    /// Oxygen gained per second while touching a station
    pub const OXYGEN_REFILL_RATE: f32 = 30.0;
    pub const ENERGY_MAX: f32 = 100.0;

    /// Voidwalker defaults
    pub const VOIDWALKER_SPEED: f32 = 60.0;
    /// Patrol runs from the spawn x to spawn x + this span
    pub const PATROL_SPAN: f32 = 200.0;
    pub const DETECTION_RANGE: f32 = 200.0;
    /// Speed multiplier applied while chasing
    pub const CHASE_MULTIPLIER: f32 = 1.5;
    /// Seconds between special attacks
    pub const SPECIAL_ATTACK_COOLDOWN: f32 = 3.0;
}
