//! Data-driven game balance
//!
//! Every number the simulation scales by lives here so a settings file can
//! override it without a rebuild.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance values used by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Pixels per level tile
    pub tile_size: f32,

    // === Player ===
    pub player_speed: f32,
    pub player_size: f32,
    pub oxygen_max: f32,
    /// Oxygen lost per second
    pub oxygen_drain: f32,
    /// Oxygen gained per second on a station
    pub oxygen_refill: f32,
    pub energy_max: f32,

    // === Stations / exit ===
    pub station_size: f32,

    // === Voidwalkers ===
    pub voidwalker_speed: f32,
    pub voidwalker_size: f32,
    pub patrol_span: f32,
    pub detection_range: f32,
    pub chase_multiplier: f32,
    pub attack_cooldown: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,

            player_speed: PLAYER_SPEED,
            player_size: ENTITY_SIZE,
            oxygen_max: OXYGEN_MAX,
            oxygen_drain: OXYGEN_DRAIN_RATE,
            oxygen_refill: OXYGEN_REFILL_RATE,
            energy_max: ENERGY_MAX,

            station_size: STATION_SIZE,

            voidwalker_speed: VOIDWALKER_SPEED,
            voidwalker_size: ENTITY_SIZE,
            patrol_span: PATROL_SPAN,
            detection_range: DETECTION_RANGE,
            chase_multiplier: CHASE_MULTIPLIER,
            attack_cooldown: SPECIAL_ATTACK_COOLDOWN,
        }
    }
}
