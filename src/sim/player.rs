//! The player avatar and its oxygen supply

use std::collections::HashSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::motion::{Body, Movable};
use crate::tuning::Tuning;

/// The player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Pixels per second at full input
    pub speed: f32,
    /// Always within [0, oxygen_max]
    oxygen: f32,
    oxygen_max: f32,
    /// Not consumed by anything yet
    pub energy: f32,
    /// Collected item identifiers
    pub items: HashSet<String>,
}

impl Player {
    /// Spawn a player at `pos` (top-left, level pixels) with a full tank
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            body: Body::new(pos, Vec2::splat(tuning.player_size)),
            speed: tuning.player_speed,
            oxygen: tuning.oxygen_max,
            oxygen_max: tuning.oxygen_max,
            energy: tuning.energy_max,
            items: HashSet::new(),
        }
    }

    pub fn oxygen(&self) -> f32 {
        self.oxygen
    }

    /// Set oxygen directly (clamped)
    pub fn set_oxygen(&mut self, oxygen: f32) {
        self.oxygen = oxygen.clamp(0.0, self.oxygen_max);
    }

    /// Continuous drain: `rate` units per second, floored at zero
    pub fn drain_oxygen(&mut self, rate: f32, dt: f32) {
        self.oxygen = (self.oxygen - rate * dt).max(0.0);
    }

    /// Station refill: `rate` units per second, capped at the tank size
    pub fn refill_oxygen(&mut self, rate: f32, dt: f32) {
        self.oxygen = (self.oxygen + rate * dt).min(self.oxygen_max);
    }

    pub fn is_out_of_oxygen(&self) -> bool {
        self.oxygen <= 0.0
    }

    /// Oxygen as a 0..1 fraction for HUD bars
    pub fn oxygen_fraction(&self) -> f32 {
        if self.oxygen_max > 0.0 {
            self.oxygen / self.oxygen_max
        } else {
            0.0
        }
    }

    /// Add an item to the inventory. Returns false if already held.
    pub fn collect(&mut self, item: impl Into<String>) -> bool {
        self.items.insert(item.into())
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.items.contains(item)
    }
}

impl Movable for Player {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}
