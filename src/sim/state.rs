//! Game session state and phase transitions
//!
//! Every phase change goes through [`transition`], which looks the pair
//! (phase, trigger) up in a single table. Anything not in the table is
//! ignored, so e.g. a pause press on the menu does nothing.

use serde::{Deserialize, Serialize};

use super::progression::DISTANCE_THRESHOLDS;

/// Top-level game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended (defeat or victory)
    GameOver,
    /// Exit reached, waiting for confirm to load the next level
    LevelComplete,
}

impl GamePhase {
    /// Whether the simulation advances in this phase
    pub fn simulates(self) -> bool {
        self == GamePhase::Playing
    }
}

/// Why the last run ended in defeat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeathCause {
    #[default]
    None,
    Oxygen,
    HostileContact,
}

/// Discrete player actions, one per key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Start / continue (space)
    Confirm,
    /// Pause toggle (escape)
    Pause,
    /// Restart after game over (R)
    Restart,
}

/// Something that may move the game to another phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Action(Action),
    OxygenDepleted,
    HostileContact,
    /// Player touched the exit zone
    ExitReached { final_level: bool },
    /// Score passed the last distance threshold
    ProgressionComplete,
}

/// Side effect applied alongside a phase change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Record a defeat
    Die(DeathCause),
    /// Move on to the next level index
    AdvanceLevel,
    Victory,
    /// Rebuild the current level and respawn the player
    ResetLevel,
    /// Reset all session counters, then rebuild level 1
    ResetGame,
}

use Action::*;
use GamePhase::*;

const TRANSITIONS: &[(GamePhase, Trigger, GamePhase, Effect)] = &[
    (Menu, Trigger::Action(Confirm), Playing, Effect::None),
    (Playing, Trigger::Action(Pause), Paused, Effect::None),
    (Paused, Trigger::Action(Pause), Playing, Effect::None),
    (Playing, Trigger::HostileContact, GameOver, Effect::Die(DeathCause::HostileContact)),
    (Playing, Trigger::OxygenDepleted, GameOver, Effect::Die(DeathCause::Oxygen)),
    (Playing, Trigger::ExitReached { final_level: false }, LevelComplete, Effect::AdvanceLevel),
    (Playing, Trigger::ExitReached { final_level: true }, GameOver, Effect::Victory),
    (Playing, Trigger::ProgressionComplete, GameOver, Effect::Victory),
    (LevelComplete, Trigger::Action(Confirm), Playing, Effect::ResetLevel),
    (GameOver, Trigger::Action(Restart), Playing, Effect::ResetGame),
];

/// Look up the phase change for `trigger` in `phase`
pub fn transition(phase: GamePhase, trigger: Trigger) -> Option<(GamePhase, Effect)> {
    TRANSITIONS
        .iter()
        .find(|(from, t, _, _)| *from == phase && *t == trigger)
        .map(|&(_, _, to, effect)| (to, effect))
}

/// Session counters that outlive individual levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub phase: GamePhase,
    /// 1-based level number
    pub current_level: u32,
    /// Distance/progress counter
    pub score: u64,
    /// Score needed for the next difficulty step
    pub distance_threshold: u64,
    pub speed_multiplier: f32,
    pub victory: bool,
    pub death_cause: DeathCause,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            phase: GamePhase::Menu,
            current_level: 1,
            score: 0,
            distance_threshold: DISTANCE_THRESHOLDS[0],
            speed_multiplier: 1.0,
            victory: false,
            death_cause: DeathCause::None,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every counter for a fresh run, keeping the phase
    pub fn reset_counters(&mut self) {
        *self = Self {
            phase: self.phase,
            ..Self::default()
        };
    }
}
