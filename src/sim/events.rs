//! One-shot events for audio and effects
//!
//! Events fire on the frame a condition starts, not on every frame it holds.

use serde::{Deserialize, Serialize};

use super::state::DeathCause;

/// Something the outside world may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player stepped onto an oxygen station
    OxygenCollected,
    /// Player touched a voidwalker
    DamageTaken,
    /// Voidwalker at this index used its special attack
    SpecialAttack { agent: usize },
    /// Exit reached with more levels to go
    LevelCompleted { next_level: u32 },
    /// Score crossed a distance threshold
    DifficultyIncreased { level: u32, speed: f32 },
    /// Run ended in defeat
    GameOver { cause: DeathCause },
    /// Run ended in victory
    Victory,
}
