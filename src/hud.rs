//! HUD and screen text
//!
//! Text only; layout and drawing belong to the renderer.

use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_pcg::Pcg32;

use crate::sim::{DeathCause, GamePhase, Snapshot};

pub const TITLE: &str = "Eclipse Protocol: Lost in the Void";

const OXYGEN_DEATHS: &[&str] = &[
    "Oops! Forgot to breathe?",
    "The tank was not bottomless after all.",
];

const VOIDWALKER_DEATHS: &[&str] = &[
    "Voidwalker just wanted a hug!",
    "The void walked right into you.",
];

const VICTORY: &str = "Congratulations! You Reached Your Home!";

const MENU_LINES: &[&str] = &["Press SPACE to Start", "WASD to move"];
const PAUSED_LINES: &[&str] = &["Press ESC to Resume"];
const LEVEL_COMPLETE_LINES: &[&str] = &["Press SPACE for Next Level"];
const VICTORY_LINES: &[&str] = &["Press R to Play Again"];
const DEFEAT_LINES: &[&str] = &["Press R to Restart"];

/// Text for a full-screen state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub headline: String,
    pub lines: Vec<String>,
}

/// Picks screen text. Death flavor lines come from a seeded RNG.
#[derive(Debug, Clone)]
pub struct Hud {
    rng: Pcg32,
}

impl Hud {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Full-screen text for the current phase, `None` while playing
    pub fn screen(&mut self, snap: &Snapshot) -> Option<Screen> {
        let (headline, lines) = match snap.phase {
            GamePhase::Playing => return None,
            GamePhase::Menu => (TITLE.to_string(), MENU_LINES),
            GamePhase::Paused => ("Paused".to_string(), PAUSED_LINES),
            GamePhase::LevelComplete => ("Level Complete!".to_string(), LEVEL_COMPLETE_LINES),
            GamePhase::GameOver if snap.victory => (VICTORY.to_string(), VICTORY_LINES),
            GamePhase::GameOver => (
                self.death_message(snap.death_cause).to_string(),
                DEFEAT_LINES,
            ),
        };
        Some(Screen {
            headline,
            lines: lines.iter().map(|l| l.to_string()).collect(),
        })
    }

    fn death_message(&mut self, cause: DeathCause) -> &'static str {
        let pool = match cause {
            DeathCause::Oxygen => OXYGEN_DEATHS,
            DeathCause::HostileContact => VOIDWALKER_DEATHS,
            DeathCause::None => return "Game Over",
        };
        pool.choose(&mut self.rng).copied().unwrap_or("Game Over")
    }
}

/// In-game status lines: oxygen, level, progress
pub fn status_lines(snap: &Snapshot) -> Vec<String> {
    vec![
        format!("Oxygen: {}%", (snap.oxygen_fraction * 100.0) as i32),
        format!("Level: {}", snap.current_level),
        format!("Progress: {}/{}", snap.score, snap.distance_threshold),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::sim::{Action, FrameInput, Game, LevelData, LevelSet, TilePoint};

    fn level_set() -> LevelSet {
        let level = LevelData {
            width: 10,
            height: 10,
            walls: Vec::new(),
            oxygen_stations: Vec::new(),
            voidwalkers: Vec::new(),
            player_start: TilePoint { x: 1, y: 1 },
            exit: TilePoint { x: 8, y: 8 },
        };
        LevelSet { levels: vec![level] }
    }

    fn game() -> Game {
        Game::new(level_set(), &Settings::default()).unwrap()
    }

    fn snapshot() -> Snapshot {
        game().snapshot()
    }

    #[test]
    fn test_menu_screen() {
        let mut hud = Hud::new(1);
        let screen = hud.screen(&snapshot()).unwrap();
        assert_eq!(screen.headline, TITLE);
        assert_eq!(screen.lines[0], "Press SPACE to Start");
    }

    #[test]
    fn test_no_screen_while_playing() {
        let mut snap = snapshot();
        snap.phase = GamePhase::Playing;
        assert_eq!(Hud::new(1).screen(&snap), None);
    }

    #[test]
    fn test_death_messages_match_cause() {
        let mut hud = Hud::new(7);
        let mut snap = snapshot();
        snap.phase = GamePhase::GameOver;

        snap.death_cause = DeathCause::Oxygen;
        for _ in 0..10 {
            let screen = hud.screen(&snap).unwrap();
            assert!(OXYGEN_DEATHS.contains(&screen.headline.as_str()));
            assert_eq!(screen.lines, vec!["Press R to Restart".to_string()]);
        }

        snap.death_cause = DeathCause::HostileContact;
        let screen = hud.screen(&snap).unwrap();
        assert!(VOIDWALKER_DEATHS.contains(&screen.headline.as_str()));
    }

    #[test]
    fn test_pools_lead_with_classic_lines() {
        assert_eq!(OXYGEN_DEATHS[0], "Oops! Forgot to breathe?");
        assert_eq!(VOIDWALKER_DEATHS[0], "Voidwalker just wanted a hug!");
    }

    #[test]
    fn test_same_seed_same_text() {
        let mut snap = snapshot();
        snap.phase = GamePhase::GameOver;
        snap.death_cause = DeathCause::Oxygen;
        let mut a = Hud::new(42);
        let mut b = Hud::new(42);
        for _ in 0..5 {
            assert_eq!(a.screen(&snap), b.screen(&snap));
        }
    }

    #[test]
    fn test_victory_screen() {
        let mut snap = snapshot();
        snap.phase = GamePhase::GameOver;
        snap.victory = true;
        let screen = Hud::new(0).screen(&snap).unwrap();
        assert_eq!(screen.headline, VICTORY);
        assert_eq!(screen.lines[0], "Press R to Play Again");
    }

    #[test]
    fn test_status_lines() {
        let mut game = game();
        game.frame(&FrameInput::action(Action::Confirm), 0.0).unwrap();
        game.frame(&FrameInput::default(), 1.5).unwrap();
        game.add_progress(250);

        assert_eq!(
            status_lines(&game.snapshot()),
            vec!["Oxygen: 92%", "Level: 1", "Progress: 250/1000"]
        );
    }

    #[test]
    fn test_oxygen_shown_relative_to_tank() {
        let mut settings = Settings::default();
        settings.tuning.oxygen_max = 200.0;
        let mut game = Game::new(level_set(), &settings).unwrap();
        game.player.set_oxygen(50.0);

        assert_eq!(status_lines(&game.snapshot())[0], "Oxygen: 25%");
    }
}
