//! Eclipse Protocol native runner
//!
//! Drives the simulation headless at the configured frame rate: starts a run,
//! steers the player straight at each exit, continues through level
//! transitions and prints the final snapshot as JSON.
//!
//! Usage: `eclipse-protocol [settings.json]`

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use glam::Vec2;
use thiserror::Error;

use eclipse_protocol::hud::{self, Hud};
use eclipse_protocol::platform::FrameClock;
use eclipse_protocol::sim::{Action, FrameInput, Game, GamePhase, LevelSet};
use eclipse_protocol::{GameError, LevelError, Settings, SettingsError};

/// Give up after this many seconds of simulated play
const MAX_RUN_SECONDS: u32 = 120;

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("failed to encode snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("{} (native) starting...", hud::TITLE);

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), RunError> {
    let settings_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("settings.json"));
    let settings = Settings::load(&settings_path)?;
    let levels = LevelSet::load(&settings.levels_path)?;

    let mut game = Game::new(levels, &settings)?;
    let mut hud = Hud::new(settings.seed);
    let mut clock = FrameClock::new(settings.target_fps);
    let max_frames = settings.target_fps.max(1) * MAX_RUN_SECONDS;

    let mut pending = vec![Action::Confirm];
    for _ in 0..max_frames {
        let dt = settings.clamp_delta(clock.tick());
        let input = FrameInput {
            movement: autopilot(&game),
            actions: std::mem::take(&mut pending),
        };
        game.frame(&input, dt)?;

        for event in game.drain_events() {
            log::info!("Event: {:?}", event);
        }
        match game.phase() {
            GamePhase::LevelComplete => pending.push(Action::Confirm),
            GamePhase::GameOver => break,
            _ => {}
        }
    }

    let snapshot = game.snapshot();
    match hud.screen(&snapshot) {
        Some(screen) => {
            println!("{}", screen.headline);
            for line in &screen.lines {
                println!("  {}", line);
            }
        }
        None => {
            for line in hud::status_lines(&snapshot) {
                println!("{}", line);
            }
        }
    }
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Movement intent pointing at the exit, one axis unit at a time
fn autopilot(game: &Game) -> Vec2 {
    let to_exit = game.level.exit.center() - game.player.body.center();
    Vec2::new(axis(to_exit.x), axis(to_exit.y))
}

fn axis(d: f32) -> f32 {
    if d > 1.0 {
        1.0
    } else if d < -1.0 {
        -1.0
    } else {
        0.0
    }
}
