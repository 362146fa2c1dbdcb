//! Per-frame game update
//!
//! One call to [`Game::frame`] per rendered frame, in this order:
//! 1. Apply queued actions through the phase transition table
//! 2. If playing: move the player, drain oxygen, follow with the camera,
//!    update voidwalkers, then check contact, stations, exit and oxygen
//! 3. If still playing: check score-driven difficulty
//!
//! All motion and oxygen change is scaled by the measured frame delta.

use glam::Vec2;
use serde::Serialize;

use super::camera::Camera;
use super::events::GameEvent;
use super::level::{Level, LevelSet};
use super::motion::{Facing, Movable};
use super::player::Player;
use super::progression::{Progression, check_progression};
use super::rect::Rect;
use super::state::{Action, DeathCause, Effect, GamePhase, Session, Trigger, transition};
use crate::error::GameError;
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Movement intent, each axis in [-1, 1]
    pub movement: Vec2,
    /// Key presses since the last frame, oldest first
    pub actions: Vec<Action>,
}

impl FrameInput {
    pub fn moving(x: f32, y: f32) -> Self {
        Self {
            movement: Vec2::new(x, y),
            actions: Vec::new(),
        }
    }

    pub fn action(action: Action) -> Self {
        Self {
            movement: Vec2::ZERO,
            actions: vec![action],
        }
    }
}

/// The whole game: session counters, the loaded level and the player
#[derive(Debug, Clone)]
pub struct Game {
    pub session: Session,
    pub level: Level,
    pub player: Player,
    pub camera: Camera,
    levels: LevelSet,
    tuning: Tuning,
    /// Player overlapped a station last frame
    on_station: bool,
    events: Vec<GameEvent>,
}

impl Game {
    /// Build level 1 and wait on the menu
    pub fn new(levels: LevelSet, settings: &Settings) -> Result<Self, GameError> {
        let tuning = settings.tuning.clone();
        let session = Session::new();
        let level = levels.build(session.current_level, &tuning)?;
        let player = Player::new(level.player_start, &tuning);
        let mut camera = Camera::new(settings.viewport_width, settings.viewport_height);
        camera.follow(player.body.center(), level.width, level.height);
        log::info!("Game ready with {} levels", levels.len());

        Ok(Self {
            session,
            level,
            player,
            camera,
            levels,
            tuning,
            on_station: false,
            events: Vec::new(),
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Add distance/progress to the score
    pub fn add_progress(&mut self, amount: u64) {
        self.session.score = self.session.score.saturating_add(amount);
    }

    /// Advance one frame. Fails only if a level cannot be built.
    pub fn frame(&mut self, input: &FrameInput, dt: f32) -> Result<(), GameError> {
        for &action in &input.actions {
            self.apply(Trigger::Action(action))?;
        }

        if !self.session.phase.simulates() {
            return Ok(());
        }
        self.simulate(input.movement, dt)?;

        if self.session.phase.simulates() {
            self.update_progression()?;
        }
        Ok(())
    }

    /// Run a trigger through the transition table. Returns true if it applied.
    ///
    /// The effect runs before the phase changes, so a level that fails to
    /// build leaves the game in its previous phase.
    fn apply(&mut self, trigger: Trigger) -> Result<bool, GameError> {
        let Some((next, effect)) = transition(self.session.phase, trigger) else {
            return Ok(false);
        };

        match effect {
            Effect::None => {}
            Effect::Die(cause) => {
                self.session.death_cause = cause;
                self.events.push(GameEvent::GameOver { cause });
                log::info!("Game over: {:?}", cause);
            }
            Effect::AdvanceLevel => {
                self.session.current_level += 1;
                self.events.push(GameEvent::LevelCompleted {
                    next_level: self.session.current_level,
                });
                log::info!("Level complete, next is {}", self.session.current_level);
            }
            Effect::Victory => {
                self.session.victory = true;
                self.events.push(GameEvent::Victory);
                log::info!("Victory on level {}", self.session.current_level);
            }
            Effect::ResetLevel => self.reset_level()?,
            Effect::ResetGame => {
                let mut session = self.session.clone();
                session.reset_counters();
                let level = self.levels.build(session.current_level, &self.tuning)?;
                self.session = session;
                self.install_level(level);
            }
        }

        log::debug!("{:?} --{:?}--> {:?}", self.session.phase, trigger, next);
        self.session.phase = next;
        Ok(true)
    }

    /// Rebuild the current level and respawn the player at its start
    fn reset_level(&mut self) -> Result<(), GameError> {
        let level = self.levels.build(self.session.current_level, &self.tuning)?;
        self.install_level(level);
        Ok(())
    }

    fn install_level(&mut self, level: Level) {
        self.player = Player::new(level.player_start, &self.tuning);
        self.level = level;
        self.on_station = false;
        self.camera
            .follow(self.player.body.center(), self.level.width, self.level.height);
        log::info!(
            "Loaded level {} ({} walls, {} stations, {} voidwalkers)",
            self.session.current_level,
            self.level.walls.len(),
            self.level.oxygen_stations.len(),
            self.level.voidwalkers.len()
        );
    }

    fn simulate(&mut self, movement: Vec2, dt: f32) -> Result<(), GameError> {
        // Player motion
        let intent = movement.clamp(Vec2::NEG_ONE, Vec2::ONE);
        let delta = intent * self.player.speed * dt;
        self.player.move_and_slide(delta, self.level.wall_rects());
        self.player.drain_oxygen(self.tuning.oxygen_drain, dt);

        self.camera
            .follow(self.player.body.center(), self.level.width, self.level.height);

        // Voidwalkers
        let target = self.player.body.pos;
        let player_rect = self.player.rect();
        let mut contact = false;
        let Level {
            walls, voidwalkers, ..
        } = &mut self.level;
        for (i, walker) in voidwalkers.iter_mut().enumerate() {
            if walker.update(target, dt, walls.iter().map(|w| &w.rect)) {
                log::debug!("Voidwalker {} now {:?}", i, walker.behavior());
            }
            if walker.chase_mode() && walker.try_special_attack() {
                log::debug!("Voidwalker {} special attack", i);
                self.events.push(GameEvent::SpecialAttack { agent: i });
            }
            if player_rect.overlaps(&walker.rect()) {
                contact = true;
                break;
            }
        }
        if contact {
            self.events.push(GameEvent::DamageTaken);
            self.apply(Trigger::HostileContact)?;
            return Ok(());
        }

        // Oxygen stations
        let on_station = self.level.on_station(&player_rect);
        if on_station {
            self.player.refill_oxygen(self.tuning.oxygen_refill, dt);
            if !self.on_station {
                self.events.push(GameEvent::OxygenCollected);
            }
        }
        self.on_station = on_station;

        // Exit
        if player_rect.overlaps(&self.level.exit) {
            let final_level = self.session.current_level as usize >= self.levels.len();
            self.apply(Trigger::ExitReached { final_level })?;
            return Ok(());
        }

        if self.player.is_out_of_oxygen() {
            self.apply(Trigger::OxygenDepleted)?;
        }
        Ok(())
    }

    fn update_progression(&mut self) -> Result<(), GameError> {
        match check_progression(&mut self.session) {
            Progression::Unchanged => {}
            Progression::Escalated { level, speed } => {
                self.events
                    .push(GameEvent::DifficultyIncreased { level, speed });
            }
            Progression::Complete => {
                self.apply(Trigger::ProgressionComplete)?;
            }
        }
        Ok(())
    }

    /// Read-only view of everything the renderer needs this frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.session.phase,
            current_level: self.session.current_level,
            score: self.session.score,
            distance_threshold: self.session.distance_threshold,
            speed_multiplier: self.session.speed_multiplier,
            victory: self.session.victory,
            death_cause: self.session.death_cause,
            camera: self.camera.offset,
            player: EntityView {
                pos: self.player.body.pos,
                facing: self.player.body.facing,
            },
            oxygen: self.player.oxygen(),
            oxygen_fraction: self.player.oxygen_fraction(),
            walls: self.level.walls.iter().map(|w| w.rect).collect(),
            stations: self.level.oxygen_stations.iter().map(|s| s.pos).collect(),
            exit: self.level.exit,
            voidwalkers: self
                .level
                .voidwalkers
                .iter()
                .map(|v| EntityView {
                    pos: v.body.pos,
                    facing: v.body.facing,
                })
                .collect(),
        }
    }
}

/// Position and facing of one entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntityView {
    pub pos: Vec2,
    pub facing: Facing,
}

/// Frame output for rendering and HUD
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub current_level: u32,
    pub score: u64,
    pub distance_threshold: u64,
    pub speed_multiplier: f32,
    pub victory: bool,
    pub death_cause: DeathCause,
    /// Camera offset in level pixels
    pub camera: Vec2,
    pub player: EntityView,
    pub oxygen: f32,
    /// Oxygen relative to the tank size, 0..1
    pub oxygen_fraction: f32,
    pub walls: Vec<Rect>,
    pub stations: Vec<Vec2>,
    pub exit: Rect,
    pub voidwalkers: Vec<EntityView>,
}
