//! Simulation module
//!
//! All gameplay logic lives here. No rendering, audio, windowing or input
//! device code: the outside world feeds in a frame delta plus a
//! [`FrameInput`] and reads back a [`Snapshot`] and [`GameEvent`]s.

pub mod camera;
pub mod events;
pub mod hostile;
pub mod level;
pub mod motion;
pub mod player;
pub mod progression;
pub mod rect;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use events::GameEvent;
pub use hostile::{Behavior, Voidwalker};
pub use level::{Level, LevelData, LevelSet, OxygenStation, TilePoint, Wall, WallData};
pub use motion::{Body, Facing, MoveResult, Movable};
pub use player::Player;
pub use progression::{DISTANCE_THRESHOLDS, Progression, check_progression};
pub use rect::Rect;
pub use state::{Action, DeathCause, GamePhase, Session, Trigger, transition};
pub use tick::{EntityView, FrameInput, Game, Snapshot};
