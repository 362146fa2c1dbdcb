//! Shared motion model
//!
//! Player and voidwalkers move the same way: the frame's displacement is
//! tested against the walls one axis at a time, and each axis is committed
//! only if it stays clear. Blocking one axis still lets the other through,
//! which is what makes diagonal movement slide along walls.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Horizontal facing, used for sprite flipping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Which axes of a requested move were committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    pub moved_x: bool,
    pub moved_y: bool,
}

impl MoveResult {
    /// True if any requested axis was rejected
    pub fn blocked(&self, delta: Vec2) -> bool {
        (delta.x != 0.0 && !self.moved_x) || (delta.y != 0.0 && !self.moved_y)
    }
}

/// Position, size and facing of a moving entity.
///
/// The bounding rectangle is always derived from `pos`, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner in level pixels
    pub pos: Vec2,
    pub size: Vec2,
    pub facing: Facing,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            facing: Facing::Right,
        }
    }

    /// Current bounding rectangle
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Face along the sign of `dx`; zero keeps the current facing
    pub fn face(&mut self, dx: f32) {
        if dx > 0.0 {
            self.facing = Facing::Right;
        } else if dx < 0.0 {
            self.facing = Facing::Left;
        }
    }

    /// Move by `delta`, resolving each axis against `obstacles` separately.
    ///
    /// `delta` is already scaled by speed and frame time.
    pub fn move_and_slide<'a, I>(&mut self, delta: Vec2, obstacles: I) -> MoveResult
    where
        I: IntoIterator<Item = &'a Rect>,
        I::IntoIter: Clone,
    {
        let obstacles = obstacles.into_iter();
        let current = self.rect();
        let clear = |candidate: Rect| !obstacles.clone().any(|o| candidate.overlaps(o));

        let mut result = MoveResult {
            moved_x: delta.x != 0.0 && clear(current.translated(Vec2::new(delta.x, 0.0))),
            moved_y: delta.y != 0.0 && clear(current.translated(Vec2::new(0.0, delta.y))),
        };

        // Both axes clear on their own can still clip a wall corner together
        if result.moved_x && result.moved_y && !clear(current.translated(delta)) {
            result.moved_y = false;
        }

        if result.moved_x {
            self.pos.x += delta.x;
        }
        if result.moved_y {
            self.pos.y += delta.y;
        }
        self.face(delta.x);

        result
    }
}

/// Anything that moves through the level against its walls
pub trait Movable {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    fn rect(&self) -> Rect {
        self.body().rect()
    }

    fn move_and_slide<'a, I>(&mut self, delta: Vec2, obstacles: I) -> MoveResult
    where
        I: IntoIterator<Item = &'a Rect>,
        I::IntoIter: Clone,
    {
        self.body_mut().move_and_slide(delta, obstacles)
    }
}
