//! Follow camera

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Viewport offset into the level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub width: f32,
    pub height: f32,
    /// Top-left of the viewport in level pixels
    pub offset: Vec2,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            offset: Vec2::ZERO,
        }
    }

    /// Center on `target`, then clamp each axis to `[0, level - viewport]`.
    ///
    /// On an axis where the level is smaller than the viewport the offset
    /// pins to 0.
    pub fn follow(&mut self, target: Vec2, level_width: f32, level_height: f32) {
        let centered = target - Vec2::new(self.width, self.height) / 2.0;
        self.offset.x = centered.x.min(level_width - self.width).max(0.0);
        self.offset.y = centered.y.min(level_height - self.height).max(0.0);
    }

    /// Convert a level position to screen space
    pub fn to_screen(&self, pos: Vec2) -> Vec2 {
        pos - self.offset
    }
}
