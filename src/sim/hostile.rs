//! Voidwalker AI
//!
//! Two behaviors, re-decided from scratch every frame:
//! - Patrol: sweep horizontally between two x bounds
//! - Chase: head straight for the player at boosted speed
//!
//! The switch happens exactly at the detection radius with no hysteresis, so a
//! target sitting on the boundary flips the walker every frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::motion::{Body, Facing, Movable};
use super::rect::Rect;
use crate::tuning::Tuning;

/// Current voidwalker behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Behavior {
    #[default]
    Patrol,
    Chase,
}

/// A hostile voidwalker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voidwalker {
    pub body: Body,
    /// Left patrol bound (x)
    pub patrol_a: f32,
    /// Right patrol bound (x)
    pub patrol_b: f32,
    pub moving_right: bool,
    pub detection_range: f32,
    behavior: Behavior,
    base_speed: f32,
    chase_multiplier: f32,
    /// Seconds until the special attack is ready
    attack_cooldown: f32,
    attack_cooldown_reset: f32,
}

impl Voidwalker {
    /// Spawn at `pos`, patrolling from there to `patrol_span` pixels right
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            body: Body::new(pos, Vec2::splat(tuning.voidwalker_size)),
            patrol_a: pos.x,
            patrol_b: pos.x + tuning.patrol_span,
            moving_right: true,
            detection_range: tuning.detection_range,
            behavior: Behavior::Patrol,
            base_speed: tuning.voidwalker_speed,
            chase_multiplier: tuning.chase_multiplier,
            attack_cooldown: 0.0,
            attack_cooldown_reset: tuning.attack_cooldown,
        }
    }

    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    pub fn chase_mode(&self) -> bool {
        self.behavior == Behavior::Chase
    }

    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    /// Current speed, derived from the behavior
    pub fn speed(&self) -> f32 {
        match self.behavior {
            Behavior::Patrol => self.base_speed,
            Behavior::Chase => self.base_speed * self.chase_multiplier,
        }
    }

    pub fn attack_cooldown(&self) -> f32 {
        self.attack_cooldown
    }

    /// Fire the special attack if it is off cooldown
    pub fn try_special_attack(&mut self) -> bool {
        if self.attack_cooldown > 0.0 {
            return false;
        }
        self.attack_cooldown = self.attack_cooldown_reset;
        true
    }

    /// Advance one frame toward/around `target` (player position).
    ///
    /// Returns true if the behavior changed this frame.
    pub fn update<'a, I>(&mut self, target: Vec2, dt: f32, walls: I) -> bool
    where
        I: IntoIterator<Item = &'a Rect>,
        I::IntoIter: Clone,
    {
        self.attack_cooldown = (self.attack_cooldown - dt).max(0.0);

        let to_target = target - self.body.pos;
        let distance = to_target.length();
        let previous = self.behavior;
        self.behavior = if distance <= self.detection_range {
            Behavior::Chase
        } else {
            Behavior::Patrol
        };

        match self.behavior {
            Behavior::Chase => self.chase(to_target, distance, dt, walls),
            Behavior::Patrol => self.patrol(dt),
        }

        previous != self.behavior
    }

    /// Horizontal sweep between the patrol bounds. Walls are not consulted.
    fn patrol(&mut self, dt: f32) {
        let step = self.speed() * dt;
        if self.moving_right {
            if self.body.pos.x < self.patrol_b {
                self.body.pos.x += step;
                self.body.facing = Facing::Right;
            } else {
                self.moving_right = false;
            }
        } else if self.body.pos.x > self.patrol_a {
            self.body.pos.x -= step;
            self.body.facing = Facing::Left;
        } else {
            self.moving_right = true;
        }
    }

    fn chase<'a, I>(&mut self, to_target: Vec2, distance: f32, dt: f32, walls: I)
    where
        I: IntoIterator<Item = &'a Rect>,
        I::IntoIter: Clone,
    {
        if distance == 0.0 {
            return;
        }
        let delta = to_target / distance * self.speed() * dt;
        self.move_and_slide(delta, walls);
    }
}

impl Movable for Voidwalker {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const NO_WALLS: [Rect; 0] = [];

    fn walker_at(x: f32, y: f32) -> Voidwalker {
        Voidwalker::new(Vec2::new(x, y), &Tuning::default())
    }

    #[test]
    fn test_detection_boundary() {
        let mut v = walker_at(0.0, 0.0);
        assert_eq!(v.detection_range, 200.0);

        assert!(v.update(Vec2::new(199.0, 0.0), 0.0, &NO_WALLS));
        assert_eq!(v.behavior(), Behavior::Chase);
        assert!(v.chase_mode());
        assert_eq!(v.speed(), 1.5 * v.base_speed());

        assert!(v.update(Vec2::new(201.0, 0.0), 0.0, &NO_WALLS));
        assert_eq!(v.behavior(), Behavior::Patrol);
        assert_eq!(v.speed(), v.base_speed());
    }

    #[test]
    fn test_exact_range_chases() {
        let mut v = walker_at(0.0, 0.0);
        v.update(Vec2::new(0.0, 200.0), 0.0, &NO_WALLS);
        assert!(v.chase_mode());
    }

    #[test]
    fn test_chase_moves_toward_target() {
        let mut v = walker_at(0.0, 0.0);
        v.update(Vec2::new(-100.0, 0.0), 1.0, &NO_WALLS);
        assert!((v.body.pos.x - -90.0).abs() < 1e-4);
        assert_eq!(v.body.pos.y, 0.0);
        assert_eq!(v.body.facing, Facing::Left);
    }

    #[test]
    fn test_chase_zero_distance_stays_put() {
        let mut v = walker_at(10.0, 10.0);
        v.update(Vec2::new(10.0, 10.0), 1.0, &NO_WALLS);
        assert!(v.chase_mode());
        assert_eq!(v.body.pos, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_chase_blocked_by_wall() {
        let walls = [Rect::new(48.0, -500.0, 32.0, 1000.0)];
        let mut v = walker_at(0.0, 0.0);
        // 9 px step: the candidate rect reaches into the wall
        v.update(Vec2::new(150.0, 0.0), 0.1, &walls);
        assert!(v.chase_mode());
        assert_eq!(v.body.pos.x, 0.0);
    }

    #[test]
    fn test_patrol_bounces() {
        let mut v = walker_at(0.0, 0.0);
        let far = Vec2::new(10_000.0, 10_000.0);

        // 60 px/s from x=0: the fourth step overshoots patrol_b (200)
        for _ in 0..4 {
            v.update(far, 1.0, &NO_WALLS);
        }
        assert_eq!(v.body.pos.x, 240.0);
        assert!(v.moving_right);
        assert_eq!(v.body.facing, Facing::Right);

        // At/after the bound the walker turns around without moving
        v.update(far, 1.0, &NO_WALLS);
        assert!(!v.moving_right);
        assert_eq!(v.body.pos.x, 240.0);

        v.update(far, 1.0, &NO_WALLS);
        assert_eq!(v.body.pos.x, 180.0);
        assert_eq!(v.body.facing, Facing::Left);

        // Back down to patrol_a (0), then the same turn on the left
        for _ in 0..3 {
            v.update(far, 1.0, &NO_WALLS);
        }
        assert_eq!(v.body.pos.x, 0.0);
        assert!(!v.moving_right);

        v.update(far, 1.0, &NO_WALLS);
        assert!(v.moving_right);
        assert_eq!(v.body.pos.x, 0.0);
        assert_eq!(v.body.facing, Facing::Left);

        v.update(far, 1.0, &NO_WALLS);
        assert_eq!(v.body.pos.x, 60.0);
        assert_eq!(v.body.facing, Facing::Right);
    }

    #[test]
    fn test_special_attack_cooldown() {
        let mut v = walker_at(0.0, 0.0);
        let far = Vec2::new(10_000.0, 0.0);
        assert!(v.try_special_attack());
        assert_eq!(v.attack_cooldown(), 3.0);
        assert!(!v.try_special_attack());

        v.update(far, 2.0, &NO_WALLS);
        assert!(!v.try_special_attack());
        v.update(far, 2.0, &NO_WALLS);
        assert_eq!(v.attack_cooldown(), 0.0);
        assert!(v.try_special_attack());
    }

    proptest! {
        #[test]
        fn prop_speed_is_base_or_chase(
            targets in prop::collection::vec((-400.0f32..400.0, -400.0f32..400.0), 1..32),
            dt in 0.0f32..0.1,
        ) {
            let mut v = walker_at(0.0, 0.0);
            for (x, y) in targets {
                v.update(Vec2::new(x, y), dt, &NO_WALLS);
                let speed = v.speed();
                prop_assert!(speed == v.base_speed() || speed == v.base_speed() * 1.5);
                prop_assert_eq!(speed == v.base_speed() * 1.5, v.chase_mode());
            }
        }
    }
}
