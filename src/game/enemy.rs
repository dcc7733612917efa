//! Patrol enemy
//!
//! Walks back and forth around its spawn point forever. Enemies are
//! placed at world-build time and live for the whole session; contact
//! damage is resolved by the state machine.

use crate::geom::Rect;
use crate::sprite::AnimatedSprite;

/// Horizontal speed per tick
pub const PATROL_SPEED: f32 = 2.0;

pub const ENEMY_WIDTH: f32 = 45.0;
pub const ENEMY_HEIGHT: f32 = 60.0;

const HITBOX_INSET: f32 = 10.0;

// Same art both ways in the current asset set; kept as two tables so a
// directional set drops in without code changes. Statics for stable
// addresses (`set_frames` compares slice identity).
static WALK_R: [&str; 2] = ["enemy_1", "enemy_2"];
static WALK_L: [&str; 2] = ["enemy_1", "enemy_2"];

pub struct Enemy {
    pub sprite: AnimatedSprite,
    start_x: f32,
    distance: f32,
    direction: f32,
}

impl Enemy {
    /// Spawn at (x, y), patrolling at most `distance` px from `x`.
    pub fn new(x: f32, y: f32, distance: f32) -> Self {
        Self {
            sprite: AnimatedSprite::new(&WALK_R, x, y, ENEMY_WIDTH, ENEMY_HEIGHT),
            start_x: x,
            distance,
            direction: 1.0,
        }
    }

    pub fn hitbox(&self) -> Rect {
        self.sprite.rect.inset(HITBOX_INSET, HITBOX_INSET)
    }

    /// Step the patrol and flip at the bound. The bound check runs after
    /// the step, so the overshoot never exceeds one step.
    pub fn update(&mut self, dt: f32) {
        self.sprite.rect.x += PATROL_SPEED * self.direction;
        self.sprite.set_frames(if self.direction < 0.0 { &WALK_L } else { &WALK_R });

        if (self.sprite.rect.x - self.start_x).abs() > self.distance {
            self.direction = -self.direction;
        }
        self.sprite.tick(dt);
    }
}
