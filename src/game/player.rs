//! Player controller
//!
//! Horizontal movement, gravity, double jump, platform landing, and the
//! damage/invincibility window. Physics is frame-locked (per-tick units)
//! while the animation and invincibility timers run on wall-clock `dt`.

use crate::audio::{AudioOutput, SoundCue};
use crate::geom::Rect;
use crate::input::InputFrame;
use crate::sprite::AnimatedSprite;

use super::SCREEN_WIDTH;

/// Downward acceleration per tick
pub const GRAVITY: f32 = 0.6;
/// Jump impulse (upward velocity)
pub const JUMP_IMPULSE: f32 = -14.0;
/// Horizontal speed per tick
pub const MOVE_SPEED: f32 = 5.0;
/// Air jumps allowed before landing (ground jump + one double jump)
pub const MAX_JUMPS: u8 = 2;
/// Starting and reset health
pub const START_HEALTH: i32 = 10;
/// Seconds of damage immunity after a hit
pub const INVINCIBILITY_WINDOW: f32 = 1.2;

/// Sprite size and spawn point
pub const PLAYER_WIDTH: f32 = 50.0;
pub const PLAYER_HEIGHT: f32 = 70.0;
pub const SPAWN_X: f32 = 400.0;
pub const SPAWN_Y: f32 = 500.0;

/// Hitbox shrink relative to the sprite rect (total width / height)
const HITBOX_INSET_X: f32 = 20.0;
const HITBOX_INSET_Y: f32 = 10.0;

// Statics, not consts: `set_frames` compares slice identity, which
// needs stable addresses.
static IDLE_R: [&str; 2] = ["hero_idle_r1", "hero_idle_r2"];
static IDLE_L: [&str; 2] = ["hero_idle_l1", "hero_idle_l2"];
static WALK_R: [&str; 4] = ["hero_walk_r1", "hero_walk_r2", "hero_walk_r3", "hero_walk_r4"];
static WALK_L: [&str; 4] = ["hero_walk_l1", "hero_walk_l2", "hero_walk_l3", "hero_walk_l4"];

pub struct Player {
    pub sprite: AnimatedSprite,
    pub vel_y: f32,
    pub health: i32,
    pub invincible_timer: f32,
    pub jumps: u8,
    pub facing_left: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            sprite: AnimatedSprite::new(&IDLE_R, SPAWN_X, SPAWN_Y, PLAYER_WIDTH, PLAYER_HEIGHT),
            vel_y: 0.0,
            health: START_HEALTH,
            invincible_timer: 0.0,
            jumps: 0,
            facing_left: false,
        }
    }

    /// Damage hitbox, tighter than the sprite bounds.
    pub fn hitbox(&self) -> Rect {
        self.sprite.rect.inset(HITBOX_INSET_X, HITBOX_INSET_Y)
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible_timer > 0.0
    }

    /// One simulation tick: input, animation select, gravity, landing
    /// resolution against the platform list, horizontal clamp.
    pub fn update(&mut self, platforms: &[Rect], input: &InputFrame, dt: f32) {
        if self.invincible_timer > 0.0 {
            self.invincible_timer -= dt;
        }

        let mut dx = 0.0;
        let mut moving = false;
        if input.left {
            dx = -MOVE_SPEED;
            moving = true;
            self.facing_left = true;
        } else if input.right {
            dx = MOVE_SPEED;
            moving = true;
            self.facing_left = false;
        }

        let frames: &'static [&'static str] = match (moving, self.facing_left) {
            (true, true) => &WALK_L,
            (true, false) => &WALK_R,
            (false, true) => &IDLE_L,
            (false, false) => &IDLE_R,
        };
        self.sprite.set_frames(frames);
        self.sprite.tick(dt);

        self.vel_y += GRAVITY;
        self.sprite.rect.y += self.vel_y;

        // Landing: only while falling. The first platform hit zeroes the
        // velocity, which gates the rest of the list for this tick.
        for plat in platforms {
            if self.sprite.rect.intersects(plat) && self.vel_y > 0.0 {
                self.sprite.rect.set_bottom(plat.top());
                self.vel_y = 0.0;
                self.jumps = 0;
            }
        }

        self.sprite.rect.x += dx;
        self.sprite.rect.clamp_x(0.0, SCREEN_WIDTH - self.sprite.rect.w);
    }

    /// Jump impulse; allows a double jump, silently ignores a third.
    pub fn jump(&mut self, audio: &mut dyn AudioOutput) {
        if self.jumps < MAX_JUMPS {
            self.vel_y = JUMP_IMPULSE;
            self.jumps += 1;
            let _ = audio.play_cue(SoundCue::Jump);
        }
    }

    /// Restore vitals and spawn position. The player is reused across
    /// runs, never reconstructed.
    pub fn reset(&mut self) {
        self.health = START_HEALTH;
        self.sprite.rect.x = SPAWN_X;
        self.sprite.rect.y = SPAWN_Y;
        self.vel_y = 0.0;
        self.jumps = 0;
        self.invincible_timer = 0.0;
    }
}
