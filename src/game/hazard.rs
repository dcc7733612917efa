//! Falling hazard
//!
//! Spawned above the visible area while playing, falls straight down at
//! a per-instance speed. The state machine owns removal (player hit or
//! off-screen cull).

use rand::Rng;

use crate::sprite::AnimatedSprite;

pub const HAZARD_SIZE: f32 = 60.0;

/// Fall speed range, px per tick (inclusive)
pub const MIN_FALL_SPEED: i32 = 3;
pub const MAX_FALL_SPEED: i32 = 6;

static FRAMES: [&str; 3] = ["star_enemy_1", "star_enemy_2", "star_enemy_3"];

pub struct FallingStar {
    pub sprite: AnimatedSprite,
    pub fall_speed: f32,
}

impl FallingStar {
    pub fn new(x: f32, y: f32) -> Self {
        let fall_speed = rand::thread_rng().gen_range(MIN_FALL_SPEED..=MAX_FALL_SPEED) as f32;
        Self {
            sprite: AnimatedSprite::new(&FRAMES, x, y, HAZARD_SIZE, HAZARD_SIZE),
            fall_speed,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.sprite.rect.y += self.fall_speed;
        self.sprite.tick(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fall_speed_in_range() {
        for _ in 0..50 {
            let star = FallingStar::new(0.0, 0.0);
            assert!(star.fall_speed >= MIN_FALL_SPEED as f32);
            assert!(star.fall_speed <= MAX_FALL_SPEED as f32);
            assert_eq!(star.fall_speed.fract(), 0.0);
        }
    }

    #[test]
    fn test_falls_straight_down() {
        let mut star = FallingStar::new(120.0, -100.0);
        let y0 = star.sprite.rect.y;
        for _ in 0..10 {
            star.update(1.0 / 60.0);
        }
        assert_eq!(star.sprite.rect.x, 120.0);
        assert!((star.sprite.rect.y - (y0 + 10.0 * star.fall_speed)).abs() < 0.001);
    }
}
