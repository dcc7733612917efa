//! Level generation
//!
//! Builds the tower once per session: a full-width ground platform,
//! 25 jittered platforms stacked upward at fixed spacing, patrol
//! enemies on every fourth platform, and the goal above the top one.
//! The layout is immutable after build; randomness comes from the
//! process-wide generator (no reproducibility requirement).

use rand::Rng;

use crate::geom::Rect;

use super::enemy::{Enemy, ENEMY_HEIGHT};
use super::SCREEN_WIDTH;

/// Platforms above the ground
pub const UPPER_PLATFORM_COUNT: usize = 25;
/// Vertical gap between platform rows
pub const PLATFORM_SPACING: f32 = 160.0;
/// Ground platform top edge
pub const GROUND_Y: f32 = 580.0;
pub const PLATFORM_WIDTH: f32 = 160.0;
pub const PLATFORM_HEIGHT: f32 = 40.0;
/// Horizontal jitter range for upper platforms (inclusive)
pub const PLATFORM_MIN_X: i32 = 50;
pub const PLATFORM_MAX_X: i32 = 600;

/// Every fourth platform starting at index 3 carries an enemy
const ENEMY_PLATFORM_START: usize = 3;
const ENEMY_PLATFORM_STEP: usize = 4;
pub const ENEMY_PATROL_DISTANCE: f32 = 60.0;

pub const GOAL_WIDTH: f32 = 50.0;
pub const GOAL_HEIGHT: f32 = 70.0;

/// Static level layout: platform list and goal area.
pub struct World {
    pub platforms: Vec<Rect>,
    pub goal: Rect,
}

impl World {
    /// Generate a fresh tower layout.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();

        let mut platforms = Vec::with_capacity(1 + UPPER_PLATFORM_COUNT);
        platforms.push(Rect::new(0.0, GROUND_Y, SCREEN_WIDTH, PLATFORM_HEIGHT));
        for i in 1..=UPPER_PLATFORM_COUNT {
            let px = rng.gen_range(PLATFORM_MIN_X..=PLATFORM_MAX_X) as f32;
            let py = GROUND_Y - i as f32 * PLATFORM_SPACING;
            platforms.push(Rect::new(px, py, PLATFORM_WIDTH, PLATFORM_HEIGHT));
        }

        let top = platforms[platforms.len() - 1];
        let goal = Rect::new(top.x + 55.0, top.y - GOAL_HEIGHT, GOAL_WIDTH, GOAL_HEIGHT);

        Self { platforms, goal }
    }

    /// Place patrol enemies on their designated platforms.
    pub fn spawn_enemies(&self) -> Vec<Enemy> {
        (ENEMY_PLATFORM_START..self.platforms.len() - 1)
            .step_by(ENEMY_PLATFORM_STEP)
            .map(|i| {
                let plat = self.platforms[i];
                Enemy::new(plat.x, plat.y - ENEMY_HEIGHT, ENEMY_PATROL_DISTANCE)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_count_and_ground() {
        let world = World::generate();
        assert_eq!(world.platforms.len(), 26);
        let ground = world.platforms[0];
        assert_eq!(ground.x, 0.0);
        assert_eq!(ground.w, SCREEN_WIDTH);
        assert_eq!(ground.y, GROUND_Y);
    }

    #[test]
    fn test_platform_rows_and_jitter() {
        let world = World::generate();
        for (i, plat) in world.platforms.iter().enumerate().skip(1) {
            assert_eq!(plat.y, GROUND_Y - i as f32 * PLATFORM_SPACING);
            assert!(plat.x >= PLATFORM_MIN_X as f32);
            assert!(plat.x <= PLATFORM_MAX_X as f32);
            assert_eq!(plat.w, PLATFORM_WIDTH);
            assert_eq!(plat.h, PLATFORM_HEIGHT);
        }
    }

    #[test]
    fn test_enemy_placement() {
        let world = World::generate();
        let enemies = world.spawn_enemies();
        assert_eq!(enemies.len(), 6);
        for (enemy, idx) in enemies.iter().zip([3usize, 7, 11, 15, 19, 23]) {
            let plat = world.platforms[idx];
            assert_eq!(enemy.sprite.rect.x, plat.x);
            assert_eq!(enemy.sprite.rect.y, plat.y - ENEMY_HEIGHT);
        }
    }

    #[test]
    fn test_goal_sits_above_top_platform() {
        let world = World::generate();
        let top = world.platforms[25];
        assert_eq!(world.goal.x, top.x + 55.0);
        assert_eq!(world.goal.y, top.y - GOAL_HEIGHT);
        assert_eq!(world.goal.w, GOAL_WIDTH);
        assert_eq!(world.goal.h, GOAL_HEIGHT);
    }
}
