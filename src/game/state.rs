//! Game state machine
//!
//! Owns the whole session: player, level, enemies, live hazards, camera
//! scroll, and the top-level state. One `update` per frame; the draw
//! pass reads this struct and never mutates it.

use rand::Rng;

use crate::audio::{AudioOutput, MusicTrack, SoundCue};
use crate::geom::Rect;
use crate::input::InputFrame;

use super::hazard::{FallingStar, HAZARD_SIZE};
use super::player::{Player, INVINCIBILITY_WINDOW};
use super::world::World;
use super::{Enemy, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Camera smoothing factor per tick (exponential lag)
pub const SCROLL_SMOOTHING: f32 = 0.1;
/// Per-tick chance of spawning a falling hazard
pub const HAZARD_SPAWN_CHANCE: f32 = 0.01;
/// Hazards enter this far above the visible top
pub const HAZARD_SPAWN_MARGIN: f32 = 100.0;
/// Falling this far below the visible bottom is death
pub const FALL_OUT_MARGIN: f32 = 100.0;

/// Menu button regions
pub const START_BUTTON: Rect = Rect::new(300.0, 250.0, 200.0, 50.0);
pub const SOUND_BUTTON: Rect = Rect::new(300.0, 320.0, 200.0, 50.0);
pub const EXIT_BUTTON: Rect = Rect::new(300.0, 390.0, 200.0, 50.0);

/// Background starfield
pub const STAR_COUNT: usize = 100;
pub const STAR_FIELD_HEIGHT: f32 = SCREEN_HEIGHT * 5.0;
pub const STAR_PARALLAX: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    GameOver,
    Win,
}

/// All mutable session state, owned in one place.
pub struct GameSession {
    pub state: GameState,
    pub player: Player,
    pub world: World,
    pub enemies: Vec<Enemy>,
    pub hazards: Vec<FallingStar>,
    pub scroll_y: f32,
    pub sound_on: bool,
    pub exit_requested: bool,
    /// Per-tick hazard spawn probability; a field rather than a hidden
    /// literal so tests and tuning can pin it
    pub hazard_spawn_chance: f32,
    /// Parallax background star positions, fixed for the session
    pub stars_bg: Vec<(f32, f32)>,
}

impl GameSession {
    /// Build a fresh session and start the menu music.
    pub fn new(audio: &mut dyn AudioOutput) -> Self {
        let mut rng = rand::thread_rng();
        let stars_bg = (0..STAR_COUNT)
            .map(|_| {
                (
                    rng.gen_range(0.0..=SCREEN_WIDTH),
                    rng.gen_range(0.0..=STAR_FIELD_HEIGHT),
                )
            })
            .collect();

        let world = World::generate();
        let enemies = world.spawn_enemies();

        let _ = audio.play_music(MusicTrack::Menu);

        Self {
            state: GameState::Menu,
            player: Player::new(),
            world,
            enemies,
            hazards: Vec::new(),
            scroll_y: 0.0,
            sound_on: true,
            exit_requested: false,
            hazard_spawn_chance: HAZARD_SPAWN_CHANCE,
            stars_bg,
        }
    }

    /// One simulation tick.
    pub fn update(&mut self, input: &InputFrame, audio: &mut dyn AudioOutput, dt: f32) {
        match self.state {
            GameState::Menu => self.update_menu(input, audio),
            GameState::Playing => {
                if input.jump_pressed {
                    self.player.jump(audio);
                }
                self.tick_playing(input, audio, dt);
            }
            GameState::GameOver | GameState::Win => {
                if input.confirm_pressed {
                    self.reset_game(audio);
                }
            }
        }
    }

    fn update_menu(&mut self, input: &InputFrame, audio: &mut dyn AudioOutput) {
        let Some((mx, my)) = input.click else {
            return;
        };
        if START_BUTTON.contains(mx, my) {
            self.state = GameState::Playing;
            audio.stop_music();
            let _ = audio.play_music(MusicTrack::Game);
        } else if SOUND_BUTTON.contains(mx, my) {
            self.sound_on = !self.sound_on;
            audio.set_enabled(self.sound_on);
            if self.sound_on {
                let _ = audio.play_music(MusicTrack::Menu);
            } else {
                audio.stop_music();
            }
        } else if EXIT_BUTTON.contains(mx, my) {
            self.exit_requested = true;
        }
    }

    /// The Playing-state tick body. Step order is load-bearing: player
    /// physics first, then camera, hazards, win/loss checks, and finally
    /// enemy patrol with contact damage.
    fn tick_playing(&mut self, input: &InputFrame, audio: &mut dyn AudioOutput, dt: f32) {
        self.player.update(&self.world.platforms, input, dt);

        let target = self.player.sprite.rect.y - SCREEN_HEIGHT / 2.0;
        self.scroll_y += (target - self.scroll_y) * SCROLL_SMOOTHING;

        if rand::thread_rng().gen::<f32>() < self.hazard_spawn_chance {
            let x = rand::thread_rng().gen_range(0..=(SCREEN_WIDTH - HAZARD_SIZE) as i32) as f32;
            self.spawn_hazard(x);
        }

        // Update hazards and compact in one pass: a hazard is dropped when
        // it damages the player or falls below the visible window.
        let player = &mut self.player;
        let scroll_y = self.scroll_y;
        self.hazards.retain_mut(|star| {
            star.update(dt);
            if star.sprite.rect.intersects(&player.hitbox()) && !player.is_invincible() {
                player.health -= 1;
                player.invincible_timer = INVINCIBILITY_WINDOW;
                let _ = audio.play_cue(SoundCue::Hit);
                false
            } else {
                star.sprite.rect.y <= scroll_y + SCREEN_HEIGHT
            }
        });

        if self.player.sprite.rect.intersects(&self.world.goal) {
            self.state = GameState::Win;
            audio.stop_music();
            let _ = audio.play_cue(SoundCue::Win);
        }

        if self.player.health <= 0
            || self.player.sprite.rect.y > self.scroll_y + SCREEN_HEIGHT + FALL_OUT_MARGIN
        {
            self.state = GameState::GameOver;
            audio.stop_music();
            let _ = audio.play_cue(SoundCue::Lose);
        }

        // Enemies keep patrolling through the same tick even if the state
        // flipped above; contact damage never removes an enemy and plays
        // no sound, unlike hazards.
        for enemy in &mut self.enemies {
            enemy.update(dt);
            if enemy.hitbox().intersects(&self.player.hitbox()) && !self.player.is_invincible() {
                self.player.health -= 1;
                self.player.invincible_timer = INVINCIBILITY_WINDOW;
            }
        }
    }

    /// Spawn one falling hazard just above the visible top edge.
    pub fn spawn_hazard(&mut self, x: f32) {
        self.hazards
            .push(FallingStar::new(x, self.scroll_y - HAZARD_SPAWN_MARGIN));
    }

    /// Back to the menu: restore the player, clear live hazards, rewind
    /// the camera, restart menu music. The level layout is kept.
    pub fn reset_game(&mut self, audio: &mut dyn AudioOutput) {
        self.player.reset();
        self.hazards.clear();
        self.scroll_y = 0.0;
        self.state = GameState::Menu;
        audio.stop_music();
        let _ = audio.play_music(MusicTrack::Menu);
    }
}
