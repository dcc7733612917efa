//! SHADOW ASCENT: a 2D tower-climbing platformer
//!
//! Climb a procedurally generated tower of platforms, dodge patrolling
//! enemies and falling stars, and reach the goal at the top. The
//! simulation lives in `game` and is fully headless; this file is the
//! window shell: poll input, tick, draw, repeat.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod audio;
mod game;
mod geom;
mod input;
mod render;
mod sprite;

use macroquad::prelude::*;

use assets::SpriteBank;
use audio::GameAudio;
use game::GameSession;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Shadow Ascent v{}", VERSION),
        window_width: game::SCREEN_WIDTH as i32,
        window_height: game::SCREEN_HEIGHT as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let sprites = SpriteBank::load().await;
    let mut audio = GameAudio::load().await;
    let mut session = GameSession::new(&mut audio);

    loop {
        let frame = input::poll();
        session.update(&frame, &mut audio, get_frame_time());
        render::draw(&session, &sprites);

        if session.exit_requested {
            break;
        }
        next_frame().await;
    }
}
