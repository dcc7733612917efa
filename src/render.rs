//! Draw pass
//!
//! Reads the session and issues macroquad draw calls. World Y minus the
//! camera scroll gives screen Y. Never mutates simulation state.

use macroquad::prelude::*;

use crate::assets::SpriteBank;
use crate::game::state::{EXIT_BUTTON, SOUND_BUTTON, STAR_PARALLAX, START_BUTTON};
use crate::game::{GameSession, GameState, SCREEN_HEIGHT};
use crate::sprite::AnimatedSprite;

const NIGHT_SKY: Color = Color::new(10.0 / 255.0, 10.0 / 255.0, 25.0 / 255.0, 1.0);
const DARK_RED: Color = Color::new(0.55, 0.0, 0.0, 1.0);

pub fn draw(session: &GameSession, sprites: &SpriteBank) {
    match session.state {
        GameState::Menu => draw_menu(session),
        GameState::Playing => draw_playing(session, sprites),
        GameState::GameOver => {
            clear_background(BLACK);
            draw_text_centered("GAME OVER", 400.0, 250.0, 80.0, RED);
            draw_text_centered("PRESS SPACE TO RETURN TO MENU", 400.0, 400.0, 30.0, WHITE);
        }
        GameState::Win => {
            clear_background(BLACK);
            draw_text_centered("VICTORY!", 400.0, 250.0, 100.0, GOLD);
            draw_text_centered("PRESS SPACE TO RETURN TO MENU", 400.0, 450.0, 30.0, WHITE);
        }
    }
}

fn draw_menu(session: &GameSession) {
    clear_background(BLACK);
    draw_text_centered("SHADOW ASCENT", 400.0, 150.0, 70.0, WHITE);

    draw_button(&START_BUTTON, "START", DARKGREEN);
    let sound_color = if session.sound_on { BLUE } else { GRAY };
    draw_button(&SOUND_BUTTON, "SOUND", sound_color);
    draw_button(&EXIT_BUTTON, "EXIT", DARK_RED);
}

fn draw_playing(session: &GameSession, sprites: &SpriteBank) {
    clear_background(NIGHT_SKY);

    // Slow parallax starfield, wrapped vertically.
    for &(sx, sy) in &session.stars_bg {
        let y = (sy - session.scroll_y * STAR_PARALLAX).rem_euclid(SCREEN_HEIGHT);
        draw_circle(sx, y, 1.0, WHITE);
    }

    for (i, plat) in session.world.platforms.iter().enumerate() {
        let name = if i == 0 { "ground_img" } else { "platform_img" };
        sprites.draw(name, plat.x, plat.y - session.scroll_y, plat.w, plat.h);
    }

    let goal = session.world.goal;
    sprites.draw("goal", goal.x, goal.y - session.scroll_y, goal.w, goal.h);

    draw_text(
        &format!("LIFE: {}", session.player.health),
        20.0,
        50.0,
        40.0,
        RED,
    );

    // Blink at 5 Hz while invincible.
    let timer = session.player.invincible_timer;
    if timer <= 0.0 || (timer * 10.0) as i32 % 2 == 0 {
        draw_sprite(&session.player.sprite, session.scroll_y, sprites);
    }
    for enemy in &session.enemies {
        draw_sprite(&enemy.sprite, session.scroll_y, sprites);
    }
    for star in &session.hazards {
        draw_sprite(&star.sprite, session.scroll_y, sprites);
    }
}

fn draw_sprite(sprite: &AnimatedSprite, scroll_y: f32, sprites: &SpriteBank) {
    let (x, y) = sprite.draw_pos(scroll_y);
    sprites.draw(sprite.current_image(), x, y, sprite.rect.w, sprite.rect.h);
}

fn draw_button(rect: &crate::geom::Rect, label: &str, color: Color) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    draw_text_centered(label, rect.center_x(), rect.center_y(), 30.0, WHITE);
}

fn draw_text_centered(text: &str, cx: f32, cy: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(
        text,
        cx - dims.width * 0.5,
        cy + dims.offset_y * 0.5,
        font_size,
        color,
    );
}
