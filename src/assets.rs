//! Sprite bank
//!
//! Loads every texture the game can reference, tolerating missing
//! files: a sprite that failed to load draws as a solid placeholder
//! rectangle instead of crashing.

use std::collections::HashMap;

use macroquad::prelude::*;

/// Every image name the entities and the level can reference.
const IMAGE_NAMES: [&str; 20] = [
    "hero_idle_r1",
    "hero_idle_r2",
    "hero_idle_l1",
    "hero_idle_l2",
    "hero_walk_r1",
    "hero_walk_r2",
    "hero_walk_r3",
    "hero_walk_r4",
    "hero_walk_l1",
    "hero_walk_l2",
    "hero_walk_l3",
    "hero_walk_l4",
    "enemy_1",
    "enemy_2",
    "star_enemy_1",
    "star_enemy_2",
    "star_enemy_3",
    "ground_img",
    "platform_img",
    "goal",
];

pub struct SpriteBank {
    textures: HashMap<&'static str, Texture2D>,
}

impl SpriteBank {
    /// Load all known textures from `assets/images/`, skipping failures.
    pub async fn load() -> Self {
        let mut textures = HashMap::new();
        for name in IMAGE_NAMES {
            let path = format!("assets/images/{}.png", name);
            if let Ok(tex) = load_texture(&path).await {
                tex.set_filter(FilterMode::Nearest);
                textures.insert(name, tex);
            }
        }
        Self { textures }
    }

    /// Blit `name` at (x, y) scaled to w x h, or a placeholder block
    /// when the texture is missing.
    pub fn draw(&self, name: &str, x: f32, y: f32, w: f32, h: f32) {
        match self.textures.get(name) {
            Some(tex) => draw_texture_ex(
                tex,
                x,
                y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(w, h)),
                    ..Default::default()
                },
            ),
            None => draw_rectangle(x, y, w, h, placeholder_color(name)),
        }
    }
}

/// Placeholder tint so entities stay tellable apart without art.
fn placeholder_color(name: &str) -> Color {
    if name.starts_with("hero") {
        SKYBLUE
    } else if name.starts_with("star_enemy") {
        YELLOW
    } else if name.starts_with("enemy") {
        RED
    } else if name == "goal" {
        GOLD
    } else {
        DARKGREEN
    }
}
