//! Per-frame input snapshot
//!
//! The simulation never talks to the input device directly; `poll` reads
//! macroquad once per frame and the snapshot is all `GameSession::update`
//! ever sees. Tests build `InputFrame`s by hand.

use macroquad::prelude::*;

/// Everything the simulation can ask about input this frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
    /// Jump key (Up) pressed this frame
    pub jump_pressed: bool,
    /// Confirm key (Space) pressed this frame
    pub confirm_pressed: bool,
    /// Left mouse button pressed this frame, in screen coordinates
    pub click: Option<(f32, f32)>,
}

/// Read the current device state into a snapshot.
pub fn poll() -> InputFrame {
    InputFrame {
        left: is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::Right),
        jump_pressed: is_key_pressed(KeyCode::Up),
        confirm_pressed: is_key_pressed(KeyCode::Space),
        click: if is_mouse_button_pressed(MouseButton::Left) {
            Some(mouse_position())
        } else {
            None
        },
    }
}
