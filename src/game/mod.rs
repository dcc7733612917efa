//! Game Simulation Module
//!
//! The tower-climb simulation: player controller, patrol enemies,
//! falling hazards, procedural level layout, and the top-level state
//! machine that drives them. Everything here is headless: drawing and
//! asset concerns live in `render`/`assets`, input arrives as a
//! per-frame snapshot, audio goes through the `AudioOutput` capability.

pub mod enemy;
pub mod hazard;
pub mod player;
pub mod state;
pub mod world;

pub use enemy::Enemy;
pub use hazard::FallingStar;
pub use player::Player;
pub use state::{GameSession, GameState};
pub use world::World;

/// Logical screen size; the window is created at exactly this size.
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;
