//! Super Penguin - An endless-runner arcade game
//!
//! Core modules:
//! - `sim`: Simulation (entities, spawning, collisions, scoring)
//! - `game`: Frame-driven clock that owns the session and drives tick/render
//! - `renderer`: Immediate-mode 2D drawing of the scene
//! - `platform`: Browser/native platform abstraction (input, storage, time)
//! - `persistence`: Best score save/load
//! - `tuning`: Data-driven game balance
//! - `palette`: Colour roles injected into the renderer

pub mod game;
pub mod palette;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::Game;
pub use palette::{ColorRole, Palette};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical world size (canvas pixels)
    pub const WORLD_WIDTH: f32 = 960.0;
    pub const WORLD_HEIGHT: f32 = 540.0;
    /// Height of the ice shelf the penguin runs on
    pub const GROUND_HEIGHT: f32 = 110.0;
    /// Y coordinate of the ground line
    pub const GROUND_Y: f32 = WORLD_HEIGHT - GROUND_HEIGHT;

    /// Penguin defaults
    pub const PENGUIN_X: f32 = 140.0;
    pub const PENGUIN_WIDTH: f32 = 70.0;
    pub const PENGUIN_HEIGHT: f32 = 80.0;
    pub const GRAVITY: f32 = 0.7;
    pub const JUMP_FORCE: f32 = 14.0;
    /// Fraction of nominal height kept while ducking
    pub const DUCK_HEIGHT_FACTOR: f32 = 0.6;
    /// Tolerance for the grounded check
    pub const GROUND_EPSILON: f32 = 0.01;

    /// Fish defaults
    pub const FISH_WIDTH: f32 = 36.0;
    pub const FISH_HEIGHT: f32 = 24.0;

    /// Largest wall-clock interval (ms) fed into a single tick
    pub const MAX_FRAME_MS: f64 = 32.0;
    /// Milliseconds to simulation units
    pub const TIME_SCALE: f64 = 0.1;
}
