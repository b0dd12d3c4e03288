//! Coin Runner - a side-scrolling canvas platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, scrolling, game phase)
//! - `renderer`: 2D drawing of a simulation frame onto an abstract surface
//! - `game`: Frame driver that turns wall-clock time into fixed ticks
//! - `tuning` / `settings`: Data-driven game balance and runtime config
//! - `platform` / `audio`: Browser bindings (wasm32 only)

pub mod error;
pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod platform;

pub use error::GameError;
pub use game::{Game, KeyOutcome, LoopControl};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical canvas width in pixels
    pub const VIEW_WIDTH: f32 = 800.0;
    /// Logical canvas height in pixels
    pub const VIEW_HEIGHT: f32 = 400.0;

    /// Fixed simulation timestep (60 Hz, one tick per frame on a 60 Hz display)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
