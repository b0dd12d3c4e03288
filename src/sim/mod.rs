//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick (velocities are per tick)
//! - Seeded RNG only
//! - Stable iteration order (collections never reorder or resize)
//! - No rendering or platform dependencies; side effects go through `Effects`

pub mod aabb;
pub mod collision;
pub mod effects;
pub mod input;
pub mod physics;
pub mod scroll;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use effects::{Effects, NullEffects, SoundCue};
#[cfg(test)]
pub use effects::RecordingEffects;
pub use input::{InputState, Key};
pub use state::{Coin, Enemy, GamePhase, GameState, Platform, Player};
pub use tick::tick;
