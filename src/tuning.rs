//! Data-driven game balance
//!
//! Every gameplay constant lives here so a page can override them through
//! the JSON config. Velocities and accelerations are in pixels per tick.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration added to vy every tick
    pub gravity: f32,

    // === Player ===
    pub player_start: (f32, f32),
    pub player_size: (f32, f32),
    /// Horizontal speed while a direction is held
    pub player_speed: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_power: f32,

    // === Camera / recycling ===
    /// Distance between the camera's left edge and the player
    pub camera_lead: f32,
    /// How far behind the camera a platform must be before it is recycled
    pub recycle_slack: f32,
    /// Random extra distance ahead of the view for recycled platforms
    pub platform_jitter: f32,
    /// Vertical band [min, max) for recycled platforms
    pub platform_band: (f32, f32),
    /// Random extra distance ahead of the view for recycled enemies
    pub enemy_jitter: f32,
    /// Fixed y for recycled enemies
    pub enemy_lane_y: f32,

    // === Initial layout ===
    pub platform_count: usize,
    pub platform_spacing: f32,
    pub platform_size: (f32, f32),
    /// Initial platform y is `platform_start_y + rand * platform_start_spread`
    pub platform_start_y: f32,
    pub platform_start_spread: f32,
    pub ground_pos: (f32, f32),
    pub ground_size: (f32, f32),
    pub enemy_start: (f32, f32),
    pub enemy_size: (f32, f32),
    pub enemy_speed: f32,
    pub coin_count: usize,
    pub coin_start_x: f32,
    pub coin_spacing: f32,
    pub coin_y: f32,
    pub coin_size: (f32, f32),

    // === Score ===
    pub coin_bonus: u64,
    /// Passive score added every running tick
    pub score_per_tick: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,

            player_start: (50.0, 300.0),
            player_size: (30.0, 30.0),
            player_speed: 4.0,
            jump_power: -10.0,

            camera_lead: 100.0,
            recycle_slack: 100.0,
            platform_jitter: 200.0,
            platform_band: (150.0, 350.0),
            enemy_jitter: 300.0,
            enemy_lane_y: 340.0,

            platform_count: 6,
            platform_spacing: 200.0,
            platform_size: (100.0, 10.0),
            platform_start_y: 280.0,
            platform_start_spread: 100.0,
            ground_pos: (0.0, 370.0),
            ground_size: (800.0, 30.0),
            enemy_start: (600.0, 340.0),
            enemy_size: (30.0, 30.0),
            enemy_speed: 2.0,
            coin_count: 10,
            coin_start_x: 300.0,
            coin_spacing: 200.0,
            coin_y: 250.0,
            coin_size: (20.0, 20.0),

            coin_bonus: 10,
            score_per_tick: 1,
        }
    }
}

impl Tuning {
    /// Reject values that would break the simulation's invariants
    pub fn validate(&self) -> Result<(), GameError> {
        // JSON numbers past f32::MAX deserialize to infinity
        let scalars = [
            ("gravity", self.gravity),
            ("player_speed", self.player_speed),
            ("jump_power", self.jump_power),
            ("camera_lead", self.camera_lead),
            ("recycle_slack", self.recycle_slack),
            ("platform_jitter", self.platform_jitter),
            ("enemy_jitter", self.enemy_jitter),
            ("enemy_lane_y", self.enemy_lane_y),
            ("platform_spacing", self.platform_spacing),
            ("platform_start_y", self.platform_start_y),
            ("platform_start_spread", self.platform_start_spread),
            ("enemy_speed", self.enemy_speed),
            ("coin_start_x", self.coin_start_x),
            ("coin_spacing", self.coin_spacing),
            ("coin_y", self.coin_y),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(GameError::InvalidTuning(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        let pairs = [
            ("player_start", self.player_start),
            ("player_size", self.player_size),
            ("platform_band", self.platform_band),
            ("platform_size", self.platform_size),
            ("ground_pos", self.ground_pos),
            ("ground_size", self.ground_size),
            ("enemy_start", self.enemy_start),
            ("enemy_size", self.enemy_size),
            ("coin_size", self.coin_size),
        ];
        for (name, (a, b)) in pairs {
            if !(a.is_finite() && b.is_finite()) {
                return Err(GameError::InvalidTuning(format!(
                    "{name} must be finite, got ({a}, {b})"
                )));
            }
        }

        let sizes = [
            ("player_size", self.player_size),
            ("platform_size", self.platform_size),
            ("ground_size", self.ground_size),
            ("enemy_size", self.enemy_size),
            ("coin_size", self.coin_size),
        ];
        for (name, (w, h)) in sizes {
            if !(w > 0.0 && h > 0.0) {
                return Err(GameError::InvalidTuning(format!(
                    "{name} must be positive, got {w}x{h}"
                )));
            }
        }
        if !(self.gravity > 0.0) {
            return Err(GameError::InvalidTuning(format!(
                "gravity must be positive, got {}",
                self.gravity
            )));
        }
        if !(self.jump_power < 0.0) {
            return Err(GameError::InvalidTuning(format!(
                "jump_power must be negative, got {}",
                self.jump_power
            )));
        }
        let (lo, hi) = self.platform_band;
        if !(lo < hi) {
            return Err(GameError::InvalidTuning(format!(
                "platform_band must be a non-empty range, got [{lo}, {hi})"
            )));
        }
        if !(hi - lo).is_finite() {
            return Err(GameError::InvalidTuning(format!(
                "platform_band is too wide to sample, got [{lo}, {hi})"
            )));
        }
        if self.player_speed < 0.0
            || self.enemy_speed < 0.0
            || self.platform_jitter < 0.0
            || self.enemy_jitter < 0.0
        {
            return Err(GameError::InvalidTuning(
                "speeds and jitters must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}
