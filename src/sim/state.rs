//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Loop halted until the pause toggle is pressed again
    Paused,
    /// Run ended (terminal until restart)
    GameOver,
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    /// Horizontal speed while a direction is held
    pub speed: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_power: f32,
    /// Resting on a platform top this tick
    pub grounded: bool,
}

impl Player {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.player_start.into(),
            size: tuning.player_size.into(),
            vel: Vec2::ZERO,
            speed: tuning.player_speed,
            jump_power: tuning.jump_power,
            grounded: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A static platform the player can land on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Platform {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A patrolling enemy that walks left forever
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    /// Leftward distance per tick
    pub speed: f32,
}

impl Enemy {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A collectible coin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec2,
    pub size: Vec2,
    /// Once set, never cleared
    pub collected: bool,
}

impl Coin {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Placement RNG (initial layout and recycling)
    pub rng: Pcg32,
    /// Balance values this run was created with
    pub tuning: Tuning,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Camera offset used by the most recent tick
    pub camera_x: f32,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game state with the given seed and tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let player = Player::from_tuning(&tuning);

        let mut platforms: Vec<Platform> = (0..tuning.platform_count)
            .map(|i| Platform {
                pos: Vec2::new(
                    i as f32 * tuning.platform_spacing,
                    tuning.platform_start_y + rng.random::<f32>() * tuning.platform_start_spread,
                ),
                size: tuning.platform_size.into(),
            })
            .collect();
        platforms.push(Platform {
            pos: tuning.ground_pos.into(),
            size: tuning.ground_size.into(),
        });

        let enemies = vec![Enemy {
            pos: tuning.enemy_start.into(),
            size: tuning.enemy_size.into(),
            speed: tuning.enemy_speed,
        }];

        let coins = (0..tuning.coin_count)
            .map(|i| Coin {
                pos: Vec2::new(
                    tuning.coin_start_x + i as f32 * tuning.coin_spacing,
                    tuning.coin_y,
                ),
                size: tuning.coin_size.into(),
                collected: false,
            })
            .collect();

        let camera_x = player.pos.x - tuning.camera_lead;

        Self {
            seed,
            rng,
            tuning,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Running,
            camera_x,
            player,
            platforms,
            enemies,
            coins,
        }
    }

    /// Flip between Running and Paused.
    ///
    /// Returns true when the game just resumed, meaning the frame loop has to
    /// be restarted. Has no effect once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                log::info!("Paused at tick {} (score {})", self.time_ticks, self.score);
                false
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                log::info!("Resumed");
                true
            }
            GamePhase::GameOver => false,
        }
    }

    /// End the run. Only a running game can end.
    pub fn trigger_game_over(&mut self) {
        if self.phase == GamePhase::Running {
            self.phase = GamePhase::GameOver;
            log::info!("Game over! Final score: {}", self.score);
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Coins still in play
    pub fn uncollected_coins(&self) -> impl Iterator<Item = &Coin> {
        self.coins.iter().filter(|c| !c.collected)
    }
}
