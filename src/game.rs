//! Frame driver
//!
//! Owns the game state and held input, turns animation-frame timestamps
//! into fixed simulation ticks, and tells the host whether to schedule
//! another frame. Hosts only deal with key codes, timestamps and `Effects`.

use crate::consts::*;
use crate::sim::{Effects, GamePhase, GameState, InputState, Key, tick};
use crate::tuning::Tuning;

/// Whether the host should request another animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Halt,
}

/// What a key press asks of the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Unrecognized key, or a game-over key outside game over
    Ignored,
    /// A movement flag changed
    Input,
    /// Loop stopped; nothing to do until the next toggle
    Paused,
    /// Loop must be restarted by the host
    Resumed,
    /// Host should call `restart` with a fresh seed and restart the loop
    Restart,
    /// Host should try to close the page
    Quit,
}

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub input: InputState,
    tuning: Tuning,
    accumulator: f32,
    /// Timestamp (ms) of the previous frame, None right after (re)starting
    last_time: Option<f64>,
}

impl Game {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        log::info!("Game initialized with seed: {seed}");
        Self {
            state: GameState::with_tuning(seed, tuning.clone()),
            input: InputState::default(),
            tuning,
            accumulator: 0.0,
            last_time: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Reset everything as if the page had been reloaded
    pub fn restart(&mut self, seed: u64) {
        self.state = GameState::with_tuning(seed, self.tuning.clone());
        self.input = InputState::default();
        self.accumulator = 0.0;
        self.last_time = None;
        log::info!("Game restarted with seed: {seed}");
    }

    pub fn key_down(&mut self, code: &str) -> KeyOutcome {
        let Some(key) = Key::from_code(code) else {
            return KeyOutcome::Ignored;
        };
        if self.input.set(key, true) {
            return KeyOutcome::Input;
        }

        match key {
            Key::Pause => {
                if self.state.toggle_pause() {
                    // Don't replay the time spent paused
                    self.last_time = None;
                    self.accumulator = 0.0;
                    KeyOutcome::Resumed
                } else if self.state.phase == GamePhase::Paused {
                    KeyOutcome::Paused
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Restart if self.state.phase == GamePhase::GameOver => KeyOutcome::Restart,
            Key::Quit if self.state.phase == GamePhase::GameOver => {
                log::info!("Quit requested");
                KeyOutcome::Quit
            }
            _ => KeyOutcome::Ignored,
        }
    }

    pub fn key_up(&mut self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.input.set(key, false);
        }
    }

    /// Run one animation frame at `time_ms`.
    ///
    /// Does nothing unless the game is running. Otherwise runs as many fixed
    /// ticks as the elapsed time covers and draws once, including the frame
    /// on which the game ends.
    pub fn frame(&mut self, time_ms: f64, fx: &mut impl Effects) -> LoopControl {
        if self.state.phase != GamePhase::Running {
            return LoopControl::Halt;
        }

        let dt = match self.last_time {
            Some(last) => ((time_ms - last) / 1000.0) as f32,
            None => SIM_DT,
        };
        self.last_time = Some(time_ms);
        self.advance(dt, fx);

        fx.draw_frame(&self.state);

        if self.state.phase == GamePhase::Running {
            LoopControl::Continue
        } else {
            LoopControl::Halt
        }
    }

    /// Run simulation ticks for `dt` seconds of wall-clock time
    fn advance(&mut self, dt: f32, fx: &mut impl Effects) {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
            if tick(&mut self.state, &self.input, fx) != GamePhase::Running {
                self.accumulator = 0.0;
                break;
            }
        }
    }
}
