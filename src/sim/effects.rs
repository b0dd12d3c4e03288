//! Side effects the simulation requests from its host
//!
//! The tick never touches audio or drawing directly; the host injects an
//! `Effects` implementation.

use super::state::GameState;

/// Sound cues triggered by gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Successful jump
    Jump,
    /// Coin collected
    Coin,
}

pub trait Effects {
    /// Fire-and-forget sound playback
    fn play_sound(&mut self, cue: SoundCue);

    /// Present the current state
    fn draw_frame(&mut self, state: &GameState);
}

/// Discards every effect
#[derive(Debug, Default)]
pub struct NullEffects;

impl Effects for NullEffects {
    fn play_sound(&mut self, _cue: SoundCue) {}

    fn draw_frame(&mut self, _state: &GameState) {}
}

/// Remembers every effect
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingEffects {
    pub sounds: Vec<SoundCue>,
    /// Score at each drawn frame
    pub frames: Vec<u64>,
}

#[cfg(test)]
impl RecordingEffects {
    pub fn count(&self, cue: SoundCue) -> usize {
        self.sounds.iter().filter(|&&c| c == cue).count()
    }
}

#[cfg(test)]
impl Effects for RecordingEffects {
    fn play_sound(&mut self, cue: SoundCue) {
        self.sounds.push(cue);
    }

    fn draw_frame(&mut self, state: &GameState) {
        self.frames.push(state.score);
    }
}
