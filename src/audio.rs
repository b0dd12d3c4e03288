//! Audio playback using HTML audio elements
//!
//! Fire-and-forget: nothing waits on playback and failures are ignored.

use web_sys::HtmlAudioElement;

use crate::error::GameError;
use crate::settings::{AssetPaths, AudioSettings};
use crate::sim::SoundCue;

/// Audio manager for the game
pub struct AudioManager {
    music: HtmlAudioElement,
    jump: HtmlAudioElement,
    coin: HtmlAudioElement,
}

impl AudioManager {
    pub fn new(assets: &AssetPaths, settings: &AudioSettings) -> Result<Self, GameError> {
        let music = HtmlAudioElement::new_with_src(&assets.music)?;
        music.set_loop(true);
        music.set_volume(settings.effective_music_volume());

        let sfx_volume = settings.effective_sfx_volume();
        let jump = HtmlAudioElement::new_with_src(&assets.jump_sound)?;
        jump.set_volume(sfx_volume);
        let coin = HtmlAudioElement::new_with_src(&assets.coin_sound)?;
        coin.set_volume(sfx_volume);

        Ok(Self {
            music,
            jump,
            coin,
        })
    }

    /// Start the background loop if it is not playing. Browsers may block
    /// autoplay until the first user gesture, so the key handler retries.
    pub fn ensure_music(&self) {
        if !self.music.paused() {
            return;
        }
        if let Err(e) = self.music.play() {
            log::warn!("Background music failed to start: {:?}", e);
        }
    }

    /// Play a sound effect from the start
    pub fn play(&self, cue: SoundCue) {
        let el = match cue {
            SoundCue::Jump => &self.jump,
            SoundCue::Coin => &self.coin,
        };
        el.set_current_time(0.0);
        let _ = el.play();
    }
}
