//! Runtime configuration
//!
//! Read once at startup from an optional `<script id="game-config"
//! type="application/json">` element on the page. Nothing is written back.

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::tuning::Tuning;

/// Audio levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence everything
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            music_volume: 0.5,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl AudioSettings {
    /// Effective music volume (respects mute, clamped to 0-1)
    pub fn effective_music_volume(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            self.music_volume.clamp(0.0, 1.0) as f64
        }
    }

    /// Effective sound effect volume (respects mute, clamped to 0-1)
    pub fn effective_sfx_volume(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            self.sfx_volume.clamp(0.0, 1.0) as f64
        }
    }
}

/// URLs of the image and sound assets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub background: String,
    pub player: String,
    pub coin: String,
    pub jump_sound: String,
    pub coin_sound: String,
    pub music: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            background: "assets/background.jpg".to_string(),
            player: "assets/player.png".to_string(),
            coin: "assets/coin.png".to_string(),
            jump_sound: "assets/jump.wav".to_string(),
            coin_sound: "assets/coin.wav".to_string(),
            music: "assets/music.mp3".to_string(),
        }
    }
}

/// Complete runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tuning: Tuning,
    pub audio: AudioSettings,
    pub assets: AssetPaths,
}

impl Settings {
    /// Id of the page element holding the JSON config
    pub const CONFIG_ELEMENT_ID: &'static str = "game-config";

    /// Parse and validate settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.tuning.validate()?;
        Ok(settings)
    }

    /// Load settings from the page config element (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(json) = json else {
            log::info!("No #{} element, using default settings", Self::CONFIG_ELEMENT_ID);
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from #{}", Self::CONFIG_ELEMENT_ID);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring config ({e}), using default settings");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_nested_overrides() {
        let settings = Settings::from_json(
            r#"{ "audio": { "muted": true }, "tuning": { "coin_bonus": 25 } }"#,
        )
        .unwrap();
        assert!(settings.audio.muted);
        assert_eq!(settings.audio.music_volume, 0.5);
        assert_eq!(settings.tuning.coin_bonus, 25);
        assert_eq!(settings.assets, AssetPaths::default());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }

    #[test]
    fn test_invalid_tuning_is_rejected() {
        let err = Settings::from_json(r#"{ "tuning": { "gravity": 0.0 } }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidTuning(_)));
    }

    #[test]
    fn test_unsampleable_band_is_rejected() {
        for json in [
            r#"{ "tuning": { "platform_band": [-3e38, 3e38] } }"#,
            r#"{ "tuning": { "platform_band": [150, 1e39] } }"#,
        ] {
            let err = Settings::from_json(json).unwrap_err();
            assert!(matches!(err, GameError::InvalidTuning(_)), "{json}");
        }
    }

    #[test]
    fn test_effective_volumes() {
        let mut audio = AudioSettings {
            music_volume: 1.5,
            ..Default::default()
        };
        assert_eq!(audio.effective_music_volume(), 1.0);
        audio.muted = true;
        assert_eq!(audio.effective_music_volume(), 0.0);
        assert_eq!(audio.effective_sfx_volume(), 0.0);
    }
}
