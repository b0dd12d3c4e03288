//! Crate error type

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to parse config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),
    #[error("browser window is unavailable")]
    NoWindow,
    #[error("missing element #{0}")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for GameError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        GameError::Js(format!("{value:?}"))
    }
}
