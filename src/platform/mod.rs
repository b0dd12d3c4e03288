//! Browser platform layer
//!
//! DOM lookups, seeding, page close, and the `Effects` implementation that
//! routes simulation side effects to the canvas and audio elements.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement};

use crate::audio::AudioManager;
use crate::error::GameError;
use crate::renderer::{CanvasSurface, render};
use crate::sim::{Effects, GameState, SoundCue};

/// Id of the canvas element the game draws into
pub const CANVAS_ID: &str = "gameCanvas";

pub fn document() -> Result<Document, GameError> {
    web_sys::window()
        .ok_or(GameError::NoWindow)?
        .document()
        .ok_or(GameError::NoWindow)
}

pub fn canvas(document: &Document) -> Result<HtmlCanvasElement, GameError> {
    document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| GameError::MissingElement(CANVAS_ID.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| GameError::MissingElement(CANVAS_ID.to_string()))
}

/// Seed for a new run
pub fn now_seed() -> u64 {
    js_sys::Date::now() as u64
}

/// Ask the browser to close the page. Tabs the script did not open are
/// normally left alone, and the refusal is silent.
pub fn request_close() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.close() {
            log::warn!("window.close() failed: {:?}", e);
        }
    }
}

/// Effects for one frame: sounds to the audio elements, drawing to the canvas
pub struct WebEffects<'a> {
    surface: &'a mut CanvasSurface,
    audio: &'a AudioManager,
}

impl<'a> WebEffects<'a> {
    pub fn new(surface: &'a mut CanvasSurface, audio: &'a AudioManager) -> Self {
        Self { surface, audio }
    }
}

impl Effects for WebEffects<'_> {
    fn play_sound(&mut self, cue: SoundCue) {
        self.audio.play(cue);
    }

    fn draw_frame(&mut self, state: &GameState) {
        render(&mut *self.surface, state);
    }
}
