//! 2D rendering module
//!
//! Draws a simulation frame back-to-front onto any immediate-mode `Surface`.
//! World-space entities are shifted by the camera offset; the score and the
//! game-over overlay are in screen space.

pub mod recording;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use recording::{DrawCall, RecordingSurface};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::consts::{VIEW_HEIGHT, VIEW_WIDTH};
use crate::sim::{GamePhase, GameState};

/// Image assets the renderer refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageId {
    Background,
    Player,
    Coin,
}

pub const PLATFORM_FILL: &str = "#999";
pub const PLATFORM_STROKE: &str = "#666";
pub const ENEMY_FILL: &str = "purple";
pub const SCORE_COLOR: &str = "#000";
pub const SCORE_FONT: &str = "20px Arial";
pub const OVERLAY_FILL: &str = "rgba(0, 0, 0, 0.7)";
pub const OVERLAY_TEXT: &str = "#fff";
pub const OVERLAY_FONT: &str = "24px Arial";

/// Minimal immediate-mode drawing API (a subset of the canvas 2D context)
pub trait Surface {
    /// Draw an image scaled into the given rectangle. Images that are not
    /// loaded yet draw nothing.
    fn draw_image(&mut self, image: ImageId, x: f32, y: f32, w: f32, h: f32);
    fn fill_rect(&mut self, color: &str, x: f32, y: f32, w: f32, h: f32);
    fn stroke_rect(&mut self, color: &str, x: f32, y: f32, w: f32, h: f32);
    fn fill_text(&mut self, text: &str, color: &str, font: &str, x: f32, y: f32);
}

/// Horizontal shift of the looping background. Keeps the sign of the camera
/// offset, so the two copies still tile when the camera is left of zero.
#[inline]
pub fn background_scroll(camera_x: f32) -> f32 {
    camera_x % VIEW_WIDTH
}

/// Draw what the player sees after a tick: the gameplay frame, with the
/// game-over overlay on top once the run has ended
pub fn render(surface: &mut impl Surface, state: &GameState) {
    render_frame(surface, state);
    if state.phase == GamePhase::GameOver {
        render_game_over(surface, state.score);
    }
}

/// Draw one gameplay frame
pub fn render_frame(surface: &mut impl Surface, state: &GameState) {
    let camera_x = state.camera_x;

    // Two copies side by side cover the view for any scroll value
    let scroll = background_scroll(camera_x);
    surface.draw_image(ImageId::Background, -scroll, 0.0, VIEW_WIDTH, VIEW_HEIGHT);
    surface.draw_image(
        ImageId::Background,
        VIEW_WIDTH - scroll,
        0.0,
        VIEW_WIDTH,
        VIEW_HEIGHT,
    );

    for plat in &state.platforms {
        let x = plat.pos.x - camera_x;
        surface.fill_rect(PLATFORM_FILL, x, plat.pos.y, plat.size.x, plat.size.y);
        surface.stroke_rect(PLATFORM_STROKE, x, plat.pos.y, plat.size.x, plat.size.y);
    }

    for enemy in &state.enemies {
        surface.fill_rect(
            ENEMY_FILL,
            enemy.pos.x - camera_x,
            enemy.pos.y,
            enemy.size.x,
            enemy.size.y,
        );
    }

    for coin in state.uncollected_coins() {
        surface.draw_image(
            ImageId::Coin,
            coin.pos.x - camera_x,
            coin.pos.y,
            coin.size.x,
            coin.size.y,
        );
    }

    let player = &state.player;
    surface.draw_image(
        ImageId::Player,
        player.pos.x - camera_x,
        player.pos.y,
        player.size.x,
        player.size.y,
    );

    surface.fill_text(
        &format!("Score: {}", state.score),
        SCORE_COLOR,
        SCORE_FONT,
        10.0,
        25.0,
    );
}

/// Dim the view and show the final score with restart/quit instructions
pub fn render_game_over(surface: &mut impl Surface, score: u64) {
    surface.fill_rect(OVERLAY_FILL, 0.0, 0.0, VIEW_WIDTH, VIEW_HEIGHT);
    surface.fill_text(
        &format!("💀 Game Over! Your Score: {score}"),
        OVERLAY_TEXT,
        OVERLAY_FONT,
        220.0,
        150.0,
    );
    surface.fill_text(
        "Press R to Restart or Q to Quit",
        OVERLAY_TEXT,
        OVERLAY_FONT,
        210.0,
        200.0,
    );
}

/// Shown after a quit request, since browsers usually refuse to close the tab
pub fn render_quit_notice(surface: &mut impl Surface) {
    surface.fill_text(
        "Close this tab to quit",
        OVERLAY_TEXT,
        OVERLAY_FONT,
        260.0,
        250.0,
    );
}
