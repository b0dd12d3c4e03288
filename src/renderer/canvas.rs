//! Canvas 2D surface (WASM only)

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{ImageId, Surface};
use crate::consts::{VIEW_HEIGHT, VIEW_WIDTH};
use crate::error::GameError;
use crate::settings::AssetPaths;

/// Images start loading on construction; drawing before they finish is a
/// silent no-op in the browser.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    background: HtmlImageElement,
    player: HtmlImageElement,
    coin: HtmlImageElement,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement, assets: &AssetPaths) -> Result<Self, GameError> {
        canvas.set_width(VIEW_WIDTH as u32);
        canvas.set_height(VIEW_HEIGHT as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| GameError::Js("canvas has no 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GameError::Js("2d context has unexpected type".to_string()))?;

        Ok(Self {
            ctx,
            background: load_image(&assets.background)?,
            player: load_image(&assets.player)?,
            coin: load_image(&assets.coin)?,
        })
    }

    fn image(&self, image: ImageId) -> &HtmlImageElement {
        match image {
            ImageId::Background => &self.background,
            ImageId::Player => &self.player,
            ImageId::Coin => &self.coin,
        }
    }
}

fn load_image(src: &str) -> Result<HtmlImageElement, GameError> {
    let img = HtmlImageElement::new()?;
    img.set_src(src);
    Ok(img)
}

impl Surface for CanvasSurface {
    fn draw_image(&mut self, image: ImageId, x: f32, y: f32, w: f32, h: f32) {
        let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            self.image(image),
            x as f64,
            y as f64,
            w as f64,
            h as f64,
        );
    }

    fn fill_rect(&mut self, color: &str, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn stroke_rect(&mut self, color: &str, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.stroke_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_text(&mut self, text: &str, color: &str, font: &str, x: f32, y: f32) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}
