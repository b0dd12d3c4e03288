//! Surface that records draw calls instead of drawing
//!
//! Used by tests and the native headless runner.

use super::{ImageId, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Image {
        image: ImageId,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
    FillRect {
        color: String,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
    StrokeRect {
        color: String,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
    Text {
        text: String,
        color: String,
        font: String,
        x: f32,
        y: f32,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Positions of every draw of `image`, in order
    pub fn images(&self, image: ImageId) -> Vec<(f32, f32)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Image { image: i, x, y, .. } if *i == image => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    /// Every text draw with its position, in order
    pub fn texts(&self) -> Vec<(String, f32, f32)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, x, y, .. } => Some((text.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn draw_image(&mut self, image: ImageId, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(DrawCall::Image { image, x, y, w, h });
    }

    fn fill_rect(&mut self, color: &str, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(DrawCall::FillRect {
            color: color.to_string(),
            x,
            y,
            w,
            h,
        });
    }

    fn stroke_rect(&mut self, color: &str, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(DrawCall::StrokeRect {
            color: color.to_string(),
            x,
            y,
            w,
            h,
        });
    }

    fn fill_text(&mut self, text: &str, color: &str, font: &str, x: f32, y: f32) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            color: color.to_string(),
            font: font.to_string(),
            x,
            y,
        });
    }
}
