/// Drawing surface abstraction and the software framebuffer behind it.

use glam::Vec2;
use image::{imageops, Rgba, RgbaImage};

use crate::entities::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Pixel rectangle on a source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// What the game needs from a render target.
pub trait Surface {
    /// Wipe to a flat background.
    fn clear(&mut self);

    /// Cover the whole surface with `tile` repeated from the origin.
    fn fill_pattern(&mut self, tile: &RgbaImage);

    /// Copy `src` out of `image` so its top-left lands at `dest`.
    fn draw_image(&mut self, image: &RgbaImage, src: SourceRect, dest: Vec2);

    /// Replace the score text overlay.
    fn set_score(&mut self, score: u32);
}

const BACKDROP: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// 512×480 RGBA framebuffer plus the score overlay text.
#[derive(Clone, Debug)]
pub struct Canvas {
    pixels: RgbaImage,
    score_text: String,
}

impl Canvas {
    pub fn new() -> Self {
        Canvas {
            pixels: RgbaImage::from_pixel(CANVAS_WIDTH as u32, CANVAS_HEIGHT as u32, BACKDROP),
            score_text: String::from("0"),
        }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn score_text(&self) -> &str {
        &self.score_text
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas::new()
    }
}

impl Surface for Canvas {
    fn clear(&mut self) {
        for px in self.pixels.pixels_mut() {
            *px = BACKDROP;
        }
    }

    fn fill_pattern(&mut self, tile: &RgbaImage) {
        self.clear();
        if tile.width() > 0 && tile.height() > 0 {
            imageops::tile(&mut self.pixels, tile);
        }
    }

    fn draw_image(&mut self, image: &RgbaImage, src: SourceRect, dest: Vec2) {
        // crop_imm clamps the rect to the image bounds
        let frame = imageops::crop_imm(image, src.x, src.y, src.w, src.h).to_image();
        if frame.width() == 0 || frame.height() == 0 {
            return;
        }
        imageops::overlay(
            &mut self.pixels,
            &frame,
            dest.x.floor() as i64,
            dest.y.floor() as i64,
        );
    }

    fn set_score(&mut self, score: u32) {
        self.score_text = score.to_string();
    }
}
