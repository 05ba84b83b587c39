/// Sprite-sheet animation.
///
/// A `Sprite` names a region of a sheet image and walks a fractional cursor
/// over its frame list.  Every entity owns its sprite, so cursors are never
/// shared.

use glam::Vec2;

use crate::canvas::{SourceRect, Surface};
use crate::resources::{AssetKey, Resources};

/// Axis along which successive frames are laid out on the sheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub sheet: AssetKey,
    /// Top-left of frame 0 on the sheet.
    pub origin: Vec2,
    /// Size of one frame, also the entity's hit box.
    pub size: Vec2,
    /// Frames per second; zero means a static sprite showing frame 0.
    pub speed: f32,
    pub frames: &'static [usize],
    pub orientation: Orientation,
    pub once: bool,
    done: bool,
    cursor: f32,
}

impl Sprite {
    /// Static single-frame sprite.
    pub fn new(sheet: AssetKey, origin: Vec2, size: Vec2) -> Self {
        Sprite {
            sheet,
            origin,
            size,
            speed: 0.0,
            frames: &[],
            orientation: Orientation::Horizontal,
            once: false,
            done: false,
            cursor: 0.0,
        }
    }

    pub fn animated(mut self, speed: f32, frames: &'static [usize]) -> Self {
        debug_assert!(
            speed <= 0.0 || !frames.is_empty(),
            "animated sprite needs at least one frame"
        );
        self.speed = speed;
        self.frames = frames;
        self
    }

    pub fn vertical(mut self) -> Self {
        self.orientation = Orientation::Vertical;
        self
    }

    pub fn play_once(mut self) -> Self {
        self.once = true;
        self
    }

    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// True once a play-once animation has run past its last frame.
    pub fn is_done(&self) -> bool {
        self.done
    }

    fn past_end(&self) -> bool {
        self.once && self.speed > 0.0 && self.cursor.floor() as usize >= self.frames.len()
    }

    pub fn advance(&mut self, dt: f32) {
        debug_assert!(dt >= 0.0, "negative frame delta {dt}");
        self.cursor += self.speed * dt;
        if self.past_end() {
            self.done = true;
        }
    }

    /// Frame index to draw, or `None` when a play-once animation has ended.
    pub fn active_frame(&mut self) -> Option<usize> {
        if self.speed <= 0.0 {
            return Some(0);
        }
        if self.past_end() {
            self.done = true;
            return None;
        }
        let idx = self.cursor.floor() as usize;
        Some(self.frames[idx % self.frames.len()])
    }

    /// Sheet rectangle holding `frame`.
    pub fn source_rect(&self, frame: usize) -> SourceRect {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        match self.orientation {
            Orientation::Horizontal => x += frame as f32 * self.size.x,
            Orientation::Vertical => y += frame as f32 * self.size.y,
        }
        SourceRect {
            x: x as u32,
            y: y as u32,
            w: self.size.x as u32,
            h: self.size.y as u32,
        }
    }

    /// Draw the active frame with its top-left at `at`.  Skipped silently
    /// when the sheet has not finished loading or the animation is over.
    pub fn render_into<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        resources: &Resources,
        at: Vec2,
    ) {
        let Some(frame) = self.active_frame() else {
            return;
        };
        if let Some(sheet) = resources.get(self.sheet) {
            surface.draw_image(sheet, self.source_rect(frame), at);
        }
    }
}
