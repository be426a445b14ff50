mod font;
mod sprite;
mod wgpu_backend;

pub use font::{measure_text, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use sprite::{Sprite, TextureHandle};
pub use wgpu_backend::{Frame, Renderer, SurfaceFrame};

use anyhow::Result;

use crate::math::{Aabb, Vec2};

/// Drawing operations a scene needs for one frame.
///
/// The renderer implements this on a live frame; tests implement it on a
/// recording mock to assert draw ordering without a GPU.
pub trait DrawSurface {
    /// Fill the whole surface with a color. Scenes call this first.
    fn clear(&mut self, color: [f32; 4]) -> Result<()>;

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Aabb, color: [f32; 4]) -> Result<()>;

    /// Draw a sprite (optionally a sub-rectangle of its texture).
    fn draw_sprite(&mut self, sprite: &Sprite) -> Result<()>;

    /// Draw a line of text with the built-in bitmap font. `scale` multiplies
    /// the 5x7 glyph cells.
    fn draw_text(&mut self, text: &str, position: Vec2, scale: f32, color: [f32; 4]) -> Result<()>;

    /// Surface size in pixels.
    fn size(&self) -> Vec2;
}
