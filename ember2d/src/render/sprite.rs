use crate::math::Vec2;

/// Opaque handle used to reference textures owned by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub(crate) u32);

/// A textured quad positioned by its top-left corner, in surface pixels.
#[derive(Clone, Debug)]
pub struct Sprite {
    pub texture: TextureHandle,
    pub position: Vec2,
    pub size: Vec2,
    /// Normalized UV sub-rectangle `[x, y, w, h]`, for sprite-sheet frames.
    /// `None` samples the full texture.
    pub source: Option<[f32; 4]>,
    /// Multiplicative tint applied to the sampled texture color.
    pub tint: [f32; 4],
}

impl Sprite {
    pub fn new(texture: TextureHandle, position: Vec2, size: Vec2) -> Self {
        Self {
            texture,
            position,
            size,
            source: None,
            tint: [1.0, 1.0, 1.0, 1.0],
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: [f32; 4]) -> Self {
        self.source = Some(source);
        self
    }

    #[must_use]
    pub fn with_tint(mut self, tint: [f32; 4]) -> Self {
        self.tint = tint;
        self
    }
}
