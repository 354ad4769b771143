/// Anything that can report its pixel dimensions.
///
/// Primitives only ever ask a texture for its size; binding and sampling
/// stay with the renderer.
pub trait TextureExtent {
    fn pixel_size(&self) -> (u32, u32);
}

impl TextureExtent for wgpu::Texture {
    fn pixel_size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

/// Plain size record for textures that live outside wgpu (or not yet on GPU).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TextureSize {
    pub width: u32,
    pub height: u32,
}

impl TextureSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl TextureExtent for TextureSize {
    fn pixel_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
