use glam::{Mat4, Vec2, Vec3};

use crate::cache::CacheState;

/// Elementary matrices of a node and their cached product.
#[derive(Debug, Clone)]
pub(super) struct ModelMatrix {
    pub(super) translation: Mat4,
    pub(super) rotation: Mat4,
    pub(super) scale: Mat4,
    pub(super) anchor: Mat4,
    pub(super) size: Mat4,

    composed: Mat4,
    cache: CacheState,
}

impl Default for ModelMatrix {
    fn default() -> Self {
        Self {
            translation: Mat4::IDENTITY,
            rotation: Mat4::IDENTITY,
            scale: Mat4::IDENTITY,
            anchor: Mat4::IDENTITY,
            size: Mat4::IDENTITY,
            composed: Mat4::IDENTITY,
            cache: CacheState::Dirty,
        }
    }
}

impl ModelMatrix {
    #[inline]
    pub(super) fn invalidate(&mut self) {
        self.cache = CacheState::Dirty;
    }

    #[inline]
    pub(super) fn is_dirty(&self) -> bool {
        self.cache.is_dirty()
    }

    pub(super) fn set_translation(&mut self, position: Vec3) {
        self.translation = Mat4::from_translation(position);
        self.invalidate();
    }

    pub(super) fn set_anchor(&mut self, anchor: Vec2) {
        self.anchor = Mat4::from_translation((-anchor).extend(0.0));
        self.invalidate();
    }

    pub(super) fn set_rotation(&mut self, radians: f32) {
        self.rotation = Mat4::from_rotation_z(radians);
        self.invalidate();
    }

    pub(super) fn set_size(&mut self, size: Vec2) {
        self.size = Mat4::from_scale(size.extend(1.0));
        self.invalidate();
    }

    /// Flips fold into the scale axis signs so they never fight a negative scale.
    pub(super) fn set_scale(&mut self, scale: Vec2, flip_x: bool, flip_y: bool) {
        let sx = if flip_x { -scale.x } else { scale.x };
        let sy = if flip_y { -scale.y } else { scale.y };
        self.scale = Mat4::from_scale(Vec3::new(sx, sy, 1.0));
        self.invalidate();
    }

    /// Returns the product, recomposing first if any factor changed.
    pub(super) fn composed(&mut self) -> &Mat4 {
        if self.cache.is_dirty() {
            self.composed = self.translation * self.rotation * self.scale * self.anchor * self.size;
            self.cache = CacheState::Clean;
        }
        &self.composed
    }
}
