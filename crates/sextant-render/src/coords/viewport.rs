use glam::Vec2;

/// Viewport size in pixels.
///
/// Fixed for the lifetime of a camera; a resized window gets a new camera.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn half_extent(self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Maps a pixel position to `[-1, 1]` on both axes, no Y flip applied.
    #[inline]
    pub fn normalize(self, screen: Vec2) -> Vec2 {
        let half = self.half_extent();
        (screen - half) / half
    }

    /// Inverse of [`normalize`](Self::normalize).
    #[inline]
    pub fn denormalize(self, ndc: Vec2) -> Vec2 {
        let half = self.half_extent();
        ndc * half + half
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_or_non_finite_is_invalid() {
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert!(!Viewport::new(800.0, -1.0).is_valid());
        assert!(!Viewport::new(f32::INFINITY, 600.0).is_valid());
        assert!(Viewport::new(800.0, 600.0).is_valid());
    }

    #[test]
    fn normalize_corners() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.normalize(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, -1.0));
        assert_eq!(vp.normalize(Vec2::new(800.0, 600.0)), Vec2::new(1.0, 1.0));
        assert_eq!(vp.normalize(Vec2::new(400.0, 300.0)), Vec2::ZERO);
    }

    #[test]
    fn denormalize_undoes_normalize() {
        let vp = Viewport::new(1024.0, 768.0);
        let p = Vec2::new(131.0, 700.0);
        assert_eq!(vp.denormalize(vp.normalize(p)), p);
    }
}
