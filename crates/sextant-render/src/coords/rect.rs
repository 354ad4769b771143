use glam::Vec2;

/// Axis-aligned rectangle in world units, stored as min/max corners.
///
/// Unlike screen rects there is no preferred Y direction here: `min.y` is the
/// numerically smaller edge whichever way the camera flips.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct WorldRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl WorldRect {
    /// Builds a rect from any two opposite corners.
    #[inline]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// True when `other` lies inside `self`, allowing `eps` of slack per edge.
    #[inline]
    pub fn contains_rect(self, other: WorldRect, eps: f32) -> bool {
        other.min.x >= self.min.x - eps
            && other.min.y >= self.min.y - eps
            && other.max.x <= self.max.x + eps
            && other.max.y <= self.max.y + eps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x0: f32, y0: f32, x1: f32, y1: f32) -> WorldRect {
        WorldRect::from_corners(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    // ── from_corners ──────────────────────────────────────────────────────

    #[test]
    fn from_corners_orders_axes() {
        let rect = r(10.0, -2.0, 4.0, 8.0);
        assert_eq!(rect.min, Vec2::new(4.0, -2.0));
        assert_eq!(rect.max, Vec2::new(10.0, 8.0));
        assert_eq!(rect.width(), 6.0);
        assert_eq!(rect.height(), 10.0);
        assert_eq!(rect.center(), Vec2::new(7.0, 3.0));
    }

    // ── containment ───────────────────────────────────────────────────────

    #[test]
    fn contains_rect_respects_slack() {
        let outer = r(0.0, 0.0, 10.0, 10.0);
        assert!(outer.contains_rect(r(1.0, 1.0, 9.0, 9.0), 0.0));
        assert!(!outer.contains_rect(r(-0.001, 0.0, 5.0, 5.0), 0.0));
        assert!(outer.contains_rect(r(-0.001, 0.0, 5.0, 5.0), 0.01));
    }
}
