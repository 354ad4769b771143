use anyhow::Result;

/// Construction parameters for [`Camera2D`](super::Camera2D).
///
/// Defaults match a top-left origin, Y-down world with a generous zoom range.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Smallest zoom factor the camera accepts. Must be positive.
    pub min_zoom: f32,

    /// Largest zoom factor the camera accepts. Must be `>= min_zoom`.
    pub max_zoom: f32,

    /// Near clip plane.
    ///
    /// The depth range only exists to keep the projection invertible; `z` on
    /// primitives is a draw-order hint and must stay inside it.
    pub near: f32,

    /// Far clip plane.
    pub far: f32,

    /// Put the world origin at the viewport center instead of its top-left.
    pub centered: bool,

    /// Make world +Y point up (cartesian) instead of down.
    pub flip_vertical: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.01,
            max_zoom: 20.0,
            near: 2.0,
            far: -2.0,
            centered: false,
            flip_vertical: false,
        }
    }
}

impl CameraConfig {
    /// Rejects configurations that would break the zoom invariant or make the
    /// projection singular.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.min_zoom.is_finite() && self.min_zoom > 0.0,
            "min_zoom must be positive and finite (got {})",
            self.min_zoom
        );
        anyhow::ensure!(
            self.max_zoom.is_finite() && self.max_zoom >= self.min_zoom,
            "max_zoom must be finite and >= min_zoom (got {} < {})",
            self.max_zoom,
            self.min_zoom
        );
        anyhow::ensure!(
            self.near.is_finite() && self.far.is_finite() && self.near != self.far,
            "near and far planes must be finite and distinct (got {} / {})",
            self.near,
            self.far
        );
        Ok(())
    }
}
