use anyhow::{Context, Result};
use glam::{Mat4, Vec2, Vec3};

use crate::cache::CacheState;
use crate::coords::{Viewport, WorldRect};

use super::CameraConfig;

/// Lower bound applied when a caller hands `set_zoom_range` a non-positive minimum.
const ZOOM_FLOOR: f32 = 1.0e-6;

/// Camera based on an orthogonal projection.
///
/// Mutators only record state and mark the projection stale; the projection
/// and its inverse are rebuilt on the next read.
///
/// Vertical flipping happens in two independent places:
/// - the projection swaps its top and bottom clip planes
/// - [`translate`](Self::translate) negates `dy`, so "move up" keeps its meaning
#[derive(Debug, Clone)]
pub struct Camera2D {
    position: Vec2,
    viewport: Viewport,
    zoom: f32,
    min_zoom: f32,
    max_zoom: f32,
    centered: bool,
    flip_vertical: bool,
    near: f32,
    far: f32,

    projection: Mat4,
    inverse_projection: Mat4,
    cache: CacheState,
}

/// Clip-plane bounds in world units, before the projection is built.
#[derive(Debug, Copy, Clone, PartialEq)]
struct ClipBounds {
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
}

impl Camera2D {
    /// Creates a camera with the default configuration.
    ///
    /// `zoom` goes through the same clamp as [`set_zoom`](Self::set_zoom).
    pub fn new(viewport: Viewport, zoom: f32) -> Result<Self> {
        Self::with_config(viewport, zoom, CameraConfig::default())
    }

    pub fn with_config(viewport: Viewport, zoom: f32, config: CameraConfig) -> Result<Self> {
        anyhow::ensure!(
            viewport.is_valid(),
            "camera viewport must be positive and finite (got {}x{})",
            viewport.width,
            viewport.height
        );
        config.validate().context("invalid camera configuration")?;

        let mut camera = Self {
            position: Vec2::ZERO,
            viewport,
            zoom: config.min_zoom,
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            centered: config.centered,
            flip_vertical: config.flip_vertical,
            near: config.near,
            far: config.far,
            projection: Mat4::IDENTITY,
            inverse_projection: Mat4::IDENTITY,
            cache: CacheState::Dirty,
        };
        camera.set_zoom(zoom);
        camera.rebuild();

        log::debug!(
            "camera created: viewport={}x{} zoom={} range=[{}, {}]",
            viewport.width,
            viewport.height,
            camera.zoom,
            camera.min_zoom,
            camera.max_zoom
        );
        Ok(camera)
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.viewport.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.viewport.height
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[inline]
    pub fn min_zoom(&self) -> f32 {
        self.min_zoom
    }

    #[inline]
    pub fn max_zoom(&self) -> f32 {
        self.max_zoom
    }

    #[inline]
    pub fn is_centered(&self) -> bool {
        self.centered
    }

    #[inline]
    pub fn is_flip_vertical(&self) -> bool {
        self.flip_vertical
    }

    // ── mutators ──────────────────────────────────────────────────────────

    /// Sets the absolute camera position. When centered, this is the world
    /// point shown at the middle of the viewport.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
        self.cache = CacheState::Dirty;
    }

    /// Moves the camera by a relative offset.
    ///
    /// With `flip_vertical`, `dy` is negated so a positive `dy` moves the view
    /// the same way on screen in both orientations.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        let dy = if self.flip_vertical { -dy } else { dy };
        self.position += Vec2::new(dx, dy);
        self.cache = CacheState::Dirty;
    }

    /// Sets the zoom factor, clamped to `[min_zoom, max_zoom]`.
    ///
    /// NaN is ignored and leaves the current zoom in place.
    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom.is_nan() {
            log::warn!("camera: ignoring NaN zoom, keeping {}", self.zoom);
            return;
        }
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        self.cache = CacheState::Dirty;
    }

    /// Updates the allowed zoom range and re-clamps the current zoom if it
    /// falls outside.
    ///
    /// A non-positive or non-finite `min` is raised to a tiny positive floor.
    /// A non-finite `max`, or one below `min`, is ignored: the previous
    /// `max_zoom` stays, raised to `min` if needed.
    pub fn set_zoom_range(&mut self, min: f32, max: f32) {
        let min_zoom = if min.is_finite() && min > 0.0 {
            min
        } else {
            log::warn!("camera: invalid min zoom {min}, using {ZOOM_FLOOR}");
            ZOOM_FLOOR
        };
        let max_zoom = if max.is_finite() && max >= min_zoom {
            max
        } else {
            let kept = self.max_zoom.max(min_zoom);
            log::warn!("camera: invalid max zoom {max} for min {min_zoom}, keeping {kept}");
            kept
        };

        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        if self.zoom < self.min_zoom || self.zoom > self.max_zoom {
            self.set_zoom(self.zoom);
        }
    }

    pub fn set_centered(&mut self, centered: bool) {
        self.centered = centered;
        self.cache = CacheState::Dirty;
    }

    /// Pass `true` for a cartesian world (+Y up).
    pub fn set_flip_vertical(&mut self, flip: bool) {
        self.flip_vertical = flip;
        self.cache = CacheState::Dirty;
    }

    /// Zooms and pans so the area spanned by the two corners is fully visible.
    ///
    /// The axis with the tighter fit decides the zoom and fills the viewport
    /// exactly; the other axis shows extra margin. A zero-extent axis puts no
    /// constraint on zoom.
    pub fn set_visible_area(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.set_visible_rect(WorldRect::from_corners(Vec2::new(x1, y1), Vec2::new(x2, y2)));
    }

    pub fn set_visible_rect(&mut self, area: WorldRect) {
        let zoom = (self.viewport.width / area.width()).min(self.viewport.height / area.height());
        self.set_zoom(zoom);

        let anchor = if self.centered { area.center() } else { area.min };
        self.set_position(anchor.x, anchor.y);
    }

    // ── derived matrices ──────────────────────────────────────────────────

    /// Current projection, rebuilt first if any input changed.
    pub fn projection_matrix(&mut self) -> &Mat4 {
        self.rebuild();
        &self.projection
    }

    pub fn inverse_projection_matrix(&mut self) -> &Mat4 {
        self.rebuild();
        &self.inverse_projection
    }

    /// World-space rectangle currently covered by the viewport.
    pub fn visible_rect(&self) -> WorldRect {
        let b = self.clip_bounds();
        WorldRect::from_corners(Vec2::new(b.left, b.bottom), Vec2::new(b.right, b.top))
    }

    // ── coordinate conversion ─────────────────────────────────────────────

    /// Maps a pixel position to normalized `[-1, 1]` coordinates, flipping Y
    /// first when the camera is vertically flipped.
    pub fn screen_to_ndc(&self, screen: Vec2) -> Vec2 {
        let mut screen = screen;
        if self.flip_vertical {
            screen.y = self.viewport.height - screen.y;
        }
        self.viewport.normalize(screen)
    }

    /// Converts a pixel position into world space (`z` is always 0).
    pub fn screen_to_world(&mut self, screen: Vec2) -> Vec3 {
        self.rebuild();
        let ndc = self.screen_to_ndc(screen);
        self.inverse_projection.project_point3(ndc.extend(0.0))
    }

    /// Converts a world point into pixel coordinates. Depth is dropped.
    pub fn world_to_screen(&mut self, world: Vec3) -> Vec2 {
        self.rebuild();
        let ndc = self.projection.project_point3(world);
        let mut screen = self.viewport.denormalize(ndc.truncate());
        if self.flip_vertical {
            screen.y = self.viewport.height - screen.y;
        }
        screen
    }

    // ── rebuild ───────────────────────────────────────────────────────────

    fn clip_bounds(&self) -> ClipBounds {
        let (mut left, mut right, mut top, mut bottom) = if self.centered {
            let half = self.viewport.half_extent() / self.zoom;
            (-half.x, half.x, half.y, -half.y)
        } else {
            (0.0, self.viewport.width / self.zoom, self.viewport.height / self.zoom, 0.0)
        };

        left += self.position.x;
        right += self.position.x;
        top += self.position.y;
        bottom += self.position.y;

        if self.flip_vertical {
            std::mem::swap(&mut top, &mut bottom);
        }

        ClipBounds { left, right, top, bottom }
    }

    fn rebuild(&mut self) {
        if !self.cache.is_dirty() {
            return;
        }

        let b = self.clip_bounds();
        // `top` lands on clip-space y = -1: unflipped, world Y grows down the screen.
        self.projection =
            Mat4::orthographic_rh_gl(b.left, b.right, b.top, b.bottom, self.near, self.far);
        self.inverse_projection = self.projection.inverse();
        self.cache = CacheState::Clean;

        log::trace!(
            "camera projection rebuilt: l={} r={} t={} b={} zoom={}",
            b.left,
            b.right,
            b.top,
            b.bottom,
            self.zoom
        );
    }
}
