use glam::{Mat4, Vec2, Vec3};

use super::model::ModelMatrix;

/// Transform state of a single drawable on the XY plane.
///
/// Each setter rebuilds only the elementary matrix it affects and marks the
/// node dirty; [`model_matrix`](Self::model_matrix) recomposes on demand.
///
/// Degenerate inputs are accepted as-is: a zero size collapses the primitive,
/// a negative size or scale mirrors it, and angles are never wrapped.
#[derive(Debug, Clone)]
pub struct TransformNode {
    position: Vec3,
    anchor: Vec2,
    angle: f32,
    size: Vec2,
    scale: Vec2,
    flip_x: bool,
    flip_y: bool,
    matrix: ModelMatrix,
}

impl TransformNode {
    /// Creates a node at `position` with the given logical `size`, unit scale,
    /// no rotation and the anchor on the local origin.
    pub fn new(position: Vec3, size: Vec2) -> Self {
        let mut node = Self {
            position,
            anchor: Vec2::ZERO,
            angle: 0.0,
            size,
            scale: Vec2::ONE,
            flip_x: false,
            flip_y: false,
            matrix: ModelMatrix::default(),
        };
        node.rebuild_matrices();
        node
    }

    // ── accessors ─────────────────────────────────────────────────────────

    /// `z` orders draws; it is not a true depth coordinate.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Rotation around Z, in radians.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    #[inline]
    pub fn flip_x(&self) -> bool {
        self.flip_x
    }

    #[inline]
    pub fn flip_y(&self) -> bool {
        self.flip_y
    }

    /// True when the next [`model_matrix`](Self::model_matrix) call recomposes.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.matrix.is_dirty()
    }

    // ── setters ───────────────────────────────────────────────────────────

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.matrix.set_translation(position);
    }

    /// Sets the point that ends up at `position`, in sized units: the anchor
    /// offset applies after `size`, so `size / 2` is the center.
    pub fn set_anchor(&mut self, anchor: Vec2) {
        self.anchor = anchor;
        self.matrix.set_anchor(anchor);
    }

    /// Anchors the node at half its current size.
    pub fn set_anchor_to_center(&mut self) {
        self.set_anchor(self.size * 0.5);
    }

    pub fn set_angle(&mut self, radians: f32) {
        self.angle = radians;
        self.matrix.set_rotation(radians);
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
        self.matrix.set_size(size);
    }

    /// Scales around the anchor, in the node's unrotated frame.
    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
        self.matrix.set_scale(self.scale, self.flip_x, self.flip_y);
    }

    /// Mirrors the node around its anchor's vertical axis.
    pub fn set_flip_x(&mut self, flip: bool) {
        self.flip_x = flip;
        self.matrix.set_scale(self.scale, self.flip_x, self.flip_y);
    }

    /// Mirrors the node around its anchor's horizontal axis.
    pub fn set_flip_y(&mut self, flip: bool) {
        self.flip_y = flip;
        self.matrix.set_scale(self.scale, self.flip_x, self.flip_y);
    }

    // ── model matrix ──────────────────────────────────────────────────────

    /// Local-to-world matrix, recomposed only when an input changed.
    pub fn model_matrix(&mut self) -> &Mat4 {
        self.matrix.composed()
    }

    fn rebuild_matrices(&mut self) {
        self.matrix.set_translation(self.position);
        self.matrix.set_anchor(self.anchor);
        self.matrix.set_rotation(self.angle);
        self.matrix.set_size(self.size);
        self.matrix.set_scale(self.scale, self.flip_x, self.flip_y);
    }
}
