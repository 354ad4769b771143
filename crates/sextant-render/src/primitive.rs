//! Drawable 2D primitives.
//!
//! A primitive is a [`TransformNode`] composed with the resources a renderer
//! needs to draw it: shared geometry, a shader source and an optional texture.
//! Construction either yields a complete primitive or an error; nothing
//! half-built escapes.

use std::fmt;
use std::sync::Arc;

use anyhow::{Context, Result};
use glam::{Vec2, Vec3};

use crate::camera::Camera2D;
use crate::geometry::Geometry;
use crate::paint::Color;
use crate::render::{ShaderSource, TextureExtent, TransformUniforms};
use crate::transform::TransformNode;

/// Shared handle to a texture's size provider.
pub type TextureHandle = Arc<dyn TextureExtent + Send + Sync>;

/// Resources a primitive is drawn with.
///
/// Geometry is reference-counted so many primitives can share one buffer
/// source (every quad uses the same unit square).
#[derive(Clone)]
pub struct DrawResources {
    pub geometry: Arc<Geometry>,
    pub shader: ShaderSource,
    pub texture: Option<TextureHandle>,
}

impl DrawResources {
    #[inline]
    pub fn new(geometry: Arc<Geometry>, shader: ShaderSource) -> Self {
        Self { geometry, shader, texture: None }
    }
}

impl fmt::Debug for DrawResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawResources")
            .field("geometry", &self.geometry)
            .field("shader", &self.shader.label)
            .field("texture", &self.texture.as_ref().map(|t| t.pixel_size()))
            .finish()
    }
}

/// A drawing primitive on the XY plane.
#[derive(Debug, Clone)]
pub struct Primitive2D {
    transform: TransformNode,
    resources: DrawResources,
    color: Color,
}

impl Primitive2D {
    pub fn new(transform: TransformNode, resources: DrawResources) -> Self {
        Self { transform, resources, color: Color::white() }
    }

    /// Textured unit quad stretched to `size`.
    pub fn quad(position: Vec3, size: Vec2) -> Self {
        Self::new(
            TransformNode::new(position, size),
            DrawResources::new(Arc::new(Geometry::unit_quad()), ShaderSource::TEXTURED),
        )
    }

    /// Solid rectangle, filled or outlined.
    pub fn rect(position: Vec3, size: Vec2, filled: bool) -> Self {
        Self::new(
            TransformNode::new(position, size),
            DrawResources::new(Arc::new(Geometry::rect(filled)), ShaderSource::SOLID_COLOR),
        )
    }

    /// Regular polygon of `radius` around `center`, in world units (size 1).
    pub fn regular_polygon(
        center: Vec3,
        radius: f32,
        segments: usize,
        filled: bool,
    ) -> Result<Self> {
        let geometry = Geometry::regular_polygon(radius, segments, filled)
            .with_context(|| format!("building regular polygon primitive ({segments} segments)"))?;
        Ok(Self::solid(center, geometry))
    }

    /// Line through `points`, relative to `center`.
    pub fn polyline(center: Vec3, points: &[Vec2], closed: bool) -> Result<Self> {
        let geometry = Geometry::polyline(points, closed).context("building polyline primitive")?;
        Ok(Self::solid(center, geometry))
    }

    /// Grid of lines spaced `step` apart, centered on `center`.
    pub fn grid(center: Vec3, width: f32, height: f32, step: f32) -> Result<Self> {
        let geometry = Geometry::grid(width, height, step).context("building grid primitive")?;
        Ok(Self::solid(center, geometry))
    }

    /// Free-form triangle list with caller-supplied UVs, texture and shader.
    pub fn triangles(
        vertices: Vec<f32>,
        uv_coords: Vec<f32>,
        texture: Option<TextureHandle>,
        position: Vec3,
        size: Vec2,
        shader: ShaderSource,
    ) -> Result<Self> {
        let geometry = Geometry::triangles(vertices, Some(uv_coords))
            .context("building triangles primitive")?;
        let mut resources = DrawResources::new(Arc::new(geometry), shader);
        resources.texture = texture;
        Ok(Self::new(TransformNode::new(position, size), resources))
    }

    fn solid(center: Vec3, geometry: Geometry) -> Self {
        Self::new(
            TransformNode::new(center, Vec2::ONE),
            DrawResources::new(Arc::new(geometry), ShaderSource::SOLID_COLOR),
        )
    }

    // ── transform ─────────────────────────────────────────────────────────

    #[inline]
    pub fn transform(&self) -> &TransformNode {
        &self.transform
    }

    #[inline]
    pub fn transform_mut(&mut self) -> &mut TransformNode {
        &mut self.transform
    }

    /// Sizes the primitive to its texture's pixel dimensions. Without a
    /// texture this does nothing.
    pub fn set_size_from_texture(&mut self) {
        let Some(texture) = self.resources.texture.as_ref() else {
            log::trace!("set_size_from_texture: no texture attached");
            return;
        };
        let (w, h) = texture.pixel_size();
        self.transform.set_size(Vec2::new(w as f32, h as f32));
    }

    // ── resources ─────────────────────────────────────────────────────────

    #[inline]
    pub fn resources(&self) -> &DrawResources {
        &self.resources
    }

    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.resources.geometry
    }

    #[inline]
    pub fn shader(&self) -> ShaderSource {
        self.resources.shader
    }

    pub fn set_shader(&mut self, shader: ShaderSource) {
        self.resources.shader = shader;
    }

    #[inline]
    pub fn texture(&self) -> Option<&TextureHandle> {
        self.resources.texture.as_ref()
    }

    pub fn set_texture(&mut self, texture: Option<TextureHandle>) {
        self.resources.texture = texture;
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    // ── draw hand-off ─────────────────────────────────────────────────────

    /// Everything the shader needs for this draw: model, projection and color.
    pub fn uniforms(&mut self, camera: &mut Camera2D) -> TransformUniforms {
        let projection = *camera.projection_matrix();
        TransformUniforms::new(self.transform.model_matrix(), &projection, self.color)
    }
}
