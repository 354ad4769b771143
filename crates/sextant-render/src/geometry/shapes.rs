use glam::Vec2;

use super::{GeometryError, Topology};

/// Upper bound on the line count of a single grid.
pub const MAX_GRID_LINES: usize = 1 << 16;

/// Flat 2D vertex data plus the topology it is meant to be drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    vertices: Vec<f32>,
    uv_coords: Option<Vec<f32>>,
    topology: Topology,
}

impl Geometry {
    /// Wraps raw `[x, y, ..]` coordinates.
    pub fn new(vertices: Vec<f32>, topology: Topology) -> Result<Self, GeometryError> {
        if vertices.len() % 2 != 0 {
            return Err(GeometryError::OddCoordinateCount { len: vertices.len() });
        }
        Ok(Self { vertices, uv_coords: None, topology })
    }

    /// Attaches texture coordinates, one `(u, v)` per vertex.
    pub fn with_uv_coords(mut self, uv_coords: Vec<f32>) -> Result<Self, GeometryError> {
        if uv_coords.len() != self.vertices.len() {
            return Err(GeometryError::UvLengthMismatch {
                vertices: self.vertices.len(),
                uv_coords: uv_coords.len(),
            });
        }
        self.uv_coords = Some(uv_coords);
        Ok(self)
    }

    #[inline]
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    #[inline]
    pub fn uv_coords(&self) -> Option<&[f32]> {
        self.uv_coords.as_deref()
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 2
    }

    // ── builders ──────────────────────────────────────────────────────────

    /// Unit square `(0,0)..(1,1)` as a fan, with matching UVs.
    pub fn unit_quad() -> Self {
        const QUAD: [f32; 8] = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0];
        Self {
            vertices: QUAD.to_vec(),
            uv_coords: Some(QUAD.to_vec()),
            topology: Topology::TriangleFan,
        }
    }

    /// Unit square, filled as a fan or outlined as a closed strip.
    pub fn rect(filled: bool) -> Self {
        if filled {
            Self {
                vertices: vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0],
                uv_coords: None,
                topology: Topology::TriangleFan,
            }
        } else {
            Self {
                vertices: vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
                uv_coords: None,
                topology: Topology::LineStrip,
            }
        }
    }

    /// Regular polygon around the origin. The first vertex is repeated at the
    /// end so the outline closes.
    pub fn regular_polygon(
        radius: f32,
        segments: usize,
        filled: bool,
    ) -> Result<Self, GeometryError> {
        let points = circle_to_polygon(Vec2::ZERO, radius, segments, 0.0)?;

        let mut vertices = Vec::with_capacity((points.len() + 1) * 2);
        for p in &points {
            vertices.extend_from_slice(&[p.x, p.y]);
        }
        vertices.extend_from_slice(&[points[0].x, points[0].y]);

        let topology = if filled { Topology::TriangleFan } else { Topology::LineStrip };
        Ok(Self { vertices, uv_coords: None, topology })
    }

    /// Open or closed line through `points`, relative to the primitive position.
    pub fn polyline(points: &[Vec2], closed: bool) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::TooFewPoints { points: points.len(), required: 2 });
        }

        let mut vertices: Vec<f32> = points.iter().flat_map(|p| [p.x, p.y]).collect();
        if closed {
            vertices.extend_from_slice(&[points[0].x, points[0].y]);
        }
        Ok(Self { vertices, uv_coords: None, topology: Topology::LineStrip })
    }

    /// Line grid with `step` spacing covering `width x height`, centered on the
    /// origin. Lines sit on every multiple of `step` from the lower-left edge
    /// and never extend past the extent, so a remainder leaves the far edges
    /// open.
    pub fn grid(width: f32, height: f32, step: f32) -> Result<Self, GeometryError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(GeometryError::InvalidGridStep { step });
        }
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(GeometryError::InvalidExtent { width, height });
        }

        let (x0, y0) = (-width * 0.5, -height * 0.5);
        let (x1, y1) = (width * 0.5, height * 0.5);
        // Counted in f32 first: the quotients can exceed any usize.
        let (rows, columns) = ((height / step).floor(), (width / step).floor());
        if rows + columns + 2.0 > MAX_GRID_LINES as f32 {
            return Err(GeometryError::TooManyLines { max: MAX_GRID_LINES });
        }
        let (rows, columns) = (rows as usize, columns as usize);

        let capacity = (rows + columns)
            .checked_add(2)
            .and_then(|lines| lines.checked_mul(4))
            .ok_or(GeometryError::TooManyLines { max: MAX_GRID_LINES })?;
        let mut vertices = Vec::with_capacity(capacity);
        for i in 0..=rows {
            let y = y0 + i as f32 * step;
            vertices.extend_from_slice(&[x0, y, x1, y]);
        }
        for i in 0..=columns {
            let x = x0 + i as f32 * step;
            vertices.extend_from_slice(&[x, y0, x, y1]);
        }
        Ok(Self { vertices, uv_coords: None, topology: Topology::LineList })
    }

    /// Arbitrary triangle list with optional UVs.
    pub fn triangles(
        vertices: Vec<f32>,
        uv_coords: Option<Vec<f32>>,
    ) -> Result<Self, GeometryError> {
        let geometry = Self::new(vertices, Topology::TriangleList)?;
        if geometry.vertex_count() % 3 != 0 {
            return Err(GeometryError::IncompleteTriangles { vertices: geometry.vertex_count() });
        }
        match uv_coords {
            Some(uv) => geometry.with_uv_coords(uv),
            None => Ok(geometry),
        }
    }

    /// Expands a fan into an equivalent triangle list. Other topologies are
    /// returned unchanged.
    pub fn to_triangle_list(&self) -> Self {
        if self.topology != Topology::TriangleFan {
            return self.clone();
        }

        let fan = |src: &[f32]| -> Vec<f32> {
            let n = src.len() / 2;
            let mut out = Vec::with_capacity(n.saturating_sub(2) * 6);
            for i in 1..n.saturating_sub(1) {
                out.extend_from_slice(&src[0..2]);
                out.extend_from_slice(&src[i * 2..i * 2 + 4]);
            }
            out
        };

        Self {
            vertices: fan(&self.vertices),
            uv_coords: self.uv_coords.as_deref().map(fan),
            topology: Topology::TriangleList,
        }
    }
}

/// Points of a regular polygon inscribed in a circle, counter-clockwise from
/// `start_angle` (radians).
pub fn circle_to_polygon(
    center: Vec2,
    radius: f32,
    segments: usize,
    start_angle: f32,
) -> Result<Vec<Vec2>, GeometryError> {
    if segments < 3 {
        return Err(GeometryError::TooFewSegments { segments });
    }
    if !(radius.is_finite() && radius >= 0.0) {
        return Err(GeometryError::InvalidRadius { radius });
    }

    let step = std::f32::consts::TAU / segments as f32;
    Ok((0..segments)
        .map(|i| {
            let angle = start_angle + step * i as f32;
            center + Vec2::from_angle(angle) * radius
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1.0e-5;

    // ── raw construction ──────────────────────────────────────────────────

    #[test]
    fn odd_coordinate_count_is_rejected() {
        let err = Geometry::new(vec![0.0, 1.0, 2.0], Topology::LineStrip).unwrap_err();
        assert_eq!(err, GeometryError::OddCoordinateCount { len: 3 });
    }

    #[test]
    fn uv_length_must_match() {
        let err = Geometry::new(vec![0.0; 6], Topology::TriangleList)
            .unwrap()
            .with_uv_coords(vec![0.0; 4])
            .unwrap_err();
        assert_eq!(err, GeometryError::UvLengthMismatch { vertices: 6, uv_coords: 4 });
    }

    #[test]
    fn triangles_need_whole_triangles() {
        assert!(Geometry::triangles(vec![0.0; 6], None).is_ok());
        assert_eq!(
            Geometry::triangles(vec![0.0; 8], None).unwrap_err(),
            GeometryError::IncompleteTriangles { vertices: 4 }
        );
        let g = Geometry::triangles(vec![0.0; 12], Some(vec![1.0; 12])).unwrap();
        assert_eq!(g.vertex_count(), 6);
        assert_eq!(g.uv_coords().map(<[f32]>::len), Some(12));
    }

    // ── quads and rects ───────────────────────────────────────────────────

    #[test]
    fn unit_quad_has_uvs_matching_positions() {
        let q = Geometry::unit_quad();
        assert_eq!(q.topology(), Topology::TriangleFan);
        assert_eq!(q.vertex_count(), 4);
        assert_eq!(q.uv_coords(), Some(q.vertices()));
    }

    #[test]
    fn rect_outline_closes() {
        let r = Geometry::rect(false);
        assert_eq!(r.topology(), Topology::LineStrip);
        assert_eq!(r.vertex_count(), 5);
        assert_eq!(&r.vertices()[..2], &r.vertices()[8..]);
        assert_eq!(Geometry::rect(true).vertex_count(), 4);
    }

    // ── polygons ──────────────────────────────────────────────────────────

    #[test]
    fn circle_to_polygon_rejects_fewer_than_three_segments() {
        for segments in [0, 1, 2] {
            assert_eq!(
                circle_to_polygon(Vec2::ZERO, 1.0, segments, 0.0).unwrap_err(),
                GeometryError::TooFewSegments { segments }
            );
        }
    }

    #[test]
    fn circle_to_polygon_rejects_bad_radius() {
        assert!(circle_to_polygon(Vec2::ZERO, -1.0, 8, 0.0).is_err());
        assert!(circle_to_polygon(Vec2::ZERO, f32::NAN, 8, 0.0).is_err());
    }

    #[test]
    fn circle_points_lie_on_the_circle() {
        let center = Vec2::new(3.0, -2.0);
        let points = circle_to_polygon(center, 5.0, 12, 0.25).unwrap();
        assert_eq!(points.len(), 12);
        for p in points {
            assert!(((p - center).length() - 5.0).abs() < 1.0e-4);
        }
    }

    #[test]
    fn regular_polygon_repeats_first_vertex() {
        let g = Geometry::regular_polygon(2.0, 6, false).unwrap();
        assert_eq!(g.topology(), Topology::LineStrip);
        assert_eq!(g.vertex_count(), 7);
        let v = g.vertices();
        assert!((v[0] - 2.0).abs() < EPS && v[1].abs() < EPS);
        assert_eq!(&v[..2], &v[12..]);
    }

    #[test]
    fn regular_polygon_propagates_segment_error() {
        assert_eq!(
            Geometry::regular_polygon(1.0, 2, true).unwrap_err(),
            GeometryError::TooFewSegments { segments: 2 }
        );
    }

    // ── polylines and grids ───────────────────────────────────────────────

    #[test]
    fn polyline_closing_appends_first_point() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(4.0, 3.0)];
        assert_eq!(Geometry::polyline(&pts, false).unwrap().vertex_count(), 3);

        let closed = Geometry::polyline(&pts, true).unwrap();
        assert_eq!(closed.vertex_count(), 4);
        assert_eq!(&closed.vertices()[6..], &[0.0, 0.0]);
    }

    #[test]
    fn polyline_needs_two_points() {
        assert_eq!(
            Geometry::polyline(&[Vec2::ONE], true).unwrap_err(),
            GeometryError::TooFewPoints { points: 1, required: 2 }
        );
    }

    #[test]
    fn grid_emits_one_segment_per_line() {
        let g = Geometry::grid(40.0, 20.0, 10.0).unwrap();
        assert_eq!(g.topology(), Topology::LineList);
        // 3 horizontal + 5 vertical lines, two vertices each.
        assert_eq!(g.vertex_count(), 16);
        assert_eq!(&g.vertices()[..4], &[-20.0, -10.0, 20.0, -10.0]);
    }

    #[test]
    fn grid_rejects_bad_parameters() {
        assert!(matches!(
            Geometry::grid(10.0, 10.0, 0.0),
            Err(GeometryError::InvalidGridStep { .. })
        ));
        assert!(matches!(
            Geometry::grid(0.0, 10.0, 1.0),
            Err(GeometryError::InvalidExtent { .. })
        ));
    }

    #[test]
    fn grid_rejects_unbounded_line_count() {
        assert_eq!(
            Geometry::grid(f32::MAX, f32::MAX, f32::MIN_POSITIVE),
            Err(GeometryError::TooManyLines { max: MAX_GRID_LINES })
        );
        assert_eq!(
            Geometry::grid(1.0e6, 1.0e6, 1.0),
            Err(GeometryError::TooManyLines { max: MAX_GRID_LINES })
        );
        assert!(Geometry::grid(1000.0, 1000.0, 1.0).is_ok());
    }

    #[test]
    fn grid_stops_at_extent_when_step_does_not_divide_it() {
        let g = Geometry::grid(45.0, 20.0, 10.0).unwrap();
        // 3 horizontal lines, 5 vertical at -22.5, -12.5, .. 17.5.
        assert_eq!(g.vertex_count(), 16);
        let v = g.vertices();
        assert_eq!(&v[..4], &[-22.5, -10.0, 22.5, -10.0]);
        assert_eq!(&v[12..16], &[-22.5, -10.0, -22.5, 10.0]);
        assert_eq!(&v[v.len() - 4..], &[17.5, -10.0, 17.5, 10.0]);
        assert!(v.iter().step_by(2).all(|x| x.abs() <= 22.5));
    }

    // ── fan expansion ─────────────────────────────────────────────────────

    #[test]
    fn fan_expands_to_triangle_list() {
        let list = Geometry::unit_quad().to_triangle_list();
        assert_eq!(list.topology(), Topology::TriangleList);
        assert_eq!(
            list.vertices(),
            &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0]
        );
        assert_eq!(list.uv_coords(), Some(list.vertices()));
    }

    #[test]
    fn non_fans_are_untouched() {
        let strip = Geometry::rect(false);
        assert_eq!(strip.to_triangle_list(), strip);
    }
}
