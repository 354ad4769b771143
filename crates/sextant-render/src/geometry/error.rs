use std::fmt;

/// Invalid parameters handed to a geometry builder.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A regular polygon needs at least three segments.
    TooFewSegments { segments: usize },
    /// Radius must be finite and non-negative.
    InvalidRadius { radius: f32 },
    /// Coordinates come in `(x, y)` pairs.
    OddCoordinateCount { len: usize },
    /// UV list must pair one-to-one with the vertex list.
    UvLengthMismatch { vertices: usize, uv_coords: usize },
    TooFewPoints { points: usize, required: usize },
    /// Triangle lists need a multiple of three vertices.
    IncompleteTriangles { vertices: usize },
    /// Grid spacing must be finite and positive.
    InvalidGridStep { step: f32 },
    InvalidExtent { width: f32, height: f32 },
    /// Grid would need more than `max` lines.
    TooManyLines { max: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewSegments { segments } => {
                write!(f, "regular polygon needs at least 3 segments, got {segments}")
            }
            Self::InvalidRadius { radius } => {
                write!(f, "radius must be finite and non-negative, got {radius}")
            }
            Self::OddCoordinateCount { len } => {
                write!(f, "coordinate list must hold (x, y) pairs, got {len} values")
            }
            Self::UvLengthMismatch { vertices, uv_coords } => write!(
                f,
                "uv coordinate count ({uv_coords}) does not match \
                 vertex coordinate count ({vertices})"
            ),
            Self::TooFewPoints { points, required } => {
                write!(f, "need at least {required} points, got {points}")
            }
            Self::IncompleteTriangles { vertices } => {
                write!(f, "triangle list needs a multiple of 3 vertices, got {vertices}")
            }
            Self::InvalidGridStep { step } => {
                write!(f, "grid step must be finite and positive, got {step}")
            }
            Self::InvalidExtent { width, height } => {
                write!(f, "extent must be finite and positive, got {width}x{height}")
            }
            Self::TooManyLines { max } => {
                write!(f, "grid would exceed {max} lines; increase the step")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        let msg = GeometryError::TooFewSegments { segments: 2 }.to_string();
        assert!(msg.contains("at least 3"));
        assert!(msg.contains('2'));

        let msg = GeometryError::UvLengthMismatch { vertices: 8, uv_coords: 6 }.to_string();
        assert!(msg.contains('8') && msg.contains('6'));
        assert!(msg.contains("does not match vertex coordinate count"));
    }
}
