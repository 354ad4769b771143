//! CPU-side geometry for primitives.
//!
//! Geometry is a flat `[x0, y0, x1, y1, ..]` list plus optional UVs in the same
//! layout. Builders emit unit-sized shapes; the owning primitive's transform
//! scales them to pixels.

mod error;
mod shapes;
mod topology;

pub use error::GeometryError;
pub use shapes::{circle_to_polygon, Geometry, MAX_GRID_LINES};
pub use topology::Topology;
