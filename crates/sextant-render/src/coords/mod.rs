//! Coordinate types shared by the camera and the primitives.
//!
//! Two spaces are in play:
//! - screen space: pixels inside the viewport, origin at `(0, 0)`
//! - world space: whatever units the camera projects, scaled by zoom
//!
//! Vectors and matrices come from `glam`; this module only adds the small
//! value types glam does not carry.

mod rect;
mod viewport;

pub use rect::WorldRect;
pub use viewport::Viewport;
