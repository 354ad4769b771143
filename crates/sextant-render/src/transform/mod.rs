//! Per-primitive transform pipeline.
//!
//! Composition order (rightmost applies first to a local vertex):
//!
//! `model = translation * rotation * scale(flip) * anchor_offset * size`
//!
//! - `size` stretches unit geometry to pixel extent
//! - `anchor_offset` moves the anchor (in sized units) onto the local origin
//! - `scale(flip)` scales around the anchor; flips negate an axis here
//! - `rotation` turns around the anchor (Z axis)
//! - `translation` places the anchor at `position`

mod model;
mod node;

pub use node::TransformNode;
