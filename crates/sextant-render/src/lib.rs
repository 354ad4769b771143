//! Sextant render crate.
//!
//! This crate owns the 2D camera, the per-primitive transform pipeline and the
//! narrow GPU-facing contracts (uniform block, shader sources, texture extents)
//! a renderer needs to draw a primitive.

mod cache;
pub mod camera;
pub mod coords;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod primitive;
pub mod render;
pub mod transform;
