//! Orthographic 2D camera.
//!
//! The camera owns pan/zoom state for a fixed viewport and derives the
//! projection handed to every draw call, plus its inverse for picking.

mod camera2d;
mod config;

pub use camera2d::Camera2D;
pub use config::CameraConfig;
