//! Paint primitives.
//!
//! Primitives carry a single color that the shader multiplies with the
//! texture sample (or uses directly for solid shapes).

mod color;

pub use color::Color;
