//! GPU-facing contracts.
//!
//! The crate never records draw calls itself. A renderer takes from here:
//! - the per-draw uniform block (model, projection, color) and its binding
//! - the static WGSL sources primitives are paired with
//! - the texture size query used to size primitives to their texture
//!
//! Convention:
//! - matrices are uploaded column-major, single precision
//! - vertex positions are unit-space `vec2<f32>` at location 0, UVs at location 1

mod shader;
mod texture;
mod uniforms;

pub use shader::ShaderSource;
pub use texture::{TextureExtent, TextureSize};
pub use uniforms::{TransformBinding, TransformUniforms};
