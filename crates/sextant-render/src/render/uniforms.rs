use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::paint::Color;

/// Uniform block uploaded once per draw.
///
/// Matches `struct Transform` in the bundled WGSL sources.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TransformUniforms {
    pub model: [[f32; 4]; 4],      // column-major
    pub projection: [[f32; 4]; 4], // column-major
    pub color: [f32; 4],
}

impl TransformUniforms {
    #[inline]
    pub fn new(model: &Mat4, projection: &Mat4, color: Color) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            color: color.clamped().to_array(),
        }
    }
}

/// Returns the `wgpu` minimum binding size for the transform uniform buffer.
fn transform_ubo_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<TransformUniforms>() as u64)
        .expect("TransformUniforms has non-zero size by construction")
}

/// Uniform buffer + bind group carrying [`TransformUniforms`] at
/// `@group(0) @binding(0)`.
pub struct TransformBinding {
    layout: wgpu::BindGroupLayout,
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl TransformBinding {
    pub fn new(device: &wgpu::Device) -> Self {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("sextant transform bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: Some(transform_ubo_min_binding_size()),
                },
                count: None,
            }],
        });

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sextant transform ubo"),
            size: std::mem::size_of::<TransformUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sextant transform bind group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self { layout, buffer, bind_group }
    }

    #[inline]
    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    #[inline]
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    /// Queues an upload of `uniforms`; it lands before the next submit.
    pub fn write(&self, queue: &wgpu::Queue, uniforms: &TransformUniforms) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(uniforms));
    }
}
