/// Static WGSL source paired with a primitive at construction.
///
/// Entry points are always `vs_main` / `fs_main`; the transform block sits at
/// `@group(0) @binding(0)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShaderSource {
    pub label: &'static str,
    pub wgsl: &'static str,
    /// Whether the source samples a texture at `@group(1)`.
    pub textured: bool,
}

impl ShaderSource {
    /// Flat fill with the uniform color.
    pub const SOLID_COLOR: Self = Self {
        label: "sextant solid color shader",
        wgsl: include_str!("shaders/solid.wgsl"),
        textured: false,
    };

    /// Texture sample modulated by the uniform color.
    pub const TEXTURED: Self = Self {
        label: "sextant textured shader",
        wgsl: include_str!("shaders/textured.wgsl"),
        textured: true,
    };

    pub fn create_module(&self, device: &wgpu::Device) -> wgpu::ShaderModule {
        log::debug!("compiling shader module: {}", self.label);
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(self.label),
            source: wgpu::ShaderSource::Wgsl(self.wgsl.into()),
        })
    }
}
