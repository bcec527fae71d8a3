//! Per-frame shader uniforms

use drawlist_core::RenderSettings;

/// Scalars the fragment shader reads next to the record buffer
///
/// Layout matches the shader struct:
/// - background_color: `vec4<f32>` (16 bytes)
/// - anti_aliasing_scalar: f32 (4 bytes)
/// - command_count: u32 (4 bytes)
/// - _padding: `vec2<u32>` (8 bytes)
///
/// Total: 32 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub background_color: [f32; 4],
    pub anti_aliasing_scalar: f32,
    pub command_count: u32,
    pub _padding: [u32; 2],
}

const _: () = assert!(std::mem::size_of::<FrameUniforms>() == 32);

impl FrameUniforms {
    pub fn new(settings: &RenderSettings, command_count: usize) -> Self {
        Self {
            background_color: settings.background_color.to_array(),
            anti_aliasing_scalar: settings.anti_aliasing_scalar,
            command_count: u32::try_from(command_count).unwrap_or(u32::MAX),
            _padding: [0; 2],
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
