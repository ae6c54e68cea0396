use glam::Mat4;

/// Per-frame matrix block for the vertex stage. Field order matches the WGSL
/// `FrameUniforms` declaration.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub model_view: [[f32; 4]; 4],
}

impl FrameUniforms {
    pub fn new(view_proj: Mat4, model: Mat4, model_view: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            model_view: model_view.to_cols_array_2d(),
        }
    }
}

/// Shading parameter block for the fragment stage. Field order matches the
/// WGSL `ShadingParams` declaration; colors are linear RGB padded to vec4.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShadingUniforms {
    pub color_a: [f32; 4],
    pub color_b: [f32; 4],
    pub fog_color: [f32; 4],
    pub time: f32,
    pub fog_near: f32,
    pub fog_far: f32,
    pub _pad: f32,
}
