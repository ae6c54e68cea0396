//! WGSL assembly for the procedural material. The fragment body is spliced
//! per shading model so each pipeline compiles only the math it uses; the
//! expressions mirror the CPU reference in `shading` one-for-one.

use crate::shading::ShadingModel;

/// Uniform declarations shared by every variant. `FrameUniforms` and
/// `ShadingParams` must stay byte-compatible with the structs in `types`.
const UNIFORM_DECLS: &str = r#"struct FrameUniforms {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
    model_view: mat4x4<f32>,
}

struct ShadingParams {
    color_a: vec4<f32>,
    color_b: vec4<f32>,
    fog_color: vec4<f32>,
    time: f32,
    fog_near: f32,
    fog_far: f32,
    _pad: f32,
}

@group(0) @binding(0) var<uniform> frame: FrameUniforms;
@group(0) @binding(1) var<uniform> params: ShadingParams;
"#;

const VERTEX_STAGE: &str = r#"struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_position: vec3<f32>,
    @location(1) fog_depth: f32,
}

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> VertexOutput {
    var out: VertexOutput;
    let world = frame.model * vec4<f32>(position, 1.0);
    out.clip_position = frame.view_proj * world;
    out.world_position = world.xyz;
    out.fog_depth = -(frame.model_view * vec4<f32>(position, 1.0)).z;
    return out;
}
"#;

/// Fog runs last, after the base color is settled.
const FOG_STAGE: &str = r#"    let fog_amount = clamp((in.fog_depth - params.fog_near) / (params.fog_far - params.fog_near), 0.0, 1.0);
    shaded = mix(shaded, params.fog_color.rgb, fog_amount);
"#;

fn color_stage(model: ShadingModel) -> &'static str {
    match model {
        ShadingModel::Gradient => {
            "    var shaded = vec3<f32>((p.x + 0.5) / 5.0, 0.0, (p.z + 0.5) / 5.0);\n"
        }
        ShadingModel::Blend => {
            "    let f = sin(p.x) + cos(p.z);\n    var shaded = mix(params.color_a.rgb, params.color_b.rgb, f);\n"
        }
        ShadingModel::BlendNormalized => {
            "    let f = (sin(p.x) * 0.5 + 0.5) + (sin(p.z) * 0.5 + 0.5);\n    var shaded = mix(params.color_a.rgb, params.color_b.rgb, f);\n"
        }
        ShadingModel::TimeBlend => {
            "    let f = sin(p.x) + cos(p.z) + sin(params.time) * 0.5;\n    var shaded = mix(params.color_a.rgb, params.color_b.rgb, f);\n"
        }
    }
}

/// Full shader module source for one material configuration.
pub fn shader_source(model: ShadingModel, fog: bool) -> String {
    let fog_stage = if fog { FOG_STAGE } else { "" };
    format!(
        r#"{UNIFORM_DECLS}
{VERTEX_STAGE}
@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {{
    let p = in.world_position;
{color_stage}{fog_stage}    return vec4<f32>(shaded, 1.0);
}}
"#,
        color_stage = color_stage(model),
    )
}
