use clap::ValueEnum;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Procedural surface color models. Each is a pure map from a world-space
/// position (plus seconds since mount for the time-varying one) to RGB. The
/// functions below are the CPU reference; `shaders` splices the identical
/// expressions into WGSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ShadingModel {
    /// Position gradient: red follows x, blue follows z, no green.
    Gradient,
    /// Trig blend between two colors with factor sin(x) + cos(z).
    #[default]
    Blend,
    /// Trig blend with both terms remapped into [0, 1] before summing.
    BlendNormalized,
    /// Trig blend plus a sin(t) * 0.5 sweep driven by the time uniform.
    TimeBlend,
}

impl ShadingModel {
    /// True when the model reads the `time` uniform each tick.
    pub fn is_time_varying(self) -> bool {
        matches!(self, ShadingModel::TimeBlend)
    }

    pub fn label(self) -> &'static str {
        match self {
            ShadingModel::Gradient => "gradient",
            ShadingModel::Blend => "blend",
            ShadingModel::BlendNormalized => "blend-normalized",
            ShadingModel::TimeBlend => "time-blend",
        }
    }

    /// Reference fragment color before fog.
    pub fn color_at(self, position: Vec3, time: f32, color_a: Vec3, color_b: Vec3) -> Vec3 {
        match self {
            ShadingModel::Gradient => gradient_color(position),
            ShadingModel::Blend => mix(color_a, color_b, blend_factor(position)),
            ShadingModel::BlendNormalized => {
                mix(color_a, color_b, normalized_blend_factor(position))
            }
            ShadingModel::TimeBlend => mix(color_a, color_b, time_blend_factor(position, time)),
        }
    }
}

/// Red and blue channels track x and z across the path's 5-unit travel.
/// Deliberately unclamped; positions outside the path over-saturate.
pub fn gradient_color(p: Vec3) -> Vec3 {
    Vec3::new((p.x + 0.5) / 5.0, 0.0, (p.z + 0.5) / 5.0)
}

/// Blend factor in [-2, 2]; values outside [0, 1] extrapolate the mix.
pub fn blend_factor(p: Vec3) -> f32 {
    p.x.sin() + p.z.cos()
}

/// Blend factor with each trig term remapped into [0, 1], so the sum stays
/// in [0, 2].
pub fn normalized_blend_factor(p: Vec3) -> f32 {
    (p.x.sin() * 0.5 + 0.5) + (p.z.sin() * 0.5 + 0.5)
}

/// Raw blend factor plus a +/- 0.5 oscillation over time.
pub fn time_blend_factor(p: Vec3, time: f32) -> f32 {
    blend_factor(p) + time.sin() * 0.5
}

/// Linear blend without clamping.
pub fn mix(a: Vec3, b: Vec3, f: f32) -> Vec3 {
    a + (b - a) * f
}

/// Linear fog amount for a view-space depth, clamped to [0, 1]. Applied as
/// the last fragment step: mix(base, fog_color, factor).
pub fn fog_factor(depth: f32, near: f32, far: f32) -> f32 {
    ((depth - near) / (far - near)).clamp(0.0, 1.0)
}
