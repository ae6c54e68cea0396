use anyhow::{bail, Result};

use crate::math::Color;
use crate::scene::Fog;
use crate::shaders;
use crate::shading::ShadingModel;
use crate::types::ShadingUniforms;

/// Uniform names the shading parameter block declares. Shader sources may
/// only reference `params.<name>` for names listed here.
pub const DECLARED_UNIFORMS: [&str; 6] = [
    "color_a",
    "color_b",
    "fog_color",
    "time",
    "fog_near",
    "fog_far",
];

/// Value accepted by `Material::set_uniform`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Scalar(f32),
    Color(Color),
}

/// Procedural surface: a shading model, its parameter block, and a fog flag.
/// Shader assembly and uniform validation happen at construction, before any
/// GPU object exists.
#[derive(Debug)]
pub struct Material {
    shading: ShadingModel,
    color_a: Color,
    color_b: Color,
    time: f32,
    fog_enabled: bool,
    shader_source: String,
    referenced: Vec<String>,
}

impl Material {
    pub fn new(
        shading: ShadingModel,
        color_a: Color,
        color_b: Color,
        fog_enabled: bool,
    ) -> Result<Self> {
        let shader_source = shaders::shader_source(shading, fog_enabled);
        let referenced = validate_uniform_refs(&shader_source, &DECLARED_UNIFORMS)?;
        Ok(Self {
            shading,
            color_a,
            color_b,
            time: 0.0,
            fog_enabled,
            shader_source,
            referenced,
        })
    }

    pub fn shading(&self) -> ShadingModel {
        self.shading
    }

    pub fn shader_source(&self) -> &str {
        &self.shader_source
    }

    pub fn fog_enabled(&self) -> bool {
        self.fog_enabled
    }

    pub fn color_a(&self) -> Color {
        self.color_a
    }

    pub fn color_b(&self) -> Color {
        self.color_b
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// True when the assembled shader actually reads the named uniform. The
    /// render loop keys its per-tick time refresh on `declares("time")`.
    pub fn declares(&self, name: &str) -> bool {
        self.referenced.iter().any(|r| r == name)
    }

    /// Updates a color or time uniform by name. Unknown names, fog fields
    /// (which the scene owns), and mistyped values are configuration errors.
    pub fn set_uniform(&mut self, name: &str, value: UniformValue) -> Result<()> {
        match (name, value) {
            ("color_a", UniformValue::Color(c)) => self.color_a = c,
            ("color_b", UniformValue::Color(c)) => self.color_b = c,
            ("time", UniformValue::Scalar(t)) => self.time = t,
            ("color_a" | "color_b", UniformValue::Scalar(_)) => {
                bail!("uniform `{name}` expects a color value")
            }
            ("time", UniformValue::Color(_)) => bail!("uniform `time` expects a scalar value"),
            ("fog_color" | "fog_near" | "fog_far", _) => {
                bail!("uniform `{name}` is driven by the scene fog, not the material")
            }
            _ => bail!("unknown uniform `{name}`"),
        }
        Ok(())
    }

    /// Direct path for the render loop's per-tick time refresh.
    pub fn set_time(&mut self, time: f32) {
        self.time = time;
    }

    /// Packs the parameter block for upload, merging the scene fog. Colors
    /// go up gamma-expanded so blending happens in linear light. With fog
    /// disabled the fog fields are zeroed; the assembled shader has no fog
    /// path to read them anyway.
    pub fn shading_uniforms(&self, fog: Option<&Fog>) -> ShadingUniforms {
        let fog = if self.fog_enabled { fog } else { None };
        ShadingUniforms {
            color_a: self.color_a.to_linear().to_array4(),
            color_b: self.color_b.to_linear().to_array4(),
            fog_color: fog.map_or([0.0; 4], |f| f.color.to_linear().to_array4()),
            time: self.time,
            fog_near: fog.map_or(0.0, |f| f.near),
            fog_far: fog.map_or(0.0, |f| f.far),
            _pad: 0.0,
        }
    }
}

/// Scans WGSL for `params.<ident>` references and checks each against the
/// declared set. Returns the distinct referenced names on success.
pub fn validate_uniform_refs(source: &str, declared: &[&str]) -> Result<Vec<String>> {
    let mut referenced: Vec<String> = Vec::new();
    let mut rest = source;

    while let Some(idx) = rest.find("params.") {
        rest = &rest[idx + "params.".len()..];
        let ident: String = rest
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();

        if ident.is_empty() {
            bail!("dangling `params.` reference in shader source");
        }
        if !declared.contains(&ident.as_str()) {
            bail!("shader references undeclared uniform `{ident}`");
        }
        if !referenced.contains(&ident) {
            referenced.push(ident);
        }
    }

    Ok(referenced)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_colors() -> (Color, Color) {
        (Color::new(1.0, 1.0, 0.0), Color::new(1.0, 0.412, 0.706))
    }

    #[test]
    fn every_model_validates_cleanly() {
        let (a, b) = test_colors();
        for model in [
            ShadingModel::Gradient,
            ShadingModel::Blend,
            ShadingModel::BlendNormalized,
            ShadingModel::TimeBlend,
        ] {
            for fog in [false, true] {
                assert!(
                    Material::new(model, a, b, fog).is_ok(),
                    "{:?} fog={} failed validation",
                    model,
                    fog
                );
            }
        }
    }

    #[test]
    fn undeclared_reference_fails_validation() {
        let source = "fn fs() { let x = params.colour_a; }";
        let err = validate_uniform_refs(source, &DECLARED_UNIFORMS).unwrap_err();
        assert!(err.to_string().contains("colour_a"), "got: {err}");
    }

    #[test]
    fn dangling_reference_fails_validation() {
        let source = "let x = params. ;";
        assert!(validate_uniform_refs(source, &DECLARED_UNIFORMS).is_err());
    }

    #[test]
    fn declares_tracks_the_active_model() {
        let (a, b) = test_colors();

        let timed = Material::new(ShadingModel::TimeBlend, a, b, false).unwrap();
        assert!(timed.declares("time"));

        let steady = Material::new(ShadingModel::Blend, a, b, false).unwrap();
        assert!(!steady.declares("time"));
        assert!(steady.declares("color_a"));

        let gradient = Material::new(ShadingModel::Gradient, a, b, false).unwrap();
        assert!(!gradient.declares("color_a"));
    }

    #[test]
    fn set_uniform_rejects_unknown_and_mistyped_names() {
        let (a, b) = test_colors();
        let mut material = Material::new(ShadingModel::Blend, a, b, true).unwrap();

        assert!(material
            .set_uniform("color_a", UniformValue::Color(Color::new(0.0, 1.0, 0.0)))
            .is_ok());
        assert!(material
            .set_uniform("color_a", UniformValue::Scalar(1.0))
            .is_err());
        assert!(material
            .set_uniform("glitter", UniformValue::Scalar(1.0))
            .is_err());
        assert!(material
            .set_uniform("fog_near", UniformValue::Scalar(2.0))
            .is_err());
    }

    #[test]
    fn fog_fields_zero_when_material_opts_out() {
        let (a, b) = test_colors();
        let material = Material::new(ShadingModel::Blend, a, b, false).unwrap();
        let fog = Fog::new(Color::new(0.2, 0.2, 0.2), 5.0, 18.0).unwrap();

        let uniforms = material.shading_uniforms(Some(&fog));
        assert_eq!(uniforms.fog_near, 0.0);
        assert_eq!(uniforms.fog_far, 0.0);
    }

    #[test]
    fn uniforms_pack_fog_range() {
        let (a, b) = test_colors();
        let material = Material::new(ShadingModel::Blend, a, b, true).unwrap();
        let fog = Fog::new(Color::new(0.2, 0.2, 0.2), 5.0, 18.0).unwrap();

        let uniforms = material.shading_uniforms(Some(&fog));
        assert_eq!(uniforms.fog_near, 5.0);
        assert_eq!(uniforms.fog_far, 18.0);
    }
}
