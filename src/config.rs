use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::math::Color;
use crate::scene::Fog;
use crate::shading::ShadingModel;

/// Camera placement and projection, all in world units.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [10.0, 10.0, 10.0],
            target: [0.0, 0.0, 0.0],
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Linear depth fog. `near` and `far` are view-space distances where the
/// fog starts and saturates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FogConfig {
    pub color: String,
    pub near: f32,
    pub far: f32,
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            color: "#333333".to_string(),
            near: 5.0,
            far: 18.0,
        }
    }
}

/// The looping ground path. Corners are (x, z) waypoints visited in order
/// from the node's starting position, closing back on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    pub corners: Vec<[f32; 2]>,
    pub cycle_seconds: f32,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            corners: vec![[5.0, 0.0], [5.0, 5.0], [0.0, 5.0], [0.0, 0.0]],
            cycle_seconds: 4.0,
        }
    }
}

/// Everything needed to assemble the scene. Colors are authored as CSS hex
/// or named strings and parsed on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub shading: ShadingModel,
    pub background: String,
    pub color_a: String,
    pub color_b: String,
    pub cube_side: f32,
    pub fog: Option<FogConfig>,
    pub spin_seconds: f32,
    pub camera: CameraConfig,
    pub path: PathConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            shading: ShadingModel::Blend,
            background: "#333333".to_string(),
            color_a: "yellow".to_string(),
            color_b: "hotpink".to_string(),
            cube_side: 1.0,
            fog: Some(FogConfig::default()),
            spin_seconds: 0.5,
            camera: CameraConfig::default(),
            path: PathConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Loads and validates a config from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read scene config {:?}", path.as_ref()))?;
        let config: SceneConfig =
            serde_json::from_str(&content).context("failed to parse scene config")?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the scene or GPU setup cannot represent.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cube_side > 0.0, "cube_side must be positive");
        ensure!(
            self.path.cycle_seconds > 0.0,
            "path.cycle_seconds must be positive"
        );
        ensure!(
            !self.path.corners.is_empty(),
            "path.corners must name at least one waypoint"
        );
        ensure!(self.spin_seconds > 0.0, "spin_seconds must be positive");
        ensure!(self.camera.near > 0.0, "camera.near must be positive");
        ensure!(
            self.camera.near < self.camera.far,
            "camera.near must be closer than camera.far"
        );
        self.background_color()?;
        self.color_a()?;
        self.color_b()?;
        self.fog_settings()?;
        Ok(())
    }

    pub fn background_color(&self) -> Result<Color> {
        Color::parse(&self.background).context("invalid background color")
    }

    pub fn color_a(&self) -> Result<Color> {
        Color::parse(&self.color_a).context("invalid color_a")
    }

    pub fn color_b(&self) -> Result<Color> {
        Color::parse(&self.color_b).context("invalid color_b")
    }

    /// Builds the fog settings, or `None` when fog is switched off.
    pub fn fog_settings(&self) -> Result<Option<Fog>> {
        self.fog
            .as_ref()
            .map(|fog| {
                let color = Color::parse(&fog.color).context("invalid fog color")?;
                Fog::new(color, fog.near, fog.far)
            })
            .transpose()
    }
}
