pub mod anim;
pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod host;
pub mod lifecycle;
pub mod material;
pub mod math;
pub mod orbit;
pub mod pick;
pub mod renderer;
pub mod scene;
pub mod shaders;
pub mod shading;
pub mod types;

pub use config::SceneConfig;
pub use host::SceneHost;
pub use shading::ShadingModel;
