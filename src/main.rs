use clap::Parser;
use winit::event_loop::EventLoop;

use shader_cube::app::App;
use shader_cube::cli::Cli;
use shader_cube::SceneConfig;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.scene {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    if let Some(shading) = cli.shading {
        config.shading = shading;
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, !cli.no_ui);

    println!("Shader Cube - Controls: click the cube to spin it, drag to orbit, scroll to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
