// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::shading::ShadingModel;

#[derive(Parser, Debug, Clone)]
#[command(name = "shader-cube")]
#[command(about = "Procedurally shaded cube viewer", long_about = None)]
pub struct Cli {
    /// Scene config file (JSON); built-in defaults when omitted
    #[arg(long, value_name = "FILE")]
    pub scene: Option<PathBuf>,

    /// Shading model override
    #[arg(long, value_enum)]
    pub shading: Option<ShadingModel>,

    /// Disable the stats overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
