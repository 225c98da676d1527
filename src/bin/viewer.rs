use anyhow::{Result, anyhow};
use clap::Parser;
use mandelbrot_viewer::cli::ViewerArgs;
use mandelbrot_viewer::{ViewerOptions, run_gui};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = ViewerArgs::parse();
    let options = ViewerOptions {
        width: args.width,
        height: args.height,
        settings: args.navigation_settings(),
        config: args.config(),
    };

    run_gui(options).map_err(|err| anyhow!("viewer failed: {err}"))
}
