use anyhow::{Context, Result};
use clap::Parser;
use mandelbrot_viewer::FileRenderController;
use mandelbrot_viewer::PpmFilePresenter;
use mandelbrot_viewer::cli::RenderArgs;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = RenderArgs::parse();
    let grid = args.grid().context("invalid image size")?;
    let window = args.window().context("invalid view")?;

    let mut controller = FileRenderController::new(PpmFilePresenter::new());

    controller
        .generate(window, grid, &args.config())
        .context("failed to render frame")?;
    controller
        .write(&args.output)
        .with_context(|| format!("failed to write {}", args.output))?;

    Ok(())
}
