use std::path::Path;
use std::time::{Duration, Instant};

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::{RenderFrameError, render_frame};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::view_window::ViewWindow;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

/// Renders a single view and hands it to a file presenter.
pub struct FileRenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> FileRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(
        &mut self,
        window: ViewWindow,
        grid: PixelGrid,
        config: &MandelbrotConfig,
    ) -> Result<Duration, RenderFrameError> {
        info!("Image size: {}x{}", grid.width(), grid.height());
        info!(
            "View: center=({}, {}) diameter={}",
            window.center().real,
            window.center().imag,
            window.diameter()
        );
        info!(
            "Max iterations: {}, palette: {}",
            config.max_iterations, config.colour_map_kind
        );

        let start = Instant::now();
        let buffer = render_frame(window, grid, config)?;
        let duration = start.elapsed();

        info!("Duration: {:?}", duration);

        self.buffer = Some(buffer);

        Ok(duration)
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let Some(buffer) = &self.buffer else {
            return Err(std::io::Error::other("no frame has been generated yet"));
        };

        let filepath = filepath.as_ref();
        self.presenter.present(buffer, filepath)?;
        info!("Wrote {}", filepath.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        presented: RefCell<Vec<(PathBuf, PixelGrid)>>,
    }

    impl FilePresenterPort for RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
            self.presented
                .borrow_mut()
                .push((filepath.to_path_buf(), buffer.grid()));
            Ok(())
        }
    }

    fn config() -> MandelbrotConfig {
        MandelbrotConfig {
            max_iterations: 16,
            ..MandelbrotConfig::default()
        }
    }

    #[test]
    fn write_before_generate_is_an_error() {
        let controller = FileRenderController::new(RecordingPresenter::default());

        assert!(controller.write("out.ppm").is_err());
        assert!(controller.presenter.presented.borrow().is_empty());
    }

    #[test]
    fn generate_then_write_presents_the_frame() {
        let grid = PixelGrid::new(12, 8).unwrap();
        let mut controller = FileRenderController::new(RecordingPresenter::default());

        controller.generate(ViewWindow::home(), grid, &config()).unwrap();
        controller.write("frames/out.ppm").unwrap();

        assert_eq!(controller.buffer().map(PixelBuffer::grid), Some(grid));
        assert_eq!(
            *controller.presenter.presented.borrow(),
            vec![(PathBuf::from("frames/out.ppm"), grid)]
        );
    }

    #[test]
    fn invalid_config_surfaces_render_error() {
        let grid = PixelGrid::new(4, 4).unwrap();
        let mut controller = FileRenderController::new(RecordingPresenter::default());
        let config = MandelbrotConfig {
            max_iterations: 0,
            ..config()
        };

        let result = controller.generate(ViewWindow::home(), grid, &config);

        assert!(matches!(result, Err(RenderFrameError::Config(_))));
        assert!(controller.buffer().is_none());
    }
}
