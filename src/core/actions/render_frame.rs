use std::error::Error;
use std::fmt;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::view_window::ViewWindow;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderFrameError {
    Config(MandelbrotError),
    Algorithm(PixelToComplexCoordsError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid render config: {}", err),
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Algorithm(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for RenderFrameError {
    fn from(err: MandelbrotError) -> Self {
        Self::Config(err)
    }
}

impl From<PixelToComplexCoordsError> for RenderFrameError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<PixelBufferError> for RenderFrameError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Evaluates and colours every pixel of `grid` for the given view.
///
/// `window` is taken by value; the parallel stage only ever sees this copy.
pub fn render_frame(
    window: ViewWindow,
    grid: PixelGrid,
    config: &MandelbrotConfig,
) -> Result<PixelBuffer, RenderFrameError> {
    let algorithm = config.build_algorithm(grid, window)?;
    let classes = generate_fractal_parallel_rayon(grid, &algorithm)?;
    let colour_map = config.build_colour_map();

    Ok(generate_pixel_buffer(classes, colour_map.as_ref(), grid)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;
    use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
    use crate::core::fractals::mandelbrot::colour_mapping::maps::cosine::MandelbrotCosinePalette;

    #[test]
    fn home_view_has_black_center_and_coloured_corners() {
        let grid = PixelGrid::new(64, 64).unwrap();

        let buffer = render_frame(ViewWindow::home(), grid, &MandelbrotConfig::default()).unwrap();

        assert_eq!(buffer.grid(), grid);
        assert_eq!(buffer.pixel(Point { x: 32, y: 32 }), Ok(Colour::BLACK));
        assert_ne!(buffer.pixel(Point { x: 0, y: 0 }), Ok(Colour::BLACK));
        assert_ne!(buffer.pixel(Point { x: 63, y: 63 }), Ok(Colour::BLACK));
        assert!(buffer.buffer().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn top_buffer_row_shows_the_upper_half_plane() {
        let window = ViewWindow::new(Complex::new(-0.1, 0.85), 0.2).unwrap();
        let grid = PixelGrid::new(4, 4).unwrap();
        let algorithm = MandelbrotAlgorithm::new(grid, window, 512).unwrap();
        let palette = MandelbrotCosinePalette::new();

        let buffer = render_frame(window, grid, &MandelbrotConfig::default()).unwrap();

        // buffer (x, 0) is algorithm (x, height - 1)
        for x in 0..4 {
            assert_eq!(
                buffer.pixel(Point { x, y: 0 }),
                Ok(algorithm.shade(Point { x, y: 3 }, &palette).unwrap())
            );
            assert_eq!(
                buffer.pixel(Point { x, y: 3 }),
                Ok(algorithm.shade(Point { x, y: 0 }, &palette).unwrap())
            );
        }
    }

    #[test]
    fn parallel_frame_matches_sequential_evaluation() {
        let window = ViewWindow::new(Complex::new(-0.75, 0.1), 0.05).unwrap();
        let grid = PixelGrid::new(40, 30).unwrap();
        let config = MandelbrotConfig::default();
        let algorithm = config.build_algorithm(grid, window).unwrap();

        let expected = generate_pixel_buffer(
            generate_fractal(grid, &algorithm).unwrap(),
            config.build_colour_map().as_ref(),
            grid,
        )
        .unwrap();

        assert_eq!(render_frame(window, grid, &config).unwrap(), expected);
    }

    #[test]
    fn rendering_twice_is_bit_identical() {
        let window = ViewWindow::new(Complex::new(-1.25, 0.02), 0.01).unwrap();
        let grid = PixelGrid::new(32, 24).unwrap();
        let config = MandelbrotConfig::default();

        assert_eq!(
            render_frame(window, grid, &config).unwrap(),
            render_frame(window, grid, &config).unwrap()
        );
    }

    #[test]
    fn zero_iterations_is_reported() {
        let config = MandelbrotConfig {
            max_iterations: 0,
            ..MandelbrotConfig::default()
        };

        let result = render_frame(ViewWindow::home(), PixelGrid::new(2, 2).unwrap(), &config);

        assert_eq!(result, Err(RenderFrameError::Config(MandelbrotError::ZeroMaxIterationsError)));
    }
}
