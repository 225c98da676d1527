use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use crate::core::data::view_window::ViewWindow;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::escape_time::{PointClass, classify_point};
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Escape-time evaluator for one frame.
///
/// Holds a snapshot of the view and raster size; evaluating a pixel touches no
/// shared state, so the whole grid can be computed concurrently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    grid: PixelGrid,
    window: ViewWindow,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = PointClass;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.grid, self.window)?;

        Ok(classify_point(c, self.max_iterations))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        grid: PixelGrid,
        window: ViewWindow,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self {
            grid,
            window,
            max_iterations,
        })
    }

    #[must_use]
    pub fn grid(&self) -> PixelGrid {
        self.grid
    }

    #[must_use]
    pub fn window(&self) -> ViewWindow {
        self.window
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Classifies and colours a single pixel.
    pub fn shade<CMap>(&self, pixel: Point, colour_map: &CMap) -> Result<Colour, PixelToComplexCoordsError>
    where
        CMap: ColourMap<PointClass> + ?Sized,
    {
        self.compute(pixel).map(|class| colour_map.map(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::fractals::mandelbrot::colour_mapping::maps::cosine::MandelbrotCosinePalette;

    fn algorithm(width: u32, height: u32, window: ViewWindow) -> MandelbrotAlgorithm {
        MandelbrotAlgorithm::new(PixelGrid::new(width, height).unwrap(), window, 512).unwrap()
    }

    #[test]
    fn zero_max_iterations_is_rejected() {
        let result = MandelbrotAlgorithm::new(PixelGrid::new(4, 4).unwrap(), ViewWindow::home(), 0);

        assert_eq!(result, Err(MandelbrotError::ZeroMaxIterationsError));
    }

    #[test]
    fn center_of_home_view_is_black() {
        let alg = algorithm(720, 720, ViewWindow::home());
        let palette = MandelbrotCosinePalette::new();

        // (360, 360) maps to -0.5 + 0i, inside the main cardioid
        assert_eq!(alg.compute(Point { x: 360, y: 360 }), Ok(PointClass::MainCardioid));
        assert_eq!(alg.shade(Point { x: 360, y: 360 }, &palette), Ok(Colour::BLACK));
    }

    #[test]
    fn corner_of_home_view_is_coloured_and_opaque() {
        let alg = algorithm(720, 720, ViewWindow::home());
        let palette = MandelbrotCosinePalette::new();

        // (0, 0) maps to -2 - 1.5i, well outside the set
        let colour = alg.shade(Point { x: 0, y: 0 }, &palette).unwrap();

        assert_ne!(colour, Colour::BLACK);
        assert_eq!(colour.a, 255);
    }

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let window = ViewWindow::new(Complex::new(-0.743_643_887, 0.131_825_904), 1e-6).unwrap();
        let alg = algorithm(64, 48, window);
        let palette = MandelbrotCosinePalette::new();

        for pixel in [Point { x: 0, y: 0 }, Point { x: 17, y: 31 }, Point { x: 63, y: 47 }] {
            let first = alg.compute(pixel).unwrap();
            let second = alg.compute(pixel).unwrap();

            assert_eq!(first, second);
            if let (Some(a), Some(b)) = (first.smooth_iteration_count(), second.smooth_iteration_count()) {
                assert_eq!(a.to_bits(), b.to_bits());
            }
            assert_eq!(alg.shade(pixel, &palette), alg.shade(pixel, &palette));
        }
    }

    #[test]
    fn pixel_outside_grid_is_an_error() {
        let alg = algorithm(10, 10, ViewWindow::home());

        assert!(matches!(
            alg.compute(Point { x: 10, y: 0 }),
            Err(PixelToComplexCoordsError::PointOutsideGrid { .. })
        ));
    }
}
