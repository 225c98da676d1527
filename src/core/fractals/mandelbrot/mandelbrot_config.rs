use crate::core::{
    data::{pixel_grid::PixelGrid, view_window::ViewWindow},
    fractals::mandelbrot::{
        algorithm::MandelbrotAlgorithm,
        colour_mapping::{
            factory::mandelbrot_colour_map_factory, kinds::MandelbrotColourMapKinds,
            map::MandelbrotColourMap,
        },
        errors::MandelbrotError,
    },
};

pub const DEFAULT_MAX_ITERATIONS: u32 = 512;

/// Rendering options that stay fixed while the view moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotConfig {
    pub max_iterations: u32,
    pub colour_map_kind: MandelbrotColourMapKinds,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_map_kind: MandelbrotColourMapKinds::default(),
        }
    }
}

impl MandelbrotConfig {
    pub fn validate(&self) -> Result<(), MandelbrotError> {
        if self.max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(())
    }

    pub fn build_algorithm(
        &self,
        grid: PixelGrid,
        window: ViewWindow,
    ) -> Result<MandelbrotAlgorithm, MandelbrotError> {
        MandelbrotAlgorithm::new(grid, window, self.max_iterations)
    }

    #[must_use]
    pub fn build_colour_map(&self) -> Box<dyn MandelbrotColourMap> {
        mandelbrot_colour_map_factory(self.colour_map_kind, self.max_iterations)
    }
}
