use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::escape_time::PointClass;

const BASE_PHASE: f64 = 3.0;
const FREQUENCY: f64 = 0.15;
const CHANNEL_PHASES: [f64; 3] = [0.0, 0.6, 1.0];

/// Periodic palette `0.5 + 0.5·cos(3 + 0.15·n + phase)` over the smoothed
/// iteration count `n`, with per-channel phases `(0, 0.6, 1)`.
#[derive(Debug, Default)]
pub struct MandelbrotCosinePalette;

/// Unit-range RGB channels for a smoothed iteration count.
#[must_use]
pub fn cosine_channels(smooth_iteration_count: f64) -> [f64; 3] {
    CHANNEL_PHASES
        .map(|phase| 0.5 + 0.5 * (BASE_PHASE + smooth_iteration_count * FREQUENCY + phase).cos())
}

impl ColourMap<PointClass> for MandelbrotCosinePalette {
    fn map(&self, class: PointClass) -> Colour {
        match class.smooth_iteration_count() {
            Some(smooth) => Colour::from_unit_rgb(cosine_channels(smooth)),
            None => Colour::BLACK,
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotCosinePalette {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::Cosine
    }
}

impl MandelbrotCosinePalette {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}
