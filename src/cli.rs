//! Command-line configuration for both binaries.

use clap::{Parser, ValueEnum};

use crate::core::data::complex::Complex;
use crate::core::data::pixel_grid::{PixelGrid, PixelGridError};
use crate::core::data::view_window::{HOME_CENTER, HOME_DIAMETER, ViewWindow, ViewWindowError};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::mandelbrot_config::{DEFAULT_MAX_ITERATIONS, MandelbrotConfig};
use crate::core::navigation::settings::NavigationSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Palette {
    Cosine,
    Fire,
    BlueWhite,
}

impl From<Palette> for MandelbrotColourMapKinds {
    fn from(palette: Palette) -> Self {
        match palette {
            Palette::Cosine => Self::Cosine,
            Palette::Fire => Self::FireGradient,
            Palette::BlueWhite => Self::BlueWhiteGradient,
        }
    }
}

/// Render one view of the Mandelbrot set to a PPM file.
#[derive(Parser, Debug, Clone)]
#[command(name = "mandelbrot_viewer", version, about = "Render the Mandelbrot set to a PPM image")]
pub struct RenderArgs {
    #[arg(long, default_value_t = 720)]
    pub width: u32,

    #[arg(long, default_value_t = 720)]
    pub height: u32,

    #[arg(long, default_value_t = HOME_CENTER.real, allow_negative_numbers = true)]
    pub center_real: f64,

    #[arg(long, default_value_t = HOME_CENTER.imag, allow_negative_numbers = true)]
    pub center_imag: f64,

    /// Width and height of the visible square of the complex plane
    #[arg(long, default_value_t = HOME_DIAMETER)]
    pub diameter: f64,

    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    #[arg(long, value_enum, default_value_t = Palette::Cosine)]
    pub palette: Palette,

    #[arg(long, short, default_value = "output/mandelbrot.ppm")]
    pub output: String,
}

impl RenderArgs {
    pub fn grid(&self) -> Result<PixelGrid, PixelGridError> {
        PixelGrid::new(self.width, self.height)
    }

    pub fn window(&self) -> Result<ViewWindow, ViewWindowError> {
        ViewWindow::new(Complex::new(self.center_real, self.center_imag), self.diameter)
    }

    #[must_use]
    pub fn config(&self) -> MandelbrotConfig {
        MandelbrotConfig {
            max_iterations: self.max_iterations,
            colour_map_kind: self.palette.into(),
        }
    }
}

/// Interactive viewer window.
#[derive(Parser, Debug, Clone)]
#[command(name = "viewer", version, about = "Explore the Mandelbrot set interactively")]
pub struct ViewerArgs {
    #[arg(long, default_value_t = 720)]
    pub width: u32,

    #[arg(long, default_value_t = 720)]
    pub height: u32,

    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    #[arg(long, value_enum, default_value_t = Palette::Cosine)]
    pub palette: Palette,

    /// Smallest diameter zooming in may reach
    #[arg(long, default_value_t = f64::MIN_POSITIVE)]
    pub min_diameter: f64,

    /// Largest diameter zooming out may reach
    #[arg(long, default_value_t = f64::MAX)]
    pub max_diameter: f64,
}

impl ViewerArgs {
    #[must_use]
    pub fn config(&self) -> MandelbrotConfig {
        MandelbrotConfig {
            max_iterations: self.max_iterations,
            colour_map_kind: self.palette.into(),
        }
    }

    #[must_use]
    pub fn navigation_settings(&self) -> NavigationSettings {
        NavigationSettings {
            min_diameter: self.min_diameter,
            max_diameter: self.max_diameter,
            ..NavigationSettings::default()
        }
    }
}
