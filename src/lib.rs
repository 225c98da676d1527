mod adapters;
pub mod cli;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use crate::controllers::file_render::FileRenderController;
pub use crate::controllers::interactive::{ViewerSession, ViewerSessionError};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::render_frame::{RenderFrameError, render_frame};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_grid::{PixelGrid, PixelGridError};
pub use crate::core::data::point::Point;
pub use crate::core::data::view_window::{ViewWindow, ViewWindowError};
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
pub use crate::core::fractals::mandelbrot::escape_time::{
    IterationResult, PointClass, classify_point, iterate,
};
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::core::navigation::{
    InputSnapshot, NavigationSettings, NavigationSettingsError, NavigationWarning, PressLatch,
    ViewController, ViewUpdateReport, step_view,
};
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::{ViewerOptions, run_gui};
