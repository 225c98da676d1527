//! Windowed viewer.
//!
//! winit for window management, pixels for the framebuffer, egui for the
//! status overlay.

mod app;
mod input_state;

pub use app::{ViewerOptions, run_gui};
