use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::core::actions::render_frame::{RenderFrameError, render_frame};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::view_window::ViewWindow;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::navigation::controller::ViewController;
use crate::core::navigation::controls::InputSnapshot;
use crate::core::navigation::settings::{NavigationSettings, NavigationSettingsError};
use crate::core::navigation::status::NavigationWarning;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerSessionError {
    Navigation(NavigationSettingsError),
    Config(MandelbrotError),
}

impl fmt::Display for ViewerSessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Navigation(err) => write!(f, "invalid navigation settings: {}", err),
            Self::Config(err) => write!(f, "invalid render config: {}", err),
        }
    }
}

impl Error for ViewerSessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Navigation(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<NavigationSettingsError> for ViewerSessionError {
    fn from(err: NavigationSettingsError) -> Self {
        Self::Navigation(err)
    }
}

impl From<MandelbrotError> for ViewerSessionError {
    fn from(err: MandelbrotError) -> Self {
        Self::Config(err)
    }
}

/// One interactive viewer: navigation state plus the render settings.
///
/// Each call to [`ViewerSession::frame`] reads one input snapshot, moves the
/// view, and renders only if the view or the grid differs from the last frame
/// that was rendered.
pub struct ViewerSession {
    controller: ViewController,
    config: MandelbrotConfig,
    last_rendered: Option<(ViewWindow, PixelGrid)>,
    last_render_duration: Option<Duration>,
}

impl ViewerSession {
    pub fn new(
        settings: NavigationSettings,
        config: MandelbrotConfig,
    ) -> Result<Self, ViewerSessionError> {
        config.validate()?;
        let controller = ViewController::new(settings)?;

        Ok(Self {
            controller,
            config,
            last_rendered: None,
            last_render_duration: None,
        })
    }

    pub fn frame(
        &mut self,
        input: &InputSnapshot,
        grid: PixelGrid,
    ) -> Result<Option<PixelBuffer>, RenderFrameError> {
        let report = self.controller.update(input, grid);
        let window = self.controller.window();

        match report.warning {
            Some(NavigationWarning::DiameterClamped) => {
                warn!("zoom limit reached, diameter held at {:e}", window.diameter());
            }
            Some(NavigationWarning::NonFiniteCenter) => {
                warn!("pan rejected, center would leave the representable range");
            }
            None => {}
        }

        if report.any_action() {
            debug!(
                "view center=({}, {}) diameter={:e}",
                window.center().real,
                window.center().imag,
                window.diameter()
            );
        }

        if self.last_rendered == Some((window, grid)) {
            return Ok(None);
        }

        let start = Instant::now();
        let buffer = render_frame(window, grid, &self.config)?;
        let elapsed = start.elapsed();

        debug!(
            "rendered {}x{} in {:?}",
            grid.width(),
            grid.height(),
            elapsed
        );

        self.last_rendered = Some((window, grid));
        self.last_render_duration = Some(elapsed);

        Ok(Some(buffer))
    }

    /// Forces the next frame to render even if nothing moved.
    pub fn invalidate(&mut self) {
        self.last_rendered = None;
    }

    pub fn set_config(&mut self, config: MandelbrotConfig) -> Result<(), MandelbrotError> {
        config.validate()?;

        if config != self.config {
            self.config = config;
            self.invalidate();
        }

        Ok(())
    }

    #[must_use]
    pub fn window(&self) -> ViewWindow {
        self.controller.window()
    }

    #[must_use]
    pub fn config(&self) -> MandelbrotConfig {
        self.config
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

    fn grid() -> PixelGrid {
        PixelGrid::new(24, 16).unwrap()
    }

    fn session() -> ViewerSession {
        let config = MandelbrotConfig {
            max_iterations: 32,
            ..MandelbrotConfig::default()
        };

        ViewerSession::new(NavigationSettings::default(), config).unwrap()
    }

    fn zoom_in() -> InputSnapshot {
        InputSnapshot {
            zoom_in_requested: true,
            ..InputSnapshot::default()
        }
    }

    #[test]
    fn first_frame_renders_home_view() {
        let mut session = session();

        let buffer = session.frame(&InputSnapshot::default(), grid()).unwrap();

        let buffer = buffer.expect("first frame must render");
        assert_eq!(buffer.grid(), grid());
        assert_eq!(session.window(), ViewWindow::home());
        assert!(session.last_render_duration().is_some());
    }

    #[test]
    fn idle_frame_skips_render() {
        let mut session = session();
        session.frame(&InputSnapshot::default(), grid()).unwrap();

        let second = session.frame(&InputSnapshot::default(), grid()).unwrap();

        assert!(second.is_none());
    }

    #[test]
    fn view_change_triggers_render_once_while_held() {
        let mut session = session();
        session.frame(&InputSnapshot::default(), grid()).unwrap();

        assert!(session.frame(&zoom_in(), grid()).unwrap().is_some());
        assert!(session.frame(&zoom_in(), grid()).unwrap().is_none());
        assert_eq!(session.window().diameter(), 2.25);
    }

    #[test]
    fn resize_triggers_render() {
        let mut session = session();
        session.frame(&InputSnapshot::default(), grid()).unwrap();

        let larger = PixelGrid::new(32, 32).unwrap();
        let buffer = session.frame(&InputSnapshot::default(), larger).unwrap();

        assert_eq!(buffer.map(|b| b.grid()), Some(larger));
    }

    #[test]
    fn held_reset_at_home_does_not_rerender() {
        let mut session = session();
        session.frame(&InputSnapshot::default(), grid()).unwrap();

        let reset = InputSnapshot {
            reset_requested: true,
            ..InputSnapshot::default()
        };

        assert!(session.frame(&reset, grid()).unwrap().is_none());
        assert_eq!(session.window(), ViewWindow::home());
    }

    #[test]
    fn invalidate_forces_render() {
        let mut session = session();
        session.frame(&InputSnapshot::default(), grid()).unwrap();

        session.invalidate();

        assert!(session.frame(&InputSnapshot::default(), grid()).unwrap().is_some());
    }

    #[test]
    fn palette_change_invalidates_but_same_config_does_not() {
        let mut session = session();
        session.frame(&InputSnapshot::default(), grid()).unwrap();

        session.set_config(session.config()).unwrap();
        assert!(session.frame(&InputSnapshot::default(), grid()).unwrap().is_none());

        let config = MandelbrotConfig {
            colour_map_kind: MandelbrotColourMapKinds::FireGradient,
            ..session.config()
        };
        session.set_config(config).unwrap();
        assert!(session.frame(&InputSnapshot::default(), grid()).unwrap().is_some());
    }

    #[test]
    fn zero_iterations_are_rejected() {
        let config = MandelbrotConfig {
            max_iterations: 0,
            ..MandelbrotConfig::default()
        };

        let result = ViewerSession::new(NavigationSettings::default(), config);

        assert!(matches!(
            result,
            Err(ViewerSessionError::Config(MandelbrotError::ZeroMaxIterationsError))
        ));
    }

    #[test]
    fn rejected_config_keeps_previous() {
        let mut session = session();
        let before = session.config();

        let result = session.set_config(MandelbrotConfig {
            max_iterations: 0,
            ..before
        });

        assert_eq!(result, Err(MandelbrotError::ZeroMaxIterationsError));
        assert_eq!(session.config(), before);
    }
}
