use crate::core::data::complex::Complex;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::view_window::ViewWindow;
use crate::core::navigation::controls::{InputSnapshot, PressLatch};
use crate::core::navigation::settings::{NavigationSettings, NavigationSettingsError};
use crate::core::navigation::status::{NavigationWarning, ViewUpdateReport};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewStep {
    pub window: ViewWindow,
    pub latch: PressLatch,
    pub report: ViewUpdateReport,
}

/// Cursor position relative to the viewport center, as a fraction of the
/// viewport size, with `y` flipped to point up.
#[must_use]
pub fn pan_offset(cursor: (f64, f64), viewport: PixelGrid) -> (f64, f64) {
    let width = f64::from(viewport.width());
    let height = f64::from(viewport.height());

    let x = (cursor.0 - width / 2.0) / width;
    let y = -(cursor.1 - height / 2.0) / height;

    (x, y)
}

/// One frame of the view state machine.
///
/// Pan and both zooms fire on the press edge only. Reset is level-triggered and
/// applied last, so holding it pins the view to home regardless of anything
/// else pressed in the same frame. The returned latch always mirrors `input`.
#[must_use]
pub fn step_view(
    window: ViewWindow,
    previous: PressLatch,
    input: &InputSnapshot,
    viewport: PixelGrid,
    settings: &NavigationSettings,
) -> ViewStep {
    let edges = previous.rising_edges(input);
    let mut report = ViewUpdateReport::default();
    let mut next = window;

    if edges.primary_button {
        let (dx, dy) = pan_offset(input.cursor_position, viewport);
        let diameter = next.diameter();
        let center = Complex::new(
            next.center().real + dx * diameter,
            next.center().imag + dy * diameter,
        );

        match ViewWindow::new(center, diameter) {
            Ok(panned) => {
                next = panned;
                report.panned = true;
            }
            Err(_) => report.warning = Some(NavigationWarning::NonFiniteCenter),
        }
    }

    if edges.zoom_in {
        next = zoom(next, settings.zoom_in_factor, settings, &mut report);
        report.zoomed_in = true;
    }

    if edges.zoom_out {
        next = zoom(next, settings.zoom_out_factor, settings, &mut report);
        report.zoomed_out = true;
    }

    if input.reset_requested {
        next = settings.home;
        report.reset = true;
    }

    ViewStep {
        window: next,
        latch: PressLatch::from_snapshot(input),
        report,
    }
}

fn zoom(
    window: ViewWindow,
    factor: f64,
    settings: &NavigationSettings,
    report: &mut ViewUpdateReport,
) -> ViewWindow {
    let (diameter, clamped) = settings.clamp_diameter(window.diameter() * factor);

    if clamped {
        report.warning = Some(NavigationWarning::DiameterClamped);
    }

    ViewWindow::new(window.center(), diameter).unwrap_or(window)
}

/// Owns the view and the edge-detection latch between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewController {
    window: ViewWindow,
    latch: PressLatch,
    settings: NavigationSettings,
}

impl ViewController {
    pub fn new(settings: NavigationSettings) -> Result<Self, NavigationSettingsError> {
        Self::with_window(settings.home, settings)
    }

    pub fn with_window(
        window: ViewWindow,
        settings: NavigationSettings,
    ) -> Result<Self, NavigationSettingsError> {
        settings.validate()?;

        Ok(Self {
            window,
            latch: PressLatch::default(),
            settings,
        })
    }

    #[must_use]
    pub fn window(&self) -> ViewWindow {
        self.window
    }

    #[must_use]
    pub fn latch(&self) -> PressLatch {
        self.latch
    }

    #[must_use]
    pub fn settings(&self) -> &NavigationSettings {
        &self.settings
    }

    pub fn update(&mut self, input: &InputSnapshot, viewport: PixelGrid) -> ViewUpdateReport {
        let step = step_view(self.window, self.latch, input, viewport, &self.settings);

        self.window = step.window;
        self.latch = step.latch;
        step.report
    }
}
