//! Main GUI application loop.

use crate::controllers::interactive::ViewerSession;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::navigation::settings::NavigationSettings;
use crate::input::gui::input_state::RawInputState;
use crate::presenters::pixels::presenter::PixelsPresenter;
use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{error, info};
use std::error::Error;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowBuilder},
};

const WINDOW_TITLE: &str = "mandelbrot";
const MAX_ITERATIONS_SLIDER: u32 = 4096;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerOptions {
    pub width: u32,
    pub height: u32,
    pub settings: NavigationSettings,
    pub config: MandelbrotConfig,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            width: 720,
            height: 720,
            settings: NavigationSettings::default(),
            config: MandelbrotConfig::default(),
        }
    }
}

struct GuiApp {
    width: u32,
    height: u32,
    presenter: PixelsPresenter,
    session: ViewerSession,
    input: RawInputState,
    pending_config: MandelbrotConfig,
    last_error_message: Option<String>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl GuiApp {
    fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        session: ViewerSession,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Ok(Self {
            width: size.width,
            height: size.height,
            presenter: PixelsPresenter::new(window)?,
            pending_config: session.config(),
            session,
            input: RawInputState::default(),
            last_error_message: None,
            egui_ctx,
            egui_state,
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;
        self.presenter.resize(width, height)
    }

    /// Reads the accumulated input, advances the view and uploads a new frame
    /// if one was rendered.
    fn advance_frame(&mut self) {
        let input = self.input.snapshot();

        // minimised
        let Ok(grid) = PixelGrid::new(self.width, self.height) else {
            return;
        };

        match self.session.frame(&input, grid) {
            Ok(Some(buffer)) => {
                self.presenter.present(&buffer);
                self.last_error_message = None;
            }
            Ok(None) => {}
            Err(err) => {
                error!("Render error: {err}");
                self.last_error_message = Some(err.to_string());
            }
        }
    }

    fn apply_pending_config(&mut self) {
        if let Err(err) = self.session.set_config(self.pending_config) {
            self.last_error_message = Some(err.to_string());
            self.pending_config = self.session.config();
        }
    }

    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let view = self.session.window();

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("View")
                .default_pos([10.0, 10.0])
                .default_size([240.0, 200.0])
                .show(ctx, |ui| {
                    ui.label(format!(
                        "Center: {:.17} {:+.17}i",
                        view.center().real,
                        view.center().imag
                    ));
                    ui.label(format!("Diameter: {:.6e}", view.diameter()));
                    ui.separator();

                    ui.horizontal(|ui| {
                        ui.label("Max iterations:");
                        ui.add(egui::Slider::new(
                            &mut self.pending_config.max_iterations,
                            1..=MAX_ITERATIONS_SLIDER,
                        ));
                    });

                    ui.horizontal(|ui| {
                        ui.label("Palette:");
                        egui::ComboBox::from_id_source("mandelbrot_palette")
                            .selected_text(self.pending_config.colour_map_kind.display_name())
                            .show_ui(ui, |ui| {
                                for &kind in MandelbrotColourMapKinds::ALL {
                                    ui.selectable_value(
                                        &mut self.pending_config.colour_map_kind,
                                        kind,
                                        kind.display_name(),
                                    );
                                }
                            });
                    });

                    ui.separator();
                    ui.label(format!("Window size: {}x{}", self.width, self.height));
                    if let Some(duration) = self.session.last_render_duration() {
                        ui.label(format!("Last render: {} ms", duration.as_millis()));
                    }
                    ui.small("click: recenter   = / -: zoom   0: reset   esc: quit");

                    if let Some(message) = &self.last_error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        })
    }

    /// Forwards a window event to egui first, then to the raw input tracker.
    ///
    /// Presses that egui consumed (clicks on the overlay, typing into a widget)
    /// are not seen by the viewer; releases always are, so no control sticks.
    fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) {
        let response = self.egui_state.on_window_event(window, event);

        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } if !response.consumed || *state == ElementState::Released => {
                self.input.handle_key_event(*code, *state);
            }
            WindowEvent::MouseInput { state, button, .. }
                if !response.consumed || *state == ElementState::Released =>
            {
                self.input.handle_mouse_button(*button, *state);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.handle_cursor_moved(position.x, position.y);
            }
            WindowEvent::Focused(false) => self.input.release_all(),
            _ => {}
        }
    }
}

fn is_escape(event: &WindowEvent) -> bool {
    matches!(
        event,
        WindowEvent::KeyboardInput {
            event: KeyEvent {
                physical_key: PhysicalKey::Code(KeyCode::Escape),
                state: ElementState::Pressed,
                ..
            },
            ..
        }
    )
}

/// Runs the GUI application.
///
/// This function does not return until the window is closed.
pub fn run_gui(options: ViewerOptions) -> Result<(), Box<dyn Error>> {
    let session = ViewerSession::new(options.settings, options.config)?;
    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(
                f64::from(options.width),
                f64::from(options.height),
            ))
            .with_min_inner_size(LogicalSize::new(64.0, 64.0))
            .build(&event_loop)?,
    ));

    let mut app = GuiApp::new(window, &event_loop, session)?;

    info!(
        "Viewer started: {}x{}, max iterations {}, palette {}",
        app.width,
        app.height,
        options.config.max_iterations,
        options.config.colour_map_kind
    );

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => {
            if is_escape(event) {
                elwt.exit();
                return;
            }

            app.handle_window_event(window, event);

            match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                }
                WindowEvent::RedrawRequested => {
                    app.apply_pending_config();
                    app.advance_frame();

                    let mut egui_output = app.update_ui(window);
                    let platform_output = std::mem::take(&mut egui_output.platform_output);
                    app.egui_state.handle_platform_output(window, platform_output);

                    if let Err(err) = app.presenter.render(egui_output, &app.egui_ctx) {
                        error!("Surface error: {err}");
                        elwt.exit();
                    }
                }
                WindowEvent::Resized(size) => {
                    if let Err(err) = app.resize(size.width, size.height) {
                        error!("Resize error: {err}");
                        elwt.exit();
                    }
                }
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                    let size = window.inner_size();
                    if let Err(err) = app.resize(size.width, size.height) {
                        error!("Resize error: {err}");
                        elwt.exit();
                    }
                }
                _ => {}
            }
        }
        // One frame per loop iteration keeps a held reset applied every frame.
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;

    Ok(())
}
