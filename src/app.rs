use crate::canvas::Canvas;
use crate::color::PaintColor;
use crate::config::PaintConfig;
use crate::export::Exporter;
use crate::input::{Action, InputHandler, shortcut_actions};
use crate::panels::{canvas_panel, toolbox_panel};
use crate::renderer::Renderer;
use crate::style::PaintState;

/// The painting app: toolbox on the left, canvas filling the rest.
///
/// Only `state` survives a restart; the painting itself is not persisted.
#[derive(Debug)]
pub struct PaintApp {
    state: PaintState,
    canvas: Canvas,
    input: InputHandler,
    renderer: Renderer,
    exporter: Exporter,
    reset_requested: bool,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_config(&PaintConfig::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: PaintConfig) -> Self {
        let mut app = Self::with_config(&config);
        if let Some(storage) = cc.storage {
            if let Some(state) = eframe::get_value::<PaintState>(storage, eframe::APP_KEY) {
                log::info!("Restored toolbox settings (stamp: {})", state.stamp);
                app.restore(state);
            }
        }
        app
    }

    /// Adopt settings saved by a previous run. Stored values are not trusted to be in range.
    pub(crate) fn restore(&mut self, mut state: PaintState) {
        state.style.set_brush_size(state.style.brush_size);
        self.state = state;
        self.canvas.set_background(state.background);
    }

    pub fn with_config(config: &PaintConfig) -> Self {
        Self {
            state: config.initial,
            canvas: Canvas::new(config.initial.background),
            input: InputHandler::new(),
            renderer: Renderer::new(),
            exporter: Exporter::new(&config.export_dir, &config.export_name),
            reset_requested: true,
        }
    }

    pub fn state(&self) -> &PaintState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PaintState {
        &mut self.state
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub(crate) fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub(crate) fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub(crate) fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    /// Change the background; the canvas is wiped on the next frame.
    pub fn set_background(&mut self, background: PaintColor) {
        self.state.background = background;
        self.canvas.set_background(background);
        self.reset_requested = true;
    }

    /// True once per requested reset; the canvas panel knows the size to reset to.
    pub(crate) fn take_reset_request(&mut self) -> bool {
        std::mem::take(&mut self.reset_requested)
    }

    pub fn perform(&mut self, action: Action) {
        match action {
            Action::ResetCanvas => {
                log::info!("Canvas reset requested after {} stamps", self.renderer.stamps_drawn());
                self.reset_requested = true;
            }
            Action::SaveCanvas => {
                if let Err(err) = self.exporter.save(self.canvas.pixels()) {
                    log::error!("Failed to save painting: {}", err);
                }
            }
            Action::ToggleRainbow => {
                self.state.style.toggle_rainbow();
                log::info!("Rainbow mode {}", if self.state.style.rainbow { "on" } else { "off" });
            }
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.state);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = shortcut_actions(ctx);
        actions.extend(toolbox_panel(self, ctx));
        for action in actions {
            self.perform(action);
        }

        canvas_panel(self, ctx);

        // The rainbow hue advances every frame, painting or not
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_from_config() {
        let mut config = PaintConfig::default();
        config.initial.background = PaintColor::BLACK;
        config.initial.style.opacity = 12;
        let app = PaintApp::with_config(&config);
        assert_eq!(app.state().style.opacity, 12);
        assert_eq!(app.canvas().background(), PaintColor::BLACK);
    }

    #[test]
    fn test_background_change_requests_reset() {
        let mut app = PaintApp::default();
        assert!(app.take_reset_request());
        assert!(!app.take_reset_request());

        app.set_background(PaintColor::WHITE);
        assert!(app.take_reset_request());
        assert_eq!(app.canvas().background(), PaintColor::WHITE);
    }

    #[test]
    fn test_restored_state_is_clamped() {
        let mut app = PaintApp::default();
        let mut stored = PaintState::default();
        stored.style.brush_size = 99.0;
        stored.background = PaintColor::BLACK;
        app.restore(stored);
        assert_eq!(app.state().style.brush_size, 16.0);
        assert_eq!(app.canvas().background(), PaintColor::BLACK);

        stored.style.brush_size = f32::NAN;
        app.restore(stored);
        assert_eq!(app.state().style.brush_size, 1.0);
    }

    #[test]
    fn test_toggle_rainbow_action() {
        let mut app = PaintApp::default();
        app.perform(Action::ToggleRainbow);
        assert!(app.state().style.rainbow);
        app.perform(Action::ToggleRainbow);
        assert!(!app.state().style.rainbow);
    }

    #[test]
    fn test_saving_empty_canvas_does_not_panic() {
        let mut config = PaintConfig::default();
        config.export_dir = std::env::temp_dir().join(format!("stamp_paint_app_{}", std::process::id()));
        let mut app = PaintApp::with_config(&config);
        app.perform(Action::SaveCanvas);
        assert!(!config.export_dir.join("painting.png").exists());
    }
}
