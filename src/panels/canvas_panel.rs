use egui::{Color32, Rect, Sense, pos2};

use crate::PaintApp;

/// The painting area: samples the pointer, runs the active stamp and shows the canvas.
pub fn canvas_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let available_size = ui.available_size();
            let (response, painter) = ui.allocate_painter(available_size, Sense::drag());
            let rect = response.rect;

            if app.take_reset_request() || app.canvas().is_empty() {
                let size = [rect.width().max(1.0) as usize, rect.height().max(1.0) as usize];
                app.canvas_mut().reset(size);
            }

            app.input_mut().set_canvas_rect(rect);
            if let Some(sample) = app.input_mut().process_input(ctx, &response) {
                let state = *app.state();
                let primitives = app.renderer_mut().render(&state, &sample);
                app.canvas_mut().paint(&primitives);
            }

            let [w, h] = app.canvas().size();
            let canvas_rect = Rect::from_min_size(rect.min, egui::vec2(w as f32, h as f32));
            if let Some(texture) = app.canvas_mut().texture(ctx) {
                painter.image(
                    texture.id(),
                    canvas_rect,
                    Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                    Color32::WHITE,
                );
            }
        });
}
