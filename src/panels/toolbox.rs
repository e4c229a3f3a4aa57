use egui::Slider;

use crate::PaintApp;
use crate::color::PaintColor;
use crate::input::Action;
use crate::stamp::Stamp;
use crate::style::{BRUSH_SIZE_RANGE, BRUSH_SIZE_STEP};

/// The left-hand toolbox. Returns the canvas actions its buttons triggered.
pub fn toolbox_panel(app: &mut PaintApp, ctx: &egui::Context) -> Vec<Action> {
    let mut actions = Vec::new();

    egui::SidePanel::left("toolbox_panel")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Styles");
            styles_section(app, ui);
            ui.separator();

            ui.heading("Canvas");
            ui.horizontal(|ui| {
                if ui.button("Save").on_hover_text("Shortcut: S").clicked() {
                    actions.push(Action::SaveCanvas);
                }
                if ui.button("Reset").on_hover_text("Shortcut: Backspace").clicked() {
                    actions.push(Action::ResetCanvas);
                }
            });
            ui.separator();

            ui.heading("Background");
            ui.horizontal(|ui| {
                ui.label("Background color");
                let mut srgb = app.state().background.to_srgb();
                if ui.color_edit_button_srgb(&mut srgb).changed() {
                    let background = PaintColor::from_srgb(srgb);
                    log::info!("Background color changed to {}", background.to_hex());
                    app.set_background(background);
                }
            });
        });

    actions
}

fn styles_section(app: &mut PaintApp, ui: &mut egui::Ui) {
    let state = app.state_mut();

    let previous = state.stamp;
    egui::ComboBox::from_label("Paintbrush style")
        .selected_text(state.stamp.label())
        .show_ui(ui, |ui| {
            for stamp in Stamp::ALL {
                ui.selectable_value(&mut state.stamp, stamp, stamp.label());
            }
        });
    if state.stamp != previous {
        log::info!("Stamp selected from UI: {}", state.stamp);
    }

    ui.horizontal(|ui| {
        ui.label("Paint color");
        let mut srgb = state.style.paint_color.to_srgb();
        if ui.color_edit_button_srgb(&mut srgb).changed() {
            state.style.set_paint_color(PaintColor::from_srgb(srgb));
        }
    });

    if ui
        .selectable_label(state.style.rainbow, "Rainbow color 🌈")
        .on_hover_text("Shortcut: R")
        .clicked()
    {
        state.style.toggle_rainbow();
    }

    ui.add(Slider::new(&mut state.style.opacity, 0..=255).text("Opacity"));

    let mut size = state.style.brush_size;
    if ui
        .add(Slider::new(&mut size, BRUSH_SIZE_RANGE).step_by(BRUSH_SIZE_STEP).text("Brush size"))
        .changed()
    {
        state.style.set_brush_size(size);
    }
}
