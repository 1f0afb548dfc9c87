use egui::Slider;

use crate::PaintApp;
use crate::event::EditorEvent;
use crate::style::{FillMode, MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH, QUICK_COLORS, color_hex};
use crate::tools::ToolKind;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    // Collected first so the editor is not borrowed while widgets are alive
    let mut events = Vec::new();

    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(180.0)
        .show(ctx, |ui| {
            let editor = app.editor();
            let active = editor.tool();
            let mut style = editor.style();
            let can_undo = editor.surface().can_undo();

            ui.heading("Tools");
            for kind in ToolKind::ALL {
                if ui.selectable_label(active == kind, kind.label()).clicked() {
                    log::info!("Tool selected from UI: {:?}", kind);
                    events.push(EditorEvent::ToolChanged(kind));
                }
            }
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Color:");
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut style.color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    events.push(EditorEvent::ColorChanged(style.color));
                }
            });

            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 2.0;
                for color in QUICK_COLORS {
                    let swatch = egui::Button::new("")
                        .fill(color)
                        .min_size(egui::vec2(16.0, 16.0));
                    if ui.add(swatch).on_hover_text(color_hex(color)).clicked() {
                        events.push(EditorEvent::ColorChanged(color));
                    }
                }
            });

            ui.horizontal(|ui| {
                ui.label("Size:");
                if ui
                    .add(Slider::new(&mut style.width, MIN_BRUSH_WIDTH..=MAX_BRUSH_WIDTH))
                    .changed()
                {
                    events.push(EditorEvent::BrushSizeChanged(style.width));
                }
            });

            // Live preview of the brush tip
            let preview_color = if active == ToolKind::Eraser {
                ui.visuals().weak_text_color()
            } else {
                style.color
            };
            let (response, painter) = ui.allocate_painter(
                egui::vec2(ui.available_width(), MAX_BRUSH_WIDTH + 4.0),
                egui::Sense::hover(),
            );
            painter.circle(
                response.rect.center(),
                style.width / 2.0,
                preview_color,
                egui::Stroke::new(1.0, egui::Color32::BLACK),
            );

            ui.label("Fill:");
            ui.horizontal(|ui| {
                for mode in FillMode::ALL {
                    if ui.radio(style.fill == mode, mode.label()).clicked() && style.fill != mode {
                        events.push(EditorEvent::FillModeChanged(mode));
                    }
                }
            });
            ui.separator();

            ui.horizontal(|ui| {
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    events.push(EditorEvent::UndoRequested);
                }
                if ui.button("Clear").clicked() {
                    events.push(EditorEvent::ClearRequested);
                }
            });
            ui.separator();

            ui.label("Save as PNG:");
            ui.text_edit_singleline(&mut app.settings_mut().export_path);
            if ui.button("Save").clicked() {
                events.push(EditorEvent::SaveRequested(app.export_path()));
            }
        });

    for event in events {
        app.dispatch(event);
    }
}
