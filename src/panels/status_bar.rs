use crate::PaintApp;
use crate::app::Notice;
use crate::style::color_hex;

pub fn status_bar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let editor = app.editor();
            ui.label(format!("Tool: {}", editor.tool().label()));
            ui.separator();
            ui.label(format!("Color: {}", color_hex(editor.style().color)));
            ui.separator();
            ui.label(format!("Brush: {:.0}px", editor.style().width));
            if let Some(pos) = editor.cursor() {
                ui.separator();
                ui.label(format!("Pos: {:.0},{:.0}", pos.x, pos.y));
            }

            match app.notice() {
                Some(Notice::Saved(path)) => {
                    ui.separator();
                    ui.label(format!("Canvas saved to {}", path.display()));
                }
                Some(Notice::SaveFailed(reason)) => {
                    ui.separator();
                    ui.colored_label(ui.visuals().error_fg_color, format!("Could not save image: {reason}"));
                }
                None => {}
            }
        });
    });
}
