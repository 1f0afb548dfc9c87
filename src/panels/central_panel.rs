use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            app.editor_mut()
                .surface_mut()
                .resize(canvas_rect.width() as u32, canvas_rect.height() as u32);

            let events = app.input_mut().process_pointer(ctx, &response, canvas_rect);
            for event in events {
                app.dispatch(event);
            }

            let editor = app.editor();
            editor.surface().draw(&painter, canvas_rect);
            if let Some(preview) = editor.preview() {
                preview.draw(&painter.with_clip_rect(canvas_rect), canvas_rect.min.to_vec2());
            }

            if editor.gesture().is_dragging() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }
        });
}
