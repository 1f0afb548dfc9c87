use std::path::Path;

use egui::{Context, Key, Modifiers, Pos2, Rect, Response};

use crate::event::EditorEvent;

/// Converts raw egui input on the canvas into editor events.
///
/// Positions are made surface-local by subtracting the canvas origin.
#[derive(Debug, Default)]
pub struct InputHandler {
    pressed_in_canvas: bool,
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer events for this frame, in press, move, release order
    pub fn process_pointer(&mut self, ctx: &Context, response: &Response, canvas_rect: Rect) -> Vec<EditorEvent> {
        let mut events = Vec::new();
        let origin = canvas_rect.min.to_vec2();

        ctx.input(|input| {
            let pointer = &input.pointer;
            let Some(pos) = pointer.latest_pos() else {
                return;
            };
            let local = pos - origin;

            if pointer.primary_pressed() && response.contains_pointer() && canvas_rect.contains(pos) {
                self.pressed_in_canvas = true;
                events.push(EditorEvent::PointerDown(local));
            }

            if Some(pos) != self.last_pointer_pos {
                // Keep tracking outside the canvas while a drag is in progress
                if self.pressed_in_canvas || canvas_rect.contains(pos) {
                    events.push(EditorEvent::PointerMove(local));
                }
                self.last_pointer_pos = Some(pos);
            }

            if pointer.primary_released() && self.pressed_in_canvas {
                self.pressed_in_canvas = false;
                events.push(EditorEvent::PointerUp(local));
            }
        });

        events
    }

    /// Ctrl+Z undoes, Ctrl+S saves to `export_path`
    pub fn process_shortcuts(&self, ctx: &Context, export_path: &Path) -> Vec<EditorEvent> {
        let mut events = Vec::new();
        ctx.input_mut(|input| {
            if input.consume_key(Modifiers::COMMAND, Key::Z) {
                events.push(EditorEvent::UndoRequested);
            }
            if input.consume_key(Modifiers::COMMAND, Key::S) {
                events.push(EditorEvent::SaveRequested(export_path.to_path_buf()));
            }
        });
        events
    }
}
