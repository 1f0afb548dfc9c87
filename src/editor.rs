use egui::Pos2;
use log::{debug, error, info};

use crate::error::ExportResult;
use crate::event::EditorEvent;
use crate::settings::AppSettings;
use crate::smoother::SmootherConfig;
use crate::state::GestureState;
use crate::style::Style;
use crate::surface::DrawingSurface;
use crate::tools::{ActiveTool, ShapePreview, Tool, ToolKind};

/// Single-threaded dispatcher between input events, the active tool and the surface.
///
/// The current style lives here and is handed to the tool at pointer-down;
/// style changes during a drag apply to the next gesture.
#[derive(Debug, Clone)]
pub struct Editor {
    surface: DrawingSurface,
    style: Style,
    tool_kind: ToolKind,
    tool: ActiveTool,
    smoother: SmootherConfig,
    gesture: GestureState,
    cursor: Option<Pos2>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(&AppSettings::default())
    }
}

impl Editor {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            surface: DrawingSurface::new(0, 0, settings.background),
            style: Style::new(settings.style.color, settings.style.width, settings.style.fill),
            tool_kind: settings.tool,
            tool: ActiveTool::new(settings.tool, settings.smoother),
            smoother: settings.smoother,
            gesture: GestureState::Idle,
            cursor: None,
        }
    }

    /// Same as [`Editor::new`] but with an explicit surface
    pub fn with_surface(settings: &AppSettings, surface: DrawingSurface) -> Self {
        Self {
            surface,
            ..Self::new(settings)
        }
    }

    /// Write the editor's current choices back into `settings`
    pub fn store_settings(&self, settings: &mut AppSettings) {
        settings.style = self.style;
        settings.tool = self.tool_kind;
        settings.smoother = self.smoother;
        settings.background = self.surface.background();
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut DrawingSurface {
        &mut self.surface
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn tool(&self) -> ToolKind {
        self.tool_kind
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    /// Last pointer position seen, for the status bar
    pub fn cursor(&self) -> Option<Pos2> {
        self.cursor
    }

    pub fn preview(&self) -> Option<ShapePreview> {
        self.tool.preview()
    }

    /// Style the active tool paints with; the eraser paints the background color
    pub fn effective_style(&self) -> Style {
        match self.tool_kind {
            ToolKind::Eraser => self.style.with_color(self.surface.background()),
            _ => self.style,
        }
    }

    /// Apply one event. Only saving can fail; the surface is untouched when it does.
    pub fn handle_event(&mut self, event: EditorEvent) -> ExportResult<()> {
        if let Some(pos) = event.position() {
            self.cursor = Some(pos);
        }

        match event {
            EditorEvent::PointerDown(pos) => {
                if self.gesture.is_dragging() {
                    debug!("Ignoring pointer-down at {:?} during a drag", pos);
                    return Ok(());
                }
                self.gesture = GestureState::Dragging { start: pos };
                let style = self.effective_style();
                self.tool.on_pointer_down(pos, &mut self.surface, style);
            }
            EditorEvent::PointerMove(pos) => {
                if self.gesture.is_dragging() {
                    self.tool.on_pointer_move(pos, &mut self.surface);
                }
            }
            EditorEvent::PointerUp(pos) => {
                if self.gesture.is_dragging() {
                    self.tool.on_pointer_up(pos, &mut self.surface);
                    self.gesture = GestureState::Idle;
                }
            }
            EditorEvent::ToolChanged(kind) => {
                if kind != self.tool_kind {
                    self.finish_gesture();
                    info!("Tool changed: {} -> {}", self.tool.name(), kind.label());
                    self.tool_kind = kind;
                    self.tool = ActiveTool::new(kind, self.smoother);
                }
            }
            EditorEvent::ColorChanged(color) => {
                self.style = self.style.with_color(color);
            }
            EditorEvent::BrushSizeChanged(width) => {
                self.style = self.style.with_width(width);
            }
            EditorEvent::FillModeChanged(fill) => {
                self.style = self.style.with_fill(fill);
            }
            EditorEvent::UndoRequested => {
                self.finish_gesture();
                if !self.surface.undo() {
                    debug!("Nothing to undo");
                }
            }
            EditorEvent::ClearRequested => {
                self.finish_gesture();
                self.surface.clear();
            }
            EditorEvent::SaveRequested(path) => {
                if let Err(err) = self.surface.export(&path) {
                    error!("Could not save {}: {}", path.display(), err);
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// Close a drag in progress, keeping whatever it already drew
    fn finish_gesture(&mut self) {
        if self.gesture.is_dragging() {
            self.tool.cancel(&mut self.surface);
            self.gesture = GestureState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, Color32};

    #[test]
    fn test_eraser_paints_background() {
        let mut editor = Editor::default();
        editor.handle_event(EditorEvent::ColorChanged(Color32::RED)).unwrap();
        assert_eq!(editor.effective_style().color, Color32::RED);
        editor.handle_event(EditorEvent::ToolChanged(ToolKind::Eraser)).unwrap();
        assert_eq!(editor.effective_style().color, editor.surface().background());
    }

    #[test]
    fn test_second_pointer_down_is_ignored() {
        let mut editor = Editor::default();
        editor.handle_event(EditorEvent::PointerDown(pos2(1.0, 1.0))).unwrap();
        editor.handle_event(EditorEvent::PointerDown(pos2(9.0, 9.0))).unwrap();
        assert_eq!(editor.gesture(), GestureState::Dragging { start: pos2(1.0, 1.0) });
        assert_eq!(editor.cursor(), Some(pos2(9.0, 9.0)));
    }

    #[test]
    fn test_settings_round_trip_through_editor() {
        let mut settings = AppSettings::default();
        settings.tool = ToolKind::Oval;
        settings.style = Style::default().with_width(12.0);
        let editor = Editor::new(&settings);

        let mut stored = AppSettings::default();
        editor.store_settings(&mut stored);
        assert_eq!(stored.tool, ToolKind::Oval);
        assert_eq!(stored.style.width, 12.0);
    }

    #[test]
    fn test_stored_width_above_range_is_clamped() {
        let mut settings = AppSettings::default();
        settings.style.width = 50.0;
        let editor = Editor::new(&settings);
        assert_eq!(editor.style().width, crate::style::MAX_BRUSH_WIDTH);
    }
}
