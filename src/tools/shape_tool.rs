use egui::Pos2;
use log::debug;

use super::{ShapePreview, Tool};
use crate::element::ShapeKind;
use crate::style::Style;
use crate::surface::DrawingSurface;

/// Line, rectangle and oval tool. Renders once, on release.
#[derive(Debug, Clone)]
pub struct ShapeTool {
    kind: ShapeKind,
    drag: Option<ShapePreview>,
}

impl ShapeTool {
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind, drag: None }
    }
}

impl Tool for ShapeTool {
    fn name(&self) -> &'static str {
        match self.kind {
            ShapeKind::Line => "Line",
            ShapeKind::Rect => "Rectangle",
            ShapeKind::Oval => "Oval",
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2, _surface: &mut DrawingSurface, style: Style) {
        self.drag = Some(ShapePreview {
            kind: self.kind,
            start: pos,
            end: pos,
            style,
        });
    }

    fn on_pointer_move(&mut self, pos: Pos2, _surface: &mut DrawingSurface) {
        if let Some(drag) = self.drag.as_mut() {
            drag.end = pos;
        }
    }

    fn on_pointer_up(&mut self, pos: Pos2, surface: &mut DrawingSurface) {
        if let Some(drag) = self.drag.take() {
            let id = surface.render_shape(self.kind, drag.start, pos, drag.style);
            debug!("{} {:?} placed from {:?} to {:?}", self.name(), id, drag.start, pos);
        }
    }

    fn cancel(&mut self, _surface: &mut DrawingSurface) {
        // Nothing was rendered yet; dropping the preview is enough
        self.drag = None;
    }

    fn is_active(&self) -> bool {
        self.drag.is_some()
    }

    fn preview(&self) -> Option<ShapePreview> {
        self.drag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_preview_follows_pointer_until_release() {
        let mut tool = ShapeTool::new(ShapeKind::Rect);
        let mut surface = DrawingSurface::default();
        tool.on_pointer_down(pos2(1.0, 1.0), &mut surface, Style::default());
        tool.on_pointer_move(pos2(6.0, 4.0), &mut surface);
        assert_eq!(tool.preview().map(|p| p.end), Some(pos2(6.0, 4.0)));
        assert!(surface.is_empty());

        tool.on_pointer_up(pos2(7.0, 5.0), &mut surface);
        assert!(tool.preview().is_none());
        assert_eq!(surface.len(), 1);
    }

    #[test]
    fn test_cancel_renders_nothing() {
        let mut tool = ShapeTool::new(ShapeKind::Oval);
        let mut surface = DrawingSurface::default();
        tool.on_pointer_down(pos2(1.0, 1.0), &mut surface, Style::default());
        tool.cancel(&mut surface);
        assert!(surface.is_empty());
        assert!(!tool.is_active());
    }
}
