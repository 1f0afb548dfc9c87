use egui::Pos2;
use log::debug;

use super::Tool;
use crate::smoother::{SmootherConfig, StrokeSmoother};
use crate::style::Style;
use crate::surface::DrawingSurface;

/// Transient state of a stroke being drawn
#[derive(Debug, Clone)]
struct StrokeInProgress {
    style: Style,
    start: Pos2,
    segments: usize,
}

/// Smoothed freehand drawing. Also used by the eraser.
#[derive(Debug, Clone)]
pub struct FreehandTool {
    smoother: StrokeSmoother,
    current: Option<StrokeInProgress>,
}

impl FreehandTool {
    pub fn new(config: SmootherConfig) -> Self {
        Self {
            smoother: StrokeSmoother::new(config),
            current: None,
        }
    }

    fn finish(&mut self, surface: &mut DrawingSurface) {
        let Some(stroke) = self.current.take() else {
            return;
        };
        if stroke.segments == 0 {
            // A tap: leave a dot so the click is visible
            surface.render_segment(vec![stroke.start], stroke.style);
        }
        debug!("Stroke finished after {} segment(s)", stroke.segments.max(1));
        surface.end_gesture();
        self.smoother.reset();
    }
}

impl Tool for FreehandTool {
    fn name(&self) -> &'static str {
        "Freehand"
    }

    fn on_pointer_down(&mut self, pos: Pos2, surface: &mut DrawingSurface, style: Style) {
        surface.begin_gesture();
        self.smoother.reset();
        self.smoother.feed(pos);
        self.current = Some(StrokeInProgress {
            style,
            start: pos,
            segments: 0,
        });
    }

    fn on_pointer_move(&mut self, pos: Pos2, surface: &mut DrawingSurface) {
        let Some(stroke) = self.current.as_mut() else {
            return;
        };
        let previous = self.smoother.last_point();
        let points = match self.smoother.feed(pos) {
            Some(segment) => segment.into_points(),
            // Not enough history yet: straight line from the last raw point
            None => match previous {
                Some(previous) => vec![previous, pos],
                None => vec![pos],
            },
        };
        surface.render_segment(points, stroke.style);
        stroke.segments += 1;
    }

    fn on_pointer_up(&mut self, pos: Pos2, surface: &mut DrawingSurface) {
        if self.current.is_some() && self.smoother.last_point() != Some(pos) {
            self.on_pointer_move(pos, surface);
        }
        self.finish(surface);
    }

    fn cancel(&mut self, surface: &mut DrawingSurface) {
        self.finish(surface);
    }

    fn is_active(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_first_move_falls_back_to_straight_line() {
        let mut tool = FreehandTool::new(SmootherConfig::default());
        let mut surface = DrawingSurface::default();
        tool.on_pointer_down(pos2(0.0, 0.0), &mut surface, Style::default());
        tool.on_pointer_move(pos2(4.0, 0.0), &mut surface);

        let crate::element::ElementType::Stroke(stroke) = &surface.items()[0].element else {
            panic!("expected a stroke");
        };
        assert_eq!(stroke.points(), &[pos2(0.0, 0.0), pos2(4.0, 0.0)]);
    }

    #[test]
    fn test_segments_chain_end_to_end() {
        let mut tool = FreehandTool::new(SmootherConfig::default());
        let mut surface = DrawingSurface::default();
        tool.on_pointer_down(pos2(0.0, 0.0), &mut surface, Style::default());
        for p in [pos2(5.0, 2.0), pos2(9.0, 7.0), pos2(12.0, 3.0), pos2(20.0, 0.0)] {
            tool.on_pointer_move(p, &mut surface);
        }
        tool.on_pointer_up(pos2(20.0, 0.0), &mut surface);

        let strokes: Vec<_> = surface
            .items()
            .iter()
            .map(|item| match &item.element {
                crate::element::ElementType::Stroke(s) => s.points().to_vec(),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(strokes.len(), 4);
        for pair in strokes.windows(2) {
            assert_eq!(pair[0].last(), pair[1].first());
        }
    }

    #[test]
    fn test_tap_leaves_dot() {
        let mut tool = FreehandTool::new(SmootherConfig::default());
        let mut surface = DrawingSurface::default();
        tool.on_pointer_down(pos2(3.0, 3.0), &mut surface, Style::default());
        tool.on_pointer_up(pos2(3.0, 3.0), &mut surface);
        assert_eq!(surface.len(), 1);
        assert!(!tool.is_active());
        assert!(surface.open_gesture().is_none());
    }

    #[test]
    fn test_release_elsewhere_extends_stroke() {
        let mut tool = FreehandTool::new(SmootherConfig::default());
        let mut surface = DrawingSurface::default();
        tool.on_pointer_down(pos2(0.0, 0.0), &mut surface, Style::default());
        tool.on_pointer_up(pos2(8.0, 8.0), &mut surface);
        assert_eq!(surface.len(), 1);
    }
}
