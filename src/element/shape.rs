use egui::{Painter, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2};
use serde::{Deserialize, Serialize};

use super::Element;
use crate::element::common;
use crate::raster::{Canvas, Rasterize};
use crate::style::Style;

/// Primitive drawn from a start point to an end point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Rect,
    Oval,
}

/// A line, rectangle or oval bounded by its drag corners
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeElement {
    kind: ShapeKind,
    start: Pos2,
    end: Pos2,
    style: Style,
}

impl ShapeElement {
    pub fn new(kind: ShapeKind, start: Pos2, end: Pos2, style: Style) -> Self {
        Self {
            kind,
            start,
            end,
            style,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn style(&self) -> Style {
        self.style
    }

    fn bounds(&self) -> Rect {
        common::rect_from_corners(self.start, self.end)
    }

    /// Outline vertices for closed shapes
    fn outline(&self) -> Vec<Pos2> {
        match self.kind {
            ShapeKind::Line => vec![self.start, self.end],
            ShapeKind::Rect => common::rect_outline(self.bounds()),
            ShapeKind::Oval => common::ellipse_outline(self.bounds()),
        }
    }
}

impl Element for ShapeElement {
    fn element_type(&self) -> &'static str {
        match self.kind {
            ShapeKind::Line => "line",
            ShapeKind::Rect => "rect",
            ShapeKind::Oval => "oval",
        }
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        let stroke = EguiStroke::new(self.style.width, self.style.color);
        if self.kind == ShapeKind::Line {
            painter.add(Shape::line_segment([self.start + origin, self.end + origin], stroke));
            return;
        }

        let points: Vec<Pos2> = self.outline().into_iter().map(|p| p + origin).collect();
        if self.style.fill.draws_fill() {
            painter.add(Shape::convex_polygon(points.clone(), self.style.color, EguiStroke::NONE));
        }
        if self.style.fill.draws_outline() {
            painter.add(Shape::closed_line(points, stroke));
        }
    }
}

impl Rasterize for ShapeElement {
    fn rasterize(&self, canvas: &mut Canvas) {
        let Style { color, width, fill } = self.style;
        if self.kind == ShapeKind::Line {
            canvas.stroke_polyline(&[self.start, self.end], width, color);
            return;
        }

        let outline = self.outline();
        if fill.draws_fill() {
            canvas.fill_polygon(&outline, color);
        }
        if fill.draws_outline() {
            canvas.stroke_polygon(&outline, width, color);
        }
    }
}
