use egui::{Color32, Painter, Pos2, Shape, Stroke as EguiStroke, Vec2};

use super::Element;
use crate::raster::{Canvas, Rasterize};

/// Freehand poly-line piece rendered during a gesture
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeElement {
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
}

impl StrokeElement {
    pub fn new(points: Vec<Pos2>, width: f32, color: Color32) -> Self {
        Self {
            points,
            color,
            width,
        }
    }

    /// Get the points that make up this stroke
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Screen shapes for this stroke.
    ///
    /// egui lines have butt ends, so every vertex also gets a disc of the brush
    /// size. That rounds the caps and closes the wedge at each joint.
    fn shapes(&self, origin: Vec2) -> Vec<Shape> {
        let radius = self.width / 2.0;
        let mut shapes: Vec<Shape> = self
            .points
            .iter()
            .map(|p| Shape::circle_filled(*p + origin, radius, self.color))
            .collect();
        if self.points.len() > 1 {
            shapes.push(Shape::line(
                self.points.iter().map(|p| *p + origin).collect(),
                EguiStroke::new(self.width, self.color),
            ));
        }
        shapes
    }
}

impl Element for StrokeElement {
    fn element_type(&self) -> &'static str {
        "stroke"
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        painter.extend(self.shapes(origin));
    }
}

impl Rasterize for StrokeElement {
    fn rasterize(&self, canvas: &mut Canvas) {
        canvas.stroke_polyline(&self.points, self.width, self.color);
    }
}
