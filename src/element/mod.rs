use egui::{Painter, Vec2};

pub(crate) mod common;
pub(crate) mod shape;
pub(crate) mod stroke;

pub use shape::{ShapeElement, ShapeKind};
pub use stroke::StrokeElement;

use crate::raster::{Canvas, Rasterize};

/// Common trait that all drawn items implement
pub trait Element {
    /// Get the element type as a string
    fn element_type(&self) -> &'static str;

    /// Draw the element on screen, shifted by the canvas origin
    fn draw(&self, painter: &Painter, origin: Vec2);
}

/// Enumeration of all element types on the surface
#[derive(Debug, Clone, PartialEq)]
pub enum ElementType {
    Stroke(StrokeElement),
    Shape(ShapeElement),
}

impl Element for ElementType {
    fn element_type(&self) -> &'static str {
        match self {
            ElementType::Stroke(s) => s.element_type(),
            ElementType::Shape(s) => s.element_type(),
        }
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        match self {
            ElementType::Stroke(s) => s.draw(painter, origin),
            ElementType::Shape(s) => s.draw(painter, origin),
        }
    }
}

impl Rasterize for ElementType {
    fn rasterize(&self, canvas: &mut Canvas) {
        match self {
            ElementType::Stroke(s) => s.rasterize(canvas),
            ElementType::Shape(s) => s.rasterize(canvas),
        }
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;
    use crate::style::Style;
    use egui::Pos2;

    /// Create a new stroke element
    pub fn create_stroke(points: Vec<Pos2>, style: Style) -> ElementType {
        ElementType::Stroke(StrokeElement::new(points, style.width, style.color))
    }

    /// Create a new shape element
    pub fn create_shape(kind: ShapeKind, start: Pos2, end: Pos2, style: Style) -> ElementType {
        ElementType::Shape(ShapeElement::new(kind, start, end, style))
    }
}
