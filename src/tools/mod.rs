use egui::{Painter, Pos2, Shape, Stroke as EguiStroke, Vec2};
use serde::{Deserialize, Serialize};

use crate::element::{common, ShapeKind};
use crate::smoother::SmootherConfig;
use crate::style::Style;
use crate::surface::DrawingSurface;

mod freehand_tool;
mod shape_tool;

pub use freehand_tool::FreehandTool;
pub use shape_tool::ShapeTool;

/// Dash pattern of the live shape preview
const PREVIEW_DASH: f32 = 4.0;
const PREVIEW_GAP: f32 = 4.0;

/// Tools the user can pick in the side panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Freehand,
    Eraser,
    Line,
    Rectangle,
    Oval,
}

impl ToolKind {
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Freehand,
        ToolKind::Eraser,
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Oval,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ToolKind::Freehand => "Freehand",
            ToolKind::Eraser => "Eraser",
            ToolKind::Line => "Line",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Oval => "Oval",
        }
    }

    /// The primitive a shape tool draws, `None` for smoothed tools
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            ToolKind::Freehand | ToolKind::Eraser => None,
            ToolKind::Line => Some(ShapeKind::Line),
            ToolKind::Rectangle => Some(ShapeKind::Rect),
            ToolKind::Oval => Some(ShapeKind::Oval),
        }
    }
}

/// Outline of a shape while it is still being dragged
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapePreview {
    pub kind: ShapeKind,
    pub start: Pos2,
    pub end: Pos2,
    pub style: Style,
}

impl ShapePreview {
    /// Dashed outline, shifted by the canvas origin
    pub fn draw(&self, painter: &Painter, origin: Vec2) {
        let rect = common::rect_from_corners(self.start, self.end).translate(origin);
        let mut path = match self.kind {
            ShapeKind::Line => vec![self.start + origin, self.end + origin],
            ShapeKind::Rect => common::rect_outline(rect),
            ShapeKind::Oval => common::ellipse_outline(rect),
        };
        if self.kind != ShapeKind::Line {
            path.push(path[0]);
            if self.style.fill.draws_fill() {
                painter.add(Shape::convex_polygon(
                    path.clone(),
                    self.style.color.gamma_multiply(0.25),
                    EguiStroke::NONE,
                ));
            }
        }
        let stroke = EguiStroke::new(self.style.width, self.style.color);
        painter.extend(Shape::dashed_line(&path, stroke, PREVIEW_DASH, PREVIEW_GAP));
    }
}

/// Tool trait defines the interface for all drawing tools.
///
/// A tool captures the style at pointer-down and uses it for the whole gesture.
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Handle pointer press on the canvas
    fn on_pointer_down(&mut self, pos: Pos2, surface: &mut DrawingSurface, style: Style);

    /// Handle pointer drag while the pointer is held down
    fn on_pointer_move(&mut self, pos: Pos2, surface: &mut DrawingSurface);

    /// Handle pointer release; finalizes the gesture
    fn on_pointer_up(&mut self, pos: Pos2, surface: &mut DrawingSurface);

    /// End the gesture in progress without a release point
    fn cancel(&mut self, surface: &mut DrawingSurface);

    /// Whether a gesture is in progress
    fn is_active(&self) -> bool;

    /// Preview to paint on top of the surface
    fn preview(&self) -> Option<ShapePreview> {
        None
    }
}

/// Enum representing the instantiated tool, avoiding `Box<dyn Tool>`
#[derive(Debug, Clone)]
pub enum ActiveTool {
    Freehand(FreehandTool),
    Shape(ShapeTool),
}

impl ActiveTool {
    /// Create a fresh tool for `kind`. The eraser is a freehand tool; its color is set by the editor.
    pub fn new(kind: ToolKind, smoother: SmootherConfig) -> Self {
        match kind.shape_kind() {
            Some(shape) => Self::Shape(ShapeTool::new(shape)),
            None => Self::Freehand(FreehandTool::new(smoother)),
        }
    }
}

impl Tool for ActiveTool {
    fn name(&self) -> &'static str {
        match self {
            Self::Freehand(tool) => tool.name(),
            Self::Shape(tool) => tool.name(),
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2, surface: &mut DrawingSurface, style: Style) {
        match self {
            Self::Freehand(tool) => tool.on_pointer_down(pos, surface, style),
            Self::Shape(tool) => tool.on_pointer_down(pos, surface, style),
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2, surface: &mut DrawingSurface) {
        match self {
            Self::Freehand(tool) => tool.on_pointer_move(pos, surface),
            Self::Shape(tool) => tool.on_pointer_move(pos, surface),
        }
    }

    fn on_pointer_up(&mut self, pos: Pos2, surface: &mut DrawingSurface) {
        match self {
            Self::Freehand(tool) => tool.on_pointer_up(pos, surface),
            Self::Shape(tool) => tool.on_pointer_up(pos, surface),
        }
    }

    fn cancel(&mut self, surface: &mut DrawingSurface) {
        match self {
            Self::Freehand(tool) => tool.cancel(surface),
            Self::Shape(tool) => tool.cancel(surface),
        }
    }

    fn is_active(&self) -> bool {
        match self {
            Self::Freehand(tool) => tool.is_active(),
            Self::Shape(tool) => tool.is_active(),
        }
    }

    fn preview(&self) -> Option<ShapePreview> {
        match self {
            Self::Freehand(tool) => tool.preview(),
            Self::Shape(tool) => tool.preview(),
        }
    }
}
