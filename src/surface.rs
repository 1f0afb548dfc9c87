use std::path::Path;

use egui::{Color32, Painter, Pos2, Rect};
use image::RgbaImage;
use log::{debug, info, warn};

use crate::element::{factory, Element, ShapeKind};
use crate::error::ExportResult;
use crate::history::{DrawnItem, ItemHistory};
use crate::id_generator::{GestureId, IdGenerator, ItemId};
use crate::raster::Canvas;
use crate::style::Style;

pub const DEFAULT_BACKGROUND: Color32 = Color32::WHITE;

/// Owns every rendered item and knows how to show, undo, clear and export them.
///
/// Coordinates are surface-local pixels with the origin at the top-left corner.
#[derive(Debug, Clone)]
pub struct DrawingSurface {
    history: ItemHistory,
    ids: IdGenerator,
    open_gesture: Option<GestureId>,
    width: u32,
    height: u32,
    background: Color32,
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new(0, 0, DEFAULT_BACKGROUND)
    }
}

impl DrawingSurface {
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self {
            history: ItemHistory::new(),
            ids: IdGenerator::new(),
            open_gesture: None,
            width,
            height,
            background,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Follow the visible canvas size. Items are kept as they are.
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) != (self.width, self.height) {
            debug!("Surface resized to {}x{}", width, height);
            self.width = width;
            self.height = height;
        }
    }

    /// Color the eraser paints with
    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn history(&self) -> &ItemHistory {
        &self.history
    }

    pub fn items(&self) -> &[DrawnItem] {
        self.history.items()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Start grouping segments so one undo removes the whole stroke
    pub fn begin_gesture(&mut self) -> GestureId {
        let gesture = self.ids.next_gesture();
        if let Some(previous) = self.open_gesture.replace(gesture) {
            warn!("Gesture {:?} was still open when {:?} began", previous, gesture);
        }
        gesture
    }

    pub fn end_gesture(&mut self) {
        self.open_gesture = None;
    }

    pub fn open_gesture(&self) -> Option<GestureId> {
        self.open_gesture
    }

    /// Draw a connected poly-line through `points` and record it.
    ///
    /// Items rendered while a gesture is open belong to it.
    pub fn render_segment(&mut self, points: Vec<Pos2>, style: Style) -> ItemId {
        self.push(factory::create_stroke(points, style))
    }

    /// Draw a line, rectangle or oval bounded by `start` and `end` and record it.
    ///
    /// `start == end` is valid and produces a point-sized (or invisible) item.
    pub fn render_shape(&mut self, kind: ShapeKind, start: Pos2, end: Pos2, style: Style) -> ItemId {
        self.push(factory::create_shape(kind, start, end, style))
    }

    fn push(&mut self, element: crate::element::ElementType) -> ItemId {
        let id = self.ids.next_item();
        let gesture = match self.open_gesture {
            Some(gesture) => gesture,
            None => self.ids.next_gesture(),
        };
        debug!("Rendered {} {:?} in gesture {:?}", element.element_type(), id, gesture);
        self.history.push(DrawnItem {
            id,
            gesture,
            element,
        });
        id
    }

    /// Erase the most recent gesture. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let removed = self.history.pop_gesture();
        if removed.is_empty() {
            return false;
        }
        if removed.first().map(|item| item.gesture) == self.open_gesture {
            self.open_gesture = None;
        }
        info!("Undo removed {} item(s)", removed.len());
        true
    }

    /// Erase everything. Not undoable.
    pub fn clear(&mut self) {
        if !self.history.is_empty() {
            info!("Cleared {} item(s)", self.history.len());
        }
        self.history.clear();
        self.open_gesture = None;
    }

    /// Rasterize the surface at its current size
    pub fn snapshot(&self) -> ExportResult<RgbaImage> {
        Ok(self.rasterize()?.into_image())
    }

    fn rasterize(&self) -> ExportResult<Canvas> {
        let mut canvas = Canvas::new(self.width, self.height, self.background)?;
        for item in self.history.items() {
            canvas.paint(&item.element);
        }
        Ok(canvas)
    }

    /// Write the visible surface to a PNG file at `path`.
    ///
    /// Failure never touches the items.
    pub fn export(&self, path: impl AsRef<Path>) -> ExportResult<()> {
        let path = path.as_ref();
        let canvas = self.rasterize()?;
        canvas.save_png(path)?;
        info!(
            "Exported {}x{} surface with {} item(s) to {}",
            self.width,
            self.height,
            self.history.len(),
            path.display()
        );
        Ok(())
    }

    /// Paint the background and every item into `canvas_rect` on screen
    pub fn draw(&self, painter: &Painter, canvas_rect: Rect) {
        let painter = painter.with_clip_rect(canvas_rect);
        painter.rect_filled(canvas_rect, 0.0, self.background);
        let origin = canvas_rect.min.to_vec2();
        for item in self.history.items() {
            item.element.draw(&painter, origin);
        }
    }
}
