use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use egui::{Color32, Pos2, Rect};
use image::{ImageFormat, Rgba, RgbaImage};
use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform,
};

use crate::error::{ExportError, ExportResult};

/// Below this a stroke collapses to a dot and a polygon has no area
const DEGENERATE_EPSILON: f32 = 1e-3;

/// Things that know how to paint themselves onto a [`Canvas`]
pub trait Rasterize {
    fn rasterize(&self, canvas: &mut Canvas);
}

/// Off-screen raster of the drawing surface, anti-aliased by tiny-skia.
///
/// Brushes are stroked with round caps and joins so the export matches the
/// width the user picked.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// A canvas filled with `background`. Zero-sized canvases cannot be created.
    pub fn new(width: u32, height: u32, background: Color32) -> ExportResult<Self> {
        let Some(mut pixmap) = Pixmap::new(width, height) else {
            return Err(ExportError::EmptySurface { width, height });
        };
        pixmap.fill(skia_color(background));
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Composite one item over what is already painted
    pub fn paint(&mut self, item: &impl Rasterize) {
        item.rasterize(self);
    }

    /// Open poly-line with round caps and joins. A single point is a dot of the brush size.
    pub fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let Some(first) = points.first() else {
            return;
        };
        if points.iter().all(|p| p.distance(*first) < DEGENERATE_EPSILON) {
            self.dot(*first, width, color);
            return;
        }

        let mut pb = PathBuilder::new();
        pb.move_to(first.x, first.y);
        for p in &points[1..] {
            pb.line_to(p.x, p.y);
        }
        if let Some(path) = pb.finish() {
            self.pixmap.stroke_path(
                &path,
                &paint(color),
                &brush(width),
                Transform::identity(),
                None,
            );
        }
    }

    /// Closed outline through `points`
    pub fn stroke_polygon(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let Some(first) = points.first() else {
            return;
        };
        if points.iter().all(|p| p.distance(*first) < DEGENERATE_EPSILON) {
            self.dot(*first, width, color);
            return;
        }

        let mut pb = PathBuilder::new();
        pb.move_to(first.x, first.y);
        for p in &points[1..] {
            pb.line_to(p.x, p.y);
        }
        pb.close();
        if let Some(path) = pb.finish() {
            self.pixmap.stroke_path(
                &path,
                &paint(color),
                &brush(width),
                Transform::identity(),
                None,
            );
        }
    }

    /// Interior of the polygon through `points`. Zero-area polygons paint nothing.
    pub fn fill_polygon(&mut self, points: &[Pos2], color: Color32) {
        let Some(first) = points.first() else {
            return;
        };
        let bounds = Rect::from_points(points);
        if bounds.width() < DEGENERATE_EPSILON || bounds.height() < DEGENERATE_EPSILON {
            return;
        }

        let mut pb = PathBuilder::new();
        pb.move_to(first.x, first.y);
        for p in &points[1..] {
            pb.line_to(p.x, p.y);
        }
        pb.close();
        if let Some(path) = pb.finish() {
            self.pixmap.fill_path(
                &path,
                &paint(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    fn dot(&mut self, center: Pos2, width: f32, color: Color32) {
        if let Some(path) = PathBuilder::from_circle(center.x, center.y, width / 2.0) {
            self.pixmap.fill_path(
                &path,
                &paint(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    /// Straight-alpha color of one pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color32::from_rgba_unmultiplied(
            c.red(),
            c.green(),
            c.blue(),
            c.alpha(),
        ))
    }

    /// Convert to an `image` buffer. tiny-skia keeps premultiplied alpha, the PNG wants it straight.
    pub fn into_image(self) -> RgbaImage {
        let width = self.pixmap.width();
        let pixels = self.pixmap.pixels();
        RgbaImage::from_fn(width, self.pixmap.height(), |x, y| {
            let c = pixels[(y * width + x) as usize].demultiply();
            Rgba([c.red(), c.green(), c.blue(), c.alpha()])
        })
    }

    /// Encode as PNG at `path`, replacing any existing file
    pub fn save_png(self, path: &Path) -> ExportResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.into_image()
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|err| match err {
                image::ImageError::IoError(io) => ExportError::Io(io),
                other => ExportError::Encode(other),
            })
    }
}

fn skia_color(color: Color32) -> Color {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    Color::from_rgba8(r, g, b, a)
}

fn paint(color: Color32) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(skia_color(color));
    paint.anti_alias = true;
    paint
}

fn brush(width: f32) -> Stroke {
    Stroke {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    struct Dot(Pos2);

    impl Rasterize for Dot {
        fn rasterize(&self, canvas: &mut Canvas) {
            canvas.stroke_polyline(&[self.0], 4.0, Color32::RED);
        }
    }

    /// Columns on row `y` that are not pure background
    fn painted_columns(canvas: &Canvas, y: u32) -> u32 {
        (0..canvas.width())
            .filter(|&x| canvas.pixel(x, y) != Some(Color32::WHITE))
            .count() as u32
    }

    #[test]
    fn test_paint_only_touches_covered_pixels() {
        let mut canvas = Canvas::new(10, 10, Color32::WHITE).unwrap();
        canvas.paint(&Dot(pos2(5.0, 5.0)));
        assert_eq!(canvas.pixel(5, 5), Some(Color32::RED));
        assert_eq!(canvas.pixel(0, 0), Some(Color32::WHITE));
        assert_eq!(canvas.pixel(9, 9), Some(Color32::WHITE));
        assert_eq!(canvas.pixel(10, 0), None);
    }

    #[test]
    fn test_zero_sized_canvas_is_rejected() {
        assert!(matches!(
            Canvas::new(0, 4, Color32::WHITE),
            Err(ExportError::EmptySurface { width: 0, height: 4 })
        ));
    }

    #[test]
    fn test_stroke_width_follows_brush() {
        let mut widths = Vec::new();
        for width in [1.0, 2.0, 3.0, 6.0, 10.0] {
            let mut canvas = Canvas::new(40, 20, Color32::WHITE).unwrap();
            canvas.stroke_polyline(&[pos2(20.0, 0.0), pos2(20.0, 20.0)], width, Color32::BLACK);
            let painted = painted_columns(&canvas, 10);
            assert!(
                (painted as f32 - width).abs() <= 2.0,
                "width {width} painted {painted} columns"
            );
            widths.push(painted);
        }
        assert!(widths.windows(2).all(|w| w[0] <= w[1]), "{widths:?}");
        assert!(widths[0] < widths[4]);
    }

    #[test]
    fn test_even_width_on_pixel_boundary_is_solid() {
        let mut canvas = Canvas::new(20, 20, Color32::WHITE).unwrap();
        canvas.stroke_polyline(&[pos2(10.0, 0.0), pos2(10.0, 20.0)], 2.0, Color32::BLACK);
        assert_eq!(canvas.pixel(9, 10), Some(Color32::BLACK));
        assert_eq!(canvas.pixel(10, 10), Some(Color32::BLACK));
        assert_eq!(canvas.pixel(8, 10), Some(Color32::WHITE));
        assert_eq!(canvas.pixel(11, 10), Some(Color32::WHITE));
    }

    #[test]
    fn test_round_join_fills_sharp_turn() {
        let mut canvas = Canvas::new(40, 40, Color32::WHITE).unwrap();
        canvas.stroke_polyline(
            &[pos2(5.0, 20.0), pos2(20.0, 20.0), pos2(20.0, 35.0)],
            8.0,
            Color32::BLACK,
        );
        // Outer corner of the turn, inside the round join
        assert_eq!(canvas.pixel(21, 17), Some(Color32::BLACK));
    }

    #[test]
    fn test_fill_polygon() {
        let mut canvas = Canvas::new(20, 20, Color32::WHITE).unwrap();
        let square = [pos2(2.0, 2.0), pos2(6.0, 2.0), pos2(6.0, 6.0), pos2(2.0, 6.0)];
        canvas.fill_polygon(&square, Color32::BLUE);
        assert_eq!(canvas.pixel(2, 2), Some(Color32::BLUE));
        assert_eq!(canvas.pixel(5, 5), Some(Color32::BLUE));
        assert_eq!(canvas.pixel(6, 6), Some(Color32::WHITE));

        canvas.fill_polygon(&[pos2(10.0, 10.0), pos2(10.0, 10.0)], Color32::RED);
        assert_eq!(canvas.pixel(10, 10), Some(Color32::WHITE));
    }

    #[test]
    fn test_degenerate_polygon_outline_is_a_dot() {
        let mut canvas = Canvas::new(20, 20, Color32::WHITE).unwrap();
        let p = pos2(10.0, 10.0);
        canvas.stroke_polygon(&[p, p, p, p], 4.0, Color32::RED);
        assert_eq!(canvas.pixel(10, 10), Some(Color32::RED));
        assert_eq!(canvas.pixel(15, 15), Some(Color32::WHITE));
    }

    #[test]
    fn test_translucent_color_blends_over_background() {
        let mut canvas = Canvas::new(4, 4, Color32::WHITE).unwrap();
        let square = [pos2(0.0, 0.0), pos2(4.0, 0.0), pos2(4.0, 4.0), pos2(0.0, 4.0)];
        canvas.fill_polygon(&square, Color32::from_rgba_unmultiplied(0, 0, 0, 128));
        let c = canvas.pixel(1, 1).unwrap();
        assert_eq!(c.a(), 255);
        assert!(c.r() > 120 && c.r() < 135, "{c:?}");
    }

    #[test]
    fn test_image_is_straight_alpha() {
        let canvas = Canvas::new(2, 2, Color32::from_rgba_unmultiplied(255, 0, 0, 128)).unwrap();
        let image = canvas.into_image();
        let [r, g, b, a] = image.get_pixel(0, 0).0;
        assert!(r >= 250, "{r}");
        assert_eq!((g, b), (0, 0));
        assert!((127..=129).contains(&a));
    }
}
