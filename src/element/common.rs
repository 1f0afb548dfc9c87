use egui::{Pos2, Rect, Vec2};

/// Segments used to approximate an oval outline
pub const ELLIPSE_SEGMENTS: usize = 64;

/// Normalized rectangle spanned by two drag corners, in any order
pub(crate) fn rect_from_corners(start: Pos2, end: Pos2) -> Rect {
    Rect::from_two_pos(start, end)
}

/// Corners of `rect` in drawing order
pub(crate) fn rect_outline(rect: Rect) -> Vec<Pos2> {
    vec![
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ]
}

/// Points around the ellipse inscribed in `rect`
pub(crate) fn ellipse_outline(rect: Rect) -> Vec<Pos2> {
    let center = rect.center();
    let radii = rect.size() / 2.0;
    (0..ELLIPSE_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / ELLIPSE_SEGMENTS as f32 * std::f32::consts::TAU;
            center + Vec2::new(radii.x * angle.cos(), radii.y * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_corners_in_any_order() {
        let rect = rect_from_corners(pos2(10.0, 0.0), pos2(0.0, 10.0));
        assert_eq!(rect.min, pos2(0.0, 0.0));
        assert_eq!(rect.max, pos2(10.0, 10.0));
    }

    #[test]
    fn test_ellipse_outline_stays_in_rect() {
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(20.0, 10.0));
        for p in ellipse_outline(rect) {
            assert!(rect.expand(1e-3).contains(p));
        }
    }
}
