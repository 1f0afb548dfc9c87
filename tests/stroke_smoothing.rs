use egui::{Pos2, Rect, pos2};
use sketchpad::{DrawingSurface, SmootherConfig, Style, StrokeSmoother};

// Small deterministic generator so the sequences are reproducible
fn wobbly_points(seed: u32, count: usize) -> Vec<Pos2> {
    let mut state = seed;
    (0..count)
        .map(|i| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let jitter = (state >> 16) as f32 / 65_536.0 * 6.0 - 3.0;
            pos2(i as f32 * 4.0, 50.0 + jitter * (i % 3) as f32)
        })
        .collect()
}

fn inside_triangle(a: Pos2, b: Pos2, c: Pos2, p: Pos2) -> bool {
    let cross = |o: Pos2, u: Pos2, v: Pos2| (u.x - o.x) * (v.y - o.y) - (u.y - o.y) * (v.x - o.x);
    let d1 = cross(a, b, p);
    let d2 = cross(b, c, p);
    let d3 = cross(c, a, p);
    let eps = 1e-3;
    let has_neg = d1 < -eps || d2 < -eps || d3 < -eps;
    let has_pos = d1 > eps || d2 > eps || d3 > eps;
    let within_box = p.x >= a.x.min(b.x).min(c.x) - eps
        && p.x <= a.x.max(b.x).max(c.x) + eps
        && p.y >= a.y.min(b.y).min(c.y) - eps
        && p.y <= a.y.max(b.y).max(c.y) + eps;
    within_box && !(has_neg && has_pos)
}

#[test]
fn test_fewer_than_three_points_yield_nothing() {
    let mut smoother = StrokeSmoother::default();
    assert!(smoother.feed(pos2(0.0, 0.0)).is_none());
    assert!(smoother.feed(pos2(10.0, 3.0)).is_none());

    smoother.reset();
    assert!(smoother.feed(pos2(5.0, 5.0)).is_none());
    assert!(smoother.feed(pos2(6.0, 6.0)).is_none());
}

#[test]
fn test_segments_stay_near_hull_of_buffer() {
    for seed in 0..20 {
        let mut smoother = StrokeSmoother::new(SmootherConfig { capacity: 3, steps: 12 });
        let mut produced = 0;
        for point in wobbly_points(seed, 12) {
            let Some(segment) = smoother.feed(point) else {
                continue;
            };
            produced += 1;
            let buffer: Vec<_> = smoother.buffered().collect();
            assert_eq!(buffer.len(), 3);
            for end in [segment.first(), segment.last()] {
                assert!(
                    inside_triangle(buffer[0], buffer[1], buffer[2], end),
                    "{end:?} outside {buffer:?}"
                );
            }

            // Interior samples may bulge past the raw points, but only by a
            // fraction of the longest step
            let longest = buffer[0].distance(buffer[1]).max(buffer[1].distance(buffer[2]));
            let bounds = Rect::from_points(&buffer).expand(0.3 * longest);
            for p in segment.points() {
                assert!(bounds.contains(*p), "{p:?} strays from {buffer:?}");
            }
        }
        assert_eq!(produced, 10);
    }
}

#[test]
fn test_feed_is_deterministic() {
    let points = wobbly_points(7, 30);
    let mut smoother = StrokeSmoother::default();

    let first: Vec<_> = points.iter().map(|p| smoother.feed(*p)).collect();
    smoother.reset();
    let second: Vec<_> = points.iter().map(|p| smoother.feed(*p)).collect();

    assert_eq!(first, second);
}

#[test]
fn test_scenario_zigzag_with_capacity_three() {
    let mut smoother = StrokeSmoother::new(SmootherConfig { capacity: 3, steps: 16 });
    let mut surface = DrawingSurface::new(10, 10, egui::Color32::WHITE);
    let feeds = [pos2(0.0, 0.0), pos2(1.0, 1.0), pos2(2.0, 0.0), pos2(3.0, 1.0)];

    let results: Vec<_> = feeds.iter().map(|p| smoother.feed(*p)).collect();
    assert!(results[0].is_none());
    assert!(results[1].is_none());

    let third = results[2].as_ref().expect("third feed should interpolate");
    assert_eq!(third.first(), pos2(1.0, 1.0));
    let nearest = third
        .points()
        .iter()
        .map(|p| p.distance(pos2(1.0, 1.0)))
        .fold(f32::INFINITY, f32::min);
    assert!(nearest < 1e-4);

    let mut rendered = 0;
    for segment in results.into_iter().flatten() {
        surface.render_segment(segment.into_points(), Style::default());
        rendered += 1;
    }
    assert_eq!(rendered, 2);
    assert_eq!(surface.history().len(), rendered);
}

#[test]
fn test_stationary_gesture_terminates() {
    let mut smoother = StrokeSmoother::new(SmootherConfig { capacity: 5, steps: 8 });
    let p = pos2(42.0, 42.0);
    for _ in 0..100 {
        if let Some(segment) = smoother.feed(p) {
            assert_eq!(segment.first(), segment.last());
        }
    }
}
