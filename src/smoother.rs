use std::collections::VecDeque;

use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

/// Number of buffered points needed before a curve piece can be interpolated
pub const MIN_POINTS: usize = 3;

/// Upper bound for the trailing buffer
pub const MAX_CAPACITY: usize = 8;

/// Tuning for the stroke smoother
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmootherConfig {
    /// How many recent raw points are kept
    pub capacity: usize,
    /// Samples per interpolated curve piece
    pub steps: usize,
}

impl Default for SmootherConfig {
    fn default() -> Self {
        Self {
            capacity: MIN_POINTS,
            steps: 16,
        }
    }
}

impl SmootherConfig {
    fn normalized(self) -> Self {
        Self {
            capacity: self.capacity.clamp(MIN_POINTS, MAX_CAPACITY),
            steps: self.steps.max(1),
        }
    }
}

/// Interpolated poly-line for one curve piece between two consecutive raw points
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedSegment {
    points: Vec<Pos2>,
}

impl SmoothedSegment {
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn first(&self) -> Pos2 {
        self.points[0]
    }

    pub fn last(&self) -> Pos2 {
        self.points[self.points.len() - 1]
    }

    pub fn into_points(self) -> Vec<Pos2> {
        self.points
    }
}

/// Turns raw pointer samples into short smoothed curve pieces.
///
/// Every piece runs from the previous raw point to the newest one, so the
/// pieces of a gesture chain end to end. Each piece is a cubic Hermite curve
/// that starts with the direction the previous piece ended with and ends
/// along its own chord. It never waits for a future point, passes through
/// every raw sample and has no corner at the joints.
#[derive(Debug, Clone)]
pub struct StrokeSmoother {
    buffer: VecDeque<Pos2>,
    config: SmootherConfig,
    // End tangent of the last piece (or of the straight first move)
    tangent: Option<Vec2>,
}

impl Default for StrokeSmoother {
    fn default() -> Self {
        Self::new(SmootherConfig::default())
    }
}

impl StrokeSmoother {
    pub fn new(config: SmootherConfig) -> Self {
        let config = config.normalized();
        Self {
            buffer: VecDeque::with_capacity(config.capacity),
            config,
            tangent: None,
        }
    }

    pub fn config(&self) -> SmootherConfig {
        self.config
    }

    /// Forget every buffered point. Called at gesture start.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.tangent = None;
    }

    /// Raw points currently buffered, oldest first
    pub fn buffered(&self) -> impl Iterator<Item = Pos2> + '_ {
        self.buffer.iter().copied()
    }

    /// Newest raw point, if any
    pub fn last_point(&self) -> Option<Pos2> {
        self.buffer.back().copied()
    }

    /// Buffer `point` and return the curve piece ending at it once enough points are known.
    ///
    /// Returns `None` while fewer than [`MIN_POINTS`] points are buffered; the
    /// caller is expected to draw a straight line from the previous raw point
    /// in that case.
    pub fn feed(&mut self, point: Pos2) -> Option<SmoothedSegment> {
        if self.buffer.len() == self.config.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(point);

        let len = self.buffer.len();
        if len < MIN_POINTS {
            if len == 2 {
                // The caller draws this move straight, so the curve continues along it
                self.tangent = Some(self.buffer[1] - self.buffer[0]);
            }
            return None;
        }

        let p0 = self.buffer[len - 3];
        let p1 = self.buffer[len - 2];
        let p2 = self.buffer[len - 1];
        let chord = p2 - p1;

        // Never longer than the chord, so a pause cannot make the curve loop
        let mut start = self.tangent.unwrap_or((p2 - p0) / 2.0);
        if start.length() > chord.length() {
            start = start.normalized() * chord.length();
        }
        self.tangent = Some(chord);

        Some(SmoothedSegment {
            points: hermite_piece(p1, start, p2, chord, self.config.steps),
        })
    }
}

/// Sample the cubic Hermite piece from `p1` (tangent `m1`) to `p2` (tangent `m2`).
///
/// The endpoints are emitted verbatim so consecutive pieces share their joint exactly.
fn hermite_piece(p1: Pos2, m1: Vec2, p2: Pos2, m2: Vec2, steps: usize) -> Vec<Pos2> {
    let mut out = Vec::with_capacity(steps + 1);
    out.push(p1);
    for i in 1..steps {
        let t = i as f32 / steps as f32;
        let t2 = t * t;
        let t3 = t2 * t;
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;
        out.push(Pos2::ZERO + p1.to_vec2() * h00 + m1 * h10 + p2.to_vec2() * h01 + m2 * h11);
    }
    out.push(p2);
    out
}
