// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed outline generation for blobs.

use kurbo::{BezPath, Point};

/// How consecutive blob points are joined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Interpolation {
    /// Straight segments.
    #[default]
    Linear,
    /// A closed cardinal spline (tension 0) through every point.
    CardinalClosed,
}

impl Interpolation {
    /// Cardinal when `round` is set, linear otherwise.
    pub fn from_round_strokes(round: bool) -> Self {
        if round {
            Self::CardinalClosed
        } else {
            Self::Linear
        }
    }

    /// Returns `true` for the smoothed mode.
    pub fn is_round(self) -> bool {
        self == Self::CardinalClosed
    }

    /// Builds a closed outline through `points`, in order.
    pub fn closed_path(self, points: &[Point]) -> BezPath {
        match self {
            Self::Linear => linear_closed(points),
            Self::CardinalClosed => cardinal_closed(points, 0.0),
        }
    }
}

fn linear_closed(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(*first);
    for p in rest {
        path.line_to(*p);
    }
    path.close_path();
    path
}

/// Segment `i -> i+1` gets control points `p[i] + k (p[i+1] - p[i-1])` and
/// `p[i+1] - k (p[i+2] - p[i])`, indices wrapping, with `k = (1 - tension) / 6`.
fn cardinal_closed(points: &[Point], tension: f64) -> BezPath {
    let n = points.len();
    if n < 3 {
        return linear_closed(points);
    }
    let k = (1.0 - tension) / 6.0;
    let at = |i: usize| points[i % n];

    let mut path = BezPath::new();
    path.move_to(points[0]);
    for i in 0..n {
        let p0 = at(i + n - 1);
        let p1 = at(i);
        let p2 = at(i + 1);
        let p3 = at(i + 2);
        let c1 = p1 + (p2 - p0) * k;
        let c2 = p2 - (p3 - p1) * k;
        path.curve_to(c1, c2, p2);
    }
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::PathEl;

    use super::*;

    fn square() -> [Point; 4] {
        [
            Point::new(0.0, -1.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(-1.0, 0.0),
        ]
    }

    #[test]
    fn linear_visits_every_point_and_closes() {
        let path = Interpolation::Linear.closed_path(&square());
        let els = path.elements();
        assert_eq!(els.len(), 5);
        assert_eq!(els[0], PathEl::MoveTo(Point::new(0.0, -1.0)));
        assert_eq!(els[3], PathEl::LineTo(Point::new(-1.0, 0.0)));
        assert_eq!(els[4], PathEl::ClosePath);
    }

    #[test]
    fn cardinal_passes_through_points() {
        let pts = square();
        let path = Interpolation::CardinalClosed.closed_path(&pts);
        let ends: std::vec::Vec<Point> = path
            .elements()
            .iter()
            .filter_map(|el| match el {
                PathEl::CurveTo(_, _, p) => Some(*p),
                _ => None,
            })
            .collect();
        assert_eq!(ends, [pts[1], pts[2], pts[3], pts[0]]);
    }

    #[test]
    fn cardinal_control_points_follow_neighbors() {
        let pts = square();
        let path = Interpolation::CardinalClosed.closed_path(&pts);
        let PathEl::CurveTo(c1, c2, _) = path.elements()[1] else {
            panic!("expected a curve");
        };
        assert_eq!(c1, Point::new(1.0 / 3.0, -1.0));
        assert_eq!(c2, Point::new(1.0, -1.0 / 3.0));
    }

    #[test]
    fn small_inputs_degrade_gracefully() {
        assert!(Interpolation::CardinalClosed.closed_path(&[]).elements().is_empty());
        let one = Interpolation::CardinalClosed.closed_path(&[Point::ORIGIN]);
        assert_eq!(one.elements().len(), 2);
        let two = Interpolation::CardinalClosed
            .closed_path(&[Point::ORIGIN, Point::new(1.0, 1.0)]);
        assert_eq!(two.elements()[1], PathEl::LineTo(Point::new(1.0, 1.0)));
    }

    #[test]
    fn round_flag_maps_to_mode() {
        assert!(Interpolation::from_round_strokes(true).is_round());
        assert_eq!(Interpolation::from_round_strokes(false), Interpolation::Linear);
    }
}
