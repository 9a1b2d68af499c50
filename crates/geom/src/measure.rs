//! Arc length parametrization.
//!
//! A [`Curve`] is a [`Segment`] that can also be sampled with a parameter `u`
//! proportional to the distance travelled along it. Distances come from a cumulative
//! length table built by sampling the segment at evenly spaced values of t.

use std::ops::Deref;
use std::sync::OnceLock;

use crate::segment::Segment;
use crate::DEFAULT_ARC_LENGTH_DIVISIONS;

/// Arc length queries on top of a segment.
pub trait Curve: Segment {
    /// Cumulative lengths of the flattened curve.
    ///
    /// The first entry is zero, the last one is the length of the curve and the
    /// entries in between are non-decreasing.
    fn lengths(&self) -> &[f64];

    /// Approximated length of the curve.
    fn length(&self) -> f64 {
        self.lengths().last().copied().unwrap_or(0.0)
    }

    /// Maps `u`, a normalized distance along the curve, to the curve parameter `t`.
    fn u_to_t(&self, u: f64) -> f64 {
        self.t_for_distance(u * self.length(), u)
    }

    /// Maps a distance along the curve to the curve parameter `t`.
    fn t_for_length(&self, distance: f64) -> f64 {
        let length = self.length();
        let u = if length > 0.0 { distance / length } else { 0.0 };
        self.t_for_distance(distance, u)
    }

    #[doc(hidden)]
    fn t_for_distance(&self, distance: f64, fallback: f64) -> f64 {
        let lengths = self.lengths();
        let n = lengths.len();
        if n < 2 || lengths[n - 1] <= 0.0 {
            // Nothing to measure against.
            return fallback;
        }

        // Last index whose cumulative length is below the target, or the index
        // holding it exactly.
        let mut low = 0;
        let mut high = n - 1;
        let mut exact = None;
        while low <= high {
            let i = low + (high - low) / 2;
            let d = lengths[i] - distance;
            if d < 0.0 {
                low = i + 1;
            } else if d > 0.0 {
                if i == 0 {
                    high = 0;
                    break;
                }
                high = i - 1;
            } else {
                exact = Some(i);
                break;
            }
        }

        if let Some(i) = exact {
            return i as f64 / (n - 1) as f64;
        }

        // Bracketing piece, clamped so that targets outside of the curve extrapolate.
        let i = high.min(n - 2);
        let before = lengths[i];
        let after = lengths[i + 1];
        let piece = after - before;
        let fraction = if piece > 0.0 {
            (distance - before) / piece
        } else {
            0.0
        };

        (i as f64 + fraction) / (n - 1) as f64
    }

    /// Sample the curve at a normalized distance `u` along it.
    fn point_at(&self, u: f64) -> Self::Point {
        self.sample(self.u_to_t(u))
    }

    /// Unit tangent at a normalized distance `u` along the curve.
    fn tangent_at(&self, u: f64) -> Self::Point {
        self.tangent(self.u_to_t(u))
    }

    /// Samples `divisions + 1` points evenly spaced along the curve.
    fn spaced_points(&self, divisions: usize) -> Vec<Self::Point> {
        let divisions = divisions.max(1);
        (0..=divisions)
            .map(|i| self.point_at(i as f64 / divisions as f64))
            .collect()
    }
}

/// A segment with a lazily computed arc length table.
///
/// The table is computed on the first length query and dropped whenever the segment
/// is modified through [`Measured::segment_mut`] or [`Measured::set_segment`].
/// Read access to the segment goes through `Deref`.
#[derive(Clone, Debug)]
pub struct Measured<S> {
    segment: S,
    arc_length_divisions: usize,
    arc_lengths: OnceLock<Vec<f64>>,
}

impl<S: Segment> Measured<S> {
    pub fn new(segment: S) -> Self {
        Self::with_divisions(segment, DEFAULT_ARC_LENGTH_DIVISIONS)
    }

    pub fn with_divisions(segment: S, arc_length_divisions: usize) -> Self {
        Measured {
            segment,
            arc_length_divisions: arc_length_divisions.max(1),
            arc_lengths: OnceLock::new(),
        }
    }

    #[inline]
    pub fn segment(&self) -> &S {
        &self.segment
    }

    /// Mutable access to the segment. Drops the cached lengths.
    pub fn segment_mut(&mut self) -> &mut S {
        self.arc_lengths.take();
        &mut self.segment
    }

    pub fn set_segment(&mut self, segment: S) {
        self.arc_lengths.take();
        self.segment = segment;
    }

    pub fn into_segment(self) -> S {
        self.segment
    }

    #[inline]
    pub fn arc_length_divisions(&self) -> usize {
        self.arc_length_divisions
    }

    pub fn set_arc_length_divisions(&mut self, divisions: usize) {
        let divisions = divisions.max(1);
        if divisions != self.arc_length_divisions {
            self.arc_length_divisions = divisions;
            self.arc_lengths.take();
        }
    }

    /// The cumulative lengths for a given number of divisions.
    ///
    /// Returns the cached table when `divisions` matches the curve's own precision,
    /// otherwise computes a new table without caching it.
    pub fn lengths_with(&self, divisions: usize) -> Vec<f64> {
        if divisions.max(1) == self.arc_length_divisions {
            return self.lengths().to_vec();
        }

        self.segment.flattened_lengths(divisions)
    }

    /// Recomputes the cached lengths immediately.
    pub fn update_arc_lengths(&mut self) {
        self.arc_lengths.take();
        self.lengths();
    }

    /// Whether the lengths are currently cached.
    pub fn is_measured(&self) -> bool {
        self.arc_lengths.get().is_some()
    }
}

impl<S: Segment> Deref for Measured<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.segment
    }
}

impl<S: Segment> From<S> for Measured<S> {
    fn from(segment: S) -> Self {
        Measured::new(segment)
    }
}

impl<S: PartialEq> PartialEq for Measured<S> {
    fn eq(&self, other: &Self) -> bool {
        self.segment == other.segment && self.arc_length_divisions == other.arc_length_divisions
    }
}

impl<S: Segment> Segment for Measured<S> {
    type Point = S::Point;

    #[inline]
    fn sample(&self, t: f64) -> S::Point {
        self.segment.sample(t)
    }

    fn from(&self) -> S::Point {
        self.segment.from()
    }

    fn to(&self) -> S::Point {
        self.segment.to()
    }

    fn tangent(&self, t: f64) -> S::Point {
        self.segment.tangent(t)
    }

    fn points(&self, divisions: usize) -> Vec<S::Point> {
        self.segment.points(divisions)
    }

    fn is_closed(&self) -> bool {
        self.segment.is_closed()
    }
}

impl<S: Segment> Curve for Measured<S> {
    fn lengths(&self) -> &[f64] {
        self.arc_lengths.get_or_init(|| {
            log::trace!(
                "computing arc lengths with {} divisions",
                self.arc_length_divisions
            );
            self.segment.flattened_lengths(self.arc_length_divisions)
        })
    }
}

#[cfg(test)]
use crate::position::Position;
#[cfg(test)]
use crate::{point, point3, CubicBezierSegment, EllipticArc, LineSegment, Polyline};

#[test]
fn line_midpoint() {
    let line = Measured::new(LineSegment {
        from: point(1.0, 1.0),
        to: point(7.0, 9.0),
    });
    assert!((line.length() - 10.0).abs() < 1e-9);
    let mid = line.point_at(0.5);
    assert!(mid.distance_to(point(4.0, 5.0)) < 1e-9);
    assert!(line.point_at(0.0).distance_to(point(1.0, 1.0)) < 1e-12);
    assert!(line.point_at(1.0).distance_to(point(7.0, 9.0)) < 1e-12);
}

#[test]
fn lengths_are_monotonic() {
    let curve = Measured::new(CubicBezierSegment {
        from: point3(0.0, 0.0, 0.0),
        ctrl1: point3(0.0, 10.0, 2.0),
        ctrl2: point3(10.0, 10.0, -2.0),
        to: point3(10.0, 0.0, 0.0),
    });
    let lengths = curve.lengths();
    assert_eq!(lengths.len(), DEFAULT_ARC_LENGTH_DIVISIONS + 1);
    assert_eq!(lengths[0], 0.0);
    for w in lengths.windows(2) {
        assert!(w[0] <= w[1]);
    }
}

#[test]
fn length_converges() {
    let curve = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(0.0, 10.0),
        ctrl2: point(10.0, 10.0),
        to: point(10.0, 0.0),
    };
    let reference = *curve.flattened_lengths(10_000).last().unwrap();
    let coarse = Measured::with_divisions(curve, 10).length();
    let fine = Measured::with_divisions(curve, 200).length();
    assert!(coarse <= fine + 1e-12);
    assert!((reference - fine).abs() < (reference - coarse).abs());
    assert!((reference - fine).abs() < 1e-3);

    let polyline_sum: f64 = curve
        .points(10_000)
        .windows(2)
        .map(|w| w[0].distance_to(w[1]))
        .sum();
    assert!((polyline_sum - reference).abs() < 1e-9);
}

#[test]
fn spaced_points_are_evenly_spaced() {
    let curve = Measured::new(CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(1.0, 0.0),
        ctrl2: point(9.0, 0.0),
        to: point(10.0, 0.0),
    });
    let points = curve.spaced_points(10);
    assert_eq!(points.len(), 11);
    for (i, p) in points.iter().enumerate() {
        assert!((p.x - i as f64).abs() < 1e-3);
    }
}

#[test]
fn u_to_t_round_trip() {
    let curve = Measured::new(CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(0.0, 10.0),
        ctrl2: point(10.0, 10.0),
        to: point(10.0, 0.0),
    });
    assert_eq!(curve.u_to_t(0.0), 0.0);
    assert_eq!(curve.u_to_t(1.0), 1.0);
    let mut prev = 0.0;
    for i in 1..=20 {
        let t = curve.u_to_t(i as f64 / 20.0);
        assert!(t > prev);
        prev = t;
    }
    // Halfway in distance is halfway in t for this symmetric curve.
    assert!((curve.u_to_t(0.5) - 0.5).abs() < 1e-9);
    let half = curve.length() / 2.0;
    assert!((curve.t_for_length(half) - 0.5).abs() < 1e-9);
}

#[test]
fn zero_length_curve() {
    let curve = Measured::new(LineSegment {
        from: point(3.0, 3.0),
        to: point(3.0, 3.0),
    });
    assert_eq!(curve.length(), 0.0);
    assert_eq!(curve.u_to_t(0.3), 0.3);
    assert_eq!(curve.point_at(0.3), point(3.0, 3.0));
}

#[test]
fn mutation_invalidates() {
    let mut curve = Measured::new(Polyline::new(vec![point(0.0, 0.0), point(1.0, 0.0)]));
    assert!((curve.length() - 1.0).abs() < 1e-12);
    assert!(curve.is_measured());

    curve.segment_mut().points.push(point(1.0, 1.0));
    assert!(!curve.is_measured());
    assert!((curve.length() - 2.0).abs() < 1e-12);

    curve.set_segment(Polyline::new(vec![point(0.0, 0.0), point(0.0, 5.0)]));
    assert!((curve.length() - 5.0).abs() < 1e-12);

    curve.set_arc_length_divisions(10);
    assert!(!curve.is_measured());
    assert_eq!(curve.lengths().len(), 11);
    assert_eq!(curve.lengths_with(10).len(), 11);
    assert_eq!(curve.lengths_with(4).len(), 5);

    curve.update_arc_lengths();
    assert!(curve.is_measured());
}

#[test]
fn out_of_range_u_extrapolates() {
    let line = Measured::new(LineSegment {
        from: point(0.0, 0.0),
        to: point(10.0, 0.0),
    });
    assert!((line.point_at(1.5).x - 15.0).abs() < 1e-9);
    assert!((line.point_at(-0.5).x + 5.0).abs() < 1e-9);
}

#[test]
fn degenerate_ellipse_has_no_length() {
    use crate::Angle;
    let arc = Measured::new(EllipticArc::circle(
        point(0.0, 0.0),
        1.0,
        Angle::radians(0.5),
        Angle::radians(0.5),
        false,
    ));
    assert!(arc.length().abs() < 1e-12);
    assert!(arc.is_closed());
}
