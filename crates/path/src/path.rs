//! The path data structure.

use std::sync::OnceLock;

use crate::geom::{Curve, Polyline, Position, Segment, DEFAULT_ARC_LENGTH_DIVISIONS};
use crate::segment::PathSegment;

/// Default number of divisions of [`Path::points`] and [`Path::spaced_points`].
pub const DEFAULT_PATH_DIVISIONS: usize = 40;

/// A sequence of segments sampled as a single curve.
///
/// The path parameter is proportional to the distance travelled: `sample(0.5)` is
/// halfway along the total length of the path, whatever the lengths of the
/// individual segments. Segments do not need to be connected.
///
/// The cumulative segment lengths are cached and dropped whenever the segment list
/// is modified through a `&mut` method.
#[derive(Clone, Debug)]
pub struct Path<P> {
    segments: Vec<PathSegment<P>>,
    auto_close: bool,
    curve_lengths: OnceLock<Vec<f64>>,
    arc_lengths: OnceLock<Vec<f64>>,
}

impl<P> Path<P> {
    pub fn new() -> Self {
        Path {
            segments: Vec::new(),
            auto_close: false,
            curve_lengths: OnceLock::new(),
            arc_lengths: OnceLock::new(),
        }
    }

    /// Whether the sampled points are closed back to the first one.
    #[inline]
    pub fn auto_close(&self) -> bool {
        self.auto_close
    }

    pub fn set_auto_close(&mut self, auto_close: bool) {
        self.auto_close = auto_close;
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment<P>] {
        &self.segments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn clear(&mut self) {
        self.invalidate();
        self.segments.clear();
    }

    /// Mutable access to a segment. Drops the cached lengths.
    pub fn segment_mut(&mut self, index: usize) -> Option<&mut PathSegment<P>> {
        self.invalidate();
        self.segments.get_mut(index)
    }

    fn invalidate(&mut self) {
        self.curve_lengths.take();
        self.arc_lengths.take();
    }
}

impl<P: Position> Path<P> {
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathSegment<P>>,
    {
        let mut path = Path::new();
        path.segments.extend(segments.into_iter().map(Into::into));
        path
    }

    /// Appends a segment at the end of the path.
    pub fn add<S: Into<PathSegment<P>>>(&mut self, segment: S) {
        self.invalidate();
        self.segments.push(segment.into());
    }

    /// Replaces the content of the path with a single polyline.
    pub fn set_from_points<I: IntoIterator<Item = P>>(&mut self, points: I) {
        self.clear();
        self.add(Polyline::new(points.into_iter().collect()));
    }

    /// Cumulative lengths of the segments.
    ///
    /// Entry `i` is the sum of the lengths of segments `0..=i`.
    pub fn curve_lengths(&self) -> &[f64] {
        self.curve_lengths.get_or_init(|| {
            let mut sum = 0.0;
            self.segments
                .iter()
                .map(|segment| {
                    sum += segment.length();
                    sum
                })
                .collect()
        })
    }

    /// Recomputes the cached lengths of the path and of all of its segments.
    pub fn update_arc_lengths(&mut self) {
        self.invalidate();
        for segment in &mut self.segments {
            segment.update_arc_lengths();
        }
        self.curve_lengths();
    }

    pub fn first_point(&self) -> Option<P> {
        self.segments.first().map(|s| s.from())
    }

    pub fn last_point(&self) -> Option<P> {
        self.segments.last().map(|s| s.to())
    }

    /// Sample the path at a normalized distance t along it.
    ///
    /// An empty path samples to the origin.
    pub fn sample(&self, t: f64) -> P {
        let lengths = self.curve_lengths();
        let total = match lengths.last() {
            Some(&total) => total,
            None => {
                log::debug!("sampling an empty path");
                return P::origin();
            }
        };

        let distance = t * total;
        for (segment, &cumulative) in self.segments.iter().zip(lengths) {
            if cumulative >= distance {
                let delta = cumulative - distance;
                let segment_length = segment.length();
                let u = if segment_length == 0.0 {
                    0.0
                } else {
                    1.0 - delta / segment_length
                };

                return segment.point_at(u);
            }
        }

        log::warn!("no segment found at t = {} on a path of length {}", t, total);

        self.segments[0].sample(0.0)
    }

    /// Tessellates every segment and concatenates the results.
    ///
    /// Each segment is sampled with its own [resolution](PathSegment::resolution).
    /// A point equal to the one before it is skipped.
    pub fn points(&self, divisions: usize) -> Vec<P> {
        let mut points: Vec<P> = Vec::new();
        for segment in &self.segments {
            for p in segment.points(segment.resolution(divisions)) {
                if points.last() == Some(&p) {
                    continue;
                }
                points.push(p);
            }
        }

        self.close_points(&mut points);

        points
    }

    /// Samples `divisions + 1` points evenly spaced along the whole path.
    pub fn spaced_points(&self, divisions: usize) -> Vec<P> {
        let divisions = divisions.max(1);
        let mut points: Vec<P> = (0..=divisions)
            .map(|i| self.sample(i as f64 / divisions as f64))
            .collect();

        self.close_points(&mut points);

        points
    }

    fn close_points(&self, points: &mut Vec<P>) {
        if !self.auto_close {
            return;
        }

        if let Some(&first) = points.first() {
            let is_closed = points.len() > 1 && points.last() == Some(&first);
            if !is_closed {
                points.push(first);
            }
        }
    }
}

impl<P> Default for Path<P> {
    fn default() -> Self {
        Path::new()
    }
}

impl<P: PartialEq> PartialEq for Path<P> {
    fn eq(&self, other: &Self) -> bool {
        self.auto_close == other.auto_close && self.segments == other.segments
    }
}

impl<P: Position> Segment for Path<P> {
    type Point = P;

    fn sample(&self, t: f64) -> P {
        self.sample(t)
    }

    fn points(&self, divisions: usize) -> Vec<P> {
        self.points(divisions)
    }
}

/// The path parameter is already proportional to distance, so `u` and `t` coincide.
impl<P: Position> Curve for Path<P> {
    fn lengths(&self) -> &[f64] {
        self.arc_lengths
            .get_or_init(|| self.flattened_lengths(DEFAULT_ARC_LENGTH_DIVISIONS))
    }

    fn length(&self) -> f64 {
        self.curve_lengths().last().copied().unwrap_or(0.0)
    }

    fn u_to_t(&self, u: f64) -> f64 {
        u
    }

    fn t_for_length(&self, distance: f64) -> f64 {
        let length = self.length();
        if length > 0.0 {
            distance / length
        } else {
            0.0
        }
    }

    fn point_at(&self, u: f64) -> P {
        self.sample(u)
    }

    fn tangent_at(&self, u: f64) -> P {
        self.tangent(u)
    }

    fn spaced_points(&self, divisions: usize) -> Vec<P> {
        self.spaced_points(divisions)
    }
}

#[cfg(test)]
use crate::geom::{
    point, point3, Angle, CubicBezierSegment, EllipticArc, LineSegment, Point, Point3,
};

#[cfg(test)]
fn corner() -> Path<Point> {
    Path::from_segments([
        LineSegment {
            from: point(0.0, 0.0),
            to: point(10.0, 0.0),
        },
        LineSegment {
            from: point(10.0, 0.0),
            to: point(10.0, 10.0),
        },
    ])
}

#[test]
fn sample_by_distance() {
    let path = corner();
    assert_eq!(path.curve_lengths().len(), 2);
    assert!((path.length() - 20.0).abs() < 1e-9);
    assert!(path.sample(0.0).distance_to(point(0.0, 0.0)) < 1e-9);
    assert!(path.sample(0.25).distance_to(point(5.0, 0.0)) < 1e-9);
    assert!(path.sample(0.5).distance_to(point(10.0, 0.0)) < 1e-9);
    assert!(path.sample(0.75).distance_to(point(10.0, 5.0)) < 1e-9);
    assert!(path.sample(1.0).distance_to(point(10.0, 10.0)) < 1e-9);
    assert_eq!(path.point_at(0.75), path.sample(0.75));
    assert_eq!(path.u_to_t(0.3), 0.3);
    assert!((path.t_for_length(5.0) - 0.25).abs() < 1e-12);
}

#[test]
fn uneven_segments() {
    let segments: [PathSegment<Point>; 2] = [
        LineSegment {
            from: point(0.0, 0.0),
            to: point(1.0, 0.0),
        }
        .into(),
        CubicBezierSegment {
            from: point(1.0, 0.0),
            ctrl1: point(2.0, 0.0),
            ctrl2: point(8.0, 0.0),
            to: point(9.0, 0.0),
        }
        .into(),
    ];
    let path: Path<Point> = Path::from_segments(segments);
    assert!((path.length() - 9.0).abs() < 1e-6);
    for i in 0..=9 {
        let p = path.sample(i as f64 / 9.0);
        assert!((p.x - i as f64).abs() < 1e-3, "{:?}", p);
    }
}

#[test]
fn points_skip_duplicates() {
    let mut path = corner();
    assert_eq!(
        path.points(DEFAULT_PATH_DIVISIONS),
        vec![point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)]
    );

    path.set_auto_close(true);
    let points = path.points(DEFAULT_PATH_DIVISIONS);
    assert_eq!(points.len(), 4);
    assert_eq!(points[3], point(0.0, 0.0));

    let spaced = path.spaced_points(4);
    assert_eq!(spaced.len(), 6);
    assert_eq!(spaced[5], spaced[0]);
}

#[test]
fn closed_path_is_not_closed_twice() {
    let mut path = corner();
    path.add(LineSegment {
        from: point(10.0, 10.0),
        to: point(0.0, 0.0),
    });
    path.set_auto_close(true);
    let points = path.points(DEFAULT_PATH_DIVISIONS);
    assert_eq!(points.len(), 4);
    assert_eq!(points.first(), points.last());
}

#[test]
fn polyline_resolution() {
    let mut path = Path::new();
    path.set_from_points(vec![
        point3(0.0, 0.0, 0.0),
        point3(1.0, 0.0, 0.0),
        point3(1.0, 1.0, 1.0),
    ]);
    assert_eq!(path.len(), 1);
    // Only the vertices of a polyline are needed.
    assert_eq!(path.points(DEFAULT_PATH_DIVISIONS).len(), 3);
    assert_eq!(path.first_point(), Some(point3(0.0, 0.0, 0.0)));
    assert_eq!(path.last_point(), Some(point3(1.0, 1.0, 1.0)));
}

#[test]
fn ellipse_resolution() {
    let mut path: Path<Point> = Path::new();
    path.add(EllipticArc::circle(
        point(0.0, 0.0),
        1.0,
        Angle::zero(),
        Angle::pi(),
        false,
    ));
    assert_eq!(path.points(4).len(), 9);
}

#[test]
fn empty_path() {
    let _ = env_logger::try_init();

    let mut path: Path<Point3> = Path::new();
    assert!(path.is_empty());
    assert_eq!(path.length(), 0.0);
    assert_eq!(path.sample(0.5), point3(0.0, 0.0, 0.0));
    assert_eq!(path.first_point(), None);
    assert!(path.points(10).is_empty());

    path.set_auto_close(true);
    assert!(path.points(10).is_empty());
}

#[test]
fn sample_past_the_end_falls_back_to_the_start() {
    let _ = env_logger::try_init();

    let path = corner();
    assert_eq!(path.sample(1.5), point(0.0, 0.0));
    assert_eq!(path.sample(f64::INFINITY), point(0.0, 0.0));
    assert_eq!(path.sample(f64::NAN), point(0.0, 0.0));
    assert!(path.sample(1.0).distance_to(point(10.0, 10.0)) < 1e-9);
}

#[test]
fn mutation_invalidates_lengths() {
    let mut path = corner();
    assert!((path.length() - 20.0).abs() < 1e-9);

    if let Some(PathSegment::Line(line)) = path.segment_mut(1) {
        line.segment_mut().to = point(10.0, 30.0);
    }
    assert!((path.length() - 40.0).abs() < 1e-9);

    path.add(LineSegment {
        from: point(10.0, 30.0),
        to: point(0.0, 30.0),
    });
    assert!((path.length() - 50.0).abs() < 1e-9);

    path.update_arc_lengths();
    assert!((path.length() - 50.0).abs() < 1e-9);

    path.clear();
    assert_eq!(path.length(), 0.0);
}

#[test]
fn nested_paths() {
    let mut outer = corner();
    let mut inner: Path<Point> = Path::new();
    inner.add(LineSegment {
        from: point(10.0, 10.0),
        to: point(0.0, 10.0),
    });
    inner.add(LineSegment {
        from: point(0.0, 10.0),
        to: point(0.0, 0.0),
    });
    outer.add(inner);

    assert_eq!(outer.len(), 3);
    assert!((outer.length() - 40.0).abs() < 1e-9);
    assert!(outer.sample(0.625).distance_to(point(5.0, 10.0)) < 1e-9);
    assert!(outer.sample(0.875).distance_to(point(0.0, 5.0)) < 1e-9);
    assert_eq!(outer.points(DEFAULT_PATH_DIVISIONS).len(), 5);
    assert!(outer.segments()[2].is_path());
}

#[test]
fn lengths_table_matches_length() {
    let path = corner();
    let lengths = path.lengths();
    assert_eq!(lengths.len(), DEFAULT_ARC_LENGTH_DIVISIONS + 1);
    assert!((lengths[DEFAULT_ARC_LENGTH_DIVISIONS] - path.length()).abs() < 1e-6);
}
