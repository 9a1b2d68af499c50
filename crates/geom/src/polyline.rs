use crate::catmull_rom::catmull_rom;
use crate::position::Position;
use crate::segment::Segment;

/// A sequence of points joined by straight lines.
///
/// The parameter is split evenly between the pieces regardless of their length:
/// with `n` points, piece `i` covers `t ∈ [i / (n - 1), (i + 1) / (n - 1)]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Polyline<P> {
    pub points: Vec<P>,
}

/// A smooth curve through a sequence of points.
///
/// Each piece between two consecutive points is a Catmull-Rom segment using the
/// neighboring points, the first and last points being repeated at the ends.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Spline<P> {
    pub points: Vec<P>,
}

/// Index of the piece containing `t` and the local parameter within it.
///
/// The index is clamped to `[0, last]`, the weight is not.
fn locate(t: f64, count: usize, last: usize) -> (usize, f64) {
    let p = (count - 1) as f64 * t;
    let index = if p <= 0.0 {
        0
    } else {
        (p.floor() as usize).min(last)
    };

    (index, p - index as f64)
}

impl<P: Position> Polyline<P> {
    pub fn new(points: Vec<P>) -> Self {
        Polyline { points }
    }

    /// Sample the polyline at t (expecting t between 0 and 1).
    ///
    /// An empty polyline samples to the origin.
    pub fn sample(&self, t: f64) -> P {
        let n = self.points.len();
        match n {
            0 => P::origin(),
            1 => self.points[0],
            _ => {
                let (i, weight) = locate(t, n, n - 2);
                self.points[i].lerp(self.points[i + 1], weight)
            }
        }
    }

    /// Number of straight pieces.
    pub fn piece_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Sum of the lengths of the straight pieces.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].distance_to(w[1]))
            .sum()
    }
}

impl<P> Default for Polyline<P> {
    fn default() -> Self {
        Polyline { points: Vec::new() }
    }
}

impl<P: Position> Segment for Polyline<P> {
    type Point = P;

    fn sample(&self, t: f64) -> P {
        self.sample(t)
    }
}

impl<P: Position> Spline<P> {
    pub fn new(points: Vec<P>) -> Self {
        Spline { points }
    }

    /// Sample the spline at t (expecting t between 0 and 1).
    ///
    /// An empty spline samples to the origin.
    pub fn sample(&self, t: f64) -> P {
        let n = self.points.len();
        if n == 0 {
            return P::origin();
        }

        let (i, weight) = locate(t, n, n - 1);
        let last = n - 1;
        let p0 = self.points[i.saturating_sub(1)];
        let p1 = self.points[i];
        let p2 = self.points[(i + 1).min(last)];
        let p3 = self.points[(i + 2).min(last)];

        catmull_rom(weight, p0, p1, p2, p3)
    }
}

impl<P> Default for Spline<P> {
    fn default() -> Self {
        Spline { points: Vec::new() }
    }
}

impl<P: Position> Segment for Spline<P> {
    type Point = P;

    fn sample(&self, t: f64) -> P {
        self.sample(t)
    }
}

#[cfg(test)]
use crate::{point, point3, Point};

#[test]
fn polyline_vertices() {
    let poly = Polyline::new(vec![
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
    ]);
    assert_eq!(poly.sample(0.0), point(0.0, 0.0));
    assert_eq!(poly.sample(0.5), point(10.0, 0.0));
    assert_eq!(poly.sample(1.0), point(10.0, 10.0));
    assert_eq!(poly.sample(0.25), point(5.0, 0.0));
    assert_eq!(poly.sample(0.75), point(10.0, 5.0));
    assert_eq!(poly.piece_count(), 2);
    assert!((poly.length() - 20.0).abs() < 1e-12);
}

#[test]
fn polyline_degenerate() {
    let empty: Polyline<Point> = Polyline::default();
    assert_eq!(empty.sample(0.5), point(0.0, 0.0));

    let single = Polyline::new(vec![point3(1.0, 2.0, 3.0)]);
    assert_eq!(single.sample(0.0), point3(1.0, 2.0, 3.0));
    assert_eq!(single.sample(1.0), point3(1.0, 2.0, 3.0));
    assert!(single.is_closed());
}

#[test]
fn polyline_extrapolates() {
    let poly = Polyline::new(vec![point(0.0, 0.0), point(1.0, 0.0), point(2.0, 0.0)]);
    assert!((poly.sample(-0.5).x + 1.0).abs() < 1e-12);
    assert!((poly.sample(1.5).x - 3.0).abs() < 1e-12);
}

#[test]
fn spline_passes_through_points() {
    let points = vec![
        point(0.0, 0.0),
        point(1.0, 2.0),
        point(3.0, 3.0),
        point(6.0, 1.0),
        point(7.0, -2.0),
    ];
    let spline = Spline::new(points.clone());
    for (i, p) in points.iter().enumerate() {
        let t = i as f64 / (points.len() - 1) as f64;
        assert!(spline.sample(t).distance_to(*p) < 1e-12);
    }
}

#[test]
fn spline_is_smooth_at_joins() {
    let spline = Spline::new(vec![
        point3(0.0, 0.0, 0.0),
        point3(1.0, 2.0, 0.0),
        point3(3.0, 3.0, 1.0),
        point3(6.0, 1.0, 2.0),
    ]);
    let join = 1.0 / 3.0;
    let before = spline.tangent(join - 1e-3);
    let after = spline.tangent(join + 1e-3);
    assert!(before.distance_to(after) < 5e-2);
}
