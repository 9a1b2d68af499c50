//! The closed set of shapes a path is made of.

use crate::geom::{
    CatmullRomSegment, CubicBezierSegment, Curve, EllipticArc, LineSegment, Measured, Polyline,
    Position, QuadraticBezierSegment, Segment, Spline,
};
use crate::path::Path;

/// One segment of a [`Path`].
///
/// Every shape carries its own arc length table so that the path can sample it
/// uniformly in distance. Elliptic arcs are planar and get embedded into the
/// path's space with [`Position::from_planar`].
#[derive(Clone, Debug, PartialEq)]
pub enum PathSegment<P> {
    Line(Measured<LineSegment<P>>),
    Quadratic(Measured<QuadraticBezierSegment<P>>),
    Cubic(Measured<CubicBezierSegment<P>>),
    CatmullRom(Measured<CatmullRomSegment<P>>),
    Polyline(Measured<Polyline<P>>),
    Spline(Measured<Spline<P>>),
    Ellipse(Measured<EllipticArc>),
    Path(Box<Path<P>>),
}

impl<P: Position> PathSegment<P> {
    /// Number of divisions used when this segment is tessellated as part of a path
    /// sampled with `divisions`.
    ///
    /// Lines only need their endpoints and polylines their vertices. Splines and
    /// ellipses get a denser sampling.
    pub fn resolution(&self, divisions: usize) -> usize {
        match self {
            PathSegment::Line(_) => 1,
            PathSegment::Polyline(poly) => poly.points.len().saturating_sub(1),
            PathSegment::Spline(spline) => divisions * spline.points.len(),
            PathSegment::Ellipse(_) => divisions * 2,
            _ => divisions,
        }
    }

    /// Recomputes the cached lengths of this segment.
    pub fn update_arc_lengths(&mut self) {
        match self {
            PathSegment::Line(s) => s.update_arc_lengths(),
            PathSegment::Quadratic(s) => s.update_arc_lengths(),
            PathSegment::Cubic(s) => s.update_arc_lengths(),
            PathSegment::CatmullRom(s) => s.update_arc_lengths(),
            PathSegment::Polyline(s) => s.update_arc_lengths(),
            PathSegment::Spline(s) => s.update_arc_lengths(),
            PathSegment::Ellipse(s) => s.update_arc_lengths(),
            PathSegment::Path(p) => p.update_arc_lengths(),
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(self, PathSegment::Line(_))
    }

    pub fn is_path(&self) -> bool {
        matches!(self, PathSegment::Path(_))
    }
}

impl<P: Position> Segment for PathSegment<P> {
    type Point = P;

    fn sample(&self, t: f64) -> P {
        match self {
            PathSegment::Line(s) => s.sample(t),
            PathSegment::Quadratic(s) => s.sample(t),
            PathSegment::Cubic(s) => s.sample(t),
            PathSegment::CatmullRom(s) => s.sample(t),
            PathSegment::Polyline(s) => s.sample(t),
            PathSegment::Spline(s) => s.sample(t),
            PathSegment::Ellipse(s) => P::from_planar(s.sample(t)),
            PathSegment::Path(p) => p.sample(t),
        }
    }

    fn from(&self) -> P {
        match self {
            PathSegment::Line(s) => s.from,
            PathSegment::Quadratic(s) => s.from,
            PathSegment::Cubic(s) => s.from,
            PathSegment::CatmullRom(s) => s.from,
            _ => self.sample(0.0),
        }
    }

    fn to(&self) -> P {
        match self {
            PathSegment::Line(s) => s.to,
            PathSegment::Quadratic(s) => s.to,
            PathSegment::Cubic(s) => s.to,
            PathSegment::CatmullRom(s) => s.to,
            _ => self.sample(1.0),
        }
    }

    fn tangent(&self, t: f64) -> P {
        match self {
            PathSegment::Line(s) => s.tangent(t),
            PathSegment::Quadratic(s) => s.tangent(t),
            PathSegment::Cubic(s) => s.tangent(t),
            PathSegment::CatmullRom(s) => s.tangent(t),
            PathSegment::Polyline(s) => s.tangent(t),
            PathSegment::Spline(s) => s.tangent(t),
            PathSegment::Ellipse(s) => P::from_planar(s.tangent(t)),
            PathSegment::Path(p) => p.tangent(t),
        }
    }

    fn points(&self, divisions: usize) -> Vec<P> {
        match self {
            PathSegment::Line(s) => s.points(divisions),
            PathSegment::Quadratic(s) => s.points(divisions),
            PathSegment::Cubic(s) => s.points(divisions),
            PathSegment::CatmullRom(s) => s.points(divisions),
            PathSegment::Polyline(s) => s.points(divisions),
            PathSegment::Spline(s) => s.points(divisions),
            PathSegment::Ellipse(s) => s
                .points(divisions)
                .into_iter()
                .map(P::from_planar)
                .collect(),
            PathSegment::Path(p) => p.points(divisions),
        }
    }
}

impl<P: Position> Curve for PathSegment<P> {
    fn lengths(&self) -> &[f64] {
        match self {
            PathSegment::Line(s) => s.lengths(),
            PathSegment::Quadratic(s) => s.lengths(),
            PathSegment::Cubic(s) => s.lengths(),
            PathSegment::CatmullRom(s) => s.lengths(),
            PathSegment::Polyline(s) => s.lengths(),
            PathSegment::Spline(s) => s.lengths(),
            PathSegment::Ellipse(s) => s.lengths(),
            PathSegment::Path(p) => p.lengths(),
        }
    }

    fn length(&self) -> f64 {
        match self {
            PathSegment::Path(p) => p.length(),
            _ => self.lengths().last().copied().unwrap_or(0.0),
        }
    }

    fn u_to_t(&self, u: f64) -> f64 {
        match self {
            PathSegment::Path(p) => p.u_to_t(u),
            _ => self.t_for_distance(u * self.length(), u),
        }
    }

    fn t_for_length(&self, distance: f64) -> f64 {
        match self {
            PathSegment::Path(p) => p.t_for_length(distance),
            _ => {
                let length = self.length();
                let u = if length > 0.0 { distance / length } else { 0.0 };
                self.t_for_distance(distance, u)
            }
        }
    }

    fn point_at(&self, u: f64) -> P {
        self.sample(self.u_to_t(u))
    }
}

impl<P> From<LineSegment<P>> for PathSegment<P>
where
    P: Position,
{
    fn from(s: LineSegment<P>) -> Self {
        PathSegment::Line(Measured::new(s))
    }
}

impl<P> From<QuadraticBezierSegment<P>> for PathSegment<P>
where
    P: Position,
{
    fn from(s: QuadraticBezierSegment<P>) -> Self {
        PathSegment::Quadratic(Measured::new(s))
    }
}

impl<P> From<CubicBezierSegment<P>> for PathSegment<P>
where
    P: Position,
{
    fn from(s: CubicBezierSegment<P>) -> Self {
        PathSegment::Cubic(Measured::new(s))
    }
}

impl<P> From<CatmullRomSegment<P>> for PathSegment<P>
where
    P: Position,
{
    fn from(s: CatmullRomSegment<P>) -> Self {
        PathSegment::CatmullRom(Measured::new(s))
    }
}

impl<P> From<Polyline<P>> for PathSegment<P>
where
    P: Position,
{
    fn from(s: Polyline<P>) -> Self {
        PathSegment::Polyline(Measured::new(s))
    }
}

impl<P> From<Spline<P>> for PathSegment<P>
where
    P: Position,
{
    fn from(s: Spline<P>) -> Self {
        PathSegment::Spline(Measured::new(s))
    }
}

impl<P> From<EllipticArc> for PathSegment<P> {
    fn from(s: EllipticArc) -> Self {
        PathSegment::Ellipse(Measured::new(s))
    }
}

impl<P> From<Path<P>> for PathSegment<P> {
    fn from(path: Path<P>) -> Self {
        PathSegment::Path(Box::new(path))
    }
}

#[cfg(test)]
use crate::geom::{point, point3, Angle, Point, Point3};

#[test]
fn resolutions() {
    let line: PathSegment<Point> = LineSegment {
        from: point(0.0, 0.0),
        to: point(1.0, 0.0),
    }
    .into();
    assert_eq!(line.resolution(40), 1);

    let poly: PathSegment<Point> =
        Polyline::new(vec![point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0)]).into();
    assert_eq!(poly.resolution(40), 2);

    let spline: PathSegment<Point> = Spline::new(vec![point(0.0, 0.0), point(1.0, 0.0)]).into();
    assert_eq!(spline.resolution(40), 80);

    let arc: PathSegment<Point> =
        EllipticArc::circle(point(0.0, 0.0), 1.0, Angle::zero(), Angle::pi(), false).into();
    assert_eq!(arc.resolution(40), 80);
    assert_eq!(arc.points(arc.resolution(4)).len(), 9);
}

#[test]
fn ellipse_in_3d() {
    let arc: PathSegment<Point3> = EllipticArc::circle(
        point(1.0, 1.0),
        2.0,
        Angle::zero(),
        Angle::frac_pi_2(),
        false,
    )
    .into();
    assert!(arc.from().distance_to(point3(3.0, 1.0, 0.0)) < 1e-12);
    assert!(arc.to().distance_to(point3(1.0, 3.0, 0.0)) < 1e-12);
    // A quarter of a circle of radius 2.
    assert!((arc.length() - std::f64::consts::PI).abs() < 1e-4);
    let mid = arc.point_at(0.5);
    assert_eq!(mid.z, 0.0);
    assert!((mid.distance_to(point3(1.0, 1.0, 0.0)) - 2.0).abs() < 1e-9);
}

#[test]
fn delegates_arc_length() {
    let cubic: PathSegment<Point> = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(1.0, 0.0),
        ctrl2: point(9.0, 0.0),
        to: point(10.0, 0.0),
    }
    .into();
    assert!((cubic.length() - 10.0).abs() < 1e-6);
    assert!((cubic.point_at(0.3).x - 3.0).abs() < 1e-3);
    assert!((cubic.sample(0.3).x - 3.0).abs() > 1e-2);
}
