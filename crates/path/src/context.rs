//! A path builder mimicking the path methods of a 2D canvas context.
//!
//! Positions go through the current transform before they become control points:
//! the transform is baked into the geometry at the time each method is called.
//!
//! # Examples
//!
//! ```
//! use curvy_path::PathContext;
//! use curvy_path::geom::{point, Curve};
//!
//! let mut ctx = PathContext::new();
//! ctx.translate(10.0, 0.0);
//! ctx.move_to(point(0.0, 0.0));
//! ctx.line_to(point(5.0, 0.0));
//!
//! let path = ctx.path();
//! assert_eq!(path.first_point(), Some(point(10.0, 0.0)));
//! assert!((path.length() - 5.0).abs() < 1e-9);
//! ```

use std::fmt;

use crate::error::PathError;
use crate::geom::{
    point, vector, Angle, CatmullRomSegment, CubicBezierSegment, EllipticArc, LineSegment, Point,
    Polyline, QuadraticBezierSegment, Spline, Transform, Vector, EPSILON,
};
use crate::path::Path;

/// The radius of each corner of a rounded rectangle.
///
/// Converts from a single radius or from an array of one to four radii, following
/// the CSS shorthand: `[top_left, top_right, bottom_right, bottom_left]` where a
/// missing top right radius defaults to the top left one, a missing bottom right
/// to the top left and a missing bottom left to the top right.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct BorderRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl BorderRadii {
    pub fn new(radius: f64) -> Self {
        BorderRadii {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Clamps every radius to `max`.
    pub fn clamped(&self, max: f64) -> Self {
        BorderRadii {
            top_left: self.top_left.min(max),
            top_right: self.top_right.min(max),
            bottom_right: self.bottom_right.min(max),
            bottom_left: self.bottom_left.min(max),
        }
    }
}

impl fmt::Display for BorderRadii {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Clockwise from top left.
        write!(
            f,
            "BorderRadii({}, {}, {}, {})",
            self.top_left, self.top_right, self.bottom_right, self.bottom_left
        )
    }
}

impl From<f64> for BorderRadii {
    fn from(radius: f64) -> Self {
        BorderRadii::new(radius)
    }
}

impl From<[f64; 1]> for BorderRadii {
    fn from(r: [f64; 1]) -> Self {
        BorderRadii::new(r[0])
    }
}

impl From<[f64; 2]> for BorderRadii {
    fn from(r: [f64; 2]) -> Self {
        BorderRadii {
            top_left: r[0],
            top_right: r[1],
            bottom_right: r[0],
            bottom_left: r[1],
        }
    }
}

impl From<[f64; 3]> for BorderRadii {
    fn from(r: [f64; 3]) -> Self {
        BorderRadii {
            top_left: r[0],
            top_right: r[1],
            bottom_right: r[2],
            bottom_left: r[1],
        }
    }
}

impl From<[f64; 4]> for BorderRadii {
    fn from(r: [f64; 4]) -> Self {
        BorderRadii {
            top_left: r[0],
            top_right: r[1],
            bottom_right: r[2],
            bottom_left: r[3],
        }
    }
}

/// Builds a 2D [`Path`] with canvas-like drawing commands.
///
/// Each drawing command appends one segment and moves the current position to its
/// end. Commands issued while there is no current position only set it.
#[derive(Clone, Debug)]
pub struct PathContext {
    path: Path<Point>,
    current_position: Option<Point>,
    transform: Transform,
    transform_stack: Vec<Transform>,
}

impl PathContext {
    pub fn new() -> Self {
        PathContext {
            path: Path::new(),
            current_position: None,
            transform: Transform::identity(),
            transform_stack: Vec::new(),
        }
    }

    #[inline]
    pub fn path(&self) -> &Path<Point> {
        &self.path
    }

    pub fn into_path(self) -> Path<Point> {
        self.path
    }

    /// The end of the last command, in transformed space.
    #[inline]
    pub fn current_position(&self) -> Option<Point> {
        self.current_position
    }

    /// Forgets the current position. The segments are kept.
    pub fn begin_path(&mut self) {
        self.current_position = None;
    }

    /// Joins the end of the last segment to the start of the first one with a line,
    /// unless they already coincide.
    pub fn close_path(&mut self) {
        let (start, end) = match (self.path.first_point(), self.path.last_point()) {
            (Some(start), Some(end)) => (start, end),
            _ => return,
        };

        if start != end {
            self.path.add(LineSegment {
                from: end,
                to: start,
            });
        }
    }

    /// Moves to the first point and draws lines through the others.
    pub fn set_from_points(&mut self, points: &[Point]) {
        if let Some((first, rest)) = points.split_first() {
            self.move_to(*first);
            for p in rest {
                self.line_to(*p);
            }
        }
    }

    pub fn move_to(&mut self, to: Point) {
        self.current_position = Some(self.transform_point(to));
    }

    pub fn line_to(&mut self, to: Point) {
        let to = self.transform_point(to);
        if let Some(from) = self.current_position {
            self.path.add(LineSegment { from, to });
        }
        self.current_position = Some(to);
    }

    /// Draws straight lines through `points`, as a single polyline segment.
    pub fn polyline_to(&mut self, points: &[Point]) {
        let mut points: Vec<Point> = points.iter().map(|p| self.transform_point(*p)).collect();
        let last = match points.last() {
            Some(&last) => last,
            None => return,
        };

        let from = self.current_position.unwrap_or(points[0]);
        points.insert(0, from);
        self.path.add(Polyline::new(points));
        self.current_position = Some(last);
    }

    pub fn quadratic_curve_to(&mut self, ctrl: Point, to: Point) {
        let ctrl = self.transform_point(ctrl);
        let to = self.transform_point(to);
        let from = self.current_position.unwrap_or(ctrl);
        self.path.add(QuadraticBezierSegment { from, ctrl, to });
        self.current_position = Some(to);
    }

    pub fn bezier_curve_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        let ctrl1 = self.transform_point(ctrl1);
        let ctrl2 = self.transform_point(ctrl2);
        let to = self.transform_point(to);
        let from = self.current_position.unwrap_or(ctrl1);
        self.path.add(CubicBezierSegment {
            from,
            ctrl1,
            ctrl2,
            to,
        });
        self.current_position = Some(to);
    }

    /// Appends a Catmull-Rom segment going from `ctrl1` to `ctrl2`, the current
    /// position and `to` shaping its tangents. The current position moves to `to`.
    pub fn catmull_rom_curve_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        let ctrl1 = self.transform_point(ctrl1);
        let ctrl2 = self.transform_point(ctrl2);
        let to = self.transform_point(to);
        let prev = self.current_position.unwrap_or(ctrl1);
        self.path.add(CatmullRomSegment {
            prev,
            from: ctrl1,
            to: ctrl2,
            next: to,
        });
        self.current_position = Some(to);
    }

    /// Draws a smooth curve through `points`, as a single spline segment.
    pub fn spline_to(&mut self, points: &[Point]) {
        let mut points: Vec<Point> = points.iter().map(|p| self.transform_point(*p)).collect();
        let last = match points.last() {
            Some(&last) => last,
            None => return,
        };

        let from = self.current_position.unwrap_or(points[0]);
        points.insert(0, from);
        self.path.add(Spline::new(points));
        self.current_position = Some(last);
    }

    /// Appends an elliptic arc, preceded by a line from the current position to
    /// the start of the arc when they differ.
    ///
    /// Arcs with both radii below [`EPSILON`] only add the line.
    pub fn ellipse(
        &mut self,
        center: Point,
        radii: Vector,
        x_rotation: Angle<f64>,
        start_angle: Angle<f64>,
        end_angle: Angle<f64>,
        counterclockwise: bool,
    ) {
        let (center, radii, x_rotation) = self.transform_ellipse(center, radii, x_rotation);
        let (start_angle, end_angle, counterclockwise) =
            self.orient_angles(start_angle, end_angle, counterclockwise);
        let arc = EllipticArc::new(
            center,
            radii,
            x_rotation,
            start_angle,
            end_angle,
            counterclockwise,
        );
        self.add_arc(arc, radii.x <= EPSILON && radii.y <= EPSILON);
    }

    /// Appends a circular arc.
    ///
    /// The arc becomes elliptic when the current transform does not preserve
    /// circles.
    pub fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: Angle<f64>,
        end_angle: Angle<f64>,
        counterclockwise: bool,
    ) {
        self.ellipse(
            center,
            vector(radius, radius),
            Angle::zero(),
            start_angle,
            end_angle,
            counterclockwise,
        );
    }

    fn add_arc(&mut self, arc: EllipticArc, degenerate: bool) {
        let start = arc.start_point();
        if let Some(current) = self.current_position {
            if current != start {
                self.path.add(LineSegment {
                    from: current,
                    to: start,
                });
            }
        }

        if degenerate {
            return;
        }

        self.current_position = Some(arc.end_point());
        self.path.add(arc);
    }

    /// Appends an arc of the given radius tangent to the lines from the current
    /// position to `ctrl` and from `ctrl` to `to`, preceded by a line to the
    /// first tangent point.
    ///
    /// Degrades to a line to `ctrl` when the three points are collinear or the
    /// radius is zero. Without a current position this only moves to `ctrl`.
    pub fn arc_to(&mut self, ctrl: Point, to: Point, radius: f64) -> Result<(), PathError> {
        if radius < 0.0 {
            return Err(PathError::NegativeRadius(radius));
        }

        let current = match self.current_position {
            Some(current) => current,
            None => {
                self.move_to(ctrl);
                return Ok(());
            }
        };

        let inverse = self
            .transform
            .inverse()
            .ok_or(PathError::SingularTransform)?;
        let p0 = inverse.transform_point(current);
        let p1 = ctrl;
        let p2 = to;

        if p0 == p1 {
            return Ok(());
        }

        if (p1 - p0).cross(p2 - p0).abs() <= EPSILON || radius == 0.0 {
            self.line_to(p1);
            return Ok(());
        }

        let v1 = (p0 - p1).normalize();
        let v2 = (p2 - p1).normalize();
        let n1 = vector(-v1.y, v1.x);
        let n2 = vector(-v2.y, v2.x);

        let angle = v1.dot(v2).clamp(-1.0, 1.0).acos();
        let tangent_length = radius / (angle / 2.0).tan();
        let t1 = p1 + v1 * tangent_length;
        let t2 = p1 + v2 * tangent_length;
        let d = t2 - t1;

        let determinant = n2.x * n1.y - n2.y * n1.x;
        if determinant.abs() <= EPSILON {
            return Err(PathError::ArcCenter);
        }

        let normal_length = (n2.x * d.y - n2.y * d.x) / determinant;
        let center = t1 + n1 * normal_length;
        let start_angle = Angle::radians((t1.y - center.y).atan2(t1.x - center.x));
        let end_angle = Angle::radians((t2.y - center.y).atan2(t2.x - center.x));
        let counterclockwise = (p0.y - p1.y) * (p2.x - p0.x) <= (p0.x - p1.x) * (p2.y - p0.y);
        let (start_angle, end_angle, counterclockwise) =
            self.orient_angles(start_angle, end_angle, counterclockwise);

        let t1 = self.transform_point(t1);
        let t2 = self.transform_point(t2);
        let center = self.transform_point(center);
        let radii = vector(self.scale_x() * radius, self.scale_y() * radius);

        if current != t1 {
            self.path.add(LineSegment {
                from: current,
                to: t1,
            });
        }
        self.path.add(EllipticArc::new(
            center,
            radii,
            Angle::radians(self.rotation()),
            start_angle,
            end_angle,
            counterclockwise,
        ));
        self.current_position = Some(t2);

        Ok(())
    }

    /// Adds a closed rectangle as a single polyline, starting and ending at `(x, y)`.
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.move_to(point(x, y));
        self.polyline_to(&[
            point(x + width, y),
            point(x + width, y + height),
            point(x, y + height),
            point(x, y),
        ]);
    }

    /// Adds a rectangle with rounded corners as a nested path.
    ///
    /// Radii are clamped to half of the smallest side. The current position is
    /// left at `(x, y)`.
    pub fn round_rect<R: Into<BorderRadii>>(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radii: R,
    ) -> Result<(), PathError> {
        self.move_to(point(x, y));

        let radii = radii.into().clamped((width / 2.0).min(height / 2.0));
        let (right, bottom) = (x + width, y + height);

        let mut corners = PathContext::new();
        corners.transform = self.transform;

        if radii.top_right > 0.0 {
            corners.line_to(point(right - radii.top_right, y));
            corners.arc_to(
                point(right, y),
                point(right, y + radii.top_right),
                radii.top_right,
            )?;
        } else {
            corners.line_to(point(right, y));
        }

        if radii.bottom_right > 0.0 {
            corners.line_to(point(right, bottom - radii.bottom_right));
            corners.arc_to(
                point(right, bottom),
                point(right - radii.bottom_right, bottom),
                radii.bottom_right,
            )?;
        } else {
            corners.line_to(point(right, bottom));
        }

        if radii.bottom_left > 0.0 {
            corners.line_to(point(x + radii.bottom_left, bottom));
            corners.arc_to(
                point(x, bottom),
                point(x, bottom - radii.bottom_left),
                radii.bottom_left,
            )?;
        } else {
            corners.line_to(point(x, bottom));
        }

        if radii.top_left > 0.0 {
            corners.line_to(point(x, y + radii.top_left));
            corners.arc_to(point(x, y), point(x + radii.top_left, y), radii.top_left)?;
        } else {
            corners.line_to(point(x, y));
        }

        corners.close_path();
        self.path.add(corners.into_path());
        self.move_to(point(x, y));

        Ok(())
    }

    /// Replaces the current transform with the matrix
    /// `[a c e]`, `[b d f]`, `[0 0 1]`.
    pub fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        self.transform = Transform::new(a, b, c, d, e, f);
    }

    #[inline]
    pub fn get_transform(&self) -> Transform {
        self.transform
    }

    pub fn reset_transform(&mut self) {
        self.transform = Transform::identity();
    }

    /// Multiplies the current transform by the given matrix, which applies first.
    pub fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        self.transform = Transform::new(a, b, c, d, e, f).then(&self.transform);
    }

    pub fn translate(&mut self, x: f64, y: f64) {
        self.transform = Transform::translation(x, y).then(&self.transform);
    }

    /// Rotation in radians.
    pub fn rotate(&mut self, angle: f64) {
        self.transform = Transform::rotation(Angle::radians(angle)).then(&self.transform);
    }

    pub fn scale(&mut self, x: f64, y: f64) {
        self.transform = Transform::scale(x, y).then(&self.transform);
    }

    /// Pushes the current transform on the stack.
    pub fn save(&mut self) {
        self.transform_stack.push(self.transform);
    }

    /// Pops the last saved transform. Does nothing if the stack is empty.
    pub fn restore(&mut self) {
        if let Some(transform) = self.transform_stack.pop() {
            self.transform = transform;
        }
    }

    /// Resets the transform and clears the transform stack.
    pub fn reset(&mut self) {
        self.reset_transform();
        self.transform_stack.clear();
    }

    fn transform_point(&self, p: Point) -> Point {
        self.transform.transform_point(p)
    }

    /// Maps an ellipse through the current transform. The result is only exact
    /// for transforms that keep the axes of the ellipse orthogonal.
    fn transform_ellipse(
        &self,
        center: Point,
        radii: Vector,
        x_rotation: Angle<f64>,
    ) -> (Point, Vector, Angle<f64>) {
        if self.transform == Transform::identity() {
            return (center, radii, x_rotation);
        }

        let (sin, cos) = x_rotation.radians.sin_cos();
        let u1 = self
            .transform
            .transform_vector(vector(cos * radii.x, sin * radii.x));
        let u2 = self
            .transform
            .transform_vector(vector(-sin * radii.y, cos * radii.y));

        (
            self.transform_point(center),
            vector(u1.length(), u2.length()),
            Angle::radians(u1.y.atan2(u1.x)),
        )
    }

    fn scale_x(&self) -> f64 {
        self.transform.m11.hypot(self.transform.m12)
    }

    fn scale_y(&self) -> f64 {
        self.transform.m21.hypot(self.transform.m22)
    }

    fn rotation(&self) -> f64 {
        self.transform.m12.atan2(self.transform.m11)
    }

    /// Angles of an arc are measured from the image of its x axis. A mirroring
    /// transform reverses them along with the sweep direction.
    fn orient_angles(
        &self,
        start_angle: Angle<f64>,
        end_angle: Angle<f64>,
        counterclockwise: bool,
    ) -> (Angle<f64>, Angle<f64>, bool) {
        if self.transform.determinant() < 0.0 {
            (-start_angle, -end_angle, !counterclockwise)
        } else {
            (start_angle, end_angle, counterclockwise)
        }
    }
}

impl Default for PathContext {
    fn default() -> Self {
        PathContext::new()
    }
}

#[cfg(test)]
use crate::geom::{Curve, Segment};
#[cfg(test)]
use crate::segment::PathSegment;
#[cfg(test)]
use std::f64::consts::{FRAC_PI_2, PI, TAU};

#[test]
fn lines_and_current_position() {
    let mut ctx = PathContext::new();
    assert_eq!(ctx.current_position(), None);

    // Without a current position a line only moves.
    ctx.line_to(point(1.0, 1.0));
    assert!(ctx.path().is_empty());
    assert_eq!(ctx.current_position(), Some(point(1.0, 1.0)));

    ctx.line_to(point(4.0, 5.0));
    assert_eq!(ctx.path().len(), 1);
    assert!((ctx.path().length() - 5.0).abs() < 1e-9);

    ctx.begin_path();
    assert_eq!(ctx.current_position(), None);
    ctx.line_to(point(0.0, 0.0));
    assert_eq!(ctx.path().len(), 1);

    ctx.close_path();
    assert_eq!(ctx.path().len(), 2);
    assert_eq!(ctx.path().last_point(), Some(point(1.0, 1.0)));

    // Already closed.
    ctx.close_path();
    assert_eq!(ctx.path().len(), 2);
}

#[test]
fn set_from_points() {
    let mut ctx = PathContext::new();
    ctx.set_from_points(&[point(0.0, 0.0), point(3.0, 0.0), point(3.0, 4.0)]);
    assert_eq!(ctx.path().len(), 2);
    assert!((ctx.path().length() - 7.0).abs() < 1e-9);
    assert_eq!(ctx.current_position(), Some(point(3.0, 4.0)));
}

#[test]
fn transforms_are_baked() {
    let mut ctx = PathContext::new();
    ctx.translate(10.0, 0.0);
    ctx.move_to(point(0.0, 0.0));
    ctx.line_to(point(5.0, 0.0));
    assert_eq!(ctx.path().first_point(), Some(point(10.0, 0.0)));
    assert_eq!(ctx.path().last_point(), Some(point(15.0, 0.0)));

    ctx.save();
    ctx.rotate(FRAC_PI_2);
    ctx.line_to(point(1.0, 0.0));
    let end = ctx.current_position().unwrap();
    assert!(end.distance_to(point(10.0, 1.0)) < 1e-12);

    ctx.restore();
    assert_eq!(ctx.get_transform(), Transform::translation(10.0, 0.0));

    // The scale applies before the translation.
    ctx.scale(2.0, 3.0);
    ctx.move_to(point(1.0, 1.0));
    assert_eq!(ctx.current_position(), Some(point(12.0, 3.0)));

    ctx.reset();
    ctx.restore();
    assert_eq!(ctx.get_transform(), Transform::identity());

    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 5.0, 6.0);
    ctx.transform(2.0, 0.0, 0.0, 2.0, 0.0, 0.0);
    ctx.move_to(point(1.0, 1.0));
    assert_eq!(ctx.current_position(), Some(point(7.0, 8.0)));
    ctx.reset_transform();
    ctx.move_to(point(1.0, 1.0));
    assert_eq!(ctx.current_position(), Some(point(1.0, 1.0)));
}

#[test]
fn curves() {
    let mut ctx = PathContext::new();
    ctx.move_to(point(0.0, 0.0));
    ctx.quadratic_curve_to(point(5.0, 5.0), point(10.0, 0.0));
    ctx.bezier_curve_to(point(12.0, 0.0), point(14.0, 5.0), point(16.0, 0.0));
    ctx.catmull_rom_curve_to(point(18.0, 1.0), point(20.0, 2.0), point(22.0, 0.0));
    ctx.polyline_to(&[point(23.0, 0.0), point(24.0, 1.0)]);
    ctx.spline_to(&[point(25.0, 2.0), point(26.0, 0.0)]);

    let segments = ctx.path().segments();
    assert_eq!(segments.len(), 5);
    match &segments[2] {
        PathSegment::CatmullRom(c) => {
            assert_eq!(c.prev, point(16.0, 0.0));
            assert_eq!(c.from, point(18.0, 1.0));
            assert_eq!(c.to, point(20.0, 2.0));
            assert_eq!(c.next, point(22.0, 0.0));
        }
        other => panic!("unexpected segment {:?}", other),
    }
    match &segments[3] {
        PathSegment::Polyline(p) => {
            assert_eq!(p.points, vec![point(22.0, 0.0), point(23.0, 0.0), point(24.0, 1.0)]);
        }
        other => panic!("unexpected segment {:?}", other),
    }
    match &segments[4] {
        PathSegment::Spline(s) => assert_eq!(s.points.len(), 3),
        other => panic!("unexpected segment {:?}", other),
    }
    assert_eq!(ctx.current_position(), Some(point(26.0, 0.0)));
}

#[test]
fn arc_adds_connecting_line() {
    let mut ctx = PathContext::new();
    ctx.move_to(point(0.0, 0.0));
    ctx.arc(point(5.0, 0.0), 1.0, Angle::zero(), Angle::pi(), false);
    assert_eq!(ctx.path().len(), 2);
    assert!(ctx.path().segments()[0].is_line());
    let end = ctx.current_position().unwrap();
    assert!(end.distance_to(point(4.0, 0.0)) < 1e-12);

    // Degenerate arcs only add the line.
    ctx.arc(point(10.0, 0.0), 0.0, Angle::zero(), Angle::pi(), false);
    assert_eq!(ctx.path().len(), 3);
    assert!(ctx.current_position().unwrap().distance_to(point(4.0, 0.0)) < 1e-12);
}

#[test]
fn arc_under_transform() {
    let mut ctx = PathContext::new();
    ctx.scale(2.0, 2.0);
    ctx.arc(point(1.0, 1.0), 1.0, Angle::zero(), Angle::two_pi(), false);
    match &ctx.path().segments()[0] {
        PathSegment::Ellipse(arc) => {
            assert_eq!(arc.center, point(2.0, 2.0));
            assert_eq!(arc.radii, vector(2.0, 2.0));
            assert!((ctx.path().length() - 2.0 * TAU).abs() < 1e-3);
        }
        other => panic!("unexpected segment {:?}", other),
    }

    let mut ctx = PathContext::new();
    ctx.scale(2.0, 1.0);
    ctx.arc(point(0.0, 0.0), 1.0, Angle::zero(), Angle::two_pi(), false);
    match &ctx.path().segments()[0] {
        PathSegment::Ellipse(arc) => {
            assert!((arc.radii.x - 2.0).abs() < 1e-12);
            assert!((arc.radii.y - 1.0).abs() < 1e-12);
        }
        other => panic!("unexpected segment {:?}", other),
    }
}

#[test]
fn arc_under_reflection() {
    let mut ctx = PathContext::new();
    ctx.scale(-1.0, 1.0);
    ctx.arc(point(1.0, 0.0), 1.0, Angle::zero(), Angle::radians(FRAC_PI_2), false);
    let arc = &ctx.path().segments()[0];
    assert!(arc.from().distance_to(point(-2.0, 0.0)) < 1e-12);
    assert!(arc.to().distance_to(point(-1.0, 1.0)) < 1e-12);
    assert!((arc.length() - FRAC_PI_2).abs() < 1e-3);
    let mid = arc.sample(0.5);
    let half = FRAC_PI_2 / 2.0;
    assert!(mid.distance_to(point(-1.0 - half.cos(), half.sin())) < 1e-12);

    let mut ctx = PathContext::new();
    ctx.scale(1.0, -1.0);
    ctx.ellipse(
        point(0.0, 0.0),
        vector(1.0, 1.0),
        Angle::zero(),
        Angle::zero(),
        Angle::radians(FRAC_PI_2),
        false,
    );
    let arc = &ctx.path().segments()[0];
    assert!(arc.from().distance_to(point(1.0, 0.0)) < 1e-12);
    assert!(arc.to().distance_to(point(0.0, -1.0)) < 1e-12);
    assert!((arc.length() - FRAC_PI_2).abs() < 1e-3);
}

#[test]
fn mirrored_arcs_match_transformed_points() {
    let setups: [fn(&mut PathContext); 3] = [
        |ctx| ctx.scale(-1.0, 1.0),
        |ctx| ctx.scale(1.0, -1.0),
        |ctx| {
            ctx.translate(3.0, -4.0);
            ctx.rotate(PI / 3.0);
            ctx.scale(2.0, -2.0);
        },
    ];
    let draw = |ctx: &mut PathContext, counterclockwise: bool| {
        ctx.ellipse(
            point(1.0, 2.0),
            vector(3.0, 1.0),
            Angle::radians(0.3),
            Angle::radians(0.2),
            Angle::radians(2.0),
            counterclockwise,
        );
        ctx.arc(point(-2.0, 0.0), 1.5, Angle::radians(-1.0), Angle::pi(), counterclockwise);
        ctx.arc_to(point(6.0, 0.0), point(6.0, 6.0), 2.0).unwrap();
    };

    for setup in &setups {
        for &counterclockwise in &[false, true] {
            let mut reference = PathContext::new();
            draw(&mut reference, counterclockwise);
            let mut ctx = PathContext::new();
            setup(&mut ctx);
            draw(&mut ctx, counterclockwise);

            let transform = ctx.get_transform();
            let expected = reference.path().segments();
            let actual = ctx.path().segments();
            assert_eq!(expected.len(), actual.len());
            for (expected, actual) in expected.iter().zip(actual) {
                for i in 0..=8 {
                    let t = i as f64 / 8.0;
                    let p = transform.transform_point(expected.sample(t));
                    assert!(actual.sample(t).distance_to(p) < 1e-9);
                }
            }
            let end = transform.transform_point(reference.current_position().unwrap());
            assert!(ctx.current_position().unwrap().distance_to(end) < 1e-9);
        }
    }
}

#[test]
fn arc_to_corner() {
    let mut ctx = PathContext::new();
    ctx.move_to(point(0.0, 0.0));
    ctx.arc_to(point(10.0, 0.0), point(10.0, 10.0), 5.0).unwrap();

    let segments = ctx.path().segments();
    assert_eq!(segments.len(), 2);
    assert!(segments[0].to().distance_to(point(5.0, 0.0)) < 1e-9);
    match &segments[1] {
        PathSegment::Ellipse(arc) => {
            assert!(arc.center.distance_to(point(5.0, 5.0)) < 1e-9);
            assert!(!arc.counterclockwise);
            assert!((arc.delta_angle() - FRAC_PI_2).abs() < 1e-9);
        }
        other => panic!("unexpected segment {:?}", other),
    }
    let end = ctx.current_position().unwrap();
    assert!(end.distance_to(point(10.0, 5.0)) < 1e-9);
    assert!((segments[1].point_at(0.5).distance_to(point(5.0, 5.0)) - 5.0).abs() < 1e-9);
}

#[test]
fn arc_to_degenerate_cases() {
    let mut ctx = PathContext::new();
    assert_eq!(
        ctx.arc_to(point(1.0, 0.0), point(1.0, 1.0), -1.0),
        Err(PathError::NegativeRadius(-1.0))
    );

    // No current position.
    ctx.arc_to(point(1.0, 0.0), point(1.0, 1.0), 1.0).unwrap();
    assert!(ctx.path().is_empty());
    assert_eq!(ctx.current_position(), Some(point(1.0, 0.0)));

    // Current position on the control point.
    ctx.arc_to(point(1.0, 0.0), point(1.0, 1.0), 1.0).unwrap();
    assert!(ctx.path().is_empty());

    // Collinear points.
    ctx.arc_to(point(2.0, 0.0), point(3.0, 0.0), 1.0).unwrap();
    assert_eq!(ctx.path().len(), 1);
    assert!(ctx.path().segments()[0].is_line());

    // Zero radius.
    ctx.arc_to(point(2.0, 5.0), point(3.0, 5.0), 0.0).unwrap();
    assert_eq!(ctx.path().len(), 2);
    assert_eq!(ctx.current_position(), Some(point(2.0, 5.0)));

    let mut ctx = PathContext::new();
    ctx.move_to(point(0.0, 0.0));
    ctx.set_transform(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    assert_eq!(
        ctx.arc_to(point(1.0, 0.0), point(1.0, 1.0), 1.0),
        Err(PathError::SingularTransform)
    );
}

#[test]
fn collinear_arc_to_is_a_line_to_the_control_point() {
    let mut arc = PathContext::new();
    let mut line = PathContext::new();
    for ctx in [&mut arc, &mut line] {
        ctx.translate(5.0, 5.0);
        ctx.scale(2.0, 2.0);
        ctx.move_to(point(0.0, 0.0));
    }

    arc.arc_to(point(2.0, 0.0), point(3.0, 0.0), 1.0).unwrap();
    // The control point lies behind the current position.
    arc.arc_to(point(1.0, 0.0), point(5.0, 0.0), 1.0).unwrap();
    line.line_to(point(2.0, 0.0));
    line.line_to(point(1.0, 0.0));

    assert_eq!(arc.path().segments(), line.path().segments());
    assert_eq!(arc.current_position(), line.current_position());
    assert_eq!(arc.current_position(), Some(point(7.0, 5.0)));
}

#[test]
fn rect() {
    let mut ctx = PathContext::new();
    ctx.rect(1.0, 2.0, 10.0, 5.0);
    assert_eq!(ctx.path().len(), 1);
    match &ctx.path().segments()[0] {
        PathSegment::Polyline(p) => assert_eq!(p.points.len(), 5),
        other => panic!("unexpected segment {:?}", other),
    }
    assert!(ctx.path().segments()[0].is_closed());
    assert!((ctx.path().length() - 30.0).abs() < 1e-9);
}

#[test]
fn round_rect() {
    let mut ctx = PathContext::new();
    ctx.round_rect(0.0, 0.0, 100.0, 50.0, 10.0).unwrap();
    assert_eq!(ctx.path().len(), 1);
    assert!(ctx.path().segments()[0].is_path());
    assert_eq!(ctx.current_position(), Some(point(0.0, 0.0)));

    let expected = 300.0 - 80.0 + TAU * 10.0;
    assert!((ctx.path().length() - expected).abs() < 1e-3);

    let path = ctx.path();
    let start = path.sample(0.0);
    let end = path.sample(1.0);
    assert!(start.distance_to(end) < 1e-9);
    assert!((start.y).abs() < 1e-9);
}

#[test]
fn round_rect_clamps_radii() {
    let mut ctx = PathContext::new();
    ctx.round_rect(0.0, 0.0, 50.0, 20.0, [100.0]).unwrap();
    // A stadium.
    let expected = 2.0 * 30.0 + PI * 20.0;
    assert!((ctx.path().length() - expected).abs() < 1e-3);

    let mut ctx = PathContext::new();
    ctx.round_rect(0.0, 0.0, 10.0, 10.0, [0.0, 0.0]).unwrap();
    assert!((ctx.path().length() - 40.0).abs() < 1e-9);
}

#[test]
fn border_radii() {
    let r: BorderRadii = 2.0.into();
    assert_eq!(r, BorderRadii::new(2.0));
    assert_eq!(BorderRadii::from([1.0]), BorderRadii::new(1.0));
    assert_eq!(
        BorderRadii::from([1.0, 2.0]),
        BorderRadii {
            top_left: 1.0,
            top_right: 2.0,
            bottom_right: 1.0,
            bottom_left: 2.0,
        }
    );
    assert_eq!(
        BorderRadii::from([1.0, 2.0, 3.0]),
        BorderRadii {
            top_left: 1.0,
            top_right: 2.0,
            bottom_right: 3.0,
            bottom_left: 2.0,
        }
    );
    assert_eq!(
        BorderRadii::from([1.0, 2.0, 3.0, 4.0]).to_string(),
        "BorderRadii(1, 2, 3, 4)"
    );
    assert_eq!(BorderRadii::new(5.0).clamped(2.0), BorderRadii::new(2.0));
}
