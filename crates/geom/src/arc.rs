//! Elliptic arc related maths and tools.

use core::f64::consts::{PI, TAU};

use arrayvec::ArrayVec;

use crate::segment::Segment;
use crate::{point, Angle, Point, Vector, EPSILON};

/// An elliptic arc described in canvas terms: a center, two radii, a rotation
/// of the x axis and a start and end angle.
///
/// The angles are not required to be ordered. The effective sweep is given by
/// [`EllipticArc::delta_angle`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct EllipticArc {
    pub center: Point,
    pub radii: Vector,
    pub x_rotation: Angle<f64>,
    pub start_angle: Angle<f64>,
    pub end_angle: Angle<f64>,
    pub counterclockwise: bool,
}

/// An elliptic arc in the SVG endpoint parametrization.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SvgArc {
    pub from: Point,
    pub to: Point,
    pub radii: Vector,
    pub x_rotation: Angle<f64>,
    pub flags: ArcFlags,
}

/// Flag parameters for arcs as described by the SVG specification.
///
/// For most situations using the SVG arc notation, there are four different arcs
/// (two different ellipses, each with two different arc sweeps) that satisfy the
/// arc parameters. The `large_arc` and `sweep` flags indicate which one of the
/// four arcs are drawn.
///
/// See more examples in the [SVG specification](https://svgwg.org/specs/paths/)
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcFlags {
    /// Of the four candidate arc sweeps, two will represent an arc sweep of greater
    /// than or equal to 180 degrees (the "large-arc"), and two will represent an arc
    /// sweep of less than or equal to 180 degrees (the "small arc"). If `large_arc`
    /// is `true`, then one of the two larger arc sweeps will be chosen; otherwise, if
    /// `large_arc` is `false`, one of the smaller arc sweeps will be chosen.
    pub large_arc: bool,
    /// If `sweep` is `true`, then the arc will be drawn in a "positive-angle" direction
    /// (the angle increases as the arc is drawn).
    pub sweep: bool,
}

impl EllipticArc {
    pub fn new(
        center: Point,
        radii: Vector,
        x_rotation: Angle<f64>,
        start_angle: Angle<f64>,
        end_angle: Angle<f64>,
        counterclockwise: bool,
    ) -> Self {
        EllipticArc {
            center,
            radii,
            x_rotation,
            start_angle,
            end_angle,
            counterclockwise,
        }
    }

    /// A circular arc.
    pub fn circle(
        center: Point,
        radius: f64,
        start_angle: Angle<f64>,
        end_angle: Angle<f64>,
        counterclockwise: bool,
    ) -> Self {
        EllipticArc {
            center,
            radii: Vector::new(radius, radius),
            x_rotation: Angle::zero(),
            start_angle,
            end_angle,
            counterclockwise,
        }
    }

    /// A full, clockwise ellipse starting on its positive x axis.
    pub fn ellipse(center: Point, radii: Vector, x_rotation: Angle<f64>) -> Self {
        EllipticArc {
            center,
            radii,
            x_rotation,
            start_angle: Angle::zero(),
            end_angle: Angle::radians(TAU),
            counterclockwise: false,
        }
    }

    /// The signed angle swept by the arc.
    ///
    /// The difference between the end and start angles is wrapped into `[0, 2π)`.
    /// A difference that wraps to zero is a full revolution unless the two angles
    /// were already equal, in which case the arc is empty. Counterclockwise arcs
    /// sweep the complementary angle in the negative direction.
    pub fn delta_angle(&self) -> f64 {
        let raw = self.end_angle.radians - self.start_angle.radians;
        let is_empty = raw.abs() <= EPSILON;

        let mut delta = raw.rem_euclid(TAU);
        if delta < EPSILON {
            delta = if is_empty { 0.0 } else { TAU };
        }

        if self.counterclockwise && !is_empty {
            delta = if delta == TAU { -TAU } else { delta - TAU };
        }

        delta
    }

    /// Sample the arc at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f64) -> Point {
        let angle = self.start_angle.radians + t * self.delta_angle();
        let (sin, cos) = angle.sin_cos();
        let mut x = self.center.x + self.radii.x * cos;
        let mut y = self.center.y + self.radii.y * sin;

        if self.x_rotation.radians != 0.0 {
            let (sin_r, cos_r) = self.x_rotation.radians.sin_cos();
            let tx = x - self.center.x;
            let ty = y - self.center.y;
            x = tx * cos_r - ty * sin_r + self.center.x;
            y = tx * sin_r + ty * cos_r + self.center.y;
        }

        point(x, y)
    }

    #[inline]
    pub fn start_point(&self) -> Point {
        self.sample(0.0)
    }

    #[inline]
    pub fn end_point(&self) -> Point {
        self.sample(1.0)
    }

    #[inline]
    pub fn is_circular(&self) -> bool {
        self.radii.x == self.radii.y
    }

    /// Whether the arc sweeps a whole revolution.
    pub fn is_full(&self) -> bool {
        self.delta_angle().abs() > TAU - EPSILON
    }

    /// Swap the direction of the arc.
    pub fn flip(&self) -> Self {
        let mut arc = *self;
        arc.start_angle = self.end_angle;
        arc.end_angle = self.start_angle;
        arc.counterclockwise = !self.counterclockwise;
        arc
    }

    /// Converts the arc to the SVG endpoint parametrization.
    ///
    /// A full revolution cannot be expressed by a single SVG arc since its endpoints
    /// coincide, so it is split at its opposite point. Empty arcs produce nothing.
    pub fn to_svg_arcs(&self) -> ArrayVec<SvgArc, 2> {
        let mut arcs = ArrayVec::new();
        let sweep = self.delta_angle().abs();
        let flags = ArcFlags {
            large_arc: sweep >= PI,
            sweep: !self.counterclockwise,
        };

        if sweep > TAU - EPSILON {
            let half = ArcFlags {
                large_arc: true,
                ..flags
            };
            let from = self.sample(0.0);
            let middle = self.sample(0.5);
            arcs.push(self.svg_arc(from, middle, half));
            arcs.push(self.svg_arc(middle, from, half));
        } else if sweep > EPSILON {
            arcs.push(self.svg_arc(self.sample(0.0), self.sample(1.0), flags));
        }

        arcs
    }

    fn svg_arc(&self, from: Point, to: Point, flags: ArcFlags) -> SvgArc {
        SvgArc {
            from,
            to,
            radii: self.radii,
            x_rotation: self.x_rotation,
            flags,
        }
    }
}

impl Segment for EllipticArc {
    type Point = Point;

    fn sample(&self, t: f64) -> Point {
        self.sample(t)
    }
}

#[cfg(test)]
use crate::position::Position;

#[test]
fn full_circle_midpoint() {
    let arc = EllipticArc::circle(
        point(0.0, 0.0),
        1.0,
        Angle::zero(),
        Angle::radians(TAU),
        false,
    );
    assert_eq!(arc.delta_angle(), TAU);
    let mid = arc.sample(0.5);
    assert!((mid.x + 1.0).abs() < 1e-12);
    assert!(mid.y.abs() < 1e-12);
    assert!(arc.is_full());
    assert!(arc.is_circular());
}

#[test]
fn empty_arc() {
    let arc = EllipticArc::circle(
        point(3.0, 4.0),
        2.0,
        Angle::radians(1.0),
        Angle::radians(1.0),
        false,
    );
    assert_eq!(arc.delta_angle(), 0.0);
    assert_eq!(arc.sample(0.0), arc.sample(1.0));
    assert!(arc.to_svg_arcs().is_empty());

    // Same thing counterclockwise.
    let arc = EllipticArc {
        counterclockwise: true,
        ..arc
    };
    assert_eq!(arc.delta_angle(), 0.0);
}

#[test]
fn wrapped_angles() {
    let arc = |start: f64, end: f64, ccw: bool| {
        EllipticArc::circle(
            point(0.0, 0.0),
            1.0,
            Angle::radians(start),
            Angle::radians(end),
            ccw,
        )
        .delta_angle()
    };

    assert!((arc(0.0, PI / 2.0, false) - PI / 2.0).abs() < 1e-12);
    assert!((arc(0.0, PI / 2.0, true) + 3.0 * PI / 2.0).abs() < 1e-12);
    assert!((arc(PI / 2.0, 0.0, false) - 3.0 * PI / 2.0).abs() < 1e-12);
    assert!((arc(PI / 2.0, 0.0, true) + PI / 2.0).abs() < 1e-12);
    // A difference of several turns wraps to a full revolution.
    assert_eq!(arc(0.0, 2.0 * TAU, false), TAU);
    assert_eq!(arc(0.0, TAU, true), -TAU);
}

#[test]
fn rotated_ellipse() {
    let arc = EllipticArc::new(
        point(1.0, 1.0),
        Vector::new(2.0, 1.0),
        Angle::radians(PI / 2.0),
        Angle::zero(),
        Angle::radians(PI),
        false,
    );
    // The major axis is now vertical.
    let start = arc.start_point();
    assert!((start.x - 1.0).abs() < 1e-12);
    assert!((start.y - 3.0).abs() < 1e-12);
    let end = arc.end_point();
    assert!((end.x - 1.0).abs() < 1e-12);
    assert!((end.y + 1.0).abs() < 1e-12);
}

#[test]
fn svg_arcs() {
    let quarter = EllipticArc::circle(
        point(0.0, 0.0),
        1.0,
        Angle::zero(),
        Angle::radians(PI / 2.0),
        false,
    );
    let arcs = quarter.to_svg_arcs();
    assert_eq!(arcs.len(), 1);
    assert_eq!(
        arcs[0].flags,
        ArcFlags {
            large_arc: false,
            sweep: true
        }
    );
    assert!(arcs[0].to.distance_to(point(0.0, 1.0)) < 1e-12);

    let long_way = EllipticArc {
        counterclockwise: true,
        ..quarter
    };
    let arcs = long_way.to_svg_arcs();
    assert_eq!(
        arcs[0].flags,
        ArcFlags {
            large_arc: true,
            sweep: false
        }
    );

    let full = EllipticArc::ellipse(point(0.0, 0.0), Vector::new(2.0, 1.0), Angle::zero());
    let arcs = full.to_svg_arcs();
    assert_eq!(arcs.len(), 2);
    assert!(arcs[0].to.distance_to(point(-2.0, 0.0)) < 1e-12);
    assert_eq!(arcs[1].to, arcs[0].from);
}
