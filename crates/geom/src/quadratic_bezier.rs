use crate::position::Position;
use crate::segment::Segment;
use crate::{CubicBezierSegment, LineSegment};

/// A curve segment defined by three points: the beginning of the segment, a control
/// point and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * from + 2 * (1 - t) * t * ctrl + t² * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticBezierSegment<P> {
    pub from: P,
    pub ctrl: P,
    pub to: P,
}

impl<P: Position> QuadraticBezierSegment<P> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f64) -> P {
        let t2 = t * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;

        self.from
            .scale(one_t2)
            .plus(self.ctrl.scale(2.0 * one_t * t))
            .plus(self.to.scale(t2))
    }

    /// Sample the curve's derivative at t (expecting t between 0 and 1).
    pub fn derivative(&self, t: f64) -> P {
        let c0 = 2.0 * t - 2.0;
        let c1 = -4.0 * t + 2.0;
        let c2 = 2.0 * t;
        self.from
            .scale(c0)
            .plus(self.ctrl.scale(c1))
            .plus(self.to.scale(c2))
    }

    /// Swap the beginning and the end of the segment.
    pub fn flip(&self) -> Self {
        QuadraticBezierSegment {
            from: self.to,
            ctrl: self.ctrl,
            to: self.from,
        }
    }

    /// Split this curve into two sub-curves.
    pub fn split(&self, t: f64) -> (Self, Self) {
        let split_point = self.sample(t);

        (
            QuadraticBezierSegment {
                from: self.from,
                ctrl: self.from.lerp(self.ctrl, t),
                to: split_point,
            },
            QuadraticBezierSegment {
                from: split_point,
                ctrl: self.ctrl.lerp(self.to, t),
                to: self.to,
            },
        )
    }

    /// Elevate this curve to a third order bézier.
    pub fn to_cubic(&self) -> CubicBezierSegment<P> {
        CubicBezierSegment {
            from: self.from,
            ctrl1: self.from.plus(self.ctrl.scale(2.0)).scale(1.0 / 3.0),
            ctrl2: self.to.plus(self.ctrl.scale(2.0)).scale(1.0 / 3.0),
            to: self.to,
        }
    }

    #[inline]
    pub fn baseline(&self) -> LineSegment<P> {
        LineSegment {
            from: self.from,
            to: self.to,
        }
    }
}

impl<P: Position> Segment for QuadraticBezierSegment<P> {
    type Point = P;

    fn sample(&self, t: f64) -> P {
        self.sample(t)
    }

    fn from(&self) -> P {
        self.from
    }

    fn to(&self) -> P {
        self.to
    }
}

#[cfg(test)]
use crate::{point, point3, Point};

#[test]
fn quadratic_endpoints() {
    let q = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(1.0, 2.0),
        to: point(2.0, 0.0),
    };
    assert_eq!(q.sample(0.0), q.from);
    assert_eq!(q.sample(1.0), q.to);
    assert!((q.sample(0.5).x - 1.0).abs() < 1e-12);
    assert!((q.sample(0.5).y - 1.0).abs() < 1e-12);
}

#[test]
fn quadratic_split_matches_sample() {
    let q = QuadraticBezierSegment {
        from: point3(0.0, 0.0, 0.0),
        ctrl: point3(3.0, 7.0, 1.0),
        to: point3(5.0, 1.0, 2.0),
    };
    let (a, b) = q.split(0.4);
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        assert!(a.sample(t).distance_to(q.sample(t * 0.4)) < 1e-9);
        assert!(b.sample(t).distance_to(q.sample(0.4 + t * 0.6)) < 1e-9);
    }
}

#[test]
fn quadratic_to_cubic() {
    let q: QuadraticBezierSegment<Point> = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(4.0, 6.0),
        to: point(10.0, 0.0),
    };
    let c = q.to_cubic();
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        assert!(c.sample(t).distance_to(q.sample(t)) < 1e-9);
    }
}

#[test]
fn quadratic_tangent() {
    let q = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(1.0, 1.0),
        to: point(2.0, 0.0),
    };
    // The curve is symmetric, its tangent is horizontal at the middle.
    let tangent = Segment::tangent(&q, 0.5);
    assert!((tangent.x - 1.0).abs() < 1e-6);
    assert!(tangent.y.abs() < 1e-6);

    let d = q.derivative(0.0).normalize();
    let start = Segment::tangent(&q, 0.0);
    assert!(d.distance_to(start) < 1e-3);
}
