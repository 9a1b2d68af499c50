use crate::position::Position;
use crate::segment::Segment;
use crate::LineSegment;

/// A cubic bézier curve segment defined by four points: the beginning of the segment,
/// two control points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment<P> {
    pub from: P,
    pub ctrl1: P,
    pub ctrl2: P,
    pub to: P,
}

impl<P: Position> CubicBezierSegment<P> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f64) -> P {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from
            .scale(one_t3)
            .plus(self.ctrl1.scale(3.0 * one_t2 * t))
            .plus(self.ctrl2.scale(3.0 * one_t * t2))
            .plus(self.to.scale(t3))
    }

    /// Sample the curve's derivative at t (expecting t between 0 and 1).
    pub fn derivative(&self, t: f64) -> P {
        let one_t = 1.0 - t;
        let c0 = -3.0 * one_t * one_t;
        let c1 = 3.0 * (one_t * one_t - 2.0 * t * one_t);
        let c2 = 3.0 * (2.0 * t * one_t - t * t);
        let c3 = 3.0 * t * t;

        self.from
            .scale(c0)
            .plus(self.ctrl1.scale(c1))
            .plus(self.ctrl2.scale(c2))
            .plus(self.to.scale(c3))
    }

    /// Swap the beginning and the end of the segment.
    pub fn flip(&self) -> Self {
        CubicBezierSegment {
            from: self.to,
            ctrl1: self.ctrl2,
            ctrl2: self.ctrl1,
            to: self.from,
        }
    }

    /// Split this curve into two sub-curves.
    pub fn split(&self, t: f64) -> (Self, Self) {
        let ctrl1a = self.from.lerp(self.ctrl1, t);
        let ctrl2a = self.ctrl1.lerp(self.ctrl2, t);
        let ctrl1aa = ctrl1a.lerp(ctrl2a, t);
        let ctrl3a = self.ctrl2.lerp(self.to, t);
        let ctrl2aa = ctrl2a.lerp(ctrl3a, t);
        let ctrl1aaa = ctrl1aa.lerp(ctrl2aa, t);

        (
            CubicBezierSegment {
                from: self.from,
                ctrl1: ctrl1a,
                ctrl2: ctrl1aa,
                to: ctrl1aaa,
            },
            CubicBezierSegment {
                from: ctrl1aaa,
                ctrl1: ctrl2aa,
                ctrl2: ctrl3a,
                to: self.to,
            },
        )
    }

    #[inline]
    pub fn baseline(&self) -> LineSegment<P> {
        LineSegment {
            from: self.from,
            to: self.to,
        }
    }
}

impl<P: Position> Segment for CubicBezierSegment<P> {
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
use crate::{point, point3};

#[test]
fn cubic_endpoints() {
    let c = CubicBezierSegment {
        from: point3(0.0, 0.0, 0.0),
        ctrl1: point3(1.0, 2.0, 3.0),
        ctrl2: point3(4.0, -2.0, 1.0),
        to: point3(5.0, 5.0, 5.0),
    };
    assert_eq!(c.sample(0.0), c.from);
    assert_eq!(c.sample(1.0), c.to);
}

#[test]
fn cubic_split() {
    let c = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(0.0, 10.0),
        ctrl2: point(10.0, 10.0),
        to: point(10.0, 0.0),
    };
    let (a, b) = c.split(0.5);
    assert!(a.to.distance_to(point(5.0, 7.5)) < 1e-12);
    assert_eq!(a.to, b.from);
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        assert!(a.sample(t).distance_to(c.sample(t * 0.5)) < 1e-9);
        assert!(b.sample(t).distance_to(c.sample(0.5 + t * 0.5)) < 1e-9);
    }
}

#[test]
fn cubic_derivative() {
    let c = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(1.0, 3.0),
        ctrl2: point(4.0, 3.0),
        to: point(5.0, 0.0),
    };
    // Compare with a finite difference.
    let h = 1e-6;
    for i in 1..10 {
        let t = i as f64 / 10.0;
        let fd = c.sample(t + h).minus(c.sample(t - h)).scale(0.5 / h);
        assert!(fd.distance_to(c.derivative(t)) < 1e-5);
    }
    assert!(c.flip().sample(0.25).distance_to(c.sample(0.75)) < 1e-12);
}
