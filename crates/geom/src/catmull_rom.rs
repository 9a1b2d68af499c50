use crate::position::Position;
use crate::segment::Segment;

/// A Catmull-Rom segment.
///
/// The curve runs from `from` to `to`. The two outer points only shape the tangents:
/// the tangent at `from` is `(to - prev) / 2` and the tangent at `to` is
/// `(next - from) / 2`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CatmullRomSegment<P> {
    pub prev: P,
    pub from: P,
    pub to: P,
    pub next: P,
}

impl<P: Position> CatmullRomSegment<P> {
    /// Sample the curve at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: f64) -> P {
        catmull_rom(t, self.prev, self.from, self.to, self.next)
    }

    /// Swap the beginning and the end of the segment.
    pub fn flip(&self) -> Self {
        CatmullRomSegment {
            prev: self.next,
            from: self.to,
            to: self.from,
            next: self.prev,
        }
    }
}

impl<P: Position> Segment for CatmullRomSegment<P> {
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

/// Cubic Hermite interpolation between `p1` and `p2` with Catmull-Rom tangents.
pub(crate) fn catmull_rom<P: Position>(t: f64, p0: P, p1: P, p2: P, p3: P) -> P {
    let v0 = p2.minus(p0).scale(0.5);
    let v1 = p3.minus(p1).scale(0.5);
    let t2 = t * t;
    let t3 = t * t2;

    // (2p1 - 2p2 + v0 + v1)t³ + (-3p1 + 3p2 - 2v0 - v1)t² + v0 t + p1
    let a = p1.scale(2.0).minus(p2.scale(2.0)).plus(v0).plus(v1);
    let b = p2
        .scale(3.0)
        .minus(p1.scale(3.0))
        .minus(v0.scale(2.0))
        .minus(v1);

    a.scale(t3).plus(b.scale(t2)).plus(v0.scale(t)).plus(p1)
}

#[cfg(test)]
use crate::{point, point3};

#[test]
fn catmull_rom_endpoints() {
    let c = CatmullRomSegment {
        prev: point(-1.0, 3.0),
        from: point(0.0, 0.0),
        to: point(4.0, 1.0),
        next: point(7.0, -3.0),
    };
    assert!(c.sample(0.0).distance_to(c.from) < 1e-12);
    assert!(c.sample(1.0).distance_to(c.to) < 1e-12);
}

#[test]
fn catmull_rom_tangents() {
    let c = CatmullRomSegment {
        prev: point3(0.0, 0.0, 0.0),
        from: point3(1.0, 0.0, 0.0),
        to: point3(2.0, 0.0, 0.0),
        next: point3(3.0, 0.0, 0.0),
    };
    // Evenly spaced collinear points give a straight line at constant speed.
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        assert!(c.sample(t).distance_to(point3(1.0 + t, 0.0, 0.0)) < 1e-12);
    }
}

#[test]
fn catmull_rom_flip() {
    let c = CatmullRomSegment {
        prev: point(-1.0, 3.0),
        from: point(0.0, 0.0),
        to: point(4.0, 1.0),
        next: point(7.0, -3.0),
    };
    let f = c.flip();
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        assert!(f.sample(t).distance_to(c.sample(1.0 - t)) < 1e-9);
    }
}
