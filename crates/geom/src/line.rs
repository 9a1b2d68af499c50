use crate::position::Position;
use crate::segment::Segment;

/// A linear segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<P> {
    pub from: P,
    pub to: P,
}

impl<P: Position> LineSegment<P> {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: f64) -> P {
        self.from.lerp(self.to, t)
    }

    #[inline]
    pub fn from(&self) -> P {
        self.from
    }

    #[inline]
    pub fn to(&self) -> P {
        self.to
    }

    /// Returns an inverted version of this segment where the beginning and the end
    /// points are swapped.
    #[inline]
    pub fn flip(&self) -> Self {
        LineSegment {
            from: self.to,
            to: self.from,
        }
    }

    /// Split this curve into two sub-segments.
    #[inline]
    pub fn split(&self, t: f64) -> (Self, Self) {
        let split_point = self.sample(t);

        (
            LineSegment {
                from: self.from,
                to: split_point,
            },
            LineSegment {
                from: split_point,
                to: self.to,
            },
        )
    }

    /// The exact length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.from.distance_to(self.to)
    }

    /// Unit vector pointing from `from` to `to`.
    #[inline]
    pub fn direction(&self) -> P {
        self.to.minus(self.from).normalize()
    }
}

impl<P: Position> Segment for LineSegment<P> {
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

    /// The direction of a line does not depend on t.
    fn tangent(&self, _t: f64) -> P {
        self.direction()
    }
}

#[cfg(test)]
use crate::{point, point3, Point, Point3};

#[test]
fn line_endpoints() {
    let l = LineSegment {
        from: point(1.0, 2.0),
        to: point(5.0, -2.0),
    };
    assert_eq!(Segment::sample(&l, 0.0), point(1.0, 2.0));
    assert_eq!(Segment::sample(&l, 1.0), point(5.0, -2.0));
    assert_eq!(l.sample(0.5), point(3.0, 0.0));
}

#[test]
fn line_tangent() {
    let l = LineSegment {
        from: point3(0.0, 0.0, 0.0),
        to: point3(0.0, 0.0, -4.0),
    };
    assert_eq!(Segment::tangent(&l, 0.3), point3(0.0, 0.0, -1.0));
    assert_eq!(l.flip().direction(), point3(0.0, 0.0, 1.0));
    assert!((l.length() - 4.0).abs() < 1e-12);
}

#[test]
fn line_split() {
    let l: LineSegment<Point> = LineSegment {
        from: point(0.0, 0.0),
        to: point(10.0, 0.0),
    };
    let (a, b) = l.split(0.3);
    assert_eq!(a.to, point(3.0, 0.0));
    assert_eq!(b.from, point(3.0, 0.0));
    assert_eq!(b.to, l.to);
}

#[test]
fn line_points() {
    let l: LineSegment<Point3> = LineSegment {
        from: point3(0.0, 0.0, 0.0),
        to: point3(0.0, 5.0, 0.0),
    };
    let points = l.points(5);
    assert_eq!(points.len(), 6);
    for (i, p) in points.iter().enumerate() {
        assert!((p.y - i as f64).abs() < 1e-12);
    }
    assert!(!l.is_closed());
}
