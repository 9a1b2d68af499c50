use crate::{Point, Point3};

use core::fmt::Debug;

/// The vector operations the curves need from their control points.
///
/// Implemented for [`Point`] and [`Point3`]. Equality is `PartialEq`, which is exact.
pub trait Position: Copy + Debug + PartialEq {
    /// Number of coordinates.
    const DIMENSION: usize;

    fn origin() -> Self;

    /// Embeds a 2D point, putting any extra coordinate at zero.
    fn from_planar(p: Point) -> Self;

    /// Component-wise sum.
    fn plus(self, other: Self) -> Self;

    /// Component-wise difference.
    fn minus(self, other: Self) -> Self;

    fn scale(self, factor: f64) -> Self;

    /// Euclidean norm of the position seen as a vector from the origin.
    fn magnitude(self) -> f64;

    /// Scales the position to a unit vector. The origin stays at the origin.
    fn normalize(self) -> Self {
        let m = self.magnitude();
        if m == 0.0 {
            return self;
        }
        self.scale(1.0 / m)
    }

    fn distance_to(self, other: Self) -> f64 {
        other.minus(self).magnitude()
    }

    fn lerp(self, other: Self, t: f64) -> Self {
        self.plus(other.minus(self).scale(t))
    }
}

impl Position for Point {
    const DIMENSION: usize = 2;

    #[inline]
    fn origin() -> Self {
        Point::new(0.0, 0.0)
    }

    #[inline]
    fn from_planar(p: Point) -> Self {
        p
    }

    #[inline]
    fn plus(self, other: Self) -> Self {
        Point::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    fn minus(self, other: Self) -> Self {
        Point::new(self.x - other.x, self.y - other.y)
    }

    #[inline]
    fn scale(self, factor: f64) -> Self {
        Point::new(self.x * factor, self.y * factor)
    }

    #[inline]
    fn magnitude(self) -> f64 {
        self.to_vector().length()
    }
}

impl Position for Point3 {
    const DIMENSION: usize = 3;

    #[inline]
    fn origin() -> Self {
        Point3::new(0.0, 0.0, 0.0)
    }

    #[inline]
    fn from_planar(p: Point) -> Self {
        p.to_3d()
    }

    #[inline]
    fn plus(self, other: Self) -> Self {
        Point3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    #[inline]
    fn minus(self, other: Self) -> Self {
        Point3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    #[inline]
    fn scale(self, factor: f64) -> Self {
        Point3::new(self.x * factor, self.y * factor, self.z * factor)
    }

    #[inline]
    fn magnitude(self) -> f64 {
        self.to_vector().length()
    }
}

#[cfg(test)]
use crate::{point, point3};

#[test]
fn planar_embedding() {
    let p = point(1.0, 2.0);
    assert_eq!(Point::from_planar(p), p);
    assert_eq!(Point3::from_planar(p), point3(1.0, 2.0, 0.0));
}

#[test]
fn normalize_origin() {
    assert_eq!(Point::origin().normalize(), Point::origin());
    assert_eq!(Point3::origin().normalize(), Point3::origin());

    let n = point(3.0, 4.0).normalize();
    assert!((n.x - 0.6).abs() < 1e-12);
    assert!((n.y - 0.8).abs() < 1e-12);
}

#[test]
fn distance_and_lerp() {
    let a = point3(1.0, 1.0, 1.0);
    let b = point3(1.0, 4.0, 5.0);
    assert!((a.distance_to(b) - 5.0).abs() < 1e-12);
    assert_eq!(Position::lerp(a, b, 0.5), point3(1.0, 2.5, 3.0));
}
