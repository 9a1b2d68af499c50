#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]

//! Parametric 2D and 3D curves on top of euclid.
//!
//! This crate is reexported in [curvy](../curvy/index.html).
//!
//! # Overview.
//!
//! This crate implements the maths to work with:
//!
//! - line segments,
//! - quadratic and cubic bézier curves,
//! - Catmull-Rom segments and splines,
//! - polylines,
//! - elliptic arcs.
//!
//! Every shape is a plain `t ∈ [0, 1] → point` function implementing the [`Segment`]
//! trait. Shapes other than elliptic arcs are generic over the dimension through
//! the [`Position`] trait which is implemented for [`Point`] and [`Point3`].
//!
//! # Arc length
//!
//! The natural parameter `t` of most curves does not advance at constant speed.
//! The [`Curve`] trait adds a second parameter `u`, proportional to the distance
//! travelled along the curve, on top of a cumulative length table obtained by
//! sampling the curve. [`Measured`] owns a shape together with that table and
//! recomputes it lazily whenever the shape is modified.
//!
//! ```
//! use curvy_geom::{point, Curve, LineSegment, Measured};
//!
//! let line = Measured::new(LineSegment {
//!     from: point(0.0, 0.0),
//!     to: point(10.0, 0.0),
//! });
//!
//! assert!((line.length() - 10.0).abs() < 1e-9);
//! assert!((line.point_at(0.25).x - 2.5).abs() < 1e-9);
//! ```

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod arc;
mod catmull_rom;
mod cubic_bezier;
mod line;
pub mod measure;
mod polyline;
mod position;
mod quadratic_bezier;
mod segment;
pub mod utils;

#[doc(inline)]
pub use crate::arc::{ArcFlags, EllipticArc, SvgArc};
#[doc(inline)]
pub use crate::catmull_rom::CatmullRomSegment;
#[doc(inline)]
pub use crate::cubic_bezier::CubicBezierSegment;
#[doc(inline)]
pub use crate::line::LineSegment;
#[doc(inline)]
pub use crate::measure::{Curve, Measured};
#[doc(inline)]
pub use crate::polyline::{Polyline, Spline};
#[doc(inline)]
pub use crate::position::Position;
#[doc(inline)]
pub use crate::quadratic_bezier::QuadraticBezierSegment;
#[doc(inline)]
pub use crate::segment::Segment;

/// Tolerance used by the geometric comparisons of this crate.
pub const EPSILON: f64 = 1e-8;

/// Number of samples taken to build the arc length table of a curve.
pub const DEFAULT_ARC_LENGTH_DIVISIONS: usize = 200;

/// Default number of divisions of `points` and `spaced_points`.
pub const DEFAULT_DIVISIONS: usize = 5;

/// Parameter offset used to estimate tangents by finite differences.
pub const TANGENT_DELTA: f64 = 1e-4;

/// Alias for `euclid::default::Point2D<f64>`.
pub type Point = euclid::default::Point2D<f64>;

/// Alias for `euclid::default::Point3D<f64>`.
pub type Point3 = euclid::default::Point3D<f64>;

/// Alias for `euclid::default::Vector2D<f64>`.
pub type Vector = euclid::default::Vector2D<f64>;

/// Alias for `euclid::default::Transform2D<f64>`.
pub type Transform = euclid::default::Transform2D<f64>;

/// An angle in radians.
pub use euclid::Angle;

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Shorthand for `Point3::new(x, y, z)`.
#[inline]
pub fn point3(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

// 2D curves.
pub type LineCurve = LineSegment<Point>;
pub type QuadraticBezierCurve = QuadraticBezierSegment<Point>;
pub type CubicBezierCurve = CubicBezierSegment<Point>;
pub type CatmullRomCurve = CatmullRomSegment<Point>;
pub type PolylineCurve = Polyline<Point>;
pub type SplineCurve = Spline<Point>;

// 3D curves.
pub type LineCurve3 = LineSegment<Point3>;
pub type QuadraticBezierCurve3 = QuadraticBezierSegment<Point3>;
pub type CubicBezierCurve3 = CubicBezierSegment<Point3>;
pub type CatmullRomCurve3 = CatmullRomSegment<Point3>;
pub type PolylineCurve3 = Polyline<Point3>;
pub type SplineCurve3 = Spline<Point3>;
