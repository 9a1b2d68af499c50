#![deny(bare_trait_objects)]

//! Parametric curves, arc-length parametrized paths and perceptual color palettes.
//!
//! # Crates
//!
//! This meta-crate (`curvy`) reexports the following sub-crates for convenience:
//!
//! * **curvy_geom** - 2D and 3D curves (lines, béziers, Catmull-Rom, splines,
//!   polylines, elliptic arcs) with arc-length reparametrization.
//! * **curvy_path** - Paths chaining curves into a single curve, a canvas-like
//!   path builder and SVG path data output.
//! * **curvy_color** - Color space conversions, color interpolation, scales and palettes.
//!
//! Each `curvy_<name>` crate is reexported as a `<name>` module in `curvy`. For example:
//!
//! ```ignore
//! use curvy_path::PathContext;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! use curvy::path::PathContext;
//! ```
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ## Walking along a path
//!
//! ```
//! use curvy::geom::{point, Angle};
//! use curvy::path::PathContext;
//!
//! let mut ctx = PathContext::new();
//! ctx.move_to(point(0.0, 0.0));
//! ctx.line_to(point(100.0, 0.0));
//! ctx.arc(
//!     point(100.0, 50.0),
//!     50.0,
//!     -Angle::frac_pi_2(),
//!     Angle::frac_pi_2(),
//!     false,
//! );
//!
//! let path = ctx.into_path();
//! // Points are spread evenly along the line and the half circle.
//! let points = path.spaced_points(10);
//! assert_eq!(points.len(), 11);
//! ```
//!
//! ## Generating a palette
//!
//! ```
//! use curvy::color::{Color, ColorPalette, Generator};
//!
//! let mut palette = ColorPalette::new(Color::from_hex(0x3399ff));
//! palette.subscribe("dark", Generator::dark_scale());
//!
//! for i in 0..9 {
//!     println!("{}", palette.get_color("dark", i as f64 / 8.0));
//! }
//! ```

pub use curvy_color as color;
pub use curvy_geom as geom;
pub use curvy_path as path;

pub use curvy_color::{Color, ColorPalette, ColorScale};
pub use curvy_geom::{point, point3, vector, Curve, Point, Point3, Segment, Vector};
pub use curvy_path::{Path, PathContext};
