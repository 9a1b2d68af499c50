#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Paths made of curve segments, sampled uniformly in distance.
//!
//! A [`Path`] chains [segments](PathSegment) of any shape supported by
//! [curvy_geom](geom) and samples them as a single curve whose parameter is
//! proportional to the distance travelled. Paths are generic over the dimension;
//! 2D paths can be built with the canvas-like [`PathContext`] and serialized to SVG
//! path data with the [svg](svg/index.html) module.
//!
//! This crate is reexported in [curvy](../curvy/index.html).
//!
//! # Examples
//!
//! ```
//! use curvy_path::{Path, PathContext};
//! use curvy_path::geom::{point, Curve};
//! use curvy_path::svg::{path_to_svg, SvgOptions};
//!
//! let mut ctx = PathContext::new();
//! ctx.move_to(point(0.0, 0.0));
//! ctx.line_to(point(10.0, 0.0));
//! ctx.line_to(point(10.0, 10.0));
//!
//! let path: Path<_> = ctx.into_path();
//! assert!((path.length() - 20.0).abs() < 1e-9);
//! assert!(path.sample(0.75).distance_to(point(10.0, 5.0)) < 1e-9);
//! assert_eq!(path_to_svg(&path, &SvgOptions::default()), "M0,0L10,0 L10,10");
//! ```

pub use curvy_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod context;
mod error;
pub mod path;
mod segment;
pub mod svg;

#[doc(inline)]
pub use crate::context::{BorderRadii, PathContext};
pub use crate::error::PathError;
#[doc(inline)]
pub use crate::path::{Path, DEFAULT_PATH_DIVISIONS};
pub use crate::segment::PathSegment;

// 2D and 3D paths.
pub type Path2 = Path<geom::Point>;
pub type Path3 = Path<geom::Point3>;
