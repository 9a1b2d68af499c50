#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Color space conversions, perceptual interpolation and palettes.
//!
//! This crate is reexported in [curvy](../curvy/index.html).
//!
//! # Overview.
//!
//! A [`Color`] stores RGB channels in `[0, 1]`. HSL, HSB, CIE L\*a\*b\* and HCL
//! representations are computed from them, and the raw conversions are available
//! as free functions in the [conversions](conversions/index.html) module.
//!
//! Colors are interpolated with one of the [`Interpolation`] strategies. A
//! [`ColorScale`] samples an interpolation at evenly spaced positions and a
//! [`ColorPalette`] keeps a set of named scales derived from a base color.
//!
//! ```
//! use curvy_color::{Color, ColorPalette, Generator};
//!
//! let mut palette = ColorPalette::new(Color::from_hex(0x3366cc));
//! palette.subscribe("light", Generator::light_scale());
//!
//! let tint = palette.get_color("light", 1.0);
//! assert!(tint.hsl()[2] > 0.85);
//! ```

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod color;
pub mod conversions;
mod error;
pub mod interpolation;
mod named;
pub mod palette;
pub mod scale;

#[doc(inline)]
pub use crate::color::Color;
pub use crate::error::ColorError;
#[doc(inline)]
pub use crate::interpolation::{HueMode, Interpolation, Power};
pub use crate::named::named_color;
#[doc(inline)]
pub use crate::palette::{ColorPalette, Generator};
#[doc(inline)]
pub use crate::scale::{ColorScale, ProcessingParameters, ProcessingTarget};
