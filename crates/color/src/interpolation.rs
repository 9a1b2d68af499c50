//! Interpolation between two colors.
//!
//! The RGB, HSL and HSB strategies lerp each channel in their color space. The
//! qualitative, sequential and diverging strategies work in HCL and are meant
//! for categorical, ordered and two-sided data respectively.

use curvy_geom::utils::{lerp, tri_lerp};

use crate::color::Color;
use crate::conversions::{Hcl, Hsb, Hsl, Rgb};

/// How hues are interpolated around the color wheel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum HueMode {
    /// Plain lerp between the two angles.
    #[default]
    Direct,
    /// The shorter way around the circle.
    Shortest,
    /// The longer way around the circle.
    Longest,
}

/// Exponent applied to `t` before interpolating.
///
/// Channels are indexed in the order of the color space: `[h, s, l]`,
/// `[h, s, b]` or `[h, c, l]`. The HCL strategies never apply a power to the hue.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Power {
    Uniform(f64),
    PerChannel([f64; 3]),
}

impl Power {
    #[inline]
    pub fn channel(&self, index: usize) -> f64 {
        match *self {
            Power::Uniform(p) => p,
            Power::PerChannel(p) => p[index],
        }
    }

    #[inline]
    fn apply(&self, t: f64, index: usize) -> f64 {
        t.powf(self.channel(index))
    }
}

impl Default for Power {
    fn default() -> Self {
        Power::Uniform(1.0)
    }
}

impl From<f64> for Power {
    fn from(p: f64) -> Self {
        Power::Uniform(p)
    }
}

impl From<[f64; 3]> for Power {
    fn from(p: [f64; 3]) -> Self {
        Power::PerChannel(p)
    }
}

/// An interpolation strategy and its parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Interpolation {
    Rgb {
        power: f64,
    },
    Hsl {
        power: Power,
        hue_mode: HueMode,
    },
    Hsb {
        power: Power,
        hue_mode: HueMode,
    },
    Qualitative {
        hue_mode: HueMode,
    },
    Sequential {
        power: Power,
        hue_mode: HueMode,
        /// Peak chroma reached in the middle of the scale. Chroma is interpolated
        /// linearly when `None`.
        chroma_max: Option<f64>,
    },
    Diverging {
        power: Power,
    },
}

impl Interpolation {
    pub fn rgb() -> Self {
        Interpolation::Rgb { power: 1.0 }
    }

    pub fn hsl() -> Self {
        Interpolation::Hsl {
            power: Power::default(),
            hue_mode: HueMode::default(),
        }
    }

    pub fn hsb() -> Self {
        Interpolation::Hsb {
            power: Power::default(),
            hue_mode: HueMode::default(),
        }
    }

    pub fn qualitative() -> Self {
        Interpolation::Qualitative {
            hue_mode: HueMode::default(),
        }
    }

    pub fn sequential() -> Self {
        Interpolation::Sequential {
            power: Power::default(),
            hue_mode: HueMode::default(),
            chroma_max: None,
        }
    }

    pub fn diverging() -> Self {
        Interpolation::Diverging {
            power: Power::default(),
        }
    }

    /// The color at `t` between `from` and `to`.
    pub fn interpolate(&self, t: f64, from: &Color, to: &Color) -> Color {
        match *self {
            Interpolation::Rgb { power } => {
                Color::from_rgb(lerp_rgb(t, from.rgb(), to.rgb(), power))
            }
            Interpolation::Hsl { power, hue_mode } => {
                Color::from_hsl(lerp_hsl(t, from.hsl(), to.hsl(), power, hue_mode))
            }
            Interpolation::Hsb { power, hue_mode } => {
                Color::from_hsb(lerp_hsb(t, from.hsb(), to.hsb(), power, hue_mode))
            }
            Interpolation::Qualitative { hue_mode } => {
                Color::from_hcl(interpolate_qualitative(t, from.hcl(), to.hcl(), hue_mode))
            }
            Interpolation::Sequential {
                power,
                hue_mode,
                chroma_max,
            } => Color::from_hcl(interpolate_sequential(
                t,
                from.hcl(),
                to.hcl(),
                power,
                hue_mode,
                chroma_max,
            )),
            Interpolation::Diverging { power } => {
                Color::from_hcl(interpolate_diverging(t, from.hcl(), to.hcl(), power))
            }
        }
    }
}

impl Default for Interpolation {
    fn default() -> Self {
        Interpolation::rgb()
    }
}

/// Interpolates between two hues in degrees.
///
/// With `Shortest` and `Longest` the result is normalized to `[0, 360)`.
pub fn lerp_hue(t: f64, h1: f64, h2: f64, mode: HueMode) -> f64 {
    let mut delta = ((h2 - h1 + 540.0) % 360.0) - 180.0;
    match mode {
        HueMode::Direct => return lerp(t, h1, h2),
        HueMode::Shortest => {}
        HueMode::Longest => {
            delta = if delta > 0.0 {
                delta - 360.0
            } else {
                delta + 360.0
            };
        }
    }

    (h1 + t * delta + 360.0) % 360.0
}

pub fn lerp_rgb(t: f64, [r1, g1, b1]: Rgb, [r2, g2, b2]: Rgb, power: f64) -> Rgb {
    let t = t.powf(power);
    [lerp(t, r1, r2), lerp(t, g1, g2), lerp(t, b1, b2)]
}

pub fn lerp_hsl(
    t: f64,
    [h1, s1, l1]: Hsl,
    [h2, s2, l2]: Hsl,
    power: Power,
    hue_mode: HueMode,
) -> Hsl {
    [
        lerp_hue(power.apply(t, 0), h1, h2, hue_mode),
        lerp(power.apply(t, 1), s1, s2),
        lerp(power.apply(t, 2), l1, l2),
    ]
}

pub fn lerp_hsb(
    t: f64,
    [h1, s1, b1]: Hsb,
    [h2, s2, b2]: Hsb,
    power: Power,
    hue_mode: HueMode,
) -> Hsb {
    [
        lerp_hue(power.apply(t, 0), h1, h2, hue_mode),
        lerp(power.apply(t, 1), s1, s2),
        lerp(power.apply(t, 2), b1, b2),
    ]
}

/// Hue moves, chroma and luminance stay at the start color's values.
pub fn interpolate_qualitative(
    t: f64,
    [h1, c1, l1]: Hcl,
    [h2, _, _]: Hcl,
    hue_mode: HueMode,
) -> Hcl {
    [lerp_hue(t, h1, h2, hue_mode), c1, l1]
}

/// Hue moves with `t`, chroma and luminance follow their own powers.
///
/// With a `chroma_max` the chroma rises to that peak and falls back to the end
/// chroma, see [`tri_lerp`].
pub fn interpolate_sequential(
    t: f64,
    [h1, c1, l1]: Hcl,
    [h2, c2, l2]: Hcl,
    power: Power,
    hue_mode: HueMode,
    chroma_max: Option<f64>,
) -> Hcl {
    let tc = power.apply(t, 1);
    let tl = power.apply(t, 2);
    let c = match chroma_max {
        Some(peak) => tri_lerp(tc, c1, c2, peak),
        None => lerp(tc, c1, c2),
    };

    [lerp_hue(t, h1, h2, hue_mode), c, lerp(tl, l1, l2)]
}

/// Two sided scale meeting at a neutral color.
///
/// The hue is the start hue below the middle and the end hue above it. Chroma
/// goes to zero in the middle, where the hue is zero as well.
pub fn interpolate_diverging(t: f64, [h1, c1, l1]: Hcl, [h2, c2, l2]: Hcl, power: Power) -> Hcl {
    let tc = power.apply(t, 1);
    let tl = power.apply(t, 2);

    let h = if tc < 0.5 {
        h1
    } else if tc > 0.5 {
        h2
    } else {
        0.0
    };
    let c = if tc == 0.5 {
        0.0
    } else {
        tri_lerp(tc, c1, c2, 0.0)
    };

    [h, c, lerp(tl, l1, l2)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn hue_modes() {
        assert_eq!(lerp_hue(0.5, 350.0, 10.0, HueMode::Direct), 180.0);
        assert_abs_diff_eq!(lerp_hue(0.5, 350.0, 10.0, HueMode::Shortest), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(lerp_hue(0.25, 350.0, 10.0, HueMode::Shortest), 355.0, epsilon = 1e-12);
        assert_abs_diff_eq!(lerp_hue(0.5, 10.0, 90.0, HueMode::Shortest), 50.0, epsilon = 1e-12);
        assert_abs_diff_eq!(lerp_hue(0.5, 10.0, 90.0, HueMode::Longest), 230.0, epsilon = 1e-12);
        assert_abs_diff_eq!(lerp_hue(0.5, 350.0, 10.0, HueMode::Longest), 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(lerp_hue(1.0, 10.0, 90.0, HueMode::Longest), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn powers() {
        let rgb = lerp_rgb(0.5, [0.0; 3], [1.0; 3], 2.0);
        assert_eq!(rgb, [0.25; 3]);

        let hsl = lerp_hsl(
            0.5,
            [0.0, 0.0, 0.0],
            [100.0, 1.0, 1.0],
            Power::PerChannel([1.0, 2.0, 3.0]),
            HueMode::Direct,
        );
        assert_abs_diff_eq!(hsl[0], 50.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hsl[1], 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(hsl[2], 0.125, epsilon = 1e-12);

        let hsb = lerp_hsb(
            0.5,
            [0.0, 0.0, 0.0],
            [100.0, 1.0, 1.0],
            Power::Uniform(2.0),
            HueMode::Direct,
        );
        assert_abs_diff_eq!(hsb[0], 25.0, epsilon = 1e-12);
    }

    #[test]
    fn qualitative() {
        let hcl =
            interpolate_qualitative(0.5, [0.0, 40.0, 60.0], [90.0, 10.0, 20.0], HueMode::Direct);
        assert_eq!(hcl, [45.0, 40.0, 60.0]);
    }

    #[test]
    fn sequential() {
        let from = [0.0, 20.0, 90.0];
        let to = [60.0, 40.0, 30.0];
        let hcl = interpolate_sequential(0.5, from, to, Power::default(), HueMode::Direct, None);
        assert_abs_diff_eq!(hcl[0], 30.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hcl[1], 30.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hcl[2], 60.0, epsilon = 1e-12);

        // The peak sits at |80 - 20| / (|80 - 20| + |80 - 40|) = 0.6.
        let hcl =
            interpolate_sequential(0.6, from, to, Power::default(), HueMode::Direct, Some(80.0));
        assert_abs_diff_eq!(hcl[1], 80.0, epsilon = 1e-9);

        // Hue ignores the powers.
        let hcl = interpolate_sequential(0.5, from, to, Power::Uniform(2.0), HueMode::Direct, None);
        assert_abs_diff_eq!(hcl[0], 30.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hcl[1], 25.0, epsilon = 1e-12);
    }

    #[test]
    fn diverging() {
        let from = [30.0, 50.0, 40.0];
        let to = [250.0, 30.0, 60.0];

        let start = interpolate_diverging(0.0, from, to, Power::default());
        assert_eq!(start, from);
        let end = interpolate_diverging(1.0, from, to, Power::default());
        assert_abs_diff_eq!(end[0], 250.0, epsilon = 1e-12);
        assert_abs_diff_eq!(end[1], 30.0, epsilon = 1e-12);
        assert_abs_diff_eq!(end[2], 60.0, epsilon = 1e-12);

        let middle = interpolate_diverging(0.5, from, to, Power::default());
        assert_eq!(middle, [0.0, 0.0, 50.0]);

        let before = interpolate_diverging(0.25, from, to, Power::default());
        assert_eq!(before[0], 30.0);
        assert!(before[1] < 50.0 && before[1] > 0.0);
        let after = interpolate_diverging(0.75, from, to, Power::default());
        assert_eq!(after[0], 250.0);
        assert!(after[1] < 30.0 && after[1] > 0.0);
    }

    #[test]
    fn interpolate_colors() {
        let black = Color::new(0.0, 0.0, 0.0);
        let white = Color::new(1.0, 1.0, 1.0);
        assert_eq!(
            Interpolation::default().interpolate(0.5, &black, &white),
            Color::new(0.5, 0.5, 0.5)
        );

        let red = Color::new(1.0, 0.0, 0.0);
        let blue = Color::new(0.0, 0.0, 1.0);
        let hsl = Interpolation::Hsl {
            power: Power::default(),
            hue_mode: HueMode::Shortest,
        };
        // 0 -> 240 the short way passes through magenta.
        let magenta = hsl.interpolate(0.5, &red, &blue);
        assert_abs_diff_eq!(magenta.r, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(magenta.g, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(magenta.b, 1.0, epsilon = 1e-9);

        let green = Interpolation::hsl().interpolate(0.5, &red, &blue);
        assert_abs_diff_eq!(green.g, 1.0, epsilon = 1e-9);
    }
}
