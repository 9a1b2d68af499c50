//! Color scales and their post-processing.

use std::ops::Index;
use std::slice;

use curvy_geom::utils::{clamp, lerp};

use crate::color::Color;
use crate::interpolation::Interpolation;

/// What happens to one channel when a color is processed.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ProcessingTarget {
    /// Leave the channel untouched.
    #[default]
    Keep,
    /// Replace the channel.
    Value(f64),
    /// Clamp the channel to `[min, max]`.
    Range(f64, f64),
}

impl ProcessingTarget {
    pub fn apply(&self, value: f64) -> f64 {
        match *self {
            ProcessingTarget::Keep => value,
            ProcessingTarget::Value(v) => v,
            ProcessingTarget::Range(min, max) => clamp(value, min, max),
        }
    }
}

impl From<f64> for ProcessingTarget {
    fn from(value: f64) -> Self {
        ProcessingTarget::Value(value)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct HslProcessing {
    pub hue: ProcessingTarget,
    pub saturation: ProcessingTarget,
    pub lightness: ProcessingTarget,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct HsbProcessing {
    pub hue: ProcessingTarget,
    pub saturation: ProcessingTarget,
    pub brightness: ProcessingTarget,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct HclProcessing {
    pub hue: ProcessingTarget,
    pub chroma: ProcessingTarget,
    pub luminance: ProcessingTarget,
}

/// Channel modifiers applied to colors, in the HSL, HSB and HCL spaces.
///
/// Groups left to `None` do not convert the color at all.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ProcessingParameters {
    pub hsl: Option<HslProcessing>,
    pub hsb: Option<HsbProcessing>,
    pub hcl: Option<HclProcessing>,
}

impl ProcessingParameters {
    /// Sets the HSL lightness.
    pub fn lightness(lightness: f64) -> Self {
        ProcessingParameters {
            hsl: Some(HslProcessing {
                lightness: lightness.into(),
                ..HslProcessing::default()
            }),
            ..ProcessingParameters::default()
        }
    }

    /// Sets the HCL luminance.
    pub fn luminance(luminance: f64) -> Self {
        ProcessingParameters {
            hcl: Some(HclProcessing {
                luminance: luminance.into(),
                ..HclProcessing::default()
            }),
            ..ProcessingParameters::default()
        }
    }

    /// Applies the HSL, then the HSB and then the HCL modifiers.
    pub fn apply(&self, mut color: Color) -> Color {
        if let Some(p) = &self.hsl {
            let [h, s, l] = color.hsl();
            color.set_hsl([p.hue.apply(h), p.saturation.apply(s), p.lightness.apply(l)]);
        }
        if let Some(p) = &self.hsb {
            let [h, s, b] = color.hsb();
            color.set_hsb([p.hue.apply(h), p.saturation.apply(s), p.brightness.apply(b)]);
        }
        if let Some(p) = &self.hcl {
            let [h, c, l] = color.hcl();
            color.set_hcl([p.hue.apply(h), p.chroma.apply(c), p.luminance.apply(l)]);
        }

        color
    }
}

/// An ordered sequence of colors interpolated between two colors.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ColorScale {
    colors: Vec<Color>,
}

impl ColorScale {
    pub fn new() -> Self {
        ColorScale { colors: Vec::new() }
    }

    pub fn from_colors(colors: Vec<Color>) -> Self {
        ColorScale { colors }
    }

    /// Samples `length` colors from `from` to `to`, both included.
    ///
    /// A scale of length one only contains `from`.
    pub fn generate(
        interpolation: &Interpolation,
        length: usize,
        from: &Color,
        to: &Color,
    ) -> Self {
        let last = length.saturating_sub(1).max(1) as f64;
        let colors = (0..length)
            .map(|i| interpolation.interpolate(i as f64 / last, from, to))
            .collect();

        ColorScale { colors }
    }

    /// Processes every color of the scale.
    pub fn process(&mut self, params: &ProcessingParameters) -> &mut Self {
        for color in &mut self.colors {
            *color = params.apply(*color);
        }

        self
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn iter(&self) -> slice::Iter<Color> {
        self.colors.iter()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color nearest to `t`, where `t = 0` and `t = 1` are the two ends of
    /// the scale. `None` when the scale is empty.
    pub fn get_color(&self, t: f64) -> Option<Color> {
        if self.colors.is_empty() {
            return None;
        }

        let last = self.colors.len() - 1;
        let index = clamp(lerp(t, 0.0, last as f64).round(), 0.0, last as f64) as usize;

        Some(self.colors[index])
    }
}

impl Index<usize> for ColorScale {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.colors[index]
    }
}

impl<'l> IntoIterator for &'l ColorScale {
    type Item = &'l Color;
    type IntoIter = slice::Iter<'l, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rgb_scale() {
        let black = Color::new(0.0, 0.0, 0.0);
        let white = Color::new(1.0, 1.0, 1.0);
        let scale = ColorScale::generate(&Interpolation::rgb(), 5, &black, &white);

        assert_eq!(scale.len(), 5);
        assert_eq!(scale[0], black);
        assert_eq!(scale[4], white);
        let luminances: Vec<f64> = scale.iter().map(|c| c.hcl()[2]).collect();
        assert!(luminances.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn degenerate_lengths() {
        let from = Color::new(0.2, 0.4, 0.6);
        let to = Color::new(1.0, 1.0, 1.0);

        let empty = ColorScale::generate(&Interpolation::rgb(), 0, &from, &to);
        assert!(empty.is_empty());
        assert_eq!(empty.get_color(0.5), None);

        let single = ColorScale::generate(&Interpolation::rgb(), 1, &from, &to);
        assert_eq!(single.colors(), &[from]);
        assert_eq!(single.get_color(1.0), Some(from));
    }

    #[test]
    fn nearest_color() {
        let scale = ColorScale::from_colors(vec![
            Color::from_hex(0x000000),
            Color::from_hex(0x808080),
            Color::from_hex(0xffffff),
        ]);
        assert_eq!(scale.get_color(0.0), Some(scale[0]));
        assert_eq!(scale.get_color(0.2), Some(scale[0]));
        assert_eq!(scale.get_color(0.3), Some(scale[1]));
        assert_eq!(scale.get_color(0.9), Some(scale[2]));
        assert_eq!(scale.get_color(2.0), Some(scale[2]));
        assert_eq!(scale.get_color(-1.0), Some(scale[0]));
    }

    #[test]
    fn processing_targets() {
        assert_eq!(ProcessingTarget::Keep.apply(0.3), 0.3);
        assert_eq!(ProcessingTarget::Value(0.7).apply(0.3), 0.7);
        assert_eq!(ProcessingTarget::Range(0.4, 0.6).apply(0.3), 0.4);
        assert_eq!(ProcessingTarget::Range(0.4, 0.6).apply(0.5), 0.5);
        assert_eq!(ProcessingTarget::Range(0.4, 0.6).apply(0.9), 0.6);
    }

    #[test]
    fn process_scale() {
        let red = Color::new(1.0, 0.0, 0.0);
        let blue = Color::new(0.0, 0.0, 1.0);
        let mut scale = ColorScale::generate(&Interpolation::hsl(), 4, &red, &blue);
        scale.process(&ProcessingParameters::lightness(0.25));
        for color in &scale {
            assert_abs_diff_eq!(color.hsl()[2], 0.25, epsilon = 1e-9);
        }

        let params = ProcessingParameters {
            hsb: Some(HsbProcessing {
                brightness: ProcessingTarget::Range(0.0, 0.5),
                ..HsbProcessing::default()
            }),
            ..ProcessingParameters::default()
        };
        let dimmed = params.apply(Color::new(1.0, 1.0, 1.0));
        assert_abs_diff_eq!(dimmed.r, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(dimmed.g, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(dimmed.b, 0.5, epsilon = 1e-12);

        let gray = ProcessingParameters::luminance(50.0).apply(Color::new(0.1, 0.1, 0.1));
        assert_abs_diff_eq!(gray.hcl()[2], 50.0, epsilon = 1e-6);
    }
}
