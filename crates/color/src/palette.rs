//! Palettes of color scales derived from a single base color.

use std::collections::BTreeMap;

use crate::color::Color;
use crate::interpolation::Interpolation;
use crate::scale::{ColorScale, ProcessingParameters};

/// Length of the preset scales.
pub const PRESET_LENGTH: usize = 9;

/// Describes how a palette derives one of its scales from the base color.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Generator {
    pub interpolation: Interpolation,
    pub length: usize,
    /// End color of the scale, the base color when `None`.
    pub target: Option<Color>,
    /// Applied to the target color.
    pub processing: ProcessingParameters,
    /// Applied to the base color before interpolating.
    pub preprocessing: ProcessingParameters,
    /// Applied to every color of the generated scale.
    pub postprocessing: ProcessingParameters,
}

impl Generator {
    pub fn new(interpolation: Interpolation, length: usize) -> Self {
        Generator {
            interpolation,
            length,
            target: None,
            processing: ProcessingParameters::default(),
            preprocessing: ProcessingParameters::default(),
            postprocessing: ProcessingParameters::default(),
        }
    }

    /// From the base color at half lightness to a light tint, in HSL.
    pub fn light_scale() -> Self {
        Generator {
            processing: ProcessingParameters::lightness(1.0 - 1.0 / PRESET_LENGTH as f64),
            preprocessing: ProcessingParameters::lightness(0.5),
            ..Generator::new(Interpolation::hsl(), PRESET_LENGTH)
        }
    }

    /// From the base color at half lightness to a dark shade, in HSL.
    pub fn dark_scale() -> Self {
        Generator {
            processing: ProcessingParameters::lightness(1.0 / PRESET_LENGTH as f64),
            preprocessing: ProcessingParameters::lightness(0.5),
            ..Generator::new(Interpolation::hsl(), PRESET_LENGTH)
        }
    }

    /// From the base color at half luminance to white.
    pub fn sequential_light() -> Self {
        Generator {
            processing: ProcessingParameters::luminance(100.0),
            preprocessing: ProcessingParameters::luminance(50.0),
            ..Generator::new(Interpolation::sequential(), PRESET_LENGTH)
        }
    }

    /// From the base color at half luminance to black.
    pub fn sequential_dark() -> Self {
        Generator {
            processing: ProcessingParameters::luminance(0.0),
            preprocessing: ProcessingParameters::luminance(50.0),
            ..Generator::new(Interpolation::sequential(), PRESET_LENGTH)
        }
    }

    pub fn with_target(mut self, target: Color) -> Self {
        self.target = Some(target);
        self
    }

    /// Builds the scale for a given base color.
    pub fn generate(&self, base: &Color) -> ColorScale {
        let from = self.preprocessing.apply(*base);
        let to = self.processing.apply(self.target.unwrap_or(*base));

        let mut scale = ColorScale::generate(&self.interpolation, self.length, &from, &to);
        scale.process(&self.postprocessing);

        scale
    }
}

/// A base color and the named scales generated from it.
///
/// The scales are regenerated whenever the base color or a generator changes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ColorPalette {
    base: Color,
    generators: BTreeMap<String, Generator>,
    scales: BTreeMap<String, ColorScale>,
}

impl ColorPalette {
    pub fn new(base: Color) -> Self {
        ColorPalette {
            base,
            generators: BTreeMap::new(),
            scales: BTreeMap::new(),
        }
    }

    pub fn with_generators<I, K>(base: Color, generators: I) -> Self
    where
        I: IntoIterator<Item = (K, Generator)>,
        K: Into<String>,
    {
        let mut palette = ColorPalette {
            base,
            generators: generators.into_iter().map(|(k, g)| (k.into(), g)).collect(),
            scales: BTreeMap::new(),
        };
        palette.update();

        palette
    }

    pub fn base(&self) -> &Color {
        &self.base
    }

    pub fn set_base(&mut self, base: Color) {
        self.base = base;
        self.update();
    }

    pub fn generators(&self) -> &BTreeMap<String, Generator> {
        &self.generators
    }

    pub fn scale(&self, key: &str) -> Option<&ColorScale> {
        self.scales.get(key)
    }

    /// Adds or replaces a generator and builds its scale.
    pub fn subscribe(&mut self, key: impl Into<String>, generator: Generator) {
        let key = key.into();
        self.scales.insert(key.clone(), generator.generate(&self.base));
        self.generators.insert(key, generator);
    }

    pub fn unsubscribe(&mut self, key: &str) -> Option<Generator> {
        self.scales.remove(key);
        self.generators.remove(key)
    }

    /// Regenerates every scale.
    pub fn update(&mut self) {
        log::trace!("regenerating {} color scales", self.generators.len());
        self.scales = self
            .generators
            .iter()
            .map(|(key, generator)| (key.clone(), generator.generate(&self.base)))
            .collect();
    }

    /// The color at `t` in the scale named `key`.
    ///
    /// Falls back to the base color when there is no such scale or when it is empty.
    pub fn get_color(&self, key: &str, t: f64) -> Color {
        match self.scales.get(key).and_then(|scale| scale.get_color(t)) {
            Some(color) => color,
            None => {
                log::debug!("no color at {} in scale {:?}, using the base color", t, key);
                self.base
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn light_and_dark_scales() {
        let red = Color::new(1.0, 0.0, 0.0);
        let mut palette = ColorPalette::new(red);
        palette.subscribe("light", Generator::light_scale());
        palette.subscribe("dark", Generator::dark_scale());

        let light = palette.scale("light").unwrap();
        assert_eq!(light.len(), PRESET_LENGTH);
        assert_abs_diff_eq!(light[0].hsl()[2], 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(light[8].hsl()[2], 8.0 / 9.0, epsilon = 1e-9);
        assert_abs_diff_eq!(light[8].hsl()[0], 0.0, epsilon = 1e-9);

        let dark = palette.get_color("dark", 1.0);
        assert_abs_diff_eq!(dark.hsl()[2], 1.0 / 9.0, epsilon = 1e-9);
    }

    #[test]
    fn sequential_scales() {
        let gray = Color::new(0.3, 0.3, 0.3);
        let palette = ColorPalette::with_generators(
            gray,
            vec![
                ("up", Generator::sequential_light()),
                ("down", Generator::sequential_dark()),
            ],
        );

        let up = palette.scale("up").unwrap();
        assert_abs_diff_eq!(up[0].hcl()[2], 50.0, epsilon = 1e-6);
        assert_eq!(up[8].hex_string(), "#ffffff");
        let luminances: Vec<f64> = up.iter().map(|c| c.hcl()[2]).collect();
        assert!(luminances.windows(2).all(|w| w[0] < w[1]));

        let down = palette.scale("down").unwrap();
        assert_eq!(down[8].hex_string(), "#000000");
    }

    #[test]
    fn base_changes_regenerate_scales() {
        let mut palette = ColorPalette::new(Color::new(1.0, 0.0, 0.0));
        palette.subscribe(
            "to_blue",
            Generator::new(Interpolation::rgb(), 3).with_target(Color::new(0.0, 0.0, 1.0)),
        );
        assert_eq!(palette.get_color("to_blue", 0.0), Color::new(1.0, 0.0, 0.0));
        assert_eq!(palette.get_color("to_blue", 0.5), Color::new(0.5, 0.0, 0.5));

        palette.set_base(Color::new(0.0, 1.0, 0.0));
        assert_eq!(palette.get_color("to_blue", 0.0), Color::new(0.0, 1.0, 0.0));
        assert_eq!(palette.get_color("to_blue", 1.0), Color::new(0.0, 0.0, 1.0));

        assert!(palette.unsubscribe("to_blue").is_some());
        assert!(palette.scale("to_blue").is_none());
    }

    #[test]
    fn missing_scales_use_the_base_color() {
        let base = Color::from_hex(0x336699);
        let mut palette = ColorPalette::new(base);
        assert_eq!(palette.get_color("nothing", 0.5), base);

        palette.subscribe("empty", Generator::new(Interpolation::rgb(), 0));
        assert_eq!(palette.get_color("empty", 0.5), base);
        assert_eq!(palette.generators().len(), 1);
    }
}
