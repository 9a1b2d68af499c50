use std::fmt;
use std::str::FromStr;

use curvy_geom::utils::lerp;

use crate::conversions::*;
use crate::error::ColorError;
use crate::interpolation::Interpolation;
use crate::named::named_color;

/// A color stored as RGB channels in `[0, 1]`.
///
/// The other representations are computed from the RGB channels on demand.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Color { r, g, b }
    }

    #[inline]
    pub const fn from_rgb([r, g, b]: Rgb) -> Self {
        Color { r, g, b }
    }

    /// Creates a color from `0xRRGGBB`.
    pub fn from_hex(hex: u32) -> Self {
        Color::from_rgb(hex_to_rgb(hex))
    }

    /// Parses any of the forms accepted by [`normalize_hex_string`].
    pub fn from_hex_str(src: &str) -> Result<Self, ColorError> {
        hex_string_to_rgb(src).map(Color::from_rgb)
    }

    pub fn from_hsl(hsl: Hsl) -> Self {
        Color::from_rgb(hsl_to_rgb(hsl))
    }

    /// Parses strings such as `hsl(120, 50%, 25%)`.
    pub fn from_hsl_str(src: &str) -> Result<Self, ColorError> {
        normalize_hsl_string(src).map(Color::from_hsl)
    }

    pub fn from_hsb(hsb: Hsb) -> Self {
        Color::from_rgb(hsb_to_rgb(hsb))
    }

    pub fn from_lab(lab: Lab) -> Self {
        Color::from_rgb(lab_to_rgb(lab))
    }

    pub fn from_hcl(hcl: Hcl) -> Self {
        Color::from_rgb(hcl_to_rgb(hcl))
    }

    /// Looks up a CSS color name, ignoring case.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        named_color(&name.trim().to_ascii_lowercase())
            .map(Color::from_hex)
            .ok_or_else(|| ColorError::UnknownName(name.to_string()))
    }

    pub fn set_rgb(&mut self, [r, g, b]: Rgb) {
        self.r = r;
        self.g = g;
        self.b = b;
    }

    pub fn set_hex(&mut self, hex: u32) {
        self.set_rgb(hex_to_rgb(hex));
    }

    pub fn set_hsl(&mut self, hsl: Hsl) {
        self.set_rgb(hsl_to_rgb(hsl));
    }

    pub fn set_hsb(&mut self, hsb: Hsb) {
        self.set_rgb(hsb_to_rgb(hsb));
    }

    pub fn set_lab(&mut self, lab: Lab) {
        self.set_rgb(lab_to_rgb(lab));
    }

    pub fn set_hcl(&mut self, hcl: Hcl) {
        self.set_rgb(hcl_to_rgb(hcl));
    }

    #[inline]
    pub fn rgb(&self) -> Rgb {
        [self.r, self.g, self.b]
    }

    pub fn hex(&self) -> u32 {
        rgb_to_hex(self.rgb())
    }

    /// `#rrggbb`.
    pub fn hex_string(&self) -> String {
        rgb_to_hex_string(self.rgb())
    }

    pub fn hsl(&self) -> Hsl {
        rgb_to_hsl(self.rgb())
    }

    /// `hsl(h, s%, l%)`.
    pub fn hsl_string(&self) -> String {
        let [h, s, l] = self.hsl();
        format!("hsl({}, {}%, {}%)", h, s * 100.0, l * 100.0)
    }

    pub fn hsb(&self) -> Hsb {
        rgb_to_hsb(self.rgb())
    }

    pub fn lab(&self) -> Lab {
        rgb_to_lab(self.rgb())
    }

    pub fn hcl(&self) -> Hcl {
        rgb_to_hcl(self.rgb())
    }

    /// Linear interpolation of the RGB channels.
    pub fn lerp(&self, t: f64, other: &Color) -> Color {
        Color {
            r: lerp(t, self.r, other.r),
            g: lerp(t, self.g, other.g),
            b: lerp(t, self.b, other.b),
        }
    }

    /// Interpolation with any of the available strategies.
    pub fn lerp_color(&self, t: f64, other: &Color, interpolation: &Interpolation) -> Color {
        interpolation.interpolate(t, self, other)
    }

    /// Perceptual difference with another color, see [`delta_e`].
    pub fn delta_e(&self, other: &Color) -> f64 {
        delta_e(self.lab(), other.lab())
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::from_rgb(rgb)
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Color::from_hex(hex)
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        color.rgb()
    }
}

/// Parses a hexadecimal color, an `hsl(..)` string or a CSS color name.
impl FromStr for Color {
    type Err = ColorError;

    fn from_str(src: &str) -> Result<Self, ColorError> {
        let start = src.trim_start();
        if start.starts_with("hsl") {
            return Color::from_hsl_str(src);
        }

        // Explicit hexadecimal or `rgb(..)` syntax never falls back to names.
        let lower = start.to_ascii_lowercase();
        if lower.starts_with('#') || lower.starts_with("0x") || lower.starts_with("rgb(") {
            return Color::from_hex_str(src);
        }

        Color::from_hex_str(src).or_else(|_| Color::from_name(src))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.hex_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolation::{HueMode, Power};
    use approx::assert_abs_diff_eq;

    #[test]
    fn constructors() {
        let orange = Color::from_hex(0xff8000);
        assert_eq!(orange.r, 1.0);
        assert_eq!(orange.b, 0.0);
        assert_eq!(orange.hex(), 0xff8000);
        assert_eq!(Color::from_hex_str("#ff8000").unwrap(), orange);
        assert_eq!(Color::from(0xff8000), orange);
        assert_eq!(Color::from_name("Red").unwrap(), Color::new(1.0, 0.0, 0.0));
        assert_eq!(
            Color::from_name("blurple"),
            Err(ColorError::UnknownName("blurple".to_string()))
        );
        assert!(Color::from_hex_str("#12345").is_err());

        let green = Color::from_hsl([120.0, 1.0, 0.25]);
        assert_eq!(green.hex_string(), "#008000");
        assert_eq!(Color::from_hsl_str("hsl(120, 100%, 25%)").unwrap(), green);
        assert_eq!(Color::from_hsb([0.0, 0.0, 1.0]), Color::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn parse() {
        assert_eq!("#00ff00".parse::<Color>().unwrap(), Color::new(0.0, 1.0, 0.0));
        assert_eq!("navy".parse::<Color>().unwrap().hex(), 0x000080);
        assert_eq!(
            "hsl(0, 100%, 50%)".parse::<Color>().unwrap(),
            Color::new(1.0, 0.0, 0.0)
        );
        assert_eq!(
            "nope".parse::<Color>(),
            Err(ColorError::UnknownName("nope".to_string()))
        );
    }

    #[test]
    fn parse_reports_malformed_hex() {
        for src in ["#12", "0x12345", "rgb(1, 2)", "RGB(1, 2, 300)", "#gggggg"] {
            assert_eq!(
                src.parse::<Color>(),
                Err(ColorError::InvalidHex(src.to_string()))
            );
        }
        assert_eq!("RGB(0, 0, 255)".parse::<Color>().unwrap(), Color::new(0.0, 0.0, 1.0));
        assert_eq!("0x0000ff".parse::<Color>().unwrap(), Color::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn setters_and_getters() {
        let mut color = Color::default();
        assert_eq!(color.rgb(), [0.0; 3]);

        color.set_hex(0x336699);
        assert_eq!(color.to_string(), "#336699");

        let hsl = color.hsl();
        color.set_hsl(hsl);
        assert_eq!(color.hex(), 0x336699);

        let hsb = color.hsb();
        color.set_hsb(hsb);
        assert_eq!(color.hex(), 0x336699);

        let lab = color.lab();
        color.set_lab(lab);
        assert_eq!(color.hex(), 0x336699);

        let hcl = color.hcl();
        color.set_hcl(hcl);
        assert_eq!(color.hex(), 0x336699);

        color.set_rgb([1.0, 0.5, 0.0]);
        assert_eq!(color.hsl_string(), "hsl(30, 100%, 50%)");
    }

    #[test]
    fn interpolation() {
        let black = Color::new(0.0, 0.0, 0.0);
        let white = Color::new(1.0, 1.0, 1.0);
        assert_eq!(black.lerp(0.25, &white), Color::new(0.25, 0.25, 0.25));

        let red = Color::new(1.0, 0.0, 0.0);
        let cyan = Color::new(0.0, 1.0, 1.0);
        let hsl = Interpolation::Hsl {
            power: Power::default(),
            hue_mode: HueMode::Longest,
        };
        let mid = red.lerp_color(0.5, &cyan, &hsl);
        // Half way between the two opposite hues, going up.
        assert_abs_diff_eq!(mid.hsl()[0], 90.0, epsilon = 1e-9);

        assert_eq!(red.delta_e(&red), 0.0);
        assert!(red.delta_e(&cyan) > red.delta_e(&Color::new(0.9, 0.0, 0.0)));
    }
}
