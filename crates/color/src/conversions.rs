//! Conversions between RGB and the other color spaces.
//!
//! RGB channels are in `[0, 1]`. Hues are in degrees, HSL and HSB saturation,
//! lightness and brightness in `[0, 1]`. L*a*b* uses the D65 white point and
//! HCL is L*a*b* in polar form: `[hue, chroma, luminance]`.

use curvy_geom::utils::{clamp, to_degrees, to_radians};

use crate::error::ColorError;

pub type Rgb = [f64; 3];
pub type Hsl = [f64; 3];
pub type Hsb = [f64; 3];
pub type Lab = [f64; 3];
pub type Hcl = [f64; 3];

/// D65 reference white in XYZ.
pub const D65: [f64; 3] = [0.95047, 1.0, 1.08883];

/// Linear sRGB to XYZ (D65).
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// Inverse of `SRGB_TO_XYZ`.
const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.2404548360214083, -1.5371388501025751, -0.4985315468684809],
    [-0.9692663898756537, 1.8760109288424913, 0.041556082346673524],
    [0.05564341960421366, -0.20402585426769815, 1.0572251624579287],
];

/// CIE ε.
const LAB_EPSILON: f64 = 216.0 / 24389.0;
/// CIE κ.
const LAB_KAPPA: f64 = 24389.0 / 27.0;

#[inline]
fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// sRGB decoding.
#[inline]
fn srgb_eotf(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB encoding.
#[inline]
fn srgb_oetf(l: f64) -> f64 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        (LAB_KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn lab_f_inv(f: f64) -> f64 {
    let f3 = f * f * f;
    if f3 > LAB_EPSILON {
        f3
    } else {
        (116.0 * f - 16.0) / LAB_KAPPA
    }
}

#[inline]
fn to_byte(v: f64) -> u32 {
    clamp((v * 255.0).round(), 0.0, 255.0) as u32
}

/// Packs the channels as `0xRRGGBB`, rounding to the nearest byte.
pub fn rgb_to_hex([r, g, b]: Rgb) -> u32 {
    (to_byte(r) << 16) | (to_byte(g) << 8) | to_byte(b)
}

/// Formats the channels as `#rrggbb`.
pub fn rgb_to_hex_string(rgb: Rgb) -> String {
    format!("#{:06x}", rgb_to_hex(rgb))
}

/// Unpacks `0xRRGGBB`. Bits above the lowest 24 are ignored.
pub fn hex_to_rgb(hex: u32) -> Rgb {
    [
        ((hex >> 16) & 255) as f64 / 255.0,
        ((hex >> 8) & 255) as f64 / 255.0,
        (hex & 255) as f64 / 255.0,
    ]
}

/// Normalizes a hexadecimal color string to `#rrggbb`.
///
/// Accepts `#rrggbb`, `0xrrggbb`, `rrggbb`, `#rgb`, `rgb` and `rgb(r, g, b)` with
/// integer channels in `[0, 255]`. Case and surrounding whitespace are ignored.
pub fn normalize_hex_string(src: &str) -> Result<String, ColorError> {
    let invalid = || ColorError::InvalidHex(src.to_string());
    let s = src.trim().to_ascii_lowercase();

    if let Some(channels) = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        let mut bytes = [0u8; 3];
        let mut count = 0;
        for channel in channels.split(',') {
            if count == 3 {
                return Err(invalid());
            }
            bytes[count] = channel.trim().parse().map_err(|_| invalid())?;
            count += 1;
        }
        if count != 3 {
            return Err(invalid());
        }

        return Ok(format!("#{:02x}{:02x}{:02x}", bytes[0], bytes[1], bytes[2]));
    }

    let digits = s
        .strip_prefix('#')
        .or_else(|| s.strip_prefix("0x"))
        .unwrap_or(s.as_str());
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    match digits.len() {
        6 => Ok(format!("#{}", digits)),
        3 if !s.starts_with("0x") => {
            let mut result = String::with_capacity(7);
            result.push('#');
            for c in digits.chars() {
                result.push(c);
                result.push(c);
            }
            Ok(result)
        }
        _ => Err(invalid()),
    }
}

/// Parses a hexadecimal color string, see [`normalize_hex_string`].
pub fn hex_string_to_rgb(src: &str) -> Result<Rgb, ColorError> {
    let normalized = normalize_hex_string(src)?;
    let value = u32::from_str_radix(&normalized[1..], 16)
        .map_err(|_| ColorError::InvalidHex(src.to_string()))?;

    Ok(hex_to_rgb(value))
}

/// Adds `amount` to each byte of a `#rrggbb` or `rrggbb` color, clamping to
/// `[0, 255]`. The prefix is preserved.
pub fn lighten(hex: &str, amount: i32) -> Result<String, ColorError> {
    let (prefix, digits) = match hex.strip_prefix('#') {
        Some(digits) => ("#", digits),
        None => ("", hex),
    };
    if digits.len() != 6 {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }
    let value =
        u32::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidHex(hex.to_string()))?;

    let channel =
        |shift: u32| -> u32 { (((value >> shift) & 255) as i32 + amount).clamp(0, 255) as u32 };

    Ok(format!(
        "{}{:06x}",
        prefix,
        (channel(16) << 16) | (channel(8) << 8) | channel(0)
    ))
}

/// Subtracts `amount` from each byte, see [`lighten`].
pub fn darken(hex: &str, amount: i32) -> Result<String, ColorError> {
    lighten(hex, -amount)
}

/// Parses strings such as `hsl(120, 50%, 25%)` into `[120, 0.5, 0.25]`.
///
/// The first three numbers found are the hue in degrees and the saturation and
/// lightness in percents.
pub fn normalize_hsl_string(src: &str) -> Result<Hsl, ColorError> {
    let invalid = || ColorError::InvalidHsl(src.to_string());

    let mut values = [0.0; 3];
    let mut count = 0;
    for number in src
        .split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter(|s| !s.is_empty())
        .take(3)
    {
        values[count] = number.parse::<f64>().map_err(|_| invalid())?;
        count += 1;
    }
    if count != 3 {
        return Err(invalid());
    }

    Ok([values[0], values[1] / 100.0, values[2] / 100.0])
}

/// Hue in degrees, normalized to `[0, 360)`, of an RGB color. Zero for grays.
fn hue(r: f64, g: f64, b: f64, max: f64, chroma: f64) -> f64 {
    if chroma == 0.0 {
        return 0.0;
    }

    let h = if max == r {
        (g - b) / chroma
    } else if max == g {
        2.0 + (b - r) / chroma
    } else {
        4.0 + (r - g) / chroma
    };

    if h < 0.0 {
        60.0 * h + 360.0
    } else {
        60.0 * h
    }
}

pub fn rgb_to_hsl([r, g, b]: Rgb) -> Hsl {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;
    let l = (max + min) / 2.0;

    let s = if chroma == 0.0 {
        0.0
    } else if l <= 0.5 {
        chroma / (max + min)
    } else {
        chroma / (2.0 - max - min)
    };

    [hue(r, g, b, max, chroma), s, l]
}

pub fn hsl_to_rgb([h, s, l]: Hsl) -> Rgb {
    let a = s * l.min(1.0 - l);
    let f = |n: f64| {
        let k = (n + h / 30.0).rem_euclid(12.0);
        l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };

    [f(0.0), f(8.0), f(4.0)]
}

pub fn rgb_to_hsb([r, g, b]: Rgb) -> Hsb {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    [hue(r, g, b, max, delta), s, max]
}

pub fn hsb_to_rgb([h, s, v]: Hsb) -> Rgb {
    let f = |n: f64| {
        let k = (n + h / 60.0).rem_euclid(6.0);
        v * (1.0 - s * k.min(4.0 - k).min(1.0).max(0.0))
    };

    [f(5.0), f(3.0), f(1.0)]
}

pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    let linear = rgb.map(srgb_eotf);
    let xyz = mul(&SRGB_TO_XYZ, linear);
    let fx = lab_f(xyz[0] / D65[0]);
    let fy = lab_f(xyz[1] / D65[1]);
    let fz = lab_f(xyz[2] / D65[2]);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Converts back to RGB, clamping out of gamut colors to `[0, 1]`.
pub fn lab_to_rgb([l, a, b]: Lab) -> Rgb {
    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;
    let xyz = [
        D65[0] * lab_f_inv(fx),
        D65[1] * lab_f_inv(fy),
        D65[2] * lab_f_inv(fz),
    ];

    mul(&XYZ_TO_SRGB, xyz).map(|c| clamp(srgb_oetf(c), 0.0, 1.0))
}

pub fn lab_to_hcl([l, a, b]: Lab) -> Hcl {
    [ab_to_hue(a, b), (a * a + b * b).sqrt(), l]
}

pub fn hcl_to_lab([h, c, l]: Hcl) -> Lab {
    let (sin, cos) = to_radians(h).sin_cos();
    [l, c * cos, c * sin]
}

pub fn rgb_to_hcl(rgb: Rgb) -> Hcl {
    lab_to_hcl(rgb_to_lab(rgb))
}

pub fn hcl_to_rgb(hcl: Hcl) -> Rgb {
    lab_to_rgb(hcl_to_lab(hcl))
}

/// Hue angle in degrees, in `[0, 360)`, of the `(a, b)` chromaticity.
///
/// Points on the axes map exactly to 0, 90, 180 and 270 degrees.
pub fn ab_to_hue(a: f64, b: f64) -> f64 {
    if a >= 0.0 && b == 0.0 {
        return 0.0;
    }
    if a < 0.0 && b == 0.0 {
        return 180.0;
    }
    if a == 0.0 && b > 0.0 {
        return 90.0;
    }
    if a == 0.0 && b < 0.0 {
        return 270.0;
    }

    let bias = if a > 0.0 && b > 0.0 {
        0.0
    } else if a < 0.0 {
        180.0
    } else {
        360.0
    };

    to_degrees((b / a).atan()) + bias
}

/// CIE94 color difference, with the graphic arts weights.
pub fn delta_e(lab1: Lab, lab2: Lab) -> f64 {
    let delta_l = lab1[0] - lab2[0];
    let delta_a = lab1[1] - lab2[1];
    let delta_b = lab1[2] - lab2[2];
    let c1 = (lab1[1] * lab1[1] + lab1[2] * lab1[2]).sqrt();
    let c2 = (lab2[1] * lab2[1] + lab2[2] * lab2[2]).sqrt();
    let delta_c = c1 - c2;
    let delta_h = (delta_a * delta_a + delta_b * delta_b - delta_c * delta_c)
        .max(0.0)
        .sqrt();

    let sc = 1.0 + 0.045 * c1;
    let sh = 1.0 + 0.015 * c1;
    let dc = delta_c / sc;
    let dh = delta_h / sh;

    (delta_l * delta_l + dc * dc + dh * dh).max(0.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Deterministic xorshift generator producing values in `[0, 1)`.
    struct XorShift(u64);

    impl XorShift {
        fn next(&mut self) -> f64 {
            self.0 ^= self.0 << 13;
            self.0 ^= self.0 >> 7;
            self.0 ^= self.0 << 17;
            (self.0 >> 11) as f64 / (1u64 << 53) as f64
        }

        fn rgb(&mut self) -> Rgb {
            [self.next(), self.next(), self.next()]
        }
    }

    fn assert_rgb_eq(a: Rgb, b: Rgb, epsilon: f64) {
        for i in 0..3 {
            assert_abs_diff_eq!(a[i], b[i], epsilon = epsilon);
        }
    }

    #[test]
    fn round_trips() {
        let mut rng = XorShift(0x2545_f491_4f6c_dd1d);
        for _ in 0..1000 {
            let rgb = rng.rgb();
            assert_rgb_eq(hsl_to_rgb(rgb_to_hsl(rgb)), rgb, 1e-6);
            assert_rgb_eq(hsb_to_rgb(rgb_to_hsb(rgb)), rgb, 1e-6);
            assert_rgb_eq(lab_to_rgb(rgb_to_lab(rgb)), rgb, 1e-6);
            assert_rgb_eq(hcl_to_rgb(rgb_to_hcl(rgb)), rgb, 1e-6);
            assert_rgb_eq(hex_to_rgb(rgb_to_hex(rgb)), rgb, 0.5 / 255.0 + 1e-12);
        }
    }

    #[test]
    fn hsl_values() {
        assert_eq!(rgb_to_hsl([1.0, 0.0, 0.0]), [0.0, 1.0, 0.5]);
        assert_eq!(rgb_to_hsl([0.0, 1.0, 0.0]), [120.0, 1.0, 0.5]);
        assert_eq!(rgb_to_hsl([0.0, 0.0, 1.0]), [240.0, 1.0, 0.5]);
        assert_eq!(rgb_to_hsl([0.5, 0.5, 0.5]), [0.0, 0.0, 0.5]);

        // Light colors.
        let hsl = rgb_to_hsl([1.0, 0.5, 0.5]);
        assert_abs_diff_eq!(hsl[1], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hsl[2], 0.75, epsilon = 1e-12);
        // Magenta side of the hue circle.
        assert_abs_diff_eq!(rgb_to_hsl([1.0, 0.0, 0.5])[0], 330.0, epsilon = 1e-12);

        assert_rgb_eq(hsl_to_rgb([120.0, 1.0, 0.25]), [0.0, 0.5, 0.0], 1e-12);
        assert_rgb_eq(hsl_to_rgb([-120.0, 1.0, 0.5]), [0.0, 0.0, 1.0], 1e-12);
    }

    #[test]
    fn hsb_values() {
        assert_eq!(rgb_to_hsb([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_hsb([1.0, 1.0, 0.0]), [60.0, 1.0, 1.0]);
        assert_rgb_eq(hsb_to_rgb([180.0, 0.5, 0.8]), [0.4, 0.8, 0.8], 1e-12);
    }

    #[test]
    fn lab_values() {
        let white = rgb_to_lab([1.0, 1.0, 1.0]);
        assert_abs_diff_eq!(white[0], 100.0, epsilon = 1e-3);
        assert_abs_diff_eq!(white[1], 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(white[2], 0.0, epsilon = 1e-3);

        let red = rgb_to_lab([1.0, 0.0, 0.0]);
        assert_abs_diff_eq!(red[0], 53.24, epsilon = 1e-2);
        assert_abs_diff_eq!(red[1], 80.09, epsilon = 1e-2);
        assert_abs_diff_eq!(red[2], 67.20, epsilon = 1e-2);

        let black = rgb_to_lab([0.0, 0.0, 0.0]);
        assert_abs_diff_eq!(black[0], 0.0, epsilon = 1e-9);

        // Out of gamut colors are clamped.
        let rgb = lab_to_rgb([50.0, 120.0, -120.0]);
        assert!(rgb.iter().all(|c| (0.0..=1.0).contains(c)));
    }

    #[test]
    fn hue_branches() {
        assert_eq!(ab_to_hue(0.0, 0.0), 0.0);
        assert_eq!(ab_to_hue(3.0, 0.0), 0.0);
        assert_eq!(ab_to_hue(-3.0, 0.0), 180.0);
        assert_eq!(ab_to_hue(0.0, 2.0), 90.0);
        assert_eq!(ab_to_hue(0.0, -2.0), 270.0);
        assert_abs_diff_eq!(ab_to_hue(1.0, 1.0), 45.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ab_to_hue(-1.0, 1.0), 135.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ab_to_hue(-1.0, -1.0), 225.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ab_to_hue(1.0, -1.0), 315.0, epsilon = 1e-12);

        let hcl = rgb_to_hcl([1.0, 0.0, 0.0]);
        assert_abs_diff_eq!(hcl[0], 40.0, epsilon = 0.1);
        assert_abs_diff_eq!(hcl[1], 104.55, epsilon = 1e-1);
    }

    #[test]
    fn color_difference() {
        let a = rgb_to_lab([0.2, 0.4, 0.6]);
        assert_eq!(delta_e(a, a), 0.0);
        let b = rgb_to_lab([0.2, 0.4, 0.65]);
        assert!(delta_e(a, b) > 0.0);

        // Pure lightness difference.
        assert_abs_diff_eq!(
            delta_e([50.0, 0.0, 0.0], [40.0, 0.0, 0.0]),
            10.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn hex_strings() {
        assert_eq!(normalize_hex_string("#FF8800").unwrap(), "#ff8800");
        assert_eq!(normalize_hex_string("0xff8800").unwrap(), "#ff8800");
        assert_eq!(normalize_hex_string("ff8800").unwrap(), "#ff8800");
        assert_eq!(normalize_hex_string("#f80").unwrap(), "#ff8800");
        assert_eq!(normalize_hex_string("f80").unwrap(), "#ff8800");
        assert_eq!(
            normalize_hex_string("rgb(255, 136, 0)").unwrap(),
            "#ff8800"
        );
        assert_eq!(
            normalize_hex_string("#ff88"),
            Err(ColorError::InvalidHex("#ff88".to_string()))
        );
        assert!(normalize_hex_string("#gg8800").is_err());
        assert!(normalize_hex_string("rgb(256, 0, 0)").is_err());
        assert!(normalize_hex_string("rgb(1, 2)").is_err());
        assert!(normalize_hex_string("rgb(1, 2, 3, 4)").is_err());

        assert_eq!(rgb_to_hex_string([1.0, 0.0, 0.5]), "#ff0080");
        assert_eq!(rgb_to_hex_string([2.0, -1.0, 0.0]), "#ff0000");
        assert_eq!(rgb_to_hex([0.0, 0.0, 1.0]), 0x0000ff);
        assert_eq!(hex_to_rgb(0xff00ff), [1.0, 0.0, 1.0]);
        assert_eq!(hex_string_to_rgb("#00ff00").unwrap(), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn hsl_strings() {
        assert_eq!(
            normalize_hsl_string("hsl(120, 50%, 25%)").unwrap(),
            [120.0, 0.5, 0.25]
        );
        assert_eq!(
            normalize_hsl_string("hsl(210.5, 100%, 50%)").unwrap(),
            [210.5, 1.0, 0.5]
        );
        assert!(normalize_hsl_string("hsl(120, 50%)").is_err());
    }

    #[test]
    fn lighten_and_darken() {
        assert_eq!(lighten("#000000", 1).unwrap(), "#010101");
        assert_eq!(lighten("102030", 16).unwrap(), "203040");
        assert_eq!(lighten("#fff0f0", 32).unwrap(), "#ffffff");
        assert_eq!(darken("#101010", 32).unwrap(), "#000000");
        assert_eq!(darken("#203040", 0).unwrap(), "#203040");
        assert!(lighten("#fff", 1).is_err());
    }
}
