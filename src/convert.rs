//! Colorspace conversions from the canonical sRGB triple.
//!
//! RGB is the only stored representation. Every other format is derived on
//! demand, so the displayed values can never drift apart.

use palette::{LinSrgb, Srgb};
use serde::Serialize;

/// D65 reference white used to normalize XYZ before the L*a*b* response.
const D65_WHITE: [f64; 3] = [0.95047, 1.0, 1.08883];

/// CIE threshold between the cube-root and linear parts of the L*a*b* response.
const LAB_EPSILON: f64 = 0.008856;

/// Hue, saturation and lightness (degrees, percent, percent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

/// Hue, saturation and value (degrees, percent, percent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hsv {
    pub hue: u16,
    pub saturation: u8,
    pub value: u8,
}

/// Cyan, magenta, yellow and key, all in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cmyk {
    pub cyan: u8,
    pub magenta: u8,
    pub yellow: u8,
    pub key: u8,
}

/// CIE L*a*b* relative to D65.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lab {
    pub lightness: i32,
    pub a: i32,
    pub b: i32,
}

/// Parse a 6-digit hex color, with or without a leading `#`.
///
/// Returns `None` for anything that is not exactly six hex digits, including
/// the 3-digit shorthand. Callers treat `None` as "no change".
pub fn parse_hex(input: &str) -> Option<Srgb<u8>> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Srgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Format as `#rrggbb` (lowercase).
pub fn rgb_to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Format as `#RRGGBB` (uppercase).
pub fn rgb_to_hex_upper(color: Srgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", color.red, color.green, color.blue)
}

/// Normalized channels plus their max, min and spread.
struct Channels {
    r: f64,
    g: f64,
    b: f64,
    max: f64,
    min: f64,
    delta: f64,
}

impl Channels {
    fn new(color: Srgb<u8>) -> Self {
        // Divide rather than multiply by 1/255; the reciprocal is off in the
        // last bit and flips exact .5 ties when rounding to percent.
        let unit = |channel: u8| f64::from(channel) / 255.0;
        let (r, g, b) = (unit(color.red), unit(color.green), unit(color.blue));
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        Self {
            r,
            g,
            b,
            max,
            min,
            delta: max - min,
        }
    }

    fn is_achromatic(&self) -> bool {
        self.delta == 0.0
    }

    /// Hue in turns (0.0-1.0), keyed on the dominant channel.
    fn hue(&self) -> f64 {
        if self.is_achromatic() {
            return 0.0;
        }

        let sector = if self.max == self.r {
            (self.g - self.b) / self.delta + if self.g < self.b { 6.0 } else { 0.0 }
        } else if self.max == self.g {
            (self.b - self.r) / self.delta + 2.0
        } else {
            (self.r - self.g) / self.delta + 4.0
        };

        sector / 6.0
    }
}

fn degrees(turns: f64) -> u16 {
    // A hue within half a degree of a full turn rounds back to 0.
    ((turns * 360.0).round() as u16) % 360
}

fn percent(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

pub fn rgb_to_hsl(color: Srgb<u8>) -> Hsl {
    let ch = Channels::new(color);
    let lightness = (ch.max + ch.min) / 2.0;

    let saturation = if ch.is_achromatic() {
        0.0
    } else if lightness > 0.5 {
        ch.delta / (2.0 - ch.max - ch.min)
    } else {
        ch.delta / (ch.max + ch.min)
    };

    Hsl {
        hue: degrees(ch.hue()),
        saturation: percent(saturation),
        lightness: percent(lightness),
    }
}

pub fn rgb_to_hsv(color: Srgb<u8>) -> Hsv {
    let ch = Channels::new(color);
    let saturation = if ch.max == 0.0 { 0.0 } else { ch.delta / ch.max };

    Hsv {
        hue: degrees(ch.hue()),
        saturation: percent(saturation),
        value: percent(ch.max),
    }
}

/// Convert to CMYK percentages.
///
/// Pure black has no defined chroma; its c/m/y are reported as 0.
pub fn rgb_to_cmyk(color: Srgb<u8>) -> Cmyk {
    let ch = Channels::new(color);
    let key = 1.0 - ch.max;

    let ink = |channel: f64| {
        if key >= 1.0 {
            0.0
        } else {
            (1.0 - channel - key) / (1.0 - key)
        }
    };

    Cmyk {
        cyan: percent(ink(ch.r)),
        magenta: percent(ink(ch.g)),
        yellow: percent(ink(ch.b)),
        key: percent(key),
    }
}

/// Convert to CIE L*a*b* (D65, 2° observer).
pub fn rgb_to_lab(color: Srgb<u8>) -> Lab {
    let linear: LinSrgb<f64> = color.into_format::<f64>().into_linear();
    let (r, g, b) = (linear.red, linear.green, linear.blue);

    let x = (r * 0.4124 + g * 0.3576 + b * 0.1805) / D65_WHITE[0];
    let y = (r * 0.2126 + g * 0.7152 + b * 0.0722) / D65_WHITE[1];
    let z = (r * 0.0193 + g * 0.1192 + b * 0.9505) / D65_WHITE[2];

    let response = |t: f64| {
        if t > LAB_EPSILON {
            t.cbrt()
        } else {
            7.787 * t + 16.0 / 116.0
        }
    };
    let (fx, fy, fz) = (response(x), response(y), response(z));

    Lab {
        lightness: (116.0 * fy - 16.0).round() as i32,
        a: (500.0 * (fx - fy)).round() as i32,
        b: (200.0 * (fy - fz)).round() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_accepts_missing_hash_and_mixed_case() {
        assert_eq!(parse_hex("Ff6B6b"), Some(Srgb::new(255, 107, 107)));
        assert_eq!(parse_hex("#00d2d3"), Some(Srgb::new(0, 210, 211)));
    }

    #[test]
    fn hex_rejects_signs_and_double_hash() {
        assert_eq!(parse_hex("+fffff"), None);
        assert_eq!(parse_hex("##ffffff"), None);
        assert_eq!(parse_hex(" ffffff"), None);
    }

    #[test]
    fn hue_sectors() {
        assert_eq!(rgb_to_hsl(Srgb::new(0, 255, 0)).hue, 120);
        assert_eq!(rgb_to_hsl(Srgb::new(0, 0, 255)).hue, 240);
        assert_eq!(rgb_to_hsl(Srgb::new(255, 0, 255)).hue, 300);
        assert_eq!(rgb_to_hsl(Srgb::new(255, 255, 0)).hue, 60);
    }

    #[test]
    fn hue_never_reaches_full_turn() {
        // (255, 0, 1) sits at 359.76 degrees.
        assert_eq!(rgb_to_hsv(Srgb::new(255, 0, 1)).hue, 0);
    }

    #[test]
    fn light_colors_use_upper_saturation_branch() {
        let hsl = rgb_to_hsl(Srgb::new(255, 107, 107));
        assert_eq!(hsl, Hsl { hue: 0, saturation: 100, lightness: 71 });
    }
}
