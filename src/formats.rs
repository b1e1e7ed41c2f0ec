//! Display strings for every color format, derived from one RGB value.

use std::fmt;

use palette::Srgb;
use serde::Serialize;

use crate::convert::{rgb_to_cmyk, rgb_to_hex_upper, rgb_to_hsl, rgb_to_hsv, rgb_to_lab};

/// The six formats shown by the picker, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    Hex,
    Rgb,
    Hsl,
    Hsv,
    Cmyk,
    Lab,
}

impl FormatKind {
    pub const ALL: [FormatKind; 6] = [
        FormatKind::Hex,
        FormatKind::Rgb,
        FormatKind::Hsl,
        FormatKind::Hsv,
        FormatKind::Cmyk,
        FormatKind::Lab,
    ];

    /// Short uppercase label.
    pub fn label(self) -> &'static str {
        match self {
            FormatKind::Hex => "HEX",
            FormatKind::Rgb => "RGB",
            FormatKind::Hsl => "HSL",
            FormatKind::Hsv => "HSV",
            FormatKind::Cmyk => "CMYK",
            FormatKind::Lab => "LAB",
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every display string for a single canonical color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorFormats {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    pub hsv: String,
    pub cmyk: String,
    pub lab: String,
}

impl ColorFormats {
    pub fn from_rgb(color: Srgb<u8>) -> Self {
        let hsl = rgb_to_hsl(color);
        let hsv = rgb_to_hsv(color);
        let cmyk = rgb_to_cmyk(color);
        let lab = rgb_to_lab(color);

        Self {
            hex: rgb_to_hex_upper(color),
            rgb: format!("rgb({}, {}, {})", color.red, color.green, color.blue),
            hsl: format!("hsl({}, {}%, {}%)", hsl.hue, hsl.saturation, hsl.lightness),
            hsv: format!("hsv({}, {}%, {}%)", hsv.hue, hsv.saturation, hsv.value),
            cmyk: format!(
                "cmyk({}%, {}%, {}%, {}%)",
                cmyk.cyan, cmyk.magenta, cmyk.yellow, cmyk.key
            ),
            lab: format!("lab({}, {}, {})", lab.lightness, lab.a, lab.b),
        }
    }

    pub fn get(&self, kind: FormatKind) -> &str {
        match kind {
            FormatKind::Hex => &self.hex,
            FormatKind::Rgb => &self.rgb,
            FormatKind::Hsl => &self.hsl,
            FormatKind::Hsv => &self.hsv,
            FormatKind::Cmyk => &self.cmyk,
            FormatKind::Lab => &self.lab,
        }
    }

    /// `(kind, value)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (FormatKind, &str)> {
        FormatKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    /// Plain-text listing, one `LABEL  value` line per format.
    pub fn to_text(&self) -> String {
        self.entries()
            .map(|(kind, value)| format!("{:<5} {value}\n", kind.label()))
            .collect()
    }
}
