//! Box-shadow playground state and its CSS output.

use std::ops::RangeInclusive;

use csscolorparser::Color as CssColor;
use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::offset::Offset;

/// Allowed blur radius in pixels.
pub const BLUR_RANGE: RangeInclusive<i32> = 0..=50;

/// Allowed spread radius in pixels.
pub const SPREAD_RANGE: RangeInclusive<i32> = -20..=20;

/// Default offset bound, matching the direction pad.
pub const DEFAULT_MAX_OFFSET: i32 = 50;

fn clamp_to(value: i32, range: &RangeInclusive<i32>) -> i32 {
    value.clamp(*range.start(), *range.end())
}

/// A single `box-shadow` layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowSettings {
    pub offset_x: i32,
    pub offset_y: i32,
    pub blur: i32,
    pub spread: i32,
    /// Any CSS color accepted by the color parser, kept as typed
    pub color: String,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            offset_x: 10,
            offset_y: 10,
            blur: 10,
            spread: 0,
            color: "#1e293b".to_string(),
        }
    }
}

impl ShadowSettings {
    pub fn offset(&self) -> Offset {
        Offset::new(self.offset_x, self.offset_y)
    }

    pub fn set_offset(&mut self, offset: Offset, bound: i32) {
        let offset = offset.clamped(bound);
        self.offset_x = offset.x;
        self.offset_y = offset.y;
    }

    pub fn set_blur(&mut self, blur: i32) {
        self.blur = clamp_to(blur, &BLUR_RANGE);
    }

    pub fn set_spread(&mut self, spread: i32) {
        self.spread = clamp_to(spread, &SPREAD_RANGE);
    }

    /// Replace the color if `text` is a valid CSS color.
    ///
    /// Returns `false` and keeps the current color otherwise.
    pub fn set_color(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.parse::<CssColor>().is_err() {
            tracing::debug!(color = text, "rejected shadow color");
            return false;
        }
        self.color = text.to_string();
        true
    }

    /// Clamp every numeric field into its allowed range.
    pub fn normalized(mut self, bound: i32) -> Self {
        self.set_offset(self.offset(), bound);
        self.set_blur(self.blur);
        self.set_spread(self.spread);
        self
    }

    /// Value part of the declaration, e.g. `10px 10px 10px 0px #1e293b`.
    pub fn css_value(&self) -> String {
        format!(
            "{}px {}px {}px {}px {}",
            self.offset_x, self.offset_y, self.blur, self.spread, self.color
        )
    }

    /// Full declaration, e.g. `box-shadow: 10px 10px 10px 0px #1e293b;`.
    pub fn declaration(&self) -> String {
        format!("box-shadow: {};", self.css_value())
    }

    /// The shadow color as RGB, ignoring alpha. `None` if unparseable.
    pub fn color_rgb(&self) -> Option<Srgb<u8>> {
        let color: CssColor = self.color.parse().ok()?;
        let [r, g, b, _a] = color.to_rgba8();
        Some(Srgb::new(r, g, b))
    }
}
