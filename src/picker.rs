//! Color picker state: one canonical RGB value plus its collaborators.

use std::time::{Duration, Instant};

use palette::Srgb;

use crate::clipboard::ClipboardService;
use crate::convert::{parse_hex, rgb_to_hex};
use crate::formats::{ColorFormats, FormatKind};
use crate::store::ColorStore;

/// Color shown before anything was picked or restored.
pub const DEFAULT_COLOR: &str = "#ff6b6b";

/// How long the copy notification stays visible.
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

pub const COPY_TOAST: &str = "Color copied to clipboard!";

/// Preset swatches offered by the picker.
pub const PRESET_COLORS: [&str; 20] = [
    "#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#feca57", "#ff9ff3", "#54a0ff", "#5f27cd",
    "#00d2d3", "#ff9f43", "#10ac84", "#ee5a24", "#0abde3", "#3867d6", "#8854d0", "#a55eea",
    "#26de81", "#fd79a8", "#fdcb6e", "#6c5ce7",
];

/// An RGB channel addressed by a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub raised_at: Instant,
}

impl Toast {
    pub fn is_visible(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) < TOAST_DURATION
    }
}

/// The color widget.
///
/// All formats are derived from `color` on demand; the only state besides it
/// is the toast.
pub struct ColorPicker {
    color: Srgb<u8>,
    store: Box<dyn ColorStore>,
    clipboard: Box<dyn ClipboardService>,
    toast: Option<Toast>,
}

impl std::fmt::Debug for ColorPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorPicker")
            .field("color", &rgb_to_hex(self.color))
            .field("toast", &self.toast)
            .finish_non_exhaustive()
    }
}

impl ColorPicker {
    pub fn new(
        initial: Srgb<u8>,
        store: Box<dyn ColorStore>,
        clipboard: Box<dyn ClipboardService>,
    ) -> Self {
        Self {
            color: initial,
            store,
            clipboard,
            toast: None,
        }
    }

    /// Apply the persisted color, if there is a valid one.
    ///
    /// Returns whether the color changed. Read errors are logged and ignored.
    pub fn load(&mut self) -> bool {
        match self.store.load() {
            Ok(Some(saved)) => match parse_hex(&saved) {
                Some(color) => {
                    tracing::debug!(color = %saved, "restored last color");
                    self.color = color;
                    true
                }
                None => {
                    tracing::warn!(color = %saved, "ignoring malformed saved color");
                    false
                }
            },
            Ok(None) => false,
            Err(e) => {
                tracing::warn!("failed to load last color: {e}");
                false
            }
        }
    }

    pub fn color(&self) -> Srgb<u8> {
        self.color
    }

    /// Canonical color as lowercase `#rrggbb`.
    pub fn hex(&self) -> String {
        rgb_to_hex(self.color)
    }

    pub fn formats(&self) -> ColorFormats {
        ColorFormats::from_rgb(self.color)
    }

    /// Apply a hex string. Invalid input leaves the color unchanged.
    pub fn update_from_hex(&mut self, input: &str) -> bool {
        match parse_hex(input.trim()) {
            Some(color) => {
                self.replace(color);
                true
            }
            None => {
                tracing::debug!(input, "rejected hex input");
                false
            }
        }
    }

    pub fn update_from_rgb(&mut self, red: u8, green: u8, blue: u8) {
        self.replace(Srgb::new(red, green, blue));
    }

    /// Replace one channel, keeping the other two.
    pub fn set_channel(&mut self, channel: Channel, value: u8) {
        let (red, green, blue) = self.color.into_components();
        match channel {
            Channel::Red => self.update_from_rgb(value, green, blue),
            Channel::Green => self.update_from_rgb(red, value, blue),
            Channel::Blue => self.update_from_rgb(red, green, value),
        }
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.color.red,
            Channel::Green => self.color.green,
            Channel::Blue => self.color.blue,
        }
    }

    /// Apply preset `index`. Out-of-range indices change nothing.
    pub fn select_preset(&mut self, index: usize) -> bool {
        PRESET_COLORS
            .get(index)
            .is_some_and(|hex| self.update_from_hex(hex))
    }

    /// Copy one format to the clipboard and raise the toast on success.
    pub fn copy(&mut self, kind: FormatKind, now: Instant) -> bool {
        let text = self.formats().get(kind).to_string();
        match self.clipboard.write_text(text) {
            Ok(()) => {
                self.toast = Some(Toast {
                    message: COPY_TOAST.to_string(),
                    raised_at: now,
                });
                true
            }
            Err(e) => {
                tracing::error!("Failed to copy: {e}");
                false
            }
        }
    }

    /// Text of the toast if it is still visible at `now`.
    pub fn toast(&self, now: Instant) -> Option<&str> {
        self.toast
            .as_ref()
            .filter(|t| t.is_visible(now))
            .map(|t| t.message.as_str())
    }

    /// Drop an expired toast. Returns whether one was removed.
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if self.toast.as_ref().is_some_and(|t| !t.is_visible(now)) {
            self.toast = None;
            return true;
        }
        false
    }

    fn replace(&mut self, color: Srgb<u8>) {
        self.color = color;
        let hex = rgb_to_hex(color);
        tracing::debug!(color = %hex, "color changed");
        if let Err(e) = self.store.save(&hex) {
            tracing::warn!("failed to save last color: {e}");
        }
    }
}
