//! Application model for the TUI.

use std::time::Instant;

use palette::Srgb;
use tuirealm::Update;

use crate::clipboard::SystemClipboard;
use crate::config::AppConfig;
use crate::convert::parse_hex;
use crate::offset::PadGeometry;
use crate::picker::{ColorPicker, DEFAULT_COLOR};
use crate::shadow::ShadowSettings;
use crate::store::{ColorStore, FileStore, MemoryStore};

use super::msg::Msg;

/// Application model containing all state.
#[derive(Debug)]
pub struct Model {
    pub picker: ColorPicker,
    pub shadow: ShadowSettings,
    pub pad: PadGeometry,

    // UI state
    pub quit: bool,
    pub show_help: bool,
    pub message: Option<String>,
    /// Bumped whenever picker state changes, so activities know to resync
    pub picker_revision: u64,
    /// Bumped whenever shadow state changes
    pub shadow_revision: u64,
}

impl Model {
    /// Create the model and restore the last picked color.
    pub fn from_config(config: &AppConfig) -> Self {
        let store: Box<dyn ColorStore> = if config.picker.persist {
            let path = config
                .picker
                .store_path
                .clone()
                .unwrap_or_else(FileStore::default_path);
            Box::new(FileStore::new(path))
        } else {
            Box::new(MemoryStore::default())
        };

        Self::with_collaborators(config, store, Box::new(SystemClipboard))
    }

    pub fn with_collaborators(
        config: &AppConfig,
        store: Box<dyn ColorStore>,
        clipboard: Box<dyn crate::clipboard::ClipboardService>,
    ) -> Self {
        let initial = parse_hex(&config.picker.initial)
            .or_else(|| parse_hex(DEFAULT_COLOR))
            .unwrap_or(Srgb::new(0, 0, 0));

        let mut picker = ColorPicker::new(initial, store, clipboard);
        picker.load();

        Self {
            picker,
            shadow: config.initial_shadow(),
            pad: config.pad,
            quit: false,
            show_help: false,
            message: None,
            picker_revision: 0,
            shadow_revision: 0,
        }
    }

    /// Status bar text: the toast wins over the last message.
    pub fn status(&self, now: Instant) -> Option<String> {
        self.picker
            .toast(now)
            .map(str::to_string)
            .or_else(|| self.message.clone())
    }

    fn picker_changed(&mut self) {
        self.picker_revision += 1;
        self.message = None;
    }

    fn shadow_changed(&mut self) {
        self.shadow_revision += 1;
        self.message = None;
    }
}

impl Update<Msg> for Model {
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        let msg = msg?;
        match msg {
            Msg::Quit => {
                self.quit = true;
                None
            }
            Msg::ShowHelp => {
                self.show_help = true;
                None
            }
            Msg::HideHelp => {
                self.show_help = false;
                None
            }

            Msg::ChannelChanged(channel, value) => {
                self.picker.set_channel(channel, value);
                self.picker_changed();
                None
            }
            Msg::HexSubmitted(text) => {
                if self.picker.update_from_hex(&text) {
                    self.picker_changed();
                } else {
                    self.message = Some(format!("Invalid hex color: {text}"));
                }
                None
            }
            Msg::PresetSelected(index) => {
                if self.picker.select_preset(index) {
                    self.picker_changed();
                }
                None
            }
            Msg::CopyFormat(kind) => {
                // Failures are logged by the picker and otherwise ignored.
                self.picker.copy(kind, Instant::now());
                None
            }

            Msg::OffsetChanged(offset) => {
                self.shadow.set_offset(offset, self.pad.max_offset);
                self.shadow_changed();
                None
            }
            Msg::BlurChanged(blur) => {
                self.shadow.set_blur(blur);
                self.shadow_changed();
                None
            }
            Msg::SpreadChanged(spread) => {
                self.shadow.set_spread(spread);
                self.shadow_changed();
                None
            }
            Msg::ShadowColorSubmitted(text) => {
                if self.shadow.set_color(&text) {
                    self.shadow_changed();
                } else {
                    self.message = Some(format!("Invalid CSS color: {text}"));
                }
                None
            }

            // Handled by the activity
            Msg::SwitchView | Msg::FocusNext | Msg::FocusPrev | Msg::None => None,
        }
    }
}
