//! TUI components using tui-realm.

pub mod direction_pad;
pub mod format_list;
pub mod help;
pub mod preset_grid;
pub mod shadow_preview;
pub mod slider;
pub mod swatch;
pub mod text_input;

pub use direction_pad::DirectionPad;
pub use format_list::FormatList;
pub use help::{PICKER_FOOTER_ACTIONS, SHADOW_FOOTER_ACTIONS, format_footer, render_help};
pub use preset_grid::PresetGrid;
pub use shadow_preview::ShadowPreview;
pub use slider::{Slider, SliderConfig, SliderType};
pub use swatch::Swatch;
pub use text_input::{InputType, TextInput};
