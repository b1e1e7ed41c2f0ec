//! Application messages for the TUI.

use crate::formats::FormatKind;
use crate::offset::Offset;
use crate::picker::Channel;

/// Custom user events (currently unused, but required by tui-realm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {}

/// All possible messages that can be sent in the TUI application.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // Application control
    Quit,
    ShowHelp,
    HideHelp,
    SwitchView,

    // Focus/Navigation
    FocusNext,
    FocusPrev,

    // Color picker
    ChannelChanged(Channel, u8),
    HexSubmitted(String),
    PresetSelected(usize),
    CopyFormat(FormatKind),

    // Shadow playground
    OffsetChanged(Offset),
    BlurChanged(i32),
    SpreadChanged(i32),
    ShadowColorSubmitted(String),

    // No-op (for unhandled events)
    None,
}
