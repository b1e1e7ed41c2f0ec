//! Format list Component: every representation of the current color,
//! copyable one at a time.

use crossterm_actions::{InputEvent, NavigationEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    props::{AttrValue, Attribute, Props},
};

use crate::formats::{ColorFormats, FormatKind};
use crate::tui::{AppAction, Msg, UserEvent, dispatcher, handle_global_app_events};

pub struct FormatList {
    props: Props,
    formats: ColorFormats,
    selected: usize,
}

impl FormatList {
    pub fn new(formats: ColorFormats, selected: FormatKind) -> Self {
        Self {
            props: Props::default(),
            formats,
            selected: FormatKind::ALL
                .iter()
                .position(|k| *k == selected)
                .unwrap_or(0),
        }
    }

    fn selected_kind(&self) -> FormatKind {
        FormatKind::ALL[self.selected]
    }
}

impl MockComponent for FormatList {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::default()
            .title(" Formats ")
            .borders(Borders::ALL)
            .border_style(border_style);

        let lines: Vec<Line> = self
            .formats
            .entries()
            .enumerate()
            .map(|(i, (kind, value))| {
                let is_selected = i == self.selected;
                let marker = if is_selected && focused { "▸ " } else { "  " };
                let value_style = if is_selected && focused {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled(
                        format!("{:<5} ", kind.label()),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                    Span::styled(value.to_string(), value_style),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.selected))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(CmdDirection::Up) if self.selected > 0 => {
                self.selected -= 1;
                CmdResult::Changed(self.state())
            }
            Cmd::Move(CmdDirection::Down) if self.selected + 1 < FormatKind::ALL.len() => {
                self.selected += 1;
                CmdResult::Changed(self.state())
            }
            Cmd::Submit => CmdResult::Submit(self.state()),
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for FormatList {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        if !focused {
            return None;
        }

        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            return Some(msg);
        }

        match action {
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => {
                self.perform(Cmd::Move(CmdDirection::Up));
                None
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => {
                self.perform(Cmd::Move(CmdDirection::Down));
                None
            }
            AppAction::Tui(TuiEvent::Input(InputEvent::Confirm)) | AppAction::Copy => {
                Some(Msg::CopyFormat(self.selected_kind()))
            }
            _ => None,
        }
    }
}
