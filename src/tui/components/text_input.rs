//! Single-line text entry Component (hex and CSS color fields).

use crossterm_actions::{InputEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult},
    event::{Key, KeyModifiers},
    props::{AttrValue, Attribute, Props},
};

use crate::tui::{AppAction, Msg, UserEvent, dispatcher, handle_global_app_events};

/// What the field edits (determines which Msg Enter sends).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    /// `#rrggbb`; only hex digits and `#` are typed into the buffer
    Hex,
    /// Any CSS color text
    CssColor,
}

impl InputType {
    fn accepts(self, c: char, buffer: &str) -> bool {
        match self {
            InputType::Hex => (c.is_ascii_hexdigit() || c == '#') && buffer.len() < 7,
            InputType::CssColor => !c.is_control() && buffer.len() < 48,
        }
    }
}

pub struct TextInput {
    props: Props,
    label: String,
    input_type: InputType,
    /// Value last accepted by the model
    committed: String,
    buffer: String,
}

impl TextInput {
    pub fn new(label: &str, input_type: InputType, value: &str) -> Self {
        Self {
            props: Props::default(),
            label: label.to_string(),
            input_type,
            committed: value.to_string(),
            buffer: value.to_string(),
        }
    }

    fn submit(&mut self) -> Option<Msg> {
        let text = self.buffer.trim().to_string();
        if text.is_empty() {
            self.buffer = self.committed.clone();
            return None;
        }
        match self.input_type {
            InputType::Hex => Some(Msg::HexSubmitted(text)),
            InputType::CssColor => Some(Msg::ShadowColorSubmitted(text)),
        }
    }
}

impl MockComponent for TextInput {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(10), Constraint::Min(8)])
            .split(area);

        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        frame.render_widget(
            Paragraph::new(format!("{}:", self.label)).style(label_style),
            cols[0],
        );

        let edited = self.buffer != self.committed;
        let mut spans = vec![Span::styled(
            self.buffer.as_str(),
            if focused {
                Style::default().fg(Color::White).bg(Color::DarkGray)
            } else {
                Style::default()
            },
        )];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
        }
        if edited {
            spans.push(Span::styled(
                "  (Enter to apply)",
                Style::default().add_modifier(Modifier::DIM),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), cols[1]);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::String(self.buffer.clone()))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Type(c) if self.input_type.accepts(c, &self.buffer) => {
                self.buffer.push(c);
                CmdResult::Changed(self.state())
            }
            Cmd::Delete => {
                self.buffer.pop();
                CmdResult::Changed(self.state())
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for TextInput {
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

        // Raw editing keys first; anything the field does not accept falls
        // through to the dispatcher (so `q`, `v` and `?` still work in the
        // hex field).
        match key_event.code {
            Key::Char(c)
                if !key_event.modifiers.contains(KeyModifiers::CONTROL)
                    && self.input_type.accepts(c, &self.buffer) =>
            {
                self.perform(Cmd::Type(c));
                return None;
            }
            Key::Backspace => {
                self.perform(Cmd::Delete);
                return None;
            }
            Key::Enter => return self.submit(),
            Key::Esc => {
                self.buffer = self.committed.clone();
                return None;
            }
            _ => {}
        }

        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            return Some(msg);
        }

        match action {
            AppAction::Tui(TuiEvent::Input(InputEvent::Confirm)) => self.submit(),
            _ => None,
        }
    }
}
