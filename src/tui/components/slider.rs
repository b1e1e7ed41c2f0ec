//! Reusable integer slider Component.

use crossterm_actions::{NavigationEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    props::{AttrValue, Attribute, Props},
};

use crate::picker::Channel;
use crate::tui::{AppAction, Msg, UserEvent, dispatcher, handle_global_app_events};

/// Which value the slider edits (determines which Msg to send on change).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderType {
    Channel(Channel),
    Blur,
    Spread,
}

/// Configuration for a slider.
#[derive(Debug, Clone)]
pub struct SliderConfig {
    pub label: String,
    pub min: i32,
    pub max: i32,
    pub step: i32,
    pub suffix: String,
    /// Filled-track color
    pub accent: Color,
    pub slider_type: SliderType,
}

/// A horizontal slider with label and value display.
///
/// The value is kept within `[min, max]` by construction.
pub struct Slider {
    props: Props,
    value: i32,
    config: SliderConfig,
}

impl Slider {
    pub fn new(config: SliderConfig, initial_value: i32) -> Self {
        Self {
            props: Props::default(),
            value: initial_value.clamp(config.min, config.max),
            config,
        }
    }

    fn adjust(&mut self, delta: i32) -> bool {
        let next = self
            .value
            .saturating_add(delta)
            .clamp(self.config.min, self.config.max);
        let changed = next != self.value;
        self.value = next;
        changed
    }

    fn msg_for_change(&self) -> Option<Msg> {
        match self.config.slider_type {
            SliderType::Channel(channel) => {
                let value = u8::try_from(self.value).ok()?;
                Some(Msg::ChannelChanged(channel, value))
            }
            SliderType::Blur => Some(Msg::BlurChanged(self.value)),
            SliderType::Spread => Some(Msg::SpreadChanged(self.value)),
        }
    }

    fn adjust_and_notify(&mut self, delta: i32) -> Option<Msg> {
        if self.adjust(delta) {
            self.msg_for_change()
        } else {
            None
        }
    }
}

impl MockComponent for Slider {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(10), Constraint::Min(10)])
            .split(area);

        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let label_text = Paragraph::new(format!("{}:", self.config.label)).style(label_style);
        frame.render_widget(label_text, cols[0]);

        let slider_width = cols[1].width.saturating_sub(8) as usize;
        let span = f64::from(self.config.max - self.config.min).max(1.0);
        let ratio = f64::from(self.value - self.config.min) / span;
        let pos = (ratio * slider_width as f64).round() as usize;
        let pos = pos.min(slider_width.saturating_sub(1));

        let (filled_style, empty_style, handle_style) = if focused {
            (
                Style::default().fg(self.config.accent),
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::White),
            )
        } else {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::Gray),
            )
        };

        let mut spans = Vec::with_capacity(slider_width + 1);
        for i in 0..slider_width {
            if i == pos {
                spans.push(Span::styled("●", handle_style));
            } else if i < pos {
                spans.push(Span::styled("━", filled_style));
            } else {
                spans.push(Span::styled("─", empty_style));
            }
        }

        spans.push(Span::styled(
            format!(" {}{}", self.value, self.config.suffix),
            if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            },
        ));

        frame.render_widget(Paragraph::new(Line::from(spans)), cols[1]);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::I32(self.value))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(CmdDirection::Left) if self.adjust(-self.config.step) => {
                CmdResult::Changed(self.state())
            }
            Cmd::Move(CmdDirection::Right) if self.adjust(self.config.step) => {
                CmdResult::Changed(self.state())
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for Slider {
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

        let step = self.config.step;
        match action {
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Left))
            | AppAction::ValueDecrementSmall => self.adjust_and_notify(-step),
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right))
            | AppAction::ValueIncrementSmall => self.adjust_and_notify(step),
            AppAction::ValueDecrementLarge => self.adjust_and_notify(-step * 10),
            AppAction::ValueIncrementLarge => self.adjust_and_notify(step * 10),
            _ => None,
        }
    }
}
