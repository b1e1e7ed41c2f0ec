//! Preset swatch grid Component (2 rows of 10).

use crossterm_actions::{InputEvent, NavigationEvent, TuiEvent};
use palette::Srgb;
use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    props::{AttrValue, Attribute, Props},
};

use crate::convert::parse_hex;
use crate::picker::PRESET_COLORS;
use crate::tui::{AppAction, Msg, UserEvent, dispatcher, handle_global_app_events};

const COLUMNS: usize = 10;

pub struct PresetGrid {
    props: Props,
    swatches: Vec<Srgb<u8>>,
    selected: usize,
}

impl PresetGrid {
    pub fn new(current: Srgb<u8>) -> Self {
        let swatches: Vec<Srgb<u8>> = PRESET_COLORS.iter().filter_map(|h| parse_hex(h)).collect();
        // Start on the swatch matching the current color, if any
        let selected = swatches.iter().position(|c| *c == current).unwrap_or(0);
        Self {
            props: Props::default(),
            swatches,
            selected,
        }
    }

    fn rows(&self) -> usize {
        self.swatches.len().div_ceil(COLUMNS)
    }

    fn move_by(&mut self, delta: isize) {
        let next = self.selected as isize + delta;
        if (0..self.swatches.len() as isize).contains(&next) {
            self.selected = next as usize;
        }
    }

    fn draw_swatch(&self, frame: &mut Frame, area: Rect, index: usize, focused: bool) {
        let color = self.swatches[index];
        let bg = Color::Rgb(color.red, color.green, color.blue);
        let marker = if focused && index == self.selected {
            "▣"
        } else {
            " "
        };
        let style = Style::default()
            .bg(bg)
            .fg(contrasting_text(color))
            .add_modifier(Modifier::BOLD);
        frame.render_widget(Paragraph::new(marker).style(style), area);
    }
}

/// Black or white, whichever reads better on `color`.
pub fn contrasting_text(color: Srgb<u8>) -> Color {
    let luminance = 0.299 * f32::from(color.red)
        + 0.587 * f32::from(color.green)
        + 0.114 * f32::from(color.blue);
    if luminance > 128.0 {
        Color::Black
    } else {
        Color::White
    }
}

impl MockComponent for PresetGrid {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(std::iter::repeat_n(Constraint::Length(1), self.rows()));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let header_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        frame.render_widget(Paragraph::new("Presets:").style(header_style), rows[0]);

        for row in 0..self.rows() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(4); COLUMNS])
                .split(rows[row + 1]);
            for (col, cell) in cols.iter().enumerate() {
                let index = row * COLUMNS + col;
                if index < self.swatches.len() {
                    // Leave a gap column between swatches
                    let swatch = Rect {
                        width: cell.width.saturating_sub(1),
                        ..*cell
                    };
                    self.draw_swatch(frame, swatch, index, focused);
                }
            }
        }
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
            Cmd::Move(CmdDirection::Up) => self.move_by(-(COLUMNS as isize)),
            Cmd::Move(CmdDirection::Down) => self.move_by(COLUMNS as isize),
            Cmd::Move(CmdDirection::Left) => self.move_by(-1),
            Cmd::Move(CmdDirection::Right) => self.move_by(1),
            Cmd::Submit => return CmdResult::Submit(self.state()),
            _ => return CmdResult::None,
        }
        CmdResult::Changed(self.state())
    }
}

impl Component<Msg, UserEvent> for PresetGrid {
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

        let cmd = match action {
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => {
                Cmd::Move(CmdDirection::Up)
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => {
                Cmd::Move(CmdDirection::Down)
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Left)) => {
                Cmd::Move(CmdDirection::Left)
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right)) => {
                Cmd::Move(CmdDirection::Right)
            }
            AppAction::Tui(TuiEvent::Input(InputEvent::Confirm)) => Cmd::Submit,
            _ => return None,
        };

        match self.perform(cmd) {
            CmdResult::Submit(_) => Some(Msg::PresetSelected(self.selected)),
            _ => None,
        }
    }
}
