//! Read-only display of the picked color.

use palette::Srgb;
use ratatui::Frame;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{
    Component, Event, MockComponent, State,
    command::{Cmd, CmdResult},
    props::{AttrValue, Attribute, Props},
};

use crate::convert::rgb_to_hex_upper;
use crate::tui::components::preset_grid::contrasting_text;
use crate::tui::{Msg, UserEvent};

pub struct Swatch {
    props: Props,
    color: Srgb<u8>,
}

impl Swatch {
    pub fn new(color: Srgb<u8>) -> Self {
        Self {
            props: Props::default(),
            color,
        }
    }
}

impl MockComponent for Swatch {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title(" Color ").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let style = Style::default()
            .bg(Color::Rgb(self.color.red, self.color.green, self.color.blue))
            .fg(contrasting_text(self.color))
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![Line::from(""); usize::from(inner.height.saturating_sub(1) / 2)];
        lines.push(Line::from(rgb_to_hex_upper(self.color)));

        let para = Paragraph::new(lines)
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(para, inner);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, UserEvent> for Swatch {
    fn on(&mut self, _ev: Event<UserEvent>) -> Option<Msg> {
        None
    }
}
