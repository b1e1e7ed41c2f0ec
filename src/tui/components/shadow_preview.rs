//! Shadow preview Component: a card with its shadow, and the CSS declaration.

use ratatui::Frame;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{
    Component, Event, MockComponent, State,
    command::{Cmd, CmdResult},
    props::{AttrValue, Attribute, Props},
};

use crate::shadow::ShadowSettings;
use crate::tui::{Msg, UserEvent};

/// Preview pixels per terminal column; rows count double.
const PIXELS_PER_CELL: i32 = 5;

pub struct ShadowPreview {
    props: Props,
    settings: ShadowSettings,
}

impl ShadowPreview {
    pub fn new(settings: ShadowSettings) -> Self {
        Self {
            props: Props::default(),
            settings,
        }
    }

    fn shadow_color(&self) -> Color {
        self.settings
            .color_rgb()
            .map(|c| Color::Rgb(c.red, c.green, c.blue))
            .unwrap_or(Color::DarkGray)
    }

    /// The card's shadow rectangle, clipped to `bounds`.
    fn shadow_rect(&self, card: Rect, bounds: Rect) -> Rect {
        let dx = self.settings.offset_x / PIXELS_PER_CELL;
        let dy = self.settings.offset_y / (PIXELS_PER_CELL * 2);
        let grow = self.settings.spread / PIXELS_PER_CELL;

        let left = i32::from(card.x) + dx - grow;
        let top = i32::from(card.y) + dy - grow / 2;
        let right = i32::from(card.right()) + dx + grow;
        let bottom = i32::from(card.bottom()) + dy + grow / 2;

        let left = left.clamp(i32::from(bounds.x), i32::from(bounds.right()));
        let top = top.clamp(i32::from(bounds.y), i32::from(bounds.bottom()));
        let right = right.clamp(left, i32::from(bounds.right()));
        let bottom = bottom.clamp(top, i32::from(bounds.bottom()));

        Rect::new(
            left as u16,
            top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        )
    }
}

impl MockComponent for ShadowPreview {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title(" Preview ").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Stage
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Declaration
            ])
            .split(inner);
        let stage = rows[0];

        let card_width = (stage.width / 3).max(4);
        let card_height = (stage.height / 3).max(2);
        let card = Rect::new(
            stage.x + stage.width.saturating_sub(card_width) / 2,
            stage.y + stage.height.saturating_sub(card_height) / 2,
            card_width.min(stage.width),
            card_height.min(stage.height),
        );

        let shadow = self.shadow_rect(card, stage);
        let shadow_style = if self.settings.blur > 0 {
            Style::default()
                .bg(self.shadow_color())
                .add_modifier(Modifier::DIM)
        } else {
            Style::default().bg(self.shadow_color())
        };
        frame.render_widget(Block::default().style(shadow_style), shadow);

        let card_widget = Paragraph::new(Line::from("card"))
            .alignment(Alignment::Center)
            .style(Style::default().bg(Color::White).fg(Color::Black));
        frame.render_widget(card_widget, card);

        let declaration = Line::from(vec![
            Span::styled("box-shadow: ", Style::default().fg(Color::Cyan)),
            Span::raw(format!("{};", self.settings.css_value())),
        ]);
        frame.render_widget(Paragraph::new(declaration), rows[2]);
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

impl Component<Msg, UserEvent> for ShadowPreview {
    fn on(&mut self, _ev: Event<UserEvent>) -> Option<Msg> {
        None
    }
}
