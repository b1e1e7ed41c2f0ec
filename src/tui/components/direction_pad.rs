//! Direction pad Component: drag the handle with the mouse, or nudge it
//! with the arrow keys, to set the shadow offset.
//!
//! Mount it with `Sub::new(SubEventClause::Any, SubClause::Always)` so
//! presses reach it while another control is focused.

use crossterm_actions::{NavigationEvent, TuiEvent};
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
    event::{MouseButton, MouseEvent, MouseEventKind},
    props::{AttrValue, Attribute, Props},
};

use crate::offset::{DragTracker, Offset, PadGeometry};
use crate::tui::{AppAction, Msg, UserEvent, dispatcher, handle_global_app_events};

/// Handle is a single cell.
const HANDLE_CELLS: f64 = 1.0;

/// Offset change for `{`/`}` (x) and `[`/`]` (y).
const LARGE_STEP: i32 = 10;

pub struct DirectionPad {
    props: Props,
    tracker: DragTracker,
    /// Inner area from the last draw; pointer coordinates are relative to it
    region: Rect,
}

impl DirectionPad {
    pub fn new(offset: Offset, max_offset: i32) -> Self {
        let geometry = PadGeometry::square(0.0, HANDLE_CELLS, max_offset);
        Self {
            props: Props::default(),
            tracker: DragTracker::new(geometry, offset),
            region: Rect::default(),
        }
    }

    fn relayout(&mut self, region: Rect) {
        if region == self.region {
            return;
        }
        self.region = region;
        let max_offset = self.tracker.geometry().max_offset;
        self.tracker.set_geometry(PadGeometry {
            width: f64::from(region.width),
            height: f64::from(region.height),
            handle: HANDLE_CELLS,
            max_offset,
        });
    }

    /// Center of the terminal cell under the pointer, in pad coordinates.
    fn local_point(&self, column: u16, row: u16) -> (f64, f64) {
        (
            f64::from(column) - f64::from(self.region.x) + 0.5,
            f64::from(row) - f64::from(self.region.y) + 0.5,
        )
    }

    fn on_mouse(&mut self, mouse: MouseEvent) -> Option<Offset> {
        let (x, y) = self.local_point(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.tracker.pointer_down(x, y),
            MouseEventKind::Drag(MouseButton::Left) => self.tracker.pointer_move(x, y),
            MouseEventKind::Up(MouseButton::Left) => self.tracker.pointer_up(),
            _ => None,
        }
    }

    fn nudge(&mut self, dx: i32, dy: i32) -> Option<Msg> {
        let before = self.tracker.offset();
        let after = self.tracker.nudge(dx, dy);
        (after != before).then_some(Msg::OffsetChanged(after))
    }

    fn handle_cell(&self) -> (u16, u16) {
        let (x, y) = self.tracker.geometry().handle_origin(self.tracker.offset());
        let column = x.round().clamp(0.0, f64::from(self.region.width.saturating_sub(1)));
        let row = y.round().clamp(0.0, f64::from(self.region.height.saturating_sub(1)));
        (column as u16, row as u16)
    }
}

impl MockComponent for DirectionPad {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        let offset = self.tracker.offset();
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::default()
            .title(format!(" Offset {}, {} ", offset.x, offset.y))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.relayout(inner);

        let width = usize::from(inner.width);
        let height = usize::from(inner.height);
        if width == 0 || height == 0 {
            return;
        }

        let (handle_col, handle_row) = self.handle_cell();
        let (mid_col, mid_row) = (width / 2, height / 2);
        let guide = Style::default().fg(Color::DarkGray);
        let handle_style = if self.tracker.is_dragging() {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let lines: Vec<Line> = (0..height)
            .map(|row| {
                let spans: Vec<Span> = (0..width)
                    .map(|col| {
                        if col == usize::from(handle_col) && row == usize::from(handle_row) {
                            Span::styled("●", handle_style)
                        } else if col == mid_col && row == mid_row {
                            Span::styled("┼", guide)
                        } else if col == mid_col {
                            Span::styled("│", guide)
                        } else if row == mid_row {
                            Span::styled("─", guide)
                        } else {
                            Span::raw(" ")
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        let offset = self.tracker.offset();
        State::Tup2((StateValue::I32(offset.x), StateValue::I32(offset.y)))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        let (dx, dy) = match cmd {
            Cmd::Move(CmdDirection::Left) => (-1, 0),
            Cmd::Move(CmdDirection::Right) => (1, 0),
            Cmd::Move(CmdDirection::Up) => (0, -1),
            Cmd::Move(CmdDirection::Down) => (0, 1),
            _ => return CmdResult::None,
        };
        match self.nudge(dx, dy) {
            Some(_) => CmdResult::Changed(self.state()),
            None => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for DirectionPad {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        // The pad is subscribed to every event, so a press inside it starts a
        // drag whichever component holds focus. Keys stay focus-only.
        let key_event = match ev {
            Event::Mouse(mouse) => return self.on_mouse(mouse).map(Msg::OffsetChanged),
            Event::Keyboard(key_event) => key_event,
            _ => return None,
        };

        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        if !focused {
            return None;
        }

        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            return Some(msg);
        }

        match action {
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Left)) => self.nudge(-1, 0),
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right)) => self.nudge(1, 0),
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => self.nudge(0, -1),
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => self.nudge(0, 1),
            AppAction::ValueDecrementLarge => self.nudge(-LARGE_STEP, 0),
            AppAction::ValueIncrementLarge => self.nudge(LARGE_STEP, 0),
            AppAction::ValueDecrementSmall => self.nudge(0, -LARGE_STEP),
            AppAction::ValueIncrementSmall => self.nudge(0, LARGE_STEP),
            _ => None,
        }
    }
}
