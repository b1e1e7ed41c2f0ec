//! Picker activity: RGB sliders, hex entry, formats, and presets.

use std::io::Stdout;
use std::time::{Duration, Instant};

use color_eyre::eyre::{Result, eyre};
use ratatui::{
    Terminal,
    layout::{Constraint, Direction, Layout},
    prelude::CrosstermBackend,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{Application, EventListenerCfg, PollStrategy, State, StateValue, Update};

use super::{FocusRing, help_modal_closed};
use crate::formats::FormatKind;
use crate::picker::Channel;
use crate::tui::activity::{Activity, Context, ExitReason};
use crate::tui::components::{
    FormatList, InputType, PICKER_FOOTER_ACTIONS, PresetGrid, Slider, SliderConfig, SliderType,
    Swatch, TextInput, format_footer, render_help,
};
use crate::tui::{Model, Msg, UserEvent};

/// Component identifiers scoped to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    Swatch,
    Red,
    Green,
    Blue,
    Hex,
    Formats,
    Presets,
}

const FOCUS_ORDER: &[Id] = &[Id::Red, Id::Green, Id::Blue, Id::Hex, Id::Formats, Id::Presets];

fn channel_slider(channel: Channel, value: u8) -> Slider {
    let (label, accent) = match channel {
        Channel::Red => ("Red", Color::Red),
        Channel::Green => ("Green", Color::Green),
        Channel::Blue => ("Blue", Color::Blue),
    };
    Slider::new(
        SliderConfig {
            label: label.to_string(),
            min: 0,
            max: 255,
            step: 1,
            suffix: String::new(),
            accent,
            slider_type: SliderType::Channel(channel),
        },
        i32::from(value),
    )
}

pub struct PickerActivity {
    app: Option<Application<Id, Msg, UserEvent>>,
    focus: FocusRing<Id>,
    context: Option<Context>,
    exit_reason: Option<ExitReason>,
    /// Picker revision the mounted components reflect
    synced_revision: u64,
}

impl Default for PickerActivity {
    fn default() -> Self {
        Self {
            app: None,
            focus: FocusRing::new(FOCUS_ORDER),
            context: None,
            exit_reason: None,
            synced_revision: 0,
        }
    }
}

impl PickerActivity {
    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }

    /// Mount (or remount) every component that mirrors the picked color.
    fn mount_color_components(
        app: &mut Application<Id, Msg, UserEvent>,
        model: &Model,
        selected_format: FormatKind,
    ) -> Result<()> {
        let picker = &model.picker;

        for id in [Id::Swatch, Id::Red, Id::Green, Id::Blue, Id::Hex, Id::Formats] {
            if app.mounted(&id) {
                app.umount(&id)?;
            }
        }

        app.mount(Id::Swatch, Box::new(Swatch::new(picker.color())), vec![])?;
        for (id, channel) in [
            (Id::Red, Channel::Red),
            (Id::Green, Channel::Green),
            (Id::Blue, Channel::Blue),
        ] {
            let slider = channel_slider(channel, picker.channel(channel));
            app.mount(id, Box::new(slider), vec![])?;
        }
        app.mount(
            Id::Hex,
            Box::new(TextInput::new("Hex", InputType::Hex, &picker.hex())),
            vec![],
        )?;
        app.mount(
            Id::Formats,
            Box::new(FormatList::new(picker.formats(), selected_format)),
            vec![],
        )?;
        Ok(())
    }

    fn selected_format(app: &Application<Id, Msg, UserEvent>) -> FormatKind {
        match app.state(&Id::Formats) {
            Ok(State::One(StateValue::Usize(index))) => FormatKind::ALL
                .get(index)
                .copied()
                .unwrap_or(FormatKind::Hex),
            _ => FormatKind::Hex,
        }
    }

    fn sync_components(&mut self) -> Result<()> {
        let (Some(app), Some(context)) = (self.app.as_mut(), self.context.as_ref()) else {
            return Ok(());
        };
        let model = &context.model;
        if model.picker_revision == self.synced_revision {
            return Ok(());
        }

        let selected = Self::selected_format(app);
        Self::mount_color_components(app, model, selected)?;
        app.active(&self.focus.current_focus())?;
        self.synced_revision = model.picker_revision;
        Ok(())
    }
}

impl Activity for PickerActivity {
    fn on_create(&mut self, context: Context) {
        let mut app = Self::create_application();

        let model = &context.model;
        let mounted = Self::mount_color_components(&mut app, model, FormatKind::Hex)
            .and_then(|()| {
                app.mount(
                    Id::Presets,
                    Box::new(PresetGrid::new(model.picker.color())),
                    vec![],
                )?;
                app.active(&self.focus.current_focus())?;
                Ok(())
            });
        if let Err(e) = mounted {
            tracing::error!("Failed to mount picker components: {e}");
        }

        self.synced_revision = model.picker_revision;
        self.context = Some(context);
        self.app = Some(app);
    }

    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let app = self
            .app
            .as_mut()
            .ok_or_else(|| eyre!("picker drawn before it was created"))?;
        let model = &mut self
            .context
            .as_mut()
            .ok_or_else(|| eyre!("picker has no context"))?
            .model;

        let now = Instant::now();
        model.picker.expire_toast(now);

        terminal.draw(|frame| {
            let area = frame.area();

            let main_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Title
                    Constraint::Min(12),   // Content
                    Constraint::Length(1), // Status
                ])
                .split(area);

            let title = Paragraph::new(" Color Picker ")
                .style(Style::default().add_modifier(Modifier::BOLD));
            frame.render_widget(title, main_rows[0]);

            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
                .split(main_rows[1]);

            app.view(&Id::Swatch, frame, cols[0]);

            let right_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(6), // Controls + borders
                    Constraint::Length(8), // Formats
                    Constraint::Length(3), // Presets
                    Constraint::Min(0),
                ])
                .split(cols[1]);

            let controls_block = Block::default().title(" Controls ").borders(Borders::ALL);
            let controls_inner = controls_block.inner(right_rows[0]);
            frame.render_widget(controls_block, right_rows[0]);

            let control_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1); 4])
                .split(controls_inner);
            app.view(&Id::Red, frame, control_rows[0]);
            app.view(&Id::Green, frame, control_rows[1]);
            app.view(&Id::Blue, frame, control_rows[2]);
            app.view(&Id::Hex, frame, control_rows[3]);

            app.view(&Id::Formats, frame, right_rows[1]);
            app.view(&Id::Presets, frame, right_rows[2]);

            let status = model
                .status(now)
                .unwrap_or_else(|| format_footer(PICKER_FOOTER_ACTIONS, &[("adjust", "[]/{}")]));
            let status_widget =
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(status_widget, main_rows[2]);

            if model.show_help {
                render_help(frame);
            }
        })?;

        // The help modal intercepts all input while visible
        if model.show_help {
            if help_modal_closed()? {
                model.update(Some(Msg::HideHelp));
            }
            return Ok(());
        }

        // Timeouts are expected; nothing to do until the next tick
        let Ok(messages) = app.tick(PollStrategy::Once) else {
            return Ok(());
        };

        for msg in messages {
            match msg {
                Msg::FocusNext => {
                    let next = self.focus.focus_next();
                    app.active(&next)?;
                }
                Msg::FocusPrev => {
                    let prev = self.focus.focus_prev();
                    app.active(&prev)?;
                }
                Msg::SwitchView => {
                    self.exit_reason = Some(ExitReason::SwitchView);
                    return Ok(());
                }
                Msg::Quit => {
                    self.exit_reason = Some(ExitReason::Quit);
                    return Ok(());
                }
                other => {
                    let mut current = Some(other);
                    while let Some(m) = current {
                        current = model.update(Some(m));
                    }
                }
            }
        }

        self.sync_components()
    }

    fn will_umount(&self) -> Option<&ExitReason> {
        self.exit_reason.as_ref()
    }

    fn on_destroy(&mut self) -> Option<Context> {
        self.app = None;
        self.context.take()
    }
}
