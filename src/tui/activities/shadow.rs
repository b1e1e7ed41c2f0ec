//! Shadow activity: direction pad, blur and spread sliders, shadow color.

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
use tuirealm::{
    Application, EventListenerCfg, PollStrategy, Sub, SubClause, SubEventClause, Update,
};

use super::{FocusRing, help_modal_closed};
use crate::shadow::{BLUR_RANGE, SPREAD_RANGE};
use crate::tui::activity::{Activity, Context, ExitReason};
use crate::tui::components::{
    DirectionPad, InputType, SHADOW_FOOTER_ACTIONS, ShadowPreview, Slider, SliderConfig,
    SliderType, TextInput, format_footer, render_help,
};
use crate::tui::{Model, Msg, UserEvent};

/// Component identifiers scoped to the shadow playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    Pad,
    Blur,
    Spread,
    Color,
    Preview,
}

const FOCUS_ORDER: &[Id] = &[Id::Pad, Id::Blur, Id::Spread, Id::Color];

const PAD_FOOTER_EXTRAS: &[(&str, &str)] = &[
    ("drag", "mouse"),
    ("move", "arrows"),
    ("x±10", "{/}"),
    ("y±10", "[/]"),
];

/// Pad size in cells, borders included.
const PAD_WIDTH: u16 = 23;
const PAD_HEIGHT: u16 = 13;

pub struct ShadowActivity {
    app: Option<Application<Id, Msg, UserEvent>>,
    focus: FocusRing<Id>,
    context: Option<Context>,
    exit_reason: Option<ExitReason>,
    synced_revision: u64,
}

impl Default for ShadowActivity {
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

impl ShadowActivity {
    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }

    fn mount_components(app: &mut Application<Id, Msg, UserEvent>, model: &Model) -> Result<()> {
        let shadow = &model.shadow;

        // Subscribed so a press starts a drag even when a slider has focus.
        app.mount(
            Id::Pad,
            Box::new(DirectionPad::new(shadow.offset(), model.pad.max_offset)),
            vec![Sub::new(SubEventClause::Any, SubClause::Always)],
        )?;

        let blur = Slider::new(
            SliderConfig {
                label: "Blur".to_string(),
                min: *BLUR_RANGE.start(),
                max: *BLUR_RANGE.end(),
                step: 1,
                suffix: "px".to_string(),
                accent: Color::Cyan,
                slider_type: SliderType::Blur,
            },
            shadow.blur,
        );
        app.mount(Id::Blur, Box::new(blur), vec![])?;

        let spread = Slider::new(
            SliderConfig {
                label: "Spread".to_string(),
                min: *SPREAD_RANGE.start(),
                max: *SPREAD_RANGE.end(),
                step: 1,
                suffix: "px".to_string(),
                accent: Color::Magenta,
                slider_type: SliderType::Spread,
            },
            shadow.spread,
        );
        app.mount(Id::Spread, Box::new(spread), vec![])?;

        Self::mount_color_input(app, model)?;
        Self::mount_preview(app, model)?;
        app.active(&Id::Pad)?;
        Ok(())
    }

    fn mount_color_input(app: &mut Application<Id, Msg, UserEvent>, model: &Model) -> Result<()> {
        if app.mounted(&Id::Color) {
            app.umount(&Id::Color)?;
        }
        let input = TextInput::new("Color", InputType::CssColor, &model.shadow.color);
        app.mount(Id::Color, Box::new(input), vec![])?;
        Ok(())
    }

    fn mount_preview(app: &mut Application<Id, Msg, UserEvent>, model: &Model) -> Result<()> {
        if app.mounted(&Id::Preview) {
            app.umount(&Id::Preview)?;
        }
        let preview = ShadowPreview::new(model.shadow.clone());
        app.mount(Id::Preview, Box::new(preview), vec![])?;
        Ok(())
    }
}

impl Activity for ShadowActivity {
    fn on_create(&mut self, context: Context) {
        let mut app = Self::create_application();

        if let Err(e) = Self::mount_components(&mut app, &context.model) {
            tracing::error!("Failed to mount shadow components: {e}");
        }

        self.synced_revision = context.model.shadow_revision;
        self.context = Some(context);
        self.app = Some(app);
    }

    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let app = self
            .app
            .as_mut()
            .ok_or_else(|| eyre!("shadow view drawn before it was created"))?;
        let model = &mut self
            .context
            .as_mut()
            .ok_or_else(|| eyre!("shadow view has no context"))?
            .model;

        let now = Instant::now();
        model.picker.expire_toast(now);

        terminal.draw(|frame| {
            let area = frame.area();

            let main_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Title
                    Constraint::Min(PAD_HEIGHT),
                    Constraint::Length(1), // Status
                ])
                .split(area);

            let title = Paragraph::new(" Shadow Playground ")
                .style(Style::default().add_modifier(Modifier::BOLD));
            frame.render_widget(title, main_rows[0]);

            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(PAD_WIDTH + 2), Constraint::Min(20)])
                .split(main_rows[1]);

            let left_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(PAD_HEIGHT),
                    Constraint::Length(5), // Controls + borders
                    Constraint::Min(0),
                ])
                .split(cols[0]);

            app.view(&Id::Pad, frame, left_rows[0]);

            let controls_block = Block::default().title(" Shadow ").borders(Borders::ALL);
            let controls_inner = controls_block.inner(left_rows[1]);
            frame.render_widget(controls_block, left_rows[1]);

            let control_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1); 3])
                .split(controls_inner);
            app.view(&Id::Blur, frame, control_rows[0]);
            app.view(&Id::Spread, frame, control_rows[1]);
            app.view(&Id::Color, frame, control_rows[2]);

            app.view(&Id::Preview, frame, cols[1]);

            let status = model
                .status(now)
                .unwrap_or_else(|| format_footer(SHADOW_FOOTER_ACTIONS, PAD_FOOTER_EXTRAS));
            let status_widget =
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(status_widget, main_rows[2]);

            if model.show_help {
                render_help(frame);
            }
        })?;

        if model.show_help {
            if help_modal_closed()? {
                model.update(Some(Msg::HideHelp));
            }
            return Ok(());
        }

        let Ok(messages) = app.tick(PollStrategy::Once) else {
            return Ok(());
        };

        let mut color_submitted = false;
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
                    color_submitted |= matches!(other, Msg::ShadowColorSubmitted(_));
                    let mut current = Some(other);
                    while let Some(m) = current {
                        current = model.update(Some(m));
                    }
                }
            }
        }

        // The pad and sliders already show their own values; only the
        // preview and an accepted color need remounting.
        if model.shadow_revision != self.synced_revision {
            Self::mount_preview(app, model)?;
            if color_submitted {
                Self::mount_color_input(app, model)?;
                app.active(&self.focus.current_focus())?;
            }
            self.synced_revision = model.shadow_revision;
        }

        Ok(())
    }

    fn will_umount(&self) -> Option<&ExitReason> {
        self.exit_reason.as_ref()
    }

    fn on_destroy(&mut self) -> Option<Context> {
        self.app = None;
        self.context.take()
    }
}
