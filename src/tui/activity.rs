//! Screen switching for the TUI.
//!
//! The picker and the shadow playground each run their own tui-realm
//! Application. `ViewSwitcher` hands the shared model from one to the other,
//! so a color picked on one screen is still there after `v`.

use std::io::Stdout;

use color_eyre::eyre::{Result, eyre};
use ratatui::{Terminal, prelude::CrosstermBackend};

use super::Model;
use super::activities::{PickerActivity, ShadowActivity};

/// State that outlives a single screen.
pub struct Context {
    pub model: Model,
}

/// The two screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Picker,
    Shadow,
}

impl View {
    pub fn other(self) -> Self {
        match self {
            View::Picker => View::Shadow,
            View::Shadow => View::Picker,
        }
    }

    fn launch(self) -> Box<dyn Activity> {
        match self {
            View::Picker => Box::<PickerActivity>::default(),
            View::Shadow => Box::<ShadowActivity>::default(),
        }
    }
}

/// Why a screen stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Quit,
    SwitchView,
}

/// Screen lifecycle. Each screen owns its Application and polls its own events.
pub trait Activity {
    /// Take the shared context and mount components.
    fn on_create(&mut self, context: Context);

    /// Draw, then handle one tick of events.
    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()>;

    /// Some(reason) once the screen wants to stop.
    fn will_umount(&self) -> Option<&ExitReason>;

    /// Unmount and give the context back.
    fn on_destroy(&mut self) -> Option<Context>;
}

/// Screen to show after `current` exits, or None to leave the TUI.
pub fn next_view(current: View, reason: ExitReason) -> Option<View> {
    match reason {
        ExitReason::Quit => None,
        ExitReason::SwitchView => Some(current.other()),
    }
}

/// Runs one screen at a time until the user quits.
pub struct ViewSwitcher {
    context: Option<Context>,
    current: View,
}

impl ViewSwitcher {
    pub fn new(context: Context) -> Self {
        Self {
            context: Some(context),
            current: View::default(),
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            let context = self
                .context
                .take()
                .ok_or_else(|| eyre!("model lost while switching to {:?}", self.current))?;

            let mut activity = self.current.launch();
            tracing::debug!(view = ?self.current, "entering view");
            activity.on_create(context);

            let reason = loop {
                activity.on_draw(terminal)?;
                if let Some(reason) = activity.will_umount() {
                    break *reason;
                }
            };
            self.context = activity.on_destroy();

            match next_view(self.current, reason) {
                Some(view) => self.current = view,
                None => return Ok(()),
            }
        }
    }
}
