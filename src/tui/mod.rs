//! Interactive TUI hosting the color picker and the shadow playground.
//!
//! Architecture: Activity-based with tui-realm for components.
//! Each screen (activity) has its own Application instance; both share the
//! message type and the model.

mod activities;
mod activity;
mod components;
mod model;
mod msg;

use std::io::stdout;
use std::sync::LazyLock;

use color_eyre::eyre::Result;
use crossterm_actions::{
    ActionBinding, ActionConfig, AppEvent, EditingMode, KeyPress, SelectionEvent, TuiEvent,
    TuiRealmDispatcher, emacs_defaults, keys,
};
use ratatui::{
    Terminal,
    crossterm::ExecutableCommand,
    crossterm::event::{DisableMouseCapture, EnableMouseCapture},
    crossterm::terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
    prelude::CrosstermBackend,
};

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::logging::init_logging;

pub use model::Model;
pub use msg::{Msg, UserEvent};

use activity::{Context, ViewSwitcher};

// ============================================================================
// Event handling (shared across activities)
// ============================================================================

/// Unified application events - wraps TuiEvent + custom actions.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum AppAction {
    /// Standard TUI events (navigation, input, selection, app)
    Tui(TuiEvent),
    /// Switch between the color picker and the shadow playground
    SwitchView,
    /// Copy the selected value to the clipboard
    Copy,
    /// Increment value by small step (1)
    ValueIncrementSmall,
    /// Decrement value by small step (1)
    ValueDecrementSmall,
    /// Increment value by large step (10)
    ValueIncrementLarge,
    /// Decrement value by large step (10)
    ValueDecrementLarge,
}

fn bind(
    config: &mut ActionConfig<AppAction>,
    action: AppAction,
    key: KeyPress,
    description: &str,
) {
    config.bind(
        ActionBinding::builder()
            .action(action)
            .key(key)
            .description(description)
            .build(),
    );
}

/// Global dispatcher instance - shared by all components.
pub static DISPATCHER: LazyLock<TuiRealmDispatcher<AppAction>> = LazyLock::new(|| {
    let mut config = ActionConfig::new(EditingMode::Emacs);

    // Import all standard TuiEvent bindings wrapped in AppAction::Tui
    for binding in emacs_defaults().bindings() {
        config.bind(binding.clone().map_action(AppAction::Tui));
    }

    bind(&mut config, AppAction::SwitchView, keys::char('v'), "Switch view");
    bind(&mut config, AppAction::Copy, keys::char('y'), "Copy value");

    // Value adjustment bindings: [/] for small steps, {/} for large steps
    bind(
        &mut config,
        AppAction::ValueDecrementSmall,
        keys::char('['),
        "Decrease value",
    );
    bind(
        &mut config,
        AppAction::ValueIncrementSmall,
        keys::char(']'),
        "Increase value",
    );
    bind(
        &mut config,
        AppAction::ValueDecrementLarge,
        keys::char('{'),
        "Decrease value (10x)",
    );
    bind(
        &mut config,
        AppAction::ValueIncrementLarge,
        keys::char('}'),
        "Increase value (10x)",
    );

    config.compile();
    TuiRealmDispatcher::new(config)
});

/// Convenience function for components to access the dispatcher.
pub fn dispatcher() -> &'static TuiRealmDispatcher<AppAction> {
    &DISPATCHER
}

/// Handle global application events that are common across all components.
/// Returns Some(Msg) if the action was handled, None otherwise.
pub fn handle_global_app_events(action: &AppAction) -> Option<Msg> {
    match action {
        AppAction::Tui(TuiEvent::App(AppEvent::Quit)) => Some(Msg::Quit),
        AppAction::Tui(TuiEvent::App(AppEvent::Help)) => Some(Msg::ShowHelp),
        AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)) => Some(Msg::FocusNext),
        AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev)) => Some(Msg::FocusPrev),
        AppAction::SwitchView => Some(Msg::SwitchView),
        _ => None,
    }
}

// ============================================================================
// TUI entry point
// ============================================================================

/// Run the interactive TUI using activity-based architecture.
pub fn run(cli: &Cli, config: AppConfig) -> Result<()> {
    let _guard = init_logging(cli.log_file.as_deref(), Some(&cli.log_level));

    let model = Model::from_config(&config);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let context = Context { model };
    let mut switcher = ViewSwitcher::new(context);

    let result = switcher.run(&mut terminal);

    // Cleanup terminal
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    if let Err(ref e) = result {
        tracing::error!("TUI exited with error: {e}");
    }
    result
}
