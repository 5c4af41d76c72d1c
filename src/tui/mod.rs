//! Interactive terminal configurator.
//!
//! Architecture: Activity-based with tui-realm for components.
//! Browsing and editing each get an activity; the ActivityManager switches
//! between them whenever the session's modality changes.

mod activities;
mod activity;
mod components;
mod model;
mod msg;

use std::io::stdout;
use std::sync::LazyLock;

use color_eyre::eyre::Result;
use crossterm_actions::{
    ActionConfig, AppEvent, EditingMode, TuiEvent, TuiRealmDispatcher, bind_action, defaults, keys,
};
use ratatui::{
    Terminal,
    crossterm::ExecutableCommand,
    crossterm::terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
    prelude::CrosstermBackend,
};

use crate::catalog::GearType;
use crate::config::AppConfig;
use crate::selection::PageDirection;

pub use model::Model;
pub use msg::Msg;

use activity::{ActivityManager, Context};

// ============================================================================
// Event handling (shared across activities)
// ============================================================================

/// Custom user events (currently unused, but required by tui-realm).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd)]
pub enum UserEvent {}

/// Unified application events - wraps TuiEvent + configurator actions.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum AppAction {
    /// Standard TUI events (navigation, input, selection, app)
    Tui(TuiEvent),
    /// Activate the item under the cursor (toggle style / apply swatch)
    Activate,
    /// Open the color editor for the selected style
    OpenEditor,
    /// Return to the style list
    CloseEditor,
    /// Cycle to the next gear type
    NextGear,
    /// Jump to a specific gear type
    Gear(GearType),
    /// Previous palette page
    PalettePrev,
    /// Next palette page
    PaletteNext,
}

/// Global dispatcher instance - shared by all components.
///
/// Configurator keys are bound after the emacs defaults, so they win where
/// both claim a key (space activates instead of toggling).
pub static DISPATCHER: LazyLock<TuiRealmDispatcher<AppAction>> = LazyLock::new(|| {
    let mut config = ActionConfig::new(EditingMode::Emacs);

    for binding in defaults::emacs_defaults().bindings() {
        config.bind(binding.clone().map_action(AppAction::Tui));
    }

    bind_action!(config, AppAction::Activate, keys::SPACE, "Select / apply");
    bind_action!(config, AppAction::OpenEditor, keys::char('e'), "Edit style colors");
    bind_action!(config, AppAction::CloseEditor, keys::char('b'), "Back to styles");
    bind_action!(config, AppAction::NextGear, keys::char('g'), "Next gear type");
    for (key, gear) in ['1', '2', '3'].into_iter().zip(GearType::ALL) {
        let label = match gear {
            GearType::Gloves => "Gloves",
            GearType::Shorts => "Shorts",
            GearType::Boots => "Boots",
        };
        bind_action!(config, AppAction::Gear(gear), keys::char(key), label);
    }
    bind_action!(config, AppAction::PalettePrev, keys::char('['), "Previous palette page");
    bind_action!(config, AppAction::PaletteNext, keys::char(']'), "Next palette page");

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
        AppAction::NextGear => Some(Msg::CycleGear),
        AppAction::Gear(gear) => Some(Msg::SelectGear(*gear)),
        AppAction::OpenEditor => Some(Msg::OpenEditor),
        AppAction::CloseEditor => Some(Msg::CloseEditor),
        AppAction::PalettePrev => Some(Msg::PagePalette(PageDirection::Prev)),
        AppAction::PaletteNext => Some(Msg::PagePalette(PageDirection::Next)),
        _ => None,
    }
}

// ============================================================================
// TUI entry point
// ============================================================================

/// Run the interactive configurator.
pub fn run(config: &AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let model = Model::new(config.start_session());
    let mut manager = ActivityManager::new(Context { model });

    let result = manager.run(&mut terminal);

    // Cleanup terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}
