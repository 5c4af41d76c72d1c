//! Activity-based architecture for the TUI.
//!
//! Each screen in the TUI is an Activity with its own Application instance
//! and component IDs. The ActivityManager orchestrates transitions.

use std::io::Stdout;

use color_eyre::eyre::{Result, eyre};
use ratatui::{Terminal, prelude::CrosstermBackend};

use super::Model;
use super::activities::{BrowseActivity, EditActivity};
use crate::selection::Modality;

/// Shared context passed between activities.
pub struct Context {
    pub model: Model,
}

/// Exit reasons for activity transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum ExitReason {
    Quit,
    SwitchToBrowse,
    SwitchToEdit,
}

impl ExitReason {
    /// Transition needed for the model's modality, if `current` no longer matches it.
    pub fn for_modality(current: Modality, model: &Model) -> Option<Self> {
        match (current, model.modality()) {
            (Modality::Browsing, Modality::Editing) => Some(Self::SwitchToEdit),
            (Modality::Editing, Modality::Browsing) => Some(Self::SwitchToBrowse),
            _ => None,
        }
    }
}

/// Activity lifecycle trait.
///
/// Each activity owns its own tui-realm Application and handles its own events.
pub trait Activity {
    /// Initialize the activity with context from the manager.
    fn on_create(&mut self, context: Context);

    /// Draw the UI and handle one tick of events.
    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()>;

    /// Check if activity wants to exit. Returns Some(reason) to exit, None to continue.
    fn will_umount(&self) -> Option<&ExitReason>;

    /// Clean up and return the context to the manager.
    fn on_destroy(&mut self) -> Option<Context>;
}

/// Activity types available in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityType {
    Browse,
    Edit,
}

impl From<Modality> for ActivityType {
    fn from(modality: Modality) -> Self {
        match modality {
            Modality::Browsing => Self::Browse,
            Modality::Editing => Self::Edit,
        }
    }
}

/// Manages activity lifecycle and transitions.
pub struct ActivityManager {
    context: Option<Context>,
    current: ActivityType,
}

impl ActivityManager {
    pub fn new(context: Context) -> Self {
        let current = ActivityType::from(context.model.modality());
        Self {
            context: Some(context),
            current,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            let mut activity: Box<dyn Activity> = match self.current {
                ActivityType::Browse => Box::<BrowseActivity>::default(),
                ActivityType::Edit => Box::<EditActivity>::default(),
            };

            let context = self
                .context
                .take()
                .ok_or_else(|| eyre!("activity context was not returned"))?;
            activity.on_create(context);

            loop {
                activity.on_draw(terminal)?;

                if let Some(reason) = activity.will_umount() {
                    match reason {
                        ExitReason::Quit => {
                            activity.on_destroy();
                            return Ok(());
                        }
                        ExitReason::SwitchToBrowse => {
                            self.context = activity.on_destroy();
                            self.current = ActivityType::Browse;
                            break;
                        }
                        ExitReason::SwitchToEdit => {
                            self.context = activity.on_destroy();
                            self.current = ActivityType::Edit;
                            break;
                        }
                    }
                }
            }
        }
    }
}
