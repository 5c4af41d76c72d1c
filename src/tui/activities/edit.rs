//! Edit activity - per-zone color editing of the selected style.

use std::io::Stdout;
use std::time::Duration;

use color_eyre::eyre::{Result, eyre};
use ratatui::{
    Terminal,
    crossterm::event::{self, Event, KeyCode},
    layout::{Constraint, Direction, Layout},
    prelude::CrosstermBackend,
    style::{Modifier, Style},
    widgets::Paragraph,
};
use tuirealm::{Application, EventListenerCfg, PollStrategy, State, StateValue, Update};

use crate::selection::Modality;
use crate::tui::activity::{Activity, Context, ExitReason};
use crate::tui::components::{
    EDIT_FOOTER, GearNav, Preview, Swatches, ZoneTabs, footer_line, render_help,
};
use crate::tui::{Model, Msg, UserEvent};

/// Component identifiers scoped to EditActivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    Nav,
    Zones,
    Swatches,
    Preview,
}

/// Focusable component IDs in Tab order.
const ALL_FOCUS_IDS: &[Id] = &[Id::Zones, Id::Swatches];

/// Tab focus cycling between the zone tabs and the swatch grid.
pub struct FocusManager {
    current_idx: usize,
}

impl FocusManager {
    pub fn new() -> Self {
        // Start on the swatches so Space applies a color right away
        Self { current_idx: 1 }
    }

    pub fn current_focus(&self) -> Id {
        ALL_FOCUS_IDS
            .get(self.current_idx)
            .copied()
            .unwrap_or(Id::Swatches)
    }

    pub fn focus_next(&mut self) -> Id {
        self.current_idx = (self.current_idx + 1) % ALL_FOCUS_IDS.len();
        self.current_focus()
    }

    pub fn focus_prev(&mut self) -> Id {
        self.current_idx = (self.current_idx + ALL_FOCUS_IDS.len() - 1) % ALL_FOCUS_IDS.len();
        self.current_focus()
    }
}

impl Default for FocusManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Color editor screen.
#[derive(Default)]
pub struct EditActivity {
    app: Option<Application<Id, Msg, UserEvent>>,
    focus: FocusManager,
    context: Option<Context>,
    exit_reason: Option<ExitReason>,
}

impl EditActivity {
    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }

    /// (Re)mount every component from a fresh projection.
    fn mount_components(
        app: &mut Application<Id, Msg, UserEvent>,
        model: &Model,
        focus: Id,
        cursor: usize,
    ) -> Result<()> {
        let view = model.view();
        let editor = view
            .editor
            .ok_or_else(|| eyre!("edit activity mounted outside editing"))?;

        let _ = app.umount(&Id::Nav);
        app.mount(Id::Nav, Box::new(GearNav::new(view.nav)), vec![])?;

        let _ = app.umount(&Id::Zones);
        app.mount(Id::Zones, Box::new(ZoneTabs::new(editor.zone_tabs)), vec![])?;

        let _ = app.umount(&Id::Swatches);
        app.mount(
            Id::Swatches,
            Box::new(Swatches::new(editor.palette, editor.pagination, cursor)),
            vec![],
        )?;

        let _ = app.umount(&Id::Preview);
        app.mount(Id::Preview, Box::new(Preview::new(editor.preview)), vec![])?;

        app.active(&focus)?;
        Ok(())
    }

    fn cursor(app: &Application<Id, Msg, UserEvent>) -> usize {
        match app.state(&Id::Swatches) {
            Ok(State::One(StateValue::Usize(cursor))) => cursor,
            _ => 0,
        }
    }

    fn title(model: &Model) -> String {
        let view = model.view();
        match view.editor {
            Some(editor) => format!(
                " Editing {} / {} ",
                editor.title,
                editor.style_name.unwrap_or_else(|| "-".to_string())
            ),
            None => String::new(),
        }
    }
}

impl Activity for EditActivity {
    fn on_create(&mut self, context: Context) {
        let mut app = Self::create_application();

        if let Err(e) =
            Self::mount_components(&mut app, &context.model, self.focus.current_focus(), 0)
        {
            tracing::error!("Failed to mount components: {}", e);
        }

        self.context = Some(context);
        self.app = Some(app);
    }

    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let (Some(app), Some(context)) = (self.app.as_mut(), self.context.as_mut()) else {
            return Err(eyre!("edit activity drawn before on_create"));
        };
        let model = &mut context.model;
        let title = Self::title(model);

        terminal.draw(|frame| {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Gear tabs
                    Constraint::Length(1), // Title
                    Constraint::Length(3), // Zone tabs
                    Constraint::Min(8),    // Swatches + preview
                    Constraint::Length(1), // Status
                ])
                .split(frame.area());

            app.view(&Id::Nav, frame, rows[0]);
            frame.render_widget(
                Paragraph::new(title.as_str()).style(Style::default().add_modifier(Modifier::BOLD)),
                rows[1],
            );
            app.view(&Id::Zones, frame, rows[2]);

            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(rows[3]);
            app.view(&Id::Swatches, frame, cols[0]);
            app.view(&Id::Preview, frame, cols[1]);

            frame.render_widget(
                Paragraph::new(footer_line(EDIT_FOOTER, model.message.as_deref())),
                rows[4],
            );

            if model.show_help {
                render_help(frame);
            }
        })?;

        // The help modal swallows input until dismissed
        if model.show_help {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
                        model.show_help = false;
                    }
                    _ => {}
                }
            }
            return Ok(());
        }

        let Ok(messages) = app.tick(PollStrategy::Once) else {
            // Timeout is fine, just continue
            return Ok(());
        };
        if messages.is_empty() {
            return Ok(());
        }

        for msg in messages {
            match &msg {
                Msg::FocusNext => {
                    let next = self.focus.focus_next();
                    let _ = app.active(&next);
                }
                Msg::FocusPrev => {
                    let prev = self.focus.focus_prev();
                    let _ = app.active(&prev);
                }
                Msg::Quit => {
                    self.exit_reason = Some(ExitReason::Quit);
                    return Ok(());
                }
                _ => {}
            }
            model.update(Some(msg));
        }

        if let Some(reason) = ExitReason::for_modality(Modality::Editing, model) {
            self.exit_reason = Some(reason);
            return Ok(());
        }

        let cursor = Self::cursor(app);
        Self::mount_components(app, model, self.focus.current_focus(), cursor)?;
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
