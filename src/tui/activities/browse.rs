//! Browse activity - gear navigation and style selection.

use std::io::Stdout;
use std::time::Duration;

use color_eyre::eyre::{Result, eyre};
use ratatui::{
    Terminal,
    crossterm::event::{self, Event, KeyCode},
    layout::{Constraint, Direction, Layout},
    prelude::CrosstermBackend,
    widgets::Paragraph,
};
use tuirealm::{Application, EventListenerCfg, PollStrategy, State, StateValue, Update};

use crate::selection::Modality;
use crate::tui::activity::{Activity, Context, ExitReason};
use crate::tui::components::{BROWSE_FOOTER, GearNav, StyleList, footer_line, render_help};
use crate::tui::{Model, Msg, UserEvent};

/// Component identifiers scoped to BrowseActivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    Nav,
    Styles,
}

/// Style list screen.
#[derive(Default)]
pub struct BrowseActivity {
    app: Option<Application<Id, Msg, UserEvent>>,
    context: Option<Context>,
    exit_reason: Option<ExitReason>,
}

impl BrowseActivity {
    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }

    /// (Re)mount every component from a fresh projection, keeping the list cursor at `cursor`.
    fn mount_components(
        app: &mut Application<Id, Msg, UserEvent>,
        model: &Model,
        cursor: usize,
    ) -> Result<()> {
        let view = model.view();

        let _ = app.umount(&Id::Nav);
        app.mount(Id::Nav, Box::new(GearNav::new(view.nav)), vec![])?;

        let _ = app.umount(&Id::Styles);
        app.mount(
            Id::Styles,
            Box::new(StyleList::new(view.styles, cursor)),
            vec![],
        )?;

        app.active(&Id::Styles)?;
        Ok(())
    }

    fn cursor(app: &Application<Id, Msg, UserEvent>) -> usize {
        match app.state(&Id::Styles) {
            Ok(State::One(StateValue::Usize(cursor))) => cursor,
            _ => 0,
        }
    }
}

impl Activity for BrowseActivity {
    fn on_create(&mut self, context: Context) {
        let mut app = Self::create_application();

        if let Err(e) = Self::mount_components(&mut app, &context.model, 0) {
            tracing::error!("Failed to mount components: {}", e);
        }

        self.context = Some(context);
        self.app = Some(app);
    }

    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let (Some(app), Some(context)) = (self.app.as_mut(), self.context.as_mut()) else {
            return Err(eyre!("browse activity drawn before on_create"));
        };
        let model = &mut context.model;

        terminal.draw(|frame| {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Gear tabs
                    Constraint::Min(6),    // Style tiles
                    Constraint::Length(1), // Status
                ])
                .split(frame.area());

            app.view(&Id::Nav, frame, rows[0]);
            app.view(&Id::Styles, frame, rows[1]);

            frame.render_widget(
                Paragraph::new(footer_line(BROWSE_FOOTER, model.message.as_deref())),
                rows[2],
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
            if matches!(msg, Msg::Quit) {
                self.exit_reason = Some(ExitReason::Quit);
                return Ok(());
            }
            model.update(Some(msg));
        }

        if let Some(reason) = ExitReason::for_modality(Modality::Browsing, model) {
            self.exit_reason = Some(reason);
            return Ok(());
        }

        let cursor = Self::cursor(app);
        Self::mount_components(app, model, cursor)?;
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
