//! Style tiles for the current gear type.

use crossterm_actions::{NavigationEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    props::{AttrValue, Attribute, Props},
};

use super::swatch_style;
use crate::tui::{AppAction, Msg, UserEvent, dispatcher, handle_global_app_events};
use crate::view::StyleListView;

/// Horizontal list of style tiles with a movable cursor.
pub struct StyleList {
    props: Props,
    view: StyleListView,
    cursor: usize,
}

impl StyleList {
    pub fn new(view: StyleListView, cursor: usize) -> Self {
        let cursor = cursor.min(view.styles.len().saturating_sub(1));
        Self {
            props: Props::default(),
            view,
            cursor,
        }
    }

    fn draw_tile(&self, frame: &mut Frame, area: Rect, idx: usize, focused: bool) {
        let Some(tile) = self.view.styles.get(idx) else {
            return;
        };

        let under_cursor = focused && idx == self.cursor;
        let border_style = match (under_cursor, tile.selected) {
            (true, _) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            (false, true) => Style::default().fg(Color::Yellow),
            (false, false) => Style::default().fg(Color::DarkGray),
        };
        let title = if tile.selected {
            format!(" ✔ {} ", tile.name)
        } else {
            format!(" {} ", tile.name)
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line> = tile
            .color_chips
            .iter()
            .map(|chip| {
                Line::from(vec![
                    Span::styled("      ", swatch_style(*chip)),
                    Span::raw(" "),
                    Span::styled(chip.to_string(), Style::default().fg(Color::Gray)),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn move_cursor(&mut self, forward: bool) -> bool {
        let len = self.view.styles.len();
        if len == 0 {
            return false;
        }
        let next = if forward {
            (self.cursor + 1).min(len - 1)
        } else {
            self.cursor.saturating_sub(1)
        };
        let changed = next != self.cursor;
        self.cursor = next;
        changed
    }
}

impl MockComponent for StyleList {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        let block = Block::default()
            .title(format!(" {} styles ", self.view.label))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.view.styles.is_empty() {
            frame.render_widget(Paragraph::new("No styles for this gear type"), inner);
            return;
        }

        let count = u32::try_from(self.view.styles.len()).unwrap_or(u32::MAX);
        let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(inner);

        for (idx, col) in cols.iter().enumerate() {
            self.draw_tile(frame, *col, idx, focused);
        }
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.cursor))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(CmdDirection::Left) | Cmd::Move(CmdDirection::Up) => {
                if self.move_cursor(false) {
                    CmdResult::Changed(self.state())
                } else {
                    CmdResult::None
                }
            }
            Cmd::Move(CmdDirection::Right) | Cmd::Move(CmdDirection::Down) => {
                if self.move_cursor(true) {
                    CmdResult::Changed(self.state())
                } else {
                    CmdResult::None
                }
            }
            Cmd::Submit => CmdResult::Submit(self.state()),
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for StyleList {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        if !focused {
            return None;
        }

        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            return Some(msg);
        }

        match action {
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Left))
            | AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => {
                self.perform(Cmd::Move(CmdDirection::Left));
                None
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right))
            | AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => {
                self.perform(Cmd::Move(CmdDirection::Right));
                None
            }
            AppAction::Activate => match self.perform(Cmd::Submit) {
                CmdResult::Submit(_) => self
                    .view
                    .styles
                    .get(self.cursor)
                    .map(|tile| Msg::ToggleStyle(tile.id.clone())),
                _ => None,
            },
            _ => None,
        }
    }
}
