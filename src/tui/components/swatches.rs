//! Palette swatch grid with page indicator.

use crossterm_actions::{NavigationEvent, SelectionEvent, TuiEvent};
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

use super::{key_label, swatch_style};
use crate::tui::{AppAction, Msg, UserEvent, dispatcher, handle_global_app_events};
use crate::view::{PaginationView, Swatch};

/// Swatches per grid row.
const COLUMNS: usize = 4;

/// Grid of the current palette page.
pub struct Swatches {
    props: Props,
    swatches: Vec<Swatch>,
    pagination: PaginationView,
    cursor: usize,
}

impl Swatches {
    pub fn new(swatches: Vec<Swatch>, pagination: PaginationView, cursor: usize) -> Self {
        let cursor = cursor.min(swatches.len().saturating_sub(1));
        Self {
            props: Props::default(),
            swatches,
            pagination,
            cursor,
        }
    }

    fn draw_swatch(&self, frame: &mut Frame, area: Rect, idx: usize, focused: bool) {
        let Some(swatch) = self.swatches.get(idx) else {
            return;
        };

        let style = swatch_style(swatch.color);
        let marker = match (focused && idx == self.cursor, swatch.selected) {
            (true, true) => "▶ ● ",
            (true, false) => "▶ ",
            (false, true) => "● ",
            (false, false) => "",
        };

        let mut lines = vec![Line::from(Span::styled(
            format!("{marker}{}", swatch.name),
            style.add_modifier(Modifier::BOLD),
        ))];
        if area.height >= 2 {
            lines.push(Line::from(Span::styled(swatch.color.to_string(), style)));
        }

        frame.render_widget(Paragraph::new(lines).style(style), area);
    }

    /// `[ ◂  page 1/2  ▸ ]`, with each arrow labelled by its paging key.
    fn pagination_line(&self) -> Line<'static> {
        let arrow = |enabled: bool, text: String| {
            if enabled {
                Span::styled(text, Style::default().fg(Color::Cyan))
            } else {
                Span::styled(text, Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM))
            }
        };
        let prev_key = key_label(&AppAction::PalettePrev).unwrap_or_default();
        let next_key = key_label(&AppAction::PaletteNext).unwrap_or_default();

        Line::from(vec![
            arrow(self.pagination.can_go_prev, format!("{prev_key} ◂  ")),
            Span::raw(format!(
                "page {}/{}",
                self.pagination.current_page + 1,
                self.pagination.total_pages
            )),
            arrow(self.pagination.can_go_next, format!("  ▸ {next_key}")),
        ])
    }

    fn move_cursor(&mut self, direction: CmdDirection) -> bool {
        let len = self.swatches.len();
        if len == 0 {
            return false;
        }
        let next = match direction {
            CmdDirection::Left => self.cursor.saturating_sub(1),
            CmdDirection::Right => (self.cursor + 1).min(len - 1),
            CmdDirection::Up => self.cursor.checked_sub(COLUMNS).unwrap_or(self.cursor),
            CmdDirection::Down => Some(self.cursor + COLUMNS)
                .filter(|i| *i < len)
                .unwrap_or(self.cursor),
        };
        let changed = next != self.cursor;
        self.cursor = next;
        changed
    }
}

impl MockComponent for Swatches {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::default()
            .title(" Palette ")
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(2), Constraint::Length(1)])
            .split(inner);

        let rows = self.swatches.len().div_ceil(COLUMNS).max(1);
        let row_count = u32::try_from(rows).unwrap_or(1);
        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints((0..row_count).map(|_| Constraint::Ratio(1, row_count)))
            .split(sections[0]);

        for (row_idx, row_area) in row_areas.iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Ratio(1, 4),
                    Constraint::Ratio(1, 4),
                    Constraint::Ratio(1, 4),
                    Constraint::Ratio(1, 4),
                ])
                .split(*row_area);

            for (col_idx, col_area) in cols.iter().enumerate() {
                self.draw_swatch(frame, *col_area, row_idx * COLUMNS + col_idx, focused);
            }
        }

        frame.render_widget(
            Paragraph::new(self.pagination_line()).alignment(ratatui::layout::Alignment::Center),
            sections[1],
        );
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
            Cmd::Move(direction) => {
                if self.move_cursor(direction) {
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

impl Component<Msg, UserEvent> for Swatches {
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
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)) => Some(Msg::FocusNext),
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev)) => Some(Msg::FocusPrev),
            AppAction::Tui(TuiEvent::Navigation(nav)) => {
                let direction = match nav {
                    NavigationEvent::Left => CmdDirection::Left,
                    NavigationEvent::Right => CmdDirection::Right,
                    NavigationEvent::Up => CmdDirection::Up,
                    NavigationEvent::Down => CmdDirection::Down,
                    _ => return None,
                };
                self.perform(Cmd::Move(direction));
                None
            }
            AppAction::Activate => match self.perform(Cmd::Submit) {
                CmdResult::Submit(_) => self
                    .swatches
                    .get(self.cursor)
                    .map(|swatch| Msg::ApplyColor(swatch.color)),
                _ => None,
            },
            _ => None,
        }
    }
}
