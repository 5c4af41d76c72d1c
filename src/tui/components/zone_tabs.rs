//! Zone tab strip for the editor.

use crossterm_actions::{NavigationEvent, SelectionEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    props::{AttrValue, Attribute, Props},
};

use crate::tui::{AppAction, Msg, UserEvent, dispatcher, handle_global_app_events};
use crate::view::ZoneTab;

/// Tabs for the gear type's zones; Left/Right change the active zone.
pub struct ZoneTabs {
    props: Props,
    tabs: Vec<ZoneTab>,
}

impl ZoneTabs {
    pub fn new(tabs: Vec<ZoneTab>) -> Self {
        Self {
            props: Props::default(),
            tabs,
        }
    }

    fn active(&self) -> usize {
        self.tabs.iter().position(|t| t.active).unwrap_or(0)
    }
}

impl MockComponent for ZoneTabs {
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
            .title(" Zones ")
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut spans = Vec::new();
        for tab in &self.tabs {
            let style = if tab.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(if focused { Color::Cyan } else { Color::Gray })
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            spans.push(Span::styled(format!(" {} ", tab.label), style));
            spans.push(Span::raw("  "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.active()))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        let active = self.active();
        let target = match cmd {
            Cmd::Move(CmdDirection::Left) => active.checked_sub(1),
            Cmd::Move(CmdDirection::Right) => Some(active + 1).filter(|i| *i < self.tabs.len()),
            _ => None,
        };
        match target {
            Some(index) => CmdResult::Changed(State::One(StateValue::Usize(index))),
            None => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for ZoneTabs {
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

        let direction = match action {
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)) => return Some(Msg::FocusNext),
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev)) => return Some(Msg::FocusPrev),
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Left)) => CmdDirection::Left,
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right)) => CmdDirection::Right,
            _ => return None,
        };

        // The session owns the active zone; the tabs are remounted after the update.
        match self.perform(Cmd::Move(direction)) {
            CmdResult::Changed(State::One(StateValue::Usize(index))) => Some(Msg::SelectZone(index)),
            _ => None,
        }
    }
}
