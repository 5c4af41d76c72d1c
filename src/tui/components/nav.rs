//! Gear type navigation bar.

use ratatui::Frame;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tuirealm::{
    Component, Event, MockComponent, State,
    command::{Cmd, CmdResult},
    props::{AttrValue, Attribute, Props},
};

use crate::tui::{Msg, UserEvent};
use crate::view::GearTab;

/// Read-only row of gear tabs; the active one is highlighted.
pub struct GearNav {
    props: Props,
    tabs: Vec<GearTab>,
}

impl GearNav {
    pub fn new(tabs: Vec<GearTab>) -> Self {
        Self {
            props: Props::default(),
            tabs,
        }
    }
}

impl MockComponent for GearNav {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::with_capacity(self.tabs.len() * 2);
        for (idx, tab) in self.tabs.iter().enumerate() {
            let style = if tab.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} {} ", idx + 1, tab.label), style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, UserEvent> for GearNav {
    fn on(&mut self, _ev: Event<UserEvent>) -> Option<Msg> {
        // Read-only component
        None
    }
}
