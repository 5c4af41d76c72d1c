//! Stylized gear preview: one colored band per zone.

use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{
    Component, Event, MockComponent, State,
    command::{Cmd, CmdResult},
    props::{AttrValue, Attribute, Props},
};

use super::swatch_style;
use crate::catalog::PreviewShape;
use crate::tui::{Msg, UserEvent};
use crate::view::PreviewView;

/// Read-only preview of the style being edited.
pub struct Preview {
    props: Props,
    view: PreviewView,
}

impl Preview {
    pub fn new(view: PreviewView) -> Self {
        Self {
            props: Props::default(),
            view,
        }
    }
}

fn shape_title(shape: PreviewShape) -> &'static str {
    match shape {
        PreviewShape::Gloves => " Preview: glove ",
        PreviewShape::Shorts => " Preview: shorts ",
        PreviewShape::Boots => " Preview: boot ",
    }
}

impl MockComponent for Preview {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(shape_title(self.view.shape))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.view.zones.is_empty() {
            return;
        }

        let count = u32::try_from(self.view.zones.len()).unwrap_or(u32::MAX);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
            .split(inner);

        for (zone, row) in self.view.zones.iter().zip(rows.iter()) {
            let mut style = swatch_style(zone.color);
            if zone.emphasized {
                style = style.add_modifier(Modifier::BOLD);
            } else {
                style = style.add_modifier(Modifier::DIM);
            }
            let marker = if zone.emphasized { "▶ " } else { "  " };
            let label = Line::from(Span::styled(
                format!("{marker}{}  {}", zone.label, zone.color),
                style,
            ));
            frame.render_widget(Paragraph::new(label).style(style), *row);
        }
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

impl Component<Msg, UserEvent> for Preview {
    fn on(&mut self, _ev: Event<UserEvent>) -> Option<Msg> {
        None
    }
}
