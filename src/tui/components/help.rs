//! Key hints: the status-line footer and the `?` overlay.
//!
//! Every key shown here is looked up in the dispatcher, so rebinding a key in
//! `tui/mod.rs` is enough to keep the hints honest.

use crossterm_actions::{AppEvent, NavigationEvent, SelectionEvent, TuiEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};

use crate::catalog::GearType;
use crate::tui::{AppAction, dispatcher};

/// One footer entry.
pub enum Hint {
    /// A single action, shown with its first bound key
    Key(AppAction),
    /// Several actions sharing one label, keys joined with `/`
    Keys(&'static [AppAction], &'static str),
}

const GEAR_KEYS: &[AppAction] = &[
    AppAction::Gear(GearType::Gloves),
    AppAction::Gear(GearType::Shorts),
    AppAction::Gear(GearType::Boots),
];

pub const BROWSE_FOOTER: &[Hint] = &[
    Hint::Key(AppAction::Activate),
    Hint::Key(AppAction::OpenEditor),
    Hint::Keys(GEAR_KEYS, "gear"),
    Hint::Key(AppAction::NextGear),
    Hint::Key(AppAction::Tui(TuiEvent::App(AppEvent::Help))),
    Hint::Key(AppAction::Tui(TuiEvent::App(AppEvent::Quit))),
];

/// Palette paging keys live on the swatch grid's page line instead.
pub const EDIT_FOOTER: &[Hint] = &[
    Hint::Key(AppAction::Activate),
    Hint::Key(AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next))),
    Hint::Key(AppAction::CloseEditor),
    Hint::Keys(GEAR_KEYS, "gear"),
    Hint::Key(AppAction::Tui(TuiEvent::App(AppEvent::Help))),
    Hint::Key(AppAction::Tui(TuiEvent::App(AppEvent::Quit))),
];

/// Overlay sections; the first three go left, the rest right.
const SECTIONS: &[(&str, &[AppAction])] = &[
    (
        "Gear",
        &[
            AppAction::Gear(GearType::Gloves),
            AppAction::Gear(GearType::Shorts),
            AppAction::Gear(GearType::Boots),
            AppAction::NextGear,
        ],
    ),
    ("Styles", &[AppAction::Activate, AppAction::OpenEditor]),
    (
        "App",
        &[
            AppAction::Tui(TuiEvent::App(AppEvent::Help)),
            AppAction::Tui(TuiEvent::App(AppEvent::Quit)),
        ],
    ),
    (
        "Editor",
        &[
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)),
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev)),
            AppAction::PalettePrev,
            AppAction::PaletteNext,
            AppAction::CloseEditor,
        ],
    ),
    (
        "Cursor",
        &[
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Left)),
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right)),
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)),
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)),
        ],
    ),
];

const LEFT_SECTIONS: usize = 3;

fn key_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

/// First key bound to `action`, as the terminal would label it.
pub fn key_label(action: &AppAction) -> Option<String> {
    dispatcher()
        .config()
        .bindings_for(action)
        .first()
        .map(|key| key.to_string())
}

/// Status line: `key label` pairs, or `message` in place of them.
pub fn footer_line(hints: &[Hint], message: Option<&str>) -> Line<'static> {
    if let Some(message) = message {
        return Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let entries = dispatcher().config().help_entries();
    let dim = Style::default().add_modifier(Modifier::DIM);
    let mut spans = Vec::new();

    for hint in hints {
        let (keys, label) = match hint {
            Hint::Key(action) => {
                let Some(entry) = entries.get(action) else {
                    continue;
                };
                let Some(key) = entry.keys.first() else {
                    continue;
                };
                let label = entry.description.unwrap_or("").to_lowercase();
                (key.to_string(), label)
            }
            Hint::Keys(actions, label) => {
                let keys: Vec<String> = actions.iter().filter_map(key_label).collect();
                if keys.is_empty() {
                    continue;
                }
                (keys.join("/"), (*label).to_string())
            }
        };

        if !spans.is_empty() {
            spans.push(Span::styled("  ", dim));
        }
        spans.push(Span::styled(keys, key_style()));
        spans.push(Span::styled(format!(" {label}"), dim));
    }

    Line::from(spans)
}

fn section_lines(sections: &[(&str, &[AppAction])]) -> Vec<Line<'static>> {
    let entries = dispatcher().config().help_entries();
    let mut lines = Vec::new();

    for (title, actions) in sections {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            title.to_uppercase(),
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )));

        for action in *actions {
            let Some(entry) = entries.get(action) else {
                continue;
            };
            let keys: Vec<String> = entry.keys.iter().map(|k| k.to_string()).collect();
            lines.push(Line::from(vec![
                Span::styled(format!("{:>12} ", keys.join(" ")), key_style()),
                Span::raw(entry.description.unwrap_or("-").to_string()),
            ]));
        }
    }

    lines
}

/// Draw the key overlay over whatever is on screen.
pub fn render_help(frame: &mut Frame) {
    let (left, right) = SECTIONS.split_at(LEFT_SECTIONS.min(SECTIONS.len()));
    let left = section_lines(left);
    let right = section_lines(right);

    let height = u16::try_from(left.len().max(right.len())).unwrap_or(u16::MAX).saturating_add(4);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(frame.area());
    // Two columns plus borders and padding
    let [area] = Layout::horizontal([Constraint::Length(78)])
        .flex(Flex::Center)
        .areas(area);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Keys ")
        .title_bottom(Line::from(" esc / ? / enter ").right_aligned())
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [left_area, right_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(inner);
    frame.render_widget(Paragraph::new(left), left_area);
    frame.render_widget(Paragraph::new(right), right_area);
}
