//! TUI components using tui-realm.

pub mod help;
pub mod nav;
pub mod preview;
pub mod style_list;
pub mod swatches;
pub mod zone_tabs;

use ratatui::style::{Color, Style};

use crate::catalog::Hex;

pub use help::{BROWSE_FOOTER, EDIT_FOOTER, footer_line, key_label, render_help};
pub use nav::GearNav;
pub use preview::Preview;
pub use style_list::StyleList;
pub use swatches::Swatches;
pub use zone_tabs::ZoneTabs;

/// Terminal color for a palette value.
pub fn terminal_color(hex: Hex) -> Color {
    let (r, g, b) = hex.rgb();
    Color::Rgb(r, g, b)
}

/// Filled style with a contrasting text color.
pub fn swatch_style(hex: Hex) -> Style {
    let fg = if hex.luminance() > 128.0 {
        Color::Black
    } else {
        Color::White
    };
    Style::default().bg(terminal_color(hex)).fg(fg)
}
