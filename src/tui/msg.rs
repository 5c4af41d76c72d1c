//! Application messages for the TUI.

use crate::catalog::{GearType, Hex};
use crate::selection::PageDirection;

/// All messages components can send, shared by both activities.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // Application control
    Quit,
    ShowHelp,

    // Focus/Navigation
    FocusNext,
    FocusPrev,

    // Gear type
    SelectGear(GearType),
    CycleGear,

    // Style list
    ToggleStyle(String),
    OpenEditor,
    CloseEditor,

    // Editor
    SelectZone(usize),
    ApplyColor(Hex),
    PagePalette(PageDirection),
}
