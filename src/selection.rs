//! Selection state: which gear, which style, and where the editor is.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::GearType;

/// The two modes of the configurator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    /// Style list for the current gear type
    #[default]
    Browsing,
    /// Per-zone color editor for the selected style
    Editing,
}

/// Palette paging direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Next,
    Prev,
}

/// Mutable selection state for one session.
///
/// Fields are private so only the engine can move it between states; renderers
/// read through the accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    current_gear: GearType,
    selected: BTreeMap<GearType, Option<String>>,
    modality: Modality,
    active_zone: usize,
    palette_page: usize,
}

impl SelectionState {
    /// Fresh state on `gear`, nothing selected, browsing.
    pub fn new(gear: GearType) -> Self {
        Self {
            current_gear: gear,
            selected: GearType::ALL.into_iter().map(|g| (g, None)).collect(),
            modality: Modality::Browsing,
            active_zone: 0,
            palette_page: 0,
        }
    }

    pub fn current_gear(&self) -> GearType {
        self.current_gear
    }

    /// Selected style id for `gear`, if any.
    pub fn selected_style(&self, gear: GearType) -> Option<&str> {
        self.selected.get(&gear).and_then(|s| s.as_deref())
    }

    /// Selected style id for the current gear type.
    pub fn current_style(&self) -> Option<&str> {
        self.selected_style(self.current_gear)
    }

    pub fn modality(&self) -> Modality {
        self.modality
    }

    pub fn is_editing(&self) -> bool {
        self.modality == Modality::Editing
    }

    pub fn active_zone(&self) -> usize {
        self.active_zone
    }

    pub fn palette_page(&self) -> usize {
        self.palette_page
    }

    pub(crate) fn set_current_gear(&mut self, gear: GearType) {
        self.current_gear = gear;
    }

    pub(crate) fn set_selected(&mut self, gear: GearType, style_id: Option<String>) {
        self.selected.insert(gear, style_id);
    }

    pub(crate) fn set_modality(&mut self, modality: Modality) {
        self.modality = modality;
    }

    pub(crate) fn set_active_zone(&mut self, index: usize) {
        self.active_zone = index;
    }

    pub(crate) fn set_palette_page(&mut self, page: usize) {
        self.palette_page = page;
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(GearType::default())
    }
}
