//! Interaction handling: the transition rules of the configurator.
//!
//! A [`Session`] owns the catalog, the style store and the selection state.
//! Every user gesture maps to one method (or one [`Action`]); each either
//! completes or leaves state untouched. Renderers call [`Session::view`]
//! afterwards to obtain a fresh view model.

use tracing::{debug, info, instrument, warn};

use crate::catalog::{Catalog, GearType, Hex};
use crate::error::ValidationError;
use crate::selection::{Modality, PageDirection, SelectionState};
use crate::store::{Style, StyleStore};
use crate::view::{self, ViewModel};

/// A discrete user action.
///
/// Zone and page indices are signed: they come from views or scripts that may
/// be stale, and anything outside the valid range is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectGear(GearType),
    ToggleStyle(String),
    OpenEditor,
    CloseEditor,
    SetActiveZone(i64),
    ApplyColor(Hex),
    SetPalettePage(i64),
    PagePalette(PageDirection),
}

/// All state for one configurator session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    catalog: Catalog,
    store: StyleStore,
    selection: SelectionState,
}

impl Session {
    pub fn new(catalog: Catalog, store: StyleStore, selection: SelectionState) -> Self {
        Self {
            catalog,
            store,
            selection,
        }
    }

    /// Session over the standard catalog and seeded presets, starting on `gear`.
    ///
    /// With `preselect_first_style`, the first style of `gear` starts selected.
    pub fn start(catalog: Catalog, gear: GearType, preselect_first_style: bool) -> Self {
        let store = StyleStore::seeded(&catalog);
        let mut session = Self::new(catalog, store, SelectionState::new(gear));

        if preselect_first_style && let Some(first) = session.first_style_id() {
            session.selection.set_selected(gear, Some(first));
        }

        info!(
            gear = %gear,
            page_size = session.catalog.page_size(),
            preselected = ?session.selection.current_style(),
            "Session started"
        );
        session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &StyleStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn modality(&self) -> Modality {
        self.selection.modality()
    }

    /// Project the current state into a view model.
    pub fn view(&self) -> ViewModel {
        view::project(&self.catalog, &self.store, &self.selection)
    }

    /// The selected style of the current gear type, if any.
    pub fn selected_style(&self) -> Option<&Style> {
        let id = self.selection.current_style()?;
        self.store.find(self.selection.current_gear(), id)
    }

    fn first_style_id(&self) -> Option<String> {
        self.store
            .styles(self.selection.current_gear())
            .first()
            .map(|s| s.id.clone())
    }

    /// Dispatch an [`Action`] to the matching operation.
    pub fn apply(&mut self, action: &Action) -> Result<(), ValidationError> {
        match action {
            Action::SelectGear(gear) => self.select_gear_type(*gear),
            Action::ToggleStyle(id) => self.toggle_style_selection(id),
            Action::OpenEditor => self.open_editor(),
            Action::CloseEditor => self.close_editor(),
            Action::SetActiveZone(index) => match usize::try_from(*index) {
                Ok(index) => self.set_active_zone(index),
                Err(_) => debug!(index, "Ignoring negative zone index"),
            },
            Action::ApplyColor(color) => return self.apply_color(*color),
            Action::SetPalettePage(page) => match usize::try_from(*page) {
                Ok(page) => self.set_palette_page(page),
                Err(_) => debug!(page, "Ignoring negative palette page"),
            },
            Action::PagePalette(direction) => self.page_palette(*direction),
        }
        Ok(())
    }

    /// Switch gear type. An open editor is closed first.
    #[instrument(skip(self))]
    pub fn select_gear_type(&mut self, gear: GearType) {
        if self.selection.is_editing() {
            self.close_editor();
        }
        self.selection.set_current_gear(gear);
    }

    /// Select `style_id`, or deselect it if it is already selected.
    #[instrument(skip(self))]
    pub fn toggle_style_selection(&mut self, style_id: &str) {
        let gear = self.selection.current_gear();
        if !self.store.contains(gear, style_id) {
            debug!(%gear, style_id, "Ignoring unknown style");
            return;
        }

        let next = if self.selection.current_style() == Some(style_id) {
            None
        } else {
            Some(style_id.to_string())
        };
        self.selection.set_selected(gear, next);
    }

    /// Enter the editor for the selected style.
    ///
    /// Falls back to the first style when nothing is selected; stays browsing
    /// when the gear type has no styles at all. Does nothing while already
    /// editing, so the active zone and palette page survive.
    #[instrument(skip(self))]
    pub fn open_editor(&mut self) {
        if self.selection.is_editing() {
            debug!("Editor already open");
            return;
        }

        let gear = self.selection.current_gear();

        if self.selection.current_style().is_none() {
            match self.first_style_id() {
                Some(first) => {
                    debug!(%gear, style_id = %first, "Auto-selecting first style");
                    self.selection.set_selected(gear, Some(first));
                }
                None => {
                    debug!(%gear, "No styles to edit");
                    return;
                }
            }
        }

        self.selection.set_active_zone(0);
        self.selection.set_palette_page(0);
        self.selection.set_modality(Modality::Editing);
        info!(%gear, style_id = ?self.selection.current_style(), "Editor opened");
    }

    /// Leave the editor. Safe to call when already browsing.
    pub fn close_editor(&mut self) {
        if self.selection.is_editing() {
            self.selection.set_modality(Modality::Browsing);
            info!(gear = %self.selection.current_gear(), "Editor closed");
        }
    }

    /// Make zone `index` the target of [`Session::apply_color`].
    ///
    /// The palette page is kept so the same swatches can be compared across zones.
    #[instrument(skip(self))]
    pub fn set_active_zone(&mut self, index: usize) {
        let zones = self.catalog.zone_count(self.selection.current_gear());
        if !self.selection.is_editing() || index >= zones {
            debug!(index, zones, "Ignoring zone change");
            return;
        }
        self.selection.set_active_zone(index);
    }

    /// Recolor the active zone of the selected style.
    ///
    /// Colors outside the palette are rejected before any other check.
    #[instrument(skip(self))]
    pub fn apply_color(&mut self, color: Hex) -> Result<(), ValidationError> {
        if !self.catalog.contains_color(color) {
            warn!(%color, "Rejected off-palette color");
            return Err(ValidationError::OffPalette {
                color: color.to_string(),
            });
        }

        if !self.selection.is_editing() {
            debug!("Ignoring color outside the editor");
            return Ok(());
        }

        let gear = self.selection.current_gear();
        let Some(zone) = self.catalog.zone(gear, self.selection.active_zone()) else {
            debug!(zone = self.selection.active_zone(), "Active zone out of range");
            return Ok(());
        };
        let Some(style_id) = self.selection.current_style() else {
            debug!("No style selected");
            return Ok(());
        };
        let Some(style) = self.store.find_mut(gear, style_id) else {
            debug!(style_id, "Selected style vanished from store");
            return Ok(());
        };

        style.set_color(&zone.id, color);
        debug!(%gear, style_id = %style.id, zone = %zone.id, "Color applied");
        Ok(())
    }

    /// Parse `value` as `#RRGGBB` and apply it.
    pub fn apply_color_value(&mut self, value: &str) -> Result<(), ValidationError> {
        let color = Hex::parse(value)?;
        self.apply_color(color)
    }

    /// Jump to palette page `page`; out-of-range pages are ignored.
    pub fn set_palette_page(&mut self, page: usize) {
        let total = self.catalog.total_pages();
        if page >= total {
            debug!(page, total, "Ignoring palette page");
            return;
        }
        self.selection.set_palette_page(page);
    }

    /// Step one palette page, stopping at either end.
    pub fn page_palette(&mut self, direction: PageDirection) {
        let current = self.selection.palette_page();
        match direction {
            PageDirection::Next => self.set_palette_page(current + 1),
            PageDirection::Prev => {
                if let Some(prev) = current.checked_sub(1) {
                    self.set_palette_page(prev);
                }
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::start(Catalog::standard(), GearType::default(), false)
    }
}
