//! View projection: pure functions from state to renderable structures.
//!
//! Nothing here mutates or caches; the same inputs always produce equal
//! outputs. Renderers call [`project`] after every transition.

use serde::Serialize;

use crate::catalog::{Catalog, DEFAULT_COLOR, GearType, Hex, PreviewShape};
use crate::selection::{Modality, SelectionState};
use crate::store::{Style, StyleStore};

/// One entry of the gear-type navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GearTab {
    pub gear: GearType,
    pub label: String,
    pub active: bool,
}

/// One tile of the style list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleTile {
    pub id: String,
    pub name: String,
    pub selected: bool,
    /// Style colors in zone order
    pub color_chips: Vec<Hex>,
}

/// Style list for the current gear type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleListView {
    pub gear: GearType,
    pub label: String,
    pub styles: Vec<StyleTile>,
    /// Edit button state: enabled only once a style is selected
    pub can_edit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneTab {
    pub index: usize,
    pub zone_id: String,
    pub label: String,
    pub active: bool,
}

/// A swatch on the current palette page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    /// Position in the full palette
    pub index: usize,
    pub name: String,
    pub color: Hex,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    pub current_page: usize,
    pub total_pages: usize,
    pub can_go_prev: bool,
    pub can_go_next: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewZone {
    pub zone_id: String,
    pub label: String,
    pub color: Hex,
    /// True for the active zone; renderers dim the others
    pub emphasized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewView {
    pub shape: PreviewShape,
    pub zones: Vec<PreviewZone>,
}

/// Everything the editor screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorView {
    pub title: String,
    pub style_name: Option<String>,
    pub zone_tabs: Vec<ZoneTab>,
    pub palette: Vec<Swatch>,
    pub pagination: PaginationView,
    pub preview: PreviewView,
}

/// Complete view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub modality: Modality,
    pub nav: Vec<GearTab>,
    pub styles: StyleListView,
    /// Present only while editing
    pub editor: Option<EditorView>,
}

/// Project the whole view model.
pub fn project(catalog: &Catalog, store: &StyleStore, selection: &SelectionState) -> ViewModel {
    let editor = selection.is_editing().then(|| EditorView {
        title: catalog.gear(selection.current_gear()).label.clone(),
        style_name: selected_style(store, selection).map(|s| s.name.clone()),
        zone_tabs: zone_tabs(catalog, selection),
        palette: palette_grid(catalog, store, selection),
        pagination: pagination(catalog, selection),
        preview: preview(catalog, store, selection),
    });

    ViewModel {
        modality: selection.modality(),
        nav: nav(catalog, selection),
        styles: style_list(catalog, store, selection),
        editor,
    }
}

fn selected_style<'a>(store: &'a StyleStore, selection: &SelectionState) -> Option<&'a Style> {
    let id = selection.current_style()?;
    store.find(selection.current_gear(), id)
}

/// Color of zone `zone_id` on the selected style, or the default.
fn zone_color(store: &StyleStore, selection: &SelectionState, zone_id: &str) -> Hex {
    selected_style(store, selection).map_or(DEFAULT_COLOR, |style| style.color(zone_id))
}

pub fn nav(catalog: &Catalog, selection: &SelectionState) -> Vec<GearTab> {
    GearType::ALL
        .into_iter()
        .map(|gear| GearTab {
            gear,
            label: catalog.gear(gear).label.clone(),
            active: gear == selection.current_gear(),
        })
        .collect()
}

pub fn style_list(
    catalog: &Catalog,
    store: &StyleStore,
    selection: &SelectionState,
) -> StyleListView {
    let gear = selection.current_gear();
    let zones = catalog.zones(gear);
    let selected = selection.current_style();

    let styles: Vec<StyleTile> = store
        .styles(gear)
        .iter()
        .map(|style| StyleTile {
            id: style.id.clone(),
            name: style.name.clone(),
            selected: selected == Some(style.id.as_str()),
            color_chips: zones.iter().map(|z| style.color(&z.id)).collect(),
        })
        .collect();

    StyleListView {
        gear,
        label: catalog.gear(gear).label.clone(),
        can_edit: styles.iter().any(|tile| tile.selected),
        styles,
    }
}

pub fn zone_tabs(catalog: &Catalog, selection: &SelectionState) -> Vec<ZoneTab> {
    catalog
        .zones(selection.current_gear())
        .iter()
        .enumerate()
        .map(|(index, zone)| ZoneTab {
            index,
            zone_id: zone.id.clone(),
            label: zone.label.clone(),
            active: index == selection.active_zone(),
        })
        .collect()
}

pub fn palette_grid(
    catalog: &Catalog,
    store: &StyleStore,
    selection: &SelectionState,
) -> Vec<Swatch> {
    let current = catalog
        .zone(selection.current_gear(), selection.active_zone())
        .map_or(DEFAULT_COLOR, |zone| zone_color(store, selection, &zone.id));

    catalog
        .page(selection.palette_page())
        .map(|(index, entry)| Swatch {
            index,
            name: entry.name.clone(),
            color: entry.color,
            selected: entry.color == current,
        })
        .collect()
}

pub fn pagination(catalog: &Catalog, selection: &SelectionState) -> PaginationView {
    let total_pages = catalog.total_pages();
    let current_page = selection.palette_page();
    PaginationView {
        current_page,
        total_pages,
        can_go_prev: current_page > 0,
        can_go_next: current_page + 1 < total_pages,
    }
}

pub fn preview(catalog: &Catalog, store: &StyleStore, selection: &SelectionState) -> PreviewView {
    let gear = catalog.gear(selection.current_gear());
    let zones = gear
        .zones
        .iter()
        .enumerate()
        .map(|(index, zone)| PreviewZone {
            zone_id: zone.id.clone(),
            label: zone.label.clone(),
            color: zone_color(store, selection, &zone.id),
            emphasized: index == selection.active_zone(),
        })
        .collect();

    PreviewView {
        shape: gear.preview,
        zones,
    }
}
