//! View projection tests.
//!
//! Snapshots cover the hex-free sub-views; color-bearing views are checked by
//! field so the expectations stay readable.

use gearsmith::catalog::{Catalog, DEFAULT_COLOR, GearType, Hex};
use gearsmith::engine::Session;
use gearsmith::selection::{Modality, SelectionState};
use gearsmith::store::StyleStore;
use gearsmith::view;

#[test]
fn test_projection_is_pure() {
    let mut session = Session::default();
    session.toggle_style_selection("style-1");
    session.open_editor();
    session.set_active_zone(2);

    let first = session.view();
    let second = session.view();
    assert_eq!(first, second);

    let catalog = session.catalog();
    let store = session.store();
    let selection = session.selection();
    assert_eq!(
        view::project(catalog, store, selection),
        view::project(catalog, store, selection)
    );
}

#[test]
fn test_nav_marks_current_gear() {
    let session = Session::start(Catalog::standard(), GearType::Shorts, false);
    let nav = view::nav(session.catalog(), session.selection());
    let labels: Vec<(&str, bool)> = nav.iter().map(|t| (t.label.as_str(), t.active)).collect();
    assert_eq!(
        labels,
        [("GLOVES", false), ("SHORTS", true), ("BOOTS", false)]
    );
}

#[test]
fn test_browsing_has_no_editor() {
    let view = Session::default().view();
    assert_eq!(view.modality, Modality::Browsing);
    assert!(view.editor.is_none());
    assert!(!view.styles.can_edit);
    assert_eq!(view.styles.label, "GLOVES");
}

#[test]
fn test_style_chips_follow_zone_order() {
    let view = Session::default().view();
    let tile = &view.styles.styles[0];
    assert_eq!(tile.name, "Style 1");
    assert_eq!(
        tile.color_chips,
        [
            Hex::parse("#C0392B").unwrap(),
            Hex::parse("#1C1C1C").unwrap(),
            Hex::parse("#D2B48C").unwrap(),
        ]
    );
}

#[test]
fn test_can_edit_follows_selection() {
    let mut session = Session::default();
    assert!(!session.view().styles.can_edit);

    session.toggle_style_selection("style-3");
    assert!(session.view().styles.can_edit);

    session.toggle_style_selection("style-3");
    assert!(!session.view().styles.can_edit);

    // Opening the editor auto-selects, which enables the button afterwards
    session.open_editor();
    session.close_editor();
    assert!(session.view().styles.can_edit);
}

#[test]
fn test_empty_style_list_cannot_edit() {
    let catalog = Catalog::standard();
    let store = StyleStore::seeded(&catalog).with_styles(GearType::Gloves, Vec::new());
    let selection = SelectionState::new(GearType::Gloves);

    let list = view::style_list(&catalog, &store, &selection);
    assert!(list.styles.is_empty());
    assert!(!list.can_edit);
}

#[test]
fn test_zone_tabs_snapshot() {
    let mut session = Session::start(Catalog::standard(), GearType::Boots, true);
    session.open_editor();
    session.set_active_zone(1);

    let tabs = view::zone_tabs(session.catalog(), session.selection());
    insta::assert_yaml_snapshot!("boots_zone_tabs", tabs);
}

#[test]
fn test_pagination_snapshot() {
    let mut session = Session::default();
    session.open_editor();
    session.set_palette_page(1);

    let pagination = view::pagination(session.catalog(), session.selection());
    insta::assert_yaml_snapshot!("last_page_pagination", pagination);
}

#[test]
fn test_palette_pages() {
    let mut session = Session::default();
    session.open_editor();

    let first = view::palette_grid(session.catalog(), session.store(), session.selection());
    assert_eq!(first.len(), 8);
    assert_eq!(first[0].index, 0);
    assert_eq!(first[0].name, "Red");

    session.set_palette_page(1);
    let second = view::palette_grid(session.catalog(), session.store(), session.selection());
    let names: Vec<&str> = second.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Pink", "Purple", "Teal", "Tan"]);
    assert_eq!(second[0].index, 8);
}

#[test]
fn test_swatch_selected_matches_active_zone() {
    let mut session = Session::default();
    session.open_editor();

    let grid = view::palette_grid(session.catalog(), session.store(), session.selection());
    let selected: Vec<&str> = grid
        .iter()
        .filter(|s| s.selected)
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(selected, ["Red"]);

    session.set_active_zone(1);
    let grid = view::palette_grid(session.catalog(), session.store(), session.selection());
    let selected: Vec<&str> = grid
        .iter()
        .filter(|s| s.selected)
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(selected, ["Black"]);
}

#[test]
fn test_no_selection_renders_default_color() {
    let catalog = Catalog::standard();
    let store = StyleStore::seeded(&catalog);
    let selection = SelectionState::new(GearType::Shorts);

    let preview = view::preview(&catalog, &store, &selection);
    assert_eq!(preview.zones.len(), 3);
    assert!(preview.zones.iter().all(|z| z.color == DEFAULT_COLOR));

    // Grey is the default color, so it is the only highlighted swatch
    let grid = view::palette_grid(&catalog, &store, &selection);
    let selected: Vec<&str> = grid
        .iter()
        .filter(|s| s.selected)
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(selected, ["Grey"]);
}

#[test]
fn test_preview_emphasizes_active_zone() {
    let mut session = Session::start(Catalog::standard(), GearType::Boots, false);
    session.open_editor();
    session.set_active_zone(2);

    let editor = session.view().editor.unwrap();
    let emphasized: Vec<&str> = editor
        .preview
        .zones
        .iter()
        .filter(|z| z.emphasized)
        .map(|z| z.zone_id.as_str())
        .collect();
    assert_eq!(emphasized, ["accent"]);
    assert_eq!(editor.title, "BOOTS");
    assert_eq!(editor.style_name.as_deref(), Some("Style 1"));
}

#[test]
fn test_small_pages() {
    let catalog = Catalog::standard().with_page_size(5);
    let store = StyleStore::seeded(&catalog);
    let mut session = Session::new(catalog, store, SelectionState::new(GearType::Gloves));
    session.open_editor();
    session.set_palette_page(2);

    let pagination = view::pagination(session.catalog(), session.selection());
    assert_eq!(pagination.total_pages, 3);
    assert_eq!(pagination.current_page, 2);
    assert!(pagination.can_go_prev);
    assert!(!pagination.can_go_next);

    let grid = view::palette_grid(session.catalog(), session.store(), session.selection());
    assert_eq!(grid.len(), 2);
}
