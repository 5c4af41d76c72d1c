use std::collections::BTreeSet;

use gearsmith::catalog::{Catalog, GearType, Hex};
use gearsmith::engine::{Action, Session};
use gearsmith::error::ValidationError;
use gearsmith::selection::{Modality, PageDirection, SelectionState};
use gearsmith::store::StyleStore;

fn green() -> Hex {
    Hex::parse("#2E8B57").unwrap()
}

fn editing_session() -> Session {
    let mut session = Session::default();
    session.toggle_style_selection("style-2");
    session.open_editor();
    session
}

#[test]
fn test_start_state() {
    let session = Session::default();
    assert_eq!(session.selection().current_gear(), GearType::Gloves);
    assert_eq!(session.modality(), Modality::Browsing);
    for gear in GearType::ALL {
        assert_eq!(session.selection().selected_style(gear), None);
    }
}

#[test]
fn test_preselect_first_style() {
    let session = Session::start(Catalog::standard(), GearType::Shorts, true);
    assert_eq!(session.selection().current_gear(), GearType::Shorts);
    assert_eq!(session.selection().current_style(), Some("style-1"));
    assert_eq!(session.selection().selected_style(GearType::Gloves), None);
}

#[test]
fn test_toggle_is_idempotent_pairwise() {
    for id in ["style-1", "style-2", "style-3"] {
        let mut session = Session::default();
        session.toggle_style_selection("style-3");
        let before = session.selection().clone();

        session.toggle_style_selection(id);
        session.toggle_style_selection(id);

        assert_eq!(session.selection(), &before, "toggling {id} twice");
    }
}

#[test]
fn test_toggle_replaces_previous_selection() {
    let mut session = Session::default();
    session.toggle_style_selection("style-1");
    session.toggle_style_selection("style-3");
    assert_eq!(session.selection().current_style(), Some("style-3"));
}

#[test]
fn test_toggle_unknown_style_is_noop() {
    let mut session = Session::default();
    session.toggle_style_selection("style-1");
    session.toggle_style_selection("style-99");
    assert_eq!(session.selection().current_style(), Some("style-1"));
}

#[test]
fn test_gear_type_isolation() {
    let mut session = Session::default();
    session.toggle_style_selection("style-2");
    session.select_gear_type(GearType::Shorts);
    assert_eq!(session.selection().current_style(), None);
    session.toggle_style_selection("style-3");

    session.select_gear_type(GearType::Gloves);
    assert_eq!(session.selection().current_style(), Some("style-2"));
    assert_eq!(
        session.selection().selected_style(GearType::Shorts),
        Some("style-3")
    );
}

#[test]
fn test_select_gear_type_closes_editor() {
    let mut session = editing_session();
    assert_eq!(session.modality(), Modality::Editing);

    session.select_gear_type(GearType::Boots);

    assert_eq!(session.selection().current_gear(), GearType::Boots);
    assert_eq!(session.modality(), Modality::Browsing);
    assert_eq!(
        session.selection().selected_style(GearType::Gloves),
        Some("style-2")
    );
}

#[test]
fn test_select_same_gear_is_idempotent() {
    let mut session = Session::default();
    session.toggle_style_selection("style-1");
    let before = session.clone();
    session.select_gear_type(GearType::Gloves);
    assert_eq!(session, before);
}

#[test]
fn test_open_editor_auto_selects_first_style() {
    let mut session = Session::default();
    session.open_editor();
    assert_eq!(session.modality(), Modality::Editing);
    assert_eq!(session.selection().current_style(), Some("style-1"));
}

#[test]
fn test_open_editor_resets_zone_and_page() {
    let mut session = editing_session();
    session.set_active_zone(2);
    session.set_palette_page(1);
    session.close_editor();

    session.open_editor();
    assert_eq!(session.selection().active_zone(), 0);
    assert_eq!(session.selection().palette_page(), 0);
}

#[test]
fn test_open_editor_while_editing_is_noop() {
    let mut session = editing_session();
    session.set_active_zone(2);
    session.set_palette_page(1);
    let before = session.clone();

    session.apply(&Action::OpenEditor).unwrap();

    assert_eq!(session.modality(), Modality::Editing);
    assert_eq!(session.selection().active_zone(), 2);
    assert_eq!(session.selection().palette_page(), 1);
    assert_eq!(session, before);
}

#[test]
fn test_editor_guard_with_empty_style_list() {
    let catalog = Catalog::standard();
    let store = StyleStore::seeded(&catalog).with_styles(GearType::Boots, Vec::new());
    let mut session = Session::new(catalog, store, SelectionState::new(GearType::Boots));

    session.open_editor();

    assert_eq!(session.modality(), Modality::Browsing);
    assert_eq!(session.selection().current_style(), None);
}

#[test]
fn test_close_editor_when_closed_is_noop() {
    let mut session = Session::default();
    let before = session.clone();
    session.close_editor();
    assert_eq!(session, before);
}

#[test]
fn test_set_active_zone_requires_editor() {
    let mut session = Session::default();
    session.set_active_zone(1);
    assert_eq!(session.selection().active_zone(), 0);
}

#[test]
fn test_set_active_zone_out_of_range() {
    let mut session = editing_session();
    session.set_active_zone(1);
    session.set_active_zone(3);
    assert_eq!(session.selection().active_zone(), 1);

    session.apply(&Action::SetActiveZone(-1)).unwrap();
    assert_eq!(session.selection().active_zone(), 1);
}

#[test]
fn test_zone_change_keeps_palette_page() {
    let mut session = editing_session();
    session.set_palette_page(1);
    session.set_active_zone(2);
    assert_eq!(session.selection().palette_page(), 1);
}

#[test]
fn test_pagination_bounds() {
    let mut session = editing_session();
    assert_eq!(session.catalog().total_pages(), 2);

    session.apply(&Action::SetPalettePage(-1)).unwrap();
    assert_eq!(session.selection().palette_page(), 0);
    session.apply(&Action::SetPalettePage(2)).unwrap();
    assert_eq!(session.selection().palette_page(), 0);

    session.page_palette(PageDirection::Prev);
    assert_eq!(session.selection().palette_page(), 0);

    session.page_palette(PageDirection::Next);
    assert_eq!(session.selection().palette_page(), 1);
    session.page_palette(PageDirection::Next);
    assert_eq!(session.selection().palette_page(), 1);
}

#[test]
fn test_apply_color_targets_active_zone() {
    let mut session = editing_session();
    session.set_active_zone(1);
    session.apply_color(green()).unwrap();

    let style = session.selected_style().unwrap();
    assert_eq!(style.color("cuff"), green());
    assert_eq!(style.color("body"), Hex::parse("#2E86C1").unwrap());
}

#[test]
fn test_apply_color_leaves_other_gear_types_alone() {
    let mut session = editing_session();
    session.apply_color(green()).unwrap();

    let shorts = session.store().find(GearType::Shorts, "style-2").unwrap();
    assert_ne!(shorts.color("body"), green());
}

#[test]
fn test_apply_color_rejects_off_palette() {
    let mut session = editing_session();
    let before = session.clone();

    let err = session.apply_color_value("#123456").unwrap_err();
    assert_eq!(
        err,
        ValidationError::OffPalette {
            color: "#123456".to_string()
        }
    );
    assert_eq!(session, before);
}

#[test]
fn test_apply_color_rejects_malformed() {
    let mut session = editing_session();
    let err = session.apply_color_value("2E8B57").unwrap_err();
    assert!(matches!(err, ValidationError::MalformedColor { .. }));
}

#[test]
fn test_apply_color_outside_editor_is_noop() {
    let mut session = Session::default();
    session.toggle_style_selection("style-1");
    let before = session.clone();

    session.apply_color(green()).unwrap();
    assert_eq!(session, before);
}

#[test]
fn test_zone_coverage_invariant() {
    let mut session = Session::default();
    let palette: Vec<Hex> = session.catalog().palette().iter().map(|e| e.color).collect();

    for gear in GearType::ALL {
        session.select_gear_type(gear);
        for style in ["style-1", "style-2", "style-3"] {
            session.toggle_style_selection(style);
            session.open_editor();
            for zone in 0..3 {
                session.set_active_zone(zone);
                for color in &palette {
                    session.apply_color(*color).unwrap();
                }
            }
            session.close_editor();
        }
    }

    for gear in GearType::ALL {
        let expected: BTreeSet<&str> = session
            .catalog()
            .zones(gear)
            .iter()
            .map(|z| z.id.as_str())
            .collect();
        for style in session.store().styles(gear) {
            let actual: BTreeSet<&str> = style.colors().keys().map(String::as_str).collect();
            assert_eq!(actual, expected, "{gear} {}", style.id);
        }
    }
}

#[test]
fn test_recolor_scenario() {
    let mut session = Session::default();

    session.toggle_style_selection("style-2");
    let view = session.view();
    let selected: Vec<(&str, bool)> = view
        .styles
        .styles
        .iter()
        .map(|t| (t.id.as_str(), t.selected))
        .collect();
    assert_eq!(
        selected,
        [("style-1", false), ("style-2", true), ("style-3", false)]
    );

    session.open_editor();
    assert_eq!(session.modality(), Modality::Editing);
    assert_eq!(session.selection().active_zone(), 0);
    assert_eq!(session.selection().palette_page(), 0);
    let editor = session.view().editor.unwrap();
    assert!(editor.zone_tabs[0].active);
    assert_eq!(editor.zone_tabs[0].label, "BODY");

    session.set_active_zone(1);
    let editor = session.view().editor.unwrap();
    assert!(!editor.zone_tabs[0].active);
    assert!(editor.zone_tabs[1].active);
    assert_eq!(editor.zone_tabs[1].label, "CUFF");

    session.apply_color(green()).unwrap();
    let editor = session.view().editor.unwrap();
    assert_eq!(editor.preview.zones[1].color, green());

    session.close_editor();
    let view = session.view();
    assert!(view.editor.is_none());
    let tile = view.styles.styles.iter().find(|t| t.id == "style-2").unwrap();
    assert_eq!(tile.color_chips[1], green());
}

#[test]
fn test_apply_dispatches_every_action() {
    let mut session = Session::default();
    let actions = [
        Action::SelectGear(GearType::Shorts),
        Action::ToggleStyle("style-3".to_string()),
        Action::OpenEditor,
        Action::SetActiveZone(2),
        Action::PagePalette(PageDirection::Next),
        Action::ApplyColor(Hex::parse("#16A085").unwrap()),
        Action::SetPalettePage(0),
    ];
    for action in &actions {
        session.apply(action).unwrap();
    }

    assert_eq!(session.selection().current_gear(), GearType::Shorts);
    assert_eq!(session.selection().palette_page(), 0);
    let style = session.selected_style().unwrap();
    assert_eq!(style.id, "style-3");
    assert_eq!(style.color("stripe"), Hex::parse("#16A085").unwrap());

    session.apply(&Action::CloseEditor).unwrap();
    assert_eq!(session.modality(), Modality::Browsing);
}
