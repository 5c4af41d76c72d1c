use gearsmith::catalog::{GearType, Hex};
use gearsmith::engine::{Action, Session};
use gearsmith::error::ValidationError;
use gearsmith::script::{self, ScriptErrorKind};
use gearsmith::selection::{Modality, PageDirection};

const RECOLOR: &str = r#"
# recolor the cuff of the second glove style
gear gloves
toggle style-2
open
zone 1
color #2E8B57
close
"#;

#[test]
fn test_parse_every_command() {
    let source = "gear BOOTS\ntoggle style-1\nopen\nzone 2\ncolor #c0392b\npage 1\nnext\nprev\nclose\n";
    let actions: Vec<Action> = script::parse(source)
        .unwrap()
        .into_iter()
        .map(|step| step.action)
        .collect();

    assert_eq!(
        actions,
        [
            Action::SelectGear(GearType::Boots),
            Action::ToggleStyle("style-1".to_string()),
            Action::OpenEditor,
            Action::SetActiveZone(2),
            Action::ApplyColor(Hex::new(0xC0, 0x39, 0x2B)),
            Action::SetPalettePage(1),
            Action::PagePalette(PageDirection::Next),
            Action::PagePalette(PageDirection::Prev),
            Action::CloseEditor,
        ]
    );
}

#[test]
fn test_run_recolor_script() {
    let steps = script::parse(RECOLOR).unwrap();
    let mut session = Session::default();
    script::run(&mut session, &steps).unwrap();

    assert_eq!(session.modality(), Modality::Browsing);
    let style = session.store().find(GearType::Gloves, "style-2").unwrap();
    assert_eq!(style.color("cuff"), Hex::parse("#2E8B57").unwrap());
}

#[test]
fn test_parse_errors_carry_line_numbers() {
    let err = script::parse("open\n\nfly away\n").unwrap_err();
    assert_eq!(err.line, 3);
    assert_eq!(err.kind, ScriptErrorKind::UnknownCommand("fly".to_string()));
    assert_eq!(err.to_string(), "line 3: unknown command 'fly'");
}

#[test]
fn test_argument_errors() {
    assert!(matches!(
        script::parse_line("zone"),
        Err(ScriptErrorKind::MissingArgument { command: "zone", .. })
    ));
    assert!(matches!(
        script::parse_line("open now"),
        Err(ScriptErrorKind::ExtraArgument(_))
    ));
    assert!(matches!(
        script::parse_line("page two"),
        Err(ScriptErrorKind::InvalidIndex(_))
    ));
    assert!(matches!(
        script::parse_line("gear helmet"),
        Err(ScriptErrorKind::Gear(_))
    ));
    assert!(matches!(
        script::parse_line("color teal"),
        Err(ScriptErrorKind::Color(ValidationError::MalformedColor { .. }))
    ));
}

#[test]
fn test_run_stops_at_off_palette_color() {
    let steps = script::parse("open\ncolor #123456\nzone 2\n").unwrap();
    let mut session = Session::default();

    let err = script::run(&mut session, &steps).unwrap_err();
    assert_eq!(err.line, 2);
    assert!(matches!(
        err.kind,
        ScriptErrorKind::Color(ValidationError::OffPalette { .. })
    ));
    // The zone change after the rejected line never ran
    assert_eq!(session.selection().active_zone(), 0);
}

#[test]
fn test_out_of_range_steps_are_ignored() {
    let steps = script::parse("open\nzone -1\nzone 9\npage -1\npage 7\n").unwrap();
    let mut session = Session::default();
    script::run(&mut session, &steps).unwrap();

    assert_eq!(session.selection().active_zone(), 0);
    assert_eq!(session.selection().palette_page(), 0);
}
