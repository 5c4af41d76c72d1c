//! Application model for the TUI.

use tuirealm::Update;

use crate::engine::Session;
use crate::selection::Modality;
use crate::view::ViewModel;

use super::msg::Msg;

/// Application model: the session plus UI-only flags.
pub struct Model {
    pub session: Session,

    // UI state
    pub quit: bool,
    pub show_help: bool,
    pub message: Option<String>,
}

impl Model {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            quit: false,
            show_help: false,
            message: None,
        }
    }

    pub fn modality(&self) -> Modality {
        self.session.modality()
    }

    pub fn view(&self) -> ViewModel {
        self.session.view()
    }
}

impl Update<Msg> for Model {
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        let msg = msg?;

        // Any action clears a stale status message
        self.message = None;

        match msg {
            Msg::Quit => self.quit = true,
            Msg::ShowHelp => self.show_help = true,

            Msg::SelectGear(gear) => self.session.select_gear_type(gear),
            Msg::CycleGear => {
                let next = self.session.selection().current_gear().next();
                self.session.select_gear_type(next);
            }

            Msg::ToggleStyle(id) => self.session.toggle_style_selection(&id),
            Msg::OpenEditor => {
                self.session.open_editor();
                if self.session.modality() == Modality::Browsing {
                    self.message = Some("No styles to edit".to_string());
                }
            }
            Msg::CloseEditor => self.session.close_editor(),

            Msg::SelectZone(index) => self.session.set_active_zone(index),
            Msg::ApplyColor(color) => {
                if let Err(e) = self.session.apply_color(color) {
                    self.message = Some(format!("Error: {e}"));
                }
            }
            Msg::PagePalette(direction) => self.session.page_palette(direction),

            // Handled by the activity
            Msg::FocusNext | Msg::FocusPrev => {}
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GearType, Hex};

    #[test]
    fn cycle_gear_closes_editor() {
        let mut model = Model::new(Session::default());
        model.update(Some(Msg::OpenEditor));
        assert_eq!(model.modality(), Modality::Editing);

        model.update(Some(Msg::CycleGear));
        assert_eq!(model.session.selection().current_gear(), GearType::Shorts);
        assert_eq!(model.modality(), Modality::Browsing);
    }

    #[test]
    fn rejected_color_sets_message() {
        let mut model = Model::new(Session::default());
        model.update(Some(Msg::OpenEditor));
        model.update(Some(Msg::ApplyColor(Hex::new(1, 2, 3))));
        assert!(model.message.as_deref().unwrap_or_default().contains("not in the palette"));
    }

    #[test]
    fn edit_key_inside_editor_keeps_position() {
        let mut model = Model::new(Session::default());
        model.update(Some(Msg::OpenEditor));
        model.update(Some(Msg::SelectZone(2)));
        model.update(Some(Msg::PagePalette(crate::selection::PageDirection::Next)));

        model.update(Some(Msg::OpenEditor));
        assert_eq!(model.session.selection().active_zone(), 2);
        assert_eq!(model.session.selection().palette_page(), 1);
        assert!(model.message.is_none());
    }
}
