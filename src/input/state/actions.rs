use crate::config::Action;
use crate::input::events::Key;
use crate::input::PieceType;
use log::debug;

use super::Session;

impl Session {
    /// Processes a key press event.
    ///
    /// Modifier keys only update the modifier state. Every other key is
    /// resolved through the keybinding table and handed to
    /// [`Session::handle_action`].
    pub fn on_key_press(&mut self, key: Key) {
        if self.modifiers.update(key, true) {
            return;
        }

        let Some(key_str) = key.binding_name() else {
            return;
        };

        match self.find_action(&key_str) {
            Some(action) => self.handle_action(action),
            None => debug!("No action bound to '{key_str}'"),
        }
    }

    /// Processes a key release event.
    pub fn on_key_release(&mut self, key: Key) {
        self.modifiers.update(key, false);
    }

    /// Executes a bound action. Actions the current mode does not allow are
    /// ignored by the transition they map to.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::SelectRook => self.select_piece(PieceType::Rook),
            Action::SelectQueen => self.select_piece(PieceType::Queen),
            Action::SelectKnight => self.select_piece(PieceType::Knight),
            Action::CyclePiece => self.cycle_piece(),
            Action::ToggleAnimate => self.toggle_animate(),
            Action::Run => self.request_run(),
            Action::FullReset if self.mode.is_finished() => self.reset_full(),
            Action::FullReset => debug!("Ignoring full reset in {} mode", self.mode.name()),
            Action::PartialReset => self.reset_partial(),
        }
    }
}
