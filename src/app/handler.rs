//! Input handling — maps key and resize events to session commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;

use crate::config::Action;
use crate::core::session::Command;
use crate::ui::layout::AppLayout;

use super::state::AppState;

/// Translate a bound action into the command the session understands.
/// `Quit` is the host's business and has no command.
pub fn command_for(action: Action) -> Option<Command> {
    match action {
        Action::Up => Some(Command::Up),
        Action::Down => Some(Command::Down),
        Action::Left => Some(Command::Left),
        Action::Right => Some(Command::Right),
        Action::ToggleHelp => Some(Command::ToggleHelp),
        Action::Quit => None,
    }
}

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of bindings.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };

    match command_for(action) {
        Some(command) => {
            state.session.apply(command);
            if command == Command::ToggleHelp {
                state.sync_help_rows();
            }
        }
        None => state.should_quit = true,
    }
}

/// The terminal changed size; resize the session to the padded content area.
pub fn handle_resize(state: &mut AppState, width: u16, height: u16) {
    let (width, height) = AppLayout::content_size(Rect::new(0, 0, width, height));
    state.session.apply(Command::Resize { width, height });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::demo;
    use crate::config::AppConfig;
    use crate::core::session::Session;

    fn fresh_state() -> AppState {
        let session = Session::new(demo::lettered(), 40, 12).unwrap();
        AppState::new(session, AppConfig::default())
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn current(state: &AppState) -> String {
        state.session.tree().get(state.session.selected()).label.clone()
    }

    #[test]
    fn arrows_and_vim_keys_navigate() {
        let mut state = fresh_state();
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Char('l'));
        press(&mut state, KeyCode::Char('j'));
        assert_eq!(current(&state), "A12");
        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Char('h'));
        press(&mut state, KeyCode::Up);
        assert_eq!(current(&state), "A");
        assert!(!state.should_quit);
    }

    #[test]
    fn help_toggle_reserves_more_rows() {
        let mut state = fresh_state();
        assert_eq!(state.session.effective_height(), 11);
        press(&mut state, KeyCode::Char('?'));
        assert!(state.session.help_expanded());
        assert_eq!(state.session.effective_height(), 10);
        press(&mut state, KeyCode::Char('?'));
        assert_eq!(state.session.effective_height(), 11);
    }

    #[test]
    fn hidden_help_reserves_nothing() {
        let session = Session::new(demo::lettered(), 40, 12).unwrap();
        let config = AppConfig {
            show_help: false,
            ..AppConfig::default()
        };
        let state = AppState::new(session, config);
        assert_eq!(state.session.effective_height(), 12);
    }

    #[test]
    fn quit_keys() {
        let mut state = fresh_state();
        press(&mut state, KeyCode::Esc);
        assert!(state.should_quit);

        let mut state = fresh_state();
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(state.should_quit);
    }

    #[test]
    fn resize_uses_the_padded_area() {
        let mut state = fresh_state();
        handle_resize(&mut state, 30, 10);
        // 10 rows minus the margin, minus one help row.
        assert_eq!(state.session.effective_height(), 7);
    }
}
