//! Host state for the demo binary.
//!
//! All mutable state lives here so that drawing can be a function over
//! `&mut AppState` and event handling a set of small mutations on it.

use crate::config::AppConfig;
use crate::core::session::{Command, Session};
use crate::ui::help::HelpBar;

pub struct AppState {
    /// The widget session: tree, cursor and scroll window.
    pub session: Session,
    /// Keybindings and display settings.
    pub config: AppConfig,
    /// Controls the main event loop.
    pub should_quit: bool,
}

impl AppState {
    pub fn new(session: Session, config: AppConfig) -> Self {
        let mut state = Self {
            session,
            config,
            should_quit: false,
        };
        state.sync_help_rows();
        state
    }

    pub fn help_bar(&self) -> Option<HelpBar<'_>> {
        self.config
            .show_help
            .then(|| HelpBar::new(&self.config, self.session.help_expanded()))
    }

    /// Rows the help bar occupies this frame.
    pub fn help_height(&self) -> u16 {
        self.help_bar().map_or(0, |bar| bar.height())
    }

    /// Tell the session how much of the pane the help bar takes.
    pub fn sync_help_rows(&mut self) {
        let rows = self.help_height() as usize;
        self.session.apply(Command::Reserve(rows));
    }
}
