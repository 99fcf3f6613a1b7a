//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Tree pane on top, help bar underneath, inside a one-cell margin.
pub struct AppLayout {
    pub tree_area: Rect,
    pub help_area: Rect,
}

impl AppLayout {
    /// `help_height` is zero when the help bar is hidden.
    pub fn from_area(area: Rect, help_height: u16) -> Self {
        let inner = area.inner(Margin {
            horizontal: 1,
            vertical: 1,
        });
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),              // tree pane (takes all remaining space)
                Constraint::Length(help_height), // help bar
            ])
            .split(inner);

        Self {
            tree_area: chunks[0],
            help_area: chunks[1],
        }
    }

    /// Size of the whole padded region, which is what the session is told
    /// about before the help rows are reserved.
    pub fn content_size(area: Rect) -> (usize, usize) {
        let inner = area.inner(Margin {
            horizontal: 1,
            vertical: 1,
        });
        (inner.width as usize, inner.height as usize)
    }
}
