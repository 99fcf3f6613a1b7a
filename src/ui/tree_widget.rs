//! Ratatui widget that draws a [`Session`]'s visible rows.
//!
//! The widget is created fresh each frame.  It sizes the session to the area
//! it is given, runs one render pass (which also settles the scroll window)
//! and paints the resulting lines; the session decides what is visible, the
//! widget only styles it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::StatefulWidget,
};

use crate::core::flatten::{DisplayLine, LineKind};
use crate::core::session::{RenderPass, Session};

use super::theme::Theme;

/// Style one display line: purple guides, highlighted text when selected.
pub fn styled_line(line: &DisplayLine) -> Line<'_> {
    let text_style = match (line.kind, line.selected) {
        (LineKind::Value, true) => Theme::selected_value_style(),
        (LineKind::Description, true) => Theme::selected_desc_style(),
        (LineKind::Value, false) => Theme::value_style(),
        (LineKind::Description, false) => Theme::desc_style(),
    };
    Line::from(vec![
        Span::styled(line.prefix.as_str(), Theme::connector_style()),
        Span::styled(line.text.as_str(), text_style),
    ])
}

/// The tree widget itself — created fresh each frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeWidget;

impl TreeWidget {
    pub fn new() -> Self {
        Self
    }

    /// Paint an already computed pass, for hosts that keep the pass around.
    pub fn paint(self, pass: &RenderPass, area: Rect, buf: &mut Buffer) {
        for (i, line) in pass.lines.iter().take(area.height as usize).enumerate() {
            let y = area.y + i as u16;
            buf.set_line(area.x, y, &styled_line(line), area.width);
        }
    }
}

impl StatefulWidget for TreeWidget {
    type State = Session;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        // Scroll against the rows actually painted, not the last Resize.
        state.fit(area.width as usize, area.height as usize);
        let pass = state.render();
        self.paint(&pass, area, buf);
    }
}
