//! Help bar: a one-line key summary, or a fuller grouped listing.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::config::{Action, AppConfig};

use super::theme::Theme;

const SEPARATOR: &str = " • ";

pub struct HelpBar<'a> {
    config: &'a AppConfig,
    full: bool,
}

impl<'a> HelpBar<'a> {
    pub fn new(config: &'a AppConfig, full: bool) -> Self {
        Self { config, full }
    }

    /// Rows each key group occupies, in order.
    fn groups(&self) -> Vec<Vec<Action>> {
        if self.full {
            vec![
                vec![Action::Up, Action::Down, Action::Left, Action::Right],
                vec![Action::ToggleHelp, Action::Quit],
            ]
        } else {
            vec![vec![Action::Up, Action::Down, Action::ToggleHelp, Action::Quit]]
        }
    }

    /// Rows the bar needs; the host reserves these from the tree pane.
    pub fn height(&self) -> u16 {
        self.groups().len() as u16
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        self.groups()
            .into_iter()
            .map(|group| {
                let mut spans = Vec::new();
                for (i, action) in group.into_iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::styled(SEPARATOR, Theme::help_desc_style()));
                    }
                    spans.push(Span::styled(
                        self.config.display_bindings(action),
                        Theme::help_key_style(),
                    ));
                    let label = match (action, self.full) {
                        (Action::ToggleHelp, false) => "more",
                        (Action::ToggleHelp, true) => "close help",
                        _ => action.label(),
                    };
                    spans.push(Span::styled(format!(" {label}"), Theme::help_desc_style()));
                }
                Line::from(spans)
            })
            .collect()
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn short_help_is_one_line() {
        let config = AppConfig::default();
        let bar = HelpBar::new(&config, false);
        assert_eq!(bar.height(), 1);
        assert_eq!(
            plain(&bar.lines()[0]),
            "↑/k up • ↓/j down • ? more • q/Esc quit"
        );
    }

    #[test]
    fn full_help_groups_navigation() {
        let config = AppConfig::default();
        let bar = HelpBar::new(&config, true);
        let lines = bar.lines();
        assert_eq!(bar.height(), 2);
        assert_eq!(
            plain(&lines[0]),
            "↑/k up • ↓/j down • ←/h parent • →/l children"
        );
        assert_eq!(plain(&lines[1]), "? close help • q/Esc quit");
    }
}
