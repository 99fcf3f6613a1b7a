//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

const PURPLE: Color = Color::Rgb(0xbd, 0x93, 0xf9);

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── tree view ──────────────────────────────────────────────
    pub fn connector_style() -> Style {
        Style::default().fg(PURPLE)
    }

    pub fn selected_value_style() -> Style {
        Style::default()
            .bg(PURPLE)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_desc_style() -> Style {
        Style::default().bg(Color::Rgb(0x00, 0x11, 0x00))
    }

    pub fn value_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn desc_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn help_key_style() -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)
    }

    pub fn help_desc_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
