//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes a core session and turns its render passes into styled
//! cells.  No layout decisions about the tree happen here.

pub mod help;
pub mod layout;
pub mod theme;
pub mod tree_widget;
