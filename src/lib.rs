//! An embeddable tree navigator for the terminal.
//!
//! Build a [`core::tree::Tree`], hand it to a [`core::session::Session`], then
//! feed it navigation commands and draw the [`core::session::RenderPass`] it
//! returns, either yourself or with [`ui::tree_widget::TreeWidget`].

pub mod app;
pub mod config;
pub mod core;
pub mod ui;
