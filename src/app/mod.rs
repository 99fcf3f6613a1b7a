//! Demo host — event loop plumbing, input handling and sample trees.

pub mod demo;
pub mod event;
pub mod handler;
pub mod state;
