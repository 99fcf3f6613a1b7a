//! Core model – the node arena, cursor moves, flattening and scrolling.
//!
//! Nothing in this module depends on any TUI or rendering crate.  A host
//! drives a [`session::Session`] with commands and draws the lines it returns.

pub mod cursor;
pub mod error;
pub mod flatten;
pub mod session;
pub mod tree;
pub mod viewport;
pub mod wrap;
