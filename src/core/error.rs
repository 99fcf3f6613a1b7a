//! Errors raised by the navigation core.

use thiserror::Error;

/// The only failure the widget knows about: a tree with nothing to select.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The root has no children, so the cursor has nowhere to start.
    #[error("tree root `{root}` has no children to select")]
    Empty { root: String },
}
