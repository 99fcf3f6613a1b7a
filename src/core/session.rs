//! One widget session: the tree, its cursor, and the scroll window.
//!
//! The host feeds decoded [`Command`]s in and asks for a [`RenderPass`] after
//! each one.  Everything is synchronous: a command is fully applied before
//! the next render, and a render is a bounded walk over the tree.

use std::ops::Range;

use super::cursor::Cursor;
use super::error::TreeError;
use super::flatten::{self, DisplayLine, DEFAULT_LABEL_WIDTH};
use super::tree::{NodeId, Tree};
use super::viewport::{ScrollWindow, Transition};

/// Input understood by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    /// New pane size, in columns and rows.
    Resize { width: usize, height: usize },
    /// Flip between short and full help; the overlay itself belongs to the host.
    ToggleHelp,
    /// Rows the host's overlay takes out of the pane height.
    Reserve(usize),
}

/// What a render pass hands back to the host.
#[derive(Debug, Clone)]
pub struct RenderPass {
    /// Visible slice of the flattened tree, top to bottom.
    pub lines: Vec<DisplayLine>,
    pub scroll_start: usize,
    pub scroll_end: usize,
    pub total_lines: usize,
    /// Cursor block, in whole-tree line indices.
    pub cursor_span: Range<usize>,
    pub transition: Transition,
}

#[derive(Debug, Clone)]
pub struct Session {
    tree: Tree,
    cursor: Cursor,
    window: ScrollWindow,
    width: usize,
    height: usize,
    reserved: usize,
    label_width: usize,
    help_expanded: bool,
}

impl Session {
    /// Start a session on `tree`.  Fails when the root has no children.
    pub fn new(tree: Tree, width: usize, height: usize) -> Result<Self, TreeError> {
        let cursor = Cursor::new(&tree)?;
        tracing::debug!(nodes = tree.len(), width, height, "tree session started");
        Ok(Self {
            tree,
            cursor,
            window: ScrollWindow::default(),
            width,
            height,
            reserved: 0,
            label_width: DEFAULT_LABEL_WIDTH,
            help_expanded: false,
        })
    }

    #[must_use]
    pub fn with_label_width(mut self, label_width: usize) -> Self {
        self.label_width = label_width;
        self
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn selected(&self) -> NodeId {
        self.cursor.current
    }

    pub fn window(&self) -> ScrollWindow {
        self.window
    }

    /// Whether the host should show its full help rather than the short one.
    pub fn help_expanded(&self) -> bool {
        self.help_expanded
    }

    /// Rows left for the tree once the host's overlay is accounted for.
    pub fn effective_height(&self) -> usize {
        self.height.saturating_sub(self.reserved)
    }

    pub fn navigate_up(&mut self) -> bool {
        self.cursor.up(&self.tree)
    }

    pub fn navigate_down(&mut self) -> bool {
        self.cursor.down(&self.tree)
    }

    pub fn navigate_left(&mut self) -> bool {
        self.cursor.left(&self.tree)
    }

    pub fn navigate_right(&mut self) -> bool {
        self.cursor.right(&self.tree)
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Size the session to a drawing area that already excludes the
    /// reserved rows, so the effective height equals `rows`.
    pub fn fit(&mut self, width: usize, rows: usize) {
        self.resize(width, rows + self.reserved);
    }

    pub fn reserve(&mut self, rows: usize) {
        self.reserved = rows;
    }

    pub fn toggle_help(&mut self) {
        self.help_expanded = !self.help_expanded;
    }

    /// Apply one command.  Returns `true` when visible state changed.
    pub fn apply(&mut self, command: Command) -> bool {
        let changed = match command {
            Command::Up => self.navigate_up(),
            Command::Down => self.navigate_down(),
            Command::Left => self.navigate_left(),
            Command::Right => self.navigate_right(),
            Command::Resize { width, height } => {
                let changed = (width, height) != (self.width, self.height);
                self.resize(width, height);
                changed
            }
            Command::ToggleHelp => {
                self.toggle_help();
                true
            }
            Command::Reserve(rows) => {
                let changed = rows != self.reserved;
                self.reserve(rows);
                changed
            }
        };
        tracing::debug!(
            ?command,
            changed,
            node = %self.tree.get(self.cursor.current).label,
            index = self.cursor.index,
            "command applied"
        );
        changed
    }

    /// Flatten the tree at the current width and slice out the visible rows.
    pub fn render(&mut self) -> RenderPass {
        let flat = flatten::flatten(&self.tree, self.cursor.current, self.width, self.label_width);
        let total_lines = flat.lines.len();
        let transition =
            self.window
                .reconcile(flat.cursor_span.clone(), total_lines, self.effective_height());

        let range = self.window.range();
        let lines = flat
            .lines
            .into_iter()
            .skip(range.start)
            .take(range.len())
            .collect();

        RenderPass {
            lines,
            scroll_start: range.start,
            scroll_end: range.end,
            total_lines,
            cursor_span: flat.cursor_span,
            transition,
        }
    }
}
