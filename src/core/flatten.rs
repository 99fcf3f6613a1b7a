//! Flatten a [`Tree`] into indented, word-wrapped display lines.
//!
//! Rows are emitted depth-first in pre-order.  Each node contributes one
//! value line (its label) followed by the wrapped lines of its description.
//! While walking, the line range of the selected node is recorded as the
//! cursor span so the viewport can keep it on screen.

use std::ops::Range;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::tree::{NodeId, Tree};
use super::wrap::wrap;

/// Columns each nesting level adds to the guide prefix.
pub const INDENT_STEP: usize = 4;

/// Default width of the label column, in terminal columns.
pub const DEFAULT_LABEL_WIDTH: usize = 20;

// guides, all one column wide per glyph
const GUIDE_PIPE: &str = " │  ";
const GUIDE_BLANK: &str = "    ";
const TEE: &str = " ├──";
const ELBOW: &str = " └──";
const TEE_HEAVY: &str = " ┣━━";
const ELBOW_HEAVY: &str = " ┗━━";

/// Columns consumed by the guide prefix at display depth `depth`
/// (0 = children of the root, which are drawn flush left).
pub fn indent_cost(depth: usize) -> usize {
    if depth == 0 {
        0
    } else {
        INDENT_STEP * depth + 1
    }
}

// ───────────────────────────────────────── line model ────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Value,
    Description,
}

/// One row of output.  `prefix` holds the connector glyphs, `text` the
/// label or description fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub node: NodeId,
    pub kind: LineKind,
    pub prefix: String,
    pub text: String,
    /// Belongs to the node under the cursor.
    pub selected: bool,
}

/// The whole tree as rows, plus where the cursor's block sits.
#[derive(Debug, Clone)]
pub struct Flattened {
    pub lines: Vec<DisplayLine>,
    pub cursor_span: Range<usize>,
}

// ───────────────────────────────────────── flattening ────────

/// Flatten every node under the root.  `width` is the full pane width; each
/// node's description wraps at `width − indent_cost(depth)`.
pub fn flatten(tree: &Tree, selected: NodeId, width: usize, label_width: usize) -> Flattened {
    let mut walker = Walker {
        tree,
        selected,
        width,
        label_width,
        lines: Vec::new(),
        cursor_span: 0..0,
        guides: String::new(),
    };
    for &child in tree.children_of(tree.root()) {
        walker.visit(child);
    }
    Flattened {
        lines: walker.lines,
        cursor_span: walker.cursor_span,
    }
}

struct Walker<'a> {
    tree: &'a Tree,
    selected: NodeId,
    width: usize,
    label_width: usize,
    lines: Vec<DisplayLine>,
    cursor_span: Range<usize>,
    /// Accumulated ancestor guides for the node being visited.
    guides: String,
}

impl Walker<'_> {
    fn visit(&mut self, id: NodeId) {
        let node = self.tree.get(id);
        let depth = node.depth.saturating_sub(1);
        let last = self.tree.is_last_sibling(id);
        let selected = id == self.selected;

        let (value_prefix, desc_prefix) = if depth == 0 {
            (String::new(), String::new())
        } else {
            let connector = match (selected, last) {
                (true, true) => ELBOW_HEAVY,
                (true, false) => TEE_HEAVY,
                (false, true) => ELBOW,
                (false, false) => TEE,
            };
            let continuation = if last { GUIDE_BLANK } else { GUIDE_PIPE };
            (
                format!("{}{connector} ", self.guides),
                format!("{}{continuation} ", self.guides),
            )
        };

        let available = self.width.saturating_sub(indent_cost(depth));
        let start = self.lines.len();

        self.lines.push(DisplayLine {
            node: id,
            kind: LineKind::Value,
            prefix: value_prefix,
            text: fit_label(&node.label, self.label_width, available),
            selected,
        });
        for text in wrap(&node.description, available) {
            self.lines.push(DisplayLine {
                node: id,
                kind: LineKind::Description,
                prefix: desc_prefix.clone(),
                text,
                selected,
            });
        }

        if selected {
            self.cursor_span = start..self.lines.len();
        }

        let saved = self.guides.len();
        if depth > 0 {
            self.guides.push_str(if last { GUIDE_BLANK } else { GUIDE_PIPE });
        }
        for &child in self.tree.children_of(id) {
            self.visit(child);
        }
        self.guides.truncate(saved);
    }
}

/// Pad `label` to `column` columns, then cut it down to `max` columns.
/// A `max` of zero means there is no room to honour, so nothing is cut.
fn fit_label(label: &str, column: usize, max: usize) -> String {
    let mut out = String::with_capacity(label.len().max(column));
    out.push_str(label);
    let width = label.width();
    if width < column {
        out.extend(std::iter::repeat(' ').take(column - width));
    }
    if max == 0 || out.width() <= max {
        return out;
    }

    let mut cut = String::with_capacity(max);
    let mut used = 0;
    for ch in out.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        cut.push(ch);
    }
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tree::tests::{find, lettered};
    use crate::core::tree::NodeSpec;

    fn values(flat: &Flattened) -> Vec<NodeId> {
        flat.lines
            .iter()
            .filter(|l| l.kind == LineKind::Value)
            .map(|l| l.node)
            .collect()
    }

    #[test]
    fn value_lines_follow_preorder() {
        let tree = lettered();
        let a = find(&tree, "A");
        let flat = flatten(&tree, a, 80, DEFAULT_LABEL_WIDTH);
        assert_eq!(values(&flat), tree.preorder());
        assert_eq!(flat.cursor_span, 0..1);
    }

    #[test]
    fn prefix_width_matches_indent_cost() {
        let tree = lettered();
        let flat = flatten(&tree, find(&tree, "A"), 80, DEFAULT_LABEL_WIDTH);
        for line in &flat.lines {
            let depth = tree.get(line.node).depth - 1;
            assert_eq!(line.prefix.width(), indent_cost(depth), "{line:?}");
        }
    }

    #[test]
    fn connectors_mark_last_sibling_and_cursor() {
        let tree = lettered();
        let a12 = find(&tree, "A12");
        let flat = flatten(&tree, a12, 80, DEFAULT_LABEL_WIDTH);
        let prefix = |label: &str| {
            let id = find(&tree, label);
            flat.lines
                .iter()
                .find(|l| l.node == id)
                .map(|l| l.prefix.clone())
                .unwrap()
        };
        assert_eq!(prefix("A"), "");
        assert_eq!(prefix("A1"), " ├── ");
        assert_eq!(prefix("A11"), " │   ├── ");
        assert_eq!(prefix("A12"), " │   ┣━━ ");
        assert_eq!(prefix("A13"), " │   └── ");
        assert_eq!(prefix("A2"), " └── ");
        assert_eq!(prefix("B1"), " └── ");
    }

    #[test]
    fn descriptions_wrap_and_share_the_cursor_span() {
        let tree = NodeSpec::new("root", "")
            .child(NodeSpec::new("first", "one two three"))
            .child(NodeSpec::new("second", ""))
            .build();
        let first = tree.children_of(tree.root())[0];
        let flat = flatten(&tree, first, 7, 4);

        let texts: Vec<&str> = flat.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["first", "one two", "three", "second"]);
        assert_eq!(flat.cursor_span, 0..3);
        assert!(flat.lines[..3].iter().all(|l| l.selected));
        assert!(!flat.lines[3].selected);
        assert_eq!(flat.lines[1].kind, LineKind::Description);
    }

    #[test]
    fn nested_descriptions_wrap_narrower() {
        let tree = NodeSpec::new("root", "")
            .child(NodeSpec::new("p", "").child(NodeSpec::new("c", "aa bb cc dd")))
            .build();
        let c = find(&tree, "c");
        // 15 columns minus 5 of indentation leaves 10.
        let flat = flatten(&tree, c, 15, 1);
        let desc: Vec<&str> = flat
            .lines
            .iter()
            .filter(|l| l.kind == LineKind::Description)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(desc, ["aa bb cc", "dd"]);
        assert_eq!(flat.cursor_span, 1..4);
    }

    #[test]
    fn narrow_pane_degrades_to_single_line() {
        let tree = NodeSpec::new("root", "")
            .child(NodeSpec::new("p", "").child(NodeSpec::new("c", "no room to wrap")))
            .build();
        let flat = flatten(&tree, find(&tree, "c"), 3, DEFAULT_LABEL_WIDTH);
        let desc: Vec<&str> = flat
            .lines
            .iter()
            .filter(|l| l.kind == LineKind::Description)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(desc, ["no room to wrap"]);
    }

    #[test]
    fn labels_pad_then_truncate() {
        assert_eq!(fit_label("ab", 5, 80), "ab   ");
        assert_eq!(fit_label("abcdef", 3, 80), "abcdef");
        assert_eq!(fit_label("abcdef", 3, 4), "abcd");
        assert_eq!(fit_label("ab", 5, 3), "ab ");
        assert_eq!(fit_label("😂😂", 0, 3), "😂");
        assert_eq!(fit_label("abc", 0, 0), "abc");
    }
}
