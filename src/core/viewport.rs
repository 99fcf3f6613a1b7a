//! Scroll window over the flattened lines.
//!
//! The window survives between render passes.  Each pass either keeps it
//! (the cursor span is already fully visible) or scrolls it just far enough
//! to bring the span back on screen.  Scrolling the minimum amount keeps the
//! view from jumping while the cursor moves inside it.

use std::ops::Range;

/// Outcome of reconciling the window with the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Cursor span was already visible.  The window may still have been
    /// clamped to a new height or line count.
    Kept,
    /// The window moved to bring the cursor span into view.
    Scrolled,
}

/// Half-open line range `[start, end)` currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollWindow {
    start: usize,
    end: usize,
}

impl ScrollWindow {
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Fit the window to `height` rows of `total` lines so that `span` is
    /// fully visible.
    ///
    /// The window is first resized (content or height may have changed since
    /// the last pass), then scrolled only if the span falls outside it.  A
    /// span taller than the window is shown from its first line.
    pub fn reconcile(&mut self, span: Range<usize>, total: usize, height: usize) -> Transition {
        let height = height.min(total);
        let max_start = total - height;

        let prev_start = self.start.min(max_start);
        let span_len = span.end.saturating_sub(span.start);
        let visible = span.start >= prev_start && span.end <= prev_start + height;

        let start = if visible {
            prev_start
        } else if span.start < prev_start || span_len > height {
            span.start
        } else {
            span.end - height
        };

        self.start = start.min(max_start);
        self.end = self.start + height;

        if visible {
            Transition::Kept
        } else {
            tracing::trace!(start = self.start, end = self.end, "scroll window moved");
            Transition::Scrolled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(start: usize, end: usize) -> ScrollWindow {
        ScrollWindow { start, end }
    }

    #[test]
    fn keeps_window_while_cursor_inside() {
        let mut w = window(5, 15);
        assert_eq!(w.reconcile(7..9, 40, 10), Transition::Kept);
        assert_eq!(w.range(), 5..15);
    }

    #[test]
    fn scrolls_down_just_enough() {
        let mut w = window(0, 10);
        assert_eq!(w.reconcile(10..12, 40, 10), Transition::Scrolled);
        assert_eq!(w.range(), 2..12);
    }

    #[test]
    fn scrolls_up_to_span_start() {
        let mut w = window(20, 30);
        assert_eq!(w.reconcile(4..6, 40, 10), Transition::Scrolled);
        assert_eq!(w.range(), 4..14);
    }

    #[test]
    fn span_straddling_bottom_edge_is_pulled_in() {
        let mut w = window(0, 10);
        w.reconcile(8..11, 40, 10);
        assert_eq!(w.range(), 1..11);
    }

    #[test]
    fn tall_span_anchors_on_first_line() {
        let mut w = window(0, 4);
        w.reconcile(10..20, 40, 4);
        assert_eq!(w.range(), 10..14);
    }

    #[test]
    fn clamps_to_total_lines() {
        let mut w = window(30, 40);
        assert_eq!(w.reconcile(0..1, 5, 10), Transition::Kept);
        assert_eq!(w.range(), 0..5);
    }

    #[test]
    fn growing_height_fills_from_the_bottom() {
        let mut w = window(20, 25);
        assert_eq!(w.reconcile(22..23, 30, 20), Transition::Kept);
        assert_eq!(w.range(), 10..30);
    }

    #[test]
    fn zero_height_is_empty() {
        let mut w = window(0, 10);
        w.reconcile(3..4, 10, 0);
        assert!(w.range().is_empty());
    }
}
