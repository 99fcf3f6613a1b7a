//! Greedy word wrap measured in terminal columns.

use unicode_width::UnicodeWidthStr;

/// Split `text` into lines no wider than `width` columns.
///
/// Words are packed while `line_width + word_width < width`; the separating
/// space is what brings a full line up to exactly `width`.  A single word
/// wider than `width` gets a line of its own and is never split.
///
/// A text without words yields no lines.  A zero width disables wrapping and
/// yields the trimmed text as-is on one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return Vec::new();
    };

    if width == 0 {
        return vec![text.trim().to_string()];
    }

    let mut lines = Vec::new();
    let mut line = first.to_string();
    let mut line_width = first.width();

    for word in words {
        let word_width = word.width();
        if line_width + word_width < width {
            line.push(' ');
            line.push_str(word);
            line_width += word_width + 1;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
            line_width = word_width;
        }
    }
    lines.push(line);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strictly_less_than_packing() {
        assert_eq!(wrap("one two three", 7), ["one two", "three"]);
    }

    #[test]
    fn no_words_no_lines() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap("   \t ", 10).is_empty());
        assert!(wrap("", 0).is_empty());
    }

    #[test]
    fn zero_width_does_not_wrap() {
        assert_eq!(wrap("a  b   c", 0), ["a  b   c"]);
        assert_eq!(wrap(" \tkeep\tthe  gaps \n", 0), ["keep\tthe  gaps"]);
    }

    #[test]
    fn long_word_gets_its_own_line() {
        assert_eq!(wrap("a incomprehensible b", 5), ["a", "incomprehensible", "b"]);
    }

    #[test]
    fn wide_glyphs_count_double() {
        // "😂" is two columns: 2 + 2 < 6 fits, then 5 + 2 does not.
        assert_eq!(wrap("😂 😂 😂", 6), ["😂 😂", "😂"]);
    }

    fn sentence() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-z]{1,8}", 0..20).prop_map(|w| w.join(" "))
    }

    proptest! {
        #[test]
        fn rejoining_reproduces_words(text in sentence(), extra in 0usize..30) {
            let longest = text.split_whitespace().map(str::len).max().unwrap_or(0);
            let width = longest + extra;
            let lines = wrap(&text, width);
            let rejoined = lines.join(" ");
            prop_assert_eq!(
                rejoined.split_whitespace().collect::<Vec<_>>(),
                text.split_whitespace().collect::<Vec<_>>()
            );
        }

        #[test]
        fn lines_fit_when_words_fit(text in sentence(), extra in 0usize..30) {
            let longest = text.split_whitespace().map(str::len).max().unwrap_or(0);
            let width = (longest + extra).max(1);
            for line in wrap(&text, width) {
                prop_assert!(line.len() <= width, "{line:?} wider than {width}");
            }
        }
    }
}
