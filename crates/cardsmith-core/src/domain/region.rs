//! The generated stats region inside a card source buffer.
//!
//! A buffer is viewed as `prefix + block + suffix`, where `block` runs from
//! the indentation before [`STATS_START`] through the end of the first
//! [`STATS_END`] after it. The injector owns `block` and rewrites it
//! wholesale; `prefix` and `suffix` belong to the user.

use std::borrow::Cow;
use std::ops::Range;

/// Opening marker of the generated block.
pub const STATS_START: &str = "// [Stats Applied Start]";
/// Closing marker of the generated block.
pub const STATS_END: &str = "// [Stats Applied End]";
/// Method whose body receives the block when no region exists yet.
pub const SETUP_ANCHOR: &str = "SetupCard";

/// A located marker pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsRegion<'a> {
    text: &'a str,
    block: Range<usize>,
}

impl<'a> StatsRegion<'a> {
    /// Find the first start marker and the first end marker after it.
    pub fn locate(text: &'a str) -> Option<Self> {
        let start = text.find(STATS_START)?;
        let end = start + text[start..].find(STATS_END)? + STATS_END.len();
        Some(Self {
            text,
            block: indent_start(text, start)..end,
        })
    }

    pub fn prefix(&self) -> &'a str {
        &self.text[..self.block.start]
    }

    pub fn block(&self) -> &'a str {
        &self.text[self.block.clone()]
    }

    pub fn suffix(&self) -> &'a str {
        &self.text[self.block.end..]
    }

    /// Byte range of the block within the buffer.
    pub fn range(&self) -> Range<usize> {
        self.block.clone()
    }
}

/// Index of the first horizontal-whitespace byte before `idx` on its line.
fn indent_start(text: &str, idx: usize) -> usize {
    let head = &text[..idx];
    head.trim_end_matches([' ', '\t']).len()
}

/// Remove `range` plus its leading indentation. If that empties the line,
/// the line's newline goes too.
fn cut_line_span(text: &str, range: Range<usize>) -> String {
    let start = indent_start(text, range.start);
    let at_line_start = start == 0 || text[..start].ends_with('\n');
    let mut end = range.end;
    if at_line_start && text[end..].starts_with('\n') {
        end += 1;
    }
    let mut out = String::with_capacity(text.len() - (end - start));
    out.push_str(&text[..start]);
    out.push_str(&text[end..]);
    out
}

/// Remove every complete region and every lone marker from `text`.
pub fn scrub_markers(text: &str) -> Cow<'_, str> {
    if !text.contains(STATS_START) && !text.contains(STATS_END) {
        return Cow::Borrowed(text);
    }

    let mut out = text.to_string();
    loop {
        if let Some(region) = StatsRegion::locate(&out) {
            let range = region.range();
            out = cut_line_span(&out, range);
            continue;
        }
        let lone = [STATS_START, STATS_END]
            .into_iter()
            .find_map(|m| out.find(m).map(|i| i..i + m.len()));
        match lone {
            Some(range) => out = cut_line_span(&out, range),
            None => break,
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_splits_buffer_into_three_parts() {
        let text = "a\n    // [Stats Applied Start]\n    x = 1;\n    // [Stats Applied End]\nb";
        let region = StatsRegion::locate(text).unwrap();
        assert_eq!(region.prefix(), "a\n");
        assert!(region.block().starts_with("    // [Stats Applied Start]"));
        assert!(region.block().ends_with("// [Stats Applied End]"));
        assert_eq!(region.suffix(), "\nb");
    }

    #[test]
    fn locate_keeps_text_before_an_indented_marker() {
        let text = "using System;\nclass A\n{\n            // [Stats Applied Start]\n            // [Stats Applied End]\n}";
        let region = StatsRegion::locate(text).unwrap();
        assert_eq!(region.prefix(), "using System;\nclass A\n{\n");
        assert_eq!(region.range().start, region.prefix().len());
    }

    #[test]
    fn locate_requires_end_after_start() {
        let text = "// [Stats Applied End]\n// [Stats Applied Start]\n";
        assert!(StatsRegion::locate(text).is_none());
        assert!(StatsRegion::locate("no markers").is_none());
    }

    #[test]
    fn locate_is_non_greedy() {
        let text = "// [Stats Applied Start]1// [Stats Applied End]2// [Stats Applied End]";
        let region = StatsRegion::locate(text).unwrap();
        assert_eq!(region.suffix(), "2// [Stats Applied End]");
    }

    #[test]
    fn scrub_removes_lone_marker_lines() {
        let text = "a\n    // [Stats Applied Start]\nb\n";
        assert_eq!(scrub_markers(text), "a\nb\n");
    }

    #[test]
    fn scrub_removes_whole_regions() {
        let text = "a\n  // [Stats Applied Start]\n  x;\n  // [Stats Applied End]\nb";
        assert_eq!(scrub_markers(text), "a\nb");
    }

    #[test]
    fn scrub_leaves_clean_text_borrowed() {
        assert!(matches!(scrub_markers("plain"), Cow::Borrowed("plain")));
    }
}
