#![forbid(unsafe_code)]

//! Plain-text previews of node trees.
//!
//! Two renderings, both deterministic:
//!
//! - [`outline`] — one line per node, indented by depth, with selector
//!   bindings, open/checked markers, and inline styles spelled out. This is
//!   the canonical form golden tests checksum.
//! - [`framed`] — the outline fitted into a fixed-width bordered box, the
//!   closest thing to "looking at" the banner without a host UI. Lines are
//!   truncated on grapheme boundaries and measured in display columns, so
//!   wide (CJK) labels do not break the frame.

use crumb_core::{Node, Tag};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Render a node tree as an indented outline, one line per node.
pub fn outline(node: &Node) -> Vec<String> {
    let mut lines = Vec::new();
    outline_into(node, 0, &mut lines);
    lines
}

fn outline_into(node: &Node, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Text(text) => lines.push(format!("{indent}\"{text}\"")),
        Node::Element(element) => {
            let mut line = format!("{indent}{}", element.tag().name());
            if let Some(selector) = element.binding() {
                line.push_str(" #");
                line.push_str(selector.as_str());
            }
            if element.tag() == Tag::Dialog {
                line.push_str(if element.is_open() { " [open]" } else { " [closed]" });
            }
            if element.tag() == Tag::Checkbox {
                line.push_str(if element.is_checked() { " [x]" } else { " [ ]" });
            }
            let style = element.inline_style();
            if !style.is_empty() {
                line.push_str(" {");
                line.push_str(&style.css());
                line.push('}');
            }
            lines.push(line);
            for child in element.children() {
                outline_into(child, depth + 1, lines);
            }
        }
    }
}

/// Render the outline inside a fixed-width box.
///
/// Every returned line occupies exactly `width` display columns.
pub fn framed(node: &Node, width: usize) -> Vec<String> {
    let inner = width.saturating_sub(2);
    let mut out = Vec::new();
    out.push(format!("┌{}┐", "─".repeat(inner)));
    for line in outline(node) {
        out.push(format!("│{}│", pad(&fit(&line, inner), inner)));
    }
    out.push(format!("└{}┘", "─".repeat(inner)));
    out
}

/// Truncate `text` to at most `width` display columns on a grapheme
/// boundary, appending an ellipsis when content was dropped.
pub fn fit(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let budget = width - 1; // room for the ellipsis
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let grapheme_width = UnicodeWidthStr::width(grapheme);
        if used + grapheme_width > budget {
            break;
        }
        out.push_str(grapheme);
        used += grapheme_width;
    }
    out.push('…');
    out
}

fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    let mut out = text.to_string();
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crumb_core::{Element, Selector};

    fn checkbox_row() -> Node {
        Element::new(Tag::Div)
            .child(
                Element::new(Tag::Label).text("Analytics").child(
                    Element::new(Tag::Checkbox)
                        .selector(Selector::indexed("cookie-checkbox", 0))
                        .checked(true),
                ),
            )
            .into_node()
    }

    #[test]
    fn outline_spells_out_bindings_and_markers() {
        assert_eq!(
            outline(&checkbox_row()),
            vec![
                "div".to_string(),
                "  label".to_string(),
                "    \"Analytics\"".to_string(),
                "    checkbox #cookie-checkbox-0 [x]".to_string(),
            ]
        );
    }

    #[test]
    fn closed_dialog_is_marked() {
        let dialog = Element::new(Tag::Dialog).open(false).into_node();
        assert_eq!(outline(&dialog), vec!["dialog [closed]".to_string()]);
    }

    #[test]
    fn framed_lines_all_occupy_the_requested_width() {
        for line in framed(&checkbox_row(), 24) {
            assert_eq!(UnicodeWidthStr::width(line.as_str()), 24, "line {line:?}");
        }
    }

    #[test]
    fn fit_keeps_short_text_intact() {
        assert_eq!(fit("Analytics", 20), "Analytics");
    }

    #[test]
    fn fit_truncates_on_grapheme_boundaries() {
        assert_eq!(fit("Analytics", 5), "Anal…");
        assert_eq!(fit("", 0), "");
        assert_eq!(fit("Analytics", 0), "");
        assert_eq!(fit("Analytics", 1), "…");
    }

    #[test]
    fn fit_measures_wide_glyphs_in_display_columns() {
        // Each CJK glyph is two columns wide.
        assert_eq!(fit("このサイト", 5), "この…");
        assert_eq!(fit("このサイト", 10), "このサイト");
    }
}
