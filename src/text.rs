//! Text normalization helpers.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::tree::{Document, NodeId};

/// Collect every text fragment within the node's subtree, in document order.
///
/// Yields the node's own text, then for each child its fragments followed by
/// its tail. The tail of `node` itself is outside the subtree and excluded.
#[must_use]
pub fn text_fragments(doc: &Document, node: NodeId) -> Vec<String> {
    // explicit work stack; a tail frame runs after the node's subtree
    enum Frame {
        Enter(NodeId, bool),
        Tail(NodeId),
    }

    let mut fragments = Vec::new();
    let mut stack = vec![Frame::Enter(node, false)];
    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(current, with_tail) => {
                if let Some(text) = doc.text(current) {
                    fragments.push(text.to_string());
                }
                if with_tail {
                    stack.push(Frame::Tail(current));
                }
                for &child in doc.children(current).iter().rev() {
                    stack.push(Frame::Enter(child, true));
                }
            }
            Frame::Tail(current) => {
                if let Some(tail) = doc.tail(current) {
                    fragments.push(tail.to_string());
                }
            }
        }
    }
    fragments
}

/// Concatenate all text content within the node's subtree, collapsing any
/// whitespace run to a single space and trimming the ends.
#[must_use]
pub fn normalize_text(doc: &Document, node: NodeId) -> String {
    let joined = text_fragments(doc, node).join(" ");
    collapse_whitespace(&joined)
}

/// Collapse whitespace runs to single spaces and trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case- and space-insensitive folding used for title/header comparison.
#[must_use]
pub fn fold(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d.%m.%Y",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%B %d, %Y %H:%M",
];

const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S", "%I:%M %p"];

/// Whether a text fragment parses as a calendar date or time.
///
/// Author bylines frequently interleave names with timestamps; fragments
/// that parse here are discarded during author cleanup.
#[must_use]
pub fn looks_like_timestamp(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    if DateTime::parse_from_rfc3339(value).is_ok() || DateTime::parse_from_rfc2822(value).is_ok() {
        return true;
    }
    DATE_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(value, fmt).is_ok())
        || DATETIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(value, fmt).is_ok())
        || TIME_FORMATS
            .iter()
            .any(|fmt| NaiveTime::parse_from_str(value, fmt).is_ok())
}
