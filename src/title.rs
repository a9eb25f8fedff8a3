//! Title resolver.
//!
//! Meta-tag and `<title>` strategies produce the raw candidate; header
//! refinement then swaps in a matching `<h1>`-`<h3>` when one looks like the
//! actual headline. Page titles are frequently "Site Name: Real Headline",
//! and a matching, more specific header element is a better signal of the
//! true headline.

use tracing::debug;

use crate::options::Options;
use crate::text::{fold, normalize_text};
use crate::traverse::depth_first;
use crate::tree::Document;

/// Extract the page title, or `None` when no source yields one.
#[must_use]
pub fn extract_title(doc: &Document, options: &Options) -> Option<String> {
    let candidate = find_meta_title(doc, options)
        .or_else(|| find_og_title(doc))
        .or_else(|| find_title_element(doc))?;
    debug!(candidate = %candidate, "title candidate");
    Some(refine(doc, candidate))
}

/// Plain `<meta name="title">`. Off by default (`Options::use_meta_title`):
/// the value is usually a generic site name rather than the headline.
fn find_meta_title(doc: &Document, options: &Options) -> Option<String> {
    if !options.use_meta_title {
        return None;
    }
    meta_content(doc, "name", "title")
}

/// Open Graph `<meta property="og:title">`.
fn find_og_title(doc: &Document) -> Option<String> {
    meta_content(doc, "property", "og:title")
}

fn meta_content(doc: &Document, attr: &str, value: &str) -> Option<String> {
    for node in depth_first(doc, doc.root()) {
        if doc.tag(node) != "meta" {
            continue;
        }
        if !doc
            .attr(node, attr)
            .is_some_and(|v| v.eq_ignore_ascii_case(value))
        {
            continue;
        }
        if let Some(content) = doc.attr(node, "content") {
            if !content.is_empty() {
                return Some(content.to_string());
            }
        }
    }
    None
}

/// `<title>` element text.
fn find_title_element(doc: &Document) -> Option<String> {
    for node in depth_first(doc, doc.root()) {
        if doc.tag(node) == "title" {
            let text = normalize_text(doc, node);
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// Replace the candidate with a matching header element's text when one
/// exists.
///
/// A header qualifies when its folded text is a substring of the folded
/// candidate and its raw text does not already contain the raw candidate.
/// Among qualifying headers the deepest level wins (h3 over h2 over h1);
/// ties go to the earliest header.
fn refine(doc: &Document, candidate: String) -> String {
    let folded_candidate = fold(&candidate);
    let mut best: Option<(String, u8)> = None;
    for node in depth_first(doc, doc.root()) {
        let level = match doc.tag(node) {
            "h1" => 1,
            "h2" => 2,
            "h3" => 3,
            _ => continue,
        };
        let text = normalize_text(doc, node);
        if text.is_empty() || !folded_candidate.contains(&fold(&text)) || text.contains(&candidate)
        {
            continue;
        }
        if best.as_ref().is_none_or(|(_, l)| level > *l) {
            best = Some((text, level));
        }
    }
    best.map_or(candidate, |(text, _)| text)
}
