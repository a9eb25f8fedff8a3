//! Compiled regex pattern banks for heuristic matching.
//!
//! A pattern bank is a single case-insensitive regex built by disjoining a
//! fixed list of sub-patterns; it matches when any sub-pattern matches
//! anywhere in the input. All banks are compiled once at startup with
//! `LazyLock` and are read-only thereafter, so unsynchronized concurrent
//! reads from independent extraction calls are safe.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use crate::tree::{Document, NodeId};

/// Build a bank matching any of the given sub-patterns, case-insensitively.
///
/// Sub-patterns are unanchored unless they anchor themselves with `^`/`$`.
#[must_use]
pub fn matches_any(parts: &[&str]) -> Regex {
    let joined = parts
        .iter()
        .map(|p| format!("({p})"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){joined}")).expect("pattern bank")
}

/// Check whether any of the named attributes is present on the node and
/// matches the bank.
#[must_use]
pub fn attr_matches(bank: &Regex, doc: &Document, node: NodeId, attrs: &[&str]) -> bool {
    attrs
        .iter()
        .any(|attr| doc.attr(node, attr).is_some_and(|value| bank.is_match(value)))
}

// =============================================================================
// Author Resolver Patterns
// =============================================================================

/// Class/id names that typically mark an authorship element.
pub static AUTHOR_CLASS: LazyLock<Regex> =
    LazyLock::new(|| matches_any(&["contributor", "author", "writer", "byline", "by$", "signoff"]));

/// Class/id names that disqualify an otherwise author-looking element.
pub static AUTHOR_CLASS_BANNED: LazyLock<Regex> =
    LazyLock::new(|| matches_any(&["date", "photo", "title", "tag"]));

/// Class/id names marking comment sections; their subtrees are skipped
/// outright during the author scan.
pub static COMMENT_CLASS: LazyLock<Regex> =
    LazyLock::new(|| matches_any(&["comment", "discus", "disqus", "pingback"]));

/// Authorship phrases such as "posted by ..." or "written by ...".
pub static AUTHOR_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[^a-z]*(posted|written|published|created)\s?by\s?.+")
        .expect("AUTHOR_PHRASE regex")
});

/// Bare "by ..." prefix, anchored after leading non-letters.
pub static AUTHOR_PHRASE_BY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[^a-z]*by\s?.+").expect("AUTHOR_PHRASE_BY regex"));

/// Short alphabetic suffix resembling a domain TLD; meta author values
/// ending this way are usually stray domain names.
pub static DOMAIN_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.[a-z]{2,4}$").expect("DOMAIN_SUFFIX regex"));

/// Everything through a trailing "by " lead-in, stripped during cleanup.
pub static BY_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^.*by(\s|$)").expect("BY_PREFIX regex"));

/// Leading non-alphanumeric run.
pub static LEADING_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[^a-z0-9]+").expect("LEADING_PUNCTUATION regex"));

/// Separators splitting an author string from trailing location/date noise.
pub static AUTHOR_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)( at )|( on )|[,|]").expect("AUTHOR_SEPARATOR regex"));

// =============================================================================
// Cover Image Resolver Patterns
// =============================================================================

/// Image URLs that are almost never cover material.
pub static IMAGE_URL_BANNED: LazyLock<Regex> =
    LazyLock::new(|| matches_any(&["avatar", r"\.gif", r"\.ico", "logo", "ads"]));

/// Open Graph image values too generic to be a cover.
pub static IMAGE_OPENGRAPH_BANNED: LazyLock<Regex> =
    LazyLock::new(|| matches_any(&["opengraph", "og", "user", "logo"]));

// =============================================================================
// Content Extractor Patterns
// =============================================================================

/// Class/id names marking boilerplate page furniture.
pub static BOILERPLATE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    matches_any(&[
        "combx",
        "comment",
        "com-",
        "contact",
        "foot",
        "footer",
        "footnote",
        "masthead",
        "popup",
        "^media$",
        "meta",
        "outbrain",
        "promo",
        "related",
        "scroll",
        "shoutbox",
        "sponsor",
        "shopping",
        "tags",
        "tool",
        "widget",
        "print",
        "taxonom",
        "discuss",
        "e[-]?mail",
        "share",
        "reply",
        "login",
        "sign",
        "caption",
        "ad-",
        "sidebar",
        "tweet",
        "subscri",
        "buy",
        "header",
        "(^|[-_])date($|[-_])",
    ])
});

/// Class/id names marking likely real content; they rescue elements flagged
/// by [`BOILERPLATE_ATTR`].
pub static CONTENT_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    matches_any(&[
        "article",
        "body",
        "content",
        "entry",
        "hentry",
        "main",
        "page",
        "pagination",
        "post",
        "text",
        "blog",
        "story",
    ])
});

// =============================================================================
// Parsing Patterns
// =============================================================================

/// Charset declaration inside a document head, e.g. `charset="utf-8"`.
pub static CHARSET_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([a-zA-Z0-9_][a-zA-Z0-9._-]*)"#)
        .expect("CHARSET_DECL regex")
});
