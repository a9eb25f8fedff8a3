//! Author resolver.
//!
//! Four detectors are tried in order, first success wins: itemprop
//! microdata, meta tags, a weighted heuristic scan of the whole tree, and
//! `rel="author"` elements. Whichever detector produces a candidate, the
//! shared cleanup pass decides what (if anything) survives.

use tracing::debug;

use crate::patterns::{
    attr_matches, AUTHOR_CLASS, AUTHOR_CLASS_BANNED, AUTHOR_PHRASE, AUTHOR_PHRASE_BY,
    AUTHOR_SEPARATOR, BY_PREFIX, COMMENT_CLASS, DOMAIN_SUFFIX, LEADING_PUNCTUATION,
};
use crate::text::{looks_like_timestamp, normalize_text, text_fragments};
use crate::traverse::depth_first;
use crate::tree::Document;

const CLASS_ID: &[&str] = &["class", "id"];

/// Maximum normalized text length for a heuristic author candidate; longer
/// runs are sentences, not bylines.
const MAX_CANDIDATE_LEN: usize = 80;

/// Extract the best-guess author from the document, or `None` when no
/// credible signal exists.
#[must_use]
pub fn extract_author(doc: &Document) -> Option<String> {
    if let Some(text) = find_itemprop(doc) {
        debug!(strategy = "itemprop", candidate = %text, "author candidate");
        return clean(&text, None);
    }
    if let Some(text) = find_meta(doc) {
        debug!(strategy = "meta", candidate = %text, "author candidate");
        return clean(&text, None);
    }
    if let Some((text, fragments)) = find_heuristic(doc) {
        debug!(strategy = "heuristic", candidate = %text, "author candidate");
        return clean(&text, Some(&fragments));
    }
    if let Some(text) = find_rel(doc) {
        debug!(strategy = "rel", candidate = %text, "author candidate");
        return clean(&text, None);
    }
    None
}

/// HTML5 microdata: `itemprop="author"`, then `itemprop="creator"`.
fn find_itemprop(doc: &Document) -> Option<String> {
    for prop in ["author", "creator"] {
        for node in depth_first(doc, doc.root()) {
            if doc.attr(node, "itemprop") == Some(prop) {
                let text = normalize_text(doc, node);
                if !text.is_empty() {
                    return Some(text);
                }
            }
        }
    }
    None
}

/// `<meta name="author|blogger|creator|publisher">`, in that priority order.
fn find_meta(doc: &Document) -> Option<String> {
    for name in ["author", "blogger", "creator", "publisher"] {
        for node in depth_first(doc, doc.root()) {
            if doc.tag(node) != "meta" {
                continue;
            }
            if !doc
                .attr(node, "name")
                .is_some_and(|value| value.eq_ignore_ascii_case(name))
            {
                continue;
            }
            let Some(content) = doc.attr(node, "content") else {
                continue;
            };
            // some publishers like to include a domain name here
            if content.is_empty() || DOMAIN_SUFFIX.is_match(content) {
                continue;
            }
            return Some(content.to_string());
        }
    }
    None
}

fn find_rel(doc: &Document) -> Option<String> {
    for node in depth_first(doc, doc.root()) {
        if doc.attr(node, "rel") == Some("author") {
            let text = normalize_text(doc, node);
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

struct Candidate {
    text: String,
    fragments: Vec<String>,
    weight: u32,
}

/// Weighted scan of the whole tree for authorship signals, skipping comment
/// sections outright.
///
/// An element scores +1 for an authorship phrase in its text and +1 for an
/// author-like class/id (unless a banned class/id co-occurs). Accepted
/// candidates live in an ordered accumulator: when a new candidate's text is
/// a substring of an accepted one, the more general entry is evicted and its
/// weight carried over, so a specific descendant wins over a vaguer
/// ancestor. Highest weight wins; ties go to the earliest find.
fn find_heuristic(doc: &Document) -> Option<(String, Vec<String>)> {
    let mut accepted: Vec<Candidate> = Vec::new();

    let walker = depth_first(doc, doc.root())
        .skip(|node| attr_matches(&COMMENT_CLASS, doc, node, CLASS_ID));
    for node in walker {
        let text = normalize_text(doc, node);
        if text.chars().count() > MAX_CANDIDATE_LEN {
            continue;
        }

        let mut weight = 0;
        if AUTHOR_PHRASE.is_match(&text) || AUTHOR_PHRASE_BY.is_match(&text) {
            weight += 1;
        }
        if attr_matches(&AUTHOR_CLASS, doc, node, CLASS_ID)
            && !attr_matches(&AUTHOR_CLASS_BANNED, doc, node, CLASS_ID)
        {
            if text.is_empty() {
                continue;
            }
            weight += 1;
        }
        if weight == 0 {
            continue;
        }

        let mut carried = 0;
        accepted.retain(|previous| {
            if previous.text.contains(&text) {
                carried = carried.max(previous.weight);
                false
            } else {
                true
            }
        });
        accepted.push(Candidate {
            text: text.clone(),
            fragments: text_fragments(doc, node),
            weight: weight.max(carried),
        });
    }

    let mut best: Option<&Candidate> = None;
    for candidate in &accepted {
        if best.is_none_or(|b| candidate.weight > b.weight) {
            best = Some(candidate);
        }
    }
    best.map(|c| (c.text.clone(), c.fragments.clone()))
}

/// Cleanup applied to whichever candidate wins.
///
/// With fragments available, only trimmed fragments longer than one
/// character that are not timestamps survive, rejoined with `" , "`. The
/// working string then loses any leading "...by " lead-in and leading
/// punctuation, is split on the first separator run, and the first plausible
/// part (non-empty, digit-free, containing a letter, not a timestamp) is the
/// answer.
fn clean(author: &str, fragments: Option<&[String]>) -> Option<String> {
    let mut working = author.to_string();
    if let Some(fragments) = fragments {
        let kept: Vec<&str> = fragments
            .iter()
            .map(|fragment| fragment.trim())
            .filter(|fragment| fragment.chars().count() > 1 && !looks_like_timestamp(fragment))
            .collect();
        working = kept.join(" , ");
    }

    working = BY_PREFIX.replace(&working, "").into_owned();
    working = LEADING_PUNCTUATION.replace(&working, "").into_owned();

    let parts: Vec<String> = if AUTHOR_SEPARATOR.is_match(&working) {
        AUTHOR_SEPARATOR
            .split(&working)
            .map(str::to_string)
            .collect()
    } else {
        vec![working]
    };
    best_part(&parts)
}

fn best_part(parts: &[String]) -> Option<String> {
    parts
        .iter()
        .map(|part| part.trim())
        .find(|part| {
            !part.is_empty()
                && !part.chars().any(|c| c.is_ascii_digit())
                && part.chars().any(char::is_alphabetic)
                && !looks_like_timestamp(part)
        })
        .map(str::to_string)
}
