//! Content extractor.
//!
//! A strictly ordered pruning pipeline: non-content tags, boilerplate by
//! attribute, boilerplate by classifier, attribute/whitespace cleanup, empty
//! elements, wrapper unwrapping, link rewriting, serialization. The order
//! matters: the classifier must see the structure its locators were keyed
//! against, before attributes are stripped and text is trimmed.
//!
//! This is the one resolver that mutates its input tree; it must run after
//! any other resolver that still needs the original structure.

use tracing::debug;
use url::Url;

use crate::classify::{ParagraphClassifier, ParagraphLabel};
use crate::patterns::{attr_matches, BOILERPLATE_ATTR, CONTENT_ATTR};
use crate::text::normalize_text;
use crate::traverse::depth_first;
use crate::tree::{Document, NodeId};
use crate::url_utils;

const CLASS_ID: &[&str] = &["class", "id"];

/// Tags that never contain readable content.
const NON_CONTENT_TAGS: &[&str] = &[
    "head", "link", "style", "script", "noscript", "meta", "iframe", "header", "footer",
];

/// Attributes stripped from surviving elements.
const PRESENTATION_ATTRS: &[&str] = &["id", "style", "class", "height", "width"];

/// Extract the main readable content as pretty-printed markup, or `None`
/// when nothing with text or an image survives pruning.
pub fn extract_content(
    doc: &mut Document,
    url: &str,
    classifier: &dyn ParagraphClassifier,
) -> Option<String> {
    remove_non_content(doc);
    remove_bad_by_attrs(doc);
    remove_bad_by_classifier(doc, classifier);

    clean(doc);

    remove_empty_elements(doc);
    let root = unwrap_elements(doc);

    rewrite_links(doc, root, url);

    if normalize_text(doc, root).is_empty() && !subtree_has_image(doc, root) {
        debug!("no content survived pruning");
        return None;
    }
    Some(doc.serialize(root))
}

fn subtree_has_image(doc: &Document, node: NodeId) -> bool {
    depth_first(doc, node).any(|n| doc.tag(n) == "img")
}

/// Step 1: drop subtrees that structurally cannot be content.
fn remove_non_content(doc: &mut Document) {
    let doomed: Vec<NodeId> = depth_first(doc, doc.root())
        .filter(|&node| NON_CONTENT_TAGS.contains(&doc.tag(node)))
        .collect();
    for node in doomed {
        doc.drop_tree(node);
    }
}

/// Step 2: drop elements whose class/id marks them as boilerplate, unless
/// the element itself or some descendant carries a content-like class/id.
/// Real articles are regularly nested inside falsely-flagged wrappers.
fn remove_bad_by_attrs(doc: &mut Document) {
    let doomed: Vec<NodeId> = depth_first(doc, doc.root())
        .filter(|&node| {
            attr_matches(&BOILERPLATE_ATTR, doc, node, CLASS_ID)
                && !depth_first(doc, node)
                    .any(|inner| attr_matches(&CONTENT_ATTR, doc, inner, CLASS_ID))
        })
        .collect();
    for node in doomed.into_iter().rev() {
        doc.drop_tree(node);
    }
}

/// Step 3: drop regions the external classifier labeled "bad", unless their
/// locator is contained in some "good" locator. Content nested under a good
/// region must not be pruned by an overlapping bad one.
fn remove_bad_by_classifier(doc: &mut Document, classifier: &dyn ParagraphClassifier) {
    let paragraphs = classifier.classify(doc);
    let mut doomed: Vec<(NodeId, String)> = Vec::new();
    let mut good: Vec<String> = Vec::new();
    for paragraph in &paragraphs {
        match paragraph.label {
            ParagraphLabel::Bad => {
                for node in doc.resolve(&paragraph.locator) {
                    doomed.push((node, paragraph.locator.clone()));
                }
            }
            ParagraphLabel::Good => good.push(paragraph.locator.clone()),
            ParagraphLabel::NearGood => {}
        }
    }
    for (node, locator) in doomed.into_iter().rev() {
        if good.iter().any(|g| g.contains(&locator)) {
            continue;
        }
        doc.drop_tree(node);
    }
}

/// Step 4: strip presentation attributes and trim text/tail runs.
fn clean(doc: &mut Document) {
    let nodes: Vec<NodeId> = depth_first(doc, doc.root()).collect();
    for node in nodes {
        for name in doc.attr_names(node) {
            if PRESENTATION_ATTRS.contains(&name.as_str()) || name.starts_with("data-") {
                doc.remove_attr(node, &name);
            }
        }
        let text = doc.text(node).map(|t| t.trim().to_string());
        if let Some(text) = text {
            doc.set_text(node, if text.is_empty() { None } else { Some(text) });
        }
        let tail = doc.tail(node).map(|t| t.trim().to_string());
        if let Some(tail) = tail {
            doc.set_tail(node, if tail.is_empty() { None } else { Some(tail) });
        }
    }
}

/// Step 5: drop elements with no text anywhere in their subtree, keeping
/// anything that contains an image. Images are content even without text.
fn remove_empty_elements(doc: &mut Document) {
    let doomed: Vec<NodeId> = depth_first(doc, doc.root())
        .filter(|&node| {
            !subtree_has_image(doc, node) && normalize_text(doc, node).is_empty()
        })
        .collect();
    for node in doomed.into_iter().rev() {
        doc.drop_tree(node);
    }
}

/// Step 6: collapse redundant single-child wrapper structure.
///
/// Descends through the `html` root into its first child, then through
/// text-free `body`/`div` wrappers with a single child; a multi-child
/// wrapper gets its children moved into one synthetic `div`. Returns the
/// element the serialized output is rooted at.
fn unwrap_elements(doc: &mut Document) -> NodeId {
    let mut current = doc.root();
    loop {
        let tag = doc.tag(current).to_string();
        if tag == "html" {
            match doc.children(current).first().copied() {
                Some(child) => {
                    current = child;
                    continue;
                }
                None => return current,
            }
        }
        if tag != "body" && tag != "div" {
            return current;
        }
        if doc.text(current).is_some() || doc.tail(current).is_some() {
            return current;
        }
        let children = doc.children(current).to_vec();
        if children.len() == 1 {
            current = children[0];
            continue;
        }
        let wrapper = doc.push_element("div");
        for child in children {
            doc.append_child(wrapper, child);
        }
        return wrapper;
    }
}

/// Step 7: resolve every `href`/`src` on `a`/`img` elements against the
/// base URL.
fn rewrite_links(doc: &mut Document, root: NodeId, url: &str) {
    let base = Url::parse(url).ok();
    let links: Vec<NodeId> = depth_first(doc, root)
        .filter(|&node| matches!(doc.tag(node), "a" | "img"))
        .collect();
    for node in links {
        for attr in ["href", "src"] {
            let resolved = doc
                .attr(node, attr)
                .filter(|value| !value.is_empty())
                .map(|value| url_utils::resolve(base.as_ref(), value));
            if let Some(value) = resolved {
                doc.set_attr(node, attr, &value);
            }
        }
    }
}
