//! HTML parsing front door.
//!
//! Parsing proper is delegated to `dom_query` (html5ever underneath); this
//! module converts the parsed HTML5 tree into the crate's arena
//! [`Document`], translating text nodes into the text/tail model. Comments
//! and doctypes are discarded. The heuristic engine never sees `dom_query`
//! types.

use dom_query::NodeRef;

use crate::error::{Error, Result};
use crate::patterns::CHARSET_DECL;
use crate::tree::{Document, NodeId};

/// Parse an HTML string into a document tree.
///
/// The underlying HTML5 parser normalizes malformed input, so the resulting
/// tree always has an `html` root element.
pub fn parse(html: &str) -> Result<Document> {
    let source = dom_query::Document::from(html);
    let selection = source.select("html");
    let Some(root) = selection.nodes().first() else {
        return Err(Error::Parse("document has no root element".to_string()));
    };

    let tag = element_tag(root).unwrap_or_else(|| "html".to_string());
    let mut doc = Document::new(&tag);
    let target = doc.root();
    copy_attributes(root, &mut doc, target);
    convert_children(root, &mut doc, target);
    Ok(doc)
}

/// Parse raw bytes, sniffing the character encoding from any
/// `charset=` declaration in the first kilobyte and defaulting to UTF-8.
/// Undecodable byte sequences become replacement characters, not errors.
pub fn parse_bytes(raw: &[u8]) -> Result<Document> {
    let encoding = detect_charset(raw).unwrap_or(encoding_rs::UTF_8);
    let (html, _, _) = encoding.decode(raw);
    parse(&html)
}

fn detect_charset(raw: &[u8]) -> Option<&'static encoding_rs::Encoding> {
    let head = &raw[..raw.len().min(1024)];
    let probe = String::from_utf8_lossy(head);
    let label = CHARSET_DECL.captures(&probe)?.get(1)?.as_str();
    encoding_rs::Encoding::for_label(label.as_bytes())
}

fn element_tag(node: &NodeRef) -> Option<String> {
    node.node_name().map(|name| name.to_lowercase())
}

fn copy_attributes(node: &NodeRef, doc: &mut Document, target: NodeId) {
    for attr in node.attrs().iter() {
        doc.set_attr(target, &attr.name.local.to_lowercase(), &attr.value);
    }
}

/// Convert the subtree below `node` into the arena, iteratively.
///
/// Each stack entry is an element whose children still need converting.
/// A parent's children are handled in one pass, in document order, so
/// text/tail attachment sees siblings in the right sequence; nesting depth
/// only grows the work stack.
fn convert_children(node: &NodeRef, doc: &mut Document, target: NodeId) {
    let mut stack = convert_level(node, doc, target);
    while let Some((element, parent)) = stack.pop() {
        stack.extend(convert_level(&element, doc, parent));
    }
}

fn convert_level<'a>(
    node: &NodeRef<'a>,
    doc: &mut Document,
    target: NodeId,
) -> Vec<(NodeRef<'a>, NodeId)> {
    let mut pending = Vec::new();
    for child in node.children() {
        if child.is_element() {
            let Some(tag) = element_tag(&child) else {
                continue;
            };
            let element = doc.push_element(&tag);
            doc.append_child(target, element);
            copy_attributes(&child, doc, element);
            pending.push((child, element));
        } else if child.is_text() {
            let text = child.text().to_string();
            if !text.is_empty() {
                attach_text(doc, target, &text);
            }
        }
    }
    pending
}

/// Text before the first child element becomes the parent's text; text after
/// an element becomes that element's tail.
fn attach_text(doc: &mut Document, parent: NodeId, piece: &str) {
    match doc.children(parent).last().copied() {
        Some(last) => {
            let merged = doc.tail(last).unwrap_or_default().to_string() + piece;
            doc.set_tail(last, Some(merged));
        }
        None => {
            let merged = doc.text(parent).unwrap_or_default().to_string() + piece;
            doc.set_text(parent, Some(merged));
        }
    }
}
