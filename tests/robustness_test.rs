#![allow(clippy::unwrap_used)]

use extracty::{extract, parse};

const URL: &str = "https://example.com/post";

fn deeply_nested(depth: usize) -> String {
    let mut html = String::from("<html><body>");
    for _ in 0..depth {
        html.push_str("<div>");
    }
    html.push_str("deep text");
    for _ in 0..depth {
        html.push_str("</div>");
    }
    html.push_str("</body></html>");
    html
}

#[test]
fn pathologically_deep_nesting_parses_without_overflowing() {
    let doc = parse(&deeply_nested(4096)).unwrap();
    let serialized = doc.serialize(doc.root());
    assert!(serialized.contains("deep text"));
}

#[test]
fn pathologically_deep_nesting_extracts_end_to_end() {
    let metadata = extract(&deeply_nested(4096), URL).unwrap();
    let content = metadata.content.unwrap();
    assert!(content.contains("deep text"));
}

#[test]
fn huge_flat_documents_extract() {
    let mut html = String::from("<html><body><div class=\"post\">");
    for i in 0..2000 {
        html.push_str(&format!("<p>Paragraph number {i} of the story.</p>"));
    }
    html.push_str("</div></body></html>");
    let metadata = extract(&html, URL).unwrap();
    let content = metadata.content.unwrap();
    assert!(content.contains("Paragraph number 1999 of the story."));
}
