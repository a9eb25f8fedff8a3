//! Cover image resolver.
//!
//! Strategies produce candidate URLs in priority order: Open Graph and
//! Twitter Card meta tags (off by default, see `Options::use_meta_images`),
//! then a heuristic that walks backwards from each classifier-approved
//! paragraph collecting the images that precede it. Candidates flow through
//! one lazy stream: each is resolved against the base URL and, when a
//! minimum size is configured, measured via the fetch/decode collaborators.
//! The first candidate that passes wins; later ones are never fetched.

use tracing::debug;
use url::Url;

use crate::classify::{ParagraphClassifier, ParagraphLabel};
use crate::fetch::{Fetcher, ImageDecoder};
use crate::options::Options;
use crate::patterns::{IMAGE_OPENGRAPH_BANNED, IMAGE_URL_BANNED};
use crate::traverse::{depth_first, precedings};
use crate::tree::{Document, NodeId};
use crate::url_utils;

/// Extract an absolute cover image URL, or `None`.
#[must_use]
pub fn extract_cover_image(
    doc: &Document,
    url: &str,
    classifier: &dyn ParagraphClassifier,
    options: &Options,
    fetcher: &dyn Fetcher,
    decoder: &dyn ImageDecoder,
) -> Option<String> {
    let base = Url::parse(url).ok();

    let mut meta_candidates: Vec<String> = Vec::new();
    if options.use_meta_images {
        meta_candidates.extend(og_images(doc));
        meta_candidates.extend(twitter_images(doc));
    }
    // the heuristic runs only if every meta candidate has been rejected
    let heuristic = std::iter::once_with(|| heuristic_images(doc, classifier)).flatten();

    for candidate in meta_candidates.into_iter().chain(heuristic) {
        let resolved = url_utils::resolve(base.as_ref(), &candidate);
        if resolved.is_empty() {
            continue;
        }
        if let Some(min) = &options.min_image_size {
            let Some(bytes) = fetcher.fetch(&resolved) else {
                continue;
            };
            let Some((width, height)) = decoder.dimensions(&bytes) else {
                continue;
            };
            if min.width.is_some_and(|bound| width < bound)
                || min.height.is_some_and(|bound| height < bound)
            {
                continue;
            }
        }
        debug!(image = %resolved, "cover image accepted");
        return Some(resolved);
    }
    None
}

/// `og:image` values, excluding ones too generic to be a cover.
fn og_images(doc: &Document) -> Vec<String> {
    meta_values(doc, "property", "og:image")
        .into_iter()
        .filter(|content| !IMAGE_OPENGRAPH_BANNED.is_match(content))
        .collect()
}

/// `twitter:image` values.
fn twitter_images(doc: &Document) -> Vec<String> {
    meta_values(doc, "name", "twitter:image")
}

fn meta_values(doc: &Document, attr: &str, value: &str) -> Vec<String> {
    let mut found = Vec::new();
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
                found.push(content.to_string());
            }
        }
    }
    found
}

/// Walk backwards from each "good" paragraph collecting `img` sources.
///
/// The walk stops at the previous good paragraph, so the gap between two
/// consecutive good paragraphs is scanned exactly once. Stale locators are
/// skipped. Noise URLs (avatars, icons, ad pixels) are filtered at the end.
fn heuristic_images(doc: &Document, classifier: &dyn ParagraphClassifier) -> Vec<String> {
    let paragraphs = classifier.classify(doc);
    let mut images: Vec<String> = Vec::new();
    let mut previous: Option<NodeId> = None;

    for paragraph in &paragraphs {
        if paragraph.label != ParagraphLabel::Good {
            continue;
        }
        let resolved = doc.resolve(&paragraph.locator);
        let Some(&node) = resolved.first() else {
            continue;
        };
        let boundary = previous;
        for found in precedings(doc, node).stop_at(move |n| boundary == Some(n)) {
            if doc.tag(found) == "img" {
                if let Some(src) = doc.attr(found, "src") {
                    if !src.is_empty() {
                        images.push(src.to_string());
                    }
                }
            }
        }
        previous = Some(node);
    }

    images.retain(|src| !IMAGE_URL_BANNED.is_match(src));
    images
}
