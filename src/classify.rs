//! Boilerplate paragraph classification interface.
//!
//! Classification itself is an external concern (a justext-style main-text
//! classifier); the engine only consumes its output: an ordered sequence of
//! paragraph records whose locators resolve back into the tree. Records are
//! ephemeral, recomputed per extraction call, and never mutated here.

use crate::tree::Document;

/// Classification assigned to a region of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphLabel {
    /// Main readable content.
    Good,
    /// Borderline content adjacent to good regions.
    NearGood,
    /// Boilerplate.
    Bad,
}

/// One classified region of the document.
#[derive(Debug, Clone)]
pub struct Paragraph {
    /// Locator resolvable via [`Document::resolve`]; empty resolution means
    /// the record went stale and is silently skipped.
    pub locator: String,
    pub label: ParagraphLabel,
    /// Extracted text of the region.
    pub text: String,
}

/// External boilerplate classifier consumed by the cover-image heuristic and
/// the content extractor.
pub trait ParagraphClassifier {
    /// Classify the document into an ordered sequence of paragraph records.
    fn classify(&self, doc: &Document) -> Vec<Paragraph>;
}

/// Classifier that reports no paragraphs at all.
///
/// With it the content extractor still prunes by tag and attribute banks,
/// and the cover-image heuristic yields nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClassifier;

impl ParagraphClassifier for NoClassifier {
    fn classify(&self, _doc: &Document) -> Vec<Paragraph> {
        Vec::new()
    }
}

/// Classifier replaying a precomputed sequence of records, for callers that
/// run the real classifier out of band.
#[derive(Debug, Clone, Default)]
pub struct Precomputed {
    paragraphs: Vec<Paragraph>,
}

impl Precomputed {
    #[must_use]
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }
}

impl ParagraphClassifier for Precomputed {
    fn classify(&self, _doc: &Document) -> Vec<Paragraph> {
        self.paragraphs.clone()
    }
}
