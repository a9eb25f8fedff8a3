//! # extracty
//!
//! Heuristic metadata extraction from messy real-world HTML.
//!
//! Given a page, this library takes its best guess at the author, the title,
//! a representative cover image, and the main readable content, stripping
//! navigation, comment sections, and other boilerplate along the way. Every
//! signal is a heuristic: each resolver tries a sequence of strategies in
//! decreasing order of trustworthiness and reports `None` rather than
//! guessing wildly.
//!
//! ## Quick Start
//!
//! ```rust
//! use extracty::extract;
//!
//! let html = r#"<html><head><title>My Article</title>
//! <meta name="author" content="Jane Doe"></head>
//! <body><div class="post"><p>Main content here.</p></div></body></html>"#;
//!
//! let metadata = extract(html, "https://example.com/post")?;
//! println!("Title: {:?}", metadata.title);
//! println!("Author: {:?}", metadata.author);
//! # Ok::<(), extracty::Error>(())
//! ```
//!
//! ## Collaborators
//!
//! Three concerns are deliberately external and injected through traits on
//! [`Extractor`]: boilerplate paragraph classification
//! ([`ParagraphClassifier`]), network fetching ([`Fetcher`]), and image
//! decoding ([`ImageDecoder`]). The defaults do nothing, which keeps the
//! engine fully offline; wire in real implementations to unlock
//! classifier-driven pruning and minimum-size filtering of cover images.

mod author;
mod content;
mod error;
mod image;
mod options;
mod parse;
mod patterns;
mod result;
mod title;
mod url_utils;

/// Boilerplate paragraph classification interface.
pub mod classify;

/// Network fetch and image decode interfaces.
pub mod fetch;

/// Text normalization and timestamp detection helpers.
pub mod text;

/// Order-defined traversal over the document tree.
pub mod traverse;

/// Arena-based document tree with text/tail model support.
pub mod tree;

// Public API - re-exports
pub use classify::{NoClassifier, Paragraph, ParagraphClassifier, ParagraphLabel, Precomputed};
pub use error::{Error, Result};
pub use fetch::{Fetcher, ImageDecoder, NoDecoder, NoFetcher};
pub use options::{MinImageSize, Options};
pub use parse::{parse, parse_bytes};
pub use result::Metadata;
pub use tree::{Document, NodeId};

/// Extraction engine holding configuration and collaborators.
///
/// For one-off extraction with defaults, the free functions [`extract`] and
/// [`extract_bytes`] are simpler. Build an `Extractor` to reuse a
/// configuration across documents or to inject collaborators.
///
/// # Example
///
/// ```rust
/// use extracty::{Extractor, Options};
///
/// let extractor = Extractor::new().with_options(Options {
///     cover_image: false,
///     ..Options::default()
/// });
/// let metadata = extractor.extract("<p>Hello</p>", "https://example.com/")?;
/// # Ok::<(), extracty::Error>(())
/// ```
pub struct Extractor {
    options: Options,
    classifier: Box<dyn ParagraphClassifier>,
    fetcher: Box<dyn Fetcher>,
    decoder: Box<dyn ImageDecoder>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    /// An extractor with default options and inert collaborators.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: Options::default(),
            classifier: Box::new(NoClassifier),
            fetcher: Box::new(NoFetcher),
            decoder: Box::new(NoDecoder),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: impl ParagraphClassifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    #[must_use]
    pub fn with_fetcher(mut self, fetcher: impl Fetcher + 'static) -> Self {
        self.fetcher = Box::new(fetcher);
        self
    }

    #[must_use]
    pub fn with_decoder(mut self, decoder: impl ImageDecoder + 'static) -> Self {
        self.decoder = Box::new(decoder);
        self
    }

    /// Extract metadata from an HTML string.
    ///
    /// `url` is the address the document was fetched from; relative image
    /// and link URLs are resolved against it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] when the input cannot be turned into a
    /// document tree. A document where nothing is found is not an error;
    /// the corresponding [`Metadata`] fields are simply `None`.
    pub fn extract(&self, html: &str, url: &str) -> Result<Metadata> {
        let doc = parse(html)?;
        Ok(self.extract_document(doc, url))
    }

    /// Extract metadata from raw bytes, sniffing the character encoding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] when the decoded input cannot be turned
    /// into a document tree.
    pub fn extract_bytes(&self, raw: &[u8], url: &str) -> Result<Metadata> {
        let doc = parse_bytes(raw)?;
        Ok(self.extract_document(doc, url))
    }

    /// Run the enabled resolvers over an already-parsed document.
    ///
    /// Author, title, and cover image read the tree as parsed; content
    /// extraction runs last because it prunes the tree in place.
    #[must_use]
    pub fn extract_document(&self, mut doc: Document, url: &str) -> Metadata {
        let mut metadata = Metadata {
            url: url.to_string(),
            ..Metadata::default()
        };
        if self.options.author {
            metadata.author = author::extract_author(&doc);
        }
        if self.options.title {
            metadata.title = title::extract_title(&doc, &self.options);
        }
        if self.options.cover_image {
            metadata.cover_image = image::extract_cover_image(
                &doc,
                url,
                self.classifier.as_ref(),
                &self.options,
                self.fetcher.as_ref(),
                self.decoder.as_ref(),
            );
        }
        if self.options.content {
            metadata.content = content::extract_content(&mut doc, url, self.classifier.as_ref());
        }
        metadata
    }
}

/// Extract metadata from an HTML document using default options.
///
/// # Errors
///
/// Returns [`Error::Parse`] when the input cannot be turned into a document
/// tree.
///
/// # Example
///
/// ```rust
/// use extracty::extract;
///
/// let html = "<html><body><div><p>Content</p></div></body></html>";
/// let metadata = extract(html, "https://example.com/")?;
/// assert!(metadata.content.is_some());
/// # Ok::<(), extracty::Error>(())
/// ```
pub fn extract(html: &str, url: &str) -> Result<Metadata> {
    Extractor::new().extract(html, url)
}

/// Extract metadata from an HTML document with custom options.
///
/// # Errors
///
/// Returns [`Error::Parse`] when the input cannot be turned into a document
/// tree.
pub fn extract_with_options(html: &str, url: &str, options: &Options) -> Result<Metadata> {
    Extractor::new()
        .with_options(options.clone())
        .extract(html, url)
}

/// Extract metadata from raw document bytes using default options.
///
/// The character encoding is sniffed from any `charset=` declaration near
/// the start of the document, defaulting to UTF-8.
///
/// # Errors
///
/// Returns [`Error::Parse`] when the decoded input cannot be turned into a
/// document tree.
pub fn extract_bytes(raw: &[u8], url: &str) -> Result<Metadata> {
    Extractor::new().extract_bytes(raw, url)
}
