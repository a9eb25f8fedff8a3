//! Configuration options for metadata extraction.

/// Minimum pixel dimensions a cover-image candidate must meet.
///
/// Either bound may be absent; an absent bound is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinImageSize {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl MinImageSize {
    #[must_use]
    pub fn new(width: Option<u32>, height: Option<u32>) -> Self {
        Self { width, height }
    }

    /// A single dimension applied to both axes.
    #[must_use]
    pub fn square(side: u32) -> Self {
        Self {
            width: Some(side),
            height: Some(side),
        }
    }
}

/// Configuration options for metadata extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use extracty::Options;
///
/// let options = Options {
///     cover_image: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Run the author resolver.
    ///
    /// Default: `true`
    pub author: bool,

    /// Run the title resolver.
    ///
    /// Default: `true`
    pub title: bool,

    /// Run the cover image resolver.
    ///
    /// Default: `true`
    pub cover_image: bool,

    /// Run the content extractor. Content extraction mutates the document
    /// tree and therefore always runs last.
    ///
    /// Default: `true`
    pub content: bool,

    /// Let the title resolver consult plain `<meta name="title">` tags.
    ///
    /// Disabled by default: such tags usually carry a generic site name.
    /// The strategy stays implemented so the policy is a visible switch
    /// rather than dead code.
    ///
    /// Default: `false`
    pub use_meta_title: bool,

    /// Let the cover image resolver consult `og:image` / `twitter:image`
    /// meta tags before falling back to the document heuristic.
    ///
    /// Disabled by default for the same reason as `use_meta_title`:
    /// publisher-submitted images are too often logos or site banners.
    ///
    /// Default: `false`
    pub use_meta_images: bool,

    /// Reject cover-image candidates smaller than this. Requires a fetcher
    /// and an image decoder collaborator; without them every candidate is
    /// unmeasurable and rejected.
    ///
    /// Default: `None`
    pub min_image_size: Option<MinImageSize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            author: true,
            title: true,
            cover_image: true,
            content: true,
            use_meta_title: false,
            use_meta_images: false,
            min_image_size: None,
        }
    }
}
