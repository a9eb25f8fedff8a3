//! Result type for extraction output.

use serde::{Deserialize, Serialize};

/// Metadata extracted from an HTML document.
///
/// Every field except the source URL is optional: absence means no credible
/// candidate was found, which is an expected outcome on a large fraction of
/// real documents, not a failure. A fresh record is created per extraction
/// call and never shared across calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Source URL of the document, as provided by the caller.
    pub url: String,

    /// Best-guess author name.
    pub author: Option<String>,

    /// Page headline.
    pub title: Option<String>,

    /// Absolute URL of the representative cover image.
    pub cover_image: Option<String>,

    /// Main readable content, serialized to markup.
    pub content: Option<String>,
}
