//! Network fetch and image decode interfaces.
//!
//! Both are external collaborators: the engine never performs I/O on its
//! own. Failure is reported as absence and causes the single affected
//! candidate to be skipped, never escalated.

/// Fetches raw bytes for a URL.
pub trait Fetcher {
    /// Fetch the resource, or `None` on any failure.
    fn fetch(&self, url: &str) -> Option<Vec<u8>>;
}

/// Decodes image bytes into pixel dimensions.
pub trait ImageDecoder {
    /// `(width, height)` of the image, or `None` if undecodable.
    fn dimensions(&self, bytes: &[u8]) -> Option<(u32, u32)>;
}

/// Fetcher that always fails.
///
/// The default collaborator: with it, a configured minimum image size
/// rejects every candidate, since none can be measured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFetcher;

impl Fetcher for NoFetcher {
    fn fetch(&self, _url: &str) -> Option<Vec<u8>> {
        None
    }
}

/// Decoder that always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDecoder;

impl ImageDecoder for NoDecoder {
    fn dimensions(&self, _bytes: &[u8]) -> Option<(u32, u32)> {
        None
    }
}
