use std::cell::RefCell;
use std::rc::Rc;

use extracty::{
    extract, Extractor, Fetcher, ImageDecoder, MinImageSize, Options, Paragraph,
    ParagraphClassifier, ParagraphLabel, Precomputed,
};

const URL: &str = "https://example.com/post";

fn good(locator: &str) -> Paragraph {
    Paragraph {
        locator: locator.to_string(),
        label: ParagraphLabel::Good,
        text: String::new(),
    }
}

/// Fetcher that records every request and serves a one-byte tag the stub
/// decoder turns into dimensions.
#[derive(Clone)]
struct StubFetcher {
    log: Rc<RefCell<Vec<String>>>,
}

impl Fetcher for StubFetcher {
    fn fetch(&self, url: &str) -> Option<Vec<u8>> {
        self.log.borrow_mut().push(url.to_string());
        if url.ends_with("small.jpg") {
            Some(vec![1])
        } else if url.ends_with("big.jpg") {
            Some(vec![2])
        } else {
            None
        }
    }
}

struct StubDecoder;

impl ImageDecoder for StubDecoder {
    fn dimensions(&self, bytes: &[u8]) -> Option<(u32, u32)> {
        match bytes {
            [1] => Some((50, 50)),
            [2] => Some((300, 300)),
            _ => None,
        }
    }
}

const TWO_IMAGE_PAGE: &str = r#"
    <html>
      <body>
        <img src="/small.jpg">
        <p>First paragraph of the story.</p>
        <img src="/big.jpg">
        <p>Second paragraph of the story.</p>
      </body>
    </html>
"#;

fn two_image_classifier() -> Precomputed {
    Precomputed::new(vec![
        good("/html[1]/body[1]/p[1]"),
        good("/html[1]/body[1]/p[2]"),
    ])
}

#[test]
fn first_image_preceding_a_good_paragraph_wins() {
    let extractor = Extractor::new().with_classifier(two_image_classifier());
    let metadata = match extractor.extract(TWO_IMAGE_PAGE, URL) {
        Ok(metadata) => metadata,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    assert_eq!(
        metadata.cover_image.as_deref(),
        Some("https://example.com/small.jpg")
    );
}

#[test]
fn minimum_size_rejects_small_candidates() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let extractor = Extractor::new()
        .with_classifier(two_image_classifier())
        .with_fetcher(StubFetcher { log: Rc::clone(&log) })
        .with_decoder(StubDecoder)
        .with_options(Options {
            min_image_size: Some(MinImageSize::square(100)),
            ..Options::default()
        });
    let metadata = match extractor.extract(TWO_IMAGE_PAGE, URL) {
        Ok(metadata) => metadata,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    assert_eq!(
        metadata.cover_image.as_deref(),
        Some("https://example.com/big.jpg")
    );
    // exactly one fetch per candidate, in document order
    assert_eq!(
        *log.borrow(),
        vec![
            "https://example.com/small.jpg".to_string(),
            "https://example.com/big.jpg".to_string(),
        ]
    );
}

#[test]
fn minimum_size_without_collaborators_rejects_everything() {
    let extractor = Extractor::new()
        .with_classifier(two_image_classifier())
        .with_options(Options {
            min_image_size: Some(MinImageSize::square(100)),
            ..Options::default()
        });
    let metadata = match extractor.extract(TWO_IMAGE_PAGE, URL) {
        Ok(metadata) => metadata,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    assert_eq!(metadata.cover_image, None);
}

#[test]
fn noise_urls_are_filtered() {
    let html = r#"
        <html>
          <body>
            <img src="/avatars/avatar-jane.png">
            <img src="/photos/cover.jpg">
            <p>First paragraph of the story.</p>
          </body>
        </html>
    "#;
    let extractor =
        Extractor::new().with_classifier(Precomputed::new(vec![good("/html[1]/body[1]/p[1]")]));
    let metadata = match extractor.extract(html, URL) {
        Ok(metadata) => metadata,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    assert_eq!(
        metadata.cover_image.as_deref(),
        Some("https://example.com/photos/cover.jpg")
    );
}

#[test]
fn meta_images_are_ignored_by_default() {
    let html = r#"
        <html>
          <head><meta property="og:image" content="https://cdn.example.com/social/cover.jpg"></head>
          <body>
            <img src="/photos/inline.jpg">
            <p>First paragraph of the story.</p>
          </body>
        </html>
    "#;
    let classifier = Precomputed::new(vec![good("/html[1]/body[1]/p[1]")]);

    let extractor = Extractor::new().with_classifier(classifier.clone());
    let metadata = match extractor.extract(html, URL) {
        Ok(metadata) => metadata,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    assert_eq!(
        metadata.cover_image.as_deref(),
        Some("https://example.com/photos/inline.jpg")
    );

    let extractor = Extractor::new()
        .with_classifier(classifier)
        .with_options(Options {
            use_meta_images: true,
            ..Options::default()
        });
    let metadata = match extractor.extract(html, URL) {
        Ok(metadata) => metadata,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    assert_eq!(
        metadata.cover_image.as_deref(),
        Some("https://cdn.example.com/social/cover.jpg")
    );
}

#[test]
fn whitespace_around_candidate_urls_is_trimmed() {
    let html = r#"
        <html>
          <body>
            <img src="  /photos/cover.jpg  ">
            <p>First paragraph of the story.</p>
          </body>
        </html>
    "#;
    let extractor =
        Extractor::new().with_classifier(Precomputed::new(vec![good("/html[1]/body[1]/p[1]")]));
    let metadata = match extractor.extract(html, URL) {
        Ok(metadata) => metadata,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    assert_eq!(
        metadata.cover_image.as_deref(),
        Some("https://example.com/photos/cover.jpg")
    );
}

#[test]
fn stale_locators_are_skipped() {
    let html = r#"
        <html>
          <body>
            <img src="/photos/cover.jpg">
            <p>First paragraph of the story.</p>
          </body>
        </html>
    "#;
    let extractor =
        Extractor::new().with_classifier(Precomputed::new(vec![good("/html[1]/body[1]/p[9]")]));
    let metadata = match extractor.extract(html, URL) {
        Ok(metadata) => metadata,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    assert_eq!(metadata.cover_image, None);
}

#[test]
fn no_classifier_means_no_heuristic_candidates() {
    let html = r#"
        <html>
          <body>
            <img src="/photos/cover.jpg">
            <p>First paragraph of the story.</p>
          </body>
        </html>
    "#;
    let metadata = match extract(html, URL) {
        Ok(metadata) => metadata,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    assert_eq!(metadata.cover_image, None);
}

#[test]
fn precomputed_locators_resolve_against_the_parsed_tree() {
    // sanity check on the locators used throughout this file
    let classifier = two_image_classifier();
    let doc = match extracty::parse(TWO_IMAGE_PAGE) {
        Ok(doc) => doc,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    let paragraphs = classifier.classify(&doc);
    assert_eq!(paragraphs.len(), 2);
    assert_eq!(doc.resolve(&paragraphs[0].locator).len(), 1);
}
