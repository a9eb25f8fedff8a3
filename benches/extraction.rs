//! Performance benchmarks for extracty.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use extracty::{extract, extract_with_options, parse, Options};

const URL: &str = "https://example.com/post";

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Example Site: Sample Article</title>
    <meta name="author" content="John Doe">
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
    </nav>
    <div class="post">
        <h2>Sample Article</h2>
        <p class="byline">By John Doe</p>
        <img src="/photos/lead.jpg">
        <p>This is the first paragraph of the article. It contains some
        meaningful content that the heuristics should keep.</p>
        <p>Here is a second paragraph with more content. Extraction should
        preserve the text while removing navigation and other boilerplate.</p>
        <p>A third paragraph ensures there is enough content for a meaningful
        measurement of extraction performance.</p>
    </div>
    <div class="sidebar">
        <h3>Related Articles</h3>
        <ul>
            <li>Related article 1</li>
            <li>Related article 2</li>
        </ul>
    </div>
    <footer>
        <p>Copyright 2024</p>
    </footer>
</body>
</html>
"#;

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| {
        b.iter(|| parse(black_box(SAMPLE_HTML)));
    });
}

fn bench_extract_default(c: &mut Criterion) {
    c.bench_function("extract_default", |b| {
        b.iter(|| extract(black_box(SAMPLE_HTML), URL));
    });
}

fn bench_extract_content_only(c: &mut Criterion) {
    let options = Options {
        author: false,
        title: false,
        cover_image: false,
        ..Options::default()
    };
    c.bench_function("extract_content_only", |b| {
        b.iter(|| extract_with_options(black_box(SAMPLE_HTML), URL, &options));
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_extract_default,
    bench_extract_content_only
);
criterion_main!(benches);
