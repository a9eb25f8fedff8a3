use extracty::{extract, extract_with_options, Options};

const URL: &str = "https://example.com/post";

fn title_of(html: &str) -> Option<String> {
    match extract(html, URL) {
        Ok(metadata) => metadata.title,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn title_from_title_tag() {
    let html = r#"
        <html>
          <head><title>My Article Title</title></head>
          <body><div><p>Body text.</p></div></body>
        </html>
    "#;
    assert_eq!(title_of(html).as_deref(), Some("My Article Title"));
}

#[test]
fn og_title_preferred_over_title_tag() {
    let html = r#"
        <html>
          <head>
            <title>Example Site</title>
            <meta property="og:title" content="The Real Headline">
          </head>
          <body><div><p>Body text.</p></div></body>
        </html>
    "#;
    assert_eq!(title_of(html).as_deref(), Some("The Real Headline"));
}

#[test]
fn header_strips_site_name_prefix() {
    let html = r#"
        <html>
          <head><title>Example Site: The Big Headline</title></head>
          <body>
            <h2>The Big Headline</h2>
            <div><p>Body text.</p></div>
          </body>
        </html>
    "#;
    assert_eq!(title_of(html).as_deref(), Some("The Big Headline"));
}

#[test]
fn deeper_header_wins_refinement() {
    let html = r#"
        <html>
          <head><title>Example: Alpha Beta</title></head>
          <body>
            <h1>Alpha Beta</h1>
            <h3>Beta</h3>
            <div><p>Body text.</p></div>
          </body>
        </html>
    "#;
    assert_eq!(title_of(html).as_deref(), Some("Beta"));
}

#[test]
fn header_matching_is_case_and_space_insensitive() {
    let html = r#"
        <html>
          <head><title>SITE | the big headline</title></head>
          <body>
            <h2>The  Big  Headline</h2>
            <div><p>Body text.</p></div>
          </body>
        </html>
    "#;
    assert_eq!(title_of(html).as_deref(), Some("The Big Headline"));
}

#[test]
fn unrelated_headers_leave_the_title_alone() {
    let html = r#"
        <html>
          <head><title>The Big Headline</title></head>
          <body>
            <h2>Subscribe to our newsletter</h2>
            <div><p>Body text.</p></div>
          </body>
        </html>
    "#;
    assert_eq!(title_of(html).as_deref(), Some("The Big Headline"));
}

#[test]
fn meta_title_tag_is_ignored_by_default() {
    let html = r#"
        <html>
          <head>
            <meta name="title" content="Generic Site Name">
            <title>Actual Article Title</title>
          </head>
          <body><div><p>Body text.</p></div></body>
        </html>
    "#;
    assert_eq!(title_of(html).as_deref(), Some("Actual Article Title"));
}

#[test]
fn meta_title_tag_wins_when_enabled() {
    let html = r#"
        <html>
          <head>
            <meta name="title" content="Meta Title">
            <title>Tag Title</title>
          </head>
          <body><div><p>Body text.</p></div></body>
        </html>
    "#;
    let options = Options {
        use_meta_title: true,
        ..Options::default()
    };
    let metadata = match extract_with_options(html, URL, &options) {
        Ok(metadata) => metadata,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    assert_eq!(metadata.title.as_deref(), Some("Meta Title"));
}

#[test]
fn title_is_none_when_no_sources_present() {
    let html = r#"
        <html>
          <head></head>
          <body><div><p>Body text.</p></div></body>
        </html>
    "#;
    assert_eq!(title_of(html), None);
}
