use rs_scholarly::{extract, BlockedReason, HeadMeta, MetaValue, Quality, SectionKind};

fn long_paragraph() -> String {
    "Coastal upwelling delivers nutrients to the photic zone and sustains high primary production along eastern boundary currents. "
        .repeat(22)
}

#[test]
fn generic_article_with_results_section() {
    let html = format!(
        "<html><body><article><p>Abstract</p><p>{}</p><h2>Results</h2><p>Chlorophyll peaked two weeks after the wind event.</p></article></body></html>",
        long_paragraph()
    );

    let result = extract("https://journal.example.org/article/42", &html, &HeadMeta::new());

    assert!(result.ok);
    assert_eq!(result.parser, "generic");
    assert_eq!(result.quality, Quality::Ok);
    assert_eq!(result.blocked_reason, BlockedReason::None);
    assert!(result.meta.sections.iter().any(|s| s.kind == SectionKind::Results));
    assert_eq!(result.selected_hint, "tag:article");
    assert!(result.confidence > 0.0 && result.confidence <= 1.0);
}

#[test]
fn cookie_wall_page_is_blocked() {
    let html = "<html><body><p>Please accept cookies to continue</p></body></html>";

    let result = extract("https://journal.example.org/article/43", html, &HeadMeta::new());

    assert_eq!(result.quality, Quality::Blocked);
    assert_eq!(result.blocked_reason, BlockedReason::CookieWall);
    assert!(result.confidence <= 0.2);
    assert!(result.notes.iter().any(|n| n == "wall:cookie_wall"));
}

#[test]
fn boilerplate_is_stripped_from_generic_body() {
    let html = format!(
        r#"<html><body>
        <nav><a href="/">Home</a><a href="/issues">Issues</a></nav>
        <div class="cookie-banner">We use cookies to improve this site.</div>
        <main>
          <h2>Introduction</h2><p>{0}</p><p>{0}</p>
          <div class="share-buttons">Share on social media</div>
          <h2>Discussion</h2><p>Upwelling intensity is increasing.</p>
        </main>
        <footer>Copyright 2024 Example Press</footer>
        </body></html>"#,
        long_paragraph()
    );

    let result = extract("https://journal.example.org/article/44", &html, &HeadMeta::new());

    assert!(result.ok);
    assert_eq!(result.selected_hint, "tag:main");
    assert!(!result.article_text.contains("Share on social media"));
    assert!(!result.article_text.contains("Copyright 2024"));
    let kinds: Vec<SectionKind> = result.meta.sections.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![SectionKind::Introduction, SectionKind::Discussion]);
}

#[test]
fn heading_free_page_uses_textual_sections() {
    let html = format!(
        "<html><body><article><p>Introduction</p><p>{}</p><p>Conclusions</p><p>Upwelling matters.</p></article></body></html>",
        long_paragraph()
    );

    let result = extract("https://journal.example.org/article/45", &html, &HeadMeta::new());

    assert!(result.ok);
    assert_eq!(result.meta.text_strategy, "textual");
    assert!(result.notes.iter().any(|n| n == "generic_textual_sections"));
    let kinds: Vec<SectionKind> = result.meta.sections.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![SectionKind::Introduction, SectionKind::Conclusion]);
}

#[test]
fn head_metadata_is_summarized() {
    let html = r#"<html><head>
        <meta name="citation_title" content="Upwelling and production">
        <meta name="citation_author" content="Ruiz, A.">
        <meta name="citation_author" content="Okafor, B.">
        <meta name="citation_publication_date" content="2021/03/09">
        <meta name="citation_doi" content="https://doi.org/10.1000/UP.2021">
        </head><body><article><p>Body text.</p></article></body></html>"#;

    let mut client = HeadMeta::new();
    client.insert("citation_title".to_string(), MetaValue::from("Client title"));

    let result = extract("https://journal.example.org/article/46", html, &client);
    let head = &result.meta.head;

    assert_eq!(head.title.as_deref(), Some("Client title"));
    assert_eq!(head.authors, vec!["Ruiz, A.", "Okafor, B."]);
    assert_eq!(head.published.as_deref(), Some("2021-03-09"));
    assert_eq!(head.doi.as_deref(), Some("10.1000/up.2021"));
}

#[test]
fn generic_bibliography_is_parsed() {
    let html = r#"<html><body><article>
        <h2>Introduction</h2><p>Prior work exists.</p>
        <section class="references"><h2>References</h2><ol>
          <li>1. Ruiz A. Upwelling. Ocean Lett. 2019. doi:10.1000/ol.1</li>
          <li>2. Okafor B. Production. Mar Ecol. 2020.</li>
        </ol></section>
        </article></body></html>"#;

    let result = extract("https://journal.example.org/article/47", html, &HeadMeta::new());

    assert_eq!(result.meta.references.len(), 2);
    assert_eq!(result.meta.reference_count, 2);
    assert_eq!(result.meta.references[0].doi.as_deref(), Some("10.1000/ol.1"));
    assert!(!result.article_text.contains("Okafor B."));
    assert!(result.meta.sections.iter().all(|s| s.kind != SectionKind::References));
}

#[test]
fn empty_html_fails_cleanly() {
    let result = extract("https://journal.example.org/", "", &HeadMeta::new());

    assert!(!result.ok);
    assert_eq!(result.notes, vec!["empty_dom_html"]);
    assert!(result.meta.sections.is_empty());
}
