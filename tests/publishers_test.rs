use rs_scholarly::{extract, HeadMeta, Quality, SectionKind};

fn filler(sentence: &str, times: usize) -> String {
    format!("{sentence} ").repeat(times)
}

#[test]
fn oup_article_through_proxy_host() {
    let html = format!(
        r#"<html><body>
        <div class="widget-ArticleFulltext"><div class="article-body">
          <section class="abstract"><h2>Abstract</h2><p>{}</p></section>
          <h2>Introduction</h2><p>{}</p>
          <h2>Methods</h2><p>Cores were dated with lead-210.</p>
          <div class="widget-ArticleLevelMetrics">Views 1,204</div>
          <div class="ref-list">
            <div class="js-splitview-ref-item"><div class="mixed-citation">
              <div class="person-group"><div class="name">Kirwan M</div></div>
              <div class="article-title">Marsh accretion</div><div class="year">2016</div>
            </div></div>
          </div>
        </div></div></body></html>"#,
        filler("Salt marsh accretion keeps pace with sea level rise.", 10),
        filler("Sediment supply sets the accretion ceiling.", 60)
    );

    let result = extract(
        "https://academic-oup-com.ezproxy.lib.example.edu/icesjms/article/80/1/1/7000000",
        &html,
        &HeadMeta::new(),
    );

    assert!(result.ok);
    assert_eq!(result.parser, "oup");
    assert_eq!(result.meta.family, "oup");
    assert!(!result.article_text.contains("Views 1,204"));
    assert_eq!(result.meta.references[0].title.as_deref(), Some("Marsh accretion"));
    let kinds: Vec<SectionKind> = result.meta.sections.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![SectionKind::Abstract, SectionKind::Introduction, SectionKind::Methods]);
    // 3000+ characters of body text sit in the middle OUP tier.
    assert!(result.confidence >= 0.6);
}

#[test]
fn wiley_article_keeps_abstract_first() {
    let html = r#"<html><body><article>
        <section class="article-section article-section__abstract"><h2>Abstract</h2><p>Wave energy attenuates across marsh edges.</p></section>
        <section class="article-section article-section__full">
          <section><h2>1 Introduction</h2><p>Marsh edges erode under wave attack.</p></section>
          <section><h2>2 Data and Methods</h2><p>Pressure sensors logged waves.</p></section>
        </section>
        <section class="article-section__references"><ul>
          <li data-bib-id="b1"><span class="author">Möller, I.</span> (<span class="pubYear">2014</span>). <span class="articleTitle">Wave attenuation</span>.</li>
          <li data-bib-id="b2"><span class="author">Leonardi, N.</span> (<span class="pubYear">2016</span>). <span class="articleTitle">Marsh erosion</span>.</li>
        </ul></section>
      </article></body></html>"#;

    let result = extract(
        "https://agupubs.onlinelibrary.wiley.com/doi/full/10.1029/2020JF005000",
        html,
        &HeadMeta::new(),
    );

    assert_eq!(result.parser, "wiley");
    let ids: Vec<&str> = result.meta.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["s01", "s02", "s03"]);
    assert_eq!(result.meta.sections[0].kind, SectionKind::Abstract);
    assert_eq!(result.meta.sections[2].kind, SectionKind::Other);
    assert_eq!(result.meta.references.len(), 2);
    assert_eq!(result.meta.references[1].issued_year, Some(2016));
}

#[test]
fn sciencedirect_paywall_stub_is_blocked() {
    let html = r#"<html><body>
        <div class="Abstracts"><h2>Abstract</h2><p>Dune vegetation traps sand.</p></div>
        <div id="body"><p>Access through your institution to read the full text.</p></div>
      </body></html>"#;

    let result = extract(
        "https://www.sciencedirect.com/science/article/pii/S0000000000000000",
        html,
        &HeadMeta::new(),
    );

    assert_eq!(result.quality, Quality::Blocked);
    assert!(result.confidence <= 0.2);
    assert!(result.notes.iter().any(|n| n == "wall:paywall"));
}

#[test]
fn sciencedirect_missing_bibliography_is_noted() {
    let html = r#"<html><body>
        <div id="body"><section><h2>Introduction</h2><p>Dunes protect coasts.</p></section></div>
      </body></html>"#;

    let result = extract(
        "https://www.sciencedirect.com/science/article/pii/S1",
        html,
        &HeadMeta::new(),
    );

    assert!(result.ok);
    assert_eq!(result.parser, "sciencedirect");
    assert!(result.meta.references.is_empty());
    assert!(result.notes.iter().any(|n| n == "sciencedirect_no_references"));
}
