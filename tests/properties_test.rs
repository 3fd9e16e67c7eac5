use rs_scholarly::extractor::{
    Extractor, GenericExtractor, OupExtractor, PmcExtractor, ScienceDirectExtractor, WileyExtractor,
};
use rs_scholarly::heading::parse_heading;
use rs_scholarly::references::doi;
use rs_scholarly::{extract, extract_bytes, HeadMeta, Options, Quality, SectionKind};

const INPUTS: &[&str] = &[
    "",
    "   \n\t ",
    "plain text, not html at all",
    "<p>text<div>more",
    "<p><div></p></div>",
    "<html><body><article>content",
    "<div class=\"test id=broken>",
    "&amp text &lt;",
    "<html><body><section class=\"body main-article-body\"></section></body></html>",
    "<html><body><div id=\"body\"><h2></h2><h3>2.1</h3></div></body></html>",
    "<html><body><section class=\"article-section__full\"><h4>Results and discussion</h4></section></body></html>",
    "<html><body><div class=\"article-body\"><h2>1.</h2><p>Keywords: a; b</p></div></body></html>",
    "<html><body><p>Are you a robot? Please complete the CAPTCHA.</p></body></html>",
    "<html><body><section class=\"ref-list\"><ul><li></li><li>[1]</li></ul></section></body></html>",
    "<svg><script>alert(1)</script></svg><table><tr><td>cell</td></tr></table>",
];

fn extractors() -> Vec<Box<dyn Extractor>> {
    vec![
        Box::new(GenericExtractor),
        Box::new(PmcExtractor),
        Box::new(OupExtractor),
        Box::new(WileyExtractor),
        Box::new(ScienceDirectExtractor),
    ]
}

#[test]
fn every_extractor_is_total_and_bounded() {
    let options = Options::default();
    for extractor in extractors() {
        for html in INPUTS {
            let result = extractor.extract("", html, &HeadMeta::new(), &options);

            assert_eq!(result.parser, extractor.family(), "{html:?}");
            assert!((0.0..=1.0).contains(&result.confidence), "{html:?}");
            if result.quality == Quality::Blocked {
                assert!(result.confidence <= 0.2, "{html:?}");
            }
            if !result.ok {
                assert_eq!(result.confidence, 0.0, "{html:?}");
                assert!(!result.notes.is_empty(), "{html:?}");
            }
            assert_eq!(result.meta.section_count, result.meta.sections.len());
            assert_eq!(result.meta.reference_count, result.meta.references.len());
        }
    }
}

#[test]
fn section_ids_are_gapless_and_ordered() {
    let html = "<html><body><article>\
        <h2>Abstract</h2><p>a</p><h2>1 Introduction</h2><p>b</p>\
        <h3>1.1 Scope</h3><p>c</p><h4>1.1.1 Detail</h4><p>d</p>\
        <h2>2 Methods</h2><p>e</p><h2>Acknowledgements</h2><p>f</p>\
        <h2>3 Results</h2><p>g</p><h2>4 Discussion</h2><p>h</p>\
        <h2>5 Conclusions</h2><p>i</p><h2>Funding</h2><p>j</p>\
        </article></body></html>";

    let result = extract("https://example.org/", html, &HeadMeta::new());
    let ids: Vec<&str> = result.meta.sections.iter().map(|s| s.id.as_str()).collect();
    let expected: Vec<String> = (1..=ids.len()).map(|n| format!("s{n:02}")).collect();

    assert_eq!(ids.len(), 10);
    assert_eq!(ids, expected);
    for section in &result.meta.sections {
        assert!(section.level >= 2);
    }
}

#[test]
fn numbering_does_not_change_kind() {
    for (numbered, plain) in [
        ("3.2 Methods", "Methods"),
        ("1. Introduction", "Introduction"),
        ("4 Results and Discussion", "Results and Discussion"),
        ("7.  Conflict of interest", "Conflict of interest"),
    ] {
        assert_eq!(parse_heading(numbered).kind, parse_heading(plain).kind, "{numbered}");
    }
    assert_eq!(parse_heading("3.2 Methods").number.as_deref(), Some("3.2"));
    assert_eq!(parse_heading("Methods").number, None);
}

#[test]
fn combined_heading_expands() {
    for heading in ["Results and Discussion", "RESULTS & DISCUSSION", "3. Results and discussions"] {
        let parsed = parse_heading(heading);
        assert_eq!(parsed.kind, SectionKind::Results, "{heading}");
        assert_eq!(parsed.kinds, vec![SectionKind::Results, SectionKind::Discussion], "{heading}");
    }
}

#[test]
fn doi_normalization_round_trip() {
    let a = doi::normalize("HTTPS://DOI.ORG/10.1000/Xyz.");
    let b = doi::normalize("doi:10.1000/xyz");
    assert_eq!(a.as_deref(), Some("10.1000/xyz"));
    assert_eq!(a, b);
    assert_eq!(doi::normalize("https://dx.doi.org/10.1000/xyz"), b);
    assert_eq!(doi::normalize("not a doi"), None);
}

#[test]
fn bytes_are_transcoded_before_extraction() {
    let html = b"<html><head><meta charset=\"windows-1252\"></head><body><article><h2>R\xE9sum\xE9</h2><p>Na\xEFve estimates \x96 revised.</p></article></body></html>";

    let result = extract_bytes("https://example.org/", html, &HeadMeta::new());

    assert!(result.ok);
    assert_eq!(result.meta.sections[0].title, "Résumé");
    assert!(result.article_text.contains("Naïve estimates – revised."));
}

#[test]
fn results_serialize_fully_populated() {
    let result = extract("https://example.org/", "", &HeadMeta::new());
    let json = serde_json::to_value(&result).unwrap();

    for key in [
        "ok",
        "parser",
        "quality",
        "blocked_reason",
        "confidence",
        "article_html",
        "article_text",
        "references_html",
        "references_text",
        "selected_hint",
        "score_breakdown",
        "notes",
        "meta",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["quality"], "suspicious");
}
