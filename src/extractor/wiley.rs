//! Wiley Online Library.
//!
//! Abstract and body are both `section.article-section` blocks under
//! `div.article__body`; the body proper is `section.article-section__full`.
//! References are `li[data-bib-id]` entries in
//! `section.article-section__references` with span-level field markup.
//! `ul.rlist` is a generic list class on this platform and must not be used
//! to find the bibliography.

use super::site::{self, SiteProfile};
use super::Extractor;
use crate::confidence::Tier;
use crate::noise::NoiseProfile;
use crate::options::Options;
use crate::references::{EntryRules, FieldRules};
use crate::result::{ExtractionResult, HeadMeta};

pub const FAMILY: &str = "wiley";

pub static PROFILE: SiteProfile = SiteProfile {
    family: FAMILY,
    roots: &[
        "section.article-section__full",
        "div.article__body",
        "article div.article-section__content",
    ],
    leading: &["section.article-section__abstract"],
    references: &[
        "section.article-section__references",
        "#references-section",
        "div.article-section__references",
    ],
    entries: EntryRules {
        entries: &["li[data-bib-id]", "li"],
        citation: None,
        pubmed: false,
        fields: FieldRules {
            authors: Some("span.author"),
            title: Some("span.articleTitle, span.chapterTitle, span.bookTitle"),
            container_title: Some("i, span.journalTitle"),
            volume: Some("span.vol"),
            issue: Some("span.citedIssue"),
            pages: None,
            first_page: Some("span.pageFirst"),
            last_page: Some("span.pageLast"),
            year: Some("span.pubYear"),
        },
    },
    noise: NoiseProfile {
        tags: &[],
        fragments: &["article-row-right", "epub-sections"],
        selectors: &[
            "div.accordion__control",
            "div.figure-extra",
            "div.extra-links",
            "ul.figure-links",
            "div.article-table-content-wrapper a.open-figure-link",
            "div.getFTR",
            "div.article-section__inline-figure a.ppt-figure-link",
            "span.MathJax_Preview",
            "span.MJX_Assistive_MathML",
            "script[type^=\"math/\"]",
            "a.bibLink",
            "span.hidden",
        ],
    },
    tiers: &[
        Tier { min_chars: 8000, confidence: 0.9 },
        Tier { min_chars: 2000, confidence: 0.6 },
    ],
};

/// Wiley Online Library extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct WileyExtractor;

impl Extractor for WileyExtractor {
    fn family(&self) -> &'static str {
        FAMILY
    }

    fn extract(&self, _url: &str, html: &str, head_meta: &HeadMeta, options: &Options) -> ExtractionResult {
        site::run(&PROFILE, html, head_meta, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body><article>
        <section class="article-section article-section__abstract"><h2>Abstract</h2>
          <p>Tidal straining controls stratification.</p></section>
        <ul class="rlist"><li>Share</li><li>Cite</li></ul>
        <section class="article-section article-section__full">
          <section><h2>1 Introduction</h2><p>Salt intrusion varies with the spring-neap cycle.</p></section>
          <div class="getFTR">Get full text options</div>
        </section>
        <section class="article-section__references"><ul>
          <li data-bib-id="bib1"><span class="author">Simpson, J. H.</span>
            (<span class="pubYear">1990</span>). <span class="articleTitle">Tidal straining</span>.
            <i>Estuaries</i>, <span class="vol">13</span>, <span class="pageFirst">125</span>–<span class="pageLast">132</span>.
            <a href="https://doi.org/10.2307/1351581">Crossref</a></li>
        </ul></section>
      </article></body></html>"#;

    #[test]
    fn abstract_precedes_body_sections() {
        let result = WileyExtractor.extract("", PAGE, &HeadMeta::new(), &Options::default());

        assert!(result.ok);
        let titles: Vec<&str> = result.meta.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Abstract", "Introduction"]);
        assert_eq!(result.meta.sections[1].number.as_deref(), Some("1"));
        assert!(!result.article_text.contains("Get full text options"));
        assert!(!result.article_text.contains("Share"));
    }

    #[test]
    fn bibliography_ignores_generic_lists() {
        let result = WileyExtractor.extract("", PAGE, &HeadMeta::new(), &Options::default());

        assert_eq!(result.meta.references.len(), 1);
        let reference = &result.meta.references[0];
        assert_eq!(reference.authors, vec!["Simpson, J. H."]);
        assert_eq!(reference.volume.as_deref(), Some("13"));
        assert_eq!(reference.pages.as_deref(), Some("125-132"));
        assert_eq!(reference.doi.as_deref(), Some("10.2307/1351581"));
    }
}
