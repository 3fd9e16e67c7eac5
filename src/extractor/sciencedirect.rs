//! ScienceDirect (Elsevier).
//!
//! Abstracts render in `div.Abstracts` above the body root `div#body`, so
//! they are read as a leading container and their sections come first.
//! References are `li.bib-reference` items in `section.bibliography`, with
//! the citation text in `div.contribution` and a `div.host` source line.

use super::site::{self, SiteProfile};
use super::Extractor;
use crate::confidence::Tier;
use crate::noise::NoiseProfile;
use crate::options::Options;
use crate::references::{EntryRules, FieldRules};
use crate::result::{ExtractionResult, HeadMeta};

pub const FAMILY: &str = "sciencedirect";

pub static PROFILE: SiteProfile = SiteProfile {
    family: FAMILY,
    roots: &["div#body", "div.Body", "article div.body"],
    leading: &["div.Abstracts", "#abstracts"],
    references: &["section.bibliography", "div.Bibliography", "#references"],
    entries: EntryRules {
        entries: &["li.bib-reference", "dd.reference", "li"],
        citation: None,
        pubmed: false,
        fields: FieldRules {
            authors: Some("div.contribution div.authors span.author"),
            title: Some("div.contribution strong.title, div.contribution span.title"),
            container_title: Some("div.host span.source"),
            volume: Some("div.host span.volume"),
            issue: Some("div.host span.issue"),
            pages: Some("div.host span.pages"),
            first_page: None,
            last_page: None,
            year: Some("div.host span.year"),
        },
    },
    noise: NoiseProfile {
        tags: &[],
        fragments: &["reference-links", "download-links"],
        selectors: &[
            "span.download-link",
            "ol.links-for-figure",
            "div.toc-sidebar",
            "div.RelatedContent",
            "span.MathJax_Preview",
            "span.MJX_Assistive_MathML",
            "script[type^=\"math/\"]",
            "a.anchor sup",
        ],
    },
    tiers: &[
        Tier { min_chars: 6000, confidence: 0.9 },
        Tier { min_chars: 2000, confidence: 0.6 },
    ],
};

/// ScienceDirect extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScienceDirectExtractor;

impl Extractor for ScienceDirectExtractor {
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
    use crate::result::SectionKind;

    const PAGE: &str = r#"<html><body><article>
        <div class="Abstracts"><div class="abstract author"><h2>Abstract</h2>
          <p>Sediment flux peaks during neap tides.</p></div></div>
        <div id="body"><div>
          <section><h2>1. Introduction</h2><p>Turbidity maxima trap fine sediment.</p></section>
          <section><h2>2. Results and discussion</h2><p>Flux reversed in the dry season.</p></section>
        </div></div>
        <section class="bibliography"><h2>References</h2><ol>
          <li class="bib-reference"><span class="label">[1]</span>
            <div class="contribution"><div class="authors"><span class="author">H. Burchard</span></div>
              <strong class="title">Estuarine turbidity maxima</strong></div>
            <div class="host"><span class="source">Annu. Rev. Mar. Sci.</span>,
              <span class="volume">10</span> (<span class="year">2018</span>),
              <span class="pages">371-395</span></div>
            <div class="ReferenceLinks"><a href="https://doi.org/10.1146/annurev-marine-010816-060535">View article</a></div>
          </li>
        </ol></section>
      </article></body></html>"#;

    #[test]
    fn abstract_container_leads_with_continuous_ids() {
        let result = ScienceDirectExtractor.extract("", PAGE, &HeadMeta::new(), &Options::default());

        assert!(result.ok);
        let ids: Vec<&str> = result.meta.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s01", "s02", "s03"]);
        assert_eq!(result.meta.sections[0].kind, SectionKind::Abstract);
        assert_eq!(
            result.meta.sections[2].kinds,
            vec![SectionKind::Results, SectionKind::Discussion]
        );
        assert!(result.article_text.starts_with("Abstract"));
    }

    #[test]
    fn abstract_matched_by_class_and_id_is_read_once() {
        let html = r#"<html><body>
            <div class="Abstracts u-font-serif" id="abstracts"><h2>Abstract</h2>
              <p>Sediment flux peaks during neap tides.</p></div>
            <div id="body"><section><h2>1. Introduction</h2><p>Turbidity maxima trap fine sediment.</p></section></div>
          </body></html>"#;
        let result = ScienceDirectExtractor.extract("", html, &HeadMeta::new(), &Options::default());

        let titles: Vec<&str> = result.meta.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Abstract", "Introduction"]);
        assert_eq!(result.article_text.matches("Sediment flux peaks").count(), 1);
        assert_eq!(result.score_breakdown.get("leading_containers"), Some(&1.0));
    }

    #[test]
    fn structured_reference_fields() {
        let result = ScienceDirectExtractor.extract("", PAGE, &HeadMeta::new(), &Options::default());
        let reference = &result.meta.references[0];

        assert_eq!(reference.label.as_deref(), Some("1"));
        assert_eq!(reference.authors, vec!["H. Burchard"]);
        assert_eq!(reference.title.as_deref(), Some("Estuarine turbidity maxima"));
        assert_eq!(reference.pages.as_deref(), Some("371-395"));
        assert_eq!(reference.issued_year, Some(2018));
        assert_eq!(
            reference.doi.as_deref(),
            Some("10.1146/annurev-marine-010816-060535")
        );
    }
}
