//! Oxford Academic (academic.oup.com).
//!
//! The full text lives in the `ArticleFulltext` widget; the abstract is a
//! `section.abstract` inside the same `div.article-body`. References are
//! `div.js-splitview-ref-item` blocks under `div.ref-list`, with the
//! citation in `div.mixed-citation` and structured spans for the fields.

use super::site::{self, SiteProfile};
use super::Extractor;
use crate::confidence::Tier;
use crate::noise::NoiseProfile;
use crate::options::Options;
use crate::references::{EntryRules, FieldRules};
use crate::result::{ExtractionResult, HeadMeta};

pub const FAMILY: &str = "oup";

pub static PROFILE: SiteProfile = SiteProfile {
    family: FAMILY,
    roots: &[
        "div.widget-ArticleFulltext div.article-body",
        "[data-widgetname=\"ArticleFulltext\"]",
        "div.article-body",
    ],
    leading: &[],
    references: &["div.ref-list", "div.js-splitview-ref-list"],
    entries: EntryRules {
        entries: &["div.js-splitview-ref-item", "div.ref-content", "p.ref"],
        citation: Some("div.mixed-citation, p.mixed-citation"),
        pubmed: true,
        fields: FieldRules {
            authors: Some("div.person-group div.name, span.string-name"),
            title: Some("div.article-title, span.article-title"),
            container_title: Some("div.source, span.source"),
            volume: Some("div.volume, span.volume"),
            issue: Some("div.issue, span.issue"),
            pages: None,
            first_page: Some("div.fpage, span.fpage"),
            last_page: Some("div.lpage, span.lpage"),
            year: Some("div.year, span.year"),
        },
    },
    noise: NoiseProfile {
        tags: &[],
        fragments: &["widget-toolbar", "article-metadata-panel"],
        selectors: &[
            "div.fig-modal",
            "div.table-modal",
            "a.fig-view-orig",
            "div.article-metadata-standalone-panel",
            "div.widget-ArticleLevelMetrics",
            "div.crossref-doi",
            "div.copyright",
            "span.MathJax_Preview",
            "span.MJX_Assistive_MathML",
            "script[type^=\"math/\"]",
            "div.article-nav",
        ],
    },
    tiers: &[
        Tier { min_chars: 6000, confidence: 0.9 },
        Tier { min_chars: 2000, confidence: 0.6 },
    ],
};

/// Oxford Academic extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct OupExtractor;

impl Extractor for OupExtractor {
    fn family(&self) -> &'static str {
        FAMILY
    }

    fn extract(&self, _url: &str, html: &str, head_meta: &HeadMeta, options: &Options) -> ExtractionResult {
        site::run(&PROFILE, html, head_meta, options)
    }
}
