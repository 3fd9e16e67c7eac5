//! PubMed Central.
//!
//! Current PMC pages wrap the article in `section[aria-label="Article content"]`
//! with the body in `section.body.main-article-body` and the bibliography in
//! a sibling `section.ref-list`. Older templates use `div.jig-ncbiinpagenav`
//! and `div.tsec` blocks. Citations sit in `<cite>` with PubMed and Google
//! Scholar links beside them.

use super::site::{self, SiteProfile};
use super::Extractor;
use crate::confidence::Tier;
use crate::noise::NoiseProfile;
use crate::options::Options;
use crate::references::{EntryRules, FieldRules};
use crate::result::{ExtractionResult, HeadMeta};

pub const FAMILY: &str = "pmc";

pub static PROFILE: SiteProfile = SiteProfile {
    family: FAMILY,
    roots: &[
        "section[aria-label=\"Article content\"] section.body.main-article-body",
        "section.body.main-article-body",
        "div.jig-ncbiinpagenav",
        "div#maincontent div.article",
    ],
    leading: &[],
    references: &[
        "section.ref-list",
        "div.ref-list-sec",
        "#reference-list",
        ".ref-list",
    ],
    entries: EntryRules {
        entries: &["li", "div.ref-cit-blk", "tr"],
        citation: Some("cite, .element-citation, .mixed-citation"),
        pubmed: true,
        fields: FieldRules {
            authors: None,
            title: None,
            container_title: None,
            volume: None,
            issue: None,
            pages: None,
            first_page: None,
            last_page: None,
            year: None,
        },
    },
    noise: NoiseProfile {
        tags: &[],
        fragments: &["pmc-sidenav", "ncbi-alerts"],
        selectors: &[
            "a.usa-link.usa-link--pdf",
            "sup.xref",
            "div.fig-open-in-new-tab",
            "a.pmc-fig-link",
            "div.pmc-layout__sidebar",
            "section.associated-data",
            "div.courtesy-note",
            "ul.d-buttons",
            "span.MathJax_Preview",
            "mjx-assistive-mml",
            "span.MJX_Assistive_MathML",
            "script[type^=\"math/\"]",
            "div.goto",
            "nav.toc",
        ],
    },
    tiers: &[
        Tier { min_chars: 9000, confidence: 0.9 },
        Tier { min_chars: 2000, confidence: 0.6 },
    ],
};

/// PubMed Central extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct PmcExtractor;

impl Extractor for PmcExtractor {
    fn family(&self) -> &'static str {
        FAMILY
    }

    fn extract(&self, _url: &str, html: &str, head_meta: &HeadMeta, options: &Options) -> ExtractionResult {
        site::run(&PROFILE, html, head_meta, options)
    }
}
