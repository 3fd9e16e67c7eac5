//! Generic extraction for unknown sites.
//!
//! Candidates come from an ordered cascade: semantic containers, ARIA main,
//! common id containers, the largest text-bearing block and finally `body`.
//! Each candidate is cloned, noise-stripped and scored; the highest total
//! wins and ties keep the earlier candidate.

use std::collections::{BTreeMap, HashSet};

use dom_query::{Document, NodeId, Selection};

use super::assemble::{Bibliography, Body, Draft, TextStrategy};
use super::site::{self, SiteProfile};
use super::Extractor;
use crate::confidence;
use crate::dom;
use crate::error::Error;
use crate::link_density;
use crate::noise::{self, NoiseProfile, StripReport, BASE_NOISE};
use crate::options::Options;
use crate::patterns::SECTION_VOCABULARY;
use crate::references::LIST_ENTRIES;
use crate::result::{ExtractionResult, HeadMeta};
use crate::sections::{structural, textual};
use crate::selector;

/// Family tag of the generic extractor.
pub const FAMILY: &str = "generic";

/// Ordered candidate cascade: `(selector, hint)`.
const CANDIDATE_CASCADE: &[(&str, &str)] = &[
    ("article", "tag:article"),
    ("main", "tag:main"),
    ("[role=\"main\"]", "role:main"),
    ("#content", "id:content"),
    ("#main-content", "id:main-content"),
    ("#maincontent", "id:maincontent"),
    ("#main", "id:main"),
    ("#article", "id:article"),
    ("#bodyContent", "id:bodyContent"),
];

const LARGEST_BLOCK_HINT: &str = "fallback:largest_block";
const BODY_HINT: &str = "fallback:body";

/// Bibliography containers common across unknown sites.
const REFERENCE_CONTAINERS: &[&str] = &[
    "section.references",
    "div.references",
    "ol.references",
    "#references",
    "section.bibliography",
    "div.bibliography",
    "#bibliography",
    ".ref-list",
];

/// Bibliography lookup for the generic path, expressed as a profile so the
/// publisher bibliography step can be reused.
const GENERIC_PROFILE: SiteProfile = SiteProfile {
    family: FAMILY,
    roots: &["body"],
    leading: &[],
    references: REFERENCE_CONTAINERS,
    entries: LIST_ENTRIES,
    noise: NoiseProfile {
        tags: &[],
        fragments: &[],
        selectors: &[],
    },
    tiers: &[],
};

const TEXT_CAP: f64 = 5000.0;
const PARAGRAPH_CAP: f64 = 20.0;
const HEADING_CAP: f64 = 8.0;
const TEXT_WEIGHT: f64 = 6.0;
const PARAGRAPH_WEIGHT: f64 = 4.0;
const HEADING_WEIGHT: f64 = 2.0;
const LINK_DENSITY_WEIGHT: f64 = 5.0;
const SECTION_BONUS: f64 = 0.5;

/// A candidate content container.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub hint: String,
    pub selection: Selection<'a>,
}

/// Named scoring features of one candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CandidateScore {
    pub text_chars: usize,
    pub paragraph_count: usize,
    pub heading_count: usize,
    pub text_norm: f64,
    pub para_norm: f64,
    pub heading_norm: f64,
    pub link_density: f64,
    pub section_bonus: f64,
    pub total: f64,
}

impl CandidateScore {
    /// Features keyed by name, for `score_breakdown`.
    #[must_use]
    pub fn breakdown(&self) -> BTreeMap<String, f64> {
        BTreeMap::from([
            ("text_norm".to_string(), self.text_norm),
            ("para_norm".to_string(), self.para_norm),
            ("heading_norm".to_string(), self.heading_norm),
            ("link_density".to_string(), self.link_density),
            ("section_bonus".to_string(), self.section_bonus),
            ("total".to_string(), self.total),
            ("text_chars".to_string(), self.text_chars as f64),
            ("paragraph_count".to_string(), self.paragraph_count as f64),
            ("heading_count".to_string(), self.heading_count as f64),
        ])
    }
}

/// The winning candidate, already cloned and stripped.
pub struct Winner {
    pub hint: String,
    pub clone: Document,
    pub score: CandidateScore,
    pub removed: StripReport,
}

/// Enumerate candidates in priority order, de-duplicated by node identity.
#[must_use]
pub fn candidates(doc: &Document) -> Vec<Candidate<'_>> {
    let root = selector::document_root(doc);
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut out = Vec::new();

    for (css, hint) in CANDIDATE_CASCADE {
        if let Some((_, sel)) = selector::first_match(&root, &[*css]) {
            push_unique(&mut out, &mut seen, hint, sel);
        }
    }
    if let Some(block) = largest_block(&root) {
        push_unique(&mut out, &mut seen, LARGEST_BLOCK_HINT, block);
    }
    if let Some((_, body)) = selector::first_match(&root, &["body"]) {
        push_unique(&mut out, &mut seen, BODY_HINT, body);
    }

    out
}

fn push_unique<'a>(
    out: &mut Vec<Candidate<'a>>,
    seen: &mut HashSet<NodeId>,
    hint: &str,
    selection: Selection<'a>,
) {
    if let Some(key) = dom::node_key(&selection) {
        if seen.insert(key) {
            out.push(Candidate { hint: hint.to_string(), selection });
        }
    }
}

fn is_block_container(sel: &Selection) -> bool {
    matches!(
        dom::tag_name(sel).as_deref(),
        Some("div" | "section" | "td" | "body")
    )
}

/// The block whose direct paragraph children carry the most text, else the
/// block with the most text of its own.
#[must_use]
pub fn largest_block<'a>(root: &Selection<'a>) -> Option<Selection<'a>> {
    let blocks = selector::query_all(root, is_block_container);

    let mut best_paragraphs: Option<(usize, &Selection<'a>)> = None;
    let mut best_own: Option<(usize, &Selection<'a>)> = None;

    for block in &blocks {
        let Some(node) = block.nodes().first() else {
            continue;
        };
        let mut paragraph_chars = 0;
        let mut own_chars = 0;
        for child in node.children() {
            if child.is_text() {
                own_chars += child.text().trim().chars().count();
            } else if dom::node_tag(&child) == "p" {
                paragraph_chars += dom::normalized_text(&Selection::from(child)).chars().count();
            }
        }
        if paragraph_chars > 0 && best_paragraphs.is_none_or(|(c, _)| paragraph_chars > c) {
            best_paragraphs = Some((paragraph_chars, block));
        }
        if own_chars > 0 && best_own.is_none_or(|(c, _)| own_chars > c) {
            best_own = Some((own_chars, block));
        }
    }

    best_paragraphs.or(best_own).map(|(_, sel)| sel.clone())
}

/// Score an already stripped candidate root.
#[must_use]
pub fn score(root: &Selection) -> CandidateScore {
    let text = dom::block_text(root);
    let text_chars = text.chars().count();
    let paragraph_count = root.select("p").length();
    let heading_count = root.select("h1, h2, h3, h4, h5, h6").length();

    let text_norm = (text_chars as f64 / TEXT_CAP).min(1.0);
    let para_norm = (paragraph_count as f64 / PARAGRAPH_CAP).min(1.0);
    let heading_norm = (heading_count as f64 / HEADING_CAP).min(1.0);
    let link_density = link_density::link_density(root);
    let section_bonus = if SECTION_VOCABULARY.is_match(&text) { SECTION_BONUS } else { 0.0 };

    let total = TEXT_WEIGHT * text_norm + PARAGRAPH_WEIGHT * para_norm + HEADING_WEIGHT * heading_norm
        - LINK_DENSITY_WEIGHT * link_density
        + section_bonus;

    CandidateScore {
        text_chars,
        paragraph_count,
        heading_count,
        text_norm,
        para_norm,
        heading_norm,
        link_density,
        section_bonus,
        total,
    }
}

/// Clone, strip and score every candidate; return the best.
#[must_use]
pub fn select_best(doc: &Document, options: &Options) -> Option<Winner> {
    let mut best: Option<Winner> = None;

    for candidate in candidates(doc) {
        let clone = dom::clone_subtree(&candidate.selection);
        let removed = noise::strip(&dom::clone_root(&clone), &[&BASE_NOISE], options.noise_text_threshold);
        let score = score(&dom::clone_root(&clone));
        tracing::trace!(hint = %candidate.hint, total = score.total, "generic candidate scored");

        if best.as_ref().is_none_or(|b| score.total > b.score.total) {
            best = Some(Winner {
                hint: candidate.hint,
                clone,
                score,
                removed,
            });
        }
    }

    best
}

/// Extractor for pages no publisher route claims.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericExtractor;

impl Extractor for GenericExtractor {
    fn family(&self) -> &'static str {
        FAMILY
    }

    fn extract(&self, _url: &str, html: &str, head_meta: &HeadMeta, options: &Options) -> ExtractionResult {
        if html.trim().is_empty() {
            return ExtractionResult::failed(FAMILY, Error::EmptyDocument.note());
        }

        let doc = dom::parse(html);
        let mut draft = Draft::open(FAMILY, &doc, head_meta, options);

        let Some(winner) = select_best(&doc, options) else {
            return draft.fail(&Error::CascadeMiss { family: FAMILY, cascade: "candidates" });
        };
        draft.note(format!("candidate:{}", winner.hint));

        let root = dom::clone_root(&winner.clone);
        let mut removed = winner.removed;
        let in_body_refs = NoiseProfile {
            tags: &[],
            fragments: &[],
            selectors: REFERENCE_CONTAINERS,
        };
        removed += noise::strip(&root, &[&in_body_refs], options.noise_text_threshold);
        draft.note(removed.note());

        let text = dom::block_text(&root);
        let structural = structural::sectionize(std::slice::from_ref(&root));
        let (outline, strategy) = if structural.is_empty() {
            draft.note(format!("{FAMILY}_textual_sections"));
            (textual::sectionize(&text, options), TextStrategy::Textual)
        } else {
            (structural, TextStrategy::Structural)
        };

        let doc_root = selector::document_root(&doc);
        let bibliography = if options.extract_references {
            site::bibliography(&doc_root, &GENERIC_PROFILE, options).unwrap_or_else(|error| {
                draft.note(error.note());
                Bibliography::default()
            })
        } else {
            Bibliography::default()
        };

        if text.trim().is_empty() {
            return draft.fail(&Error::EmptyArticleText { family: FAMILY });
        }

        let base = confidence::generic_base(winner.score.total);
        let body = Body {
            html: dom::inner_html(&root).trim().to_string(),
            text,
            hint: winner.hint,
            headings: winner.score.heading_count,
            paragraphs: winner.score.paragraph_count,
            outline,
            strategy,
        };

        tracing::debug!(hint = %body.hint, total = winner.score.total, "generic extraction finished");
        draft.finish(body, bibliography, base, winner.score.breakdown())
    }
}
