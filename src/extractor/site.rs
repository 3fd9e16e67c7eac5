//! Shared publisher pipeline.
//!
//! Every publisher extractor is a [`SiteProfile`]: selector cascades for the
//! full-text root, optional leading containers and the bibliography, entry
//! rules, platform noise and a confidence tier table. [`run`] drives them
//! through the same steps:
//!
//! 1. Empty input fails with `empty_dom_html`.
//! 2. A full-text root cascade miss fails with `<family>_no_fulltext_root`.
//! 3. The root (and any leading containers) are cloned; bibliography
//!    containers, leading containers and noise are stripped from the clone.
//! 4. The clones are sectionized structurally, falling back to textual
//!    sectionization of the flattened text.
//! 5. The bibliography cascade runs over the whole document on its own.
//! 6. Empty article text fails with `<family>_empty_article_text`.
//! 7. Confidence comes from the tier table.

use std::collections::{BTreeMap, HashSet};

use dom_query::{Document, NodeId, Selection};

use super::assemble::{Bibliography, Body, Draft, TextStrategy};
use crate::confidence::{self, Tier};
use crate::dom;
use crate::error::Error;
use crate::noise::{self, NoiseProfile, StripReport, BASE_NOISE};
use crate::options::Options;
use crate::references::{self, EntryRules};
use crate::result::{ExtractionResult, HeadMeta};
use crate::sections::{structural, textual};
use crate::selector;

/// Publisher markup conventions.
#[derive(Debug, Clone, Copy)]
pub struct SiteProfile {
    /// Family tag used as parser name and note prefix.
    pub family: &'static str,
    /// Full-text root cascade.
    pub roots: &'static [&'static str],
    /// Containers rendered outside the root whose sections precede the body
    /// (abstracts). Each selector contributes its first match.
    pub leading: &'static [&'static str],
    /// Bibliography container cascade.
    pub references: &'static [&'static str],
    pub entries: EntryRules,
    /// Platform widgets removed from body and bibliography clones.
    pub noise: NoiseProfile,
    /// Confidence tiers by descending minimum text length.
    pub tiers: &'static [Tier],
}

/// First match of each leading selector, once per node.
///
/// Containers that sit inside the root or inside an earlier leading
/// container are skipped, so their text is not read twice.
fn leading_containers<'a>(
    doc_root: &Selection<'a>,
    root: &Selection<'a>,
    selectors: &[&str],
) -> Vec<Selection<'a>> {
    let mut seen: HashSet<NodeId> = dom::node_key(root).into_iter().collect();
    let mut out = Vec::new();
    for sel in selectors {
        let Some((_, container)) = selector::first_match(doc_root, &[*sel]) else {
            continue;
        };
        let Some(node) = container.nodes().first() else {
            continue;
        };
        let id = node.id;
        let nested = node.ancestors(None).iter().any(|a| seen.contains(&a.id));
        if !nested && seen.insert(id) {
            out.push(container);
        }
    }
    out
}

/// Run the publisher pipeline for `profile`.
#[must_use]
pub fn run(profile: &SiteProfile, html: &str, head_meta: &HeadMeta, options: &Options) -> ExtractionResult {
    let family = profile.family;
    if html.trim().is_empty() {
        return ExtractionResult::failed(family, Error::EmptyDocument.note());
    }

    let doc = dom::parse(html);
    let mut draft = Draft::open(family, &doc, head_meta, options);
    let doc_root = selector::document_root(&doc);

    let Some((hint, root)) = selector::first_match(&doc_root, profile.roots) else {
        tracing::debug!(family, "full-text root cascade missed");
        return draft.fail(&Error::CascadeMiss { family, cascade: "fulltext_root" });
    };

    let leading = leading_containers(&doc_root, &root, profile.leading);

    let stripped_in_body = NoiseProfile {
        tags: &[],
        fragments: &[],
        selectors: profile.references,
    };
    let leading_in_body = NoiseProfile {
        tags: &[],
        fragments: &[],
        selectors: profile.leading,
    };

    let mut removed = StripReport::default();
    let mut clones: Vec<Document> = Vec::with_capacity(leading.len() + 1);
    for container in &leading {
        let clone = dom::clone_subtree(container);
        let report = noise::strip(
            &dom::clone_root(&clone),
            &[&BASE_NOISE, &profile.noise, &stripped_in_body],
            options.noise_text_threshold,
        );
        removed += report;
        clones.push(clone);
    }
    let body_clone = dom::clone_subtree(&root);
    let mut body_profiles = vec![&BASE_NOISE, &profile.noise, &stripped_in_body];
    if !leading.is_empty() {
        body_profiles.push(&leading_in_body);
    }
    removed += noise::strip(&dom::clone_root(&body_clone), &body_profiles, options.noise_text_threshold);
    clones.push(body_clone);
    draft.note(removed.note());

    let roots: Vec<Selection> = clones.iter().map(dom::clone_root).collect();
    let text = join_blocks(roots.iter().map(dom::block_text));
    let html_out = join_blocks(roots.iter().map(|r| dom::inner_html(r).to_string()));

    let structural = structural::sectionize(&roots);
    let (outline, strategy) = if structural.is_empty() {
        draft.note(format!("{family}_textual_sections"));
        let mut textual = textual::sectionize(&text, options);
        textual.paragraphs = textual.paragraphs.max(structural.paragraphs);
        (textual, TextStrategy::Textual)
    } else {
        (structural, TextStrategy::Structural)
    };

    let bibliography = if options.extract_references {
        match bibliography(&doc_root, profile, options) {
            Ok(bib) => bib,
            Err(error) => {
                draft.note(error.note());
                Bibliography::default()
            }
        }
    } else {
        Bibliography::default()
    };

    if text.trim().is_empty() {
        return draft.fail(&Error::EmptyArticleText { family });
    }

    let text_chars = text.chars().count();
    let base = confidence::tier_base(profile.tiers, text_chars);
    let body = Body {
        paragraphs: outline.paragraphs,
        headings: outline.headings,
        html: html_out,
        text,
        hint: hint.to_string(),
        outline,
        strategy,
    };

    let mut breakdown = BTreeMap::new();
    breakdown.insert("noise_removed".to_string(), removed.total() as f64);
    breakdown.insert("leading_containers".to_string(), leading.len() as f64);

    tracing::debug!(family, hint, text_chars, base, "publisher extraction finished");
    draft.finish(body, bibliography, base, breakdown)
}

/// Locate, clean and parse the bibliography anywhere in the document.
pub fn bibliography(
    doc_root: &Selection,
    profile: &SiteProfile,
    options: &Options,
) -> crate::Result<Bibliography> {
    let (_, container) = selector::first_match(doc_root, profile.references).ok_or(
        Error::CascadeMiss {
            family: profile.family,
            cascade: "references",
        },
    )?;

    let clone = dom::clone_subtree(&container);
    let root = dom::clone_root(&clone);
    noise::strip(&root, &[&BASE_NOISE, &profile.noise], options.noise_text_threshold);

    Ok(Bibliography {
        html: dom::inner_html(&root).trim().to_string(),
        text: dom::block_text(&root),
        references: references::extract_entries(&root, &profile.entries),
    })
}

fn join_blocks(parts: impl Iterator<Item = String>) -> String {
    parts
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
