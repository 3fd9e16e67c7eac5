//! Structural sectionization: walk heading markup inside content roots.

use dom_query::{NodeRef, Selection};

use super::{Outline, SectionBuilder};
use crate::dom;
use crate::etree;
use crate::heading::parse_heading;

/// Tags whose text is never assigned to a section.
const SKIPPED_TAGS: &[&str] = &["figure", "figcaption", "table", "aside", "nav", "footer"];

/// Class/id tokens of non-content subsections (compared as whole tokens).
const SKIPPED_TOKENS: &[&str] = &["fig", "figure", "figcaption", "table-wrap", "ref-list"];

/// Class/id fragments of non-content subsections (compared as substrings).
const SKIPPED_FRAGMENTS: &[&str] = &["references", "bibliography", "cited-by", "citedby", "ref-list"];

/// Sectionize the heading structure of every root, in order.
///
/// Roots share one id sequence, so a leading container (an abstract block
/// outside the body) yields sections numbered before the body's.
#[must_use]
pub fn sectionize(roots: &[Selection]) -> Outline {
    let mut builder = SectionBuilder::new();
    for root in roots {
        for node in root.nodes() {
            walk(node, &mut builder);
        }
    }
    builder.finish()
}

fn walk(node: &NodeRef, builder: &mut SectionBuilder) {
    for child in node.children() {
        if !child.is_element() {
            continue;
        }
        let tag = dom::node_tag(&child);
        let sel = Selection::from(child);
        if is_skipped(&tag, &sel) {
            continue;
        }

        match tag.as_str() {
            "h2" | "h3" | "h4" => {
                let raw = etree::iter_text(&sel, " ");
                let heading = parse_heading(&raw);
                if !heading.title.is_empty() {
                    builder.open(heading, heading_level(&tag));
                }
            }
            "p" | "dd" | "pre" => builder.paragraph(&dom::normalized_text(&sel)),
            "li" | "blockquote" if !sel.select("p").exists() => {
                builder.paragraph(&dom::normalized_text(&sel));
            }
            _ => walk(&child, builder),
        }
    }
}

fn heading_level(tag: &str) -> u8 {
    match tag {
        "h3" => 3,
        "h4" => 4,
        _ => 2,
    }
}

fn is_skipped(tag: &str, sel: &Selection) -> bool {
    if SKIPPED_TAGS.contains(&tag) {
        return true;
    }
    let id_class = dom::id_class(sel);
    if id_class.trim().is_empty() {
        return false;
    }
    id_class
        .split_whitespace()
        .any(|token| SKIPPED_TOKENS.contains(&token))
        || SKIPPED_FRAGMENTS.iter().any(|f| id_class.contains(f))
}
