//! Reference Extraction
//!
//! Enumerates bibliography entries inside an already located (and cleaned)
//! references container. Each publisher supplies [`EntryRules`]: which
//! elements are entries, which child carries the citation text, and
//! optional field selectors for structured markup.
//!
//! Entries keep document order. Entries without text are dropped; nothing
//! is de-duplicated here.

pub mod doi;

use std::collections::HashSet;

use dom_query::{NodeId, Selection};

use crate::dom;
use crate::patterns::{PUBMED_LINK, REF_BARE_LABEL, REF_LABEL, YEAR};
use crate::result::Reference;

/// Per-field selectors, evaluated inside one entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldRules {
    /// Every match is one author.
    pub authors: Option<&'static str>,
    pub title: Option<&'static str>,
    pub container_title: Option<&'static str>,
    pub volume: Option<&'static str>,
    pub issue: Option<&'static str>,
    /// Full page range.
    pub pages: Option<&'static str>,
    /// First and last page, joined when `pages` is absent.
    pub first_page: Option<&'static str>,
    pub last_page: Option<&'static str>,
    pub year: Option<&'static str>,
}

/// How to enumerate and read entries of one platform's bibliography.
#[derive(Debug, Clone, Copy)]
pub struct EntryRules {
    /// Entry selectors; the first one with matches is used.
    pub entries: &'static [&'static str],
    /// Child holding the citation text, preferred over the whole entry.
    pub citation: Option<&'static str>,
    /// Look for PubMed links.
    pub pubmed: bool,
    pub fields: FieldRules,
}

/// Generic list-based bibliography.
pub const LIST_ENTRIES: EntryRules = EntryRules {
    entries: &["li", "p"],
    citation: None,
    pubmed: false,
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
};

/// Extract every entry of `container`.
#[must_use]
pub fn extract_entries(container: &Selection, rules: &EntryRules) -> Vec<Reference> {
    entry_nodes(container, rules.entries)
        .iter()
        .filter_map(|entry| parse_entry(entry, rules))
        .collect()
}

/// Outermost matches of the first entry selector that matches anything.
fn entry_nodes<'a>(container: &Selection<'a>, selectors: &[&str]) -> Vec<Selection<'a>> {
    for selector in selectors {
        let matched = container.select(selector);
        if matched.is_empty() {
            continue;
        }
        let ids: HashSet<NodeId> = matched.nodes().iter().map(|n| n.id).collect();
        return matched
            .nodes()
            .iter()
            .filter(|n| !n.ancestors(None).iter().any(|a| ids.contains(&a.id)))
            .map(|n| Selection::from(*n))
            .collect();
    }
    Vec::new()
}

fn parse_entry(entry: &Selection, rules: &EntryRules) -> Option<Reference> {
    let text_source = rules
        .citation
        .map(|sel| entry.select(sel))
        .filter(Selection::exists)
        .unwrap_or_else(|| entry.clone());
    let full_text = dom::normalized_text(&text_source);
    if full_text.is_empty() {
        return None;
    }

    let (label, raw) = split_label(&full_text);
    if raw.is_empty() {
        return None;
    }

    let hrefs: Vec<String> = entry
        .select("a[href]")
        .iter()
        .filter_map(|a| a.attr("href").map(|h| h.to_string()))
        .collect();

    let doi = hrefs
        .iter()
        .find_map(|href| doi::from_href(href))
        .or_else(|| dom::get_attribute(entry, "data-doi").and_then(|d| doi::normalize(&d)))
        .or_else(|| doi::find(&dom::normalized_text(entry)));

    let pubmed = if rules.pubmed {
        hrefs.iter().find_map(|href| {
            PUBMED_LINK
                .captures(href)
                .map(|caps| format!("https://pubmed.ncbi.nlm.nih.gov/{}/", &caps[1]))
        })
    } else {
        None
    };

    let fields = &rules.fields;
    let pages = field(entry, fields.pages).or_else(|| {
        let first = field(entry, fields.first_page)?;
        Some(match field(entry, fields.last_page) {
            Some(last) => format!("{first}-{last}"),
            None => first,
        })
    });
    let issued_year = field(entry, fields.year)
        .as_deref()
        .and_then(parse_year)
        .or_else(|| parse_year(&raw));

    Some(Reference {
        label,
        doi,
        pubmed,
        title: field(entry, fields.title),
        authors: all_fields(entry, fields.authors),
        issued_year,
        container_title: field(entry, fields.container_title),
        volume: field(entry, fields.volume),
        issue: field(entry, fields.issue),
        pages,
        raw,
    })
}

/// Split a leading numbering label (`1.`, `[12]`, `(3)`, `12)`, `12 Smith`).
fn split_label(text: &str) -> (Option<String>, String) {
    if let Some(caps) = REF_LABEL.captures(text) {
        let label = caps
            .iter()
            .skip(1)
            .flatten()
            .next()
            .map(|m| m.as_str().to_string());
        let end = caps.get(0).map_or(0, |m| m.end());
        return (label, text[end..].trim().to_string());
    }
    if let Some(caps) = REF_BARE_LABEL.captures(text) {
        if let Some(number) = caps.get(1) {
            return (
                Some(number.as_str().to_string()),
                text[number.end()..].trim().to_string(),
            );
        }
    }
    (None, text.trim().to_string())
}

/// First plausible publication year in `text`.
fn parse_year(text: &str) -> Option<i32> {
    YEAR.captures(text).and_then(|caps| caps[1].parse().ok())
}

fn field(entry: &Selection, selector: Option<&str>) -> Option<String> {
    let found = entry.select(selector?);
    found
        .iter()
        .map(|sel| dom::normalized_text(&sel))
        .find(|text| !text.is_empty())
}

fn all_fields(entry: &Selection, selector: Option<&str>) -> Vec<String> {
    let Some(selector) = selector else {
        return Vec::new();
    };
    entry
        .select(selector)
        .iter()
        .map(|sel| dom::normalized_text(&sel))
        .filter(|text| !text.is_empty())
        .collect()
}
