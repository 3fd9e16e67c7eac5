//! HTML Meta Tag Harvesting
//!
//! Scholarly platforms describe the article in Highwire (`citation_*`),
//! Dublin Core (`dc.*`, `dcterms.*`) and PRISM (`prism.*`) meta tags. They
//! are collected into a [`HeadMeta`] map keyed by the lower-cased name;
//! repeated names (one `citation_author` per author) become lists.

use chrono::NaiveDate;
use dom_query::{Document, Selection};

use crate::dom;
use crate::result::{HeadMeta, MetaValue};

/// Meta name prefixes worth keeping.
const SCHOLARLY_PREFIXES: &[&str] = &["citation_", "dc.", "dcterms.", "prism."];

/// Collect scholarly meta tags from the document.
#[must_use]
pub fn harvest(doc: &Document) -> HeadMeta {
    let mut meta = HeadMeta::new();

    for node in doc.select("meta").nodes() {
        let tag = Selection::from(*node);

        let name = dom::get_attribute(&tag, "name")
            .or_else(|| dom::get_attribute(&tag, "property"))
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        if !SCHOLARLY_PREFIXES.iter().any(|p| name.starts_with(p)) {
            continue;
        }

        let content = dom::collapse_whitespace(&dom::get_attribute(&tag, "content").unwrap_or_default());
        if content.is_empty() {
            continue;
        }

        match meta.get_mut(&name) {
            Some(existing) => existing.push(content),
            None => {
                meta.insert(name, MetaValue::One(content));
            }
        }
    }

    meta
}

/// Merge caller-supplied metadata over harvested metadata; the caller wins
/// key by key.
#[must_use]
pub fn merge(client: &HeadMeta, harvested: HeadMeta) -> HeadMeta {
    let mut merged = harvested;
    for (key, value) in client {
        merged.insert(key.trim().to_lowercase(), value.clone());
    }
    merged
}

/// Parse a publication date as written in scholarly meta tags.
///
/// Accepts `YYYY`, `YYYY/MM`, `YYYY-MM`, `YYYY/MM/DD` and `YYYY-MM-DD`, with an
/// optional time part after `T` or a space. Missing month or day default to 1.
#[must_use]
pub fn parse_meta_date(date_str: &str) -> Option<NaiveDate> {
    let date_str = date_str.trim();
    let date_part = date_str
        .split(['T', ' '])
        .next()
        .unwrap_or(date_str);

    // Full dates
    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(date_part, fmt) {
            return Some(date);
        }
    }

    // Year and month, or year alone
    let parts: Vec<&str> = date_part.split(['-', '/']).collect();
    let year: i32 = parts.first()?.parse().ok()?;
    if !(1000..=9999).contains(&year) {
        return None;
    }
    match parts.as_slice() {
        [_] => NaiveDate::from_ymd_opt(year, 1, 1),
        [_, month] => NaiveDate::from_ymd_opt(year, month.parse().ok()?, 1),
        _ => None,
    }
}
