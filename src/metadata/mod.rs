//! Head Metadata
//!
//! Combines caller-supplied head metadata with the scholarly meta tags found
//! in the document, and reduces the result to a [`HeadSummary`].

pub mod meta_tags;

use dom_query::Document;

use crate::options::Options;
use crate::references::doi;
use crate::result::{HeadMeta, HeadSummary};

pub use meta_tags::{harvest, merge, parse_meta_date};

const TITLE_KEYS: &[&str] = &["citation_title", "dc.title"];
const DOI_KEYS: &[&str] = &["citation_doi", "prism.doi", "dc.identifier"];
const JOURNAL_KEYS: &[&str] = &["citation_journal_title", "prism.publicationname"];
const PUBLISHER_KEYS: &[&str] = &["citation_publisher", "dc.publisher"];
const DATE_KEYS: &[&str] = &[
    "citation_publication_date",
    "citation_date",
    "citation_online_date",
    "prism.publicationdate",
    "dc.date",
    "dcterms.issued",
];
const AUTHOR_KEYS: &[&str] = &["citation_author", "dc.creator"];

/// Effective head metadata for one document.
#[must_use]
pub fn collect(doc: &Document, client: &HeadMeta, options: &Options) -> HeadMeta {
    if options.use_document_meta {
        merge(client, harvest(doc))
    } else {
        merge(client, HeadMeta::new())
    }
}

/// Normalized summary of head metadata.
#[must_use]
pub fn summarize(meta: &HeadMeta) -> HeadSummary {
    let first = |keys: &[&str]| {
        keys.iter()
            .filter_map(|k| meta.get(*k))
            .flat_map(|v| v.values())
            .map(str::trim)
            .find(|v| !v.is_empty())
            .map(str::to_string)
    };

    let doi = DOI_KEYS
        .iter()
        .filter_map(|k| meta.get(*k))
        .flat_map(|v| v.values())
        .find_map(doi::normalize);

    let published = DATE_KEYS
        .iter()
        .filter_map(|k| meta.get(*k))
        .flat_map(|v| v.values())
        .find_map(parse_meta_date)
        .map(|d| d.format("%Y-%m-%d").to_string());

    let authors = AUTHOR_KEYS
        .iter()
        .find_map(|k| meta.get(*k))
        .map(|v| {
            v.values()
                .into_iter()
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    HeadSummary {
        title: first(TITLE_KEYS),
        doi,
        journal: first(JOURNAL_KEYS),
        publisher: first(PUBLISHER_KEYS),
        published,
        authors,
        pdf_url: first(&["citation_pdf_url"]),
    }
}
