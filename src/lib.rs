//! # rs-scholarly
//!
//! Scholarly article extraction and sectionization from captured publisher
//! HTML.
//!
//! Given a page URL, its rendered HTML and optional head metadata, the
//! library produces one [`ExtractionResult`]: a cleaned article body, a
//! hierarchy of titled sections with a classified kind, a bibliography with
//! normalized identifiers, and a quality/confidence assessment.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_scholarly::{extract, HeadMeta, SectionKind};
//!
//! let html = r#"<html><body><article>
//!   <h2>1. Introduction</h2><p>Seagrass meadows are declining worldwide.</p>
//!   <h2>2. Methods</h2><p>We surveyed forty sites.</p>
//! </article></body></html>"#;
//!
//! let result = extract("https://example.org/paper", html, &HeadMeta::new());
//! assert!(result.ok);
//! assert_eq!(result.parser, "generic");
//! assert_eq!(result.meta.sections[1].kind, SectionKind::Methods);
//! assert_eq!(result.meta.sections[1].number.as_deref(), Some("2"));
//! ```
//!
//! ## Features
//!
//! - **Site Routing**: PMC, Oxford Academic, Wiley and ScienceDirect pages get
//!   dedicated extractors; everything else goes through candidate scoring
//! - **Sectionization**: Heading hierarchy with a canonical kind taxonomy,
//!   with a text-only fallback for pages without heading markup
//! - **References**: Bibliography entries with DOI and PubMed identifiers
//! - **Quality**: Cookie, paywall and bot walls are detected and cap confidence
//!
//! Extraction never fails: every problem becomes an `ok = false` result or a
//! diagnostic token in `notes`.

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Element tree utilities with text/tail model support.
pub mod etree;

/// LRU cache for paragraph de-duplication.
pub mod lru;

/// Selector cascades.
pub mod selector;

/// Link density measurement.
pub mod link_density;

/// Heading classification taxonomy.
pub mod heading;

/// Noise stripping for cloned subtrees.
pub mod noise;

/// Wall and quality detection.
pub mod wall;

/// Structural and textual sectionization.
pub mod sections;

/// Bibliography entry extraction and DOI normalization.
pub mod references;

/// Confidence scoring.
pub mod confidence;

/// Head metadata harvesting and summary.
pub mod metadata;

/// Character encoding detection and transcoding.
pub mod encoding;

/// URL parsing and proxy host canonicalization.
pub mod url_utils;

/// Generic and publisher extractors.
pub mod extractor;

/// URL to extractor routing.
pub mod router;

use std::sync::LazyLock;

// Public API - re-exports
pub use error::{Error, Result};
pub use extractor::Extractor;
pub use options::Options;
pub use result::{
    BlockedReason, ExtractionResult, HeadMeta, HeadSummary, MetaValue, Quality, Reference,
    ResultMeta, Section, SectionKind,
};
pub use router::{Family, Router};

static DEFAULT_ROUTER: LazyLock<Router> = LazyLock::new(Router::new);

/// Extracts an article using the built-in routes and default options.
///
/// # Arguments
///
/// * `url` - Page URL, used only for routing
/// * `html` - Rendered page HTML
/// * `head_meta` - Caller-captured head metadata; wins over tags harvested
///   from the document
#[must_use]
pub fn extract(url: &str, html: &str, head_meta: &HeadMeta) -> ExtractionResult {
    extract_with_options(url, html, head_meta, &Options::default())
}

/// Extracts an article with custom options.
///
/// # Example
///
/// ```rust
/// use rs_scholarly::{extract_with_options, HeadMeta, Options};
///
/// let options = Options {
///     extract_references: false,
///     ..Options::default()
/// };
/// let html = "<html><body><main><p>Body text.</p></main></body></html>";
/// let result = extract_with_options("https://example.org/", html, &HeadMeta::new(), &options);
/// assert!(result.meta.references.is_empty());
/// ```
#[must_use]
pub fn extract_with_options(url: &str, html: &str, head_meta: &HeadMeta, options: &Options) -> ExtractionResult {
    DEFAULT_ROUTER.extract(url, html, head_meta, options)
}

/// Extracts an article from raw bytes with automatic encoding detection.
///
/// The encoding comes from a byte order mark or a `<meta charset>`
/// declaration in the first kilobyte, defaulting to UTF-8. Invalid sequences
/// become U+FFFD.
///
/// # Example
///
/// ```rust
/// use rs_scholarly::{extract_bytes, HeadMeta};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><article><p>Caf\xE9 culture</p></article></body></html>";
/// let result = extract_bytes("https://example.org/", html, &HeadMeta::new());
/// assert!(result.article_text.contains("Café"));
/// ```
#[must_use]
pub fn extract_bytes(url: &str, html: &[u8], head_meta: &HeadMeta) -> ExtractionResult {
    let html = encoding::transcode_to_utf8(html);
    extract(url, &html, head_meta)
}
