//! Compiled regex patterns shared across the extraction pipeline.
//!
//! All patterns are compiled once on first use with `LazyLock` and never
//! modified afterwards. Component-specific tables (wall signatures, heading
//! rules, the route table) live next to the component that owns them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Leading outline label followed by the heading title: a dotted number
/// (group 1) or a Roman numeral or single capital letter with a mandatory
/// trailing dot (group 2). The title is group 3.
///
/// Components are capped at three digits so that years ("2020 census data")
/// are never mistaken for numbering.
pub static HEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d{1,3}(?:\.\d{1,3})*)\.?|([IVXLC]{1,7}|[A-Z])\.)\s+(\S.*)$")
        .expect("HEADING_NUMBER regex")
});

/// Inline keywords line ("Keywords: a; b; c").
pub static KEYWORDS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*key\s*-?\s*words?\s*[:—–-]\s*(\S.*)$").expect("KEYWORDS_LINE regex")
});

// =============================================================================
// Identifier Patterns
// =============================================================================

/// A DOI anywhere in text or an href. Stops at URL query and fragment
/// delimiters.
pub static DOI_IN_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(10\.\d{4,9}/[^\s"<>&?#]+)"#).expect("DOI_IN_TEXT regex")
});

/// Resolver or scheme prefix in front of a DOI.
pub static DOI_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?://(?:dx\.)?doi\.org/|doi\.org/|doi:\s*|doi\s+)")
        .expect("DOI_PREFIX regex")
});

/// PubMed record link (new and legacy hosts).
pub static PUBMED_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:pubmed\.ncbi\.nlm\.nih\.gov|ncbi\.nlm\.nih\.gov/pubmed)/(\d+)")
        .expect("PUBMED_LINK regex")
});

/// Four-digit publication year.
pub static YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b((?:19|20)\d{2})[a-z]?\b").expect("YEAR regex")
});

// =============================================================================
// Reference Label Patterns
// =============================================================================

/// Bracketed, parenthesized or dotted numbering label at the start of an entry.
pub static REF_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:\[(\d{1,4})\]|\((\d{1,4})\)|(\d{1,4})[.)])\s*")
        .expect("REF_LABEL regex")
});

/// Bare number followed by an upper-case word ("12 Smith J, ...").
pub static REF_BARE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,3})\s+\p{Lu}").expect("REF_BARE_LABEL regex")
});

// =============================================================================
// Content Identification Patterns
// =============================================================================

/// Section vocabulary that marks a container as article-like.
pub static SECTION_VOCABULARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(abstract|introduction|background|materials and methods|methods|methodology|results|discussion|conclusions?|references)\b",
    )
    .expect("SECTION_VOCABULARY regex")
});
