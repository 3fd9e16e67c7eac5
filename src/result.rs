//! Result types for extraction output.
//!
//! `ExtractionResult` is the only value the engine hands to its callers. It
//! is always fully populated: optional content is an empty string or list,
//! never a missing field.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Trust tier of an extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    /// Content looks like a genuine article.
    #[default]
    Ok,
    /// Content exists but is short or shares the page with a wall.
    Suspicious,
    /// A paywall, cookie wall or bot check replaced the content.
    Blocked,
}

impl Quality {
    /// Tag used in notes and serialized output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Suspicious => "suspicious",
            Self::Blocked => "blocked",
        }
    }
}

/// Why a page was flagged by the wall detector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockedReason {
    /// No wall detected.
    #[default]
    None,
    /// Cookie-consent interstitial.
    CookieWall,
    /// Subscription or sign-in wall.
    Paywall,
    /// Bot check / captcha / access denied.
    BotBlock,
    /// No text at all to judge.
    Unknown,
}

impl BlockedReason {
    /// Tag used in notes and serialized output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::CookieWall => "cookie_wall",
            Self::Paywall => "paywall",
            Self::BotBlock => "bot_block",
            Self::Unknown => "unknown",
        }
    }
}

/// Canonical section kind from the heading taxonomy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Abstract,
    Keywords,
    Introduction,
    Methods,
    Results,
    Discussion,
    Conclusion,
    References,
    Acknowledgements,
    Funding,
    Conflicts,
    AuthorContributions,
    #[default]
    Other,
}

impl SectionKind {
    /// Snake-case tag for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Abstract => "abstract",
            Self::Keywords => "keywords",
            Self::Introduction => "introduction",
            Self::Methods => "methods",
            Self::Results => "results",
            Self::Discussion => "discussion",
            Self::Conclusion => "conclusion",
            Self::References => "references",
            Self::Acknowledgements => "acknowledgements",
            Self::Funding => "funding",
            Self::Conflicts => "conflicts",
            Self::AuthorContributions => "author_contributions",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One titled section of the article outline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// `s01`, `s02`, ... in document order.
    pub id: String,
    /// Heading text with outline numbering removed.
    pub title: String,
    /// Primary kind.
    pub kind: SectionKind,
    /// All kinds the heading maps to (`[results, discussion]` for combined headings).
    pub kinds: Vec<SectionKind>,
    /// Outline depth, always >= 2.
    pub level: u8,
    /// Dotted outline number stripped from the title ("3.2").
    pub number: Option<String>,
    /// Nearest enclosing section with a strictly smaller level.
    pub parent_id: Option<String>,
    /// De-duplicated paragraph text, newline-joined.
    pub text: String,
}

/// One bibliography entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Full visible citation text with numbering label removed.
    pub raw: String,
    /// Numbering label removed from `raw` ("12", "[3]").
    pub label: Option<String>,
    /// Normalized, lower-cased DOI.
    pub doi: Option<String>,
    /// PubMed link.
    pub pubmed: Option<String>,
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub issued_year: Option<i32>,
    pub container_title: Option<String>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub pages: Option<String>,
}

/// A head-metadata value: a single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    One(String),
    Many(Vec<String>),
}

impl MetaValue {
    /// First value, if any.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::One(s) => Some(s.as_str()),
            Self::Many(v) => v.first().map(String::as_str),
        }
    }

    /// All values in order.
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::One(s) => vec![s.as_str()],
            Self::Many(v) => v.iter().map(String::as_str).collect(),
        }
    }

    /// Append a value, promoting a single value to a list.
    pub fn push(&mut self, value: String) {
        match self {
            Self::One(existing) => {
                let first = std::mem::take(existing);
                *self = Self::Many(vec![first, value]);
            }
            Self::Many(v) => v.push(value),
        }
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

/// Head metadata keyed by lower-cased meta name.
pub type HeadMeta = BTreeMap<String, MetaValue>;

/// Normalized summary of the article's head metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadSummary {
    pub title: Option<String>,
    pub doi: Option<String>,
    pub journal: Option<String>,
    pub publisher: Option<String>,
    /// ISO-8601 date (`YYYY-MM-DD`).
    pub published: Option<String>,
    pub authors: Vec<String>,
    pub pdf_url: Option<String>,
}

/// Structured payload carried alongside the text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultMeta {
    pub sections: Vec<Section>,
    pub references: Vec<Reference>,
    pub section_count: usize,
    pub reference_count: usize,
    pub paragraph_count: usize,
    pub heading_count: usize,
    /// Publisher family the router chose for the URL.
    pub family: String,
    /// `structural`, `textual` or `none`.
    pub text_strategy: String,
    pub head: HeadSummary,
}

/// Result of extracting one captured page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Whether usable content was produced.
    pub ok: bool,
    /// Extractor that produced this result.
    pub parser: String,
    pub quality: Quality,
    pub blocked_reason: BlockedReason,
    /// Reliability of `article_text` in `[0, 1]`.
    pub confidence: f64,
    pub article_html: String,
    pub article_text: String,
    pub references_html: String,
    pub references_text: String,
    /// Which selector or strategy located the body.
    pub selected_hint: String,
    /// Named scoring features of the chosen candidate.
    pub score_breakdown: BTreeMap<String, f64>,
    /// Diagnostic tokens in the order they were produced.
    pub notes: Vec<String>,
    pub meta: ResultMeta,
}

impl ExtractionResult {
    /// A well-formed failure with a single note.
    #[must_use]
    pub fn failed(parser: &str, note: impl Into<String>) -> Self {
        Self {
            ok: false,
            parser: parser.to_string(),
            quality: Quality::Suspicious,
            blocked_reason: BlockedReason::Unknown,
            notes: vec![note.into()],
            meta: ResultMeta {
                family: parser.to_string(),
                text_strategy: "none".to_string(),
                ..ResultMeta::default()
            },
            ..Self::default()
        }
    }

    /// True when neither the HTML nor the text body carries content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.article_html.trim().is_empty() && self.article_text.trim().is_empty()
    }
}
