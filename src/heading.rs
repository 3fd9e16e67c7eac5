//! Heading classification taxonomy.
//!
//! Maps heading text to canonical section kinds. Classification is a pure
//! function of the heading text after outline numbering is stripped, and is
//! insensitive to case and surrounding whitespace.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use crate::patterns::HEADING_NUMBER;
use crate::result::SectionKind;

/// A heading split into its numbering and title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeading {
    /// Outline label ("3.2", "II", "A"), if the heading carried one.
    pub number: Option<String>,
    /// Title with numbering and surrounding whitespace removed.
    pub title: String,
    /// Primary kind.
    pub kind: SectionKind,
    /// Expanded kinds; combined headings map to more than one.
    pub kinds: Vec<SectionKind>,
}

struct HeadingRule {
    pattern: Regex,
    kinds: &'static [SectionKind],
}

fn rule(pattern: &str, kinds: &'static [SectionKind]) -> HeadingRule {
    HeadingRule {
        pattern: Regex::new(pattern).expect("heading rule regex"),
        kinds,
    }
}

/// Ordered rule table. The combined results/discussion rule precedes the
/// single-kind rules so it is not shadowed by `results`.
static HEADING_RULES: LazyLock<Vec<HeadingRule>> = LazyLock::new(|| {
    use SectionKind as K;
    vec![
        rule(
            r"(?i)^results?\s*(?:and|&)\s*discussions?\b",
            &[K::Results, K::Discussion],
        ),
        rule(r"(?i)^(?:graphical\s+)?abstract\b|^summary$", &[K::Abstract]),
        rule(r"(?i)^key\s*-?\s*words?\b", &[K::Keywords]),
        rule(r"(?i)^(?:introduction|background)\b", &[K::Introduction]),
        rule(
            r"(?i)^(?:materials?\s*(?:and|&)\s*methods?|methods?|methodology|materials?|experimental\s+procedures?)\b",
            &[K::Methods],
        ),
        rule(r"(?i)^results?\b", &[K::Results]),
        rule(r"(?i)^discussions?\b", &[K::Discussion]),
        rule(r"(?i)^(?:conclusions?|concluding\s+remarks)\b", &[K::Conclusion]),
        rule(
            r"(?i)^(?:references?|bibliography|works\s+cited|literature\s+cited|cited\s+literature)\b",
            &[K::References],
        ),
        rule(r"(?i)^acknowledge?ments?\b", &[K::Acknowledgements]),
        rule(r"(?i)^(?:funding|financial\s+support|grant\s+support)\b", &[K::Funding]),
        rule(
            r"(?i)^(?:conflicts?\s+of\s+interests?|competing\s+interests?|declaration\s+of\s+(?:competing|conflicting)\s+interests?|disclosures?)\b",
            &[K::Conflicts],
        ),
        rule(
            r"(?i)^(?:authors?'?\s+contributions?|contributions?\s+of\s+the\s+authors|credit\s+authorship)\b",
            &[K::AuthorContributions],
        ),
    ]
});

/// Split leading outline numbering from a heading.
///
/// Returns `(number, title)`; `number` is `None` when the heading carried no
/// numbering or when stripping it would leave an empty title.
#[must_use]
pub fn strip_numbering(text: &str) -> (Option<String>, String) {
    let text = crate::dom::collapse_whitespace(text);
    if let Some(caps) = HEADING_NUMBER.captures(&text) {
        let title = caps[3].trim().to_string();
        if let Some(label) = caps.get(1).or_else(|| caps.get(2)) {
            if !title.is_empty() {
                return (Some(label.as_str().to_string()), title);
            }
        }
    }
    (None, text)
}

/// Classify a title (already stripped of numbering) into kinds.
#[must_use]
pub fn classify_title(title: &str) -> Vec<SectionKind> {
    let title = title.trim();
    HEADING_RULES
        .iter()
        .find(|rule| rule.pattern.is_match(title))
        .map_or_else(|| vec![SectionKind::Other], |rule| rule.kinds.to_vec())
}

/// Parse a raw heading: strip numbering, then classify.
///
/// # Example
///
/// ```rust
/// use rs_scholarly::heading::parse_heading;
/// use rs_scholarly::SectionKind;
///
/// let heading = parse_heading("  3.2 Materials and Methods ");
/// assert_eq!(heading.number.as_deref(), Some("3.2"));
/// assert_eq!(heading.title, "Materials and Methods");
/// assert_eq!(heading.kind, SectionKind::Methods);
/// ```
#[must_use]
pub fn parse_heading(text: &str) -> ParsedHeading {
    let (number, title) = strip_numbering(text);
    let kinds = classify_title(&title);
    let kind = kinds.first().copied().unwrap_or_default();
    ParsedHeading { number, title, kind, kinds }
}

/// Primary kind of a raw heading.
#[must_use]
pub fn classify(text: &str) -> SectionKind {
    parse_heading(text).kind
}
