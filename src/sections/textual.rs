//! Textual sectionization: heading detection over flattened text lines.

use super::{Outline, SectionBuilder, MIN_LEVEL};
use crate::heading::{parse_heading, ParsedHeading};
use crate::options::Options;
use crate::patterns::KEYWORDS_LINE;
use crate::result::SectionKind;

/// Words that open narrative sentences rather than headings.
const NARRATIVE_WORDS: &[&str] = &[
    "this", "these", "we", "our", "however", "here", "it", "there", "thus", "therefore",
    "moreover", "furthermore", "although", "because",
];

/// Punctuation allowed in a heading besides letters, digits and spaces.
const HEADING_PUNCTUATION: &[char] = &['-', '–', '—', ':', '&', ',', '\'', '’', '(', ')', '/', '.'];

/// Split flattened text into sections.
#[must_use]
pub fn sectionize(text: &str, options: &Options) -> Outline {
    let mut builder = SectionBuilder::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            builder.blank();
            continue;
        }

        if let Some(caps) = KEYWORDS_LINE.captures(line) {
            let heading = ParsedHeading {
                number: None,
                title: "Keywords".to_string(),
                kind: SectionKind::Keywords,
                kinds: vec![SectionKind::Keywords],
            };
            builder.one_line(heading, MIN_LEVEL, &caps[1]);
            continue;
        }

        if is_heading_line(line, options) {
            let heading = parse_heading(line);
            let level = number_level(heading.number.as_deref());
            builder.open(heading, level);
            continue;
        }

        builder.line(line);
    }

    builder.finish()
}

/// Whether a trimmed line looks like a section heading.
#[must_use]
pub fn is_heading_line(line: &str, options: &Options) -> bool {
    let len = line.chars().count();
    if len < options.min_heading_chars || len > options.max_heading_chars {
        return false;
    }
    if line.ends_with(['.', '!', '?', ';', ',']) {
        return false;
    }

    let Some(first) = line.chars().next() else {
        return false;
    };
    if !(first.is_uppercase() || first.is_ascii_digit()) {
        return false;
    }
    if !line
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || HEADING_PUNCTUATION.contains(&c))
    {
        return false;
    }
    if !line.chars().any(char::is_alphabetic) {
        return false;
    }
    if line.split_whitespace().count() > options.max_heading_words {
        return false;
    }

    let (_, title) = crate::heading::strip_numbering(line);
    let first_word = title
        .split_whitespace()
        .next()
        .map(str::to_lowercase)
        .unwrap_or_default();
    !NARRATIVE_WORDS.contains(&first_word.as_str())
}

/// Outline level from dotted numbering depth: `3` → 2, `3.2` → 3.
fn number_level(number: Option<&str>) -> u8 {
    let depth = number.map_or(0, |n| n.split('.').filter(|p| !p.is_empty()).count());
    let level = u8::try_from(depth.saturating_add(1)).unwrap_or(u8::MAX);
    level.max(MIN_LEVEL)
}
