//! Sectionization
//!
//! Two strategies produce the same [`Section`] outline:
//!
//! - [`structural`] walks `h2`–`h4` headings inside one or more content
//!   roots and assigns the paragraph-like blocks between them.
//! - [`textual`] splits flattened text into lines and detects heading-shaped
//!   lines. It is the fallback when a root carries no heading markup.
//!
//! Both feed a [`SectionBuilder`], which owns id assignment, the stack of
//! open sections used for `parent_id`, and per-section paragraph
//! de-duplication. A section's text runs to the next heading of equal or
//! shallower level.

pub mod structural;
pub mod textual;

use crate::heading::ParsedHeading;
use crate::lru::{self, LruCache, SECTION_DEDUP_CAPACITY};
use crate::result::Section;

/// Lowest outline level a section may carry.
pub const MIN_LEVEL: u8 = 2;

/// Highest outline level a section may carry.
pub const MAX_LEVEL: u8 = 6;

/// Output of either sectionizer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    pub sections: Vec<Section>,
    /// Paragraph-like blocks seen, including text before the first heading.
    pub paragraphs: usize,
    /// Headings that opened a section.
    pub headings: usize,
}

impl Outline {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

struct OpenSection {
    /// Position in `SectionBuilder::sections`.
    index: usize,
    level: u8,
    parts: Vec<String>,
    dedup: LruCache,
    /// A blank line (or a subsection heading) was seen since the last
    /// appended line.
    break_pending: bool,
}

/// Incremental section assembly in document order.
///
/// A section collects every block up to the next heading of equal or
/// shallower level, so an open ancestor also receives its subsections' text.
pub struct SectionBuilder {
    /// Every section opened so far, in id order; text is filled on close.
    sections: Vec<Section>,
    /// Open sections, shallowest first. Levels strictly increase.
    open: Vec<OpenSection>,
    paragraphs: usize,
    headings: usize,
}

impl Default for SectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            open: Vec::new(),
            paragraphs: 0,
            headings: 0,
        }
    }

    /// Start a new section, closing open sections at the same or a deeper level.
    pub fn open(&mut self, heading: ParsedHeading, level: u8) {
        let level = level.clamp(MIN_LEVEL, MAX_LEVEL);
        self.close_to(level);

        let id = format!("s{:02}", self.sections.len() + 1);
        let parent_id = self
            .open
            .last()
            .and_then(|parent| self.sections.get(parent.index))
            .map(|parent| parent.id.clone());
        for ancestor in &mut self.open {
            ancestor.break_pending = !ancestor.parts.is_empty();
        }
        self.headings += 1;

        self.sections.push(Section {
            id,
            title: heading.title,
            kind: heading.kind,
            kinds: heading.kinds,
            level,
            number: heading.number,
            parent_id,
            text: String::new(),
        });
        self.open.push(OpenSection {
            index: self.sections.len() - 1,
            level,
            parts: Vec::new(),
            dedup: LruCache::new(SECTION_DEDUP_CAPACITY),
            break_pending: false,
        });
    }

    /// Open a section that already carries its text, then close every open
    /// section.
    ///
    /// Text that follows it before the next heading is not assigned to any
    /// section.
    pub fn one_line(&mut self, heading: ParsedHeading, level: u8, text: &str) {
        self.open(heading, level);
        self.paragraph(text);
        self.close_to(MIN_LEVEL);
    }

    /// Append a paragraph to every open section, skipping repeats per section.
    pub fn paragraph(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.paragraphs += 1;
        for open in &mut self.open {
            if lru::first_sighting(&mut open.dedup, text) {
                open.parts.push(text.to_string());
            }
        }
    }

    /// Append a line of running text to every open section; a preceding
    /// blank line becomes one paragraph break.
    pub fn line(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let Some(innermost) = self.open.last() else {
            return;
        };
        if innermost.parts.is_empty() || innermost.break_pending {
            self.paragraphs += 1;
        }
        for open in &mut self.open {
            if open.break_pending && !open.parts.is_empty() {
                open.parts.push(String::new());
            }
            open.break_pending = false;
            open.parts.push(text.to_string());
        }
    }

    /// Record a blank line.
    pub fn blank(&mut self) {
        for open in &mut self.open {
            open.break_pending = !open.parts.is_empty();
        }
    }

    /// Close open sections whose level is `level` or deeper.
    fn close_to(&mut self, level: u8) {
        while self.open.last().is_some_and(|open| open.level >= level) {
            if let Some(open) = self.open.pop() {
                if let Some(section) = self.sections.get_mut(open.index) {
                    section.text = open.parts.join("\n");
                }
            }
        }
    }

    /// Close every open section and return the outline.
    #[must_use]
    pub fn finish(mut self) -> Outline {
        self.close_to(MIN_LEVEL);
        Outline {
            sections: self.sections,
            paragraphs: self.paragraphs,
            headings: self.headings,
        }
    }
}
