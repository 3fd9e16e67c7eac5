//! Result assembly.
//!
//! A [`Draft`] is opened as soon as an extractor has parsed the document. It
//! carries the page-level wall verdict, the head summary and the notes
//! gathered so far, and closes into an [`ExtractionResult`] either as a
//! failure ([`Draft::fail`]) or with content ([`Draft::finish`]).

use std::collections::BTreeMap;

use dom_query::Document;

use crate::confidence;
use crate::dom;
use crate::error::Error;
use crate::metadata;
use crate::options::Options;
use crate::result::{ExtractionResult, HeadMeta, HeadSummary, Reference, ResultMeta};
use crate::sections::Outline;
use crate::wall::{self, WallVerdict};

/// How the section outline was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStrategy {
    Structural,
    Textual,
}

impl TextStrategy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::Textual => "textual",
        }
    }
}

/// Cleaned article body.
#[derive(Debug, Clone)]
pub struct Body {
    pub html: String,
    pub text: String,
    pub hint: String,
    pub outline: Outline,
    pub strategy: TextStrategy,
    /// Paragraph-like blocks in the cleaned body.
    pub paragraphs: usize,
    /// Headings in the cleaned body.
    pub headings: usize,
}

/// Cleaned bibliography.
#[derive(Debug, Clone, Default)]
pub struct Bibliography {
    pub html: String,
    pub text: String,
    pub references: Vec<Reference>,
}

/// An extraction in progress.
#[derive(Debug, Clone)]
pub struct Draft {
    parser: &'static str,
    verdict: WallVerdict,
    head: HeadSummary,
    notes: Vec<String>,
}

impl Draft {
    /// Judge the page and summarize its head metadata.
    #[must_use]
    pub fn open(parser: &'static str, doc: &Document, head_meta: &HeadMeta, options: &Options) -> Self {
        let verdict = wall::detect(&dom::visible_text(doc), options);
        let head = metadata::summarize(&metadata::collect(doc, head_meta, options));
        let notes = verdict.notes();
        Self {
            parser,
            verdict,
            head,
            notes,
        }
    }

    #[must_use]
    pub fn verdict(&self) -> &WallVerdict {
        &self.verdict
    }

    /// Append a diagnostic note.
    pub fn note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    /// Close as a failure; the wall verdict and head summary are kept.
    #[must_use]
    pub fn fail(mut self, error: &Error) -> ExtractionResult {
        tracing::debug!(parser = self.parser, %error, "extraction failed");
        self.note(error.note());
        let mut result = ExtractionResult::failed(self.parser, String::new());
        result.notes = self.notes;
        result.quality = self.verdict.quality;
        result.blocked_reason = self.verdict.reason;
        result.meta.head = self.head;
        result
    }

    /// Close with content.
    ///
    /// `base` is the confidence base from the extractor's own calibration;
    /// bonuses and the blocked cap are applied here. Raw counts are added to
    /// `score_breakdown` unless the extractor already recorded them.
    #[must_use]
    pub fn finish(
        self,
        body: Body,
        bibliography: Bibliography,
        base: f64,
        mut score_breakdown: BTreeMap<String, f64>,
    ) -> ExtractionResult {
        let text_chars = body.text.chars().count();
        let confidence =
            confidence::score(base, text_chars, body.paragraphs, self.verdict.quality);

        score_breakdown
            .entry("text_chars".to_string())
            .or_insert(text_chars as f64);
        score_breakdown
            .entry("paragraph_count".to_string())
            .or_insert(body.paragraphs as f64);
        score_breakdown
            .entry("heading_count".to_string())
            .or_insert(body.headings as f64);
        score_breakdown.insert("confidence_base".to_string(), base);

        let sections = body.outline.sections;
        let references = bibliography.references;

        ExtractionResult {
            ok: true,
            parser: self.parser.to_string(),
            quality: self.verdict.quality,
            blocked_reason: self.verdict.reason,
            confidence,
            article_html: body.html,
            article_text: body.text,
            references_html: bibliography.html,
            references_text: bibliography.text,
            selected_hint: body.hint,
            score_breakdown,
            notes: self.notes,
            meta: ResultMeta {
                section_count: sections.len(),
                reference_count: references.len(),
                paragraph_count: body.paragraphs,
                heading_count: body.headings,
                family: self.parser.to_string(),
                text_strategy: body.strategy.as_str().to_string(),
                head: self.head,
                sections,
                references,
            },
        }
    }
}
