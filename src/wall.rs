//! Wall and quality detection.
//!
//! Scans the visible text of a whole page for cookie-consent, paywall and
//! bot-check vocabulary. The first matching signature in table order names
//! the wall; the text length then decides between `blocked` and
//! `suspicious`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use crate::options::Options;
use crate::result::{BlockedReason, Quality};

struct WallSignature {
    reason: BlockedReason,
    pattern: Regex,
}

fn signature(reason: BlockedReason, pattern: &str) -> WallSignature {
    WallSignature {
        reason,
        pattern: Regex::new(pattern).expect("wall signature regex"),
    }
}

/// Ordered signature table: cookie consent, then paywall / sign-in, then bot check.
static WALL_SIGNATURES: LazyLock<Vec<WallSignature>> = LazyLock::new(|| {
    use BlockedReason as R;
    vec![
        signature(
            R::CookieWall,
            r"(?i)\b(?:accept|allow|enable|manage)\s+(?:all\s+)?cookies\b|\bcookie\s+(?:consent|preferences|settings|policy)\b|\bwe\s+use\s+cookies\b|\bthis\s+(?:site|website)\s+uses\s+cookies\b",
        ),
        signature(
            R::Paywall,
            r"(?i)\b(?:subscribe|subscription)\s+(?:now\s+)?to\s+(?:continue|read|access|view)\b|\bsign\s*in\s+to\s+(?:continue|read|access|view)\b|\blog\s*in\s+to\s+(?:continue|read|access|view)\b|\bpurchase\s+(?:this\s+)?(?:article|access|pdf)\b|\bbuy\s+(?:this\s+)?article\b|\bget\s+(?:full\s+)?access\b|\baccess\s+through\s+your\s+institution\b|\byou\s+do\s+not\s+(?:currently\s+)?have\s+access\b",
        ),
        signature(
            R::BotBlock,
            r"(?i)\bare\s+you\s+a\s+robot\b|\bcaptcha\b|\bverify\s+(?:that\s+)?you\s+are\s+(?:a\s+)?human\b|\bunusual\s+traffic\b|\baccess\s+denied\b|\bchecking\s+your\s+browser\b|\bplease\s+enable\s+javascript\s+and\s+cookies\b|\brequest\s+(?:has\s+been\s+)?blocked\b",
        ),
    ]
});

/// Outcome of [`detect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallVerdict {
    pub quality: Quality,
    pub reason: BlockedReason,
    /// The text the winning signature matched, for diagnostics.
    pub matched: Option<String>,
}

impl WallVerdict {
    /// Diagnostic tokens: `wall:<reason>` when a wall matched, then `quality:<tier>`.
    #[must_use]
    pub fn notes(&self) -> Vec<String> {
        let mut notes = Vec::with_capacity(2);
        if self.matched.is_some() {
            notes.push(format!("wall:{}", self.reason.as_str()));
        }
        notes.push(format!("quality:{}", self.quality.as_str()));
        notes
    }
}

/// First wall signature matching `text`, with the matched span.
#[must_use]
pub fn find_wall(text: &str) -> Option<(BlockedReason, String)> {
    WALL_SIGNATURES.iter().find_map(|sig| {
        sig.pattern
            .find(text)
            .map(|m| (sig.reason, m.as_str().to_string()))
    })
}

/// Classify a page by its visible text.
#[must_use]
pub fn detect(text: &str, options: &Options) -> WallVerdict {
    let text = text.trim();
    if text.is_empty() {
        return WallVerdict {
            quality: Quality::Suspicious,
            reason: BlockedReason::Unknown,
            matched: None,
        };
    }

    let len = text.chars().count();
    let verdict = match find_wall(text) {
        Some((reason, matched)) => WallVerdict {
            quality: if len < options.wall_blocked_max_chars {
                Quality::Blocked
            } else {
                Quality::Suspicious
            },
            reason,
            matched: Some(matched),
        },
        None => WallVerdict {
            quality: if len < options.min_ok_chars {
                Quality::Suspicious
            } else {
                Quality::Ok
            },
            reason: BlockedReason::None,
            matched: None,
        },
    };

    if verdict.matched.is_some() {
        tracing::debug!(
            reason = verdict.reason.as_str(),
            quality = verdict.quality.as_str(),
            chars = len,
            "wall signature matched"
        );
    }
    verdict
}
