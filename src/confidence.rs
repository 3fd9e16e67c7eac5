//! Confidence scoring.
//!
//! Confidence is derived from signals already present on the result: the
//! generic scorer's total, or the article text length for publisher paths,
//! plus length and paragraph bonuses. The only override is the cap applied
//! to blocked pages.

use crate::result::Quality;

/// One length tier of a publisher's calibration table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub min_chars: usize,
    pub confidence: f64,
}

/// Base confidence for non-empty text below every tier.
pub const BELOW_TIERS: f64 = 0.35;

/// Ceiling for blocked pages.
pub const BLOCKED_CAP: f64 = 0.2;

/// Divisor that maps a generic score total onto `[0, 1]`.
pub const GENERIC_TOTAL_SCALE: f64 = 12.5;

/// Weight of the normalized generic total in the base.
pub const GENERIC_WEIGHT: f64 = 0.8;

const TEXT_BONUS_CHARS: usize = 2500;
const PARAGRAPH_BONUS_COUNT: usize = 8;
const BONUS: f64 = 0.05;

/// Base from a tier table ordered by descending `min_chars`.
#[must_use]
pub fn tier_base(tiers: &[Tier], text_chars: usize) -> f64 {
    if text_chars == 0 {
        return 0.0;
    }
    tiers
        .iter()
        .find(|tier| text_chars >= tier.min_chars)
        .map_or(BELOW_TIERS, |tier| tier.confidence)
}

/// Base from the generic scorer's weighted total.
#[must_use]
pub fn generic_base(total: f64) -> f64 {
    GENERIC_WEIGHT * (total / GENERIC_TOTAL_SCALE).clamp(0.0, 1.0)
}

/// Final confidence: base plus bonuses, capped for blocked pages, clamped to `[0, 1]`.
#[must_use]
pub fn score(base: f64, text_chars: usize, paragraph_count: usize, quality: Quality) -> f64 {
    let mut confidence = if base.is_finite() { base } else { 0.0 };
    if text_chars >= TEXT_BONUS_CHARS {
        confidence += BONUS;
    }
    if paragraph_count >= PARAGRAPH_BONUS_COUNT {
        confidence += BONUS;
    }
    if quality == Quality::Blocked {
        confidence = confidence.min(BLOCKED_CAP);
    }
    confidence.clamp(0.0, 1.0)
}
