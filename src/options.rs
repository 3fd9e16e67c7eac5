//! Configuration options for article extraction.
//!
//! The `Options` struct carries the tunable thresholds used by the noise
//! stripper, the wall detector and the textual sectionizer. Publisher
//! confidence tiers are calibration constants and live with each extractor.

use serde::Deserialize;

/// Configuration options for article extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings. The struct deserializes with missing fields taking
/// their defaults, so a partial JSON object is a valid configuration.
///
/// # Example
///
/// ```rust
/// use rs_scholarly::Options;
///
/// let options = Options {
///     noise_text_threshold: 150,
///     generic_fallback: false,
///     ..Options::default()
/// };
/// assert_eq!(options.wall_blocked_max_chars, 4000);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Elements matched only by a class/id fragment are removed when their
    /// own text is shorter than this many characters.
    ///
    /// Default: `300`
    pub noise_text_threshold: usize,

    /// A matched wall signature blocks the page when the visible text is
    /// shorter than this. Longer pages are marked suspicious instead.
    ///
    /// Default: `4000`
    pub wall_blocked_max_chars: usize,

    /// Pages without a wall but with less visible text than this are
    /// marked suspicious.
    ///
    /// Default: `800`
    pub min_ok_chars: usize,

    /// Retry with the generic extractor when a publisher extractor yields
    /// no usable content.
    ///
    /// Default: `true`
    pub generic_fallback: bool,

    /// Maximum words in a line for it to count as a textual heading.
    ///
    /// Default: `16`
    pub max_heading_words: usize,

    /// Minimum characters in a textual heading line.
    ///
    /// Default: `3`
    pub min_heading_chars: usize,

    /// Maximum characters in a textual heading line.
    ///
    /// Default: `220`
    pub max_heading_chars: usize,

    /// Locate and parse the bibliography.
    ///
    /// Default: `true`
    pub extract_references: bool,

    /// Harvest `citation_*`, `dc.*` and `prism.*` meta tags from the document
    /// and merge them under the caller-supplied head metadata.
    ///
    /// Default: `true`
    pub use_document_meta: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            noise_text_threshold: 300,
            wall_blocked_max_chars: 4000,
            min_ok_chars: 800,
            generic_fallback: true,
            max_heading_words: 16,
            min_heading_chars: 3,
            max_heading_chars: 220,
            extract_references: true,
            use_document_meta: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let opts = Options::default();

        assert_eq!(opts.noise_text_threshold, 300);
        assert_eq!(opts.wall_blocked_max_chars, 4000);
        assert_eq!(opts.min_ok_chars, 800);
        assert!(opts.generic_fallback);
        assert_eq!(opts.max_heading_words, 16);
        assert_eq!(opts.min_heading_chars, 3);
        assert_eq!(opts.max_heading_chars, 220);
        assert!(opts.extract_references);
        assert!(opts.use_document_meta);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let opts: Options =
            serde_json::from_str(r#"{"min_ok_chars": 1200, "generic_fallback": false}"#)
                .unwrap();

        assert_eq!(opts.min_ok_chars, 1200);
        assert!(!opts.generic_fallback);
        assert_eq!(opts.wall_blocked_max_chars, 4000);
        assert_eq!(opts.noise_text_threshold, 300);
    }

    #[test]
    fn test_custom_thresholds() {
        let opts = Options {
            noise_text_threshold: 50,
            max_heading_words: 8,
            ..Options::default()
        };

        assert_eq!(opts.noise_text_threshold, 50);
        assert_eq!(opts.max_heading_words, 8);
        assert_eq!(opts.max_heading_chars, 220);
    }
}
