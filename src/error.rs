//! Error types for rs-scholarly.
//!
//! Errors never escape the public extraction API. Internal steps return
//! [`Result`] and the enclosing extractor turns each error into a diagnostic
//! note on the [`ExtractionResult`](crate::ExtractionResult).

/// Error type for internal extraction steps.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The supplied HTML was empty or whitespace only.
    #[error("empty HTML document")]
    EmptyDocument,

    /// Every selector in a cascade failed to match.
    #[error("{family}: no match in {cascade} cascade")]
    CascadeMiss {
        /// Extractor family tag (`pmc`, `oup`, ...).
        family: &'static str,
        /// Which cascade missed (`fulltext_root`, `references`, ...).
        cascade: &'static str,
    },

    /// A root was found but nothing survived noise stripping.
    #[error("{family}: article root has no text after stripping")]
    EmptyArticleText {
        /// Extractor family tag.
        family: &'static str,
    },

    /// The URL could not be parsed into a host.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// An extractor panicked on malformed markup and was contained.
    #[error("{family}: extractor panicked")]
    ExtractorPanic {
        /// Extractor family tag.
        family: &'static str,
    },
}

impl Error {
    /// Stable diagnostic token recorded in `ExtractionResult::notes`.
    #[must_use]
    pub fn note(&self) -> String {
        match self {
            Self::EmptyDocument => "empty_dom_html".to_string(),
            Self::CascadeMiss { family, cascade } => format!("{family}_no_{cascade}"),
            Self::EmptyArticleText { family } => format!("{family}_empty_article_text"),
            Self::InvalidUrl(_) => "invalid_url".to_string(),
            Self::ExtractorPanic { family } => format!("extractor_panic:{family}"),
        }
    }
}

/// Result type alias for internal extraction steps.
pub type Result<T> = std::result::Result<T, Error>;
