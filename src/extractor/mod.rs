//! Article extractors.
//!
//! # Module Structure
//!
//! - `assemble`: Draft results, failure and success assembly
//! - `site`: Shared publisher pipeline driven by a `SiteProfile`
//! - `generic`: Candidate-scoring fallback for unknown sites
//! - `pmc`, `oup`, `wiley`, `sciencedirect`: Publisher profiles
//!
//! # Usage
//!
//! ```rust
//! use rs_scholarly::extractor::{Extractor, PmcExtractor};
//! use rs_scholarly::{HeadMeta, Options};
//!
//! let html = r#"<section class="body main-article-body">
//!     <h2>Introduction</h2><p>Salt marshes store carbon.</p></section>"#;
//! let result = PmcExtractor.extract("", html, &HeadMeta::new(), &Options::default());
//! assert!(result.ok);
//! assert_eq!(result.meta.sections[0].title, "Introduction");
//! ```

pub mod assemble;
pub mod generic;
pub mod oup;
pub mod pmc;
pub mod sciencedirect;
pub mod site;
pub mod wiley;

pub use generic::GenericExtractor;
pub use oup::OupExtractor;
pub use pmc::PmcExtractor;
pub use sciencedirect::ScienceDirectExtractor;
pub use site::SiteProfile;
pub use wiley::WileyExtractor;

use crate::options::Options;
use crate::result::{ExtractionResult, HeadMeta};

/// One platform's extraction strategy.
///
/// Implementations never return an error: every failure is folded into an
/// `ok = false` result with a diagnostic note.
pub trait Extractor: Send + Sync {
    /// Family tag reported as `parser`.
    fn family(&self) -> &'static str;

    /// Extract one page.
    fn extract(&self, url: &str, html: &str, head_meta: &HeadMeta, options: &Options) -> ExtractionResult;
}
