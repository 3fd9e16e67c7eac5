//! Element Tree (etree) Utilities
//!
//! Text-joining and removal helpers from the `html-cleaning` crate. Heading
//! text is read with [`iter_text`] so that inline numbering spans stay
//! separated from the title ("<span>3.2</span>Methods" reads "3.2 Methods").
//! Noise elements are removed with [`remove`] keeping their tail text, which
//! belongs to the surrounding paragraph.

pub use html_cleaning::tree::{iter_text, remove};
