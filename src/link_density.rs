//! Link Density
//!
//! Measures how much of a subtree's text sits inside links. Navigation
//! blocks and link farms score close to 1; article bodies score low.

use dom_query::Selection;

use crate::dom;

/// Link text statistics of one subtree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkStats {
    /// Characters of non-empty link text.
    pub link_chars: usize,
    /// Characters of all text in the subtree.
    pub text_chars: usize,
    /// Links with visible text.
    pub non_empty_links: usize,
    /// Non-empty links shorter than ten characters.
    pub short_links: usize,
}

impl LinkStats {
    /// `link_chars / text_chars`, zero for an empty subtree.
    #[must_use]
    pub fn density(&self) -> f64 {
        if self.text_chars == 0 {
            return 0.0;
        }
        (self.link_chars as f64 / self.text_chars as f64).min(1.0)
    }
}

/// Collect heuristics on link text.
///
/// Returns (total_link_length, num_short_links, non_empty_links)
fn collect_link_info(links: &Selection) -> (usize, usize, usize) {
    let mut link_length = 0;
    let mut n_short_links = 0;
    let mut n_non_empty_links = 0;

    for link in links.iter() {
        let text = dom::normalized_text(&link);
        let text_length = text.chars().count();

        if text_length == 0 {
            continue;
        }

        link_length += text_length;
        if text_length < 10 {
            n_short_links += 1;
        }
        n_non_empty_links += 1;
    }

    (link_length, n_short_links, n_non_empty_links)
}

/// Link statistics for `element` and its descendants.
#[must_use]
pub fn link_stats(element: &Selection) -> LinkStats {
    let text_chars = dom::normalized_text(element).chars().count();
    let links = element.select("a");
    if links.is_empty() {
        return LinkStats { text_chars, ..LinkStats::default() };
    }

    let (link_chars, short_links, non_empty_links) = collect_link_info(&links);
    LinkStats {
        link_chars,
        text_chars,
        non_empty_links,
        short_links,
    }
}

/// Share of `element`'s text that is link text, in `[0, 1]`.
#[must_use]
pub fn link_density(element: &Selection) -> f64 {
    link_stats(element).density()
}
