//! Noise stripping.
//!
//! Removes boilerplate from a cloned subtree. Denylisted tags are removed
//! outright. Elements matched only by a class or id fragment are removed
//! when their text is short, so a large content block that happens to share
//! a class fragment with a widget survives.

use std::collections::HashSet;

use dom_query::{NodeId, Selection};

use crate::dom;
use crate::etree;

/// A composable denylist.
#[derive(Debug, Clone, Copy)]
pub struct NoiseProfile {
    /// Tag names removed outright.
    pub tags: &'static [&'static str],
    /// Lower-case class/id fragments; matches are removed only when short.
    pub fragments: &'static [&'static str],
    /// CSS selectors removed outright (platform widgets with stable markup).
    pub selectors: &'static [&'static str],
}

/// Noise common to every page.
pub const BASE_NOISE: NoiseProfile = NoiseProfile {
    tags: &[
        "script", "style", "noscript", "template", "iframe", "nav", "form", "button", "input",
        "select", "textarea", "svg", "object", "embed", "dialog", "link", "meta",
    ],
    fragments: &[
        "cookie", "consent", "gdpr", "banner", "share", "social", "advert", "sponsor", "promo",
        "newsletter", "sidebar", "related", "recommend", "modal", "popup", "toolbar", "metrics",
        "altmetric", "breadcrumb", "skip-link", "skip-to", "paywall", "login", "signin",
    ],
    selectors: &[
        "[hidden]",
        "[role=\"navigation\"]",
        "[role=\"banner\"]",
        "[role=\"dialog\"]",
    ],
};

/// Counts of removed elements by rule family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripReport {
    pub by_tag: usize,
    pub by_selector: usize,
    pub by_fragment: usize,
}

impl StripReport {
    /// Total elements removed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.by_tag + self.by_selector + self.by_fragment
    }

    /// Diagnostic token for the result notes.
    #[must_use]
    pub fn note(&self) -> String {
        format!("noise_removed:{}", self.total())
    }
}

impl std::ops::AddAssign for StripReport {
    fn add_assign(&mut self, other: Self) {
        self.by_tag += other.by_tag;
        self.by_selector += other.by_selector;
        self.by_fragment += other.by_fragment;
    }
}

/// Strip every profile's noise from the descendants of `root`.
///
/// `root` itself is never removed. `text_threshold` bounds the text length
/// of elements removed by fragment match.
pub fn strip(root: &Selection, profiles: &[&NoiseProfile], text_threshold: usize) -> StripReport {
    let mut report = StripReport::default();

    for profile in profiles {
        if !profile.tags.is_empty() {
            report.by_tag += remove_all(root, &profile.tags.join(", "));
        }
        for selector in profile.selectors {
            report.by_selector += remove_all(root, selector);
        }
    }

    let fragments: Vec<&str> = profiles
        .iter()
        .flat_map(|p| p.fragments.iter().copied())
        .collect();
    if !fragments.is_empty() {
        report.by_fragment += remove_short_by_fragment(root, &fragments, text_threshold);
    }

    tracing::trace!(
        by_tag = report.by_tag,
        by_selector = report.by_selector,
        by_fragment = report.by_fragment,
        "noise stripped"
    );
    report
}

/// Remove every descendant matching `selector`, counting only outermost matches.
fn remove_all(root: &Selection, selector: &str) -> usize {
    let matched = root.select(selector);
    let nodes = matched.nodes().to_vec();
    let ids: HashSet<NodeId> = nodes.iter().map(|n| n.id).collect();

    let mut removed = 0;
    for node in nodes {
        let nested = node.ancestors(None).iter().any(|a| ids.contains(&a.id));
        if nested {
            continue;
        }
        etree::remove(&Selection::from(node), true);
        removed += 1;
    }
    removed
}

fn remove_short_by_fragment(root: &Selection, fragments: &[&str], text_threshold: usize) -> usize {
    let candidates = root.select("[class], [id]").nodes().to_vec();
    let mut removed_ids: HashSet<NodeId> = HashSet::new();

    for node in candidates {
        if node.ancestors(None).iter().any(|a| removed_ids.contains(&a.id)) {
            continue;
        }
        let sel = Selection::from(node);
        let id_class = dom::id_class(&sel);
        if !fragments.iter().any(|f| id_class.contains(f)) {
            continue;
        }
        if dom::normalized_text(&sel).chars().count() >= text_threshold {
            continue;
        }
        removed_ids.insert(node.id);
        etree::remove(&sel, true);
    }
    removed_ids.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stripped(html: &str, threshold: usize) -> (String, StripReport) {
        let doc = dom::parse(html);
        let clone = dom::clone_subtree(&doc.select("body"));
        let root = dom::clone_root(&clone);
        let report = strip(&root, &[&BASE_NOISE], threshold);
        (dom::block_text(&root), report)
    }

    #[test]
    fn removes_denylisted_tags() {
        let (text, report) = stripped(
            "<body><nav>MENU</nav><script>x()</script><p>BODY</p><button>Click</button></body>",
            300,
        );
        assert_eq!(text, "BODY");
        assert_eq!(report.by_tag, 3);
    }

    #[test]
    fn short_fragment_match_is_removed() {
        let (text, report) = stripped(
            r#"<body><div class="cookie-banner">We use cookies</div><p>BODY</p></body>"#,
            300,
        );
        assert_eq!(text, "BODY");
        assert_eq!(report.by_fragment, 1);
    }

    #[test]
    fn long_fragment_match_survives() {
        let long = "Substantive article text. ".repeat(30);
        let html = format!(r#"<body><div class="content-with-sidebar"><p>{long}</p></div></body>"#);
        let (text, report) = stripped(&html, 300);
        assert!(text.contains("Substantive article text."));
        assert_eq!(report.by_fragment, 0);
    }

    #[test]
    fn nested_matches_count_once() {
        let (_, report) = stripped(
            r#"<body><div class="share-bar"><span class="share-icon">x</span></div><p>BODY</p></body>"#,
            300,
        );
        assert_eq!(report.by_fragment, 1);
        assert_eq!(report.note(), "noise_removed:1");
    }

    #[test]
    fn platform_selectors_are_unconditional() {
        const EXTRA: NoiseProfile = NoiseProfile {
            tags: &[],
            fragments: &[],
            selectors: &["div.widget-long"],
        };
        let long = "Long widget text. ".repeat(40);
        let html = format!(r#"<body><div class="widget-long">{long}</div><p>BODY</p></body>"#);
        let doc = dom::parse(&html);
        let clone = dom::clone_subtree(&doc.select("body"));
        let root = dom::clone_root(&clone);

        let report = strip(&root, &[&BASE_NOISE, &EXTRA], 300);

        assert_eq!(report.by_selector, 1);
        assert_eq!(dom::block_text(&root), "BODY");
    }

    #[test]
    fn aria_hidden_rendered_math_is_kept() {
        let (text, report) = stripped(
            r#"<body><p>Uptake follows <span aria-hidden="true">k = 0.3</span> per day.</p></body>"#,
            300,
        );
        assert!(text.contains("k = 0.3"));
        assert_eq!(report.total(), 0);
    }

    #[test]
    fn source_document_is_untouched() {
        let doc = dom::parse("<body><nav>MENU</nav><p>BODY</p></body>");
        let clone = dom::clone_subtree(&doc.select("body"));
        strip(&dom::clone_root(&clone), &[&BASE_NOISE], 300);
        assert!(doc.select("nav").exists());
    }
}
