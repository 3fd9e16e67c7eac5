//! Selector Infrastructure
//!
//! Two ways of locating elements. A *cascade* is an ordered list of CSS
//! selectors tried top to bottom; the first selector with a match wins and
//! its text doubles as the diagnostic hint. A [`Rule`] is a predicate
//! evaluated over every descendant, used where CSS cannot express the test
//! (text-size comparisons, nested-content checks).

use dom_query::{Document, Selection};

/// A selector rule that tests if a selection matches certain criteria.
pub type Rule = fn(&Selection) -> bool;

/// A whole-document selection to run cascades against.
#[must_use]
pub fn document_root(doc: &Document) -> Selection<'_> {
    doc.select("html")
}

/// Try each selector in order and return the first match with the selector
/// that produced it.
///
/// Only the first element a selector matches is returned.
///
/// # Example
///
/// ```rust
/// use rs_scholarly::{dom, selector};
///
/// let doc = dom::parse(r#"<div class="legacy"><p>old</p></div><div class="body"><p>new</p></div>"#);
/// let root = selector::document_root(&doc);
///
/// let (hint, found) = selector::first_match(&root, &["div.body", "div.legacy"]).unwrap();
/// assert_eq!(hint, "div.body");
/// assert_eq!(dom::normalized_text(&found), "new");
/// ```
#[must_use]
pub fn first_match<'a, 's>(
    root: &Selection<'a>,
    cascade: &[&'s str],
) -> Option<(&'s str, Selection<'a>)> {
    cascade.iter().find_map(|selector| {
        root.select(selector)
            .nodes()
            .first()
            .map(|node| (*selector, Selection::from(*node)))
    })
}

/// Query for all elements matching the rule, in document order.
#[must_use]
pub fn query_all<'a>(root: &Selection<'a>, rule: Rule) -> Vec<Selection<'a>> {
    let mut matches = Vec::new();

    for node in root.select("*").nodes() {
        let sel = Selection::from(*node);
        if rule(&sel) {
            matches.push(sel);
        }
    }

    matches
}
