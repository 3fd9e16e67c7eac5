//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate: attribute access, subtree
//! cloning and block-aware text flattening. Extractors never mutate the
//! document they were given; they clone a subtree and strip the clone.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Id of the wrapper element a cloned subtree is parsed into.
pub const CLONE_ROOT_ID: &str = "rs-scholarly-clone-root";

/// Elements whose text never counts as visible.
const INVISIBLE_TAGS: &[&str] = &["script", "style", "noscript", "template", "head", "title"];

/// Block elements that end a paragraph (blank line after flattening).
const PARAGRAPH_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "pre", "table", "figure",
];

/// Block elements that end a line.
const LINE_TAGS: &[&str] = &[
    "div", "section", "article", "main", "header", "footer", "aside", "nav", "li", "ul",
    "ol", "dl", "dt", "dd", "tr", "caption", "figcaption", "details", "summary", "address",
    "form", "fieldset", "hr",
];

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Id and class joined with a space, lower-cased.
#[must_use]
pub fn id_class(sel: &Selection) -> String {
    let mut out = id(sel).unwrap_or_default();
    out.push(' ');
    out.push_str(&class_name(sel).unwrap_or_default());
    out.to_lowercase()
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

/// Tag name of a raw node, lower-cased, empty for non-elements.
#[must_use]
pub fn node_tag(node: &NodeRef) -> String {
    if !node.is_element() {
        return String::new();
    }
    node.node_name()
        .map(|t| t.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Stable identity of the first node in a selection within its document.
#[must_use]
pub fn node_key(sel: &Selection) -> Option<NodeId> {
    sel.nodes().first().map(|n| n.id)
}

// === Text Content ===

/// Get all text content of node and descendants (raw, unnormalized)
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content with whitespace runs collapsed to single spaces.
#[must_use]
pub fn normalized_text(sel: &Selection) -> String {
    collapse_whitespace(&sel.text())
}

/// Collapse every whitespace run to a single space and trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Flatten a subtree to text with one line per block element and a blank
/// line after paragraph-level blocks. Script, style and template contents
/// are skipped.
#[must_use]
pub fn block_text(sel: &Selection) -> String {
    let mut raw = String::new();
    for node in sel.nodes() {
        flatten_node(node, &mut raw);
    }
    tidy_lines(&raw)
}

/// Visible text of a whole document, used by the wall detector.
#[must_use]
pub fn visible_text(doc: &Document) -> String {
    let html = doc.select("html");
    if html.exists() {
        block_text(&html)
    } else {
        block_text(&doc.select("body"))
    }
}

fn flatten_node(node: &NodeRef, out: &mut String) {
    if node.is_text() {
        let text = node.text();
        let at_break = |out: &String| out.is_empty() || out.ends_with(|c: char| c == ' ' || c == '\n');
        if text.chars().any(|c| !c.is_whitespace()) {
            if text.starts_with(char::is_whitespace) && !at_break(out) {
                out.push(' ');
            }
            out.push_str(&collapse_whitespace(&text));
            if text.ends_with(char::is_whitespace) {
                out.push(' ');
            }
        } else if !text.is_empty() && !at_break(out) {
            out.push(' ');
        }
        return;
    }

    let tag = node_tag(node);
    if INVISIBLE_TAGS.contains(&tag.as_str()) {
        return;
    }
    if tag == "br" {
        out.push('\n');
        return;
    }

    let paragraph = PARAGRAPH_TAGS.contains(&tag.as_str());
    let line = paragraph || LINE_TAGS.contains(&tag.as_str());
    if line {
        end_line(out);
    }
    for child in node.children() {
        flatten_node(&child, out);
    }
    if line {
        end_line(out);
    }
    if paragraph && !out.is_empty() && !out.ends_with("\n\n") {
        out.push('\n');
    }
}

fn end_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

/// Trim every line, drop leading/trailing blank lines and keep at most one
/// blank line between blocks.
#[must_use]
pub fn tidy_lines(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut blank_pending = false;
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            blank_pending = !out.is_empty();
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
            if blank_pending {
                out.push('\n');
            }
        }
        blank_pending = false;
        out.push_str(line);
    }
    out
}

// === Cloning ===

/// Clone a subtree into a fresh document so it can be stripped without
/// touching the source document.
///
/// The children of `sel` are re-parsed inside a wrapper `div` with id
/// [`CLONE_ROOT_ID`]; the wrapper keeps table cells and list items parseable
/// regardless of the original root's tag.
#[must_use]
pub fn clone_subtree(sel: &Selection) -> Document {
    let inner = inner_html(sel);
    Document::from(format!(
        "<html><body><div id=\"{CLONE_ROOT_ID}\">{inner}</div></body></html>"
    ))
}

/// Wrapper element of a document produced by [`clone_subtree`].
#[must_use]
pub fn clone_root(doc: &Document) -> Selection<'_> {
    doc.select_single(&format!("#{CLONE_ROOT_ID}"))
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_select() {
        let doc = parse(r#"<div id="main" class="container">content</div>"#);
        let div = doc.select("div");

        assert_eq!(id(&div), Some("main".to_string()));
        assert_eq!(class_name(&div), Some("container".to_string()));
        assert_eq!(id_class(&div), "main container");
    }

    #[test]
    fn test_missing_attributes_return_none() {
        let doc = parse(r#"<div>no attributes</div>"#);
        let div = doc.select("div");

        assert_eq!(id(&div), None);
        assert_eq!(class_name(&div), None);
        assert_eq!(get_attribute(&div, "data-test"), None);
    }

    #[test]
    fn test_tag_name_lowercase() {
        let doc = parse(r#"<ARTICLE><SECTION>content</SECTION></ARTICLE>"#);
        assert_eq!(tag_name(&doc.select("article")), Some("article".to_string()));
        assert_eq!(tag_name(&doc.select("section")), Some("section".to_string()));
        assert_eq!(tag_name(&doc.select("span")), None);
    }

    #[test]
    fn test_block_text_separates_paragraphs() {
        let doc = parse("<div><p>First  para</p><p>Second\n para</p><ul><li>a</li><li>b</li></ul></div>");
        let text = block_text(&doc.select("div"));
        assert_eq!(text, "First para\n\nSecond para\n\na\nb");
    }

    #[test]
    fn test_block_text_skips_scripts_and_keeps_inline_spacing() {
        let doc = parse("<div><p>Hello <b>bold</b> world<script>var x = 1;</script></p></div>");
        let text = block_text(&doc.select("div"));
        assert_eq!(text, "Hello bold world");
    }

    #[test]
    fn test_visible_text_ignores_head() {
        let doc = parse("<html><head><title>T</title><style>p{}</style></head><body><p>Body</p></body></html>");
        assert_eq!(visible_text(&doc), "Body");
    }

    #[test]
    fn test_clone_subtree_is_independent() {
        let doc = parse(r#"<section id="s"><p class="x">keep</p><p class="y">drop</p></section>"#);
        let clone = clone_subtree(&doc.select("#s"));
        let root = clone_root(&clone);

        root.select("p.y").remove();

        assert_eq!(normalized_text(&root), "keep");
        assert_eq!(doc.select("p").length(), 2);
    }

    #[test]
    fn test_clone_subtree_of_table_cell() {
        let doc = parse("<table><tr><td id='c'><p>cell text</p></td></tr></table>");
        let clone = clone_subtree(&doc.select("#c"));
        assert_eq!(normalized_text(&clone_root(&clone)), "cell text");
    }

    #[test]
    fn test_node_key_distinguishes_elements() {
        let doc = parse("<div><p>1</p><p>2</p></div>");
        let ps: Vec<_> = doc.select("p").nodes().iter().map(|n| n.id).collect();
        assert_eq!(ps.len(), 2);
        assert_ne!(ps[0], ps[1]);
        assert_eq!(node_key(&doc.select("p")), Some(ps[0]));
    }

    #[test]
    fn test_tidy_lines_collapses_blank_runs() {
        assert_eq!(tidy_lines("\n\n a \n\n\n\n b\n c \n\n"), "a\n\nb\nc");
    }
}
