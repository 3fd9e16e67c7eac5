//! DOI normalization.

use url::Url;

use crate::patterns::{DOI_IN_TEXT, DOI_PREFIX};

/// Characters dropped from the end of a DOI candidate.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', ']', '}', '>', '"', '\'', '’', '”'];

/// Normalize a DOI or DOI URL to its lower-cased bare form.
///
/// Resolver and `doi:` prefixes are stripped case-insensitively, then
/// trailing punctuation. A closing parenthesis is only stripped when it is
/// unbalanced, so `10.1016/s0140-6736(20)30183-5` survives intact. Returns
/// `None` unless the result starts with `10.` and contains `/`.
///
/// # Example
///
/// ```rust
/// use rs_scholarly::references::doi::normalize;
///
/// assert_eq!(normalize("HTTPS://DOI.ORG/10.1000/Xyz.").as_deref(), Some("10.1000/xyz"));
/// assert_eq!(normalize("doi:10.1000/xyz").as_deref(), Some("10.1000/xyz"));
/// assert_eq!(normalize("not a doi"), None);
/// ```
#[must_use]
pub fn normalize(input: &str) -> Option<String> {
    let trimmed = input.trim();
    let stripped = DOI_PREFIX.replace(trimmed, "");
    let mut doi = stripped.trim().to_lowercase();

    loop {
        let before = doi.len();
        doi = doi.trim_end_matches(TRAILING_PUNCTUATION).to_string();
        if doi.ends_with(')') && doi.matches('(').count() < doi.matches(')').count() {
            doi.pop();
        }
        if doi.len() == before {
            break;
        }
    }

    let valid = doi.starts_with("10.") && doi.contains('/') && !doi.ends_with('/');
    valid.then_some(doi)
}

/// First DOI found anywhere in `text` (an href, an attribute or visible text).
#[must_use]
pub fn find(text: &str) -> Option<String> {
    DOI_IN_TEXT
        .captures_iter(text)
        .find_map(|caps| normalize(&caps[1]))
}

/// DOI carried by a link.
///
/// A `doi` query parameter wins (as on Google Scholar and CrossRef lookup
/// links); otherwise the percent-decoded path is searched. Relative or
/// unparseable hrefs are searched as plain text.
#[must_use]
pub fn from_href(href: &str) -> Option<String> {
    let Ok(url) = Url::parse(href.trim()) else {
        return find(href);
    };
    url.query_pairs()
        .filter(|(key, _)| key.eq_ignore_ascii_case("doi"))
        .find_map(|(_, value)| normalize(&value).or_else(|| find(&value)))
        .or_else(|| find(&url.path().replace("%2F", "/").replace("%2f", "/")))
}
