//! URL Utility Functions
//!
//! Parsing and host canonicalization for routing. Institutional proxies
//! rewrite publisher hosts (`academic-oup-com.ezproxy.lib.example.edu`);
//! routing needs the publisher host back.

use url::Url;

use crate::error::{Error, Result};

/// Canonical parts of a URL used for routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTarget {
    /// Lower-cased host with any proxy encoding removed.
    pub host: String,
    /// Lower-cased path.
    pub path: String,
    /// Whether the host was rewritten from a proxy host.
    pub proxied: bool,
}

/// Parse a URL, accepting scheme-less input (`pmc.ncbi.nlm.nih.gov/articles/...`).
pub fn parse_url(url_str: &str) -> Result<Url> {
    let url_str = url_str.trim();
    if url_str.is_empty() {
        return Err(Error::InvalidUrl(String::new()));
    }

    let parsed = match Url::parse(url_str) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{url_str}"))
            .map_err(|_| Error::InvalidUrl(url_str.to_string()))?,
        Err(_) => return Err(Error::InvalidUrl(url_str.to_string())),
    };

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(Error::InvalidUrl(url_str.to_string()));
    }
    Ok(parsed)
}

/// Host and path of `url_str`, canonicalized for routing.
pub fn route_target(url_str: &str) -> Result<RouteTarget> {
    let url = parse_url(url_str)?;
    let raw_host = url.host_str().unwrap_or_default().trim_end_matches('.').to_lowercase();
    let unproxied = unproxy_host(&raw_host);
    Ok(RouteTarget {
        proxied: unproxied.is_some(),
        host: unproxied.unwrap_or(raw_host),
        path: url.path().to_lowercase(),
    })
}

/// Recover the publisher host from an institutional proxy host.
///
/// Handles the dash-encoded form (`www-sciencedirect-com.ezproxy.uni.edu`,
/// where `-` stands for `.` and `--` for a literal hyphen) and the suffix
/// form (`www.sciencedirect.com.ezproxy.uni.edu`). Returns `None` when the
/// host is not a proxy host.
#[must_use]
pub fn unproxy_host(host: &str) -> Option<String> {
    let labels: Vec<&str> = host.split('.').collect();
    let marker = labels
        .iter()
        .enumerate()
        .skip(1)
        .find(|(i, label)| {
            label.contains("proxy") || (**label == "idm" && labels[*i + 1..].join(".") == "oclc.org")
        })
        .map(|(i, _)| i)?;

    let before = &labels[..marker];
    match before {
        [single] if single.contains('-') => {
            let decoded = single
                .replace("--", "\u{0}")
                .replace('-', ".")
                .replace('\u{0}', "-");
            decoded.contains('.').then_some(decoded)
        }
        [_, _, ..] => Some(before.join(".")),
        _ => None,
    }
}
