//! Site routing.
//!
//! Maps a page URL to a publisher family through an ordered route table and
//! runs that family's extractor. When a publisher extractor yields nothing
//! usable, or panics, the generic extractor gets a second attempt.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::error::Error;
use crate::extractor::{
    Extractor, GenericExtractor, OupExtractor, PmcExtractor, ScienceDirectExtractor, WileyExtractor,
};
use crate::options::Options;
use crate::result::{ExtractionResult, HeadMeta};
use crate::url_utils;

/// Publisher family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Pmc,
    Oup,
    Wiley,
    ScienceDirect,
    Generic,
    /// A platform registered with [`Router::with_route`].
    Custom(&'static str),
}

impl Family {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pmc => "pmc",
            Self::Oup => "oup",
            Self::Wiley => "wiley",
            Self::ScienceDirect => "sciencedirect",
            Self::Generic => "generic",
            Self::Custom(tag) => tag,
        }
    }

    /// Family for an extractor tag; unknown tags are custom families.
    #[must_use]
    pub fn from_tag(tag: &'static str) -> Self {
        match tag {
            "pmc" => Self::Pmc,
            "oup" => Self::Oup,
            "wiley" => Self::Wiley,
            "sciencedirect" => Self::ScienceDirect,
            "generic" => Self::Generic,
            other => Self::Custom(other),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host (and path) test for one route. Hosts are compared after
/// canonicalization, so patterns should be lower-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Host equals the pattern.
    Exact(String),
    /// Host equals the pattern or is a subdomain of it.
    Suffix(String),
    /// Host matches as [`Matcher::Suffix`] and the path contains a fragment.
    HostAndPath {
        host_suffix: String,
        path_contains: String,
    },
}

impl Matcher {
    #[must_use]
    pub fn exact(host: impl Into<String>) -> Self {
        Self::Exact(host.into())
    }

    #[must_use]
    pub fn suffix(suffix: impl Into<String>) -> Self {
        Self::Suffix(suffix.into())
    }

    #[must_use]
    pub fn host_and_path(host_suffix: impl Into<String>, path_contains: impl Into<String>) -> Self {
        Self::HostAndPath {
            host_suffix: host_suffix.into(),
            path_contains: path_contains.into(),
        }
    }

    /// Whether a canonical host and lower-cased path satisfy this matcher.
    #[must_use]
    pub fn matches(&self, host: &str, path: &str) -> bool {
        match self {
            Self::Exact(expected) => host == expected,
            Self::Suffix(suffix) => host_has_suffix(host, suffix),
            Self::HostAndPath {
                host_suffix,
                path_contains,
            } => host_has_suffix(host, host_suffix) && path.contains(path_contains.as_str()),
        }
    }
}

fn host_has_suffix(host: &str, suffix: &str) -> bool {
    let suffix = suffix.trim_start_matches('.');
    host == suffix
        || host
            .strip_suffix(suffix)
            .is_some_and(|rest| rest.ends_with('.'))
}

/// A matcher paired with the extractor it selects.
pub struct Route {
    pub matcher: Matcher,
    pub family: Family,
    pub extractor: Box<dyn Extractor>,
}

impl Route {
    /// Route to `extractor`, taking the family from its tag.
    #[must_use]
    pub fn new(matcher: Matcher, extractor: Box<dyn Extractor>) -> Self {
        Self {
            family: Family::from_tag(extractor.family()),
            matcher,
            extractor,
        }
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("matcher", &self.matcher)
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

/// Ordered route table plus the generic fallback extractor.
///
/// `Router` is `Send + Sync`; one instance can serve many threads.
///
/// # Example
///
/// ```rust
/// use rs_scholarly::router::{Family, Router};
///
/// let router = Router::new();
/// assert_eq!(router.route("https://pmc.ncbi.nlm.nih.gov/articles/PMC1234567/"), Family::Pmc);
/// assert_eq!(router.route("https://academic-oup-com.ezproxy.lib.example.edu/brain/article/1"), Family::Oup);
/// assert_eq!(router.route("https://example.org/blog"), Family::Generic);
/// ```
pub struct Router {
    routes: Vec<Route>,
    generic: Box<dyn Extractor>,
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .field("generic", &self.generic.family())
            .finish()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Router with the built-in publisher routes.
    #[must_use]
    pub fn new() -> Self {
        let routes = vec![
            Route::new(Matcher::exact("pmc.ncbi.nlm.nih.gov"), Box::new(PmcExtractor)),
            Route::new(
                Matcher::host_and_path("ncbi.nlm.nih.gov", "/pmc/"),
                Box::new(PmcExtractor),
            ),
            Route::new(Matcher::suffix("europepmc.org"), Box::new(PmcExtractor)),
            Route::new(Matcher::exact("academic.oup.com"), Box::new(OupExtractor)),
            Route::new(Matcher::suffix("onlinelibrary.wiley.com"), Box::new(WileyExtractor)),
            Route::new(Matcher::suffix("wiley.com"), Box::new(WileyExtractor)),
            Route::new(Matcher::suffix("sciencedirect.com"), Box::new(ScienceDirectExtractor)),
        ];
        Self {
            routes,
            generic: Box::new(GenericExtractor),
        }
    }

    /// Router with no publisher routes; every URL goes to the generic extractor.
    #[must_use]
    pub fn generic_only() -> Self {
        Self {
            routes: Vec::new(),
            generic: Box::new(GenericExtractor),
        }
    }

    /// Append a route. Earlier routes win.
    #[must_use]
    pub fn with_route(mut self, matcher: Matcher, extractor: Box<dyn Extractor>) -> Self {
        self.routes.push(Route::new(matcher, extractor));
        self
    }

    /// Registered routes in match order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Family for `url`. Unparseable URLs route to generic.
    #[must_use]
    pub fn route(&self, url: &str) -> Family {
        self.resolve(url).map_or(Family::Generic, |route| route.family)
    }

    fn resolve(&self, url: &str) -> Option<&Route> {
        let target = match url_utils::route_target(url) {
            Ok(target) => target,
            Err(error) => {
                tracing::debug!(url, %error, "unroutable url");
                return None;
            }
        };
        let route = self
            .routes
            .iter()
            .find(|route| route.matcher.matches(&target.host, &target.path));
        tracing::debug!(
            host = %target.host,
            proxied = target.proxied,
            family = route.map_or("generic", |r| r.family.as_str()),
            "routed"
        );
        route
    }

    /// Extract `html` with the extractor routed for `url`.
    ///
    /// Never panics and never fails: extractor panics become
    /// `extractor_panic:<family>` notes, and an unusable publisher result
    /// triggers a generic retry noted as `router_fallback_generic:<family>`.
    #[must_use]
    pub fn extract(&self, url: &str, html: &str, head_meta: &HeadMeta, options: &Options) -> ExtractionResult {
        let Some(route) = self.resolve(url) else {
            return self.run_generic(Vec::new(), None, url, html, head_meta, options);
        };
        let family = route.family;

        let mut notes = Vec::new();
        let primary = match guarded(route.extractor.as_ref(), url, html, head_meta, options) {
            Ok(result) if (result.ok && !result.is_empty()) || !options.generic_fallback => {
                return with_family(result, family);
            }
            Ok(result) => Some(result),
            Err(error) => {
                tracing::warn!(%family, "extractor panicked");
                notes.push(error.note());
                None
            }
        };

        if !options.generic_fallback {
            let mut result = ExtractionResult::failed(family.as_str(), String::new());
            result.notes = notes;
            return with_family(result, family);
        }

        tracing::debug!(%family, "falling back to generic extraction");
        notes.push(format!("router_fallback_generic:{family}"));
        let result = self.run_generic(notes, primary, url, html, head_meta, options);
        with_family(result, family)
    }

    /// Run the generic extractor, prefixing `notes`. A usable generic result
    /// wins; otherwise the publisher's own result is kept.
    fn run_generic(
        &self,
        notes: Vec<String>,
        primary: Option<ExtractionResult>,
        url: &str,
        html: &str,
        head_meta: &HeadMeta,
        options: &Options,
    ) -> ExtractionResult {
        let generic = match guarded(self.generic.as_ref(), url, html, head_meta, options) {
            Ok(result) => result,
            Err(error) => {
                tracing::warn!("generic extractor panicked");
                let mut result = match primary {
                    Some(mut primary) => {
                        primary.notes.push(error.note());
                        primary
                    }
                    None => ExtractionResult::failed(self.generic.family(), error.note()),
                };
                result.notes = prefixed(notes, result.notes);
                return result;
            }
        };

        let mut chosen = match primary {
            Some(primary) if !(generic.ok && !generic.is_empty()) => primary,
            _ => generic,
        };
        chosen.notes = prefixed(notes, chosen.notes);
        chosen
    }
}

/// Run an extractor, turning a panic into an error.
fn guarded(
    extractor: &dyn Extractor,
    url: &str,
    html: &str,
    head_meta: &HeadMeta,
    options: &Options,
) -> Result<ExtractionResult, Error> {
    panic::catch_unwind(AssertUnwindSafe(|| extractor.extract(url, html, head_meta, options))).map_err(
        |_| Error::ExtractorPanic {
            family: extractor.family(),
        },
    )
}

fn prefixed(mut head: Vec<String>, tail: Vec<String>) -> Vec<String> {
    head.extend(tail);
    head
}

fn with_family(mut result: ExtractionResult, family: Family) -> ExtractionResult {
    result.meta.family = family.as_str().to_string();
    result
}
