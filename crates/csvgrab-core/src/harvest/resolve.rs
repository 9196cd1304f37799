//! Href resolution against the source page URL.

use url::Url;

/// Resolves an href against the page it was found on.
///
/// Relative hrefs are joined against the base; already-absolute hrefs come
/// back unchanged. Returns `None` (with a warning) for hrefs that cannot form
/// a valid URL.
pub fn resolve_href(base: &Url, href: &str) -> Option<Url> {
    match base.join(href) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!(href, error = %e, "skipping unresolvable href");
            None
        }
    }
}
