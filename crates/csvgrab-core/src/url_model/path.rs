//! Filename stem extraction from a URL path.

use url::Url;

/// Extracts the stem for a download target: the last non-empty path segment,
/// truncated at its first `.`.
///
/// `https://h/x/vt.csv` → `vt`; `https://h/x/ne.2024.csv` → `ne`.
/// Returns `None` when the path is empty/root or the segment has no usable
/// stem (e.g. `.hidden`).
pub fn stem_from_url(url: &Url) -> Option<String> {
    let segment = url
        .path()
        .split('/')
        .filter(|s| !s.is_empty())
        .last()?;
    let stem = segment.split('.').next().unwrap_or("");
    if stem.is_empty() {
        return None;
    }
    Some(stem.to_string())
}
