//! Target filename derivation.
//!
//! Derives the local filename for a resolved download target from its URL
//! path: `<prefix>_<stem>.<ext>`, with the stem sanitized for Linux
//! filesystems.

mod path;
mod sanitize;

pub use path::stem_from_url;
pub use sanitize::sanitize_filename_for_linux;

use url::Url;

/// Stem used when the URL path yields nothing usable.
const DEFAULT_STEM: &str = "download";

/// Derives the filename a target is saved under.
///
/// The stem is the last path segment up to its first `.` (so `ne.2024.csv`
/// yields `ne`), sanitized for Linux. `ext` is the extension without a
/// leading dot (usually `csv`).
///
/// # Examples
///
/// - `https://example.com/x/y/vt.csv`, prefix `file`, ext `csv` → `file_vt.csv`
/// - `https://example.com/.hidden`, prefix `file`, ext `csv` → `file_download.csv`
pub fn derive_target_filename(url: &Url, prefix: &str, ext: &str) -> String {
    let stem = stem_from_url(url)
        .map(|s| sanitize_filename_for_linux(&s))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_STEM.to_string());
    format!("{prefix}_{stem}.{ext}")
}
