//! Link harvesting: parse a fetched page, keep hrefs with the wanted suffix,
//! resolve them to absolute download targets.
//!
//! Order and duplicates follow the document: targets come back in the order
//! their anchors appear, and a link that appears twice is kept twice.

mod extract;
mod resolve;

pub use extract::extract_hrefs;
pub use resolve::resolve_href;

use url::Url;

/// Harvests download targets from an HTML body.
///
/// Keeps hrefs whose raw string ends with `suffix` (case-sensitive, matched
/// before resolution, same as the loose suffix check this tool has always
/// done), then resolves each against `page_url`. Unresolvable hrefs are
/// dropped with a warning.
pub fn harvest_links(page_url: &Url, html: &str, suffix: &str) -> Vec<Url> {
    let links: Vec<Url> = extract_hrefs(html)
        .iter()
        .filter(|href| href.ends_with(suffix))
        .filter_map(|href| resolve_href(page_url, href))
        .collect();

    tracing::info!(
        page = %page_url,
        suffix,
        count = links.len(),
        "harvested links"
    );
    links
}
