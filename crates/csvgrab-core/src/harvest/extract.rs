//! Anchor href extraction from an HTML document.

use scraper::{Html, Selector};

/// Extracts every `href` value from anchor elements, in document order.
///
/// Parsing is permissive: malformed markup yields whatever anchors the parser
/// can recover, and garbage input yields an empty list, never an error.
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    // Static selector, cannot fail to parse.
    let anchors = Selector::parse("a[href]").expect("valid anchor selector");

    document
        .select(&anchors)
        .filter_map(|el| el.value().attr("href"))
        .map(str::to_string)
        .collect()
}
