use scraper::{Html, Selector};

// Presence of the attribute marks the container; any value (or none) matches.
const LYRICS_CONTAINER_SELECTOR: &str = "[data-lyrics-container]";

/// Extract the lyrics text from a song page.
///
/// Parses the HTML leniently, finds the first element carrying the
/// `data-lyrics-container` attribute, and returns its descendant text nodes
/// concatenated in document order with leading/trailing whitespace trimmed.
/// Internal whitespace is left untouched. Pages with no container yield the
/// empty string.
pub fn extract_lyrics(html: &str) -> String {
    let document = Html::parse_document(html);
    let selector = Selector::parse(LYRICS_CONTAINER_SELECTOR).expect("valid selector");

    match document.select(&selector).next() {
        Some(container) => container.text().collect::<String>().trim().to_string(),
        None => String::new(),
    }
}
