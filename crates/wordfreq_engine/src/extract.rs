use scraper::{Html, Selector};

pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str) -> String;
}

/// Collects the text content of every `div` element, at any depth, in
/// document order.
///
/// Each matching div contributes the concatenated text of all its
/// descendant text nodes, so nested divs are counted once per matching
/// ancestor. Non-empty contributions are joined with a single space to
/// keep words from adjacent divs apart.
#[derive(Debug, Default, Clone, Copy)]
pub struct DivTextExtractor;

impl Extractor for DivTextExtractor {
    fn extract(&self, html: &str) -> String {
        let doc = Html::parse_document(html);
        let Ok(selector) = Selector::parse("div") else {
            return String::new();
        };

        let mut out = String::new();
        for element in doc.select(&selector) {
            let text: String = element.text().collect();
            if text.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&text);
        }
        out
    }
}
