use scraper::{ElementRef, Html, Selector};

/// The boilerplate-removal collaborator boundary: strips navigation, ads
/// and template noise from a decoded body, leaving plain article text.
pub trait Extractor: Send + Sync {
    /// Returns the cleaned text, or `None` if nothing worth keeping was
    /// found. Synchronous and pure; no failure modes beyond `None`.
    fn extract(&self, body: &str) -> Option<String>;
}

impl<T: Extractor + ?Sized> Extractor for Box<T> {
    fn extract(&self, body: &str) -> Option<String> {
        (**self).extract(body)
    }
}

/// Returns the input unchanged. Useful in tests and for archives whose
/// payloads are already plain text.
#[derive(Debug, Default, Clone, Copy)]
pub struct VerbatimExtractor;

impl Extractor for VerbatimExtractor {
    fn extract(&self, body: &str) -> Option<String> {
        Some(body.to_string())
    }
}

/// DOM-based extractor:
/// - text of `<article>` if present
/// - otherwise text of `<body>`
/// - fallback to the text of the whole document.
#[derive(Debug, Default)]
pub struct BodyTextExtractor;

impl Extractor for BodyTextExtractor {
    fn extract(&self, body: &str) -> Option<String> {
        let doc = Html::parse_document(body);
        let article_sel = Selector::parse("article").ok()?;
        let body_sel = Selector::parse("body").ok()?;

        let node = doc
            .select(&article_sel)
            .next()
            .or_else(|| doc.select(&body_sel).next())
            .unwrap_or_else(|| doc.root_element());
        let text = element_text(node);
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Concatenated text content with runs of whitespace collapsed.
fn element_text(node: ElementRef<'_>) -> String {
    let joined = node.text().collect::<Vec<_>>().join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}
