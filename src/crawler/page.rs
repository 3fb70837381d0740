//! Parsed-page model produced by the fetch-and-parse primitive
//!
//! A [`ParsedPage`] is a read-only view of a fetched document: every element
//! in the body, in document order, with its tag name, attributes, resolved
//! absolute href (for anchors) and own text. The crawl engine never touches
//! raw HTML.

use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use url::Url;

/// A single element of a fetched page
#[derive(Debug, Clone)]
pub struct PageElement {
    /// Lower-cased tag name (`a`, `p`, `div`, ...)
    pub tag: String,

    /// Attribute name/value map
    pub attrs: HashMap<String, String>,

    /// The href attribute resolved to an absolute URL, when present and
    /// resolvable against the page's base URL
    pub href: Option<String>,

    /// Text belonging directly to this element, excluding descendant text,
    /// whitespace-normalized
    pub own_text: String,
}

impl PageElement {
    /// Looks up an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Whether this element is an anchor carrying an href attribute
    pub fn is_anchor_with_href(&self) -> bool {
        self.tag == "a" && self.attrs.contains_key("href")
    }
}

/// A fetched and parsed page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// The body element followed by all its descendant elements, in document
    /// order
    pub elements: Vec<PageElement>,
}

/// Parses HTML into the element view the crawl engine consumes
///
/// # Arguments
///
/// * `html` - The HTML content
/// * `base_url` - The base URL for resolving relative hrefs (the final URL of
///   the response, after redirects)
pub fn parse_page(html: &str, base_url: &Url) -> ParsedPage {
    let document = Html::parse_document(html);
    let mut elements = Vec::new();

    if let Ok(body_selector) = Selector::parse("body") {
        if let Some(body) = document.select(&body_selector).next() {
            // NodeRef::descendants yields the node itself first, then every
            // descendant in document order.
            for element in body.descendants().filter_map(ElementRef::wrap) {
                elements.push(element_view(element, base_url));
            }
        }
    }

    ParsedPage { elements }
}

/// Builds the read-only view of one element
fn element_view(element: ElementRef, base_url: &Url) -> PageElement {
    let attrs: HashMap<String, String> = element
        .value()
        .attrs()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    let href = attrs
        .get("href")
        .and_then(|raw| base_url.join(raw.trim()).ok())
        .map(|url| url.to_string());

    PageElement {
        tag: element.value().name().to_lowercase(),
        attrs,
        href,
        own_text: own_text(element),
    }
}

/// Collects text belonging directly to the element, excluding descendant
/// text, collapsing runs of whitespace to single spaces
fn own_text(element: ElementRef) -> String {
    let direct: String = element
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| text.to_string())
        .collect();

    direct.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com/page").unwrap()
    }

    #[test]
    fn test_elements_in_document_order() {
        let html = r#"<html><body><h1>Title</h1><p>One</p><p>Two</p></body></html>"#;
        let page = parse_page(html, &base_url());

        let tags: Vec<_> = page.elements.iter().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["body", "h1", "p", "p"]);
    }

    #[test]
    fn test_own_text_excludes_descendants() {
        let html = r#"<html><body><div>outer <span>inner</span> text</div></body></html>"#;
        let page = parse_page(html, &base_url());

        let div = page.elements.iter().find(|e| e.tag == "div").unwrap();
        assert_eq!(div.own_text, "outer text");

        let span = page.elements.iter().find(|e| e.tag == "span").unwrap();
        assert_eq!(span.own_text, "inner");
    }

    #[test]
    fn test_own_text_normalizes_whitespace() {
        let html = "<html><body><p>great\n   furniture   experts</p></body></html>";
        let page = parse_page(html, &base_url());

        let p = page.elements.iter().find(|e| e.tag == "p").unwrap();
        assert_eq!(p.own_text, "great furniture experts");
    }

    #[test]
    fn test_relative_href_resolved() {
        let html = r#"<html><body><a href="/catalog">Catalog</a></body></html>"#;
        let page = parse_page(html, &base_url());

        let anchor = page.elements.iter().find(|e| e.tag == "a").unwrap();
        assert!(anchor.is_anchor_with_href());
        assert_eq!(anchor.attr("href"), Some("/catalog"));
        assert_eq!(anchor.href.as_deref(), Some("https://example.com/catalog"));
    }

    #[test]
    fn test_absolute_href_kept() {
        let html = r#"<html><body><a href="https://other.example/x">Out</a></body></html>"#;
        let page = parse_page(html, &base_url());

        let anchor = page.elements.iter().find(|e| e.tag == "a").unwrap();
        assert_eq!(anchor.href.as_deref(), Some("https://other.example/x"));
    }

    #[test]
    fn test_anchor_without_href() {
        let html = r#"<html><body><a name="top">Top</a></body></html>"#;
        let page = parse_page(html, &base_url());

        let anchor = page.elements.iter().find(|e| e.tag == "a").unwrap();
        assert!(!anchor.is_anchor_with_href());
        assert_eq!(anchor.href, None);
    }

    #[test]
    fn test_empty_document() {
        // html5ever inserts an empty body even for empty input
        let page = parse_page("", &base_url());
        assert!(page.elements.iter().all(|e| e.own_text.is_empty()));
    }

    #[test]
    fn test_body_own_text_visible() {
        let html = "<html><body>great furniture experts</body></html>";
        let page = parse_page(html, &base_url());

        let body = page.elements.iter().find(|e| e.tag == "body").unwrap();
        assert_eq!(body.own_text, "great furniture experts");
    }
}
