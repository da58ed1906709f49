//! HTML parsing support.
//!
//! This module parses HTML strings with `scraper` (html5ever) and converts
//! them to the [`Node`] structure the collection steps work on.

use scraper::{ElementRef, Html, Node as ScraperNode, Selector};

use crate::node::Node;
use crate::{Result, TextContentError};

/// Parse an HTML fragment into a Node tree.
///
/// The returned root is the synthetic `html` element wrapping the fragment.
///
/// # Example
///
/// ```rust
/// use textcontent::{parse_html, TextContentService};
///
/// let node = parse_html("<h1>Hello <em>World</em></h1>");
///
/// let service = TextContentService::new();
/// assert_eq!(service.text_content(&node).unwrap(), "Hello World");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    scraper_to_node(document.root_element())
}

/// Parse a complete HTML document; the root is its `html` element.
pub fn parse_document(html: &str) -> Node {
    let document = Html::parse_document(html);
    scraper_to_node(document.root_element())
}

/// Parse a complete HTML document and convert every element matching the
/// CSS `selector`, in document order.
pub fn select(html: &str, selector: &str) -> Result<Vec<Node>> {
    let selector = Selector::parse(selector)
        .map_err(|err| TextContentError::InvalidSelector(format!("{selector}: {err}")))?;
    let document = Html::parse_document(html);
    Ok(document.select(&selector).map(scraper_to_node).collect())
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = Node::element_with_attrs(tag, attrs);

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Comment(comment) => {
                node.add_child(Node::comment(&comment.comment));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
