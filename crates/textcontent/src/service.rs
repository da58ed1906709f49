//! TextContentService - the main entry point for rendered text extraction.

use tracing::trace;

use crate::collect::{collect, CollectionItem};
use crate::node::{Node, NodeRef};
use crate::utilities::is_pre_rendered;
use crate::whitespace::normalize_items;
use crate::Result;

/// Options for text extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextContentOptions {
    /// Replace `img` elements by their `alt` (or `src`) value
    pub replace_img: bool,

    /// Fall back to `src` when an `img` has no `alt`
    pub img_to_src: bool,

    /// Base URL relative `src` values are resolved against
    pub base_url: String,

    /// Line feeds required around `p` elements.
    ///
    /// Browsers use 2; a single line feed is the default here.
    pub required_line_break_count: usize,
}

impl Default for TextContentOptions {
    fn default() -> Self {
        Self {
            replace_img: true,
            img_to_src: true,
            base_url: String::new(),
            required_line_break_count: 1,
        }
    }
}

/// Extract the rendered text of `root`.
///
/// The root itself is always treated as rendered. Leading and trailing
/// line breaks are dropped; runs of required line breaks collapse to the
/// largest one.
pub fn extract_text(root: &Node, options: &TextContentOptions) -> Result<String> {
    let mut items = collect(NodeRef::new(root), options, false, true)?;
    trace!(items = items.len(), "collected items");

    if !is_pre_rendered(root.tag_name()) {
        items = normalize_items(items);
        trace!(items = items.len(), "normalized items");
    }

    Ok(finalize(items))
}

/// Turn normalized items into the final string.
fn finalize(items: Vec<CollectionItem>) -> String {
    let items: Vec<CollectionItem> = items
        .into_iter()
        .filter(|item| match item {
            CollectionItem::Text(text) => !text.is_empty(),
            CollectionItem::RequiredLineBreak(_) => true,
            CollectionItem::BlockBegin | CollectionItem::BlockEnd => false,
        })
        .collect();

    let is_text = |item: &CollectionItem| matches!(item, CollectionItem::Text(_));
    let Some(first) = items.iter().position(is_text) else {
        return String::new();
    };
    let last = items.iter().rposition(is_text).unwrap_or(first);

    let mut result = String::new();
    let mut count = 0;
    for item in &items[first..=last] {
        match item {
            CollectionItem::Text(text) => {
                result.push_str(text);
                count = 0;
            }
            CollectionItem::RequiredLineBreak(required) => {
                if *required > count {
                    result.push_str(&"\n".repeat(required - count));
                    count = *required;
                }
            }
            CollectionItem::BlockBegin | CollectionItem::BlockEnd => {}
        }
    }

    result
}

/// The main service for extracting rendered text
#[derive(Debug, Clone, Default)]
pub struct TextContentService {
    options: TextContentOptions,
}

impl TextContentService {
    /// Create a new TextContentService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a TextContentService with custom options
    pub fn with_options(options: TextContentOptions) -> Self {
        Self { options }
    }

    /// Extract the rendered text of a node tree
    pub fn text_content(&self, node: &Node) -> Result<String> {
        extract_text(node, &self.options)
    }

    /// Parse an HTML fragment and extract its rendered text
    #[cfg(feature = "html")]
    pub fn text_content_html(&self, html: &str) -> Result<String> {
        let node = crate::html::parse_html(html);
        self.text_content(&node)
    }

    /// Get the current options
    pub fn options(&self) -> &TextContentOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut TextContentOptions {
        &mut self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CollectionItem::{BlockBegin, BlockEnd, RequiredLineBreak, Text};

    fn text(s: &str) -> CollectionItem {
        Text(s.to_string())
    }

    fn p(content: &str) -> Node {
        Node::element("p").with_child(Node::text(content))
    }

    fn body(children: Vec<Node>) -> Node {
        children
            .into_iter()
            .fold(Node::element("body"), Node::with_child)
    }

    fn extract(node: &Node) -> String {
        TextContentService::new().text_content(node).unwrap()
    }

    #[test]
    fn test_finalize_collapses_line_breaks() {
        let items = vec![
            text("a"),
            RequiredLineBreak(1),
            RequiredLineBreak(2),
            RequiredLineBreak(1),
            text("b"),
        ];
        assert_eq!(finalize(items), "a\n\nb");
    }

    #[test]
    fn test_finalize_trims_markers_and_empty_text() {
        let items = vec![
            RequiredLineBreak(2),
            BlockBegin,
            text(""),
            text("a"),
            BlockEnd,
            RequiredLineBreak(1),
            text(""),
            RequiredLineBreak(3),
        ];
        assert_eq!(finalize(items), "a");
        assert_eq!(finalize(vec![RequiredLineBreak(1), BlockBegin, BlockEnd]), "");
    }

    #[test]
    fn test_heading() {
        let h1 = Node::element("h1").with_child(Node::text("Hi!"));
        assert_eq!(extract(&h1), "Hi!");
    }

    #[test]
    fn test_sibling_paragraphs() {
        assert_eq!(extract(&body(vec![p("Lipsum"), p("More")])), "Lipsum\nMore");
    }

    #[test]
    fn test_paragraphs_with_browser_spacing() {
        let service = TextContentService::with_options(TextContentOptions {
            required_line_break_count: 2,
            ..Default::default()
        });
        let text = service
            .text_content(&body(vec![p("Lipsum"), p("More")]))
            .unwrap();
        assert_eq!(text, "Lipsum\n\nMore");
    }

    #[test]
    fn test_inline_whitespace_collapses() {
        let para = Node::element("p")
            .with_child(Node::text("A "))
            .with_child(Node::element("a").with_child(Node::text("x")))
            .with_child(Node::text(" and "))
            .with_child(
                Node::element("span")
                    .with_child(Node::text("more "))
                    .with_child(Node::element("span").with_child(Node::text(" more"))),
            )
            .with_child(Node::text(" final."));
        assert_eq!(extract(&para), "A x and more more final.");
    }

    #[test]
    fn test_br_inside_paragraph() {
        let para = Node::element("p")
            .with_child(Node::text("A"))
            .with_child(Node::element("br"))
            .with_child(Node::text("B"));
        assert_eq!(extract(&para), "A\nB");
    }

    #[test]
    fn test_img_alt_alone() {
        let img = Node::element_with_attrs("img", vec![("alt", "cat")]);
        assert_eq!(extract(&body(vec![img])), "cat");
    }

    #[test]
    fn test_img_src_resolved() {
        let service = TextContentService::with_options(TextContentOptions {
            base_url: "http://example.com/blog/".to_string(),
            ..Default::default()
        });
        let span = Node::element("span")
            .with_child(Node::text("see"))
            .with_child(Node::element_with_attrs("img", vec![("src", "cat.png")]))
            .with_child(Node::text("here"));
        assert_eq!(
            service.text_content(&span).unwrap(),
            "see http://example.com/blog/cat.png here"
        );
    }

    #[test]
    fn test_hidden_subtree() {
        let hidden = Node::element_with_attrs("div", vec![("hidden", "")]).with_child(p("Hidden"));
        assert_eq!(extract(&body(vec![hidden, p("Shown")])), "Shown");
    }

    #[test]
    fn test_pre_content_preserved() {
        let pre = Node::element("pre")
            .with_child(Node::text("\n  first\n  "))
            .with_child(p("in p"))
            .with_child(Node::text("  last\n"));
        let root = body(vec![Node::text("  before  "), pre, Node::text(" after ")]);
        assert_eq!(extract(&root), "before\n\n  first\n  \nin p\n  last\n\nafter");
    }

    #[test]
    fn test_pre_root_is_not_normalized() {
        let pre = Node::element("pre").with_child(Node::text(" a  b "));
        assert_eq!(extract(&pre), " a  b ");
    }

    #[test]
    fn test_nested_blocks_collapse_to_one_break() {
        let root = body(vec![
            Node::element("div").with_child(Node::element("div").with_child(p("one"))),
            Node::element("ul")
                .with_child(Node::element("li").with_child(Node::text("two")))
                .with_child(Node::element("li").with_child(Node::text("three"))),
        ]);
        assert_eq!(extract(&root), "one\ntwo\nthree");
    }

    #[test]
    fn test_document_node_is_walked() {
        let mut doc = Node::document();
        doc.add_child(Node::element("html").with_child(
            Node::element("head").with_child(Node::element("title").with_child(Node::text("T"))),
        ));
        doc.children[0].add_child(body(vec![p("Body")]));
        assert_eq!(extract(&doc), "Body");
    }

    #[test]
    fn test_options_mut() {
        let mut service = TextContentService::new();
        service.options_mut().replace_img = false;
        assert!(!service.options().replace_img);

        let img = Node::element_with_attrs("img", vec![("alt", "cat")]);
        assert_eq!(service.text_content(&body(vec![img])).unwrap(), "");
    }
}
