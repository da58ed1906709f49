//! Owned DOM node structure for rendered text collection.
//!
//! The collection steps never look at a parser's own tree type. Any parser
//! (html5ever, CDP, etc.) converts its output to this structure first, see
//! [`crate::html`] for the bundled `scraper` adapter.

use indexmap::IndexMap;

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
    /// Comment node (nodeType = 8)
    Comment = 8,
    /// Document node (nodeType = 9)
    Document = 9,
    /// Document fragment node (nodeType = 11)
    DocumentFragment = 11,
}

impl From<u32> for NodeType {
    fn from(value: u32) -> Self {
        match value {
            1 => NodeType::Element,
            3 => NodeType::Text,
            8 => NodeType::Comment,
            9 => NodeType::Document,
            11 => NodeType::DocumentFragment,
            _ => NodeType::Element, // Default fallback
        }
    }
}

/// A read-only DOM node.
///
/// Fields are public so adapters can build trees directly. A text or comment
/// node must not carry children; the walker rejects such trees with
/// [`crate::TextContentError::MalformedNode`].
#[derive(Debug, Clone)]
pub struct Node {
    /// Node type (1 = Element, 3 = Text, etc.)
    pub node_type: NodeType,

    /// Lowercase tag name for elements, `#text`, `#comment`, `#document` otherwise
    pub node_name: String,

    /// Character data for text and comment nodes
    pub node_value: Option<String>,

    /// Attributes keyed by lowercase name
    pub attributes: IndexMap<String, String>,

    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Node {
    fn with_type(node_type: NodeType, node_name: &str, node_value: Option<&str>) -> Self {
        Self {
            node_type,
            node_name: node_name.to_string(),
            node_value: node_value.map(str::to_string),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self::with_type(NodeType::Element, &tag_name.to_lowercase(), None)
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        for (name, value) in attrs {
            node.set_attr(name, value);
        }
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self::with_type(NodeType::Text, "#text", Some(content))
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Self::with_type(NodeType::Comment, "#comment", Some(content))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_type(NodeType::Document, "#document", None)
    }

    /// Create a document fragment node
    pub fn document_fragment() -> Self {
        Self::with_type(NodeType::DocumentFragment, "#document-fragment", None)
    }

    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    pub fn is_comment(&self) -> bool {
        self.node_type == NodeType::Comment
    }

    /// Whether children of this node take part in the walk
    /// (elements, documents and fragments).
    pub fn is_container(&self) -> bool {
        matches!(
            self.node_type,
            NodeType::Element | NodeType::Document | NodeType::DocumentFragment
        )
    }

    /// Get the lowercase tag name, `None` for anything but elements
    pub fn tag_name(&self) -> Option<&str> {
        self.is_element().then_some(self.node_name.as_str())
    }

    /// Character data of a text node; empty for every other node
    pub fn text_value(&self) -> &str {
        if self.is_text() {
            self.node_value.as_deref().unwrap_or("")
        } else {
            ""
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name.to_lowercase().as_str())
            .map(String::as_str)
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Builder-style [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Set an attribute, replacing an existing value of the same name
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes
            .insert(name.to_lowercase(), value.to_string());
    }
}

/// A reference to a node with parent context.
/// This allows the `table > form` check without storing parent pointers.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    /// The node itself
    pub node: &'a Node,
    parent_tag: Option<&'a str>,
}

impl<'a> NodeRef<'a> {
    /// Create a new NodeRef without parent context
    pub fn new(node: &'a Node) -> Self {
        Self {
            node,
            parent_tag: None,
        }
    }

    /// Create a new NodeRef with parent tag context
    pub fn with_parent(node: &'a Node, parent_tag: Option<&'a str>) -> Self {
        Self { node, parent_tag }
    }

    /// Get the parent tag name if known
    pub fn parent_tag(&self) -> Option<&'a str> {
        self.parent_tag
    }

    pub fn tag_name(&self) -> Option<&'a str> {
        self.node.tag_name()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node.attr(name)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.node.has_attr(name)
    }

    pub fn is_text(&self) -> bool {
        self.node.is_text()
    }

    pub fn is_comment(&self) -> bool {
        self.node.is_comment()
    }

    /// Iterate over children, each carrying this node's tag as parent context
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let node = self.node;
        let parent_tag = node.tag_name();
        node.children
            .iter()
            .map(move |child| NodeRef::with_parent(child, parent_tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = Node::element("DIV");
        assert!(node.is_element());
        assert!(node.is_container());
        assert_eq!(node.tag_name(), Some("div"));
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert!(!node.is_container());
        assert_eq!(node.tag_name(), None);
        assert_eq!(node.text_value(), "Hello World");
    }

    #[test]
    fn test_comment_has_no_text_value() {
        let node = Node::comment("not rendered");
        assert!(node.is_comment());
        assert_eq!(node.text_value(), "");
    }

    #[test]
    fn test_node_type_from_u32() {
        assert_eq!(NodeType::from(3), NodeType::Text);
        assert_eq!(NodeType::from(8), NodeType::Comment);
        assert_eq!(NodeType::from(42), NodeType::Element);
    }

    #[test]
    fn test_attributes() {
        let node = Node::element_with_attrs("img", vec![("SRC", "a.png"), ("alt", "")]);
        assert_eq!(node.attr("src"), Some("a.png"));
        assert_eq!(node.attr("Alt"), Some(""));
        assert!(node.has_attr("alt"));
        assert_eq!(node.attr("title"), None);
    }

    #[test]
    fn test_set_attr_replaces() {
        let mut node = Node::element("a");
        node.set_attr("href", "/one");
        node.set_attr("HREF", "/two");
        assert_eq!(node.attributes.len(), 1);
        assert_eq!(node.attr("href"), Some("/two"));
    }

    #[test]
    fn test_node_ref_children_carry_parent() {
        let table = Node::element("table").with_child(Node::element("form"));
        let root = NodeRef::new(&table);
        assert_eq!(root.parent_tag(), None);

        let form = root.children().next().unwrap();
        assert_eq!(form.tag_name(), Some("form"));
        assert_eq!(form.parent_tag(), Some("table"));
    }
}
