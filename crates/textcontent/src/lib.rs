//! # textcontent
//!
//! Extract the rendered text of an HTML element tree, the way a browser's
//! `innerText` would expose it.
//!
//! The inner text collection steps from the HTML standard are followed
//! closely, with two simplifications: no CSS is computed (rules come from the
//! default stylesheet), and whitespace is processed over runs of text rather
//! than per layout box.
//!
//! ## Design
//!
//! Extraction is a pure pipeline over a read-only [`Node`] tree:
//!
//! ```text
//! Node tree ──collect──▶ items ──normalize──▶ items ──finalize──▶ String
//! ```
//!
//! Any HTML parser can convert its output to [`Node`]; a `scraper` adapter
//! is bundled behind the default `html` feature.
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use textcontent::{Node, TextContentService};
//!
//! let service = TextContentService::new();
//!
//! let mut p = Node::element("p");
//! p.add_child(Node::text("  Hello   World "));
//!
//! assert_eq!(service.text_content(&p).unwrap(), "Hello World");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use textcontent::TextContentService;
//!
//! let service = TextContentService::new();
//! let text = service.text_content_html("<p>Lipsum</p><p>More</p>").unwrap();
//! assert_eq!(text, "Lipsum\nMore");
//! ```

pub mod collect;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod service;
pub mod utilities;
pub mod whitespace;

pub use collect::{collect, CollectionItem};
#[cfg(feature = "html")]
pub use html::{parse_document, parse_html, select};
pub use node::{Node, NodeRef, NodeType};
pub use service::{extract_text, TextContentOptions, TextContentService};
pub use utilities::{image_value, is_rendered, try_urljoin};
pub use whitespace::{normalize_items, normalize_run};

/// Error type for text extraction
#[derive(Debug, thiserror::Error)]
pub enum TextContentError {
    #[error("Malformed node: {0}")]
    MalformedNode(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}

pub type Result<T> = std::result::Result<T, TextContentError>;
