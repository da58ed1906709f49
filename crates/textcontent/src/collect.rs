//! Inner text collection steps.
//!
//! Follows <https://html.spec.whatwg.org/multipage/dom.html#inner-text-collection-steps>
//! with rules derived from the default stylesheet instead of computed style.
//! Text is not whitespace-processed here; that happens over runs of items in
//! [`crate::whitespace`].

use tracing::debug;

use crate::node::NodeRef;
use crate::service::TextContentOptions;
use crate::utilities::{image_value, is_block, is_pre_rendered, is_rendered};
use crate::whitespace::normalize_items;
use crate::{Result, TextContentError};

/// One entry of the flat sequence produced by [`collect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionItem {
    /// Literal text, not yet whitespace-processed
    Text(String),
    /// At least this many line feeds are required here
    RequiredLineBreak(usize),
    /// Start of a region the outer whitespace pass must copy verbatim
    BlockBegin,
    /// End of the region opened by the matching `BlockBegin`
    BlockEnd,
}

/// Run the collection steps for `node` and its subtree.
///
/// `pre_mode` is sticky: once a whitespace-preserving element is entered it
/// stays on for the whole subtree. The visibility check is skipped for the
/// root (`is_root`), never for its descendants.
pub fn collect(
    node: NodeRef,
    options: &TextContentOptions,
    pre_mode: bool,
    is_root: bool,
) -> Result<Vec<CollectionItem>> {
    check_contract(&node)?;

    let tag = node.tag_name();
    let pre_mode = pre_mode || is_pre_rendered(tag);

    if !is_root && !is_rendered(&node) {
        return Ok(Vec::new());
    }

    if node.is_text() {
        return Ok(vec![CollectionItem::Text(node.node.text_value().to_string())]);
    }

    let mut items = Vec::new();
    if node.node.is_container() {
        for child in node.children() {
            items.extend(collect(child, options, pre_mode, false)?);
        }
    }

    match tag {
        Some("br") => {
            items = vec![
                CollectionItem::BlockBegin,
                CollectionItem::Text("\n".to_string()),
                CollectionItem::BlockEnd,
            ];
        }
        Some("p") => {
            let count = options.required_line_break_count;
            items.insert(0, CollectionItem::RequiredLineBreak(count));
            items.push(CollectionItem::RequiredLineBreak(count));
        }
        _ => {}
    }

    if let Some(value) = image_value(
        &node,
        options.replace_img,
        options.img_to_src,
        &options.base_url,
    ) {
        items = vec![CollectionItem::Text(format!(" {value} "))];
    }

    if is_block(tag) {
        if !pre_mode {
            items = normalize_items(items);
        }
        let mut wrapped = Vec::with_capacity(items.len() + 4);
        wrapped.push(CollectionItem::BlockBegin);
        wrapped.push(CollectionItem::RequiredLineBreak(1));
        wrapped.append(&mut items);
        wrapped.push(CollectionItem::RequiredLineBreak(1));
        wrapped.push(CollectionItem::BlockEnd);
        items = wrapped;
    }

    Ok(items)
}

/// Text and comment nodes are leaves.
fn check_contract(node: &NodeRef) -> Result<()> {
    let node = node.node;
    if !node.is_container() && !node.children.is_empty() {
        debug!(node_name = %node.node_name, children = node.children.len(), "rejecting malformed node");
        return Err(TextContentError::MalformedNode(format!(
            "{} node must not have children (found {})",
            node.node_name,
            node.children.len()
        )));
    }
    Ok(())
}
