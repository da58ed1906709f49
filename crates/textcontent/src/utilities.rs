//! Tag tables and small helpers used by the collection steps.
//!
//! The tables approximate the user-agent default stylesheet from
//! <https://html.spec.whatwg.org/multipage/rendering.html>; no CSS is parsed.

use tracing::debug;
use url::Url;

use crate::node::NodeRef;

/// Elements that are `display: none` in the default stylesheet
pub const NEVER_RENDERED_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "datalist", "head", "link", "meta", "noembed",
    "noframes", "param", "rp", "script", "source", "style", "template", "track",
    "title",
];

/// Elements whose default `white-space` preserves literal whitespace
pub const PRE_RENDERED_ELEMENTS: &[&str] = &["listing", "plaintext", "pre", "xmp"];

/// Block-level HTML elements
pub const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "details", "dialog", "dd",
    "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "hgroup", "hr", "li", "main",
    "nav", "ol", "p", "pre", "section", "table", "ul",
];

/// Parents under which a `form` is not rendered
pub const FORM_HIDING_PARENTS: &[&str] = &["table", "thead", "tbody", "tfoot", "tr"];

fn tag_in(tag: Option<&str>, table: &[&str]) -> bool {
    tag.is_some_and(|t| table.contains(&t))
}

/// Check if a tag preserves whitespace by default
pub fn is_pre_rendered(tag: Option<&str>) -> bool {
    tag_in(tag, PRE_RENDERED_ELEMENTS)
}

/// Check if a tag is a block-level element
pub fn is_block(tag: Option<&str>) -> bool {
    tag_in(tag, BLOCK_ELEMENTS)
}

/// Decide if a node is rendered under the default stylesheet.
pub fn is_rendered(node: &NodeRef) -> bool {
    if node.is_comment() {
        return false;
    }

    let tag = node.tag_name();
    match tag {
        // dialog:not([open])
        Some("dialog") if !node.has_attr("open") => return false,
        // :matches(table, thead, tbody, tfoot, tr) > form
        Some("form") if tag_in(node.parent_tag(), FORM_HIDING_PARENTS) => return false,
        _ => {}
    }

    // [hidden]
    if node.has_attr("hidden") {
        return false;
    }

    !tag_in(tag, NEVER_RENDERED_ELEMENTS)
}

/// Resolve `url` against `base`.
///
/// Absolute `http(s)://` URLs are returned as-is. A base or URL that cannot be
/// joined yields `url` unchanged.
pub fn try_urljoin(base: &str, url: &str) -> String {
    if url.starts_with("https://") || url.starts_with("http://") {
        return url.to_string();
    }

    match Url::parse(base).and_then(|base| base.join(url)) {
        Ok(joined) => joined.to_string(),
        Err(err) => {
            debug!(base, url, %err, "could not resolve url, keeping it unchanged");
            url.to_string()
        }
    }
}

/// Replacement text for an `img` element.
///
/// Prefers `alt`; falls back to `src` resolved against `base_url` when
/// `img_to_src` is set. Returns `None` for anything that is not an `img`, or
/// when `replace_img` is off.
pub fn image_value(
    node: &NodeRef,
    replace_img: bool,
    img_to_src: bool,
    base_url: &str,
) -> Option<String> {
    if !replace_img || node.tag_name() != Some("img") {
        return None;
    }

    if let Some(alt) = node.attr("alt") {
        return Some(alt.to_string());
    }

    if img_to_src {
        return node.attr("src").map(|src| try_urljoin(base_url, src));
    }

    None
}
