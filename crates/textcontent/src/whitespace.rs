//! CSS white-space processing over collected items.
//!
//! Implements phase 1 of <https://drafts.csswg.org/css-text/#white-space-phase-1>
//! and the segment break transform of
//! <https://drafts.csswg.org/css-text/#line-break-transform>, ignoring bidi
//! and language specific rules.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::collect::CollectionItem;

static SPACES_BEFORE_SEGMENT_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+\n").unwrap());
static SPACES_AFTER_SEGMENT_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]+").unwrap());
static MULTIPLE_SEGMENT_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());
static ZWSP_SEGMENT_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new("\n*\u{200B}\n*").unwrap());
static MULTIPLE_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());

/// Collapse consecutive segment breaks, and drop those touching a zero width space.
pub fn segment_break_transformation(s: &str) -> String {
    let s = MULTIPLE_SEGMENT_BREAKS.replace_all(s, "\n");
    ZWSP_SEGMENT_BREAKS.replace_all(&s, "\u{200B}").into_owned()
}

/// Normalize the joined text of one run of adjacent text items.
///
/// Spaces and tabs around line feeds go first, then segment breaks are
/// transformed, tabs and remaining line feeds become spaces, space runs
/// collapse to one and the result is trimmed of spaces (only spaces).
pub fn normalize_run<S: AsRef<str>>(parts: &[S]) -> String {
    let joined: String = parts.iter().map(AsRef::as_ref).collect();

    let s = SPACES_BEFORE_SEGMENT_BREAK.replace_all(&joined, "\n");
    let s = SPACES_AFTER_SEGMENT_BREAK.replace_all(&s, "\n");
    let s = segment_break_transformation(&s);
    let s = s.replace(['\t', '\n'], " ");
    let s = MULTIPLE_SPACES.replace_all(&s, " ");

    s.trim_matches(' ').to_string()
}

/// Normalize every run of text items outside block regions.
///
/// A `BlockBegin` starts a region that is copied through verbatim up to its
/// matching `BlockEnd`, however deeply blocks nest inside it. Outside such
/// regions runs of text are replaced by their [`normalize_run`] result
/// (omitted when empty) and line break markers pass through untouched.
///
/// The same routine serves a single block's items during the walk and the
/// whole sequence once the walk is done.
pub fn normalize_items(items: Vec<CollectionItem>) -> Vec<CollectionItem> {
    let mut output = Vec::with_capacity(items.len());
    let mut run: Vec<String> = Vec::new();
    let mut depth = 0usize;

    for item in items {
        if depth > 0 {
            match item {
                CollectionItem::BlockBegin => depth += 1,
                CollectionItem::BlockEnd => depth -= 1,
                _ => {}
            }
            output.push(item);
            continue;
        }

        match item {
            CollectionItem::Text(text) => run.push(text),
            other => {
                flush_run(&mut run, &mut output);
                if other == CollectionItem::BlockBegin {
                    depth += 1;
                }
                output.push(other);
            }
        }
    }

    flush_run(&mut run, &mut output);
    output
}

fn flush_run(run: &mut Vec<String>, output: &mut Vec<CollectionItem>) {
    if run.is_empty() {
        return;
    }
    let normalized = normalize_run(run.as_slice());
    run.clear();
    if !normalized.is_empty() {
        output.push(CollectionItem::Text(normalized));
    }
}
