//! Source scanner
//!
//! Pairs each method definition with the run of comment lines directly
//! above it. A run is contiguous: it stops at the first line above that does
//! not start a comment, so a blank line or a line of code separates a
//! definition from unrelated commentary.


use crate::parser::Parse;
use crate::syntax::{DefinitionNode, RawComment};
use rustc_hash::FxHashMap;
use text_size::TextRange;

/// The comment lines directly above one definition, top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRun<'a> {
    pub lines: Vec<&'a str>,
    /// From the start of the topmost comment to the end of the bottommost
    pub range: TextRange,
    /// Start column of the topmost comment
    pub indent: usize,
}

/// Iterate `(definition, run)` pairs in source order.
///
/// Definitions without a comment directly above them are skipped. When
/// several definitions share a line, the run belongs to the first one.
pub fn comment_runs<'p, 'a>(parse: &'p Parse<'a>) -> CommentRuns<'p, 'a> {
    let mut by_line = FxHashMap::default();
    for comment in &parse.comments {
        // Two comments can't start on the same line in valid Ruby; keep the last
        by_line.insert(comment.line, comment);
    }
    CommentRuns {
        definitions: parse.definitions.iter(),
        by_line,
        last_line: None,
    }
}

/// Lazy iterator returned by [`comment_runs`]
pub struct CommentRuns<'p, 'a> {
    definitions: std::slice::Iter<'p, DefinitionNode>,
    by_line: FxHashMap<usize, &'p RawComment<'a>>,
    last_line: Option<usize>,
}

impl<'p, 'a> Iterator for CommentRuns<'p, 'a> {
    type Item = (&'p DefinitionNode, CommentRun<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        for definition in self.definitions.by_ref() {
            if self.last_line.replace(definition.line) == Some(definition.line) {
                continue;
            }
            if let Some(run) = run_above(&self.by_line, definition.line) {
                return Some((definition, run));
            }
        }
        None
    }
}

/// Walk upward from the line above `line` while every line starts a comment
fn run_above<'a>(
    by_line: &FxHashMap<usize, &RawComment<'a>>,
    line: usize,
) -> Option<CommentRun<'a>> {
    let mut collected: Vec<&RawComment<'a>> = Vec::new();
    let mut current = line;
    while let Some(above) = current.checked_sub(1) {
        let Some(&comment) = by_line.get(&above) else {
            break;
        };
        collected.push(comment);
        current = above;
    }

    // Collected bottom-up: the first entry is nearest the definition
    let bottom = collected.first()?;
    let top = collected.last()?;
    Some(CommentRun {
        range: TextRange::new(top.range.start(), bottom.range.end()),
        indent: top.column,
        lines: collected.iter().rev().map(|comment| comment.text).collect(),
    })
}
