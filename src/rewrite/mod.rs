//! Replacement engine
//!
//! Collects edits against the original text and applies them in one pass.
//! Every range refers to the original buffer, so edits can be added in any
//! order without tracking how earlier edits shifted later offsets.

use std::cmp::Reverse;
use text_size::{TextRange, TextSize};

/// One pending edit: replace `range` of the original text with `text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub range: TextRange,
    pub text: String,
}

/// Accumulates non-overlapping edits against one source text
#[derive(Debug, Clone)]
pub struct Replacer<'a> {
    source: &'a str,
    edits: Vec<Edit>,
}

impl<'a> Replacer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            edits: Vec::new(),
        }
    }

    /// Queue a replacement. `range` must lie on char boundaries of the source
    /// and must not overlap any other queued range.
    pub fn add(&mut self, range: TextRange, text: impl Into<String>) {
        debug_assert!(
            range.end() <= TextSize::of(self.source),
            "edit {range:?} past end of source"
        );
        self.edits.push(Edit {
            range,
            text: text.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Apply every queued edit and return the new text
    pub fn execute(mut self) -> String {
        // Back to front: splicing an edit never moves the offsets of the
        // edits still to apply
        self.edits
            .sort_by_key(|edit| (Reverse(edit.range.end()), Reverse(edit.range.start())));
        debug_assert!(
            self.edits
                .windows(2)
                .all(|pair| pair[1].range.end() <= pair[0].range.start()),
            "overlapping edits"
        );

        let mut output = self.source.to_string();
        for edit in &self.edits {
            output.replace_range(std::ops::Range::<usize>::from(edit.range), &edit.text);
        }
        output
    }
}
