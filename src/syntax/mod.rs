//! Syntax: the definition and comment descriptors extracted from Ruby source.
//!
//! These are plain values owned by a [`crate::parser::Parse`]. Comments borrow
//! their text from the source buffer; nothing here is mutated after parsing.

use smol_str::SmolStr;
use text_size::TextRange;

/// A method definition site (`def name`, `def self.name`, `def ==(other)`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionNode {
    /// Method name without any `self.` / receiver prefix
    pub name: SmolStr,
    /// 0-based line of the `def` keyword
    pub line: usize,
}

impl DefinitionNode {
    pub fn new(name: impl Into<SmolStr>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
        }
    }
}

/// One comment token: a `#` line comment or a whole `=begin`/`=end` block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawComment<'a> {
    /// Comment text, `#` included, line terminator excluded
    pub text: &'a str,
    /// 0-based line the comment starts on
    pub line: usize,
    /// Byte column the comment starts at
    pub column: usize,
    pub range: TextRange,
}
