//! Foundation types for the rewriter.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineIndex`], [`Position`] - Line/column conversion
//! - Dialect constants shared by the annotation parser and the converter
//!
//! This module has NO dependencies on other crate modules.

mod position;

pub use position::{LineIndex, Position};

// Re-export text-size types for convenience
pub use text_size::{self, TextRange, TextSize};

/// Substring whose presence means a file may contain YARD tags at all.
pub const ANNOTATION_MARKER: &str = "# @";

/// Character introducing a tag inside a comment line.
pub const TAG_SIGIL: char = '@';

/// Placeholder type for unspecified container element types.
pub const WILDCARD_TYPE: &str = "untyped";
