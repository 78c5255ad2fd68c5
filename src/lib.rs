//! # yard-rbs-inline
//!
//! Rewrites YARD type tags in Ruby method comments (`# @param [Type] name`,
//! `# @return [Type]`) into rbs-inline annotations (`# @rbs name: Type`,
//! `# @rbs return: Type`). Everything outside the rewritten comment runs is
//! left byte-identical.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! convert    → Whole-file pipeline, options, batch helper
//!   ↓
//! rewrite    → Offset-stable replacement engine
//!   ↓
//! annotation → Tag classification, emission policy, type transcoding
//!   ↓
//! scan       → Comment runs directly above each definition
//!   ↓
//! parser     → Logos lexer, definition/comment extraction
//!   ↓
//! syntax     → DefinitionNode, RawComment
//!   ↓
//! base       → Primitives (TextRange, LineIndex, dialect constants)
//! ```
//!
//! ## Example
//!
//! ```
//! let source = "# @param [String] name\ndef greet(name); end\n";
//! let converted = yard_rbs::convert(source).unwrap();
//! assert_eq!(converted, "# @rbs name: String\ndef greet(name); end\n");
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → parser → scan → annotation → rewrite → convert)
// ============================================================================

/// Foundation types: TextRange, LineIndex, dialect constants
pub mod base;

/// Syntax: definition and comment descriptors
pub mod syntax;

/// Parser: Logos lexer and extraction pass
pub mod parser;

/// Source scanner: comment runs above definitions
pub mod scan;

/// Annotation parser and type transcoder
pub mod annotation;

/// Replacement engine
pub mod rewrite;

/// Converter: the public pipeline
pub mod convert;

mod error;

// Re-export the conversion API
pub use annotation::ForeignTagPolicy;
pub use convert::{ConvertOptions, Converter, convert, convert_batch};
pub use error::ConvertError;

// Re-export foundation types
pub use base::{LineIndex, Position, TextRange, TextSize};
