//! Ruby source parser
//!
//! Just enough of Ruby to find method definitions and the comments around
//! them:
//! - **logos** for fast, lossless lexing of comments, literals and `def`
//! - a single extraction pass producing definitions and comments in source order
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos + LexState) → Tokens with SyntaxKind
//!     ↓
//! Parser → Parse { definitions, comments, errors }
//! ```

#[allow(clippy::module_inception)]
mod parser;

mod lexer;
mod syntax_kind;

pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, SyntaxError, parse};
pub use syntax_kind::SyntaxKind;
