//! Definition and comment extraction for Ruby
//!
//! A single pass over the token stream. No tree is built: the rewriter only
//! needs the ordered `def` sites and the ordered comment list, with their
//! lines and offsets.

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use crate::base::LineIndex;
use crate::syntax::{DefinitionNode, RawComment};
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

/// Parse result: definitions and comments in source order, plus any errors
#[derive(Debug, Clone)]
pub struct Parse<'a> {
    pub definitions: Vec<DefinitionNode>,
    pub comments: Vec<RawComment<'a>>,
    pub errors: Vec<SyntaxError>,
}

impl Parse<'_> {
    /// Check if lexing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A lexing error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// Parse Ruby source into its definitions and comments
pub fn parse(input: &str) -> Parse<'_> {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(input, &tokens);
    parser.parse_source_file();
    parser.finish()
}

/// The parser state
struct Parser<'t, 'a> {
    source: &'a str,
    tokens: &'t [Token<'a>],
    pos: usize,
    line_index: LineIndex,
    /// Kind of the last non-trivia token
    last_significant: Option<SyntaxKind>,
    definitions: Vec<DefinitionNode>,
    comments: Vec<RawComment<'a>>,
    errors: Vec<SyntaxError>,
}

impl<'t, 'a> Parser<'t, 'a> {
    fn new(source: &'a str, tokens: &'t [Token<'a>]) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            line_index: LineIndex::new(source),
            last_significant: None,
            definitions: Vec::new(),
            comments: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse<'a> {
        Parse {
            definitions: self.definitions,
            comments: self.comments,
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&'t Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn nth_kind(&self, n: usize) -> Option<SyntaxKind> {
        self.tokens.get(self.pos + n).map(|t| t.kind)
    }

    // =========================================================================
    // Source file
    // =========================================================================

    fn parse_source_file(&mut self) {
        while let Some(token) = self.current() {
            match token.kind {
                SyntaxKind::LINE_COMMENT | SyntaxKind::EMBDOC_COMMENT => self.comment(token),
                SyntaxKind::DEF_KW if self.at_definition() => self.definition(token),
                SyntaxKind::ERROR => self.error(token),
                _ => {}
            }
            if !token.kind.is_trivia() {
                self.last_significant = Some(token.kind);
            }
            self.pos += 1;
        }
    }

    /// `def` opens a definition unless it is a method call (`obj.def`) or a
    /// hash label (`def: 1`).
    fn at_definition(&self) -> bool {
        if self.last_significant.is_some_and(SyntaxKind::is_member_access) {
            return false;
        }
        self.nth_kind(1) != Some(SyntaxKind::COLON)
    }

    fn comment(&mut self, token: &Token<'a>) {
        let position = self.line_index.position(token.offset);
        self.comments.push(RawComment {
            text: token.text,
            line: position.line,
            column: position.column,
            range: token_range(token),
        });
    }

    fn definition(&mut self, keyword: &Token<'a>) {
        let name = self.method_name();
        let line = self.line_index.position(keyword.offset).line;
        self.definitions.push(DefinitionNode::new(name, line));
    }

    /// The method name after `def`: every token up to the parameter list or
    /// the first trivia, so operator names like `[]=` stay whole. A receiver
    /// prefix (`self.`) is dropped.
    fn method_name(&self) -> SmolStr {
        let mut start = self.pos + 1;
        while self
            .tokens
            .get(start)
            .is_some_and(|t| t.kind == SyntaxKind::WHITESPACE)
        {
            start += 1;
        }

        let mut end = start;
        while let Some(token) = self.tokens.get(end) {
            if token.kind.is_trivia()
                || matches!(token.kind, SyntaxKind::L_PAREN | SyntaxKind::SEMICOLON)
            {
                break;
            }
            end += 1;
        }

        if end == start {
            return SmolStr::default();
        }
        let range = TextRange::new(
            self.tokens[start].offset,
            token_range(&self.tokens[end - 1]).end(),
        );
        let full = &self.source[range];
        SmolStr::new(full.rsplit('.').next().unwrap_or(full))
    }

    fn error(&mut self, token: &Token<'a>) {
        let message = match token.text.as_bytes().first() {
            Some(b'"' | b'\'' | b'`') => "unterminated string literal",
            Some(b'/') => "unterminated regexp literal",
            Some(b'%') => "unterminated percent literal",
            _ => "unrecognized input",
        };
        self.errors.push(SyntaxError::new(message, token_range(token)));
    }
}

fn token_range(token: &Token<'_>) -> TextRange {
    TextRange::at(token.offset, TextSize::of(token.text))
}
