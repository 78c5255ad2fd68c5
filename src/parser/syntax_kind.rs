//! Syntax kinds for the Ruby token stream
//!
//! The rewriter only needs to know where comments and method definitions
//! are, so the kinds stay coarse: everything that can hide a `#` or a `def`
//! (strings, heredocs, regexps, percent literals) gets its own kind, the rest
//! is punctuation and identifiers.

/// All token kinds produced by the Ruby lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments)
    // =========================================================================
    WHITESPACE = 0,
    NEWLINE,
    LINE_COMMENT,       // # ...
    EMBDOC_COMMENT,     // =begin ... =end
    DATA_SECTION,       // __END__ and everything after it

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,              // foo, foo?, foo!
    CONSTANT,           // Foo
    IVAR,               // @foo, @@foo
    GVAR,               // $foo, $!
    SYMBOL,             // :foo
    NUMBER,             // 42, 0x2a, 1.5e3
    STRING,             // "..", '..', `..`, %w[..]
    REGEX,              // /../i, %r{..}
    CHAR,               // ?a
    HEREDOC_START,      // <<~EOS
    HEREDOC_BODY,       // the lines between a heredoc start and its terminator

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_PAREN,            // (
    R_PAREN,            // )
    L_BRACKET,          // [
    R_BRACKET,          // ]
    L_BRACE,            // {
    R_BRACE,            // }
    COMMA,              // ,
    SEMICOLON,          // ;
    DOT,                // .
    AMP_DOT,            // &.
    DOT_DOT,            // .. and ...
    COLON,              // :
    COLON_COLON,        // ::
    FAT_ARROW,          // =>
    ARROW,              // ->
    QUESTION,           // ?
    SHL,                // <<
    OPERATOR,           // every other operator

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    DEF_KW,

    ERROR,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::NEWLINE | Self::LINE_COMMENT | Self::EMBDOC_COMMENT
        )
    }

    /// Check if this is a comment token
    pub fn is_comment(self) -> bool {
        matches!(self, Self::LINE_COMMENT | Self::EMBDOC_COMMENT)
    }

    /// Check if a token of this kind can end an operand.
    ///
    /// After an operand `/`, `%`, `?` and `<<` are binary operators; anywhere
    /// else they open a literal.
    pub fn ends_operand(self) -> bool {
        matches!(
            self,
            Self::IDENT
                | Self::CONSTANT
                | Self::IVAR
                | Self::GVAR
                | Self::SYMBOL
                | Self::NUMBER
                | Self::STRING
                | Self::REGEX
                | Self::CHAR
                | Self::HEREDOC_START
                | Self::R_PAREN
                | Self::R_BRACKET
                | Self::R_BRACE
        )
    }

    /// Check if this token introduces a method name (`a.b`, `a&.b`, `A::b`)
    pub fn is_member_access(self) -> bool {
        matches!(self, Self::DOT | Self::AMP_DOT | Self::COLON_COLON)
    }
}
