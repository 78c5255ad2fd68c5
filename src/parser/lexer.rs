//! Logos-based lexer for Ruby source
//!
//! Lossless tokenization: concatenating the text of every token gives back
//! the input. The lexer is only as precise as the rewriter needs it to be:
//! comments, `def` keywords and everything that could hide either of them
//! (strings, heredocs, regexps, percent literals, `=begin` blocks) are
//! recognized exactly, the rest is coarse punctuation.
//!
//! Ruby's grammar is not regular. The context logos cannot see (whether the
//! previous token ended an operand, which heredocs are waiting for the end of
//! the line) lives in [`LexState`], which [`Lexer`] updates after each token.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use text_size::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let start = self.inner.span().start;
        let offset = TextSize::new(start as u32);

        let kind = match logos_token {
            Ok(t) => to_syntax_kind(t, text, at_line_start(self.inner.source(), start)),
            Err(()) => SyntaxKind::ERROR,
        };
        self.inner.extras.record(kind);

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Context carried between tokens
#[derive(Debug, Clone, Default)]
pub struct LexState {
    /// The previous significant token can end an operand
    after_operand: bool,
    /// The previous significant token was a plain identifier (maybe a call)
    after_ident: bool,
    /// Trivia separates the next token from the previous significant one
    spaced: bool,
    /// Heredocs opened on the current line, in order of appearance
    pending_heredocs: Vec<Heredoc>,
}

impl LexState {
    fn record(&mut self, kind: SyntaxKind) {
        match kind {
            SyntaxKind::WHITESPACE | SyntaxKind::LINE_COMMENT | SyntaxKind::EMBDOC_COMMENT => {
                self.spaced = true;
            }
            SyntaxKind::NEWLINE | SyntaxKind::HEREDOC_BODY => {
                self.spaced = true;
                self.after_operand = false;
                self.after_ident = false;
            }
            _ => {
                self.spaced = false;
                // `def /(other)` and `a./(b)` name a method, they never open a regexp
                self.after_operand = kind.ends_operand()
                    || kind.is_member_access()
                    || kind == SyntaxKind::DEF_KW;
                self.after_ident = kind == SyntaxKind::IDENT;
            }
        }
    }

    /// Whether an ambiguous `/`, `%` or `<<` opens a literal here.
    ///
    /// `next` is the byte right after the ambiguous character. Besides the
    /// plain operand-start position, Ruby reads `puts /x/` as a call with a
    /// regexp argument: an identifier, then a space, then no space.
    fn literal_allowed(&self, next: Option<u8>) -> bool {
        if !self.after_operand {
            return true;
        }
        self.after_ident && self.spaced && next.is_some_and(|b| !b.is_ascii_whitespace())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Heredoc {
    terminator: String,
    /// `<<~` and `<<-` allow the terminator to be indented
    indented: bool,
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(extras = LexState)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\f\x0B]+|\\\r?\n")]
    Whitespace,

    #[token("\n", newline)]
    Newline,

    #[regex(r"#[^\r\n]*", allow_greedy = true)]
    LineComment,

    #[token("=begin", embedded_document)]
    EmbDoc,

    #[token("__END__", data_section)]
    DataSection,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"([a-z_]|[^\x00-\x7F])([A-Za-z0-9_]|[^\x00-\x7F])*[?!]?", allow_greedy = true)]
    Ident,

    #[regex(r"[A-Z]([A-Za-z0-9_]|[^\x00-\x7F])*[?!]?", allow_greedy = true)]
    Constant,

    #[regex(r"@@?[A-Za-z_][A-Za-z0-9_]*")]
    InstanceVar,

    #[regex(r#"\$([A-Za-z_][A-Za-z0-9_]*|[0-9]+|-[A-Za-z0-9_]|[!@&`'+~=/\\,;.<>_*$?:"])"#)]
    GlobalVar,

    #[regex(r":[A-Za-z_][A-Za-z0-9_]*[?!=]?")]
    Symbol,

    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?([eE][+-]?[0-9]+)?[ri]?")]
    #[regex(r"0[xX][0-9a-fA-F_]+|0[bB][01_]+")]
    Number,

    #[token("\"", quoted_string)]
    #[token("'", quoted_string)]
    #[token("`", quoted_string)]
    String,

    // =========================================================================
    // AMBIGUOUS (operator or literal, decided from context)
    // =========================================================================
    #[token("/", slash)]
    Slash,

    #[token("%", percent)]
    Percent,

    #[token("?", question)]
    Question,

    #[token("<<", shift_or_heredoc)]
    Shl,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,
    #[token("&.")]
    AmpDot,
    #[token("..")]
    #[token("...")]
    DotDot,
    #[token(":")]
    Colon,
    #[token("::")]
    ColonColon,
    #[token("=>")]
    FatArrow,
    #[token("->")]
    Arrow,

    #[token("<<=")]
    #[regex(r"===?|=~|!=|!~|<=>|<=|>=|>>=?|\*\*=?|&&=?|\|\|=?|[-+*&|^]=|[=!<>+\-*&|^~]")]
    Operator,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("def")]
    DefKw,
}

/// Convert a Logos token to a SyntaxKind.
///
/// The ambiguous tokens share one logos variant between their operator and
/// literal readings; the callback only bumps past the literal body, so the
/// token text tells them apart.
fn to_syntax_kind(token: LogosToken, text: &str, line_start: bool) -> SyntaxKind {
    use LogosToken::*;
    match token {
        Whitespace => SyntaxKind::WHITESPACE,
        Newline if text.len() > 1 => SyntaxKind::HEREDOC_BODY,
        Newline => SyntaxKind::NEWLINE,
        LineComment => SyntaxKind::LINE_COMMENT,
        EmbDoc if line_start => SyntaxKind::EMBDOC_COMMENT,
        EmbDoc => SyntaxKind::OPERATOR,
        DataSection if text.len() > "__END__".len() => SyntaxKind::DATA_SECTION,
        DataSection => SyntaxKind::IDENT,

        Ident => SyntaxKind::IDENT,
        Constant => SyntaxKind::CONSTANT,
        InstanceVar => SyntaxKind::IVAR,
        GlobalVar => SyntaxKind::GVAR,
        Symbol => SyntaxKind::SYMBOL,
        Number => SyntaxKind::NUMBER,
        String => SyntaxKind::STRING,

        Slash if text == "/" || text == "/=" => SyntaxKind::OPERATOR,
        Slash => SyntaxKind::REGEX,
        Percent if text == "%" || text == "%=" => SyntaxKind::OPERATOR,
        Percent if text.starts_with("%r") => SyntaxKind::REGEX,
        Percent => SyntaxKind::STRING,
        Question if text == "?" => SyntaxKind::QUESTION,
        Question => SyntaxKind::CHAR,
        Shl if text == "<<" => SyntaxKind::SHL,
        Shl => SyntaxKind::HEREDOC_START,

        LParen => SyntaxKind::L_PAREN,
        RParen => SyntaxKind::R_PAREN,
        LBracket => SyntaxKind::L_BRACKET,
        RBracket => SyntaxKind::R_BRACKET,
        LBrace => SyntaxKind::L_BRACE,
        RBrace => SyntaxKind::R_BRACE,
        Comma => SyntaxKind::COMMA,
        Semicolon => SyntaxKind::SEMICOLON,
        Dot => SyntaxKind::DOT,
        AmpDot => SyntaxKind::AMP_DOT,
        DotDot => SyntaxKind::DOT_DOT,
        Colon => SyntaxKind::COLON,
        ColonColon => SyntaxKind::COLON_COLON,
        FatArrow => SyntaxKind::FAT_ARROW,
        Arrow => SyntaxKind::ARROW,
        Operator => SyntaxKind::OPERATOR,

        DefKw => SyntaxKind::DEF_KW,
    }
}

type LogosLexer<'a> = logos::Lexer<'a, LogosToken>;

fn at_line_start(source: &str, offset: usize) -> bool {
    offset == 0 || source.as_bytes().get(offset - 1) == Some(&b'\n')
}

// =============================================================================
// CALLBACKS
// =============================================================================

/// Consume the bodies of heredocs opened on the line this newline ends.
fn newline(lex: &mut LogosLexer<'_>) -> bool {
    if lex.extras.pending_heredocs.is_empty() {
        return true;
    }
    let pending = std::mem::take(&mut lex.extras.pending_heredocs);
    let rest = lex.remainder();
    let mut consumed = 0;
    for heredoc in &pending {
        consumed += heredoc_body_len(&rest[consumed..], heredoc);
    }
    // Leave the terminator's own newline to be lexed normally
    if rest[..consumed].ends_with('\n') {
        consumed -= 1;
    }
    lex.bump(consumed);
    true
}

/// `=begin` at the start of a line opens a block comment running through
/// the next line starting with `=end`. An unterminated block runs to the end
/// of input.
fn embedded_document(lex: &mut LogosLexer<'_>) -> bool {
    if !at_line_start(lex.source(), lex.span().start) {
        return true;
    }
    let rest = lex.remainder();
    let mut len = 0;
    let mut lines = rest.split_inclusive('\n');
    if let Some(first) = lines.next() {
        len += first.len();
    }
    for line in lines {
        let is_end = line
            .strip_prefix("=end")
            .is_some_and(|tail| tail.is_empty() || tail.starts_with(char::is_whitespace));
        if is_end {
            len += line.trim_end_matches('\n').len();
            break;
        }
        len += line.len();
    }
    lex.bump(len);
    true
}

/// `__END__` alone on its line ends the program; the rest is data.
fn data_section(lex: &mut LogosLexer<'_>) -> bool {
    let rest = lex.remainder();
    let ends_line = rest.is_empty() || rest.starts_with('\n') || rest.starts_with("\r\n");
    if at_line_start(lex.source(), lex.span().start) && ends_line {
        lex.bump(rest.len());
    }
    true
}

fn quoted_string(lex: &mut LogosLexer<'_>) -> bool {
    let quote = lex.slice().as_bytes()[0];
    close_quoted(lex, None, quote, quote != b'\'')
}

fn slash(lex: &mut LogosLexer<'_>) -> bool {
    let next = lex.remainder().as_bytes().first().copied();
    if !lex.extras.literal_allowed(next) {
        if next == Some(b'=') {
            lex.bump(1);
        }
        return true;
    }
    let closed = close_quoted(lex, None, b'/', true);
    if closed {
        bump_regex_flags(lex);
    }
    closed
}

fn percent(lex: &mut LogosLexer<'_>) -> bool {
    let rest = lex.remainder().as_bytes();
    if !lex.extras.literal_allowed(rest.first().copied()) {
        if rest.first() == Some(&b'=') {
            lex.bump(1);
        }
        return true;
    }

    let kind = rest.first().copied().filter(|b| b"qQwWiIrsx".contains(b));
    let kind_len = usize::from(kind.is_some());
    let Some(&delimiter) = rest.get(kind_len) else {
        return true;
    };
    if !delimiter.is_ascii_punctuation() {
        return true;
    }

    let (open, close) = match delimiter {
        b'(' => (Some(b'('), b')'),
        b'[' => (Some(b'['), b']'),
        b'{' => (Some(b'{'), b'}'),
        b'<' => (Some(b'<'), b'>'),
        other => (None, other),
    };
    let interpolates = matches!(kind, None | Some(b'Q' | b'W' | b'I' | b'r' | b'x'));

    lex.bump(kind_len + 1);
    let closed = close_quoted(lex, open, close, interpolates);
    if closed && kind == Some(b'r') {
        bump_regex_flags(lex);
    }
    closed
}

/// `?a` is a character literal only where an operand may start and when no
/// identifier character follows it (`?ab` is a ternary).
fn question(lex: &mut LogosLexer<'_>) -> bool {
    if lex.extras.after_operand {
        return true;
    }
    let mut chars = lex.remainder().chars();
    let len = match chars.next() {
        Some('\\') => 1 + chars.next().map_or(0, char::len_utf8),
        Some(c) if c.is_whitespace() => 0,
        Some(c) if is_ident_char(c) && chars.next().is_some_and(is_ident_char) => 0,
        Some(c) => c.len_utf8(),
        None => 0,
    };
    lex.bump(len);
    true
}

fn shift_or_heredoc(lex: &mut LogosLexer<'_>) -> bool {
    let rest = lex.remainder();
    if !lex.extras.literal_allowed(rest.as_bytes().first().copied()) {
        return true;
    }
    if let Some((len, heredoc)) = heredoc_opener(rest) {
        lex.bump(len);
        lex.extras.pending_heredocs.push(heredoc);
    }
    true
}

// =============================================================================
// SCANNING HELPERS
// =============================================================================

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn close_quoted(lex: &mut LogosLexer<'_>, open: Option<u8>, close: u8, interpolates: bool) -> bool {
    match quoted_len(lex.remainder(), open, close, interpolates) {
        Some(len) => {
            lex.bump(len);
            true
        }
        None => {
            let len = lex.remainder().len();
            lex.bump(len);
            false
        }
    }
}

fn bump_regex_flags(lex: &mut LogosLexer<'_>) {
    let flags = lex
        .remainder()
        .bytes()
        .take_while(|b| b"imxounse".contains(b))
        .count();
    lex.bump(flags);
}

/// Length of a quoted body up to and including its closing delimiter.
///
/// `rest` starts right after the opening delimiter. `open` is set for
/// bracket pairs, which nest. Returns `None` when the literal is unterminated.
fn quoted_len(rest: &str, open: Option<u8>, close: u8, interpolates: bool) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'\\' {
            i += 2;
            continue;
        }
        if interpolates && b == b'#' && bytes.get(i + 1) == Some(&b'{') {
            i += 2 + interpolation_len(&rest[i + 2..])?;
            continue;
        }
        if Some(b) == open {
            depth += 1;
        } else if b == close {
            if depth == 0 {
                return Some(i + 1);
            }
            depth -= 1;
        }
        i += 1;
    }
    None
}

/// Length of a `#{...}` body up to and including the closing brace.
fn interpolation_len(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' if depth == 0 => return Some(i + 1),
            b'}' => depth -= 1,
            quote @ (b'"' | b'`') => {
                i += 1 + quoted_len(&rest[i + 1..], None, quote, true)?;
                continue;
            }
            b'\'' => {
                i += 1 + quoted_len(&rest[i + 1..], None, b'\'', false)?;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Parse the part of a heredoc opener after `<<`: `~ID`, `-"ID"`, `ID`, ...
fn heredoc_opener(rest: &str) -> Option<(usize, Heredoc)> {
    let bytes = rest.as_bytes();
    let indented = matches!(bytes.first(), Some(b'~' | b'-'));
    let i = usize::from(indented);

    let (terminator, len) = match *bytes.get(i)? {
        quote @ (b'\'' | b'"' | b'`') => {
            let body = &rest[i + 1..];
            let close = body.find(char::from(quote))?;
            let terminator = &body[..close];
            if terminator.contains('\n') {
                return None;
            }
            (terminator, i + 1 + close + 1)
        }
        b if b.is_ascii_alphabetic() || b == b'_' => {
            let ident_len = bytes[i..]
                .iter()
                .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
                .count();
            (&rest[i..i + ident_len], i + ident_len)
        }
        _ => return None,
    };

    Some((
        len,
        Heredoc {
            terminator: terminator.to_owned(),
            indented,
        },
    ))
}

/// Length of a heredoc body through the end of its terminator line,
/// newline included. An unterminated body runs to the end of input.
fn heredoc_body_len(rest: &str, heredoc: &Heredoc) -> usize {
    let mut len = 0;
    for line in rest.split_inclusive('\n') {
        len += line.len();
        let content = line.trim_end_matches(['\n', '\r']);
        let content = if heredoc.indented {
            content.trim_start()
        } else {
            content
        };
        if content == heredoc.terminator {
            break;
        }
    }
    len
}
